//! Instruction Disassembler.
//!
//! Converts a decoded instruction into its canonical one-line mnemonic form
//! for debug tracing, logging, and test diagnostics. Operands are printed as
//! register-index numbers (`$3`), decimal immediates, and hexadecimal
//! absolute addresses; branch displacements are resolved against the
//! instruction's own address.
//!
//! # Usage
//!
//! ```ignore
//! use mipsim_core::isa::decode::decode;
//! use mipsim_core::isa::disasm::disassemble;
//! let inst = decode(0x00221821).unwrap(); // addu $3, $1, $2
//! assert_eq!(disassemble(&inst, 0x0040_0000), "addu\t$3, $1, $2");
//! ```

use crate::common::constants::WORD_BYTES;
use crate::isa::instruction::{jump_target, IOp, Instruction, RFunct};

/// Resolves a branch displacement to the absolute target address.
///
/// The displacement is in instruction words, relative to the sequentially
/// advanced PC (no delay slot is modeled).
#[inline]
pub fn branch_target(pc: u32, imm: i32) -> u32 {
    pc.wrapping_add(WORD_BYTES).wrapping_add((imm << 2) as u32)
}

/// Disassembles a decoded instruction into a human-readable string.
///
/// # Arguments
///
/// * `inst` - The decoded instruction.
/// * `pc` - Address of the instruction, used to resolve branch targets.
pub fn disassemble(inst: &Instruction, pc: u32) -> String {
    match *inst {
        Instruction::R {
            funct,
            rs,
            rt,
            rd,
            shamt,
        } => match funct {
            RFunct::Jr => format!("jr\t${rs}"),
            RFunct::Sll | RFunct::Srl => {
                format!("{}\t${rd}, ${rt}, {shamt}", funct.mnemonic())
            }
            RFunct::Addu | RFunct::Subu | RFunct::And | RFunct::Or | RFunct::Slt => {
                format!("{}\t${rd}, ${rs}, ${rt}", funct.mnemonic())
            }
        },
        Instruction::I { op, rs, rt, imm } => match op {
            IOp::Beq | IOp::Bne => {
                format!(
                    "{}\t${rs}, ${rt}, {:#010x}",
                    op.mnemonic(),
                    branch_target(pc, imm)
                )
            }
            IOp::Lui => format!("lui\t${rt}, {imm}"),
            IOp::Lw | IOp::Sw => format!("{}\t${rt}, {imm}(${rs})", op.mnemonic()),
            IOp::Addiu | IOp::Andi | IOp::Ori => {
                format!("{}\t${rt}, ${rs}, {imm}", op.mnemonic())
            }
        },
        Instruction::J { op, target } => {
            format!("{}\t{:#010x}", op.mnemonic(), jump_target(target))
        }
    }
}
