//! Execute stage.
//!
//! Computes an instruction's primary result value from the decoded fields
//! and the register snapshot. The stage mutates nothing; the meaning of the
//! result is opcode-dependent (ALU result, branch displacement, effective
//! address, or return address).
//!
//! All arithmetic is modular 32-bit. This architecture variant uses the
//! "unsigned" wraparound forms exclusively, so no overflow trap exists.

use crate::common::constants::WORD_BYTES;
use crate::core::stages::RegSnapshot;
use crate::isa::instruction::{IOp, Instruction, JOp, RFunct};

/// Bit mask recovering the raw 16-bit immediate from its sign-extended form.
const IMM_ZERO_EXT_MASK: i32 = 0xFFFF;

/// Computes the result value of a decoded instruction.
///
/// # Arguments
///
/// * `inst` - The decoded instruction.
/// * `snapshot` - Source-register values captured at decode time.
/// * `pc` - Address of the instruction; only `jal` consumes it.
pub fn execute(inst: &Instruction, snapshot: &RegSnapshot, pc: u32) -> i32 {
    match *inst {
        Instruction::R { funct, shamt, .. } => match funct {
            RFunct::Addu => snapshot.rs.wrapping_add(snapshot.rt),
            RFunct::Subu => snapshot.rs.wrapping_sub(snapshot.rt),
            RFunct::And => snapshot.rs & snapshot.rt,
            RFunct::Or => snapshot.rs | snapshot.rt,
            RFunct::Slt => i32::from(snapshot.rs < snapshot.rt),
            // Shifts operate on rt; srl is logical, so it shifts as u32.
            RFunct::Sll => ((snapshot.rt as u32) << shamt) as i32,
            RFunct::Srl => ((snapshot.rt as u32) >> shamt) as i32,
            RFunct::Jr => snapshot.rs,
        },
        Instruction::I { op, imm, .. } => match op {
            IOp::Addiu => snapshot.rs.wrapping_add(imm),
            IOp::Andi => snapshot.rs & (imm & IMM_ZERO_EXT_MASK),
            IOp::Ori => snapshot.rs | (imm & IMM_ZERO_EXT_MASK),
            IOp::Beq => {
                if snapshot.rs == snapshot.rt {
                    imm << 2
                } else {
                    0
                }
            }
            IOp::Bne => {
                if snapshot.rs == snapshot.rt {
                    0
                } else {
                    imm << 2
                }
            }
            IOp::Lui => imm << 16,
            IOp::Lw | IOp::Sw => snapshot.rs.wrapping_add(imm),
        },
        Instruction::J { op, .. } => match op {
            JOp::Jal => pc.wrapping_add(WORD_BYTES) as i32,
            JOp::J => 0,
        },
    }
}
