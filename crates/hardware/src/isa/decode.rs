//! Instruction Decoder.
//!
//! This module classifies raw 32-bit words into the three supported
//! instruction shapes and extracts their typed fields. Opcode 0 selects the
//! R-shape via the funct table; the remaining supported opcodes select I- or
//! J-shape operations directly. Unsupported encodings and the reserved
//! all-zero word fail with a [`DecodeError`] - there is no
//! illegal-instruction recovery.

use crate::common::error::DecodeError;
use crate::isa::instruction::{IOp, Instruction, InstructionBits, JOp, RFunct};
use crate::isa::opcodes;

/// Total width of an instruction word in bits.
const INSTRUCTION_WIDTH: u32 = 32;

/// Width of the I-shape immediate field in bits.
const IMM_BITS: u32 = 16;

/// Decodes a raw 32-bit word into a typed [`Instruction`].
///
/// # Arguments
///
/// * `word` - The raw instruction word fetched from memory.
///
/// # Errors
///
/// Returns a [`DecodeError`] for the reserved all-zero word, an opcode
/// outside the supported sets, or an R-shape funct outside the supported
/// table. All decode failures are fatal to the simulation.
pub fn decode(word: u32) -> Result<Instruction, DecodeError> {
    if word == 0 {
        return Err(DecodeError::ReservedWord);
    }

    let opcode = word.op();

    if opcode == opcodes::OP_RTYPE {
        let funct = RFunct::from_funct(word.funct()).ok_or(DecodeError::UnknownFunct {
            word,
            funct: word.funct(),
        })?;
        return Ok(Instruction::R {
            funct,
            rs: word.rs(),
            rt: word.rt(),
            rd: word.rd(),
            shamt: word.shamt(),
        });
    }

    if let Some(op) = JOp::from_opcode(opcode) {
        return Ok(Instruction::J {
            op,
            target: word.target(),
        });
    }

    if let Some(op) = IOp::from_opcode(opcode) {
        return Ok(Instruction::I {
            op,
            rs: word.rs(),
            rt: word.rt(),
            imm: sign_extend(word.imm16(), IMM_BITS),
        });
    }

    Err(DecodeError::UnknownOpcode { word, opcode })
}

/// Sign extends a value of `bits` width to a 32-bit signed integer.
///
/// # Arguments
///
/// * `val` - The value to extend.
/// * `bits` - The number of valid bits in `val`.
fn sign_extend(val: u32, bits: u32) -> i32 {
    let shift = INSTRUCTION_WIDTH - bits;
    ((val as i32) << shift) >> shift
}
