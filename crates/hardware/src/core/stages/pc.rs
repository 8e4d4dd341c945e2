//! PC-update stage.
//!
//! Runs after execute and before memory access/writeback, so a control
//! transfer never depends on a value not yet written back. The instruction
//! immediately following a branch or jump is never fetched: this machine
//! does not model a delay slot, and that simplification is kept
//! deliberately - "fixing" it to hardware behavior would change program
//! semantics.

use crate::common::constants::WORD_BYTES;
use crate::isa::instruction::{jump_target, IOp, Instruction, RFunct};

/// Computes the next program-counter value.
///
/// # Arguments
///
/// * `inst` - The decoded instruction.
/// * `value` - The execute-stage result (jump address, branch displacement
///   in bytes or 0, or ignored).
/// * `pc` - Address of the instruction.
pub fn next_pc(inst: &Instruction, value: i32, pc: u32) -> u32 {
    let sequential = pc.wrapping_add(WORD_BYTES);
    match *inst {
        Instruction::R {
            funct: RFunct::Jr, ..
        } => value as u32,
        Instruction::I {
            op: IOp::Beq | IOp::Bne,
            ..
        } => sequential.wrapping_add(value as u32),
        Instruction::J { target, .. } => jump_target(target),
        Instruction::R { .. } | Instruction::I { .. } => sequential,
    }
}
