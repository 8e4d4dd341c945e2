//! Decode stage.
//!
//! Wraps the pure word decoder and snapshots the current values of the
//! source registers the decoded shape names. The snapshot is the only view
//! of the register file the later stages get.

use crate::common::error::DecodeError;
use crate::core::regfile::RegisterFile;
use crate::core::stages::RegSnapshot;
use crate::isa::decode as isa_decode;
use crate::isa::instruction::Instruction;

/// Decodes a fetched word and captures its source-register values.
///
/// # Errors
///
/// Propagates the [`DecodeError`] of the pure decoder; the caller treats it
/// as fatal.
pub fn decode(
    regs: &RegisterFile,
    word: u32,
) -> Result<(Instruction, RegSnapshot), DecodeError> {
    let inst = isa_decode::decode(word)?;
    let snapshot = match inst {
        Instruction::R { rs, rt, .. } | Instruction::I { rs, rt, .. } => RegSnapshot {
            rs: regs.read(rs),
            rt: regs.read(rt),
        },
        Instruction::J { .. } => RegSnapshot::default(),
    };
    Ok((inst, snapshot))
}
