//! Per-Instruction Step Stages.
//!
//! One simulated step runs these stages in a fixed order:
//! fetch → decode → execute → PC update → memory access → writeback.
//! Each stage is a standalone function over exactly the state it needs, and
//! every instruction runs to completion before the next is fetched - there
//! is no overlap and no delay slot.
//!
//! The decode stage captures the [`RegSnapshot`] of the source registers;
//! every later stage operates on that snapshot and never re-reads the
//! register file mid-step, so an instruction's semantics are defined purely
//! by its pre-instruction register state.

/// Decode stage: word classification plus source-register snapshot.
pub mod decode;

/// Execute stage: the opcode-indexed semantic table.
pub mod execute;

/// Fetch stage: instruction word read at the PC.
pub mod fetch;

/// Memory-access stage: load/store handling.
pub mod memory;

/// PC-update stage: sequential advance and control-flow redirection.
pub mod pc;

/// Writeback stage: destination-register commit.
pub mod writeback;

pub use decode::decode;
pub use execute::execute;
pub use fetch::fetch;
pub use memory::access;
pub use pc::next_pc;
pub use writeback::writeback;

/// Source-register values captured at decode time.
///
/// For the J-shape, which names no source registers, both values are zero
/// and unused.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RegSnapshot {
    /// Value of the `rs` register before the instruction executes.
    pub rs: i32,
    /// Value of the `rt` register before the instruction executes.
    pub rt: i32,
}
