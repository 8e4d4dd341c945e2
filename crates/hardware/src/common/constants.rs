//! Global Machine Constants.
//!
//! This module defines the address-space layout and register conventions of
//! the simulated machine. It includes:
//! 1. **Memory Constants:** Segment base address and default capacities.
//! 2. **Register Constants:** Register-file size and conventional indices.

/// Base address of the instruction segment; the data segment follows it.
pub const TEXT_BASE: u32 = 0x0040_0000;

/// Default instruction-segment capacity in 32-bit words.
pub const MAX_TEXT_WORDS: usize = 1024;

/// Default data-segment capacity in 32-bit words.
pub const MAX_DATA_WORDS: usize = 3072;

/// Size of a memory word in bytes; all addresses are multiples of this.
pub const WORD_BYTES: u32 = 4;

/// Number of general-purpose registers.
pub const NUM_REGISTERS: usize = 32;

/// Stack pointer register; initialized to the top of the memory image.
pub const REG_SP: usize = 29;

/// Link register; receives the return address from `jal`.
pub const REG_RA: usize = 31;
