//! Fetch stage.

use crate::core::memory::Memory;

/// Reads the instruction word at the program counter's address.
#[inline]
pub fn fetch(memory: &Memory, pc: u32) -> u32 {
    memory.read_word(pc)
}
