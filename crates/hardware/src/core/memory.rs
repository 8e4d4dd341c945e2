//! Flat Word-Addressable Memory.
//!
//! This module implements the combined instruction/data store of the
//! simulated machine. It performs the following:
//! 1. **Storage:** One contiguous array of 32-bit words covering the
//!    instruction segment followed by the data segment.
//! 2. **Addressing:** Word access at `(address - base) / 4`.
//! 3. **Image Loading:** Placement of a program image into the instruction
//!    segment, enforcing its capacity.
//!
//! Addresses must be 4-byte aligned and inside
//! `[base, base + 4 * capacity)`. The store does not validate either
//! condition: a violating access is a programming error and panics through
//! the unguarded index, matching the unprotected memory model of the
//! architecture variant.

use crate::common::constants::WORD_BYTES;
use crate::common::error::SimError;
use crate::config::MemoryConfig;

/// The combined instruction/data memory of the machine.
#[derive(Clone, Debug)]
pub struct Memory {
    words: Vec<u32>,
    base: u32,
    text_words: usize,
}

impl Memory {
    /// Creates a zeroed memory with the configured geometry.
    pub fn new(config: &MemoryConfig) -> Self {
        Self {
            words: vec![0; config.total_words()],
            base: config.base_addr,
            text_words: config.text_words,
        }
    }

    /// Places a program image at the base of the instruction segment.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::ProgramTooLarge`] when the image holds more words
    /// than the instruction segment.
    pub fn load_image(&mut self, image: &[u32]) -> Result<(), SimError> {
        if image.len() > self.text_words {
            return Err(SimError::ProgramTooLarge {
                words: image.len(),
                capacity: self.text_words,
            });
        }
        self.words[..image.len()].copy_from_slice(image);
        Ok(())
    }

    /// Reads the 32-bit word at `addr`.
    pub fn read_word(&self, addr: u32) -> u32 {
        self.words[self.index(addr)]
    }

    /// Writes a 32-bit word at `addr`.
    pub fn write_word(&mut self, addr: u32, value: u32) {
        let index = self.index(addr);
        self.words[index] = value;
    }

    /// Base address of the instruction segment.
    pub fn base(&self) -> u32 {
        self.base
    }

    /// First address of the data segment.
    pub fn data_base(&self) -> u32 {
        self.base + (self.text_words as u32) * WORD_BYTES
    }

    /// One past the last valid address.
    pub fn limit(&self) -> u32 {
        self.base + (self.words.len() as u32) * WORD_BYTES
    }

    fn index(&self, addr: u32) -> usize {
        ((addr - self.base) / WORD_BYTES) as usize
    }
}
