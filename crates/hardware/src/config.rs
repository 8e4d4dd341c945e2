//! Configuration system for the simulator.
//!
//! This module defines the configuration structures used to parameterize a
//! run. It provides:
//! 1. **Defaults:** Baseline machine geometry matching the fixed address-space
//!    layout in [`crate::common::constants`].
//! 2. **Structures:** Hierarchical config for reporting behavior and memory
//!    geometry.
//! 3. **Loading:** Deserialization from JSON, or `Config::default()` for the
//!    CLI's built-in baseline.

use serde::Deserialize;
use std::fs;

use crate::common::constants::WORD_BYTES;
use crate::common::error::SimError;

/// Default configuration constants for the simulator.
mod defaults {
    use crate::common::constants;

    /// Base address of the instruction segment.
    pub const BASE_ADDR: u32 = constants::TEXT_BASE;

    /// Instruction-segment capacity in words.
    pub const TEXT_WORDS: usize = constants::MAX_TEXT_WORDS;

    /// Data-segment capacity in words.
    pub const DATA_WORDS: usize = constants::MAX_DATA_WORDS;
}

/// Root configuration for one simulation run.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Reporting and interaction behavior.
    pub general: GeneralConfig,
    /// Machine memory geometry.
    pub memory: MemoryConfig,
}

/// Reporting and interaction flags, normally set from the command line.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Print the full register file after every step instead of only the
    /// changed register.
    pub print_registers: bool,
    /// Print all nonzero data memory after every step instead of only the
    /// changed word.
    pub print_memory: bool,
    /// Pause for driver input before each step.
    pub interactive: bool,
}

/// Memory geometry of the simulated machine.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct MemoryConfig {
    /// Base address of the instruction segment.
    pub base_addr: u32,
    /// Instruction-segment capacity in 32-bit words.
    pub text_words: usize,
    /// Data-segment capacity in 32-bit words.
    pub data_words: usize,
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            base_addr: defaults::BASE_ADDR,
            text_words: defaults::TEXT_WORDS,
            data_words: defaults::DATA_WORDS,
        }
    }
}

impl MemoryConfig {
    /// Total capacity of the combined image in words.
    pub const fn total_words(&self) -> usize {
        self.text_words + self.data_words
    }

    /// One past the highest address of the combined image; the stack
    /// pointer's initial value.
    pub fn top(&self) -> u32 {
        self.base_addr + (self.total_words() as u32) * WORD_BYTES
    }
}

impl Config {
    /// Parses a configuration from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns the underlying `serde_json` error on malformed input.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Loads a configuration from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Config`] when the file cannot be read or parsed.
    pub fn from_json_file(path: &str) -> Result<Self, SimError> {
        let text = fs::read_to_string(path).map_err(|e| SimError::Config {
            path: path.to_owned(),
            reason: e.to_string(),
        })?;
        Self::from_json(&text).map_err(|e| SimError::Config {
            path: path.to_owned(),
            reason: e.to_string(),
        })
    }
}
