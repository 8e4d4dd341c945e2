//! Decode and simulation error definitions.
//!
//! This module defines the typed failure results of the simulator. It
//! provides:
//! 1. **Decode Failures:** Unrecognized encodings and the reserved all-zero
//!    word, which terminate the step loop.
//! 2. **Load Failures:** Program images that cannot be read or do not fit the
//!    instruction segment.
//! 3. **Error Propagation:** Integration with standard Rust error traits so
//!    the driver decides whether to halt or report.

use thiserror::Error;

/// Failure to classify a raw 32-bit word as a supported instruction.
///
/// Every variant is fatal: the simulator has no illegal-instruction trap, so
/// the step loop stops at the first word it cannot decode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The all-zero word, reserved as an explicit program terminator.
    #[error("reserved all-zero instruction word")]
    ReservedWord,

    /// An opcode outside the supported R/I/J sets.
    #[error("unrecognised opcode {opcode:#04x} in word {word:#010x}")]
    UnknownOpcode {
        /// The raw instruction word.
        word: u32,
        /// The extracted 6-bit opcode field.
        opcode: u32,
    },

    /// An R-shape word whose funct field selects no supported operation.
    #[error("unrecognised funct {funct:#04x} in word {word:#010x}")]
    UnknownFunct {
        /// The raw instruction word.
        word: u32,
        /// The extracted 6-bit funct field.
        funct: u32,
    },
}

/// A fatal simulation condition, surfaced to the driver.
///
/// No variant is recoverable; the driver reports the condition and stops
/// stepping.
#[derive(Debug, Error)]
pub enum SimError {
    /// The word fetched at `pc` could not be decoded.
    #[error("decode failed at pc={pc:#010x}: {source}")]
    Decode {
        /// Program counter of the undecodable word.
        pc: u32,
        /// The underlying decode failure.
        #[source]
        source: DecodeError,
    },

    /// The program image holds more words than the instruction segment.
    #[error("program image of {words} words exceeds instruction segment capacity of {capacity}")]
    ProgramTooLarge {
        /// Number of words in the image.
        words: usize,
        /// Instruction-segment capacity in words.
        capacity: usize,
    },

    /// The program image file could not be read.
    #[error("could not read program image '{path}'")]
    Image {
        /// Path of the image file.
        path: String,
        /// The underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The program image file does not hold a whole number of words.
    #[error("program image '{path}' length {len} is not a multiple of 4 bytes")]
    TruncatedImage {
        /// Path of the image file.
        path: String,
        /// Length of the file in bytes.
        len: usize,
    },

    /// A configuration file could not be read or parsed.
    #[error("could not load config '{path}': {reason}")]
    Config {
        /// Path of the configuration file.
        path: String,
        /// Description of the failure.
        reason: String,
    },
}
