//! Instruction-set definitions for the supported MIPS-I subset.
//!
//! This module collects everything that interprets raw 32-bit instruction
//! words. It includes:
//! 1. **Tables:** Opcode and funct constants for the supported operations.
//! 2. **Fields:** Bit-field extraction over raw words.
//! 3. **Model:** The closed `Instruction` type produced by the decoder.
//! 4. **Disassembly:** Canonical mnemonic rendering for tracing.

/// Raw word decoding into the instruction model.
pub mod decode;

/// Instruction disassembler.
pub mod disasm;

/// R-shape funct codes.
pub mod funct;

/// Field extraction and the decoded instruction model.
pub mod instruction;

/// Major opcodes for the I- and J-shapes.
pub mod opcodes;

pub use instruction::{IOp, Instruction, JOp, RFunct};
