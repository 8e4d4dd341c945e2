//! MIPS-subset instruction-level simulator library.
//!
//! This crate implements an instruction-level simulator for a 32-bit MIPS-I
//! subset with the following:
//! 1. **Core:** Machine state (memory, register file, PC) and the per-step path
//!    (fetch, decode, execute, PC update, memory access, writeback).
//! 2. **ISA:** Field extraction, decoding, execution semantics, and disassembly
//!    for the supported R/I/J encodings.
//! 3. **Simulation:** Program image loader, configuration, and statistics
//!    collection.

/// Common types and constants (addresses, registers, errors).
pub mod common;
/// Simulator configuration (defaults, machine geometry, report flags).
pub mod config;
/// CPU core (machine state, memory, register file, step stages).
pub mod core;
/// Instruction set (field extraction, decode, disassembly, opcode tables).
pub mod isa;
/// Program image loading.
pub mod sim;
/// Simulation statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Main machine-state type; owns memory, registers, and the program counter.
pub use crate::core::Machine;
/// Per-step report: the decoded instruction and which register/memory changed.
pub use crate::core::StepOutcome;
