//! Machine State and the Step Interface.
//!
//! This module owns the complete state of the simulated machine and drives
//! one instruction per call through the stage functions. It provides:
//! 1. **Initialization:** Builds memory from a program image, zeroes the
//!    registers, points the stack pointer at the top of the image, and sets
//!    the PC to the base of the instruction segment.
//! 2. **Stepping:** Fetch → decode → execute → PC update → memory access →
//!    writeback, one instruction to completion per call.
//! 3. **Inspection:** Word, register, and PC observation for the driver.
//!
//! The machine is an explicit value owned by the driver loop; every stage
//! receives exactly the state it operates on, and a fresh decoded
//! instruction is produced each step.

use tracing::debug;

use crate::common::constants::REG_SP;
use crate::common::error::SimError;
use crate::config::Config;
use crate::core::memory::Memory;
use crate::core::regfile::RegisterFile;
use crate::core::stages;
use crate::isa::instruction::Instruction;
use crate::stats::Stats;

/// Report of a single simulated step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StepOutcome {
    /// The instruction that retired.
    pub instruction: Instruction,
    /// Index of the register the instruction wrote, if any.
    pub changed_reg: Option<usize>,
    /// Address of the memory word the instruction wrote, if any.
    pub changed_mem: Option<u32>,
}

/// The complete state of the simulated machine.
#[derive(Clone, Debug)]
pub struct Machine {
    /// Combined instruction/data memory.
    pub memory: Memory,
    /// General-purpose register file.
    pub regs: RegisterFile,
    /// Program counter.
    pub pc: u32,
    /// Retired-instruction statistics.
    pub stats: Stats,
}

impl Machine {
    /// Builds a machine from a configuration and a program image.
    ///
    /// The stack pointer (register 29) starts at the top of the combined
    /// memory image and the PC at the base of the instruction segment; all
    /// other registers start at zero.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::ProgramTooLarge`] when the image exceeds the
    /// instruction-segment capacity.
    pub fn new(config: &Config, image: &[u32]) -> Result<Self, SimError> {
        let mut memory = Memory::new(&config.memory);
        memory.load_image(image)?;

        let mut regs = RegisterFile::new();
        regs.write(REG_SP, config.memory.top() as i32);

        debug!(
            pc = config.memory.base_addr,
            sp = config.memory.top(),
            words = image.len(),
            "machine initialized"
        );

        Ok(Self {
            memory,
            regs,
            pc: config.memory.base_addr,
            stats: Stats::default(),
        })
    }

    /// Executes exactly one instruction.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Decode`] when the fetched word is not a supported
    /// encoding; the machine state is unchanged in that case and the driver
    /// should treat the error as end-of-simulation.
    pub fn step(&mut self) -> Result<StepOutcome, SimError> {
        let pc = self.pc;
        let word = stages::fetch(&self.memory, pc);
        let (instruction, snapshot) =
            stages::decode(&self.regs, word).map_err(|source| SimError::Decode { pc, source })?;

        let value = stages::execute(&instruction, &snapshot, pc);
        self.pc = stages::next_pc(&instruction, value, pc);
        let (value, changed_mem) = stages::access(&mut self.memory, &instruction, &snapshot, value);
        let changed_reg = stages::writeback(&mut self.regs, &instruction, value);

        self.stats.record(&instruction);
        debug!(pc, word, next_pc = self.pc, "retired instruction");

        Ok(StepOutcome {
            instruction,
            changed_reg,
            changed_mem,
        })
    }

    /// Reads the memory word at `addr`.
    pub fn read_word(&self, addr: u32) -> u32 {
        self.memory.read_word(addr)
    }

    /// Reads the register at `idx`.
    pub fn read_reg(&self, idx: usize) -> i32 {
        self.regs.read(idx)
    }
}
