//! End-to-End Single-Step Scenarios.
//!
//! Runs whole instructions through `Machine::step` and checks the register,
//! memory, and PC effects plus the reported change indicators.

use mipsim_core::common::constants::{REG_RA, REG_SP, TEXT_BASE};
use mipsim_core::common::{DecodeError, SimError};
use mipsim_core::isa::{funct, opcodes};

use crate::common::builder::{i_type, j_type, r_type};
use crate::common::harness::TestContext;

// ══════════════════════════════════════════════════════════
// 1. Initialization
// ══════════════════════════════════════════════════════════

#[test]
fn stack_pointer_starts_at_top_of_image() {
    let ctx = TestContext::new(&[]);
    // 1024 text words + 3072 data words above the base.
    assert_eq!(ctx.get_reg(REG_SP), 0x0040_4000);
}

#[test]
fn other_registers_start_zeroed() {
    let ctx = TestContext::new(&[]);
    for idx in (0..32).filter(|&idx| idx != REG_SP) {
        assert_eq!(ctx.get_reg(idx), 0, "register {idx} not zeroed");
    }
}

// ══════════════════════════════════════════════════════════
// 2. ALU steps
// ══════════════════════════════════════════════════════════

#[test]
fn addu_step_end_to_end() {
    let mut ctx = TestContext::new(&[r_type(1, 2, 3, 0, funct::FUNCT_ADDU)]);
    ctx.set_reg(1, 5);
    ctx.set_reg(2, 7);

    let outcome = ctx.step_ok();

    assert_eq!(ctx.get_reg(3), 12);
    assert_eq!(outcome.changed_reg, Some(3));
    assert_eq!(outcome.changed_mem, None);
    assert_eq!(ctx.machine.pc, TEXT_BASE + 4);
}

#[test]
fn instruction_reads_pre_step_register_state() {
    // addu $1, $1, $1 doubles the register; the write must not feed the
    // reads of the same step.
    let mut ctx = TestContext::new(&[r_type(1, 1, 1, 0, funct::FUNCT_ADDU)]);
    ctx.set_reg(1, 3);

    let _ = ctx.step_ok();

    assert_eq!(ctx.get_reg(1), 6);
}

#[test]
fn write_to_register_zero_is_permitted() {
    // addiu $0, $1, 7 - the zero-register convention is not enforced.
    let mut ctx = TestContext::new(&[i_type(opcodes::OP_ADDIU, 1, 0, 7)]);

    let outcome = ctx.step_ok();

    assert_eq!(outcome.changed_reg, Some(0));
    assert_eq!(ctx.get_reg(0), 7);
}

// ══════════════════════════════════════════════════════════
// 3. Loads and stores
// ══════════════════════════════════════════════════════════

#[test]
fn lw_step_end_to_end() {
    let mut ctx = TestContext::new(&[i_type(opcodes::OP_LW, 5, 4, 0)]);
    let data = ctx.data_base();
    ctx.set_reg(5, data as i32);
    ctx.write_word(data, 0x2A);

    let outcome = ctx.step_ok();

    assert_eq!(ctx.get_reg(4), 0x2A);
    assert_eq!(outcome.changed_reg, Some(4));
    assert_eq!(outcome.changed_mem, None, "loads must not report a memory change");
}

#[test]
fn sw_step_reports_changed_address() {
    let mut ctx = TestContext::new(&[i_type(opcodes::OP_SW, 5, 4, 8)]);
    let data = ctx.data_base();
    ctx.set_reg(5, data as i32);
    ctx.set_reg(4, 0x1234);

    let outcome = ctx.step_ok();

    assert_eq!(ctx.read_word(data + 8), 0x1234);
    assert_eq!(outcome.changed_mem, Some(data + 8));
    assert_eq!(outcome.changed_reg, None);
}

#[test]
fn lw_then_sw_round_trip_leaves_memory_unchanged() {
    let program = [
        i_type(opcodes::OP_LW, 5, 4, 0),
        i_type(opcodes::OP_SW, 5, 4, 0),
    ];
    let mut ctx = TestContext::new(&program);
    let data = ctx.data_base();
    ctx.set_reg(5, data as i32);
    ctx.write_word(data, 0xDEAD_BEEF);

    let _ = ctx.step_ok();
    let _ = ctx.step_ok();

    assert_eq!(ctx.read_word(data), 0xDEAD_BEEF);
}

// ══════════════════════════════════════════════════════════
// 4. Control flow
// ══════════════════════════════════════════════════════════

#[test]
fn jal_links_and_jumps() {
    let mut ctx = TestContext::new(&[j_type(opcodes::OP_JAL, 0x0010_0003)]);

    let outcome = ctx.step_ok();

    assert_eq!(ctx.get_reg(REG_RA), (TEXT_BASE + 4) as i32);
    assert_eq!(outcome.changed_reg, Some(REG_RA));
    assert_eq!(ctx.machine.pc, 0x0040_000C);
}

#[test]
fn j_changes_no_register() {
    let mut ctx = TestContext::new(&[j_type(opcodes::OP_J, 0x0010_0002)]);

    let outcome = ctx.step_ok();

    assert_eq!(outcome.changed_reg, None);
    assert_eq!(ctx.machine.pc, 0x0040_0008);
}

#[test]
fn jr_redirects_without_register_change() {
    let mut ctx = TestContext::new(&[r_type(31, 0, 0, 0, funct::FUNCT_JR)]);
    ctx.set_reg(31, 0x0040_0010);

    let outcome = ctx.step_ok();

    assert_eq!(outcome.changed_reg, None);
    assert_eq!(ctx.machine.pc, 0x0040_0010);
}

#[test]
fn beq_with_minus_one_displacement_loops() {
    let mut ctx = TestContext::new(&[i_type(opcodes::OP_BEQ, 1, 2, -1)]);
    ctx.set_reg(1, 9);
    ctx.set_reg(2, 9);

    let _ = ctx.step_ok();

    assert_eq!(ctx.machine.pc, TEXT_BASE);
}

#[test]
fn branch_not_taken_falls_through() {
    let mut ctx = TestContext::new(&[i_type(opcodes::OP_BEQ, 1, 2, 100)]);
    ctx.set_reg(1, 1);
    ctx.set_reg(2, 2);

    let outcome = ctx.step_ok();

    assert_eq!(ctx.machine.pc, TEXT_BASE + 4);
    assert_eq!(outcome.changed_reg, None);
}

// ══════════════════════════════════════════════════════════
// 5. Termination
// ══════════════════════════════════════════════════════════

#[test]
fn zero_word_terminates_without_state_change() {
    let mut ctx = TestContext::new(&[]);
    ctx.set_reg(1, 42);

    let err = match ctx.machine.step() {
        Err(err) => err,
        Ok(outcome) => panic!("expected decode failure, got {outcome:?}"),
    };

    match err {
        SimError::Decode { pc, source } => {
            assert_eq!(pc, TEXT_BASE);
            assert_eq!(source, DecodeError::ReservedWord);
        }
        other => panic!("expected decode error, got {other}"),
    }
    assert_eq!(ctx.machine.pc, TEXT_BASE, "PC must not advance");
    assert_eq!(ctx.get_reg(1), 42, "registers must be untouched");
}

#[test]
fn unsupported_opcode_terminates() {
    let mut ctx = TestContext::new(&[i_type(0x3F, 0, 0, 0)]);

    let result = ctx.machine.step();

    assert!(matches!(
        result,
        Err(SimError::Decode {
            source: DecodeError::UnknownOpcode { .. },
            ..
        })
    ));
}

// ══════════════════════════════════════════════════════════
// 6. Statistics
// ══════════════════════════════════════════════════════════

#[test]
fn stats_count_the_instruction_mix() {
    let program = [
        r_type(1, 2, 3, 0, funct::FUNCT_ADDU),
        i_type(opcodes::OP_LW, 5, 4, 0),
        i_type(opcodes::OP_BNE, 1, 2, 1),
    ];
    let mut ctx = TestContext::new(&program);
    let data = ctx.data_base();
    ctx.set_reg(5, data as i32);

    let _ = ctx.step_ok();
    let _ = ctx.step_ok();
    let _ = ctx.step_ok();

    let stats = &ctx.machine.stats;
    assert_eq!(stats.instructions_retired, 3);
    assert_eq!(stats.inst_alu, 1);
    assert_eq!(stats.inst_load, 1);
    assert_eq!(stats.inst_branch, 1);
}
