//! PC-Update Stage Unit Tests.
//!
//! Verifies sequential advance, register jumps, resolved branch
//! displacements, and absolute jump targets. Branch/jump redirection
//! happens in the same step as evaluation - no delay slot.

use mipsim_core::common::constants::TEXT_BASE;
use mipsim_core::core::stages::{execute, next_pc, RegSnapshot};
use mipsim_core::isa::{IOp, Instruction, JOp, RFunct};

#[test]
fn default_is_sequential_advance() {
    let inst = Instruction::R {
        funct: RFunct::Addu,
        rs: 1,
        rt: 2,
        rd: 3,
        shamt: 0,
    };
    assert_eq!(next_pc(&inst, 12, TEXT_BASE), TEXT_BASE + 4);
}

#[test]
fn jr_redirects_to_register_value() {
    let inst = Instruction::R {
        funct: RFunct::Jr,
        rs: 31,
        rt: 0,
        rd: 0,
        shamt: 0,
    };
    assert_eq!(next_pc(&inst, 0x0040_0020, TEXT_BASE), 0x0040_0020);
}

#[test]
fn branch_not_taken_advances_sequentially() {
    let inst = Instruction::I {
        op: IOp::Beq,
        rs: 1,
        rt: 2,
        imm: 5,
    };
    assert_eq!(next_pc(&inst, 0, TEXT_BASE), TEXT_BASE + 4);
}

#[test]
fn branch_taken_adds_displacement_to_advanced_pc() {
    let inst = Instruction::I {
        op: IOp::Bne,
        rs: 1,
        rt: 2,
        imm: 5,
    };
    assert_eq!(next_pc(&inst, 5 << 2, TEXT_BASE), TEXT_BASE + 4 + 20);
}

#[test]
fn beq_minus_one_loops_to_itself() {
    // Equal operands with displacement -1: the taken branch lands back on
    // the branch itself.
    let inst = Instruction::I {
        op: IOp::Beq,
        rs: 1,
        rt: 2,
        imm: -1,
    };
    let value = execute(&inst, &RegSnapshot { rs: 9, rt: 9 }, TEXT_BASE);
    assert_eq!(next_pc(&inst, value, TEXT_BASE), TEXT_BASE);
}

#[test]
fn jumps_use_shifted_target_field() {
    for op in [JOp::J, JOp::Jal] {
        let inst = Instruction::J {
            op,
            target: 0x0010_0004,
        };
        assert_eq!(next_pc(&inst, 0, TEXT_BASE), 0x0040_0010);
    }
}
