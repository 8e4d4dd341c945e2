//! Major Opcodes (bits 31-26).
//!
//! Opcode 0 selects the R-shape; the funct field then picks the operation
//! (see [`crate::isa::funct`]). Every other supported opcode names exactly
//! one I- or J-shape operation.

/// R-shape instructions; the operation is selected by funct.
pub const OP_RTYPE: u32 = 0b000000;

/// Absolute jump (J).
pub const OP_J: u32 = 0b000010;

/// Jump and link (JAL).
pub const OP_JAL: u32 = 0b000011;

/// Branch if equal (BEQ).
pub const OP_BEQ: u32 = 0b000100;

/// Branch if not equal (BNE).
pub const OP_BNE: u32 = 0b000101;

/// Add immediate unsigned (ADDIU) - no overflow trap.
pub const OP_ADDIU: u32 = 0b001001;

/// AND immediate (ANDI) - immediate is zero-extended.
pub const OP_ANDI: u32 = 0b001100;

/// OR immediate (ORI) - immediate is zero-extended.
pub const OP_ORI: u32 = 0b001101;

/// Load upper immediate (LUI).
pub const OP_LUI: u32 = 0b001111;

/// Load word (LW).
pub const OP_LW: u32 = 0b100011;

/// Store word (SW).
pub const OP_SW: u32 = 0b101011;
