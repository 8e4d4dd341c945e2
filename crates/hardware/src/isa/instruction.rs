//! Instruction field extraction and the decoded instruction model.
//!
//! Provides bit extraction over raw 32-bit words and the closed
//! [`Instruction`] sum type the decoder produces. Each shape carries an
//! enumerated operation tag, so the executor and PC updater match
//! exhaustively instead of comparing integer constants.

use crate::isa::{funct, opcodes};

/// Bit mask for a 5-bit register-index field.
pub const REG_MASK: u32 = 0x1F;
/// Bit mask for the 6-bit opcode and funct fields.
pub const OP_MASK: u32 = 0x3F;
/// Bit mask for the 16-bit I-shape immediate field.
pub const IMM_MASK: u32 = 0xFFFF;
/// Bit mask for the 26-bit J-shape target field.
pub const TARGET_MASK: u32 = 0x03FF_FFFF;

/// Bit position of the opcode field.
pub const OPCODE_SHIFT: u32 = 26;
/// Bit position of the rs field.
pub const RS_SHIFT: u32 = 21;
/// Bit position of the rt field.
pub const RT_SHIFT: u32 = 16;
/// Bit position of the rd field.
pub const RD_SHIFT: u32 = 11;
/// Bit position of the shamt field.
pub const SHAMT_SHIFT: u32 = 6;

/// Forms the absolute byte address packed in a 26-bit jump target field.
///
/// The decoder stores the raw field; callers interpret it by shifting into
/// word alignment. The upper PC bits are not merged in - the fixed segment
/// layout keeps them zero.
#[inline]
pub fn jump_target(target: u32) -> u32 {
    target << 2
}

/// Trait for extracting instruction fields from raw encoded words.
///
/// Field layout: `op[31:26] rs[25:21] rt[20:16] rd[15:11] shamt[10:6]
/// funct[5:0]` for the R-shape, `op rs rt imm[15:0]` for the I-shape, and
/// `op target[25:0]` for the J-shape.
pub trait InstructionBits {
    /// Extracts the opcode field (bits 31-26).
    fn op(&self) -> u32;

    /// Extracts the first source register index (bits 25-21).
    fn rs(&self) -> usize;

    /// Extracts the second source register index (bits 20-16).
    fn rt(&self) -> usize;

    /// Extracts the destination register index (bits 15-11).
    fn rd(&self) -> usize;

    /// Extracts the shift amount field (bits 10-6).
    fn shamt(&self) -> u32;

    /// Extracts the funct field (bits 5-0).
    fn funct(&self) -> u32;

    /// Extracts the unsigned 16-bit immediate field (bits 15-0).
    fn imm16(&self) -> u32;

    /// Extracts the 26-bit jump target field (bits 25-0).
    fn target(&self) -> u32;
}

impl InstructionBits for u32 {
    #[inline(always)]
    fn op(&self) -> u32 {
        (self >> OPCODE_SHIFT) & OP_MASK
    }

    #[inline(always)]
    fn rs(&self) -> usize {
        ((self >> RS_SHIFT) & REG_MASK) as usize
    }

    #[inline(always)]
    fn rt(&self) -> usize {
        ((self >> RT_SHIFT) & REG_MASK) as usize
    }

    #[inline(always)]
    fn rd(&self) -> usize {
        ((self >> RD_SHIFT) & REG_MASK) as usize
    }

    #[inline(always)]
    fn shamt(&self) -> u32 {
        (self >> SHAMT_SHIFT) & REG_MASK
    }

    #[inline(always)]
    fn funct(&self) -> u32 {
        self & OP_MASK
    }

    #[inline(always)]
    fn imm16(&self) -> u32 {
        self & IMM_MASK
    }

    #[inline(always)]
    fn target(&self) -> u32 {
        self & TARGET_MASK
    }
}

/// Operation selected by the funct field of an R-shape instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RFunct {
    /// Shift left logical.
    Sll,
    /// Shift right logical.
    Srl,
    /// Jump register.
    Jr,
    /// Add unsigned (wraparound).
    Addu,
    /// Subtract unsigned (wraparound).
    Subu,
    /// Bitwise AND.
    And,
    /// Bitwise OR.
    Or,
    /// Set on less than (signed).
    Slt,
}

impl RFunct {
    /// Maps a raw funct field to its operation, or `None` if unsupported.
    pub fn from_funct(value: u32) -> Option<Self> {
        match value {
            funct::FUNCT_SLL => Some(Self::Sll),
            funct::FUNCT_SRL => Some(Self::Srl),
            funct::FUNCT_JR => Some(Self::Jr),
            funct::FUNCT_ADDU => Some(Self::Addu),
            funct::FUNCT_SUBU => Some(Self::Subu),
            funct::FUNCT_AND => Some(Self::And),
            funct::FUNCT_OR => Some(Self::Or),
            funct::FUNCT_SLT => Some(Self::Slt),
            _ => None,
        }
    }

    /// Canonical assembler mnemonic.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Sll => "sll",
            Self::Srl => "srl",
            Self::Jr => "jr",
            Self::Addu => "addu",
            Self::Subu => "subu",
            Self::And => "and",
            Self::Or => "or",
            Self::Slt => "slt",
        }
    }
}

/// Operation selected by the opcode of an I-shape instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IOp {
    /// Branch if equal.
    Beq,
    /// Branch if not equal.
    Bne,
    /// Add immediate unsigned (wraparound).
    Addiu,
    /// AND immediate (zero-extended).
    Andi,
    /// OR immediate (zero-extended).
    Ori,
    /// Load upper immediate.
    Lui,
    /// Load word.
    Lw,
    /// Store word.
    Sw,
}

impl IOp {
    /// Maps a raw opcode to its I-shape operation, or `None` if unsupported.
    pub fn from_opcode(value: u32) -> Option<Self> {
        match value {
            opcodes::OP_BEQ => Some(Self::Beq),
            opcodes::OP_BNE => Some(Self::Bne),
            opcodes::OP_ADDIU => Some(Self::Addiu),
            opcodes::OP_ANDI => Some(Self::Andi),
            opcodes::OP_ORI => Some(Self::Ori),
            opcodes::OP_LUI => Some(Self::Lui),
            opcodes::OP_LW => Some(Self::Lw),
            opcodes::OP_SW => Some(Self::Sw),
            _ => None,
        }
    }

    /// Canonical assembler mnemonic.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Beq => "beq",
            Self::Bne => "bne",
            Self::Addiu => "addiu",
            Self::Andi => "andi",
            Self::Ori => "ori",
            Self::Lui => "lui",
            Self::Lw => "lw",
            Self::Sw => "sw",
        }
    }
}

/// Operation selected by the opcode of a J-shape instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum JOp {
    /// Absolute jump.
    J,
    /// Jump and link.
    Jal,
}

impl JOp {
    /// Maps a raw opcode to its J-shape operation, or `None` if unsupported.
    pub fn from_opcode(value: u32) -> Option<Self> {
        match value {
            opcodes::OP_J => Some(Self::J),
            opcodes::OP_JAL => Some(Self::Jal),
            _ => None,
        }
    }

    /// Canonical assembler mnemonic.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::J => "j",
            Self::Jal => "jal",
        }
    }
}

/// A decoded instruction.
///
/// Freshly constructed every step; no stage observes a previous step's
/// decode. The variant fixes the shape, the embedded tag fixes the
/// operation, and the fields are exactly the bit ranges the shape defines.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Instruction {
    /// Register-register shape (opcode 0).
    R {
        /// Operation selected by the funct field.
        funct: RFunct,
        /// First source register index.
        rs: usize,
        /// Second source register index.
        rt: usize,
        /// Destination register index.
        rd: usize,
        /// Shift amount for `sll`/`srl`.
        shamt: u32,
    },
    /// Register-immediate shape.
    I {
        /// Operation selected by the opcode.
        op: IOp,
        /// Source register index.
        rs: usize,
        /// Target register index (destination for most I-shape operations).
        rt: usize,
        /// 16-bit immediate, sign-extended to 32 bits.
        imm: i32,
    },
    /// Jump shape.
    J {
        /// Operation selected by the opcode.
        op: JOp,
        /// Raw 26-bit instruction-index field; the PC updater forms the
        /// byte address as `target << 2`.
        target: u32,
    },
}
