//! R-Shape Funct Codes (bits 5-0).
//!
//! Valid only when the opcode is zero. Any funct value outside this table is
//! an unsupported encoding and fails decode.

/// Shift left logical (SLL).
pub const FUNCT_SLL: u32 = 0x00;

/// Shift right logical (SRL) - zero-filling.
pub const FUNCT_SRL: u32 = 0x02;

/// Jump register (JR).
pub const FUNCT_JR: u32 = 0x08;

/// Add unsigned (ADDU) - no overflow trap.
pub const FUNCT_ADDU: u32 = 0x21;

/// Subtract unsigned (SUBU) - no overflow trap.
pub const FUNCT_SUBU: u32 = 0x23;

/// Bitwise AND.
pub const FUNCT_AND: u32 = 0x24;

/// Bitwise OR.
pub const FUNCT_OR: u32 = 0x25;

/// Set on less than (SLT) - signed compare.
pub const FUNCT_SLT: u32 = 0x2a;
