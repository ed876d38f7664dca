//! Instruction set definitions for the cake stack VM.
//!
//! This crate is static configuration: the authoritative mnemonic → (code,
//! arity) table from which every generated artifact is derived. It performs
//! no validation — cross-definition checks (opcode collisions) are the
//! generator's job, in `cakevm-opgen`.

mod registry;

pub use registry::INSTRUCTION_SET;

use std::fmt;

/// Operand descriptor for one instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// The instruction takes `n` literal operands (0 or 1 in practice).
    Fixed(u8),
    /// The operand is a label/address reference resolved at assembly time,
    /// not a plain literal.
    Label,
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arity::Fixed(n) => write!(f, "{n}"),
            Arity::Label => f.write_str("label"),
        }
    }
}

/// A single instruction definition: mnemonic, byte code, and operand arity.
///
/// Numeric codes must be unique across the instruction set; that invariant is
/// checked when `cakevm-opgen` builds its opcode index, not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InstructionDef {
    /// Human-readable instruction name, e.g. `"push"`.
    pub mnemonic: &'static str,
    /// Binary representation of the instruction.
    pub code: u8,
    /// Operand count, or the label marker for jump-family instructions.
    pub arity: Arity,
}
