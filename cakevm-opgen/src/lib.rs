//! Opcode table generator for the cake stack VM.
//!
//! Turns the static instruction set from `cakevm-isa` into synchronized C
//! source artifacts: an opcode-constant enumeration, a name lookup table, an
//! operand-arity lookup table, and a dispatch macro-invocation list. All
//! numeric-keyed artifacts derive from a single validated [`OpcodeIndex`], so
//! they cannot drift apart; rendering is pure and file writing is a separate,
//! all-or-nothing step.

pub mod emit;
pub mod error;
pub mod index;
pub mod output;

pub use error::{Error, Result};
pub use index::OpcodeIndex;
pub use output::Artifacts;
