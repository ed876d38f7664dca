//! The hand-authored opcode registry.
//!
//! Declaration order is meaningful: the dispatch suffix list is emitted in
//! this order. The numeric-keyed artifacts (enum, name table, arity table)
//! are emitted in ascending code order instead, via the opcode index.

use crate::{Arity, InstructionDef};

const fn def(mnemonic: &'static str, code: u8, arity: Arity) -> InstructionDef {
    InstructionDef {
        mnemonic,
        code,
        arity,
    }
}

const fn label(mnemonic: &'static str, code: u8) -> InstructionDef {
    def(mnemonic, code, Arity::Label)
}

/// The authoritative instruction set of the cake VM.
pub const INSTRUCTION_SET: &[InstructionDef] = &[
    def("push", 1, Arity::Fixed(1)),
    def("pop", 2, Arity::Fixed(1)),
    def("dup", 3, Arity::Fixed(0)),
    def("add", 10, Arity::Fixed(0)),
    def("sub", 11, Arity::Fixed(0)),
    def("mul", 12, Arity::Fixed(0)),
    def("div", 13, Arity::Fixed(0)),
    def("sin", 20, Arity::Fixed(0)),
    def("cos", 21, Arity::Fixed(0)),
    def("sqrt", 22, Arity::Fixed(0)),
    def("in", 50, Arity::Fixed(0)),
    def("out", 51, Arity::Fixed(0)),
    label("jmp", 101),
    label("ja", 102),
    label("jae", 103),
    label("jb", 104),
    label("jbe", 105),
    label("je", 106),
    label("jne", 107),
    label("call", 108),
    def("ret", 109, Arity::Fixed(0)),
    def("halt", 255, Arity::Fixed(0)),
];
