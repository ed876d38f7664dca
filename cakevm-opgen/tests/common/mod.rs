use cakevm_isa::{Arity, InstructionDef};

pub const fn def(mnemonic: &'static str, code: u8, arity: Arity) -> InstructionDef {
    InstructionDef {
        mnemonic,
        code,
        arity,
    }
}

/// Small registry with gaps between codes: push 1, pop 2, add 10, halt 255.
pub fn sample_registry() -> Vec<InstructionDef> {
    vec![
        def("push", 1, Arity::Fixed(1)),
        def("pop", 2, Arity::Fixed(1)),
        def("add", 10, Arity::Fixed(0)),
        def("halt", 255, Arity::Fixed(0)),
    ]
}

/// Two definitions claiming code 1.
pub fn colliding_registry() -> Vec<InstructionDef> {
    vec![
        def("push", 1, Arity::Fixed(1)),
        def("dup", 1, Arity::Fixed(0)),
    ]
}
