//! Artifact rendering.
//!
//! Every function here is pure: it takes the validated index (or, for the
//! suffix list, the registry itself) and returns complete in-memory text.
//! File writing lives in [`crate::output`].

use cakevm_isa::{Arity, InstructionDef};

use crate::index::OpcodeIndex;

/// Prefix of every generated enumeration constant.
const OPCODE_PREFIX: &str = "OPCODE_";

/// Macro wrapped around each mnemonic in the dispatch suffix list.
const SUFFIX_MACRO: &str = "OPSUF";

/// Token emitted in the arity table for label-operand instructions. The
/// consuming headers define it as a named constant.
const LABEL_TOKEN: &str = "VALUE_LABEL";

fn arity_token(arity: Arity) -> String {
    match arity {
        Arity::Fixed(n) => n.to_string(),
        Arity::Label => LABEL_TOKEN.to_string(),
    }
}

/// One `OPSUF(mnemonic)` line per registry entry, in registry order.
///
/// This is the only artifact keyed by mnemonic rather than by code: it must
/// cover every defined instruction exactly once, regardless of code value, so
/// it iterates the registry directly instead of the index.
pub fn suffix_list(registry: &[InstructionDef]) -> String {
    let mut out = String::new();
    for insn in registry {
        out.push_str(&format!("{SUFFIX_MACRO}({})\n", insn.mnemonic));
    }
    out
}

/// The `enum OPCODES` block: one constant per occupied slot, ascending.
///
/// Column alignment is cosmetic, kept for readable diffs of the generated
/// header.
pub fn opcode_enum(index: &OpcodeIndex) -> String {
    let mut out = String::from("enum OPCODES {\n");
    for insn in index.occupied() {
        let name = format!("{OPCODE_PREFIX}{}", insn.mnemonic);
        out.push_str(&format!("   {name:<12}  = {},\n", insn.code));
    }
    out.push_str("};\n");
    out
}

/// The `OPNAMES` lookup table: designated initializers `[code] = "mnemonic"`,
/// ascending. Unoccupied slots get no entry; the consumer tolerates sparse
/// default-initialized slots.
pub fn name_table(index: &OpcodeIndex) -> String {
    let mut out = String::from("const char *OPNAMES[] = {\n");
    for insn in index.occupied() {
        out.push_str(&format!("    [{:<3}] = \"{}\",\n", insn.code, insn.mnemonic));
    }
    out.push_str("};\n");
    out
}

/// The `OPARGS` lookup table: `[code] = <arity>`, ascending, where arity is a
/// numeric literal or the label token.
pub fn arity_table(index: &OpcodeIndex) -> String {
    let mut out = String::from("const byte OPARGS[] = {\n");
    for insn in index.occupied() {
        out.push_str(&format!(
            "    [{:<3}] = {},\n",
            insn.code,
            arity_token(insn.arity)
        ));
    }
    out.push_str("};\n");
    out
}

/// The combined header: prologue, enumeration, name table, arity table,
/// epilogue, separated by blank lines. The fragments are opaque and spliced
/// verbatim.
pub fn combined_header(index: &OpcodeIndex, prologue: &str, epilogue: &str) -> String {
    let mut out = String::new();
    out.push_str(prologue);
    out.push('\n');
    out.push_str(&opcode_enum(index));
    out.push('\n');
    out.push_str(&name_table(index));
    out.push('\n');
    out.push_str(&arity_table(index));
    out.push('\n');
    out.push_str(epilogue);
    out.push('\n');
    out
}
