//! Validated dense index over the opcode registry.

use cakevm_isa::InstructionDef;

use crate::error::{Error, Result};

/// Number of index slots: one per possible byte code.
pub const SLOT_COUNT: usize = 256;

/// Dense array keyed by numeric code, holding at most one definition per slot.
///
/// Built once per generation run and immutable afterwards. Every numeric-keyed
/// artifact iterates this index in ascending slot order, which is what makes
/// the enumeration, name table, and arity table bit-for-bit consistent with
/// each other.
#[derive(Debug)]
pub struct OpcodeIndex {
    slots: [Option<InstructionDef>; SLOT_COUNT],
}

impl OpcodeIndex {
    /// Build the index from a registry, failing on the first opcode collision.
    pub fn build(registry: &[InstructionDef]) -> Result<Self> {
        let mut slots: [Option<InstructionDef>; SLOT_COUNT] = [None; SLOT_COUNT];
        for insn in registry {
            let slot = &mut slots[insn.code as usize];
            if let Some(prev) = *slot {
                return Err(Error::OpcodeCollision {
                    code: insn.code,
                    first: prev.mnemonic,
                    second: insn.mnemonic,
                });
            }
            *slot = Some(*insn);
        }
        log::debug!("indexed {} opcodes into {SLOT_COUNT} slots", registry.len());
        Ok(Self { slots })
    }

    /// Look up the definition for a byte code, if that slot is occupied.
    pub fn get(&self, code: u8) -> Option<&InstructionDef> {
        self.slots[code as usize].as_ref()
    }

    /// Occupied slots in ascending code order.
    pub fn occupied(&self) -> impl Iterator<Item = &InstructionDef> + '_ {
        self.slots.iter().filter_map(|slot| slot.as_ref())
    }

    /// Number of occupied slots.
    pub fn len(&self) -> usize {
        self.occupied().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
