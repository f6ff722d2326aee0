//! Contract identifiers for slot bindings.

use crate::Slot;
use graft_meta::{Name, StringInterner, StringLookup};
use std::fmt;

/// The unique string key under which a slot's value is exported and looked
/// up: `"{holder}.{field}"`, interned.
///
/// Injective over a discovery pass because `(holder, field)` pairs are
/// unique. The dot join is not escaped, so callers must choose holder
/// names that cannot collide across unrelated holders (e.g. holder `"A.B"`
/// field `"C"` versus holder `"A"` field `"B.C"`); that is a caller
/// precondition, not a detected error.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct ContractId(Name);

impl ContractId {
    /// The interned contract string.
    #[inline]
    pub fn name(self) -> Name {
        self.0
    }

    /// The contract string itself.
    pub fn as_str(self, names: &impl StringLookup) -> &str {
        names.lookup(self.0)
    }

    /// Format the contract id for display.
    pub fn display<L: StringLookup>(self, names: &L) -> ContractIdDisplay<'_> {
        ContractIdDisplay {
            contract: names.lookup(self.0),
        }
    }
}

/// Helper for displaying a [`ContractId`] with its resolved string.
pub struct ContractIdDisplay<'a> {
    contract: &'a str,
}

impl fmt::Display for ContractIdDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.contract)
    }
}

/// Derive the contract id for a slot.
pub fn contract_id(slot: &Slot, names: &StringInterner) -> ContractId {
    let holder = names.lookup(slot.holder);
    let field = names.lookup(slot.field);
    ContractId(names.intern(&format!("{holder}.{field}")))
}
