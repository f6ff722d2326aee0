//! Storage for resolved slot values.

use crate::Name;
use rustc_hash::FxHashMap;

/// Destination for resolved slot values.
///
/// The resolver writes each resolved value into the slot addressed by
/// `(holder, field)`. Hosts whose slots are real mutable statics implement
/// this trait over their own storage; [`SlotTable`] is the provided
/// in-memory implementation.
///
/// Writes must be idempotent: storing the same value twice leaves the slot
/// in the same state.
pub trait SlotStore<V> {
    /// Write `value` into the slot `(holder, field)`, replacing any prior
    /// value.
    fn store(&mut self, holder: Name, field: Name, value: V);

    /// Read the current value of the slot, if one was ever written.
    fn load(&self, holder: Name, field: Name) -> Option<&V>;
}

/// Map-backed slot storage.
///
/// A slot that was never written is absent; callers observe it at its
/// default through their own fallback, matching the "absent lookup leaves
/// the prior value" resolution rule.
pub struct SlotTable<V> {
    cells: FxHashMap<(Name, Name), V>,
}

impl<V> SlotTable<V> {
    /// Create an empty table.
    pub fn new() -> Self {
        Self {
            cells: FxHashMap::default(),
        }
    }

    /// Number of slots holding a value.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether no slot holds a value.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl<V> Default for SlotTable<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> SlotStore<V> for SlotTable<V> {
    fn store(&mut self, holder: Name, field: Name, value: V) {
        self.cells.insert((holder, field), value);
    }

    fn load(&self, holder: Name, field: Name) -> Option<&V> {
        self.cells.get(&(holder, field))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::StringInterner;
    use pretty_assertions::assert_eq;

    #[test]
    fn store_and_load() {
        let interner = StringInterner::new();
        let holder = interner.intern("Holder");
        let field = interner.intern("Field");

        let mut table: SlotTable<&str> = SlotTable::new();
        assert!(table.is_empty());
        assert_eq!(table.load(holder, field), None);

        table.store(holder, field, "value");
        assert_eq!(table.load(holder, field), Some(&"value"));
        assert_eq!(table.len(), 1);

        // Re-storing the same value is a no-op observationally
        table.store(holder, field, "value");
        assert_eq!(table.load(holder, field), Some(&"value"));
        assert_eq!(table.len(), 1);
    }
}
