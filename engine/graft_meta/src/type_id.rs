//! Opaque type identity for signature matching.

use crate::{Name, StringInterner, StringLookup};
use rustc_hash::FxHashMap;
use std::fmt;

/// Opaque identity for a host type referenced in a signature.
///
/// Matching is purely structural over these identities: two parameter or
/// return types are "the same" iff their `TypeId`s are equal. Common
/// primitives are pre-interned; everything else is interned by name through
/// [`TypeInterner`].
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct TypeId(u32);

impl TypeId {
    // Pre-interned primitive types
    pub const INT: TypeId = TypeId(0);
    pub const FLOAT: TypeId = TypeId(1);
    pub const BOOL: TypeId = TypeId(2);
    pub const STR: TypeId = TypeId(3);
    pub const CHAR: TypeId = TypeId(4);
    pub const BYTE: TypeId = TypeId(5);
    pub const VOID: TypeId = TypeId(6);

    /// First ID available for host-interned types.
    pub const FIRST_CUSTOM: u32 = 7;

    /// Raw index value.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    #[inline]
    const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for TypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypeId({})", self.0)
    }
}

/// Interner mapping type names to [`TypeId`]s and back.
///
/// Interning takes `&mut self`: the universe is populated in one
/// single-threaded pass, so there is nothing to synchronize here.
pub struct TypeInterner {
    by_name: FxHashMap<Name, TypeId>,
    names: Vec<Name>,
}

impl TypeInterner {
    /// Names of the pre-interned primitives, in `TypeId` order.
    const PRIMITIVES: [&'static str; 7] = ["int", "float", "bool", "str", "char", "byte", "void"];

    /// Create a type interner with primitives pre-interned against `names`.
    pub fn new(names: &StringInterner) -> Self {
        let mut interner = Self {
            by_name: FxHashMap::default(),
            names: Vec::with_capacity(Self::PRIMITIVES.len()),
        };
        for primitive in Self::PRIMITIVES {
            let name = names.intern(primitive);
            let id = TypeId(u32::try_from(interner.names.len()).unwrap_or(u32::MAX));
            interner.by_name.insert(name, id);
            interner.names.push(name);
        }
        interner
    }

    /// Intern a type by name, returning its id.
    pub fn intern(&mut self, name: Name) -> TypeId {
        if let Some(&id) = self.by_name.get(&name) {
            return id;
        }
        // Universes are process-local; a u32 of distinct types cannot
        // realistically be exceeded, saturate instead of failing.
        let id = TypeId(u32::try_from(self.names.len()).unwrap_or(u32::MAX));
        self.by_name.insert(name, id);
        self.names.push(name);
        id
    }

    /// The interned name of a type id.
    pub fn name(&self, id: TypeId) -> Name {
        self.names[id.index()]
    }

    /// Render a type id for diagnostics.
    pub fn display<'a, L: StringLookup>(&self, id: TypeId, lookup: &'a L) -> &'a str {
        lookup.lookup(self.name(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn primitives_pre_interned() {
        let names = StringInterner::new();
        let mut types = TypeInterner::new(&names);

        assert_eq!(types.intern(names.intern("int")), TypeId::INT);
        assert_eq!(types.intern(names.intern("str")), TypeId::STR);
        assert_eq!(types.display(TypeId::BOOL, &names), "bool");
    }

    #[test]
    fn custom_types_are_stable() {
        let names = StringInterner::new();
        let mut types = TypeInterner::new(&names);

        let widget = types.intern(names.intern("Widget"));
        let gadget = types.intern(names.intern("Gadget"));

        assert_ne!(widget, gadget);
        assert!(widget.raw() >= TypeId::FIRST_CUSTOM);
        assert_eq!(types.intern(names.intern("Widget")), widget);
        assert_eq!(types.display(widget, &names), "Widget");
    }
}
