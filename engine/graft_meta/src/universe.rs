//! The type universe and its builder.

use crate::{Name, SharedInterner, TypeDesc};
use rustc_hash::FxHashMap;

/// Error raised while assembling a universe.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UniverseError {
    /// Two descriptors were registered under the same type name.
    #[error("duplicate type `{0}` in universe")]
    DuplicateType(String),
}

/// An already-enumerated type universe.
///
/// Iteration order is declaration order; this is the fixed enumeration
/// order that makes "first encountered match wins" deterministic.
pub struct TypeUniverse {
    types: Vec<TypeDesc>,
    by_name: FxHashMap<Name, usize>,
}

impl TypeUniverse {
    /// All types, in declaration order.
    pub fn types(&self) -> impl Iterator<Item = &TypeDesc> {
        self.types.iter()
    }

    /// Look up a type by name.
    pub fn get(&self, name: Name) -> Option<&TypeDesc> {
        self.by_name.get(&name).map(|&idx| &self.types[idx])
    }

    /// Number of types in the universe.
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Whether the universe holds no types.
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

/// Builder for a [`TypeUniverse`].
///
/// This is the single adapter behind which all host introspection lives:
/// whatever facility enumerates the host's loaded types writes plain
/// descriptors through this builder exactly once, and matching never sees
/// anything but the resulting immutable data.
pub struct UniverseBuilder {
    interner: SharedInterner,
    types: Vec<TypeDesc>,
    by_name: FxHashMap<Name, usize>,
}

impl UniverseBuilder {
    /// Create a builder sharing `interner`.
    pub fn new(interner: SharedInterner) -> Self {
        Self {
            interner,
            types: Vec::new(),
            by_name: FxHashMap::default(),
        }
    }

    /// Intern a name through the builder's interner.
    pub fn name(&self, s: &str) -> Name {
        self.interner.intern(s)
    }

    /// Handle to the shared interner.
    pub fn interner(&self) -> &SharedInterner {
        &self.interner
    }

    /// Register a type descriptor.
    pub fn add_type(&mut self, ty: TypeDesc) -> Result<(), UniverseError> {
        if self.by_name.contains_key(&ty.name) {
            return Err(UniverseError::DuplicateType(
                self.interner.lookup(ty.name).to_owned(),
            ));
        }
        self.by_name.insert(ty.name, self.types.len());
        self.types.push(ty);
        Ok(())
    }

    /// Finish the universe.
    pub fn finish(self) -> TypeUniverse {
        TypeUniverse {
            types: self.types,
            by_name: self.by_name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TypeFlags;
    use pretty_assertions::assert_eq;

    #[test]
    fn declaration_order_is_preserved() {
        let interner = SharedInterner::new();
        let mut builder = UniverseBuilder::new(interner);

        let a = builder.name("Alpha");
        let b = builder.name("Beta");
        assert_eq!(builder.add_type(TypeDesc::new(a, TypeFlags::empty())), Ok(()));
        assert_eq!(builder.add_type(TypeDesc::new(b, TypeFlags::empty())), Ok(()));

        let universe = builder.finish();
        let order: Vec<Name> = universe.types().map(|t| t.name).collect();
        assert_eq!(order, vec![a, b]);
        assert_eq!(universe.len(), 2);
        assert!(universe.get(a).is_some());
    }

    #[test]
    fn duplicate_type_is_rejected() {
        let interner = SharedInterner::new();
        let mut builder = UniverseBuilder::new(interner);

        let name = builder.name("Twice");
        assert_eq!(
            builder.add_type(TypeDesc::new(name, TypeFlags::empty())),
            Ok(())
        );
        assert_eq!(
            builder.add_type(TypeDesc::new(name, TypeFlags::empty())),
            Err(UniverseError::DuplicateType("Twice".to_owned()))
        );
    }

    #[test]
    fn unknown_type_lookup_is_none() {
        let interner = SharedInterner::new();
        let builder = UniverseBuilder::new(interner.clone());
        let universe = builder.finish();

        assert!(universe.is_empty());
        assert!(universe.get(interner.intern("Missing")).is_none());
    }
}
