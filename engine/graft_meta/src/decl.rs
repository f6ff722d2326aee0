//! Type declarations: flags, static fields, and descriptors.

use crate::{MemberDesc, MemberFlags, MemberKind, Name, TypeId, ValueType};
use bitflags::bitflags;
use smallvec::SmallVec;

bitflags! {
    /// Declared properties of a type in the universe.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    pub struct TypeFlags: u8 {
        /// Cannot be instantiated.
        const ABSTRACT = 1 << 0;
        /// Cannot be subclassed.
        const SEALED = 1 << 1;
    }
}

/// A public static field declared on a type.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct StaticField {
    pub name: Name,
    /// Declared type of the field. Only `Function`-typed fields qualify as
    /// slots.
    pub ty: ValueType,
}

/// A type in the universe: its name, flags, public members, and public
/// static fields.
///
/// Descriptors are populated once by the host's introspection adapter and
/// treated as plain immutable data afterwards. Declaration order of members
/// and fields is preserved; matching enumerates them in that order.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct TypeDesc {
    pub name: Name,
    pub flags: TypeFlags,
    pub members: Vec<MemberDesc>,
    pub static_fields: Vec<StaticField>,
}

impl TypeDesc {
    /// Create an empty descriptor.
    pub fn new(name: Name, flags: TypeFlags) -> Self {
        Self {
            name,
            flags,
            members: Vec::new(),
            static_fields: Vec::new(),
        }
    }

    /// A pure static container: non-instantiable and non-extensible.
    ///
    /// Only such types act as slot holders.
    pub fn is_static_container(&self) -> bool {
        self.flags.contains(TypeFlags::ABSTRACT | TypeFlags::SEALED)
    }

    /// Add an instance method.
    pub fn method(self, name: Name, params: impl IntoIterator<Item = TypeId>, ret: TypeId) -> Self {
        self.push_method(name, params, ret, MemberFlags::empty())
    }

    /// Add a static method.
    pub fn static_method(
        self,
        name: Name,
        params: impl IntoIterator<Item = TypeId>,
        ret: TypeId,
    ) -> Self {
        self.push_method(name, params, ret, MemberFlags::STATIC)
    }

    fn push_method(
        mut self,
        name: Name,
        params: impl IntoIterator<Item = TypeId>,
        ret: TypeId,
        flags: MemberFlags,
    ) -> Self {
        let params: SmallVec<[TypeId; 4]> = params.into_iter().collect();
        self.members.push(MemberDesc {
            owner: self.name,
            name,
            kind: MemberKind::Method { params, ret },
            flags,
        });
        self
    }

    /// Add a property with explicit accessor availability.
    pub fn property(mut self, name: Name, value: ValueType, readable: bool, writable: bool) -> Self {
        self.members.push(MemberDesc {
            owner: self.name,
            name,
            kind: MemberKind::Property {
                value,
                readable,
                writable,
            },
            flags: MemberFlags::empty(),
        });
        self
    }

    /// Add a public static field.
    pub fn static_field(mut self, name: Name, ty: ValueType) -> Self {
        self.static_fields.push(StaticField { name, ty });
        self
    }
}
