//! Candidate member descriptors.
//!
//! Methods and properties are represented as one tagged union with a shared
//! "effective call signature" projection, rather than a virtual hierarchy
//! over member kinds.

use crate::{FunctionType, Name, TypeId, ValueType};
use bitflags::bitflags;
use smallvec::SmallVec;

bitflags! {
    /// Member metadata flags.
    ///
    /// Both instance and static members are eligible for matching; the
    /// STATIC bit is carried as metadata only and never consulted by the
    /// matcher.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    pub struct MemberFlags: u8 {
        /// Declared static on its owning type.
        const STATIC = 1 << 0;
    }
}

/// The kind-specific part of a candidate member.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum MemberKind {
    /// A method with its own parameter and return types.
    Method {
        params: SmallVec<[TypeId; 4]>,
        ret: TypeId,
    },
    /// A property with a declared value type and accessor availability.
    Property {
        value: ValueType,
        readable: bool,
        writable: bool,
    },
}

/// A public member of a candidate type, considered as a possible provider
/// for a slot.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct MemberDesc {
    /// Declaring type.
    pub owner: Name,
    /// Member name.
    pub name: Name,
    pub kind: MemberKind,
    pub flags: MemberFlags,
}

impl MemberDesc {
    /// The member's effective call signature, if it has one.
    ///
    /// - a method projects to its own parameters and return;
    /// - a readable scalar property projects to its getter signature,
    ///   `() -> value`;
    /// - a readable function-typed property projects to the signature of
    ///   the function it yields;
    /// - a write-only property has no call signature and never matches.
    pub fn call_signature(&self) -> Option<FunctionType> {
        match &self.kind {
            MemberKind::Method { params, ret } => Some(FunctionType {
                params: params.clone(),
                ret: *ret,
            }),
            MemberKind::Property { readable: false, .. } => None,
            MemberKind::Property {
                value: ValueType::Scalar(ty),
                ..
            } => Some(FunctionType::nullary(*ty)),
            MemberKind::Property {
                value: ValueType::Function(sig),
                ..
            } => Some(sig.clone()),
        }
    }

    /// Whether this member is a property.
    pub fn is_property(&self) -> bool {
        matches!(self.kind, MemberKind::Property { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::StringInterner;
    use pretty_assertions::assert_eq;

    fn member(interner: &StringInterner, kind: MemberKind) -> MemberDesc {
        MemberDesc {
            owner: interner.intern("Widget"),
            name: interner.intern("Render"),
            kind,
            flags: MemberFlags::empty(),
        }
    }

    #[test]
    fn method_projects_own_signature() {
        let interner = StringInterner::new();
        let m = member(
            &interner,
            MemberKind::Method {
                params: [TypeId::INT].into_iter().collect(),
                ret: TypeId::STR,
            },
        );
        assert_eq!(
            m.call_signature(),
            Some(FunctionType::new([TypeId::INT], TypeId::STR))
        );
        assert!(!m.is_property());
    }

    #[test]
    fn scalar_property_projects_getter() {
        let interner = StringInterner::new();
        let m = member(
            &interner,
            MemberKind::Property {
                value: ValueType::Scalar(TypeId::BOOL),
                readable: true,
                writable: true,
            },
        );
        assert_eq!(m.call_signature(), Some(FunctionType::nullary(TypeId::BOOL)));
    }

    #[test]
    fn function_property_projects_yielded_signature() {
        let interner = StringInterner::new();
        let sig = FunctionType::new([TypeId::INT], TypeId::STR);
        let m = member(
            &interner,
            MemberKind::Property {
                value: ValueType::Function(sig.clone()),
                readable: true,
                writable: false,
            },
        );
        assert_eq!(m.call_signature(), Some(sig));
    }

    #[test]
    fn write_only_property_has_no_signature() {
        let interner = StringInterner::new();
        let m = member(
            &interner,
            MemberKind::Property {
                value: ValueType::Scalar(TypeId::BOOL),
                readable: false,
                writable: true,
            },
        );
        assert_eq!(m.call_signature(), None);
    }
}
