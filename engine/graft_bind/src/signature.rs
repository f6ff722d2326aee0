//! Strict signature compatibility.

use graft_meta::{FunctionType, MemberDesc};

/// Is `member` call-compatible with `signature`?
///
/// The member's effective call signature (its own parameters and return for
/// a method, the projection of its value type for a readable property) must
/// be element-wise equal to `signature`: same parameter types in the same
/// order, exactly the same return type. No covariance, no contravariance,
/// no implicit conversions. Write-only properties have no call signature
/// and never match.
pub fn compatible(member: &MemberDesc, signature: &FunctionType) -> bool {
    member
        .call_signature()
        .is_some_and(|effective| effective == *signature)
}

#[cfg(test)]
mod tests {
    use super::*;
    use graft_meta::{MemberFlags, MemberKind, StringInterner, TypeId, ValueType};

    fn method(names: &StringInterner, params: &[TypeId], ret: TypeId) -> MemberDesc {
        MemberDesc {
            owner: names.intern("Widget"),
            name: names.intern("Render"),
            kind: MemberKind::Method {
                params: params.iter().copied().collect(),
                ret,
            },
            flags: MemberFlags::empty(),
        }
    }

    #[test]
    fn exact_signature_matches() {
        let names = StringInterner::new();
        let want = FunctionType::new([TypeId::INT, TypeId::STR], TypeId::BOOL);

        assert!(compatible(
            &method(&names, &[TypeId::INT, TypeId::STR], TypeId::BOOL),
            &want
        ));
    }

    #[test]
    fn reordered_parameters_do_not_match() {
        let names = StringInterner::new();
        let want = FunctionType::new([TypeId::INT, TypeId::STR], TypeId::BOOL);

        assert!(!compatible(
            &method(&names, &[TypeId::STR, TypeId::INT], TypeId::BOOL),
            &want
        ));
        assert!(!compatible(
            &method(&names, &[TypeId::INT, TypeId::STR], TypeId::VOID),
            &want
        ));
        assert!(!compatible(&method(&names, &[TypeId::INT], TypeId::BOOL), &want));
    }

    #[test]
    fn readable_properties_match_via_projection() {
        let names = StringInterner::new();
        let delegate = FunctionType::new([TypeId::INT], TypeId::STR);

        let function_valued = MemberDesc {
            owner: names.intern("Widget"),
            name: names.intern("Renderer"),
            kind: MemberKind::Property {
                value: ValueType::Function(delegate.clone()),
                readable: true,
                writable: false,
            },
            flags: MemberFlags::empty(),
        };
        assert!(compatible(&function_valued, &delegate));

        let scalar = MemberDesc {
            owner: names.intern("Widget"),
            name: names.intern("Count"),
            kind: MemberKind::Property {
                value: ValueType::Scalar(TypeId::INT),
                readable: true,
                writable: true,
            },
            flags: MemberFlags::empty(),
        };
        assert!(compatible(&scalar, &FunctionType::nullary(TypeId::INT)));
        assert!(!compatible(&scalar, &delegate));
    }

    #[test]
    fn write_only_property_never_matches() {
        let names = StringInterner::new();
        let sink = MemberDesc {
            owner: names.intern("Widget"),
            name: names.intern("Sink"),
            kind: MemberKind::Property {
                value: ValueType::Scalar(TypeId::INT),
                readable: false,
                writable: true,
            },
            flags: MemberFlags::empty(),
        };
        assert!(!compatible(&sink, &FunctionType::nullary(TypeId::INT)));
    }
}
