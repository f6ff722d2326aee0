//! Slot discovery over the type universe.

use graft_meta::{FunctionType, Name, TypeUniverse, ValueType};

/// A function-valued static field discovered on a holder type.
///
/// Identity is the `(holder, field)` pair, unique within a discovery pass.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Slot {
    /// Simple name of the declaring holder type.
    pub holder: Name,
    /// Field name.
    pub field: Name,
    /// The field's declared function signature.
    pub signature: FunctionType,
}

impl Slot {
    /// The `(holder, field)` identity key.
    #[inline]
    pub fn key(&self) -> (Name, Name) {
        (self.holder, self.field)
    }
}

/// A holder type together with its slots, in field declaration order.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct HolderGroup {
    pub holder: Name,
    pub slots: Vec<Slot>,
}

/// Find holder types and extract their slots.
///
/// A type qualifies as a holder iff it is a pure static container
/// (non-instantiable and non-extensible). Its public static fields whose
/// *declared* type is a function signature become slots; holders with no
/// qualifying fields are dropped entirely.
///
/// Discovery is stateless: re-running it over the same universe yields the
/// same groups in the same order.
pub fn discover(universe: &TypeUniverse) -> Vec<HolderGroup> {
    let mut groups = Vec::new();
    for ty in universe.types() {
        if !ty.is_static_container() {
            continue;
        }
        let slots: Vec<Slot> = ty
            .static_fields
            .iter()
            .filter_map(|field| match &field.ty {
                ValueType::Function(signature) => Some(Slot {
                    holder: ty.name,
                    field: field.name,
                    signature: signature.clone(),
                }),
                ValueType::Scalar(_) => None,
            })
            .collect();
        if !slots.is_empty() {
            groups.push(HolderGroup {
                holder: ty.name,
                slots,
            });
        }
    }
    groups
}
