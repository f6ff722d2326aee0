//! Shared universe-building helpers for the engine tests.

#![expect(clippy::expect_used, reason = "Tests use expect for brevity")]

use graft_meta::{
    FunctionType, SharedInterner, TypeDesc, TypeFlags, TypeUniverse, UniverseBuilder,
};

pub(crate) fn holder_flags() -> TypeFlags {
    TypeFlags::ABSTRACT | TypeFlags::SEALED
}

/// Builder pre-seeded with a shared interner.
pub(crate) fn builder() -> UniverseBuilder {
    UniverseBuilder::new(SharedInterner::new())
}

pub(crate) fn add(builder: &mut UniverseBuilder, ty: TypeDesc) {
    builder.add_type(ty).expect("fresh type");
}

/// A holder type with a single function-valued slot.
pub(crate) fn holder(
    builder: &mut UniverseBuilder,
    type_name: &str,
    field: &str,
    signature: FunctionType,
) {
    let name = builder.name(type_name);
    let field = builder.name(field);
    let ty = TypeDesc::new(name, holder_flags())
        .static_field(field, graft_meta::ValueType::Function(signature));
    add(builder, ty);
}

pub(crate) fn finish(builder: UniverseBuilder) -> (TypeUniverse, SharedInterner) {
    let interner = builder.interner().clone();
    (builder.finish(), interner)
}
