//! Graft Meta - type-universe metadata for the graft binding engine.
//!
//! This crate models an already-loaded type universe as plain immutable
//! data: interned names, opaque type identities, function signatures, and
//! member/type descriptors. Hosts populate a [`TypeUniverse`] once through
//! [`UniverseBuilder`] (the single adapter over whatever introspection
//! facility they have); the matching engine in `graft_bind` then works on
//! descriptors alone and never touches reflection.
//!
//! # Architecture
//!
//! - `Name` / `StringInterner`: compact interned identifiers
//! - `TypeId` / `TypeInterner`: opaque identities for types referenced in
//!   signatures, with pre-interned primitives
//! - `FunctionType` / `ValueType`: structural call signatures and declared
//!   value types
//! - `MemberDesc` / `TypeDesc`: candidate members and declaring types
//! - `TypeUniverse` / `UniverseBuilder`: the declaration-ordered universe
//! - `SlotStore` / `SlotTable`: where resolved slot values are written

mod decl;
mod interner;
mod member;
mod name;
mod signature;
mod slot_store;
mod type_id;
mod universe;

pub use decl::{StaticField, TypeDesc, TypeFlags};
pub use interner::{InternError, SharedInterner, StringInterner, StringLookup};
pub use member::{MemberDesc, MemberFlags, MemberKind};
pub use name::Name;
pub use signature::{FunctionType, ValueType};
pub use slot_store::{SlotStore, SlotTable};
pub use type_id::{TypeId, TypeInterner};
pub use universe::{TypeUniverse, UniverseBuilder, UniverseError};
