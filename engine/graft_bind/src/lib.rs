//! Graft Bind - slot discovery, signature matching, and binding.
//!
//! This crate turns a [`graft_meta::TypeUniverse`] into slot bindings and
//! drives them through a two-phase protocol against an external
//! composition container:
//!
//! 1. **Decorate** - [`MatchEngine::filter_type`] is the memoized per-type
//!    predicate the container consults while deciding which types to
//!    inspect; [`MatchEngine::export_decision`] tags each matched member
//!    with its contract id and function type.
//! 2. **Resolve** - once the container has materialized its parts,
//!    [`MatchEngine::resolve_all`] probes the registry (forcing
//!    materialization), looks every binding up by `(function type,
//!    contract id)`, and writes the results into the slot store.
//!
//! The ordering is a documented precondition: all decoration must be
//! finished before resolution starts, which is why `resolve_all` begins
//! with [`ExportRegistry::probe_existence`].
//!
//! # Architecture
//!
//! - `slot`: finds holder types and extracts their function-valued static
//!   fields as slots
//! - `naming`: pluggable type-level and member-level association
//!   predicates, with a convention-based default
//! - `signature`: strict structural compatibility of a member's effective
//!   call signature against a slot's function type
//! - `contract`: unique `"Holder.Field"` contract ids
//! - `engine`: the orchestrating match engine with per-instance state
//! - `resolve`: the export-registry seam and the resolution pass

mod contract;
mod engine;
mod naming;
mod resolve;
mod signature;
mod slot;

#[cfg(test)]
mod tests;

pub use contract::{contract_id, ContractId, ContractIdDisplay};
pub use engine::{ExportTag, MatchEngine, MatchKind, MatchingMember};
pub use naming::{ConventionNaming, NamingPolicy};
pub use resolve::{ExportRegistry, ExportTable, ResolveOutcome, ResolveStatus};
pub use signature::compatible;
pub use slot::{discover, HolderGroup, Slot};
