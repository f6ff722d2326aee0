//! The resolve phase: export lookup and slot writes.

use crate::{ContractId, MatchEngine, NamingPolicy};
use graft_meta::{FunctionType, Name, SlotStore};
use rustc_hash::FxHashMap;
use tracing::{debug, trace};

/// The composition container's export surface, as seen by the resolver.
///
/// `probe_existence` must force the container to materialize all of its
/// parts (and therefore all export tags). The resolver calls it before the
/// first lookup; a container that materializes lazily and is never probed
/// would answer every lookup with absent, which is why the probe is part of
/// the contract rather than an implementation courtesy.
pub trait ExportRegistry<V> {
    /// Force materialization of all parts. Side effect only.
    fn probe_existence(&mut self);

    /// A previously registered value matching exactly this function type
    /// and contract, or `None` when there is no such value *or* more than
    /// one (ambiguity is treated as absence).
    fn lookup(&self, signature: &FunctionType, contract: ContractId) -> Option<V>;
}

/// How a single binding fared during resolution.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum ResolveStatus {
    /// A value was found and written into the slot.
    Resolved,
    /// The registry had no (unambiguous) value; the slot keeps its prior
    /// value and no fault is raised. Strict callers inspect the audit.
    Absent,
}

/// Audit record for one binding's resolution.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct ResolveOutcome {
    pub contract: ContractId,
    pub holder: Name,
    pub field: Name,
    pub status: ResolveStatus,
}

impl<N: NamingPolicy> MatchEngine<'_, N> {
    /// Resolve every recorded binding against `registry`, writing found
    /// values into `slots`.
    ///
    /// Probes the registry first, then looks each binding up by
    /// `(function type, contract id)`. Absent lookups leave the slot at
    /// its prior value. Idempotent: resolving twice against an unchanged
    /// registry leaves the slots in the same state, and the engine's
    /// bindings remain queryable afterwards.
    ///
    /// The returned audit covers exactly the bound slots; slots that never
    /// matched are reported by
    /// [`unbound_slots`](MatchEngine::unbound_slots) instead.
    pub fn resolve_all<V, R, S>(&self, registry: &mut R, slots: &mut S) -> Vec<ResolveOutcome>
    where
        R: ExportRegistry<V>,
        S: SlotStore<V>,
    {
        // Materialize before any lookup; see the trait contract.
        registry.probe_existence();

        let names = self.interner();
        let mut audit = Vec::with_capacity(self.bindings().len());
        for mm in self.bindings() {
            let status = match registry.lookup(&mm.slot.signature, mm.contract) {
                Some(value) => {
                    slots.store(mm.slot.holder, mm.slot.field, value);
                    ResolveStatus::Resolved
                }
                None => {
                    trace!(
                        contract = %mm.contract.display(&**names),
                        "no export for bound slot"
                    );
                    ResolveStatus::Absent
                }
            };
            audit.push(ResolveOutcome {
                contract: mm.contract,
                holder: mm.slot.holder,
                field: mm.slot.field,
                status,
            });
        }
        debug!(
            resolved = audit
                .iter()
                .filter(|o| o.status == ResolveStatus::Resolved)
                .count(),
            bindings = audit.len(),
            "resolve pass complete"
        );
        audit
    }
}

/// In-memory export registry keyed by contract id.
///
/// Lookup requires an exact function-type match and exactly one candidate;
/// zero or several registered values under the same contract and signature
/// both come back absent.
pub struct ExportTable<V> {
    exports: FxHashMap<ContractId, Vec<(FunctionType, V)>>,
    materialized: bool,
}

impl<V> ExportTable<V> {
    /// Create an empty table.
    pub fn new() -> Self {
        Self {
            exports: FxHashMap::default(),
            materialized: false,
        }
    }

    /// Register a value under a contract and function type.
    pub fn insert(&mut self, contract: ContractId, signature: FunctionType, value: V) {
        self.exports
            .entry(contract)
            .or_default()
            .push((signature, value));
    }

    /// Whether `probe_existence` has been called.
    pub fn is_materialized(&self) -> bool {
        self.materialized
    }
}

impl<V> Default for ExportTable<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Clone> ExportRegistry<V> for ExportTable<V> {
    fn probe_existence(&mut self) {
        self.materialized = true;
    }

    fn lookup(&self, signature: &FunctionType, contract: ContractId) -> Option<V> {
        let candidates = self.exports.get(&contract)?;
        let mut found: Option<&V> = None;
        for (sig, value) in candidates {
            if sig == signature {
                if found.is_some() {
                    // Ambiguous
                    return None;
                }
                found = Some(value);
            }
        }
        found.cloned()
    }
}
