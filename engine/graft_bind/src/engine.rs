//! The orchestrating match engine.

use crate::{compatible, contract_id, discover, ContractId, ConventionNaming, HolderGroup, NamingPolicy, Slot};
use graft_meta::{FunctionType, Name, SharedInterner, TypeDesc, TypeUniverse};
use rustc_hash::{FxHashMap, FxHashSet};
use tracing::{debug, trace};

/// Which kind of member a binding was made against.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum MatchKind {
    Method,
    Property,
}

/// A binding of exactly one slot to exactly one candidate member.
///
/// At most one binding exists per slot: the first successful match wins and
/// later discoveries of the same slot are ignored. The member's effective
/// call signature equals `slot.signature` by construction.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct MatchingMember {
    /// The bound slot.
    pub slot: Slot,
    /// Declaring type of the matched member.
    pub owner: Name,
    /// Name of the matched member.
    pub member: Name,
    pub kind: MatchKind,
    /// The contract under which the member is exported.
    pub contract: ContractId,
}

/// The decoration payload for a matched member: the contract to export it
/// under and the function type to export it as.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct ExportTag {
    pub contract: ContractId,
    pub signature: FunctionType,
}

/// Orchestrates slot discovery, type scanning, and binding over one type
/// universe.
///
/// All state - holder groups, bindings, the bound-slot set, and the
/// per-type match cache - is owned by the engine instance, so independent
/// compositions can coexist by creating independent engines. The engine is
/// single-pass and single-threaded; hosts composing from multiple threads
/// must wrap it in their own lock.
pub struct MatchEngine<'u, N = ConventionNaming> {
    universe: &'u TypeUniverse,
    names: SharedInterner,
    naming: N,
    groups: Vec<HolderGroup>,
    bindings: Vec<MatchingMember>,
    /// Slots already bound, keyed by `(holder, field)`.
    bound: FxHashSet<(Name, Name)>,
    /// Memoized per-type scan results. Purely a scan-avoidance cache; it
    /// has no externally observable effect on the binding set.
    type_cache: FxHashMap<Name, bool>,
}

impl<'u> MatchEngine<'u, ConventionNaming> {
    /// Engine with the default naming convention.
    pub fn with_convention(universe: &'u TypeUniverse, names: SharedInterner) -> Self {
        Self::new(universe, names, ConventionNaming::new())
    }
}

impl<'u, N: NamingPolicy> MatchEngine<'u, N> {
    /// Create an engine and run slot discovery over `universe`.
    pub fn new(universe: &'u TypeUniverse, names: SharedInterner, naming: N) -> Self {
        let groups = discover(universe);
        debug!(holders = groups.len(), "slot discovery complete");
        Self {
            universe,
            names,
            naming,
            groups,
            bindings: Vec::new(),
            bound: FxHashSet::default(),
            type_cache: FxHashMap::default(),
        }
    }

    /// The discovered holder groups.
    pub fn holder_groups(&self) -> &[HolderGroup] {
        &self.groups
    }

    /// Handle to the shared interner.
    pub fn interner(&self) -> &SharedInterner {
        &self.names
    }

    /// The per-type scan predicate, handed to the composition container's
    /// type filter.
    ///
    /// Returns true iff the type contributes at least one member matching
    /// some slot, recording a binding for every first-time slot match along
    /// the way. Results are memoized per type; repeated queries neither
    /// rescan nor rebind.
    pub fn filter_type(&mut self, type_name: Name) -> bool {
        if let Some(&cached) = self.type_cache.get(&type_name) {
            return cached;
        }
        let universe = self.universe;
        let matched = match universe.get(type_name) {
            Some(ty) => self.scan_type(ty),
            None => false,
        };
        self.type_cache.insert(type_name, matched);
        matched
    }

    /// Scan one candidate type against every associated holder group.
    ///
    /// Worst case is O(slots x members) per type. A catch-all holder
    /// associates with every type, so there is no smaller pre-filtered set
    /// to lean on; this is acceptable because the universe is process-local
    /// and enumerated once.
    fn scan_type(&mut self, ty: &TypeDesc) -> bool {
        let mut matched = false;
        for group in &self.groups {
            if !self.naming.type_association(ty, group.holder, &self.names) {
                continue;
            }
            for member in &ty.members {
                for slot in &group.slots {
                    if !self.naming.member_association(member, slot, &self.names) {
                        continue;
                    }
                    if !compatible(member, &slot.signature) {
                        continue;
                    }
                    // The type-level result counts every match, including
                    // matches against slots that are already bound.
                    matched = true;
                    let key = slot.key();
                    if self.bound.contains(&key) {
                        continue;
                    }
                    self.bound.insert(key);
                    let contract = contract_id(slot, &self.names);
                    trace!(
                        contract = %contract.display(&*self.names),
                        member = self.names.lookup(member.name),
                        owner = self.names.lookup(member.owner),
                        "slot bound"
                    );
                    self.bindings.push(MatchingMember {
                        slot: slot.clone(),
                        owner: member.owner,
                        member: member.name,
                        kind: if member.is_property() {
                            MatchKind::Property
                        } else {
                            MatchKind::Method
                        },
                        contract,
                    });
                }
            }
        }
        matched
    }

    /// Drive the scan over the whole universe in declaration order.
    ///
    /// Convenience for hosts that are not container-driven; returns the
    /// number of matching types. Declaration order is the fixed enumeration
    /// order that makes "first encountered" deterministic.
    pub fn scan_all(&mut self) -> usize {
        let type_names: Vec<Name> = self.universe.types().map(|t| t.name).collect();
        type_names
            .into_iter()
            .filter(|&name| self.filter_type(name))
            .count()
    }

    /// The export decision for a member: its decoration payload if a
    /// binding was recorded for it, `None` otherwise.
    ///
    /// This reuses the binding created during scanning; it never re-derives
    /// a match.
    pub fn export_decision(&self, owner: Name, member: Name) -> Option<ExportTag> {
        self.bindings
            .iter()
            .find(|mm| mm.owner == owner && mm.member == member)
            .map(|mm| ExportTag {
                contract: mm.contract,
                signature: mm.slot.signature.clone(),
            })
    }

    /// All recorded bindings, in binding order.
    pub fn bindings(&self) -> &[MatchingMember] {
        &self.bindings
    }

    /// Bindings made against methods.
    pub fn method_bindings(&self) -> impl Iterator<Item = &MatchingMember> {
        self.bindings
            .iter()
            .filter(|mm| mm.kind == MatchKind::Method)
    }

    /// Bindings made against properties.
    pub fn property_bindings(&self) -> impl Iterator<Item = &MatchingMember> {
        self.bindings
            .iter()
            .filter(|mm| mm.kind == MatchKind::Property)
    }

    /// Slots that never matched any member.
    ///
    /// Distinct from slots that matched but whose export lookup came back
    /// absent; those appear in the resolve audit instead.
    pub fn unbound_slots(&self) -> Vec<&Slot> {
        self.groups
            .iter()
            .flat_map(|group| &group.slots)
            .filter(|slot| !self.bound.contains(&slot.key()))
            .collect()
    }
}
