//! Type-level and member-level association predicates.

use crate::Slot;
use graft_meta::{MemberDesc, Name, StringInterner, TypeDesc};

/// Pluggable naming conventions for associating candidate types and
/// members with holders and slots.
///
/// Both predicates may be fully replaced; [`ConventionNaming`] is pure
/// convention sugar. Neither predicate looks at signatures - structural
/// compatibility is checked separately, and a member matches a slot iff
/// both the member predicate and the compatibility check hold.
pub trait NamingPolicy {
    /// Is `candidate` associated with the holder type named `holder`?
    fn type_association(&self, candidate: &TypeDesc, holder: Name, names: &StringInterner) -> bool;

    /// Does `member`'s name correspond to `slot`'s field name?
    fn member_association(&self, member: &MemberDesc, slot: &Slot, names: &StringInterner) -> bool;
}

/// The default convention:
///
/// - a holder named `catch_all` (default `"Replacements"`) is associated
///   with *every* candidate type, letting one holder aggregate slots
///   satisfied by many unrelated types; a *candidate* bearing the
///   catch-all name is likewise associated with every holder, so one
///   aggregator type can provide for slots from many holders;
/// - otherwise the holder name with the trailing `suffix` (default
///   `"Replacement"`) stripped must equal the candidate's simple name, so
///   holder `FooReplacement` binds candidate `Foo`;
/// - a member matches a slot when their names are equal; additionally,
///   when the member's declaring type bears the `catch_all` name, the
///   member name with the getter prefix (default `"get_"`) stripped may
///   equal the holder name and field name concatenated, giving the
///   aggregator's members unique names per originating holder.
#[derive(Clone, Debug)]
pub struct ConventionNaming {
    suffix: String,
    catch_all: String,
    getter_prefix: String,
}

impl ConventionNaming {
    /// Convention with the stock names.
    pub fn new() -> Self {
        Self {
            suffix: "Replacement".to_owned(),
            catch_all: "Replacements".to_owned(),
            getter_prefix: "get_".to_owned(),
        }
    }

    /// Override the holder-name suffix.
    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    /// Override the catch-all holder name.
    pub fn with_catch_all(mut self, catch_all: impl Into<String>) -> Self {
        self.catch_all = catch_all.into();
        self
    }

    fn strip_getter<'a>(&self, member_name: &'a str) -> &'a str {
        member_name
            .strip_prefix(&self.getter_prefix)
            .unwrap_or(member_name)
    }
}

impl Default for ConventionNaming {
    fn default() -> Self {
        Self::new()
    }
}

impl NamingPolicy for ConventionNaming {
    fn type_association(&self, candidate: &TypeDesc, holder: Name, names: &StringInterner) -> bool {
        let holder_name = names.lookup(holder);
        let candidate_name = names.lookup(candidate.name);
        if holder_name == self.catch_all || candidate_name == self.catch_all {
            return true;
        }
        let stripped = holder_name.strip_suffix(&self.suffix).unwrap_or(holder_name);
        stripped == candidate_name
    }

    fn member_association(&self, member: &MemberDesc, slot: &Slot, names: &StringInterner) -> bool {
        if member.name == slot.field {
            return true;
        }
        // Aggregator form: a type named like the catch-all holder exposes
        // `HolderName + FieldName` members (getter prefix stripped).
        if names.lookup(member.owner) != self.catch_all {
            return false;
        }
        let member_name = self.strip_getter(names.lookup(member.name));
        let holder_name = names.lookup(slot.holder);
        let field_name = names.lookup(slot.field);
        member_name.len() == holder_name.len() + field_name.len()
            && member_name.starts_with(holder_name)
            && member_name.ends_with(field_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use graft_meta::{
        FunctionType, MemberFlags, MemberKind, SharedInterner, TypeFlags, TypeId,
    };

    fn slot(names: &StringInterner, holder: &str, field: &str) -> Slot {
        Slot {
            holder: names.intern(holder),
            field: names.intern(field),
            signature: FunctionType::nullary(TypeId::VOID),
        }
    }

    fn method(names: &StringInterner, owner: &str, name: &str) -> MemberDesc {
        MemberDesc {
            owner: names.intern(owner),
            name: names.intern(name),
            kind: MemberKind::Method {
                params: [].into_iter().collect(),
                ret: TypeId::VOID,
            },
            flags: MemberFlags::empty(),
        }
    }

    #[test]
    fn suffixed_holder_binds_plain_candidate() {
        let names = SharedInterner::new();
        let naming = ConventionNaming::new();
        let candidate = TypeDesc::new(names.intern("Foo"), TypeFlags::empty());

        assert!(naming.type_association(&candidate, names.intern("FooReplacement"), &names));
        assert!(naming.type_association(&candidate, names.intern("Foo"), &names));
        assert!(!naming.type_association(&candidate, names.intern("BarReplacement"), &names));
    }

    #[test]
    fn catch_all_holder_associates_with_everything() {
        let names = SharedInterner::new();
        let naming = ConventionNaming::new();
        let holder = names.intern("Replacements");

        for candidate in ["Foo", "Bar", "Unrelated"] {
            let ty = TypeDesc::new(names.intern(candidate), TypeFlags::empty());
            assert!(naming.type_association(&ty, holder, &names));
        }
    }

    #[test]
    fn aggregator_candidate_associates_with_every_holder() {
        let names = SharedInterner::new();
        let naming = ConventionNaming::new();
        let aggregator = TypeDesc::new(names.intern("Replacements"), TypeFlags::empty());

        assert!(naming.type_association(&aggregator, names.intern("ConsoleReplacement"), &names));
        assert!(naming.type_association(&aggregator, names.intern("FileReplacement"), &names));
    }

    #[test]
    fn configured_catch_all_replaces_default() {
        let names = SharedInterner::new();
        let naming = ConventionNaming::new().with_catch_all("Overrides");
        let ty = TypeDesc::new(names.intern("Anything"), TypeFlags::empty());

        assert!(naming.type_association(&ty, names.intern("Overrides"), &names));
        assert!(!naming.type_association(&ty, names.intern("Replacements"), &names));
    }

    #[test]
    fn direct_member_name_match() {
        let names = SharedInterner::new();
        let naming = ConventionNaming::new();
        let s = slot(&names, "ConsoleReplacement", "WriteLine");

        assert!(naming.member_association(&method(&names, "Console", "WriteLine"), &s, &names));
        assert!(!naming.member_association(&method(&names, "Console", "Write"), &s, &names));
    }

    #[test]
    fn aggregator_member_uses_concatenated_name() {
        let names = SharedInterner::new();
        let naming = ConventionNaming::new();
        let s = slot(&names, "Console", "WriteLine");

        // Concatenated form only accepted on a type named like the catch-all
        let aggregated = method(&names, "Replacements", "ConsoleWriteLine");
        let getter = method(&names, "Replacements", "get_ConsoleWriteLine");
        let elsewhere = method(&names, "Other", "ConsoleWriteLine");

        assert!(naming.member_association(&aggregated, &s, &names));
        assert!(naming.member_association(&getter, &s, &names));
        assert!(!naming.member_association(&elsewhere, &s, &names));
    }
}
