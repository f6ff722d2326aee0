//! Structural call signatures and declared value types.

use crate::{StringLookup, TypeId, TypeInterner};
use smallvec::SmallVec;
use std::fmt::Write as _;

/// A function signature: ordered parameter types plus a return type.
///
/// Equality is fully structural and element-wise; there is no variance and
/// no implicit conversion anywhere in matching. This strictness is what
/// guards against accidental binding to members that merely share a name.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct FunctionType {
    /// Ordered parameter types.
    pub params: SmallVec<[TypeId; 4]>,
    /// Return type.
    pub ret: TypeId,
}

impl FunctionType {
    /// Create a signature from a parameter list and return type.
    pub fn new(params: impl IntoIterator<Item = TypeId>, ret: TypeId) -> Self {
        Self {
            params: params.into_iter().collect(),
            ret,
        }
    }

    /// A zero-parameter signature.
    pub fn nullary(ret: TypeId) -> Self {
        Self {
            params: SmallVec::new(),
            ret,
        }
    }

    /// Number of parameters.
    pub fn arity(&self) -> usize {
        self.params.len()
    }

    /// Render as `(a, b) -> r` for diagnostics.
    pub fn display<L: StringLookup>(&self, types: &TypeInterner, lookup: &L) -> String {
        let mut out = String::from("(");
        for (i, &param) in self.params.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            out.push_str(types.display(param, lookup));
        }
        let _ = write!(out, ") -> {}", types.display(self.ret, lookup));
        out
    }
}

/// The declared type of a static field or property value.
///
/// Slot discovery keys off the *declared* type: a field only qualifies as a
/// slot when its declared type denotes a function signature, not merely
/// when its value happens to be callable.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum ValueType {
    /// An ordinary (non-function) type.
    Scalar(TypeId),
    /// A function-typed value with this signature.
    Function(FunctionType),
}

impl ValueType {
    /// The function signature, if this is a function type.
    pub fn as_function(&self) -> Option<&FunctionType> {
        match self {
            ValueType::Function(sig) => Some(sig),
            ValueType::Scalar(_) => None,
        }
    }
}
