//! The target seam: what a proxy forwards to.
//!
//! A [`Target`] exposes a closed table of named members and resolves
//! reads, writes, and calls against it by name. The proxy never inspects
//! a target beyond this trait, which is what keeps it reusable across
//! unrelated subjects.

use crate::error::Result;
use crate::value::Value;
use serde::{Deserialize, Serialize};

/// Kind of a member exposed by a target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemberKind {
    /// Stored state: readable, usually writable.
    Property,
    /// Behavior: readable as a handle, executable via call.
    Method,
}

impl MemberKind {
    /// String form of the kind, for logs.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Property => "property",
            Self::Method => "method",
        }
    }
}

impl std::fmt::Display for MemberKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A named entry in a target's member table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    /// Member name as used in lookups.
    pub name: String,
    /// Whether the member is state or behavior.
    pub kind: MemberKind,
}

impl Member {
    /// Create a property member.
    #[must_use]
    pub fn property(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: MemberKind::Property,
        }
    }

    /// Create a method member.
    #[must_use]
    pub fn method(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: MemberKind::Method,
        }
    }

    /// Check whether this member is behavior rather than state.
    #[must_use]
    pub const fn is_method(&self) -> bool {
        matches!(self.kind, MemberKind::Method)
    }
}

/// Core trait for objects standing behind a proxy.
///
/// Implementations answer member access by name. Reads of property
/// members return their current value; reads of method members return a
/// [`Value::Method`] handle without executing anything. Any name outside
/// the member table fails with [`crate::MemberError::NotFound`], the one
/// error this crate knows.
pub trait Target {
    /// Short name identifying this target in errors and logs.
    fn name(&self) -> &str;

    /// The member table, in declaration order.
    fn members(&self) -> Vec<Member>;

    /// Read the member `name`.
    fn get_member(&self, name: &str) -> Result<Value>;

    /// Write `value` to the member `name`.
    fn set_member(&mut self, name: &str, value: Value) -> Result<()>;

    /// Invoke the member `name` with `args`.
    fn call_member(&mut self, name: &str, args: &[Value]) -> Result<Value>;

    /// Check whether the member table contains `name`.
    fn has_member(&self, name: &str) -> bool {
        self.members().iter().any(|m| m.name == name)
    }
}
