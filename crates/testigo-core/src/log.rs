//! Append-only record of member accesses.
//!
//! # Reference
//! Gamma, E., Helm, R., Johnson, R., Vlissides, J. (1994).
//! "Design Patterns: Elements of Reusable Object-Oriented Software."
//! Addison-Wesley. (Proxy, pp. 207-217.)

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// How a member was accessed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessKind {
    /// Member read.
    Get,
    /// Member write.
    Set,
    /// Member invocation.
    Call,
}

impl AccessKind {
    /// String form of the access kind, for logs.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "get",
            Self::Set => "set",
            Self::Call => "call",
        }
    }
}

impl std::fmt::Display for AccessKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One recorded access: which member, and how.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessEvent {
    /// Member name that was accessed.
    pub member: String,
    /// Whether the access was a read, write, or call.
    pub kind: AccessKind,
}

impl AccessEvent {
    /// Create an access event.
    #[must_use]
    pub fn new(kind: AccessKind, member: impl Into<String>) -> Self {
        Self {
            member: member.into(),
            kind,
        }
    }
}

/// Append-only access log shared between a proxy and its observers.
///
/// Cloning an `AccessLog` shares the underlying record, so a handle taken
/// before a batch of accesses observes every entry appended afterwards.
/// Entries are appended in access order and never removed; target swaps
/// and failed lookups leave the record intact.
#[derive(Debug, Clone)]
pub struct AccessLog {
    inner: Arc<Mutex<Vec<AccessEvent>>>,
}

impl AccessLog {
    /// Creates an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(Vec::new())),
        }
    }

    // ═══════════════════════════════════════════════════════════════════════════
    // Recording
    // ═══════════════════════════════════════════════════════════════════════════

    /// Appends one access to the log.
    pub fn record(&self, kind: AccessKind, member: impl Into<String>) {
        self.inner.lock().push(AccessEvent::new(kind, member));
    }

    // ═══════════════════════════════════════════════════════════════════════════
    // Queries
    // ═══════════════════════════════════════════════════════════════════════════

    /// Returns the accessed member names, oldest first.
    ///
    /// Duplicates are preserved: a member accessed three times appears
    /// three times.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.inner
            .lock()
            .iter()
            .map(|event| event.member.clone())
            .collect()
    }

    /// Returns a snapshot of all recorded events, oldest first.
    #[must_use]
    pub fn events(&self) -> Vec<AccessEvent> {
        self.inner.lock().clone()
    }

    /// Returns the most recent event, if any.
    #[must_use]
    pub fn last(&self) -> Option<AccessEvent> {
        self.inner.lock().last().cloned()
    }

    /// Checks whether `member` appears anywhere in the log.
    #[must_use]
    pub fn contains(&self, member: &str) -> bool {
        self.inner.lock().iter().any(|event| event.member == member)
    }

    /// Counts how many times `member` appears in the log.
    #[must_use]
    pub fn count(&self, member: &str) -> usize {
        self.inner
            .lock()
            .iter()
            .filter(|event| event.member == member)
            .count()
    }

    /// Returns the number of recorded accesses.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    /// Checks whether nothing has been recorded yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }
}

impl Default for AccessLog {
    fn default() -> Self {
        Self::new()
    }
}
