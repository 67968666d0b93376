//! Error types for proxy member access.
//!
//! Forwarding is deliberately fallible in exactly one way: a member name
//! that the current target does not answer to. Everything else a target
//! does behind that name is its own business.

use thiserror::Error;

/// Result type alias for member access operations.
pub type Result<T> = std::result::Result<T, MemberError>;

/// Errors that can occur while resolving a member against a target.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MemberError {
    /// The named member does not exist on the target.
    #[error("`{target}` has no member `{member}`")]
    NotFound {
        /// Name of the target that was asked.
        target: String,
        /// Member name that failed to resolve.
        member: String,
    },
}

impl MemberError {
    /// Create a not-found error for a member lookup.
    #[must_use]
    pub fn not_found(target: impl Into<String>, member: impl Into<String>) -> Self {
        Self::NotFound {
            target: target.into(),
            member: member.into(),
        }
    }

    /// Name of the member that failed to resolve.
    #[must_use]
    pub fn member(&self) -> &str {
        match self {
            Self::NotFound { member, .. } => member,
        }
    }

    /// Name of the target that rejected the lookup.
    #[must_use]
    pub fn target(&self) -> &str {
        match self {
            Self::NotFound { target, .. } => target,
        }
    }
}
