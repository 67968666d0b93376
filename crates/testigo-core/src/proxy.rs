//! The recording proxy: transparent forwarding with an audit trail.
//!
//! A [`Proxy`] owns one [`Target`] and stands in front of it. Reads,
//! writes, and calls pass through by member name; on the way through,
//! the member name is appended to the proxy's [`AccessLog`]. Logging
//! happens before dispatch, so a lookup that fails still leaves a
//! record of the attempt.
//!
//! A handful of reserved names ([`RESERVED_MEMBERS`]) are answered by
//! the proxy itself and never reach the target or the log. Everything
//! else is the target's business: the proxy adds no behavior of its own
//! beyond the record.

use crate::error::{MemberError, Result};
use crate::log::{AccessKind, AccessLog};
use crate::target::Target;
use crate::value::Value;
use serde::{Deserialize, Serialize};

/// Unique identifier for a proxy instance.
///
/// UUIDs rather than indices, so identifiers stay valid across target
/// swaps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProxyId(uuid::Uuid);

impl ProxyId {
    /// Creates a new random proxy ID.
    #[must_use]
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4())
    }

    /// Creates a proxy ID from a UUID.
    #[must_use]
    pub const fn from_uuid(uuid: uuid::Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the inner UUID.
    #[must_use]
    pub const fn as_uuid(&self) -> &uuid::Uuid {
        &self.0
    }
}

impl Default for ProxyId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ProxyId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Member names the proxy answers itself instead of forwarding.
///
/// These expose the proxy's internal state through the dynamic surface:
/// `log` and `messages` answer with the recorded member names, `target`
/// with the current target's name. Reserved reads are never logged, and
/// reserved names reject writes and calls.
pub const RESERVED_MEMBERS: &[&str] = &["target", "log", "messages"];

/// Target name used when the proxy itself rejects an access.
const PROXY_NAME: &str = "proxy";

/// A transparent forwarding proxy that records every member access.
///
/// The proxy is generic over its target only at construction; afterwards
/// it holds `Box<dyn Target>`, so the same proxy can be rebound to an
/// unrelated target with [`Proxy::replace_target`] while its log keeps
/// accumulating.
pub struct Proxy {
    id: ProxyId,
    target: Box<dyn Target>,
    log: AccessLog,
}

impl Proxy {
    /// Creates a proxy wrapping `target`, with an empty log.
    #[must_use]
    pub fn new(target: impl Target + 'static) -> Self {
        let id = ProxyId::new();
        tracing::debug!(proxy = %id, target = %target.name(), "proxy created");
        Self {
            id,
            target: Box::new(target),
            log: AccessLog::new(),
        }
    }

    /// Returns this proxy's unique identifier.
    #[must_use]
    pub const fn id(&self) -> ProxyId {
        self.id
    }

    /// Checks whether `name` is answered by the proxy itself.
    #[must_use]
    pub fn is_reserved(name: &str) -> bool {
        RESERVED_MEMBERS.contains(&name)
    }

    // ═══════════════════════════════════════════════════════════════════════════
    // Forwarding
    // ═══════════════════════════════════════════════════════════════════════════

    /// Reads the member `name` through the proxy.
    ///
    /// Non-reserved reads are logged, then resolved by the target.
    /// Property members answer with their value, method members with a
    /// [`Value::Method`] handle. Unknown names fail after logging, so
    /// the attempt is still on record.
    pub fn get(&self, name: &str) -> Result<Value> {
        if let Some(value) = self.reserved_get(name) {
            return Ok(value);
        }
        self.log.record(AccessKind::Get, name);
        tracing::trace!(proxy = %self.id, member = name, "get forwarded");
        self.target.get_member(name)
    }

    /// Writes `value` to the member `name` through the proxy.
    ///
    /// Reserved names are not assignable through the dynamic surface and
    /// fail without being logged. Everything else is logged, then handed
    /// to the target.
    pub fn set(&mut self, name: &str, value: impl Into<Value>) -> Result<()> {
        if Self::is_reserved(name) {
            return Err(MemberError::not_found(PROXY_NAME, name));
        }
        self.log.record(AccessKind::Set, name);
        tracing::trace!(proxy = %self.id, member = name, "set forwarded");
        self.target.set_member(name, value.into())
    }

    /// Invokes the member `name` with `args` through the proxy.
    ///
    /// One invocation appends exactly one log entry, whatever the target
    /// does while handling it.
    pub fn call(&mut self, name: &str, args: &[Value]) -> Result<Value> {
        if Self::is_reserved(name) {
            return Err(MemberError::not_found(PROXY_NAME, name));
        }
        self.log.record(AccessKind::Call, name);
        tracing::trace!(proxy = %self.id, member = name, argc = args.len(), "call forwarded");
        self.target.call_member(name, args)
    }

    // ═══════════════════════════════════════════════════════════════════════════
    // Log queries
    // ═══════════════════════════════════════════════════════════════════════════

    /// Returns every accessed member name, oldest first, duplicates kept.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.log.messages()
    }

    /// Checks whether `name` was ever accessed through this proxy.
    #[must_use]
    pub fn is_called(&self, name: &str) -> bool {
        self.log.contains(name)
    }

    /// Counts how many times `name` was accessed through this proxy.
    #[must_use]
    pub fn number_of_times_called(&self, name: &str) -> usize {
        self.log.count(name)
    }

    /// Returns the underlying access log.
    ///
    /// Cloning the returned log yields a live handle that observes later
    /// accesses.
    #[must_use]
    pub const fn log(&self) -> &AccessLog {
        &self.log
    }

    // ═══════════════════════════════════════════════════════════════════════════
    // Target management
    // ═══════════════════════════════════════════════════════════════════════════

    /// Replaces the wrapped target, keeping the log intact.
    ///
    /// The swap itself is not an access and is never logged; subsequent
    /// accesses resolve against the new target and append to the same
    /// log.
    pub fn replace_target(&mut self, target: impl Target + 'static) {
        tracing::debug!(
            proxy = %self.id,
            old = %self.target.name(),
            new = %target.name(),
            "proxy target replaced"
        );
        self.target = Box::new(target);
    }

    /// Returns the current target.
    #[must_use]
    pub fn target(&self) -> &dyn Target {
        self.target.as_ref()
    }

    /// Consumes the proxy and returns its target.
    #[must_use]
    pub fn into_target(self) -> Box<dyn Target> {
        self.target
    }

    /// Answers reserved reads from the proxy's own state.
    fn reserved_get(&self, name: &str) -> Option<Value> {
        match name {
            "log" | "messages" => Some(Value::text_list(self.log.messages())),
            "target" => Some(Value::text(self.target.name())),
            _ => None,
        }
    }
}

impl std::fmt::Debug for Proxy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Proxy")
            .field("id", &self.id)
            .field("target", &self.target.name())
            .field("log_len", &self.log.len())
            .finish()
    }
}
