//! Testigo: a transparent forwarding proxy with a queryable message log.
//!
//! Wrap any target in a [`core::Proxy`] and every member read, write,
//! and call is forwarded by name while the name lands in an append-only
//! log. The proxy adds nothing else: subjects answer the same whether
//! accessed directly or through it.
//!
//! # Quick Start
//!
//! ```rust
//! use testigo::prelude::*;
//!
//! let mut tv = Proxy::new(Television::new());
//! tv.set("value", 10)?;
//! tv.call("toggle", &[])?;
//!
//! assert_eq!(tv.messages(), vec!["value", "toggle"]);
//! assert_eq!(tv.get("value")?, Value::Int(10));
//! assert!(tv.is_called("toggle"));
//! # Ok::<(), testigo::core::MemberError>(())
//! ```

pub use testigo_core as core;
pub use testigo_subjects as subjects;

/// Prelude module for common imports.
pub mod prelude {
    pub use testigo_core::{
        AccessEvent, AccessKind, AccessLog, Member, MemberError, MemberKind, Proxy, ProxyId,
        Target, Value,
    };
    pub use testigo_subjects::{Greed, Power, Television, Text};
}
