// Allow unwrap/expect in tests for clear failure messages
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::panic))]

//! # testigo-core
//!
//! Recording proxy primitives. Wrap any [`Target`] in a [`Proxy`] and
//! every member read, write, and call is forwarded by name while the
//! member name is appended to an ordered, queryable log.
//!
//! This crate provides the foundational types:
//!
//! - [`Target`] trait for objects standing behind a proxy
//! - [`Proxy`] for transparent forwarding with an audit trail
//! - [`AccessLog`] for append-only access records
//! - [`Value`] for the dynamic values crossing the boundary
//! - [`MemberError`] for the one way forwarding can fail
//!
//! ## Example
//!
//! ```rust,ignore
//! use testigo_core::{Member, Proxy, Target, Value};
//!
//! struct Lamp {
//!     lit: bool,
//! }
//!
//! impl Target for Lamp {
//!     fn name(&self) -> &str { "lamp" }
//!     fn members(&self) -> Vec<Member> { vec![Member::method("flip")] }
//!     // ... resolve get/set/call by member name
//! }
//!
//! let mut proxy = Proxy::new(Lamp { lit: false });
//! proxy.call("flip", &[])?;
//! assert_eq!(proxy.messages(), vec!["flip"]);
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod log;
pub mod proxy;
pub mod target;
pub mod value;

pub use error::{MemberError, Result};
pub use log::{AccessEvent, AccessKind, AccessLog};
pub use proxy::{Proxy, ProxyId, RESERVED_MEMBERS};
pub use target::{Member, MemberKind, Target};
pub use value::Value;
