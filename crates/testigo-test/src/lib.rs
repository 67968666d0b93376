// Allow unwrap/expect in tests for clear failure messages
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::panic))]

//! # testigo-test
//!
//! Testing infrastructure for the testigo proxy:
//!
//! - **Scripted targets**: assemble a proxy target from named properties
//!   and closures instead of writing a new impl per scenario
//! - **Falsification tests**: the integration suite under `tests/`
//!   attempts to refute the proxy's recording and forwarding claims
//!
//! ## Example
//!
//! ```rust,ignore
//! use testigo_core::{Proxy, Value};
//! use testigo_test::ScriptedTarget;
//!
//! let mut proxy = Proxy::new(
//!     ScriptedTarget::builder()
//!         .with_property("level", 5)
//!         .with_method("reset", |_| Ok(Value::Unset))
//!         .build(),
//! );
//! proxy.call("reset", &[])?;
//! assert_eq!(proxy.messages(), vec!["reset"]);
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod harness;

pub use harness::{MethodBody, ScriptedTarget, ScriptedTargetBuilder};
