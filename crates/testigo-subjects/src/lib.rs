// Allow unwrap/expect in tests for clear failure messages
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::panic))]

//! # testigo-subjects
//!
//! Ready-made [`testigo_core::Target`] implementations used by demos and
//! tests:
//!
//! - [`Television`]: a toggle device with a settable value slot
//! - [`Text`]: immutable text with uppercase and split operations
//! - [`Greed`]: the Greed dice-game scorer
//!
//! None of these know they are being proxied; they answer member access
//! the same way regardless of who asks.

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod greed;
pub mod television;
pub mod text;

pub use greed::Greed;
pub use television::{Power, Television};
pub use text::Text;
