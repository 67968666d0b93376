//! A toggle device: the classic proxied subject.

use serde::{Deserialize, Serialize};
use testigo_core::{Member, MemberError, Result, Target, Value};

/// Power state of a [`Television`].
///
/// Two states, one transition: [`Power::flipped`] moves between them.
/// No implicit transitions anywhere else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Power {
    /// Powered down.
    #[default]
    Off,
    /// Powered up.
    On,
}

impl Power {
    /// Returns the opposite state.
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::Off => Self::On,
            Self::On => Self::Off,
        }
    }

    /// Returns true for the on state.
    #[must_use]
    pub const fn is_on(self) -> bool {
        matches!(self, Self::On)
    }

    /// String form of the state, for logs.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Off => "off",
            Self::On => "on",
        }
    }
}

impl std::fmt::Display for Power {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A television with a power toggle and one settable value slot.
///
/// Dynamic members:
///
/// | Member   | Kind     | Behavior                                 |
/// |----------|----------|------------------------------------------|
/// | `value`  | property | arbitrary stored value, initially unset  |
/// | `toggle` | method   | flips power between off and on           |
/// | `is_on`  | method   | answers whether power is currently on    |
///
/// The television knows nothing about proxies; it answers the same
/// whether accessed directly or through one.
#[derive(Debug, Clone, Default)]
pub struct Television {
    power: Power,
    value: Value,
}

impl Television {
    /// Creates a television, powered off, with no value set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Flips the power state.
    pub fn toggle(&mut self) {
        self.power = self.power.flipped();
        tracing::debug!(power = %self.power, "television toggled");
    }

    /// Checks whether the television is powered on.
    #[must_use]
    pub const fn is_on(&self) -> bool {
        self.power.is_on()
    }

    /// Returns the current power state.
    #[must_use]
    pub const fn power(&self) -> Power {
        self.power
    }

    /// Returns the stored value slot.
    #[must_use]
    pub const fn value(&self) -> &Value {
        &self.value
    }

    /// Stores a value in the value slot.
    pub fn set_value(&mut self, value: impl Into<Value>) {
        self.value = value.into();
    }
}

impl Target for Television {
    fn name(&self) -> &str {
        "television"
    }

    fn members(&self) -> Vec<Member> {
        vec![
            Member::property("value"),
            Member::method("toggle"),
            Member::method("is_on"),
        ]
    }

    fn get_member(&self, name: &str) -> Result<Value> {
        match name {
            "value" => Ok(self.value.clone()),
            "toggle" | "is_on" => Ok(Value::method(name)),
            _ => Err(MemberError::not_found(self.name(), name)),
        }
    }

    fn set_member(&mut self, name: &str, value: Value) -> Result<()> {
        match name {
            "value" => {
                self.value = value;
                Ok(())
            }
            _ => Err(MemberError::not_found(self.name(), name)),
        }
    }

    fn call_member(&mut self, name: &str, _args: &[Value]) -> Result<Value> {
        match name {
            "toggle" => {
                self.toggle();
                Ok(Value::Unset)
            }
            "is_on" => Ok(Value::Bool(self.is_on())),
            _ => Err(MemberError::not_found(self.name(), name)),
        }
    }
}
