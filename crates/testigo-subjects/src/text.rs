//! An immutable text subject with derived operations.

use testigo_core::{Member, MemberError, Result, Target, Value};

/// Immutable text exposing two derived operations as members.
///
/// `upper_operation` answers the uppercased content; `split_operation`
/// answers the whitespace-separated words. Neither mutates the text, so
/// the member table contains no writable entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Text {
    content: String,
}

impl Text {
    /// Creates a text subject over `content`.
    #[must_use]
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    /// Returns the wrapped content.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns the content uppercased.
    #[must_use]
    pub fn upper_operation(&self) -> String {
        self.content.to_uppercase()
    }

    /// Returns the content split on whitespace.
    #[must_use]
    pub fn split_operation(&self) -> Vec<String> {
        self.content
            .split_whitespace()
            .map(str::to_string)
            .collect()
    }
}

impl Target for Text {
    fn name(&self) -> &str {
        "text"
    }

    fn members(&self) -> Vec<Member> {
        vec![
            Member::method("upper_operation"),
            Member::method("split_operation"),
        ]
    }

    fn get_member(&self, name: &str) -> Result<Value> {
        match name {
            "upper_operation" | "split_operation" => Ok(Value::method(name)),
            _ => Err(MemberError::not_found(self.name(), name)),
        }
    }

    fn set_member(&mut self, name: &str, _value: Value) -> Result<()> {
        // Nothing on a text is writable.
        Err(MemberError::not_found(self.name(), name))
    }

    fn call_member(&mut self, name: &str, _args: &[Value]) -> Result<Value> {
        match name {
            "upper_operation" => Ok(Value::text(self.upper_operation())),
            "split_operation" => Ok(Value::text_list(self.split_operation())),
            _ => Err(MemberError::not_found(self.name(), name)),
        }
    }
}
