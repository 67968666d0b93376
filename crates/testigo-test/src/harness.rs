//! Scripted targets: assemble a proxy target from a member table.

use testigo_core::{Member, MemberError, Result, Target, Value};

/// Method body for a scripted target: call arguments in, value out.
pub type MethodBody = Box<dyn FnMut(&[Value]) -> Result<Value>>;

/// A target assembled at runtime from named properties and closures.
///
/// Tests script a target instead of writing a fresh [`Target`] impl for
/// every scenario: properties become readable and writable slots, and
/// closures become callable methods. Lookups resolve to the first
/// definition of a name.
pub struct ScriptedTarget {
    name: String,
    properties: Vec<(String, Value)>,
    methods: Vec<(String, MethodBody)>,
}

impl ScriptedTarget {
    /// Creates a scripted target builder.
    #[must_use]
    pub fn builder() -> ScriptedTargetBuilder {
        ScriptedTargetBuilder::default()
    }

    /// Creates an empty scripted target with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::builder().build()
    }
}

impl Default for ScriptedTarget {
    fn default() -> Self {
        Self::new()
    }
}

impl Target for ScriptedTarget {
    fn name(&self) -> &str {
        &self.name
    }

    fn members(&self) -> Vec<Member> {
        self.properties
            .iter()
            .map(|(name, _)| Member::property(name))
            .chain(self.methods.iter().map(|(name, _)| Member::method(name)))
            .collect()
    }

    fn get_member(&self, name: &str) -> Result<Value> {
        if let Some((_, value)) = self.properties.iter().find(|(n, _)| n == name) {
            return Ok(value.clone());
        }
        if self.methods.iter().any(|(n, _)| n == name) {
            return Ok(Value::method(name));
        }
        Err(MemberError::not_found(&self.name, name))
    }

    fn set_member(&mut self, name: &str, value: Value) -> Result<()> {
        if let Some((_, slot)) = self.properties.iter_mut().find(|(n, _)| n == name) {
            *slot = value;
            return Ok(());
        }
        Err(MemberError::not_found(&self.name, name))
    }

    fn call_member(&mut self, name: &str, args: &[Value]) -> Result<Value> {
        if let Some((_, body)) = self.methods.iter_mut().find(|(n, _)| n == name) {
            return body(args);
        }
        Err(MemberError::not_found(&self.name, name))
    }
}

/// Builder for [`ScriptedTarget`].
#[derive(Default)]
pub struct ScriptedTargetBuilder {
    name: Option<String>,
    properties: Vec<(String, Value)>,
    methods: Vec<(String, MethodBody)>,
}

impl ScriptedTargetBuilder {
    /// Sets the target name reported in errors and logs.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Adds a property member with an initial value.
    #[must_use]
    pub fn with_property(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.properties.push((name.into(), value.into()));
        self
    }

    /// Adds a method member backed by `body`.
    #[must_use]
    pub fn with_method(
        mut self,
        name: impl Into<String>,
        body: impl FnMut(&[Value]) -> Result<Value> + 'static,
    ) -> Self {
        self.methods.push((name.into(), Box::new(body)));
        self
    }

    /// Builds the scripted target.
    #[must_use]
    pub fn build(self) -> ScriptedTarget {
        let name = self.name.unwrap_or_else(|| "scripted".to_string());
        tracing::debug!(
            target_name = %name,
            properties = self.properties.len(),
            methods = self.methods.len(),
            "scripted target built"
        );
        ScriptedTarget {
            name,
            properties: self.properties,
            methods: self.methods,
        }
    }
}
