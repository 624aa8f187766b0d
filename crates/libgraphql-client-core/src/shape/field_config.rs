use crate::Value;
use indexmap::IndexMap;

/// Per-member selection configuration, resolved once when a document is
/// built.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FieldConfig {
    pub(crate) alias: Option<String>,
    pub(crate) arguments: IndexMap<String, Value>,
    pub(crate) name: Option<String>,
    pub(crate) type_condition: Option<String>,
}
impl FieldConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select the field under a different response key.
    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    /// Bind an argument. Arguments render in the order they were added.
    pub fn with_argument(
        mut self,
        name: impl Into<String>,
        value: impl Into<Value>,
    ) -> Self {
        self.arguments.insert(name.into(), value.into());
        self
    }

    /// Select a schema field whose name differs from the member name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Select the member as an inline fragment `... on <type_name>`.
    pub fn with_type_condition(mut self, type_name: impl Into<String>) -> Self {
        self.type_condition = Some(type_name.into());
        self
    }

    pub fn alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }

    pub fn arguments(&self) -> &IndexMap<String, Value> {
        &self.arguments
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn type_condition(&self) -> Option<&str> {
        self.type_condition.as_deref()
    }
}
