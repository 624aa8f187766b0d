use crate::operation::SelectionSet;
use crate::Value;
use indexmap::IndexMap;

#[derive(Clone, Debug, PartialEq)]
pub struct FieldSelection {
    pub(crate) alias: Option<String>,
    pub(crate) arguments: IndexMap<String, Value>,
    pub(crate) member_index: Option<usize>,
    pub(crate) name: String,
    pub(crate) optional: bool,
    pub(crate) selection_set: Option<SelectionSet>,
}
impl FieldSelection {
    /// The `__typename` field selected so the decoder can pick a branch
    /// among a composite's inline fragments.
    pub(crate) fn discriminator() -> Self {
        Self {
            alias: None,
            arguments: IndexMap::new(),
            member_index: None,
            name: "__typename".to_string(),
            optional: false,
            selection_set: None,
        }
    }

    pub fn alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }

    pub fn arguments(&self) -> &IndexMap<String, Value> {
        &self.arguments
    }

    /// Index of the destination member this field decodes into. `None` only
    /// for the implicitly selected `__typename`.
    pub fn member_index(&self) -> Option<usize> {
        self.member_index
    }

    /// The schema field name.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Whether the destination member is optional (absent keys decode to
    /// `None` instead of failing).
    pub fn optional(&self) -> bool {
        self.optional
    }

    /**
     * If an alias was specified for this selection, return the alias.
     * Otherwise return the name of the field.
     */
    pub fn response_key(&self) -> &str {
        self.alias().unwrap_or(self.name.as_str())
    }

    pub fn selection_set(&self) -> Option<&SelectionSet> {
        self.selection_set.as_ref()
    }
}
