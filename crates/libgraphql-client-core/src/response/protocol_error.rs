use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;

/// One entry of a response's `errors` list.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct ProtocolError {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) extensions: Option<serde_json::Map<String, serde_json::Value>>,

    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty",
    )]
    pub(crate) locations: Vec<SourceLocation>,

    pub(crate) message: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) path: Option<Vec<serde_json::Value>>,
}
impl ProtocolError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            extensions: None,
            locations: vec![],
            message: message.into(),
            path: None,
        }
    }

    pub fn with_location(mut self, line: u32, column: u32) -> Self {
        self.locations.push(SourceLocation { column, line });
        self
    }

    pub fn extensions(&self) -> Option<&serde_json::Map<String, serde_json::Value>> {
        self.extensions.as_ref()
    }

    pub fn locations(&self) -> &[SourceLocation] {
        &self.locations
    }

    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// Response path the error applies to, as strings (field keys) and
    /// integers (list indices).
    pub fn path(&self) -> Option<&[serde_json::Value]> {
        self.path.as_deref()
    }
}
impl std::fmt::Display for ProtocolError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

/// A position within the request document, 1-indexed.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct SourceLocation {
    pub column: u32,
    pub line: u32,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
