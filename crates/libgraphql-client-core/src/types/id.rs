/// A value of the built-in GraphQL `ID` scalar.
///
/// Servers may serialize an `ID` as either a JSON string or a JSON integer;
/// both decode into an [`Id`], which always holds the string form.
#[derive(
    Clone,
    Debug,
    Default,
    Eq,
    Hash,
    Ord,
    PartialEq,
    PartialOrd,
    serde::Deserialize,
    serde::Serialize,
)]
#[serde(transparent)]
pub struct Id(String);
impl Id {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn into_inner(self) -> String {
        self.0
    }

    pub(crate) fn clear(&mut self) {
        self.0.clear()
    }
}
impl std::convert::AsRef<str> for Id {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl std::convert::From<&str> for Id {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}
impl std::convert::From<String> for Id {
    fn from(value: String) -> Self {
        Self(value)
    }
}
impl std::fmt::Display for Id {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
