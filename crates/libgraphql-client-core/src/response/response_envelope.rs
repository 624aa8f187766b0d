use crate::response::EnvelopeDecodeError;
use crate::response::ProtocolError;
use crate::response::ProtocolErrors;
use serde::Deserialize;
use serde::Deserializer;

type JsonObject = serde_json::Map<String, serde_json::Value>;

/// A parsed GraphQL response body: the `data` payload plus any protocol
/// errors the server reported alongside it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResponseEnvelope {
    pub(crate) data: Option<JsonObject>,
    pub(crate) errors: Vec<ProtocolError>,
    pub(crate) extensions: Option<JsonObject>,
}
impl ResponseEnvelope {
    /// Split a response body into its payload and errors.
    ///
    /// Unknown top-level keys are ignored. `data: null` is accepted (it is
    /// how servers report a failed root field), but a body with neither
    /// `data` nor `errors` is rejected.
    pub fn from_slice(body: &[u8]) -> Result<Self, EnvelopeDecodeError> {
        let raw: RawEnvelope = serde_json::from_slice(body)?;
        if raw.data.is_none() && raw.errors.is_none() {
            return Err(EnvelopeDecodeError::MissingDataAndErrors);
        }
        Ok(Self {
            data: raw.data.flatten(),
            errors: raw.errors.unwrap_or_default(),
            extensions: raw.extensions,
        })
    }

    pub fn data(&self) -> Option<&JsonObject> {
        self.data.as_ref()
    }

    pub fn errors(&self) -> &[ProtocolError] {
        &self.errors
    }

    pub fn extensions(&self) -> Option<&JsonObject> {
        self.extensions.as_ref()
    }

    /// Consume the envelope, aggregating its errors.
    pub fn into_parts(self) -> (Option<JsonObject>, Option<ProtocolErrors>) {
        (self.data, ProtocolErrors::from_errors(self.errors))
    }
}

#[derive(Deserialize)]
struct RawEnvelope {
    #[serde(default, deserialize_with = "present_or_null")]
    data: Option<Option<JsonObject>>,

    #[serde(default)]
    errors: Option<Vec<ProtocolError>>,

    #[serde(default)]
    extensions: Option<JsonObject>,
}

/// Distinguishes an explicit `null` (`Some(None)`) from an absent key
/// (`None`, via `#[serde(default)]`).
fn present_or_null<'de, D>(deserializer: D) -> Result<Option<Option<JsonObject>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<JsonObject>::deserialize(deserializer).map(Some)
}
