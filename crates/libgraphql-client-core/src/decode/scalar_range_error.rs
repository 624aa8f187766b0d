use crate::decode::ResponsePath;
use thiserror::Error;

/// A JSON number that cannot be represented by the destination's numeric
/// type (out of range, or fractional for an integer).
#[derive(Clone, Debug, Error, PartialEq)]
#[error("value `{value}` at `{path}` does not fit in `{target_type}`")]
pub struct ScalarRangeError {
    pub path: ResponsePath,
    pub target_type: &'static str,
    pub value: String,
}
