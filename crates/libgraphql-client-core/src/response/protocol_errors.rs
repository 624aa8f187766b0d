use crate::response::ProtocolError;

/// The non-empty list of errors a server reported for one request.
///
/// Displays as the first error's message, verbatim; every entry stays
/// available through [`ProtocolErrors::errors()`].
#[derive(Clone, Debug, PartialEq)]
pub struct ProtocolErrors {
    errors: Vec<ProtocolError>,
}
impl ProtocolErrors {
    /// Returns `None` when `errors` is empty.
    pub fn from_errors(errors: Vec<ProtocolError>) -> Option<Self> {
        if errors.is_empty() {
            None
        } else {
            Some(Self { errors })
        }
    }

    pub fn errors(&self) -> &[ProtocolError] {
        &self.errors
    }

    pub fn first(&self) -> &ProtocolError {
        &self.errors[0]
    }

    pub fn into_errors(self) -> Vec<ProtocolError> {
        self.errors
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ProtocolError> {
        self.errors.iter()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }
}
impl std::fmt::Display for ProtocolErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.first().message())
    }
}
impl std::error::Error for ProtocolErrors {}
impl<'a> std::iter::IntoIterator for &'a ProtocolErrors {
    type Item = &'a ProtocolError;
    type IntoIter = std::slice::Iter<'a, ProtocolError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}
