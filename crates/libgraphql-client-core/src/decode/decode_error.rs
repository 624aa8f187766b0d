use crate::decode::ScalarRangeError;
use crate::decode::SelectionMismatchError;
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum DecodeError {
    #[error(transparent)]
    ScalarRange(#[from] ScalarRangeError),

    #[error(transparent)]
    SelectionMismatch(#[from] SelectionMismatchError),
}
impl DecodeError {
    pub fn path(&self) -> &crate::decode::ResponsePath {
        match self {
            Self::ScalarRange(err) => &err.path,
            Self::SelectionMismatch(err) => &err.path,
        }
    }
}
