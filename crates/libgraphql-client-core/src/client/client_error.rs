use crate::client::TransportError;
use crate::decode::DecodeError;
use crate::decode::ScalarRangeError;
use crate::decode::SelectionMismatchError;
use crate::operation::ShapeError;
use crate::response::EnvelopeDecodeError;
use crate::response::ProtocolErrors;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error(transparent)]
    EnvelopeDecode(#[from] EnvelopeDecodeError),

    /// The server reported errors. Any `data` sent alongside them has
    /// already been decoded into the destination.
    #[error(transparent)]
    Protocol(#[from] ProtocolErrors),

    #[error("failed to encode request body: {0}")]
    RequestEncode(#[from] serde_json::Error),

    #[error(transparent)]
    ScalarRange(ScalarRangeError),

    #[error(transparent)]
    SelectionMismatch(SelectionMismatchError),

    #[error(transparent)]
    Shape(#[from] ShapeError),

    #[error(transparent)]
    Transport(#[from] TransportError),
}
impl std::convert::From<DecodeError> for ClientError {
    fn from(value: DecodeError) -> Self {
        match value {
            DecodeError::ScalarRange(err) => Self::ScalarRange(err),
            DecodeError::SelectionMismatch(err) => Self::SelectionMismatch(err),
        }
    }
}
