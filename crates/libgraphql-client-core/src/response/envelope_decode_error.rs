use thiserror::Error;

#[derive(Debug, Error)]
pub enum EnvelopeDecodeError {
    #[error("response body is not a valid GraphQL response envelope: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("response envelope has neither `data` nor `errors`")]
    MissingDataAndErrors,
}
