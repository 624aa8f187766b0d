use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("request was cancelled")]
    Cancelled,

    #[error("request failed: {0}")]
    Failed(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error("request could not be built: {0}")]
    InvalidRequest(String),

    #[error("request timed out after {0:?}")]
    TimedOut(Duration),

    #[error("non-2xx status code: {status} {status_text} body: {body:?}")]
    UnexpectedStatus {
        body: String,
        status: u16,
        status_text: String,
    },
}
