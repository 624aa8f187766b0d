use crate::client::TransportError;
use bytes::Bytes;
use indexmap::IndexMap;
use std::future::Future;
use tokio_util::sync::CancellationToken;
use url::Url;

/// Performs one request/response exchange with a GraphQL server.
///
/// The [`Client`](crate::Client) owns status-code handling, deadlines, and
/// decoding; a transport only moves bytes. Implementations should stop
/// promptly once `cancellation` fires.
pub trait Transport: Send + Sync {
    fn send(
        &self,
        request: TransportRequest,
        cancellation: &CancellationToken,
    ) -> impl Future<Output = Result<TransportResponse, TransportError>> + Send;
}

/// A POST of a JSON-encoded request body.
#[derive(Clone, Debug, PartialEq)]
pub struct TransportRequest {
    pub body: Bytes,
    pub headers: IndexMap<String, String>,
    pub url: Url,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TransportResponse {
    pub body: Bytes,
    pub status: u16,
    pub status_text: String,
}
impl TransportResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}
