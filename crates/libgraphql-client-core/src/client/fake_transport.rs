use crate::client::Transport;
use crate::client::TransportError;
use crate::client::TransportRequest;
use crate::client::TransportResponse;
use bytes::Bytes;
use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::MutexGuard;
use std::sync::PoisonError;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

/// An in-memory [`Transport`] for tests. It records every request and
/// answers each one with the next queued response.
///
/// A request with nothing queued fails with
/// [`TransportError::InvalidRequest`].
#[derive(Debug, Default)]
pub struct FakeTransport {
    delay: Option<Duration>,
    requests: Mutex<Vec<TransportRequest>>,
    responses: Mutex<VecDeque<TransportResponse>>,
}
impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wait this long before answering each request.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn with_response(self, status: u16, body: serde_json::Value) -> Self {
        self.with_raw_response(status, body.to_string())
    }

    pub fn with_raw_response(self, status: u16, body: impl Into<String>) -> Self {
        lock(&self.responses).push_back(TransportResponse {
            body: Bytes::from(body.into()),
            status,
            status_text: String::new(),
        });
        self
    }

    pub fn requests(&self) -> Vec<TransportRequest> {
        lock(&self.requests).clone()
    }

    /// The JSON bodies of every request sent so far. A body that is not
    /// JSON shows up as `null`.
    pub fn sent_bodies(&self) -> Vec<serde_json::Value> {
        lock(&self.requests)
            .iter()
            .map(|request| serde_json::from_slice(&request.body).unwrap_or_default())
            .collect()
    }
}
impl Transport for FakeTransport {
    async fn send(
        &self,
        request: TransportRequest,
        _cancellation: &CancellationToken,
    ) -> Result<TransportResponse, TransportError> {
        lock(&self.requests).push(request);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        let response = lock(&self.responses).pop_front();
        response.ok_or_else(|| TransportError::InvalidRequest(
            "no response queued".to_string(),
        ))
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
