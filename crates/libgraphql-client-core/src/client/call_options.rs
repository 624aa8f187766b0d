use std::time::Duration;
use tokio_util::sync::CancellationToken;

/// Per-call controls. The defaults never cancel and fall back to the
/// [`ClientConfig`](crate::ClientConfig) timeout.
#[derive(Clone, Debug, Default)]
pub struct CallOptions {
    pub(crate) cancellation: Option<CancellationToken>,
    pub(crate) timeout: Option<Duration>,
}
impl CallOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Abort the call (dropping the in-flight request) once `token` is
    /// cancelled.
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = Some(token);
        self
    }

    /// Abort the call if it has not completed within `timeout`. Overrides
    /// [`ClientConfig::timeout()`](crate::ClientConfig::timeout).
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn cancellation(&self) -> Option<&CancellationToken> {
        self.cancellation.as_ref()
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}
