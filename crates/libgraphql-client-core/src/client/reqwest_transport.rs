use crate::client::ClientConfig;
use crate::client::Transport;
use crate::client::TransportError;
use crate::client::TransportRequest;
use crate::client::TransportResponse;
use reqwest::header::ACCEPT;
use reqwest::header::CONTENT_TYPE;
use tokio_util::sync::CancellationToken;

/// The default [`Transport`], backed by a pooled [`reqwest::Client`].
#[derive(Clone, Debug)]
pub struct ReqwestTransport {
    http_client: reqwest::Client,
}
impl ReqwestTransport {
    pub fn new(config: &ClientConfig) -> Result<Self, TransportError> {
        let http_client =
            reqwest::Client::builder()
                .user_agent(config.user_agent())
                .build()
                .map_err(|err| TransportError::InvalidRequest(err.to_string()))?;
        Ok(Self::from_client(http_client))
    }

    /// Reuse an already configured [`reqwest::Client`] (proxies, TLS
    /// roots, etc).
    pub fn from_client(http_client: reqwest::Client) -> Self {
        Self { http_client }
    }
}
impl Transport for ReqwestTransport {
    async fn send(
        &self,
        request: TransportRequest,
        cancellation: &CancellationToken,
    ) -> Result<TransportResponse, TransportError> {
        let mut builder =
            self.http_client
                .post(request.url)
                .header(CONTENT_TYPE, "application/json")
                .header(ACCEPT, "application/json");
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        let exchange = async move {
            let response = builder.body(request.body).send().await.map_err(from_reqwest)?;
            let status = response.status();
            let body = response.bytes().await.map_err(from_reqwest)?;
            Ok(TransportResponse {
                body,
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or_default().to_string(),
            })
        };

        tokio::select! {
            _ = cancellation.cancelled() => Err(TransportError::Cancelled),
            result = exchange => result,
        }
    }
}

fn from_reqwest(err: reqwest::Error) -> TransportError {
    if err.is_builder() {
        TransportError::InvalidRequest(err.to_string())
    } else {
        TransportError::Failed(Box::new(err))
    }
}
