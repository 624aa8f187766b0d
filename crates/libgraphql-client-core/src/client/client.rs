use crate::client::CallOptions;
use crate::client::ClientConfig;
use crate::client::ClientError;
use crate::client::ReqwestTransport;
use crate::client::Transport;
use crate::client::TransportError;
use crate::client::TransportRequest;
use crate::client::TransportResponse;
use crate::decode::DecodeMode;
use crate::decode::Decoder;
use crate::operation::OperationKind;
use crate::operation::SelectionDocumentBuilder;
use crate::operation::SelectionSet;
use crate::response::ResponseEnvelope;
use crate::shape::GraphQLShape;
use crate::Variables;
use bytes::Bytes;
use std::future::Future;
use std::time::Duration;

type Result<T> = std::result::Result<T, ClientError>;
type JsonObject = serde_json::Map<String, serde_json::Value>;

/// A GraphQL client for one endpoint.
///
/// Each call derives its document from the destination's shape, executes it,
/// and decodes the response back into the same destination. A `Client` holds
/// no per-call state; calls may run concurrently through `&self`.
#[derive(Clone, Debug)]
pub struct Client<T = ReqwestTransport> {
    config: ClientConfig,
    transport: T,
}
impl Client<ReqwestTransport> {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let transport = ReqwestTransport::new(&config)?;
        Ok(Self::with_transport(config, transport))
    }
}
impl<T: Transport> Client<T> {
    pub fn with_transport(config: ClientConfig, transport: T) -> Self {
        Self {
            config,
            transport,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Run a query derived from `S` and overwrite `shape` with the result.
    pub async fn query<S: GraphQLShape>(
        &self,
        shape: &mut S,
        variables: &Variables,
        options: &CallOptions,
    ) -> Result<()> {
        self.run_shape(OperationKind::Query, DecodeMode::Replace, shape, variables, options)
            .await
    }

    /// Run a query derived from `S` and merge the result into `shape`,
    /// leaving members the response omits untouched.
    pub async fn query_merge<S: GraphQLShape>(
        &self,
        shape: &mut S,
        variables: &Variables,
        options: &CallOptions,
    ) -> Result<()> {
        self.run_shape(OperationKind::Query, DecodeMode::Merge, shape, variables, options)
            .await
    }

    /// Run a mutation derived from `S` and overwrite `shape` with the
    /// result.
    pub async fn mutate<S: GraphQLShape>(
        &self,
        shape: &mut S,
        variables: &Variables,
        options: &CallOptions,
    ) -> Result<()> {
        self.run_shape(OperationKind::Mutation, DecodeMode::Replace, shape, variables, options)
            .await
    }

    /// Send caller-written document text and decode the response into
    /// `shape`.
    ///
    /// Decoding is still guided by `S`'s shape, so the document must select
    /// the response keys `S` expects. A `serde_json::Value` destination
    /// accepts any payload.
    pub async fn execute_document<S: GraphQLShape>(
        &self,
        document: &str,
        shape: &mut S,
        variables: &JsonObject,
        mode: DecodeMode,
        options: &CallOptions,
    ) -> Result<()> {
        let selection_set = SelectionDocumentBuilder::selection_set_for_shape(S::shape())?;
        let envelope = self.exchange(document, variables, options).await?;
        finish(shape, envelope, selection_set.as_ref(), mode)
    }

    async fn run_shape<S: GraphQLShape>(
        &self,
        operation_kind: OperationKind,
        mode: DecodeMode,
        shape: &mut S,
        variables: &Variables,
        options: &CallOptions,
    ) -> Result<()> {
        let document =
            SelectionDocumentBuilder::new(operation_kind, variables)
                .build::<S>()?;
        let query = document.to_graphql_string();
        let envelope = self.exchange(&query, document.variable_values(), options).await?;
        finish(shape, envelope, Some(document.selection_set()), mode)
    }

    async fn exchange(
        &self,
        query: &str,
        variables: &JsonObject,
        options: &CallOptions,
    ) -> Result<ResponseEnvelope> {
        let body = serde_json::to_vec(&RequestBody { query, variables })?;
        let request = TransportRequest {
            body: Bytes::from(body),
            headers: self.config.headers().clone(),
            url: self.config.endpoint().clone(),
        };

        let cancellation = options.cancellation.clone().unwrap_or_default();
        let timeout = options.timeout.or(self.config.timeout());
        tracing::debug!(endpoint = %request.url, "sending GraphQL request");
        let send = self.transport.send(request, &cancellation);

        let result = tokio::select! {
            biased;
            _ = cancellation.cancelled() => Err(TransportError::Cancelled),
            result = with_deadline(send, timeout) => result,
        };
        let response = result?;

        tracing::trace!(
            status = response.status,
            bytes = response.body.len(),
            "received GraphQL response",
        );
        if !response.is_success() {
            return Err(TransportError::UnexpectedStatus {
                body: String::from_utf8_lossy(&response.body).into_owned(),
                status: response.status,
                status_text: response.status_text,
            }.into());
        }

        Ok(ResponseEnvelope::from_slice(&response.body)?)
    }
}

#[derive(serde::Serialize)]
struct RequestBody<'a> {
    query: &'a str,
    #[serde(skip_serializing_if = "serde_json::Map::is_empty")]
    variables: &'a JsonObject,
}

/// Decode any `data` first; decoding failures take precedence over the
/// protocol errors reported alongside the data.
fn finish(
    shape: &mut dyn GraphQLShape,
    envelope: ResponseEnvelope,
    selection_set: Option<&SelectionSet>,
    mode: DecodeMode,
) -> Result<()> {
    let (data, errors) = envelope.into_parts();
    let has_data = data.is_some();
    if let Some(data) = data {
        let data = serde_json::Value::Object(data);
        Decoder::new(mode).decode_document(shape, &data, selection_set)?;
    }

    match errors {
        None => Ok(()),
        Some(errors) => {
            if has_data {
                tracing::warn!(
                    error_count = errors.len(),
                    first_error = %errors,
                    "response contained partial data alongside errors",
                );
            }
            Err(ClientError::Protocol(errors))
        },
    }
}

async fn with_deadline(
    send: impl Future<Output = std::result::Result<TransportResponse, TransportError>>,
    timeout: Option<Duration>,
) -> std::result::Result<TransportResponse, TransportError> {
    match timeout {
        Some(timeout) => tokio::time::timeout(timeout, send)
            .await
            .map_err(|_| TransportError::TimedOut(timeout))?,
        None => send.await,
    }
}
