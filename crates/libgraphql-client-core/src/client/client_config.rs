use indexmap::IndexMap;
use std::time::Duration;
use url::Url;

const DEFAULT_USER_AGENT: &str = concat!("libgraphql-client/", env!("CARGO_PKG_VERSION"));

/// Connection settings shared by every call made through one
/// [`Client`](crate::Client).
#[derive(Clone, Debug, PartialEq)]
pub struct ClientConfig {
    endpoint: Url,
    headers: IndexMap<String, String>,
    timeout: Option<Duration>,
    user_agent: String,
}
impl ClientConfig {
    pub fn new(endpoint: Url) -> Self {
        Self {
            endpoint,
            headers: IndexMap::new(),
            timeout: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }

    pub fn parse(endpoint: &str) -> Result<Self, url::ParseError> {
        Ok(Self::new(Url::parse(endpoint)?))
    }

    /// Send an extra header with every request. Setting the same header name
    /// again replaces the earlier value.
    pub fn with_header(
        mut self,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Default deadline for each call.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    pub fn headers(&self) -> &IndexMap<String, String> {
        &self.headers
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    pub fn user_agent(&self) -> &str {
        self.user_agent.as_str()
    }
}
