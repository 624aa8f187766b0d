//! Executing operations over a [`Transport`] and decoding the results into
//! destination shapes.

mod call_options;
mod client;
mod client_config;
mod client_error;
#[cfg(any(test, feature = "testing"))]
mod fake_transport;
mod reqwest_transport;
mod transport;
mod transport_error;

pub use call_options::CallOptions;
pub use client::Client;
pub use client_config::ClientConfig;
pub use client_error::ClientError;
#[cfg(any(test, feature = "testing"))]
pub use fake_transport::FakeTransport;
pub use reqwest_transport::ReqwestTransport;
pub use transport::Transport;
pub use transport::TransportRequest;
pub use transport::TransportResponse;
pub use transport_error::TransportError;

#[cfg(test)]
mod tests;
