//! The GraphQL-over-HTTP response envelope and its protocol errors.

mod envelope_decode_error;
mod protocol_error;
mod protocol_errors;
mod response_envelope;

pub use envelope_decode_error::EnvelopeDecodeError;
pub use protocol_error::ProtocolError;
pub use protocol_error::SourceLocation;
pub use protocol_errors::ProtocolErrors;
pub use response_envelope::ResponseEnvelope;

#[cfg(test)]
mod tests;
