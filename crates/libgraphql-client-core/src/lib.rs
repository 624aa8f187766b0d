//! Core libraries for `libgraphql-client`: describing destination shapes,
//! deriving GraphQL documents from them, and decoding GraphQL responses back
//! into them.
//!
//! Most users should depend on the `libgraphql-client` crate, which
//! re-exports everything here along with the `#[derive(GraphQLShape)]`
//! macro.

pub mod client;
pub mod decode;
pub mod names;
pub mod operation;
pub mod response;
pub mod shape;
pub mod types;
mod value;
mod variables;

#[cfg(test)]
mod test_fixtures;

pub use client::CallOptions;
pub use client::Client;
pub use client::ClientConfig;
pub use client::ClientError;
pub use decode::DecodeMode;
pub use operation::OperationKind;
pub use shape::GraphQLShape;
pub use types::Id;
pub use value::Value;
pub use value::VariableRef;
pub use variables::GraphQLInput;
pub use variables::VariableBinding;
pub use variables::Variables;

/// Re-exported so generated and hand-written [`GraphQLShape`] impls can name
/// `serde_json` types without a direct dependency.
pub use serde_json;
