//! A typed GraphQL client.
//!
//! Describe the data you want as ordinary Rust types, derive
//! [`GraphQLShape`] for them, and the client builds the query document from
//! the type, executes it, and decodes the response back into a value of
//! that type.
//!
//! ```no_run
//! use libgraphql_client::CallOptions;
//! use libgraphql_client::Client;
//! use libgraphql_client::ClientConfig;
//! use libgraphql_client::GraphQLShape;
//! use libgraphql_client::Variables;
//!
//! #[derive(Debug, Default, GraphQLShape)]
//! struct Repository {
//!     name_with_owner: String,
//!     stargazer_count: i32,
//! }
//!
//! #[derive(Debug, Default, GraphQLShape)]
//! struct RepositoryQuery {
//!     #[graphql(arg(name = "owner", var = "owner"), arg(name = "name", var = "name"))]
//!     repository: Option<Repository>,
//! }
//!
//! # async fn run() -> Result<(), libgraphql_client::ClientError> {
//! let client = Client::new(
//!     ClientConfig::parse("https://api.github.com/graphql")
//!         .expect("valid endpoint")
//!         .with_header("Authorization", "bearer <token>"),
//! )?;
//!
//! let mut result = RepositoryQuery::default();
//! let variables = Variables::new()
//!     .with("owner", "jeffmo")
//!     .with("name", "libgraphql");
//! client.query(&mut result, &variables, &CallOptions::new()).await?;
//! println!("{:?}", result.repository);
//! # Ok(())
//! # }
//! ```

pub use libgraphql_client_core::*;

#[cfg(feature = "macros")]
pub use libgraphql_client_macros::GraphQLShape;

/// Derive macros for describing destination shapes.
#[cfg(feature = "macros")]
pub mod macros {
    pub use libgraphql_client_macros::*;
}
