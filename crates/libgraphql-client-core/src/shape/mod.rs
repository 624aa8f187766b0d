//! Shape descriptors: how a destination type describes the GraphQL selection
//! it corresponds to, and how decoded values flow back into it.

mod container_impls;
mod field_config;
mod graphql_shape;
mod object_shape;
mod scalar_impls;
mod shape_kind;

pub use field_config::FieldConfig;
pub use graphql_shape::GraphQLShape;
pub use object_shape::MemberShape;
pub use object_shape::ObjectShape;
pub use shape_kind::ScalarKind;
pub use shape_kind::ShapeKind;
