use crate::decode::DecodeError;
use crate::decode::Decoder;
use crate::operation::SelectionSet;
use crate::shape::ShapeKind;

/// A destination type that both describes what to select and receives the
/// decoded response.
///
/// Implementations are normally generated with `#[derive(GraphQLShape)]`.
/// A hand-written composite implementation looks like this:
///
/// ```
/// use libgraphql_client_core::decode::DecodeError;
/// use libgraphql_client_core::decode::Decoder;
/// use libgraphql_client_core::operation::SelectionSet;
/// use libgraphql_client_core::shape::FieldConfig;
/// use libgraphql_client_core::shape::GraphQLShape;
/// use libgraphql_client_core::shape::MemberShape;
/// use libgraphql_client_core::shape::ObjectShape;
/// use libgraphql_client_core::shape::ShapeKind;
///
/// #[derive(Default)]
/// struct Viewer {
///     login: String,
/// }
/// impl GraphQLShape for Viewer {
///     fn shape() -> ShapeKind {
///         ShapeKind::Object(ObjectShape::new("Viewer", vec![
///             MemberShape::new("login", <String as GraphQLShape>::shape, FieldConfig::new()),
///         ]))
///     }
///
///     fn decode(
///         &mut self,
///         value: &libgraphql_client_core::serde_json::Value,
///         selection_set: Option<&SelectionSet>,
///         decoder: &mut Decoder,
///     ) -> Result<(), DecodeError> {
///         decoder.decode_object(self, value, selection_set)
///     }
///
///     fn reset(&mut self) {
///         self.login.reset();
///     }
///
///     fn member_mut(&mut self, index: usize) -> Option<&mut dyn GraphQLShape> {
///         match index {
///             0 => Some(&mut self.login),
///             _ => None,
///         }
///     }
/// }
/// ```
pub trait GraphQLShape {
    /// Describe how this type maps onto a GraphQL selection.
    fn shape() -> ShapeKind where Self: Sized;

    /// Decode a non-null JSON `value` into `self`. `selection_set` is the
    /// sub-selection that was requested for this value, if any.
    fn decode(
        &mut self,
        value: &serde_json::Value,
        selection_set: Option<&SelectionSet>,
        decoder: &mut Decoder,
    ) -> Result<(), DecodeError>;

    /// Reset `self` to its empty representation (what a JSON `null`
    /// decodes to).
    fn reset(&mut self);

    /// Access the member at `index` in this type's
    /// [`ObjectShape`](crate::shape::ObjectShape). Only composites have
    /// members.
    fn member_mut(&mut self, index: usize) -> Option<&mut dyn GraphQLShape> {
        let _ = index;
        None
    }
}
