use crate::decode::DecodeError;
use crate::decode::Decoder;
use crate::operation::SelectionSet;
use crate::shape::GraphQLShape;
use crate::shape::ShapeKind;

/// `None` is the explicit "absent" state: a missing or `null` response value
/// resets an `Option` member to `None` rather than failing.
impl<T: GraphQLShape + Default> GraphQLShape for Option<T> {
    fn shape() -> ShapeKind {
        ShapeKind::nullable(T::shape())
    }

    fn decode(
        &mut self,
        value: &serde_json::Value,
        selection_set: Option<&SelectionSet>,
        decoder: &mut Decoder,
    ) -> Result<(), DecodeError> {
        if value.is_null() {
            *self = None;
            return Ok(());
        }
        self.get_or_insert_with(T::default)
            .decode(value, selection_set, decoder)
    }

    fn reset(&mut self) {
        *self = None;
    }

    fn member_mut(&mut self, index: usize) -> Option<&mut dyn GraphQLShape> {
        self.as_mut().and_then(|inner| inner.member_mut(index))
    }
}

impl<T: GraphQLShape + Default> GraphQLShape for Vec<T> {
    fn shape() -> ShapeKind {
        ShapeKind::list(T::shape())
    }

    fn decode(
        &mut self,
        value: &serde_json::Value,
        selection_set: Option<&SelectionSet>,
        decoder: &mut Decoder,
    ) -> Result<(), DecodeError> {
        decoder.decode_list(self, value, selection_set)
    }

    fn reset(&mut self) {
        self.clear();
    }
}

impl<T: GraphQLShape> GraphQLShape for Box<T> {
    fn shape() -> ShapeKind {
        T::shape()
    }

    fn decode(
        &mut self,
        value: &serde_json::Value,
        selection_set: Option<&SelectionSet>,
        decoder: &mut Decoder,
    ) -> Result<(), DecodeError> {
        self.as_mut().decode(value, selection_set, decoder)
    }

    fn reset(&mut self) {
        self.as_mut().reset()
    }

    fn member_mut(&mut self, index: usize) -> Option<&mut dyn GraphQLShape> {
        self.as_mut().member_mut(index)
    }
}
