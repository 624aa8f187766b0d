use crate::decode::DecodeError;
use crate::decode::DecodeMode;
use crate::decode::Decoder;
use crate::operation::SelectionSet;
use crate::shape::GraphQLShape;
use crate::shape::ScalarKind;
use crate::shape::ShapeKind;
use crate::types::Id;

macro_rules! impl_integer_shape {
    ($($rust_type:ty),+ $(,)?) => {
        $(
            impl GraphQLShape for $rust_type {
                fn shape() -> ShapeKind {
                    ShapeKind::Scalar(ScalarKind::Int)
                }

                fn decode(
                    &mut self,
                    value: &serde_json::Value,
                    _selection_set: Option<&SelectionSet>,
                    decoder: &mut Decoder,
                ) -> Result<(), DecodeError> {
                    *self = decoder.expect_integer(value, stringify!($rust_type))?;
                    Ok(())
                }

                fn reset(&mut self) {
                    *self = 0;
                }
            }
        )+
    };
}

impl_integer_shape!(i8, i16, i32, i64, u8, u16, u32, u64);

impl GraphQLShape for f64 {
    fn shape() -> ShapeKind {
        ShapeKind::Scalar(ScalarKind::Float)
    }

    fn decode(
        &mut self,
        value: &serde_json::Value,
        _selection_set: Option<&SelectionSet>,
        decoder: &mut Decoder,
    ) -> Result<(), DecodeError> {
        *self = decoder.expect_f64(value)?;
        Ok(())
    }

    fn reset(&mut self) {
        *self = 0.0;
    }
}

impl GraphQLShape for f32 {
    fn shape() -> ShapeKind {
        ShapeKind::Scalar(ScalarKind::Float)
    }

    fn decode(
        &mut self,
        value: &serde_json::Value,
        _selection_set: Option<&SelectionSet>,
        decoder: &mut Decoder,
    ) -> Result<(), DecodeError> {
        let wide = decoder.expect_f64(value)?;
        if wide.is_finite() && wide.abs() > f64::from(f32::MAX) {
            return Err(decoder.scalar_out_of_range("f32", value));
        }
        *self = wide as f32;
        Ok(())
    }

    fn reset(&mut self) {
        *self = 0.0;
    }
}

impl GraphQLShape for bool {
    fn shape() -> ShapeKind {
        ShapeKind::Scalar(ScalarKind::Boolean)
    }

    fn decode(
        &mut self,
        value: &serde_json::Value,
        _selection_set: Option<&SelectionSet>,
        decoder: &mut Decoder,
    ) -> Result<(), DecodeError> {
        *self = decoder.expect_bool(value)?;
        Ok(())
    }

    fn reset(&mut self) {
        *self = false;
    }
}

impl GraphQLShape for String {
    fn shape() -> ShapeKind {
        ShapeKind::Scalar(ScalarKind::String)
    }

    fn decode(
        &mut self,
        value: &serde_json::Value,
        _selection_set: Option<&SelectionSet>,
        decoder: &mut Decoder,
    ) -> Result<(), DecodeError> {
        let incoming = decoder.expect_str(value)?;
        self.clear();
        self.push_str(incoming);
        Ok(())
    }

    fn reset(&mut self) {
        self.clear();
    }
}

impl GraphQLShape for Id {
    fn shape() -> ShapeKind {
        ShapeKind::Scalar(ScalarKind::Id)
    }

    fn decode(
        &mut self,
        value: &serde_json::Value,
        _selection_set: Option<&SelectionSet>,
        decoder: &mut Decoder,
    ) -> Result<(), DecodeError> {
        *self = match value {
            serde_json::Value::String(id) => Id::new(id.as_str()),
            serde_json::Value::Number(id) if id.is_i64() || id.is_u64() =>
                Id::new(id.to_string()),
            other => return Err(decoder.unexpected_type("string or integer ID", other)),
        };
        Ok(())
    }

    fn reset(&mut self) {
        self.clear();
    }
}

/// Decodes any JSON verbatim. Useful for custom scalars and for
/// destination-agnostic callers that want the raw `data` payload.
///
/// In [`DecodeMode::Merge`], incoming objects are merged key-by-key and
/// arrays position-by-position into the existing value.
impl GraphQLShape for serde_json::Value {
    fn shape() -> ShapeKind {
        ShapeKind::Scalar(ScalarKind::Custom("JSON"))
    }

    fn decode(
        &mut self,
        value: &serde_json::Value,
        _selection_set: Option<&SelectionSet>,
        decoder: &mut Decoder,
    ) -> Result<(), DecodeError> {
        match decoder.mode() {
            DecodeMode::Replace => *self = value.clone(),
            DecodeMode::Merge => merge_json(self, value),
        }
        Ok(())
    }

    fn reset(&mut self) {
        *self = serde_json::Value::Null;
    }
}

fn merge_json(dest: &mut serde_json::Value, incoming: &serde_json::Value) {
    match (dest, incoming) {
        (serde_json::Value::Object(dest), serde_json::Value::Object(incoming)) => {
            for (key, incoming_value) in incoming {
                match dest.get_mut(key) {
                    Some(dest_value) => merge_json(dest_value, incoming_value),
                    None => {
                        dest.insert(key.clone(), incoming_value.clone());
                    },
                }
            }
        },

        (serde_json::Value::Array(dest), serde_json::Value::Array(incoming)) => {
            for (idx, incoming_value) in incoming.iter().enumerate() {
                match dest.get_mut(idx) {
                    Some(dest_value) => merge_json(dest_value, incoming_value),
                    None => dest.push(incoming_value.clone()),
                }
            }
        },

        (dest, incoming) => *dest = incoming.clone(),
    }
}
