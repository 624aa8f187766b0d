use crate::decode::DecodeError;
use crate::decode::DecodeMode;
use crate::decode::ResponsePath;
use crate::decode::ScalarRangeError;
use crate::decode::SelectionMismatchError;
use crate::decode::SelectionMismatchKind;
use crate::operation::FieldSelection;
use crate::operation::Selection;
use crate::operation::SelectionSet;
use crate::shape::GraphQLShape;

/// Walks a response payload alongside the [`SelectionSet`] it was requested
/// with and writes each selected value into the matching destination member.
///
/// A `Decoder` tracks the [`ResponsePath`] of the value currently being
/// decoded so that every error names where in the payload it happened.
#[derive(Clone, Debug)]
pub struct Decoder {
    mode: DecodeMode,
    path: ResponsePath,
}
impl Decoder {
    pub fn new(mode: DecodeMode) -> Self {
        Self {
            mode,
            path: ResponsePath::new(),
        }
    }

    pub fn mode(&self) -> DecodeMode {
        self.mode
    }

    /// The path of the value currently being decoded.
    pub fn path(&self) -> &ResponsePath {
        &self.path
    }

    /// Decode a whole `data` payload into `target`.
    pub fn decode_document(
        &mut self,
        target: &mut dyn GraphQLShape,
        data: &serde_json::Value,
        selection_set: Option<&SelectionSet>,
    ) -> Result<(), DecodeError> {
        self.path = ResponsePath::new();
        tracing::trace!(mode = ?self.mode, "decoding response data");
        target.decode(data, selection_set, self)
    }

    /// Decode a JSON object into the members of a composite `target`.
    ///
    /// This is what derived composite impls delegate to. Each selection is
    /// routed to the member recorded on it; unselected JSON keys are
    /// ignored.
    pub fn decode_object(
        &mut self,
        target: &mut dyn GraphQLShape,
        value: &serde_json::Value,
        selection_set: Option<&SelectionSet>,
    ) -> Result<(), DecodeError> {
        let Some(selection_set) = selection_set else {
            return Err(self.mismatch(SelectionMismatchKind::MissingSelectionSet));
        };
        let Some(object) = value.as_object() else {
            return Err(self.unexpected_type("object", value));
        };

        let typename =
            if selection_set.has_inline_fragments() {
                self.resolve_typename(object, selection_set)?
            } else {
                None
            };

        for selection in selection_set.selections() {
            match selection {
                Selection::Field(field) => {
                    // The implicit discriminator has no member to write to.
                    let Some(index) = field.member_index() else {
                        continue;
                    };
                    let key = field.response_key();
                    self.path.push_key(key);
                    let result = self.decode_field(target, index, field, object.get(key));
                    self.path.pop();
                    result?;
                },

                Selection::InlineFragment(fragment) => {
                    if typename != Some(fragment.type_condition()) {
                        continue;
                    }
                    let index = fragment.member_index();
                    let Some(member) = target.member_mut(index) else {
                        return Err(self.mismatch(SelectionMismatchKind::MissingMember {
                            index,
                        }));
                    };
                    member.decode(value, Some(fragment.selection_set()), self)?;
                },
            }
        }

        Ok(())
    }

    /// Decode a JSON list into `target`.
    ///
    /// In [`DecodeMode::Replace`] the list is rebuilt from scratch. In
    /// [`DecodeMode::Merge`] incoming elements are merged into existing ones
    /// by position, extra incoming elements are appended, and trailing
    /// destination elements are kept.
    pub fn decode_list<T: GraphQLShape + Default>(
        &mut self,
        target: &mut Vec<T>,
        value: &serde_json::Value,
        selection_set: Option<&SelectionSet>,
    ) -> Result<(), DecodeError> {
        let Some(items) = value.as_array() else {
            return Err(self.unexpected_type("list", value));
        };
        if self.mode == DecodeMode::Replace {
            target.clear();
        }

        for (idx, item) in items.iter().enumerate() {
            self.path.push_index(idx);
            let result = match target.get_mut(idx) {
                Some(element) => self.decode_element(element, item, selection_set),
                None => {
                    let mut element = T::default();
                    self.decode_element(&mut element, item, selection_set)
                        .map(|()| target.push(element))
                },
            };
            self.path.pop();
            result?;
        }

        Ok(())
    }

    pub fn expect_bool(&self, value: &serde_json::Value) -> Result<bool, DecodeError> {
        value.as_bool().ok_or_else(|| self.unexpected_type("boolean", value))
    }

    pub fn expect_f64(&self, value: &serde_json::Value) -> Result<f64, DecodeError> {
        value.as_f64().ok_or_else(|| self.unexpected_type("number", value))
    }

    /// Read an exact integer into `T`. Floats are accepted only when they
    /// have no fractional part.
    pub fn expect_integer<T>(
        &self,
        value: &serde_json::Value,
        target_type: &'static str,
    ) -> Result<T, DecodeError>
    where
        T: TryFrom<i64> + TryFrom<u64>,
    {
        let serde_json::Value::Number(number) = value else {
            return Err(self.unexpected_type("integer", value));
        };

        let converted =
            if let Some(int) = number.as_i64() {
                <T as TryFrom<i64>>::try_from(int).ok()
            } else if let Some(uint) = number.as_u64() {
                <T as TryFrom<u64>>::try_from(uint).ok()
            } else if let Some(float) = number.as_f64()
                && float.fract() == 0.0
            {
                // 2^63 and 2^64 are exactly representable as f64.
                if float >= -9_223_372_036_854_775_808.0
                    && float < 9_223_372_036_854_775_808.0
                {
                    <T as TryFrom<i64>>::try_from(float as i64).ok()
                } else if float >= 0.0 && float < 18_446_744_073_709_551_616.0 {
                    <T as TryFrom<u64>>::try_from(float as u64).ok()
                } else {
                    None
                }
            } else {
                None
            };

        converted.ok_or_else(|| self.scalar_out_of_range(target_type, value))
    }

    pub fn expect_str<'v>(
        &self,
        value: &'v serde_json::Value,
    ) -> Result<&'v str, DecodeError> {
        value.as_str().ok_or_else(|| self.unexpected_type("string", value))
    }

    pub fn scalar_out_of_range(
        &self,
        target_type: &'static str,
        value: &serde_json::Value,
    ) -> DecodeError {
        ScalarRangeError {
            path: self.path.clone(),
            target_type,
            value: value.to_string(),
        }.into()
    }

    pub fn unexpected_type(
        &self,
        expected: &'static str,
        found: &serde_json::Value,
    ) -> DecodeError {
        self.mismatch(SelectionMismatchKind::UnexpectedType {
            expected,
            found: json_type_name(found),
        })
    }

    pub fn unknown_enum_value(&self, enum_name: &'static str, value: &str) -> DecodeError {
        self.mismatch(SelectionMismatchKind::UnknownEnumValue {
            enum_name,
            value: value.to_string(),
        })
    }

    fn decode_element<T: GraphQLShape>(
        &mut self,
        element: &mut T,
        item: &serde_json::Value,
        selection_set: Option<&SelectionSet>,
    ) -> Result<(), DecodeError> {
        if item.is_null() {
            element.reset();
            Ok(())
        } else {
            element.decode(item, selection_set, self)
        }
    }

    fn decode_field(
        &mut self,
        target: &mut dyn GraphQLShape,
        index: usize,
        field: &FieldSelection,
        entry: Option<&serde_json::Value>,
    ) -> Result<(), DecodeError> {
        let Some(member) = target.member_mut(index) else {
            return Err(self.mismatch(SelectionMismatchKind::MissingMember { index }));
        };

        match (entry, self.mode) {
            (None, DecodeMode::Merge) => Ok(()),
            (None, DecodeMode::Replace) if field.optional() => {
                member.reset();
                Ok(())
            },
            (None, DecodeMode::Replace) => Err(self.mismatch(
                SelectionMismatchKind::MissingKey {
                    key: field.response_key().to_string(),
                },
            )),
            (Some(serde_json::Value::Null), _) => {
                member.reset();
                Ok(())
            },
            (Some(value), _) => member.decode(value, field.selection_set(), self),
        }
    }

    fn mismatch(&self, kind: SelectionMismatchKind) -> DecodeError {
        SelectionMismatchError {
            kind,
            path: self.path.clone(),
        }.into()
    }

    fn resolve_typename<'v>(
        &self,
        object: &'v serde_json::Map<String, serde_json::Value>,
        selection_set: &SelectionSet,
    ) -> Result<Option<&'v str>, DecodeError> {
        match object.get("__typename").and_then(serde_json::Value::as_str) {
            Some(typename) => {
                let recognized =
                    selection_set.inline_fragments()
                        .any(|fragment| fragment.type_condition() == typename);
                if recognized {
                    Ok(Some(typename))
                } else {
                    Err(self.mismatch(SelectionMismatchKind::UnrecognizedTypeCondition {
                        typename: typename.to_string(),
                    }))
                }
            },
            None if self.mode == DecodeMode::Merge => Ok(None),
            None => Err(self.mismatch(SelectionMismatchKind::MissingDiscriminator)),
        }
    }
}

fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Array(_) => "list",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Null => "null",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::Object(_) => "object",
        serde_json::Value::String(_) => "string",
    }
}
