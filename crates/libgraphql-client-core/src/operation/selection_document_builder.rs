use crate::names;
use crate::operation::FieldSelection;
use crate::operation::InlineFragmentSelection;
use crate::operation::OperationKind;
use crate::operation::Selection;
use crate::operation::SelectionDocument;
use crate::operation::SelectionSet;
use crate::operation::ShapeError;
use crate::operation::VariableDefinition;
use crate::shape::GraphQLShape;
use crate::shape::ObjectShape;
use crate::shape::ShapeKind;
use crate::Value;
use crate::VariableRef;
use crate::Variables;
use indexmap::IndexMap;
use std::collections::HashSet;

type Result<T> = std::result::Result<T, ShapeError>;

/// Derives a [`SelectionDocument`] from a destination shape.
///
/// ```
/// use libgraphql_client_core::OperationKind;
/// use libgraphql_client_core::Variables;
/// use libgraphql_client_core::operation::SelectionDocumentBuilder;
/// use libgraphql_client_core::shape::FieldConfig;
/// use libgraphql_client_core::shape::GraphQLShape;
/// use libgraphql_client_core::shape::MemberShape;
/// use libgraphql_client_core::shape::ObjectShape;
/// use libgraphql_client_core::shape::ShapeKind;
///
/// let shape = ShapeKind::Object(ObjectShape::new("Query", vec![
///     MemberShape::new("login", <String as GraphQLShape>::shape, FieldConfig::new()),
/// ]));
/// let document =
///     SelectionDocumentBuilder::new(OperationKind::Query, &Variables::new())
///         .build_from_shape(shape)
///         .unwrap();
/// assert_eq!(document.to_string(), "query { login }");
/// ```
#[derive(Clone, Debug)]
pub struct SelectionDocumentBuilder<'vars> {
    operation_kind: OperationKind,
    path: Vec<String>,
    type_stack: Vec<&'static str>,
    variable_definitions: IndexMap<String, VariableDefinition>,
    variables: Option<&'vars Variables>,
}
impl<'vars> SelectionDocumentBuilder<'vars> {
    pub fn new(operation_kind: OperationKind, variables: &'vars Variables) -> Self {
        Self {
            operation_kind,
            path: vec![operation_kind.keyword().to_string()],
            type_stack: vec![],
            variable_definitions: IndexMap::new(),
            variables: Some(variables),
        }
    }

    pub fn build<S: GraphQLShape>(self) -> Result<SelectionDocument> {
        self.build_from_shape(S::shape())
    }

    pub fn build_from_shape(mut self, shape: ShapeKind) -> Result<SelectionDocument> {
        let ShapeKind::Object(root) = shape else {
            return Err(ShapeError::Unrepresentable {
                path: self.path_string(),
                reason: "the root of an operation must be a composite type".to_string(),
            });
        };
        let selection_set = self.object_selection_set(&root)?;

        let mut variable_values = serde_json::Map::new();
        if let Some(variables) = self.variables {
            for (name, binding) in variables.iter() {
                if self.variable_definitions.contains_key(name) {
                    variable_values.insert(name.to_string(), binding.value().clone());
                } else {
                    tracing::debug!(
                        variable = name,
                        "dropping variable binding that the document does not refer to",
                    );
                }
            }
        }

        let document = SelectionDocument {
            operation_kind: self.operation_kind,
            selection_set,
            variable_definitions: self.variable_definitions,
            variable_values,
        };
        tracing::debug!(document = %document, "built selection document");
        Ok(document)
    }

    /// Derive only the [`SelectionSet`] for a shape, without resolving
    /// variables. This is what decoding a response to caller-written
    /// document text is guided by.
    ///
    /// Returns `None` for leaf shapes, which decode without a sub-selection.
    pub fn selection_set_for_shape(shape: ShapeKind) -> Result<Option<SelectionSet>> {
        let mut builder = Self {
            operation_kind: OperationKind::Query,
            path: vec!["data".to_string()],
            type_stack: vec![],
            variable_definitions: IndexMap::new(),
            variables: None,
        };
        match shape {
            ShapeKind::Object(root) => builder.object_selection_set(&root).map(Some),
            ShapeKind::Scalar(_) => Ok(None),
            ShapeKind::List(_) | ShapeKind::Nullable(_) => Err(ShapeError::Unrepresentable {
                path: builder.path_string(),
                reason: "the root of a response must be a composite or leaf type".to_string(),
            }),
            ShapeKind::Unrepresentable(reason) => Err(ShapeError::Unrepresentable {
                path: builder.path_string(),
                reason,
            }),
        }
    }

    fn object_selection_set(&mut self, object: &ObjectShape) -> Result<SelectionSet> {
        if self.type_stack.contains(&object.type_name()) {
            return Err(ShapeError::RecursiveShape {
                path: self.path_string(),
                type_name: object.type_name(),
            });
        }
        if object.members().is_empty() {
            return Err(ShapeError::EmptySelection {
                path: self.path_string(),
                type_name: object.type_name(),
            });
        }

        self.type_stack.push(object.type_name());
        let mut response_keys = HashSet::new();
        let mut selections = Vec::with_capacity(object.members().len() + 1);
        for (member_index, member) in object.members().iter().enumerate() {
            let config = member.config();

            if let Some(type_condition) = config.type_condition() {
                self.validate_name(type_condition)?;
                self.path.push(format!("... on {type_condition}"));
                let fragment = self.inline_fragment(
                    member_index,
                    type_condition,
                    config.name().is_some()
                        || config.alias().is_some()
                        || !config.arguments().is_empty(),
                    member.kind(),
                );
                self.path.pop();
                selections.push(Selection::InlineFragment(fragment?));
                continue;
            }

            let name =
                config.name()
                    .map(str::to_string)
                    .unwrap_or_else(|| names::to_field_name(member.member_name()));
            self.validate_name(&name)?;
            if let Some(alias) = config.alias() {
                self.validate_name(alias)?;
            }
            let response_key = config.alias().unwrap_or(name.as_str()).to_string();
            if !response_keys.insert(response_key.clone()) {
                return Err(ShapeError::DuplicateAlias {
                    alias: response_key,
                    path: self.path_string(),
                });
            }

            self.path.push(response_key);
            let field = self.field_selection(
                member_index,
                name,
                config.alias(),
                config.arguments(),
                member.kind(),
            );
            self.path.pop();
            selections.push(Selection::Field(field?));
        }
        self.type_stack.pop();

        let has_inline_fragments =
            selections.iter()
                .any(|selection| matches!(selection, Selection::InlineFragment(_)));
        if has_inline_fragments {
            let typename_field_name =
                selections.iter()
                    .filter_map(Selection::as_field)
                    .find(|field| field.response_key() == "__typename")
                    .map(|field| field.name().to_string());
            match typename_field_name.as_deref() {
                None => selections.insert(
                    0,
                    Selection::Field(FieldSelection::discriminator()),
                ),
                Some("__typename") => (),
                // Another field answering under `__typename` would be read
                // as the discriminator.
                Some(_) => return Err(ShapeError::DuplicateAlias {
                    alias: "__typename".to_string(),
                    path: self.path_string(),
                }),
            }
        }

        Ok(SelectionSet { selections })
    }

    fn field_selection(
        &mut self,
        member_index: usize,
        name: String,
        alias: Option<&str>,
        arguments: &IndexMap<String, Value>,
        kind: ShapeKind,
    ) -> Result<FieldSelection> {
        for (arg_name, arg_value) in arguments {
            self.validate_name(arg_name)?;
            if let Some(invalid_name) = arg_value.first_invalid_name() {
                return Err(ShapeError::InvalidName {
                    name: invalid_name.to_string(),
                    path: self.path_string(),
                });
            }
            arg_value.try_for_each_variable(
                &mut |var_ref: &VariableRef| self.register_variable(var_ref),
            )?;
        }

        let (optional, selection_set) = match kind {
            ShapeKind::Nullable(inner) => (true, self.sub_selection(*inner)?),
            other => (false, self.sub_selection(other)?),
        };

        Ok(FieldSelection {
            alias: alias.map(str::to_string),
            arguments: arguments.clone(),
            member_index: Some(member_index),
            name,
            optional,
            selection_set,
        })
    }

    fn inline_fragment(
        &mut self,
        member_index: usize,
        type_condition: &str,
        has_field_config: bool,
        kind: ShapeKind,
    ) -> Result<InlineFragmentSelection> {
        if has_field_config {
            return Err(self.unrepresentable(
                "a type-conditioned member cannot also set a field name, alias, or arguments",
            ));
        }
        let object = match kind {
            ShapeKind::Object(object) => Some(object),
            ShapeKind::Nullable(inner) => match *inner {
                ShapeKind::Object(object) => Some(object),
                _ => None,
            },
            _ => None,
        };
        let Some(object) = object else {
            return Err(self.unrepresentable(
                "a type-conditioned member must be a composite or an `Option` of one",
            ));
        };
        Ok(InlineFragmentSelection {
            member_index,
            selection_set: self.object_selection_set(&object)?,
            type_condition: type_condition.to_string(),
        })
    }

    fn path_string(&self) -> String {
        self.path.join(".")
    }

    fn register_variable(&mut self, var_ref: &VariableRef) -> Result<()> {
        let name = var_ref.name();
        self.validate_name(name)?;
        let Some(variables) = self.variables else {
            return Ok(());
        };

        let implied_type = match (var_ref.type_hint(), variables.get(name)) {
            (Some(type_hint), _) => type_hint.clone(),
            (None, Some(binding)) => binding.type_annotation().clone(),
            (None, None) => return Err(ShapeError::UnboundVariable {
                path: self.path_string(),
                variable: name.to_string(),
            }),
        };

        match self.variable_definitions.get(name) {
            Some(existing) if existing.type_annotation != implied_type =>
                Err(ShapeError::ConflictingVariableType {
                    first: existing.type_annotation.to_string(),
                    second: implied_type.to_string(),
                    variable: name.to_string(),
                }),
            Some(_) => Ok(()),
            None => {
                self.variable_definitions.insert(name.to_string(), VariableDefinition {
                    name: name.to_string(),
                    type_annotation: implied_type,
                });
                Ok(())
            },
        }
    }

    fn sub_selection(&mut self, kind: ShapeKind) -> Result<Option<SelectionSet>> {
        match kind {
            ShapeKind::Scalar(_) => Ok(None),
            ShapeKind::Object(object) => self.object_selection_set(&object).map(Some),
            ShapeKind::List(element) => match *element {
                ShapeKind::Nullable(inner) => match *inner {
                    ShapeKind::Nullable(_) => Err(self.unrepresentable(
                        "`Option<Option<_>>` has no GraphQL representation",
                    )),
                    inner => self.sub_selection(inner),
                },
                element => self.sub_selection(element),
            },
            ShapeKind::Nullable(_) => Err(self.unrepresentable(
                "`Option<Option<_>>` has no GraphQL representation",
            )),
            ShapeKind::Unrepresentable(reason) => Err(ShapeError::Unrepresentable {
                path: self.path_string(),
                reason,
            }),
        }
    }

    fn unrepresentable(&self, reason: &str) -> ShapeError {
        ShapeError::Unrepresentable {
            path: self.path_string(),
            reason: reason.to_string(),
        }
    }

    fn validate_name(&self, name: &str) -> Result<()> {
        if names::is_valid_name(name) {
            Ok(())
        } else {
            Err(ShapeError::InvalidName {
                name: name.to_string(),
                path: self.path_string(),
            })
        }
    }
}
