use crate::types::Id;
use crate::types::TypeAnnotation;
use indexmap::IndexMap;

/// A Rust type that can be supplied as the value of a GraphQL variable.
///
/// The [`TypeAnnotation`] returned by [`GraphQLInput::type_annotation()`] is
/// used to declare the variable in the generated document when no
/// reference to it carries an explicit type hint.
pub trait GraphQLInput {
    fn type_annotation() -> TypeAnnotation where Self: Sized;
    fn to_input_value(&self) -> serde_json::Value;
}

macro_rules! impl_graphql_input {
    ($graphql_type:literal => $($rust_type:ty),+ $(,)?) => {
        $(
            impl GraphQLInput for $rust_type {
                fn type_annotation() -> TypeAnnotation {
                    TypeAnnotation::named($graphql_type, false)
                }

                fn to_input_value(&self) -> serde_json::Value {
                    serde_json::Value::from(*self)
                }
            }
        )+
    };
}

impl_graphql_input!("Boolean" => bool);
impl_graphql_input!("Int" => i8, i16, i32, i64, u8, u16, u32, u64);
impl_graphql_input!("Float" => f32, f64);

impl GraphQLInput for String {
    fn type_annotation() -> TypeAnnotation {
        TypeAnnotation::named("String", false)
    }

    fn to_input_value(&self) -> serde_json::Value {
        serde_json::Value::String(self.clone())
    }
}

impl GraphQLInput for &str {
    fn type_annotation() -> TypeAnnotation {
        TypeAnnotation::named("String", false)
    }

    fn to_input_value(&self) -> serde_json::Value {
        serde_json::Value::String(self.to_string())
    }
}

impl GraphQLInput for Id {
    fn type_annotation() -> TypeAnnotation {
        TypeAnnotation::named("ID", false)
    }

    fn to_input_value(&self) -> serde_json::Value {
        serde_json::Value::String(self.as_str().to_string())
    }
}

impl<T: GraphQLInput> GraphQLInput for Option<T> {
    fn type_annotation() -> TypeAnnotation {
        T::type_annotation().into_nullable()
    }

    fn to_input_value(&self) -> serde_json::Value {
        match self {
            Some(value) => value.to_input_value(),
            None => serde_json::Value::Null,
        }
    }
}

impl<T: GraphQLInput> GraphQLInput for Vec<T> {
    fn type_annotation() -> TypeAnnotation {
        TypeAnnotation::list(T::type_annotation(), false)
    }

    fn to_input_value(&self) -> serde_json::Value {
        serde_json::Value::Array(
            self.iter()
                .map(GraphQLInput::to_input_value)
                .collect(),
        )
    }
}

/// One caller-supplied variable value along with the wire type it implies.
#[derive(Clone, Debug, PartialEq)]
pub struct VariableBinding {
    pub(crate) type_annotation: TypeAnnotation,
    pub(crate) value: serde_json::Value,
}
impl VariableBinding {
    pub fn type_annotation(&self) -> &TypeAnnotation {
        &self.type_annotation
    }

    pub fn value(&self) -> &serde_json::Value {
        &self.value
    }
}

/// The set of variable values supplied for one operation.
///
/// ```
/// use libgraphql_client_core::Id;
/// use libgraphql_client_core::Variables;
///
/// let variables = Variables::new()
///     .with("userId", 42)
///     .with("after", None::<String>)
///     .with("labels", vec![Id::new("L1")]);
///
/// assert_eq!(variables.get("userId").unwrap().type_annotation().to_string(), "Int!");
/// assert_eq!(variables.get("after").unwrap().type_annotation().to_string(), "String");
/// assert_eq!(variables.get("labels").unwrap().type_annotation().to_string(), "[ID!]!");
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Variables {
    bindings: IndexMap<String, VariableBinding>,
}
impl Variables {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style form of [`Variables::insert()`].
    pub fn with<T: GraphQLInput>(
        mut self,
        name: impl Into<String>,
        value: T,
    ) -> Self {
        self.insert(name, value);
        self
    }

    /// Bind `name` to `value`, inferring the wire type from `T`. Returns the
    /// previous binding for `name`, if any.
    pub fn insert<T: GraphQLInput>(
        &mut self,
        name: impl Into<String>,
        value: T,
    ) -> Option<VariableBinding> {
        self.bindings.insert(name.into(), VariableBinding {
            type_annotation: T::type_annotation(),
            value: value.to_input_value(),
        })
    }

    /// Bind `name` to any serializable `value` with an explicit wire type.
    /// Useful for input objects and custom scalars.
    pub fn insert_as<T: serde::Serialize + ?Sized>(
        &mut self,
        name: impl Into<String>,
        type_annotation: TypeAnnotation,
        value: &T,
    ) -> Result<Option<VariableBinding>, serde_json::Error> {
        let value = serde_json::to_value(value)?;
        Ok(self.bindings.insert(name.into(), VariableBinding {
            type_annotation,
            value,
        }))
    }

    pub fn get(&self, name: &str) -> Option<&VariableBinding> {
        self.bindings.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &VariableBinding)> {
        self.bindings.iter().map(|(name, binding)| (name.as_str(), binding))
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// The bound values as a JSON object, in insertion order.
    pub fn to_json_map(&self) -> serde_json::Map<String, serde_json::Value> {
        self.bindings.iter()
            .map(|(name, binding)| (name.clone(), binding.value.clone()))
            .collect()
    }
}
