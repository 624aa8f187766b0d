//! Hand-written destination shapes shared by unit tests. They mirror what
//! `#[derive(GraphQLShape)]` generates.

use crate::shape::FieldConfig;
use crate::types::Id;
use crate::Value;

macro_rules! impl_test_shape {
    ($type_name:ident {
        $($index:literal => $member:ident: $member_type:ty = $config:expr),+ $(,)?
    }) => {
        impl crate::shape::GraphQLShape for $type_name {
            fn shape() -> crate::shape::ShapeKind {
                crate::shape::ShapeKind::Object(crate::shape::ObjectShape::new(
                    stringify!($type_name),
                    vec![$(
                        crate::shape::MemberShape::new(
                            stringify!($member),
                            <$member_type as crate::shape::GraphQLShape>::shape,
                            $config,
                        ),
                    )+],
                ))
            }

            fn decode(
                &mut self,
                value: &serde_json::Value,
                selection_set: Option<&crate::operation::SelectionSet>,
                decoder: &mut crate::decode::Decoder,
            ) -> Result<(), crate::decode::DecodeError> {
                decoder.decode_object(self, value, selection_set)
            }

            fn reset(&mut self) {
                $(crate::shape::GraphQLShape::reset(&mut self.$member);)+
            }

            fn member_mut(
                &mut self,
                index: usize,
            ) -> Option<&mut dyn crate::shape::GraphQLShape> {
                match index {
                    $($index => Some(&mut self.$member),)+
                    _ => None,
                }
            }
        }
    };
}
pub(crate) use impl_test_shape;

#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct Viewer {
    pub login: String,
    pub id: Id,
}
impl_test_shape!(Viewer {
    0 => login: String = FieldConfig::new(),
    1 => id: Id = FieldConfig::new(),
});

#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct ViewerQuery {
    pub viewer: Viewer,
}
impl_test_shape!(ViewerQuery {
    0 => viewer: Viewer = FieldConfig::new(),
});

#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct User {
    pub login: String,
}
impl_test_shape!(User {
    0 => login: String = FieldConfig::new(),
});

#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct UserQuery {
    pub user: Option<User>,
}
impl_test_shape!(UserQuery {
    0 => user: Option<User> =
        FieldConfig::new().with_argument("id", Value::variable("userId")),
});

#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct Repository {
    pub name: String,
    pub stargazer_count: Option<i64>,
}
impl_test_shape!(Repository {
    0 => name: String = FieldConfig::new(),
    1 => stargazer_count: Option<i64> = FieldConfig::new(),
});

#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct RepositoriesQuery {
    pub repositories: Vec<Repository>,
    pub total_count: Option<i32>,
}
impl_test_shape!(RepositoriesQuery {
    0 => repositories: Vec<Repository> =
        FieldConfig::new().with_argument("first", 10_i32),
    1 => total_count: Option<i32> = FieldConfig::new(),
});

#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct Cat {
    pub meows: bool,
}
impl_test_shape!(Cat {
    0 => meows: bool = FieldConfig::new(),
});

#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct Dog {
    pub barks: bool,
}
impl_test_shape!(Dog {
    0 => barks: bool = FieldConfig::new(),
});

#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct Pet {
    pub name: String,
    pub cat: Option<Cat>,
    pub dog: Option<Dog>,
}
impl_test_shape!(Pet {
    0 => name: String = FieldConfig::new(),
    1 => cat: Option<Cat> = FieldConfig::new().with_type_condition("Cat"),
    2 => dog: Option<Dog> = FieldConfig::new().with_type_condition("Dog"),
});

#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct PetQuery {
    pub pet: Pet,
}
impl_test_shape!(PetQuery {
    0 => pet: Pet = FieldConfig::new(),
});
