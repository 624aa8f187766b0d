use crate::shape::FieldConfig;
use crate::shape::ShapeKind;

/// The ordered members of a composite destination type.
#[derive(Clone, Debug)]
pub struct ObjectShape {
    pub(crate) members: Vec<MemberShape>,
    pub(crate) type_name: &'static str,
}
impl ObjectShape {
    /// `type_name` identifies the Rust type for diagnostics and recursion
    /// checks; it is never sent to the server.
    pub fn new(type_name: &'static str, members: Vec<MemberShape>) -> Self {
        Self {
            members,
            type_name,
        }
    }

    /// Members in declaration order. A member's position in this list is the
    /// index passed to [`GraphQLShape::member_mut()`](crate::shape::GraphQLShape::member_mut).
    pub fn members(&self) -> &[MemberShape] {
        &self.members
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }
}

/// One member of an [`ObjectShape`].
///
/// The member's [`ShapeKind`] is produced lazily so that self-referential
/// types can be described (and rejected) without recursing forever.
#[derive(Clone, Debug)]
pub struct MemberShape {
    pub(crate) config: FieldConfig,
    pub(crate) kind: fn() -> ShapeKind,
    pub(crate) member_name: &'static str,
}
impl MemberShape {
    pub fn new(
        member_name: &'static str,
        kind: fn() -> ShapeKind,
        config: FieldConfig,
    ) -> Self {
        Self {
            config,
            kind,
            member_name,
        }
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub fn kind(&self) -> ShapeKind {
        (self.kind)()
    }

    pub fn member_name(&self) -> &'static str {
        self.member_name
    }
}
