use crate::decode::DecodeError;
use crate::decode::DecodeMode;
use crate::decode::Decoder;
use crate::decode::SelectionMismatchKind;
use crate::operation::SelectionDocumentBuilder;
use crate::operation::SelectionSet;
use crate::shape::FieldConfig;
use crate::shape::GraphQLShape;
use crate::test_fixtures::impl_test_shape;
use crate::test_fixtures::Cat;
use crate::test_fixtures::Dog;
use crate::test_fixtures::PetQuery;
use crate::test_fixtures::RepositoriesQuery;
use crate::test_fixtures::Repository;
use crate::test_fixtures::UserQuery;
use crate::test_fixtures::User;
use crate::test_fixtures::Viewer;
use crate::test_fixtures::ViewerQuery;
use crate::types::Id;
use serde_json::json;

fn selection_set_of<S: GraphQLShape>() -> SelectionSet {
    SelectionDocumentBuilder::selection_set_for_shape(S::shape())
        .unwrap()
        .unwrap()
}

fn decode<S: GraphQLShape>(
    target: &mut S,
    data: serde_json::Value,
    mode: DecodeMode,
) -> Result<(), DecodeError> {
    let selection_set = selection_set_of::<S>();
    Decoder::new(mode).decode_document(target, &data, Some(&selection_set))
}

fn mismatch_kind(err: DecodeError) -> (String, SelectionMismatchKind) {
    match err {
        DecodeError::SelectionMismatch(err) => (err.path.to_string(), err.kind),
        other => panic!("expected a selection mismatch, got {other:?}"),
    }
}

fn repository(name: &str, stargazer_count: Option<i64>) -> Repository {
    Repository {
        name: name.to_string(),
        stargazer_count,
    }
}

#[test]
fn decodes_fully_populated_payload() {
    let mut query = ViewerQuery::default();
    decode(
        &mut query,
        json!({ "viewer": { "login": "octocat", "id": "MDQ6VXNlcjU4MzIzMQ==" } }),
        DecodeMode::Replace,
    ).unwrap();

    assert_eq!(query.viewer, Viewer {
        login: "octocat".to_string(),
        id: Id::new("MDQ6VXNlcjU4MzIzMQ=="),
    });
}

#[test]
fn unknown_keys_are_ignored() {
    let mut query = ViewerQuery::default();
    decode(
        &mut query,
        json!({ "viewer": { "login": "octocat", "id": "1", "email": "x@y.z" }, "rateLimit": {} }),
        DecodeMode::Replace,
    ).unwrap();
    assert_eq!(query.viewer.login, "octocat");
}

#[test]
fn replace_fails_on_missing_required_key() {
    let mut query = ViewerQuery::default();
    let err = decode(
        &mut query,
        json!({ "viewer": { "id": "1" } }),
        DecodeMode::Replace,
    ).unwrap_err();

    assert_eq!(mismatch_kind(err), (
        "viewer.login".to_string(),
        SelectionMismatchKind::MissingKey { key: "login".to_string() },
    ));
}

#[test]
fn replace_treats_missing_optional_key_as_absent() {
    let mut query = UserQuery {
        user: Some(User { login: "stale".to_string() }),
    };
    decode(&mut query, json!({}), DecodeMode::Replace).unwrap();
    assert_eq!(query.user, None);
}

#[test]
fn null_resets_members() {
    let mut query = RepositoriesQuery {
        repositories: vec![repository("old", Some(1))],
        total_count: Some(1),
    };
    decode(
        &mut query,
        json!({ "repositories": null, "totalCount": null }),
        DecodeMode::Merge,
    ).unwrap();
    assert_eq!(query, RepositoriesQuery::default());
}

#[test]
fn replace_rebuilds_lists() {
    let mut query = RepositoriesQuery {
        repositories: vec![
            repository("a", Some(1)),
            repository("b", Some(2)),
            repository("c", Some(3)),
        ],
        total_count: None,
    };
    decode(
        &mut query,
        json!({ "repositories": [{ "name": "z", "stargazerCount": null }], "totalCount": 1 }),
        DecodeMode::Replace,
    ).unwrap();

    assert_eq!(query.repositories, vec![repository("z", None)]);
    assert_eq!(query.total_count, Some(1));
}

#[test]
fn merge_leaves_absent_members_untouched() {
    let mut query = RepositoriesQuery {
        repositories: vec![repository("a", Some(10))],
        total_count: Some(3),
    };
    let before = query.clone();
    decode(&mut query, json!({}), DecodeMode::Merge).unwrap();
    assert_eq!(query, before);

    decode(
        &mut query,
        json!({ "repositories": [{ "name": "a" }] }),
        DecodeMode::Merge,
    ).unwrap();
    assert_eq!(query.repositories, vec![repository("a", Some(10))]);
    assert_eq!(query.total_count, Some(3));
}

#[test]
fn merge_keeps_trailing_list_elements() {
    let mut query = RepositoriesQuery {
        repositories: vec![
            repository("a", Some(1)),
            repository("b", Some(2)),
            repository("c", Some(3)),
        ],
        total_count: None,
    };
    decode(
        &mut query,
        json!({ "repositories": [{ "stargazerCount": 100 }, { "name": "B" }] }),
        DecodeMode::Merge,
    ).unwrap();

    assert_eq!(query.repositories, vec![
        repository("a", Some(100)),
        repository("B", Some(2)),
        repository("c", Some(3)),
    ]);
}

#[test]
fn merge_appends_extra_list_elements() {
    let mut query = RepositoriesQuery {
        repositories: vec![repository("a", Some(1))],
        total_count: None,
    };
    decode(
        &mut query,
        json!({ "repositories": [{ "name": "a" }, { "name": "b", "stargazerCount": 5 }] }),
        DecodeMode::Merge,
    ).unwrap();

    assert_eq!(query.repositories, vec![
        repository("a", Some(1)),
        repository("b", Some(5)),
    ]);
}

#[test]
fn errors_carry_the_response_path() {
    let mut query = RepositoriesQuery::default();
    let err = decode(
        &mut query,
        json!({ "repositories": [{ "name": "a" }, { "name": 7 }] }),
        DecodeMode::Merge,
    ).unwrap_err();

    assert_eq!(mismatch_kind(err), (
        "repositories[1].name".to_string(),
        SelectionMismatchKind::UnexpectedType { expected: "string", found: "number" },
    ));
}

#[test]
fn composites_require_objects() {
    let mut query = ViewerQuery::default();
    let err = decode(&mut query, json!({ "viewer": [] }), DecodeMode::Replace).unwrap_err();
    assert_eq!(mismatch_kind(err), (
        "viewer".to_string(),
        SelectionMismatchKind::UnexpectedType { expected: "object", found: "list" },
    ));
}

#[test]
fn polymorphic_member_decodes_only_matching_branch() {
    let mut query = PetQuery::default();
    decode(
        &mut query,
        json!({ "pet": { "__typename": "Dog", "name": "Rex", "barks": true } }),
        DecodeMode::Replace,
    ).unwrap();

    assert_eq!(query.pet.name, "Rex");
    assert_eq!(query.pet.dog, Some(Dog { barks: true }));
    assert_eq!(query.pet.cat, None);
}

#[test]
fn polymorphic_non_matching_branch_keeps_prior_contents() {
    let mut query = PetQuery::default();
    query.pet.cat = Some(Cat { meows: true });
    decode(
        &mut query,
        json!({ "pet": { "__typename": "Dog", "name": "Rex", "barks": false } }),
        DecodeMode::Replace,
    ).unwrap();

    assert_eq!(query.pet.cat, Some(Cat { meows: true }));
    assert_eq!(query.pet.dog, Some(Dog { barks: false }));
}

#[test]
fn unrecognized_discriminator_fails() {
    let mut query = PetQuery::default();
    let err = decode(
        &mut query,
        json!({ "pet": { "__typename": "Parrot", "name": "Polly" } }),
        DecodeMode::Replace,
    ).unwrap_err();

    assert_eq!(mismatch_kind(err), (
        "pet".to_string(),
        SelectionMismatchKind::UnrecognizedTypeCondition { typename: "Parrot".to_string() },
    ));
}

#[test]
fn missing_discriminator_depends_on_mode() {
    let mut query = PetQuery::default();
    let err = decode(
        &mut query,
        json!({ "pet": { "name": "Rex", "barks": true } }),
        DecodeMode::Replace,
    ).unwrap_err();
    assert_eq!(mismatch_kind(err).1, SelectionMismatchKind::MissingDiscriminator);

    let mut query = PetQuery::default();
    decode(
        &mut query,
        json!({ "pet": { "name": "Rex", "barks": true } }),
        DecodeMode::Merge,
    ).unwrap();
    assert_eq!(query.pet.name, "Rex");
    assert_eq!(query.pet.dog, None);
}

#[derive(Debug, Default)]
struct AliasedEmails {
    primary: String,
    backup: Option<String>,
}
impl_test_shape!(AliasedEmails {
    0 => primary: String = FieldConfig::new().with_name("email").with_alias("primary"),
    1 => backup: Option<String> = FieldConfig::new().with_name("email").with_alias("backup"),
});

#[test]
fn lookups_use_the_response_key() {
    let mut emails = AliasedEmails::default();
    decode(
        &mut emails,
        json!({ "email": "ignored", "primary": "a@example.com", "backup": "b@example.com" }),
        DecodeMode::Replace,
    ).unwrap();

    assert_eq!(emails.primary, "a@example.com");
    assert_eq!(emails.backup.as_deref(), Some("b@example.com"));
}

#[test]
fn composite_without_selection_set_is_rejected() {
    let mut query = ViewerQuery::default();
    let err = Decoder::new(DecodeMode::Replace)
        .decode_document(&mut query, &json!({ "viewer": {} }), None)
        .unwrap_err();
    assert_eq!(mismatch_kind(err), (
        "(root)".to_string(),
        SelectionMismatchKind::MissingSelectionSet,
    ));
}
