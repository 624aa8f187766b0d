use crate::response::EnvelopeDecodeError;
use crate::response::ResponseEnvelope;
use crate::response::SourceLocation;
use serde_json::json;

#[test]
fn splits_data_from_errors() {
    let envelope = ResponseEnvelope::from_slice(br#"{
        "data": { "viewer": { "login": "octocat" } },
        "errors": [
            { "message": "partial failure", "locations": [{ "line": 1, "column": 9 }], "path": ["viewer", "email"] }
        ],
        "extensions": { "cost": 3 }
    }"#).unwrap();

    assert_eq!(
        envelope.data().unwrap(),
        json!({ "viewer": { "login": "octocat" } }).as_object().unwrap(),
    );
    assert_eq!(envelope.errors().len(), 1);
    let error = &envelope.errors()[0];
    assert_eq!(error.message(), "partial failure");
    assert_eq!(error.locations(), &[SourceLocation { column: 9, line: 1 }]);
    assert_eq!(error.path().unwrap(), &[json!("viewer"), json!("email")]);
    assert_eq!(envelope.extensions().unwrap()["cost"], json!(3));
}

#[test]
fn errors_without_data_aggregate_in_order() {
    let envelope = ResponseEnvelope::from_slice(
        br#"{"errors":[{"message":"x"},{"message":"y"}]}"#,
    ).unwrap();
    assert!(envelope.data().is_none());

    let (data, errors) = envelope.into_parts();
    assert!(data.is_none());
    let errors = errors.unwrap();
    assert_eq!(errors.len(), 2);
    assert_eq!(errors.to_string(), "x");
    let messages: Vec<&str> = errors.iter().map(|error| error.message()).collect();
    assert_eq!(messages, vec!["x", "y"]);
}

#[test]
fn null_data_is_accepted() {
    let envelope = ResponseEnvelope::from_slice(
        br#"{ "data": null, "errors": [{ "message": "boom" }] }"#,
    ).unwrap();
    assert!(envelope.data().is_none());

    let (data, errors) = envelope.into_parts();
    assert!(data.is_none());
    assert_eq!(errors.unwrap().to_string(), "boom");
}

#[test]
fn null_locations_decode_as_empty() {
    let envelope = ResponseEnvelope::from_slice(
        br#"{ "errors": [{ "message": "boom", "locations": null }] }"#,
    ).unwrap();
    assert!(envelope.errors()[0].locations().is_empty());
}

#[test]
fn unknown_top_level_keys_are_ignored() {
    let envelope = ResponseEnvelope::from_slice(
        br#"{ "data": {}, "hasNext": false }"#,
    ).unwrap();
    assert!(envelope.data().unwrap().is_empty());
    assert!(envelope.errors().is_empty());
}

#[test]
fn rejects_envelope_without_data_or_errors() {
    assert!(matches!(
        ResponseEnvelope::from_slice(br#"{ "extensions": {} }"#),
        Err(EnvelopeDecodeError::MissingDataAndErrors),
    ));
}

#[test]
fn rejects_malformed_bodies() {
    for body in [
        &b"not json"[..],
        br#"[1, 2]"#,
        br#"{ "data": [1] }"#,
        br#"{ "data": "nope" }"#,
        br#"{ "errors": {} }"#,
        br#"{ "errors": [{ "locations": [] }] }"#,
        br#"{ "errors": [{ "message": 7 }] }"#,
    ] {
        assert!(
            matches!(
                ResponseEnvelope::from_slice(body),
                Err(EnvelopeDecodeError::Malformed(_)),
            ),
            "expected a malformed-envelope error for {}",
            String::from_utf8_lossy(body),
        );
    }
}
