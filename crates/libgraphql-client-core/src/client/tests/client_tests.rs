use crate::client::CallOptions;
use crate::client::Client;
use crate::client::ClientConfig;
use crate::client::ClientError;
use crate::client::FakeTransport;
use crate::client::TransportError;
use crate::decode::DecodeMode;
use crate::decode::SelectionMismatchKind;
use crate::test_fixtures::RepositoriesQuery;
use crate::test_fixtures::Repository;
use crate::test_fixtures::UserQuery;
use crate::test_fixtures::ViewerQuery;
use crate::Variables;
use serde_json::json;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

fn client(transport: FakeTransport) -> Client<FakeTransport> {
    let config =
        ClientConfig::parse("https://api.example.com/graphql")
            .unwrap()
            .with_header("Authorization", "bearer t0ken");
    Client::with_transport(config, transport)
}

fn only_sent_body(client: &Client<FakeTransport>) -> serde_json::Value {
    let mut bodies = client.transport().sent_bodies();
    assert_eq!(bodies.len(), 1, "expected exactly one request");
    bodies.remove(0)
}

#[tokio::test]
async fn query_posts_document_and_declared_variables() {
    let client = client(FakeTransport::new().with_response(200, json!({
        "data": { "user": { "login": "octocat" } },
    })));
    let mut query = UserQuery::default();
    let variables = Variables::new().with("userId", 42).with("unused", true);

    client.query(&mut query, &variables, &CallOptions::new()).await.unwrap();

    assert_eq!(query.user.unwrap().login, "octocat");
    assert_eq!(only_sent_body(&client), json!({
        "query": "query ($userId: Int!) { user(id: $userId) { login } }",
        "variables": { "userId": 42 },
    }));
    let request = &client.transport().requests()[0];
    assert_eq!(request.url.as_str(), "https://api.example.com/graphql");
    assert_eq!(request.headers.get("Authorization").map(String::as_str), Some("bearer t0ken"));
}

#[tokio::test]
async fn empty_variables_are_omitted_from_the_body() {
    let client = client(FakeTransport::new().with_response(200, json!({
        "data": { "viewer": { "login": "octocat", "id": "1" } },
    })));
    let mut query = ViewerQuery::default();

    client.query(&mut query, &Variables::new(), &CallOptions::new()).await.unwrap();

    assert_eq!(only_sent_body(&client), json!({
        "query": "query { viewer { login id } }",
    }));
}

#[tokio::test]
async fn mutate_sends_a_mutation() {
    let client = client(FakeTransport::new().with_response(200, json!({
        "data": { "viewer": { "login": "octocat", "id": "1" } },
    })));
    let mut result = ViewerQuery::default();

    client.mutate(&mut result, &Variables::new(), &CallOptions::new()).await.unwrap();

    let body = only_sent_body(&client);
    assert!(body["query"].as_str().unwrap().starts_with("mutation {"));
}

#[tokio::test]
async fn partial_data_is_decoded_before_reporting_errors() {
    let client = client(FakeTransport::new().with_response(200, json!({
        "data": { "repositories": [{ "name": "libgraphql", "stargazerCount": 5 }], "totalCount": null },
        "errors": [
            { "message": "totalCount is unavailable", "path": ["totalCount"] },
            { "message": "rate limited", "extensions": { "code": "RATE_LIMITED" } },
        ],
    })));
    let mut query = RepositoriesQuery::default();

    let err = client.query(&mut query, &Variables::new(), &CallOptions::new())
        .await
        .unwrap_err();

    let ClientError::Protocol(errors) = err else {
        panic!("expected protocol errors, got {err:?}");
    };
    assert_eq!(errors.to_string(), "totalCount is unavailable");
    assert_eq!(errors.len(), 2);
    assert_eq!(query.repositories, vec![Repository {
        name: "libgraphql".to_string(),
        stargazer_count: Some(5),
    }]);
}

#[tokio::test]
async fn decode_errors_take_precedence_over_protocol_errors() {
    let client = client(FakeTransport::new().with_response(200, json!({
        "data": { "viewer": { "id": "1" } },
        "errors": [{ "message": "login is forbidden" }],
    })));
    let mut query = ViewerQuery::default();

    let err = client.query(&mut query, &Variables::new(), &CallOptions::new())
        .await
        .unwrap_err();

    let ClientError::SelectionMismatch(err) = err else {
        panic!("expected a selection mismatch, got {err:?}");
    };
    assert_eq!(err.kind, SelectionMismatchKind::MissingKey { key: "login".to_string() });
}

#[tokio::test]
async fn errors_without_data_leave_the_shape_untouched() {
    let client = client(FakeTransport::new().with_response(200, json!({
        "data": null,
        "errors": [{ "message": "Could not resolve to a User" }],
    })));
    let mut query = ViewerQuery::default();
    query.viewer.login = "cached".to_string();

    let err = client.query(&mut query, &Variables::new(), &CallOptions::new())
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "Could not resolve to a User");
    assert_eq!(query.viewer.login, "cached");
}

#[tokio::test]
async fn non_success_status_is_not_decoded() {
    let client = client(FakeTransport::new().with_raw_response(502, "bad gateway"));
    let mut query = ViewerQuery::default();

    let err = client.query(&mut query, &Variables::new(), &CallOptions::new())
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        ClientError::Transport(TransportError::UnexpectedStatus { status: 502, ref body, .. })
            if body == "bad gateway",
    ));
}

#[tokio::test]
async fn malformed_body_is_an_envelope_error() {
    let client = client(FakeTransport::new().with_raw_response(200, "<html>"));
    let mut query = ViewerQuery::default();

    assert!(matches!(
        client.query(&mut query, &Variables::new(), &CallOptions::new()).await,
        Err(ClientError::EnvelopeDecode(_)),
    ));
}

#[tokio::test]
async fn shape_errors_fail_before_sending() {
    let client = client(FakeTransport::new());
    let mut query = UserQuery::default();

    assert!(matches!(
        client.query(&mut query, &Variables::new(), &CallOptions::new()).await,
        Err(ClientError::Shape(_)),
    ));
    assert!(client.transport().requests().is_empty());
}

#[tokio::test]
async fn merge_query_keeps_members_the_response_omits() {
    let client = client(FakeTransport::new().with_response(200, json!({
        "data": { "repositories": [{ "name": "renamed" }] },
    })));
    let mut query = RepositoriesQuery {
        repositories: vec![
            Repository { name: "a".to_string(), stargazer_count: Some(1) },
            Repository { name: "b".to_string(), stargazer_count: Some(2) },
        ],
        total_count: Some(2),
    };

    client.query_merge(&mut query, &Variables::new(), &CallOptions::new()).await.unwrap();

    assert_eq!(query.total_count, Some(2));
    assert_eq!(query.repositories[0], Repository {
        name: "renamed".to_string(),
        stargazer_count: Some(1),
    });
    assert_eq!(query.repositories[1].name, "b");
}

#[tokio::test]
async fn execute_document_sends_text_verbatim() {
    let client = client(FakeTransport::new().with_response(200, json!({
        "data": { "viewer": { "login": "octocat" } },
    })));
    let mut data = serde_json::Value::Null;
    let variables = json!({ "first": 3 }).as_object().unwrap().clone();

    client.execute_document(
        "query($first: Int!) { viewer { login } }",
        &mut data,
        &variables,
        DecodeMode::Replace,
        &CallOptions::new(),
    ).await.unwrap();

    assert_eq!(data, json!({ "viewer": { "login": "octocat" } }));
    assert_eq!(only_sent_body(&client), json!({
        "query": "query($first: Int!) { viewer { login } }",
        "variables": { "first": 3 },
    }));
}

#[tokio::test]
async fn slow_calls_time_out() {
    let client = client(
        FakeTransport::new()
            .with_delay(Duration::from_secs(30))
            .with_response(200, json!({ "data": {} })),
    );
    let mut data = serde_json::Value::Null;
    let options = CallOptions::new().with_timeout(Duration::from_millis(20));

    let err = client.execute_document(
        "{ viewer { login } }",
        &mut data,
        &serde_json::Map::new(),
        DecodeMode::Replace,
        &options,
    ).await.unwrap_err();

    assert!(matches!(
        err,
        ClientError::Transport(TransportError::TimedOut(timeout))
            if timeout == Duration::from_millis(20),
    ));
}

#[tokio::test]
async fn cancelled_calls_stop_waiting() {
    let client = client(
        FakeTransport::new()
            .with_delay(Duration::from_secs(30))
            .with_response(200, json!({ "data": {} })),
    );
    let token = CancellationToken::new();
    let options = CallOptions::new().with_cancellation(token.clone());
    let canceller = tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(10)).await;
        token.cancel();
    });
    let mut data = serde_json::Value::Null;

    let err = client.execute_document(
        "{ viewer { login } }",
        &mut data,
        &serde_json::Map::new(),
        DecodeMode::Replace,
        &options,
    ).await.unwrap_err();

    canceller.await.unwrap();
    assert!(matches!(err, ClientError::Transport(TransportError::Cancelled)));
    assert_eq!(data, serde_json::Value::Null);
}
