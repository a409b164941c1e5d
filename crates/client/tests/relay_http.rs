//! Transport contract tests against a local mock server.
//!
//! These pin the wire behavior the remote service depends on: the exact
//! POST body, the bearer header, and the error classification for bad
//! payloads and non-success statuses.

use httpmock::prelude::*;

use rangerelay_client::{ClientError, RelayClient};

const GOLDEN_INPUT: &str = r#"{
    "token": "abc",
    "data": [1, 2, 3, 4, 5],
    "query": [
        { "type": "1", "range": [1, 3] },
        { "type": "2", "range": [0, 4] }
    ]
}"#;

#[test]
fn fetch_input_decodes_payload() {
    let server = MockServer::start();
    let input = server.mock(|when, then| {
        when.method(GET).path("/input");
        then.status(200)
            .header("content-type", "application/json")
            .body(GOLDEN_INPUT);
    });

    let client = RelayClient::new(server.url("/input"), server.url("/output"));
    let payload = client.fetch_input().unwrap();

    input.assert();
    assert_eq!(payload.token, "abc");
    assert_eq!(payload.data, vec![1, 2, 3, 4, 5]);
    assert_eq!(payload.query.len(), 2);
}

#[test]
fn fetch_input_classifies_bad_payload_as_malformed() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/input");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{ "token": "abc" }"#);
    });

    let client = RelayClient::new(server.url("/input"), server.url("/output"));
    let err = client.fetch_input().unwrap_err();

    assert!(matches!(err, ClientError::MalformedInput(_)), "got {:?}", err);
}

#[test]
fn fetch_input_surfaces_http_status() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/input");
        then.status(503).body("upstream down");
    });

    let client = RelayClient::new(server.url("/input"), server.url("/output"));
    let err = client.fetch_input().unwrap_err();

    match err {
        ClientError::Http(status, body) => {
            assert_eq!(status, 503);
            assert_eq!(body, "upstream down");
        }
        other => panic!("expected Http error, got {:?}", other),
    }
}

#[test]
fn deliver_posts_bare_array_with_bearer_token() {
    let server = MockServer::start();
    let output = server.mock(|when, then| {
        when.method(POST)
            .path("/output")
            .header("authorization", "Bearer abc")
            .header("content-type", "application/json")
            .json_body(serde_json::json!([9, 3]));
        then.status(200);
    });

    let client = RelayClient::new(server.url("/input"), server.url("/output"));
    client.deliver("abc", &[9, 3]).unwrap();

    output.assert();
}

#[test]
fn deliver_passes_token_through_unmodified() {
    // Tokens are opaque; whitespace-free pass-through is part of the contract.
    let token = "eyJhbGciOiJIUzI1NiJ9.payload.sig";
    let server = MockServer::start();
    let output = server.mock(|when, then| {
        when.method(POST)
            .path("/output")
            .header("authorization", format!("Bearer {}", token));
        then.status(200);
    });

    let client = RelayClient::new(server.url("/input"), server.url("/output"));
    client.deliver(token, &[0]).unwrap();

    output.assert();
}

#[test]
fn deliver_surfaces_rejection_status() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/output");
        then.status(401).body("bad token");
    });

    let client = RelayClient::new(server.url("/input"), server.url("/output"));
    let err = client.deliver("wrong", &[1]).unwrap_err();

    assert!(matches!(err, ClientError::Http(401, _)), "got {:?}", err);
}

#[test]
fn empty_result_list_posts_empty_array() {
    let server = MockServer::start();
    let output = server.mock(|when, then| {
        when.method(POST)
            .path("/output")
            .json_body(serde_json::json!([]));
        then.status(200);
    });

    let client = RelayClient::new(server.url("/input"), server.url("/output"));
    client.deliver("abc", &[]).unwrap();

    output.assert();
}
