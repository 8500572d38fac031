//! Error mapping tests for the client.

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};
use wordnik::{QueryParams, WordnikClient, WordnikError};

#[tokio::test]
async fn test_unreachable_server_is_transport_error() {
    // Reserve a port, then release it so nothing is listening.
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };

    let client = WordnikClient::with_base_url("test-key", &format!("http://127.0.0.1:{port}"))
        .unwrap();
    let err = client.word("cat", &[]).await.unwrap_err();
    assert!(matches!(err, WordnikError::Transport(_)));
}

#[tokio::test]
async fn test_malformed_body_is_decode_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/word.json/cat"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>busy</html>"))
        .mount(&mock_server)
        .await;

    let client = WordnikClient::with_base_url("test-key", &mock_server.uri()).unwrap();
    let err = client.word("cat", &[]).await.unwrap_err();
    assert!(matches!(err, WordnikError::Decode(_)));
}

#[tokio::test]
async fn test_form_request_then_execute() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/custom/thing"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = WordnikClient::with_base_url("test-key", &mock_server.uri()).unwrap();
    let request = client
        .form_request("custom/thing", &QueryParams::new(), "DELETE", None)
        .unwrap();
    assert!(request.url().query().is_none());
    client.execute_unit(request).await.unwrap();
}

#[test]
fn test_unknown_method_is_invalid_request() {
    let client = WordnikClient::new("test-key").unwrap();
    let err = client
        .form_request("word.json/cat", &QueryParams::new(), "FETCH", None)
        .unwrap_err();
    assert!(matches!(err, WordnikError::InvalidRequest(_)));
}

#[test]
fn test_api_key_with_newline_is_rejected() {
    let err = WordnikClient::new("bad\nkey").unwrap_err();
    assert!(matches!(err, WordnikError::InvalidArgument(_)));
}

#[test]
fn test_base_url_must_parse() {
    let err = WordnikClient::with_base_url("test-key", "not a url").unwrap_err();
    assert!(matches!(err, WordnikError::InvalidRequest(_)));
}
