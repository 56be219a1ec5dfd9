//! Integration tests for the Utho HTTP client using wiremock
//!
//! These tests verify the client behavior against mocked endpoints: request
//! headers, the status envelope, empty bodies and non-2xx replies.

use serde_json::json;
use utho_provider::api::cloud_instance::DELETE_CONFIRMATION;
use utho_provider::api::firewall::FirewallRequest;
use utho_provider::api::{ApiError, UthoClient};
use wiremock::matchers::{bearer_token, body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> UthoClient {
    UthoClient::with_base_url("test-token", &server.uri()).expect("mock server uri is a valid url")
}

/// Test module for HTTP client integration tests
mod http_client_tests {
    use super::*;

    /// Every request carries the bearer token and JSON content headers
    #[tokio::test]
    async fn test_requests_carry_token_and_json_headers() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/firewall/42"))
            .and(bearer_token("test-token"))
            .and(header("content-type", "application/json"))
            .and(header("accept-encoding", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": "success",
                "firewalls": [{"id": "42", "name": "web", "rulecount": "3"}]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let firewall = client.get_firewall("42").await.expect("read should succeed");

        assert_eq!(firewall.id, "42");
        assert_eq!(firewall.name, "web");
        assert_eq!(firewall.rulecount, "3");
    }

    /// A non-success status surfaces the API message verbatim
    #[tokio::test]
    async fn test_envelope_failure_uses_message() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/firewall/create"))
            .and(body_json(json!({"name": "web"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": "error",
                "message": "Firewall name already exists"
            })))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let err = client
            .create_firewall(&FirewallRequest { name: "web".into() })
            .await
            .unwrap_err();

        assert!(matches!(err, ApiError::Api { .. }));
        assert_eq!(err.to_string(), "Firewall name already exists");
    }

    /// An empty body decodes as `{}` and then fails the strict status check
    #[tokio::test]
    async fn test_empty_body_fails_strict_check() {
        let server = MockServer::start().await;

        Mock::given(method("DELETE"))
            .and(path("/firewall/7/destroy"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let err = client.delete_firewall("7").await.unwrap_err();

        assert!(matches!(err, ApiError::Api { ref message } if message.is_empty()));
    }

    /// 4xx bodies are still decoded so the envelope message comes through
    #[tokio::test]
    async fn test_error_status_body_is_decoded() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/vpc/missing"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({
                "status": "error",
                "message": "vpc not found"
            })))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let err = client.get_vpc("missing").await.unwrap_err();

        assert_eq!(err.to_string(), "vpc not found");
    }

    /// Bodies that are not JSON are decode errors
    #[tokio::test]
    async fn test_non_json_body_is_decode_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/vpc/1"))
            .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let err = client.get_vpc("1").await.unwrap_err();

        assert!(matches!(err, ApiError::Decode(_)));
    }

    /// Server destruction sends the confirmation text as a DELETE body
    #[tokio::test]
    async fn test_cloud_delete_sends_confirmation() {
        let server = MockServer::start().await;

        Mock::given(method("DELETE"))
            .and(path("/cloud/42/destroy"))
            .and(body_json(json!({"confirm": DELETE_CONFIRMATION})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "success"})))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        client
            .delete_cloud_instance("42")
            .await
            .expect("delete should succeed");
    }

    /// User-supplied path values are percent-encoded
    #[tokio::test]
    async fn test_path_segments_are_encoded() {
        let server = MockServer::start().await;

        Mock::given(method("DELETE"))
            .and(path("/targetgroup/5"))
            .and(query_param("name", "web group"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "success"})))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        client
            .delete_target_group("5", "web group")
            .await
            .expect("delete should succeed");
    }

    /// Lookups without an envelope fail on anything but 200, keeping the body
    #[tokio::test]
    async fn test_get_ok_rejects_non_200() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/account/info"))
            .respond_with(ResponseTemplate::new(401).set_body_string("unauthorized"))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let err = client.get_account().await.unwrap_err();

        match &err {
            ApiError::UnexpectedStatus { what, status, body } => {
                assert_eq!(*what, "account data");
                assert_eq!(*status, 401);
                assert_eq!(body, "unauthorized");
            }
            other => panic!("expected UnexpectedStatus, got {other:?}"),
        }
        assert_eq!(
            err.to_string(),
            "unexpected http status 401 received for account data: unauthorized"
        );
    }

    /// A 201 is not good enough for a read-only lookup either
    #[tokio::test]
    async fn test_get_ok_rejects_other_2xx() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/cloud/images"))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({"images": []})))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let err = client.get_images().await.unwrap_err();

        assert!(matches!(err, ApiError::UnexpectedStatus { status: 201, .. }));
    }

    /// Base URLs with a path prefix keep it when joining
    #[tokio::test]
    async fn test_base_url_path_prefix_preserved() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v2/sqs/9"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": "success",
                "sqs": [{"id": "9", "name": "jobs"}]
            })))
            .mount(&server)
            .await;

        let client = UthoClient::with_base_url("t", &format!("{}/v2", server.uri())).unwrap();
        let sqs = client.get_sqs("9").await.expect("read should succeed");

        assert_eq!(sqs.name, "jobs");
    }

    /// A body cut short on the non-200 path is a transport error, not an
    /// empty body
    #[tokio::test]
    async fn test_get_ok_truncated_error_body_is_transport_error() {
        use tokio::io::{AsyncReadExt, AsyncWriteExt};
        use tokio::net::TcpListener;

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 4096];
            let _ = socket.read(&mut buf).await;
            let _ = socket
                .write_all(b"HTTP/1.1 500 Internal Server Error\r\nContent-Length: 100\r\n\r\nshort")
                .await;
            let _ = socket.shutdown().await;
        });

        let client = UthoClient::with_base_url("t", &format!("http://{addr}/")).unwrap();
        let err = client.get_account().await.unwrap_err();

        assert!(matches!(err, ApiError::Transport(_)));
    }
}
