//! Contract tests for AuthClient against a wiremock stand-in for the
//! hosted auth API.

use backend_client::{AuthClient, BackendConfig, SignUp};
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(server: &MockServer) -> AuthClient {
    let config = BackendConfig::new(&server.uri(), "anon-key").unwrap();
    AuthClient::new(config).unwrap()
}

fn token_body() -> serde_json::Value {
    serde_json::json!({
        "access_token": "jwt-access",
        "token_type": "bearer",
        "expires_in": 3600,
        "expires_at": 1_900_000_000,
        "refresh_token": "refresh-1",
        "user": {
            "id": "33333333-3333-4333-8333-333333333333",
            "email": "ops@bytwave.example",
            "role": "authenticated"
        }
    })
}

#[tokio::test]
async fn password_sign_in_returns_session() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/v1/token"))
        .and(query_param("grant_type", "password"))
        .and(header("apikey", "anon-key"))
        .and(body_json(serde_json::json!({
            "email": "ops@bytwave.example",
            "password": "hunter22"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(token_body()))
        .expect(1)
        .mount(&server)
        .await;

    let session = test_client(&server)
        .sign_in_with_password("ops@bytwave.example", "hunter22")
        .await
        .unwrap();
    assert_eq!(session.access_token, "jwt-access");
    assert_eq!(session.expires_at, Some(1_900_000_000));
    assert_eq!(session.user.email.as_deref(), Some("ops@bytwave.example"));
}

#[tokio::test]
async fn bad_credentials_carry_description() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/v1/token"))
        .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
            "error": "invalid_grant",
            "error_description": "Invalid login credentials"
        })))
        .mount(&server)
        .await;

    let err = test_client(&server)
        .sign_in_with_password("ops@bytwave.example", "wrong")
        .await
        .unwrap_err();
    assert_eq!(err.user_message(), Some("Invalid login credentials"));
}

#[tokio::test]
async fn refresh_uses_refresh_grant() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/v1/token"))
        .and(query_param("grant_type", "refresh_token"))
        .and(body_json(serde_json::json!({ "refresh_token": "refresh-1" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(token_body()))
        .expect(1)
        .mount(&server)
        .await;

    let session = test_client(&server).refresh("refresh-1").await.unwrap();
    assert_eq!(session.refresh_token, "refresh-1");
}

#[tokio::test]
async fn sign_up_without_auto_confirm_needs_confirmation() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/v1/signup"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": "44444444-4444-4444-8444-444444444444",
            "email": "new@bytwave.example",
            "confirmation_sent_at": "2025-04-01T12:00:00Z"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let outcome = test_client(&server)
        .sign_up("new@bytwave.example", "s3cret!!")
        .await
        .unwrap();
    match outcome {
        SignUp::ConfirmationRequired(user) => {
            assert_eq!(user.email.as_deref(), Some("new@bytwave.example"))
        }
        other => panic!("expected confirmation, got {other:?}"),
    }
}

#[tokio::test]
async fn sign_up_with_auto_confirm_signs_in() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/v1/signup"))
        .respond_with(ResponseTemplate::new(200).set_body_json(token_body()))
        .mount(&server)
        .await;

    let outcome = test_client(&server)
        .sign_up("ops@bytwave.example", "s3cret!!")
        .await
        .unwrap();
    assert!(matches!(outcome, SignUp::SignedIn(_)));
}

#[tokio::test]
async fn sign_out_sends_user_token() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/v1/logout"))
        .and(header("authorization", "Bearer jwt-access"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    test_client(&server).sign_out("jwt-access").await.unwrap();
}

#[tokio::test]
async fn current_user_lookup() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/auth/v1/user"))
        .and(header("authorization", "Bearer jwt-access"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": "33333333-3333-4333-8333-333333333333",
            "email": "ops@bytwave.example"
        })))
        .mount(&server)
        .await;

    let user = test_client(&server).user("jwt-access").await.unwrap();
    assert_eq!(user.email.as_deref(), Some("ops@bytwave.example"));
}
