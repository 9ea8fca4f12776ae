//! Integration tests for the HTTP Auth Client against a mock server.

use std::sync::Arc;

use serde_json::json;
use studybuddy_core::config::settings::ApiConfig;
use studybuddy_core::route::RecordingNavigator;
use studybuddy_core::{
    AuthClient, AuthError, ClientError, Credentials, HttpAuthClient, LoginController, LoginField,
    Route, SignupProfile,
};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn can_bind_localhost() -> bool {
    std::net::TcpListener::bind("127.0.0.1:0").is_ok()
}

fn client_for(server: &MockServer) -> HttpAuthClient {
    let config = ApiConfig {
        base_url: server.uri(),
        ..ApiConfig::default()
    };
    HttpAuthClient::new(&config).unwrap()
}

fn profile() -> SignupProfile {
    SignupProfile {
        first_name: "Jane".to_string(),
        last_name: "Doe".to_string(),
        username: "janedoe".to_string(),
        password: "secret".to_string(),
        industry: "Industry 1".to_string(),
        user_role: "Role 3".to_string(),
        bio: Some("Hi".to_string()),
    }
}

#[tokio::test]
async fn login_posts_json_and_returns_session() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/login"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({ "username": "testuser", "password": "password123" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "token": "t" })))
        .expect(1)
        .mount(&server)
        .await;

    let session = client_for(&server)
        .login(&Credentials::new("testuser", "password123"))
        .await
        .unwrap();

    assert_eq!(session.payload()["token"], "t");
}

#[tokio::test]
async fn signup_posts_profile() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/signup"))
        .and(body_json(json!({
            "first_name": "Jane",
            "last_name": "Doe",
            "username": "janedoe",
            "password": "secret",
            "industry": "Industry 1",
            "user_role": "Role 3",
            "bio": "Hi",
        })))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    let session = client_for(&server).signup(&profile()).await.unwrap();

    assert!(session.payload().is_null());
}

#[tokio::test]
async fn non_success_status_is_an_error() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/login"))
        .respond_with(ResponseTemplate::new(401).set_body_string("user not found"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .login(&Credentials::new("testuser", "wrong"))
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::Status(401)));
}

#[tokio::test]
async fn malformed_body_is_a_decode_error() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>ok</html>"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .login(&Credentials::new("testuser", "pw"))
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::Decode(_)));
}

#[tokio::test]
async fn unreachable_server_is_a_network_error() {
    let port = match std::net::TcpListener::bind("127.0.0.1:0") {
        Ok(listener) => listener.local_addr().unwrap().port(),
        Err(_) => {
            eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
            return;
        }
    };
    let config = ApiConfig {
        base_url: format!("http://127.0.0.1:{port}"),
        timeout_secs: 2,
        ..ApiConfig::default()
    };

    let err = HttpAuthClient::new(&config)
        .unwrap()
        .login(&Credentials::new("testuser", "pw"))
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::Network(_)));
}

#[tokio::test]
async fn controller_hides_server_detail_and_locks_out() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/login"))
        .respond_with(ResponseTemplate::new(401).set_body_string("no such user: testuser"))
        .expect(5)
        .mount(&server)
        .await;

    let mut ctrl = LoginController::new(Arc::new(client_for(&server)), RecordingNavigator::new());
    for _ in 0..5 {
        ctrl.update_field(LoginField::Username, "testuser");
        ctrl.update_field(LoginField::Password, "wrong");
        assert_eq!(ctrl.submit().await, Err(AuthError::InvalidCredentials));
        assert!(!ctrl.state().error().unwrap_or_default().contains("no such user"));
    }

    ctrl.update_field(LoginField::Password, "right");
    assert_eq!(ctrl.submit().await, Err(AuthError::RateLimited));
    assert!(ctrl.navigator().visited().is_empty());
}

#[tokio::test]
async fn controller_navigates_on_success() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/login"))
        .and(body_json(json!({ "username": "testuser", "password": "password123" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let mut ctrl = LoginController::new(Arc::new(client_for(&server)), RecordingNavigator::new());
    ctrl.update_field(LoginField::Username, "  testuser  ");
    ctrl.update_field(LoginField::Password, "password123");

    assert!(ctrl.submit().await.is_ok());
    assert_eq!(ctrl.navigator().current(), Some(&Route::Dashboard));
}
