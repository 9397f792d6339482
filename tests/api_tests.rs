use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use shop_auth_service::app_router;
use shop_auth_service::app_state::AppState;
use shop_auth_service::domain::{Email, Password, TokenKind, UserRole};
use shop_auth_service::services::{HashmapSessionStore, HashmapUserStore};
use shop_auth_service::utils::Config;

/// Prepare environment variables required by Config::default()
fn set_env_config() {
    std::env::set_var("APP_ADDR", "127.0.0.1:0");
    std::env::set_var("DATABASE_URL", "postgres://localhost/shop_test");
    std::env::set_var("ACCESS_SECRET", "api-test-secret-access-0123456789abcdef");
    std::env::set_var("REFRESH_SECRET", "api-test-secret-refresh-0123456789abcdef");
    std::env::set_var("ADMIN_SECRET", "api-test-secret-admin-0123456789abcdef");
    std::env::set_var("API_KEY_SECRET", "api-test-secret-apikey-0123456789abcdef");
    std::env::set_var("ACCESS_TTL_SECONDS", "60");
    std::env::set_var("REFRESH_TTL_SECONDS", "300");
}

fn build_app() -> (Router, AppState) {
    set_env_config();
    let config = Arc::new(Config::default().expect("failed to build test config"));
    let user_store = Arc::new(HashmapUserStore::default());
    let session_store = Arc::new(HashmapSessionStore::default());
    let state = AppState::new(config, user_store, session_store);
    (app_router(state.clone()), state)
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get_request(uri: &str, bearer: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(token) = bearer {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(Body::empty()).unwrap()
}

async fn response_json(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Register via HTTP and sign in, returning (user_id, token pair json).
async fn signup_and_signin(app: &Router, email: &str, username: &str) -> (String, Value) {
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/v1/users/signup",
            json!({ "email": email, "username": username, "password": "p" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/v1/users/signin",
            json!({ "email_or_username": email, "password": "p" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let passport = response_json(response).await;
    let user_id = passport["user"]["id"].as_str().unwrap().to_string();
    (user_id, passport["token"].clone())
}

#[tokio::test]
async fn health_check_responds() {
    let (app, _) = build_app();
    let response = app.oneshot(get_request("/api/v1/", None)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(body["name"], "shop-auth-service");
}

#[tokio::test]
async fn signup_response_has_null_token_and_customer_role() {
    let (app, _) = build_app();
    let response = app
        .oneshot(json_request(
            "POST",
            "/api/v1/users/signup",
            json!({ "email": "a@x.com", "username": "a", "password": "p" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let passport = response_json(response).await;
    assert_eq!(passport["user"]["role_id"], 1);
    assert!(passport["token"].is_null());
}

#[tokio::test]
async fn own_profile_is_readable_but_foreign_profile_is_forbidden() {
    let (app, _) = build_app();
    let (user_id, token) = signup_and_signin(&app, "a@x.com", "a").await;
    let (other_id, _) = signup_and_signin(&app, "b@x.com", "b").await;
    let access = token["access_token"].as_str().unwrap();

    let response = app
        .clone()
        .oneshot(get_request(&format!("/api/v1/users/{user_id}"), Some(access)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let profile = response_json(response).await;
    assert_eq!(profile["email"], "a@x.com");
    assert!(profile.get("password_hash").is_none());

    // Substituting another user's id is denied regardless of role.
    let response = app
        .clone()
        .oneshot(get_request(&format!("/api/v1/users/{other_id}"), Some(access)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn profile_requires_a_live_session() {
    let (app, _) = build_app();
    let (user_id, token) = signup_and_signin(&app, "a@x.com", "a").await;
    let access = token["access_token"].as_str().unwrap();
    let session_id = token["id"].as_str().unwrap();

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/v1/users/signout",
            json!({ "session_id": session_id }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    // The token still verifies cryptographically, but its session is gone.
    let response = app
        .clone()
        .oneshot(get_request(&format!("/api/v1/users/{user_id}"), Some(access)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn missing_or_garbage_bearer_is_unauthorized() {
    let (app, _) = build_app();
    let (user_id, _) = signup_and_signin(&app, "a@x.com", "a").await;

    let response = app
        .clone()
        .oneshot(get_request(&format!("/api/v1/users/{user_id}"), None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = app
        .clone()
        .oneshot(get_request(&format!("/api/v1/users/{user_id}"), Some("garbage")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn admin_token_route_is_role_gated() {
    let (app, state) = build_app();

    // Customers hold role 1; the route requires role 2.
    let (_, token) = signup_and_signin(&app, "a@x.com", "a").await;
    let access = token["access_token"].as_str().unwrap();
    let response = app
        .clone()
        .oneshot(get_request("/api/v1/users/admin-token", Some(access)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    // Seed an admin directly through the service, then sign in over HTTP.
    state
        .passport_service
        .sign_up(
            Email::parse("root@x.com".to_string()).unwrap(),
            "root".to_string(),
            Password::parse("p".to_string()).unwrap(),
            UserRole::Admin,
        )
        .await
        .expect("admin signup");
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/v1/users/signin",
            json!({ "email_or_username": "root", "password": "p" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let passport = response_json(response).await;
    let admin_access = passport["token"]["access_token"].as_str().unwrap().to_string();

    let response = app
        .clone()
        .oneshot(get_request("/api/v1/users/admin-token", Some(&admin_access)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert!(body["token"].as_str().is_some());
}

#[tokio::test]
async fn admin_signup_requires_api_key() {
    let (app, state) = build_app();
    let body = json!({ "email": "root@x.com", "username": "root", "password": "p" });

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/v1/users/signup-admin",
            body.clone(),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let api_key = state.token_codec.sign_system(TokenKind::ApiKey).unwrap();
    let request = Request::builder()
        .method("POST")
        .uri("/api/v1/users/signup-admin")
        .header(header::CONTENT_TYPE, "application/json")
        .header("x-api-key", api_key)
        .body(Body::from(body.to_string()))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let passport = response_json(response).await;
    assert_eq!(passport["user"]["role_id"], 2);
}

#[tokio::test]
async fn refresh_over_http_rotates_the_pair() {
    let (app, _) = build_app();
    let (_, token) = signup_and_signin(&app, "a@x.com", "a").await;
    let refresh = token["refresh_token"].as_str().unwrap();

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/v1/users/refresh",
            json!({ "refresh_token": refresh }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let rotated = response_json(response).await;
    assert_ne!(rotated["token"]["refresh_token"], token["refresh_token"]);

    // Replaying the consumed token is rejected.
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/v1/users/refresh",
            json!({ "refresh_token": refresh }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn duplicate_signup_conflicts_and_bad_email_is_rejected() {
    let (app, _) = build_app();
    let body = json!({ "email": "a@x.com", "username": "a", "password": "p" });

    let response = app
        .clone()
        .oneshot(json_request("POST", "/api/v1/users/signup", body.clone()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = app
        .clone()
        .oneshot(json_request("POST", "/api/v1/users/signup", body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/v1/users/signup",
            json!({ "email": "not-an-email", "username": "x", "password": "p" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
