//! HTTP API integration tests
//!
//! Drives the full router in-process: registration, login, message exchange,
//! malformed input, and the 404 fallback.

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
};
use crate::common::{get_json, post_json, send_request, test_app, test_app_with, test_config};
use pretty_assertions::assert_eq;
use serde_json::json;

#[tokio::test]
async fn test_home() {
    let (_, app) = test_app().await;
    let (status, body) = get_json(&app, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["message"].as_str().unwrap().contains("running"));
}

#[tokio::test]
async fn test_end_to_end_scenario() {
    let (state, app) = test_app().await;
    let alice = json!({ "email": "alice@x.com", "password": "pw1" });

    assert_ok_message!(post_json(&app, "/register", alice.clone()).await, "Registration successful!");

    assert_error_response!(
        post_json(&app, "/register", alice.clone()).await,
        StatusCode::BAD_REQUEST,
        "User already exists"
    );

    assert_error_response!(
        post_json(&app, "/login", json!({ "email": "alice@x.com", "password": "wrong" })).await,
        StatusCode::UNAUTHORIZED,
        "Invalid credentials"
    );

    let (status, body) = post_json(&app, "/login", alice).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "Login successful!", "email": "alice@x.com" }));

    let (status, body) = post_json(
        &app,
        "/messages",
        json!({ "sender": "alice", "receiver": "bob", "content": "hi" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "Sent!", "id": 1 }));

    let (_, body) = post_json(
        &app,
        "/messages",
        json!({ "sender": "bob", "receiver": "alice", "content": "yo" }),
    )
    .await;
    assert_eq!(body["id"], 2);

    let (status, body) = get_json(&app, "/messages").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(contents!(body), vec!["hi", "yo"]);
    assert_eq!(body[0]["sender"], "alice");
    assert_eq!(body[0]["receiver"], "bob");
    assert_eq!(body[1]["sender"], "bob");
    assert!(body[0]["timestamp"].is_string());

    assert_eq!(state.accounts.len().await, 1);
    assert_eq!(state.messages.len().await, 2);
}

#[tokio::test]
async fn test_login_unknown_email_matches_wrong_password() {
    let (_, app) = test_app().await;
    post_json(&app, "/register", json!({ "email": "alice@x.com", "password": "pw1" })).await;

    let unknown = post_json(&app, "/login", json!({ "email": "nobody@x.com", "password": "pw1" })).await;
    let wrong = post_json(&app, "/login", json!({ "email": "alice@x.com", "password": "nope" })).await;

    assert_eq!(unknown, wrong);
    assert_eq!(unknown.0, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_send_message_missing_data() {
    let (state, app) = test_app().await;

    assert_error_response!(
        post_json(&app, "/messages", json!({ "sender": "alice", "receiver": "bob", "content": "" })).await,
        StatusCode::BAD_REQUEST,
        "Missing data"
    );
    assert_error_response!(
        post_json(&app, "/messages", json!({ "sender": "alice", "content": "hi" })).await,
        StatusCode::BAD_REQUEST,
        "Missing data"
    );

    assert_eq!(state.messages.len().await, 0);
    let (_, body) = get_json(&app, "/messages").await;
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_malformed_bodies_are_rejected() {
    let (state, app) = test_app().await;

    for uri in ["/register", "/login", "/messages"] {
        let request = Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{ not json"))
            .unwrap();
        assert_error_response!(send_request(&app, request).await, StatusCode::BAD_REQUEST, "Missing data");
    }

    // Wrong field types
    assert_error_response!(
        post_json(&app, "/register", json!({ "email": 42, "password": ["pw"] })).await,
        StatusCode::BAD_REQUEST,
        "Missing data"
    );

    // No JSON content type
    let request = Request::builder()
        .method(Method::POST)
        .uri("/register")
        .body(Body::from(r#"{"email":"a@x.com","password":"pw"}"#))
        .unwrap();
    assert_error_response!(send_request(&app, request).await, StatusCode::BAD_REQUEST, "Missing data");

    assert_eq!(state.accounts.len().await, 0);
}

#[tokio::test]
async fn test_register_missing_fields() {
    let (_, app) = test_app().await;
    assert_error_response!(
        post_json(&app, "/register", json!({ "email": "alice@x.com" })).await,
        StatusCode::BAD_REQUEST,
        "Missing data"
    );
}

#[tokio::test]
async fn test_list_messages_filters() {
    let (_, app) = test_app().await;
    for (sender, receiver, content) in [
        ("alice", "bob", "hi"),
        ("carol", "bob", "psst"),
        ("bob", "alice", "yo"),
    ] {
        post_json(
            &app,
            "/messages",
            json!({ "sender": sender, "receiver": receiver, "content": content }),
        )
        .await;
    }

    let (_, body) = get_json(&app, "/messages?sender=carol").await;
    assert_eq!(contents!(body), vec!["psst"]);

    let (_, body) = get_json(&app, "/messages?receiver=bob").await;
    assert_eq!(contents!(body), vec!["hi", "psst"]);

    let (_, body) = get_json(&app, "/messages?sender=bob&receiver=alice").await;
    assert_eq!(contents!(body), vec!["hi", "yo"]);

    let (_, body) = get_json(&app, "/messages?sender=").await;
    assert_eq!(contents!(body).len(), 3);
}

#[tokio::test]
async fn test_unparseable_query_returns_json_error() {
    let (_, app) = test_app().await;
    let request = Request::builder()
        .method(Method::GET)
        .uri("/messages?sender=a&sender=b")
        .body(Body::empty())
        .unwrap();

    let response = tower::ServiceExt::oneshot(app.clone(), request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "application/json"
    );

    let (status, body) = get_json(&app, "/messages?sender=a&sender=b").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Invalid query", "status": 400 }));
}

#[tokio::test]
async fn test_register_rejects_password_bcrypt_would_truncate() {
    let (state, app) = test_app().await;
    let password = format!("{}REAL", "a".repeat(72));

    assert_error_response!(
        post_json(&app, "/register", json!({ "email": "alice@x.com", "password": password })).await,
        StatusCode::BAD_REQUEST,
        "Missing data"
    );
    assert_eq!(state.accounts.len().await, 0);
}

#[tokio::test]
async fn test_registered_participants_required() {
    let config = test_config();
    let config = echosignal::shared::AppConfig {
        require_registered_participants: true,
        ..config
    };
    let (state, app) = test_app_with(config).await;
    post_json(&app, "/register", json!({ "email": "alice@x.com", "password": "pw1" })).await;
    post_json(&app, "/register", json!({ "email": "bob@x.com", "password": "pw2" })).await;

    assert_error_response!(
        post_json(
            &app,
            "/messages",
            json!({ "sender": "alice@x.com", "receiver": "mallory@x.com", "content": "hi" })
        )
        .await,
        StatusCode::BAD_REQUEST,
        "Unknown participant"
    );

    let (status, _) = post_json(
        &app,
        "/messages",
        json!({ "sender": "alice@x.com", "receiver": "bob@x.com", "content": "hi" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(state.messages.len().await, 1);
}

#[tokio::test]
async fn test_unknown_participants_allowed_by_default() {
    let (_, app) = test_app().await;
    let (status, _) = post_json(
        &app,
        "/messages",
        json!({ "sender": "ghost", "receiver": "phantom", "content": "boo" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_unknown_route_returns_json_404() {
    let (_, app) = test_app().await;
    assert_error_response!(get_json(&app, "/nope").await, StatusCode::NOT_FOUND, "Not found");
}

#[tokio::test]
async fn test_cors_allows_any_origin() {
    let (_, app) = test_app().await;
    let request = Request::builder()
        .method(Method::GET)
        .uri("/messages")
        .header(header::ORIGIN, "http://example.com")
        .body(Body::empty())
        .unwrap();

    let response = tower::ServiceExt::oneshot(app, request).await.unwrap();
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "*"
    );
}
