// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Registration, login and session identity tests.

use axum::http::{Method, StatusCode};
use serde_json::json;

mod common;
use common::{register, send};

#[tokio::test]
async fn test_duplicate_email_in_any_casing_conflicts() {
    let (app, _state) = common::create_test_app();
    let (token, _) = register(&app, "Ari", "ari@x.com").await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/auth/register",
        None,
        Some(json!({ "name": "Impostor", "email": "ARI@X.Com", "password": "other" })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "Email already registered");

    // The first account's profile exists and is empty apart from the name.
    let (status, body) = send(&app, Method::GET, "/api/profile", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["profile"]["name"], "Ari");
    assert_eq!(body["profile"]["location"], "");
    assert_eq!(body["profile"]["bio"], "");
}

#[tokio::test]
async fn test_register_never_returns_the_hash() {
    let (app, _state) = common::create_test_app();

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/auth/register",
        None,
        Some(json!({ "name": "Ari", "email": "ari@x.com", "password": "pw123" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["token"].as_str().is_some_and(|t| !t.is_empty()));
    assert_eq!(body["user"]["email"], "ari@x.com");
    assert!(body["user"].get("passwordHash").is_none());
    assert!(!body.to_string().contains("pw123"));
}

#[tokio::test]
async fn test_register_requires_all_fields() {
    let (app, _state) = common::create_test_app();

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/auth/register",
        None,
        Some(json!({ "email": "ari@x.com" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Missing or invalid fields: name, password");
}

#[tokio::test]
async fn test_login_failures_look_identical() {
    let (app, _state) = common::create_test_app();
    register(&app, "Ari", "ari@x.com").await;

    let (wrong_status, wrong_body) = send(
        &app,
        Method::POST,
        "/api/auth/login",
        None,
        Some(json!({ "email": "ari@x.com", "password": "nope" })),
    )
    .await;
    let (unknown_status, unknown_body) = send(
        &app,
        Method::POST,
        "/api/auth/login",
        None,
        Some(json!({ "email": "nobody@x.com", "password": "pw123" })),
    )
    .await;

    assert_eq!(wrong_status, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_body, unknown_body);
}

#[tokio::test]
async fn test_login_token_resolves_to_same_identity() {
    let (app, _state) = common::create_test_app();
    let (_, user_id) = register(&app, "Ari", "ari@x.com").await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/auth/login",
        None,
        Some(json!({ "email": "Ari@X.com", "password": "pw123" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let token = body["token"].as_str().unwrap().to_string();

    let (status, body) = send(&app, Method::GET, "/api/auth/me", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["user"],
        json!({ "id": user_id, "name": "Ari", "email": "ari@x.com" })
    );
}

#[tokio::test]
async fn test_me_for_vanished_user_is_not_found() {
    let (app, state) = common::create_test_app();
    let token = common::create_test_jwt("ghost", &state.config.jwt_signing_key, 3600);

    let (status, body) = send(&app, Method::GET, "/api/auth/me", Some(&token), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "User not found");
}

#[tokio::test]
async fn test_blank_name_is_rejected() {
    let (app, _state) = common::create_test_app();

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/auth/register",
        None,
        Some(json!({ "name": "   ", "email": "a@x.com", "password": "pw" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Missing or invalid fields: name");
}

#[tokio::test]
async fn test_padded_email_is_accepted_and_trimmed() {
    let (app, _state) = common::create_test_app();

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/auth/register",
        None,
        Some(json!({ "name": " Ari ", "email": " Ari@X.com ", "password": "pw123" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user"]["name"], "Ari");
    assert_eq!(body["user"]["email"], "ari@x.com");
}
