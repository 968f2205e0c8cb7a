// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Profile API tests.

use axum::http::{Method, StatusCode};
use serde_json::json;

mod common;
use common::{register, send};

#[tokio::test]
async fn test_patch_merges_only_supplied_fields() {
    let (app, _state) = common::create_test_app();
    let (ari, _) = register(&app, "Ari", "ari@x.com").await;

    let (status, _) = send(
        &app,
        Method::PATCH,
        "/api/profile",
        Some(&ari),
        Some(json!({ "location": "Boulder", "bio": "Early riser" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(
        &app,
        Method::PATCH,
        "/api/profile",
        Some(&ari),
        Some(json!({ "activities": "Climbing, Trail running" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["profile"],
        json!({
            "name": "Ari",
            "location": "Boulder",
            "activities": "Climbing, Trail running",
            "availability": "",
            "bio": "Early riser"
        })
    );

    let (_, fetched) = send(&app, Method::GET, "/api/profile", Some(&ari), None).await;
    assert_eq!(fetched["profile"], body["profile"]);
}

#[tokio::test]
async fn test_profiles_are_private_to_their_owner() {
    let (app, _state) = common::create_test_app();
    let (ari, _) = register(&app, "Ari", "ari@x.com").await;
    let (bo, _) = register(&app, "Bo", "bo@x.com").await;

    send(
        &app,
        Method::PATCH,
        "/api/profile",
        Some(&ari),
        Some(json!({ "bio": "Ari's bio" })),
    )
    .await;

    let (_, body) = send(&app, Method::GET, "/api/profile", Some(&bo), None).await;
    assert_eq!(body["profile"]["name"], "Bo");
    assert_eq!(body["profile"]["bio"], "");
}

#[tokio::test]
async fn test_missing_profile_reads_as_null() {
    let (app, state) = common::create_test_app();
    let token = common::create_test_jwt("no-profile", &state.config.jwt_signing_key, 3600);

    let (status, body) = send(&app, Method::GET, "/api/profile", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["profile"], serde_json::Value::Null);
}

#[tokio::test]
async fn test_profile_events_empty_without_rsvps() {
    let (app, _state) = common::create_test_app();
    let (ari, _) = register(&app, "Ari", "ari@x.com").await;

    let (status, body) = send(&app, Method::GET, "/api/profile/events", Some(&ari), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["events"], json!([]));
}
