// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Concurrent writers against one store must not lose updates.

use axum::http::{Method, StatusCode};
use outdoor_hub::db::DocumentStore;
use serde_json::json;
use std::collections::HashSet;

mod common;
use common::{register, send};

const WRITERS: usize = 24;

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_creates_keep_every_post() {
    let (app, _state) = common::create_test_app();
    let (token, _) = register(&app, "Ari", "ari@x.com").await;

    let handles: Vec<_> = (0..WRITERS)
        .map(|i| {
            let app = app.clone();
            let token = token.clone();
            tokio::spawn(async move {
                send(
                    &app,
                    Method::POST,
                    "/api/posts",
                    Some(&token),
                    Some(json!({ "title": format!("post {i}") })),
                )
                .await
            })
        })
        .collect();

    let mut created = 0;
    for handle in handles {
        let (status, _) = handle.await.unwrap();
        if status == StatusCode::CREATED {
            created += 1;
        }
    }

    let (_, body) = send(&app, Method::GET, "/api/posts", None, None).await;
    let posts = body["posts"].as_array().unwrap();
    let ids: HashSet<&str> = posts.iter().map(|p| p["id"].as_str().unwrap()).collect();

    assert_eq!(created, WRITERS);
    assert_eq!(posts.len(), created);
    assert_eq!(ids.len(), created);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_likes_survive_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("db.json");

    let post_id = {
        let (app, _state) = common::app_with_store(DocumentStore::open(&path).await.unwrap());
        let (token, _) = register(&app, "Ari", "ari@x.com").await;
        let (_, body) = send(
            &app,
            Method::POST,
            "/api/posts",
            Some(&token),
            Some(json!({ "title": "Sunrise ride" })),
        )
        .await;
        let post_id = body["post"]["id"].as_str().unwrap().to_string();

        let handles: Vec<_> = (0..WRITERS)
            .map(|_| {
                let app = app.clone();
                let token = token.clone();
                let uri = format!("/api/posts/{post_id}/like");
                tokio::spawn(async move { send(&app, Method::POST, &uri, Some(&token), None).await })
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.await.unwrap().0, StatusCode::OK);
        }
        post_id
    };

    let (app, _state) = common::app_with_store(DocumentStore::open(&path).await.unwrap());
    let (_, body) = send(&app, Method::GET, "/api/posts", None, None).await;
    assert_eq!(body["posts"][0]["id"], post_id.as_str());
    assert_eq!(body["posts"][0]["likes"], WRITERS);

    // Accounts persist too: the same credentials log in after reopening.
    let (status, _) = send(
        &app,
        Method::POST,
        "/api/auth/login",
        None,
        Some(json!({ "email": "ari@x.com", "password": "pw123" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
}
