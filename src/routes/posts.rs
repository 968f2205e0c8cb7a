// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Activity post routes.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, patch, post},
    Extension, Json, Router,
};
use serde::Serialize;
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use super::ApiJson;
use crate::error::Result;
use crate::middleware::auth::AuthUser;
use crate::models::{Comment, CommentDraft, Post, PostDraft, PostUpdate};
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/api/posts", get(list_posts))
}

pub fn protected_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/posts", post(create_post))
        .route("/api/posts/{id}", patch(update_post))
        .route("/api/posts/{id}/like", post(like_post))
        .route("/api/posts/{id}/rsvp", post(rsvp_post))
        .route("/api/posts/{id}/comments", post(comment_post))
}

// ─── Responses ───────────────────────────────────────────────

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct PostsResponse {
    pub posts: Vec<Post>,
}

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct PostResponse {
    pub post: Post,
}

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct LikesResponse {
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub likes: u64,
}

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct RsvpsResponse {
    pub rsvps: Vec<String>,
}

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct CommentResponse {
    pub comment: Comment,
    pub comments: Vec<Comment>,
}

// ─── Handlers ────────────────────────────────────────────────

async fn list_posts(State(state): State<Arc<AppState>>) -> Json<PostsResponse> {
    Json(PostsResponse {
        posts: state.posts.list().await,
    })
}

async fn create_post(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    ApiJson(draft): ApiJson<PostDraft>,
) -> Result<(StatusCode, Json<PostResponse>)> {
    let post = state.posts.create(draft, &user).await?;
    Ok((StatusCode::CREATED, Json(PostResponse { post })))
}

async fn update_post(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<String>,
    ApiJson(update): ApiJson<PostUpdate>,
) -> Result<Json<PostResponse>> {
    let post = state.posts.update(&id, update, &user).await?;
    Ok(Json(PostResponse { post }))
}

async fn like_post(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<String>,
) -> Result<Json<LikesResponse>> {
    let likes = state.posts.like(&id, &user).await?;
    Ok(Json(LikesResponse { likes }))
}

async fn rsvp_post(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<String>,
) -> Result<Json<RsvpsResponse>> {
    let rsvps = state.posts.rsvp(&id, &user).await?;
    Ok(Json(RsvpsResponse { rsvps }))
}

async fn comment_post(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<String>,
    ApiJson(draft): ApiJson<CommentDraft>,
) -> Result<(StatusCode, Json<CommentResponse>)> {
    let (comment, comments) = state.posts.comment(&id, draft, &user).await?;
    Ok((StatusCode::CREATED, Json(CommentResponse { comment, comments })))
}
