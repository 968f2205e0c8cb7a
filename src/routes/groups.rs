// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Group, group event, and forum topic routes.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Extension, Json, Router,
};
use serde::Serialize;
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use super::posts::{CommentResponse, RsvpsResponse};
use super::ApiJson;
use crate::error::Result;
use crate::middleware::auth::AuthUser;
use crate::models::{CommentDraft, Event, EventDraft, Group, GroupDraft, Topic, TopicDraft};
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/groups", get(list_groups))
        .route("/api/groups/{id}", get(get_group))
}

pub fn protected_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/groups", post(create_group))
        .route("/api/groups/{id}/join", post(join_group))
        .route("/api/groups/{id}/events", post(add_event))
        .route(
            "/api/groups/{id}/events/{event_id}/rsvp",
            post(rsvp_event),
        )
        .route(
            "/api/groups/{id}/events/{event_id}/comments",
            post(comment_event),
        )
        .route("/api/groups/{id}/topics", post(create_topic))
}

// ─── Responses ───────────────────────────────────────────────

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct GroupsResponse {
    pub groups: Vec<Group>,
}

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct GroupResponse {
    pub group: Group,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct JoinResponse {
    pub member_count: usize,
}

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct EventResponse {
    pub event: Event,
    pub events: Vec<Event>,
}

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct TopicResponse {
    pub topic: Topic,
    pub topics: Vec<Topic>,
}

// ─── Handlers ────────────────────────────────────────────────

async fn list_groups(State(state): State<Arc<AppState>>) -> Json<GroupsResponse> {
    Json(GroupsResponse {
        groups: state.groups.list().await,
    })
}

async fn get_group(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<GroupResponse>> {
    let group = state.groups.get(&id).await?;
    Ok(Json(GroupResponse { group }))
}

async fn create_group(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    ApiJson(draft): ApiJson<GroupDraft>,
) -> Result<(StatusCode, Json<GroupResponse>)> {
    let group = state.groups.create(draft, &user).await?;
    Ok((StatusCode::CREATED, Json(GroupResponse { group })))
}

async fn join_group(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<String>,
) -> Result<Json<JoinResponse>> {
    let member_count = state.groups.join(&id, &user).await?;
    Ok(Json(JoinResponse { member_count }))
}

async fn add_event(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<String>,
    ApiJson(draft): ApiJson<EventDraft>,
) -> Result<(StatusCode, Json<EventResponse>)> {
    let (event, events) = state.groups.add_event(&id, draft, &user).await?;
    Ok((StatusCode::CREATED, Json(EventResponse { event, events })))
}

async fn rsvp_event(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Path((id, event_id)): Path<(String, String)>,
) -> Result<Json<RsvpsResponse>> {
    let rsvps = state.groups.rsvp_event(&id, &event_id, &user).await?;
    Ok(Json(RsvpsResponse { rsvps }))
}

async fn comment_event(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Path((id, event_id)): Path<(String, String)>,
    ApiJson(draft): ApiJson<CommentDraft>,
) -> Result<(StatusCode, Json<CommentResponse>)> {
    let (comment, comments) = state
        .groups
        .comment_event(&id, &event_id, draft, &user)
        .await?;
    Ok((StatusCode::CREATED, Json(CommentResponse { comment, comments })))
}

async fn create_topic(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<String>,
    ApiJson(draft): ApiJson<TopicDraft>,
) -> Result<(StatusCode, Json<TopicResponse>)> {
    let (topic, topics) = state.groups.create_topic(&id, draft, &user).await?;
    Ok((StatusCode::CREATED, Json(TopicResponse { topic, topics })))
}
