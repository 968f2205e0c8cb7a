// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Integration request routes.

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Extension, Json, Router,
};
use serde::Serialize;
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use super::ApiJson;
use crate::error::Result;
use crate::middleware::auth::AuthUser;
use crate::models::{IntegrationDraft, IntegrationRequest};
use crate::AppState;

const REQUESTS_PATH: &str = "/api/integrations/requests";

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route(REQUESTS_PATH, get(list_requests))
}

pub fn protected_routes() -> Router<Arc<AppState>> {
    Router::new().route(REQUESTS_PATH, post(create_request))
}

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct RequestsResponse {
    pub requests: Vec<IntegrationRequest>,
}

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct RequestResponse {
    pub request: IntegrationRequest,
}

async fn list_requests(State(state): State<Arc<AppState>>) -> Json<RequestsResponse> {
    Json(RequestsResponse {
        requests: state.integrations.list().await,
    })
}

async fn create_request(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    ApiJson(draft): ApiJson<IntegrationDraft>,
) -> Result<(StatusCode, Json<RequestResponse>)> {
    let request = state.integrations.create(draft, &user).await?;
    Ok((StatusCode::CREATED, Json(RequestResponse { request })))
}
