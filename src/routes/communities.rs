// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Static community listings.

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::models::Community;
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/api/communities", get(list_communities))
}

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct CommunitiesResponse {
    pub communities: Vec<Community>,
}

async fn list_communities(State(state): State<Arc<AppState>>) -> Json<CommunitiesResponse> {
    let communities = state.store.read(|doc| doc.communities.clone()).await;
    Json(CommunitiesResponse { communities })
}
