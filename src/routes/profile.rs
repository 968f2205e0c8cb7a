// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Routes for the caller's own profile.

use axum::{extract::State, routing::get, Extension, Json, Router};
use serde::Serialize;
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use super::ApiJson;
use crate::error::Result;
use crate::middleware::auth::AuthUser;
use crate::models::{Profile, ProfileUpdate, UpcomingEvent};
use crate::AppState;

pub fn protected_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/profile", get(get_profile).patch(update_profile))
        .route("/api/profile/events", get(profile_events))
}

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct ProfileResponse {
    /// `null` if the caller somehow has no profile
    pub profile: Option<Profile>,
}

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct ProfileEventsResponse {
    pub events: Vec<UpcomingEvent>,
}

async fn get_profile(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
) -> Json<ProfileResponse> {
    Json(ProfileResponse {
        profile: state.profiles.get(&user).await,
    })
}

async fn update_profile(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    ApiJson(update): ApiJson<ProfileUpdate>,
) -> Result<Json<ProfileResponse>> {
    let profile = state.profiles.update(update, &user).await?;
    Ok(Json(ProfileResponse {
        profile: Some(profile),
    }))
}

/// Events across all groups that the caller has RSVP'd to.
async fn profile_events(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
) -> Json<ProfileEventsResponse> {
    Json(ProfileEventsResponse {
        events: state.groups.upcoming_events(&user).await,
    })
}
