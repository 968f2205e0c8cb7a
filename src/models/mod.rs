// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Data models for the application.

pub mod community;
pub mod group;
pub mod integration;
pub mod post;
pub mod profile;
pub mod user;

pub use community::Community;
pub use group::{Event, EventDraft, Group, GroupDraft, Topic, TopicDraft, UpcomingEvent};
pub use integration::{IntegrationDraft, IntegrationRequest};
pub use post::{Comment, CommentDraft, Post, PostDraft, PostUpdate};
pub use profile::{Profile, ProfileUpdate};
pub use user::{PublicUser, User};

/// Generate a fresh record id.
pub fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Treat blank strings the same as an omitted field.
pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
