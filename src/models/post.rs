// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Activity posts and the comments attached to posts and events.

use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;
use validator::Validate;

use crate::time_utils::now_rfc3339;

/// An activity post.
///
/// `author` and the entries of `rsvps` are display-name snapshots taken when
/// the action happened; they do not follow later renames.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Post {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub activity: String,
    #[serde(default)]
    pub when: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub spots: Option<u32>,
    #[serde(default)]
    pub details: String,
    pub author_id: String,
    pub author: String,
    #[serde(default)]
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub likes: u64,
    #[serde(default)]
    pub rsvps: Vec<String>,
    /// Most recent first
    #[serde(default)]
    pub comments: Vec<Comment>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Comment {
    pub id: String,
    pub author: String,
    pub text: String,
    pub created_at: String,
}

impl Comment {
    pub fn new(author: &str, text: String) -> Self {
        Self {
            id: super::new_id(),
            author: author.to_string(),
            text,
            created_at: now_rfc3339(),
        }
    }
}

/// Add `name` to an RSVP list unless it is already there.
pub(crate) fn add_rsvp(rsvps: &mut Vec<String>, name: &str) {
    if !rsvps.iter().any(|existing| existing == name) {
        rsvps.push(name.to_string());
    }
}

/// New post payload.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct PostDraft {
    #[validate(required, length(min = 1))]
    pub title: Option<String>,
    pub activity: Option<String>,
    pub when: Option<String>,
    pub location: Option<String>,
    pub spots: Option<u32>,
    pub details: Option<String>,
}

/// Author edit of a post.
///
/// Only these fields are editable; anything else in the request body
/// (`authorId`, `likes`, `rsvps`, ...) is ignored during deserialization.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct PostUpdate {
    /// May be omitted, but a post cannot be retitled to an empty string.
    #[validate(length(min = 1))]
    pub title: Option<String>,
    pub activity: Option<String>,
    pub when: Option<String>,
    pub location: Option<String>,
    pub spots: Option<u32>,
    pub details: Option<String>,
}

impl PostUpdate {
    pub fn apply(self, post: &mut Post) {
        if let Some(title) = self.title {
            post.title = title;
        }
        if let Some(activity) = self.activity {
            post.activity = activity;
        }
        if let Some(when) = self.when {
            post.when = when;
        }
        if let Some(location) = self.location {
            post.location = location;
        }
        if let Some(spots) = self.spots {
            post.spots = Some(spots);
        }
        if let Some(details) = self.details {
            post.details = details;
        }
    }
}

/// Comment payload shared by posts and group events.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CommentDraft {
    /// Must be present; an empty string is accepted as-is.
    #[validate(required)]
    pub text: Option<String>,
}
