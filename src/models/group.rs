// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Interest groups with nested events and forum topics.

use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;
use validator::Validate;

use super::{new_id, non_blank, Comment};

/// Visibility given to events when none is supplied.
pub const DEFAULT_EVENT_VISIBILITY: &str = "Group";
/// Category given to topics when none is supplied.
pub const DEFAULT_TOPIC_CATEGORY: &str = "General";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Group {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub focus: String,
    /// Admin display names
    #[serde(default)]
    pub admins: Vec<String>,
    #[serde(default)]
    pub forum: String,
    /// Owner user id; fixed at creation
    pub created_by: String,
    /// Member user ids, owner included
    #[serde(default)]
    pub members: Vec<String>,
    /// Most recent first
    #[serde(default)]
    pub events: Vec<Event>,
    /// Most recent first
    #[serde(default)]
    pub topics: Vec<Topic>,
}

impl Group {
    pub fn is_owner(&self, user_id: &str) -> bool {
        self.created_by == user_id
    }

    pub fn is_member(&self, user_id: &str) -> bool {
        self.members.iter().any(|member| member == user_id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Event {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub visibility: String,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub rsvps: Vec<String>,
    #[serde(default)]
    pub comments: Vec<Comment>,
}

impl Event {
    /// Event seeded from the free-text `event` field of a new group.
    pub fn seeded(description: &str) -> Self {
        Self {
            id: new_id(),
            title: description.to_string(),
            time: description.to_string(),
            location: String::new(),
            visibility: DEFAULT_EVENT_VISIBILITY.to_string(),
            notes: String::new(),
            rsvps: Vec::new(),
            comments: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Topic {
    pub topic: String,
    pub category: String,
    pub message: String,
}

/// An event the caller RSVP'd to, tagged with its group's name.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct UpcomingEvent {
    #[serde(flatten)]
    pub event: Event,
    pub group_name: String,
}

/// New group payload.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct GroupDraft {
    #[validate(required, length(min = 1))]
    pub name: Option<String>,
    pub focus: Option<String>,
    /// Comma separated admin names
    pub admins: Option<String>,
    pub forum: Option<String>,
    /// Optional first event, used as both title and time
    pub event: Option<String>,
}

impl GroupDraft {
    /// Parse the admin list, falling back to `owner_name` when none is given.
    pub fn admin_names(&self, owner_name: &str) -> Vec<String> {
        let admins: Vec<String> = self
            .admins
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .collect();

        if admins.is_empty() {
            vec![owner_name.to_string()]
        } else {
            admins
        }
    }

    pub fn seed_event(&self) -> Option<Event> {
        non_blank(self.event.clone()).map(|description| Event::seeded(description.trim()))
    }
}

/// New event payload.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct EventDraft {
    #[validate(required, length(min = 1))]
    pub title: Option<String>,
    pub time: Option<String>,
    pub location: Option<String>,
    pub visibility: Option<String>,
    pub notes: Option<String>,
}

impl EventDraft {
    pub fn into_event(self) -> Event {
        Event {
            id: new_id(),
            title: self.title.unwrap_or_default(),
            time: self.time.unwrap_or_default(),
            location: self.location.unwrap_or_default(),
            visibility: non_blank(self.visibility)
                .unwrap_or_else(|| DEFAULT_EVENT_VISIBILITY.to_string()),
            notes: self.notes.unwrap_or_default(),
            rsvps: Vec::new(),
            comments: Vec::new(),
        }
    }
}

/// New forum topic payload.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct TopicDraft {
    #[validate(required, length(min = 1))]
    pub topic: Option<String>,
    pub category: Option<String>,
    #[validate(required, length(min = 1))]
    pub message: Option<String>,
}

impl TopicDraft {
    pub fn into_topic(self) -> Topic {
        Topic {
            topic: self.topic.unwrap_or_default(),
            category: non_blank(self.category)
                .unwrap_or_else(|| DEFAULT_TOPIC_CATEGORY.to_string()),
            message: self.message.unwrap_or_default(),
        }
    }
}
