// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! The persisted document: every collection the service owns.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::models::{Community, Group, IntegrationRequest, Post, Profile, User};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    #[serde(default)]
    pub users: Vec<User>,
    /// Keyed by user id
    #[serde(default)]
    pub profiles: BTreeMap<String, Profile>,
    /// Most recent first
    #[serde(default)]
    pub posts: Vec<Post>,
    /// Most recent first
    #[serde(default)]
    pub groups: Vec<Group>,
    #[serde(default)]
    pub communities: Vec<Community>,
    /// Most recent first
    #[serde(default)]
    pub integration_requests: Vec<IntegrationRequest>,
}

impl Document {
    /// Fresh document for a first run: seed communities, nothing else.
    pub fn seeded() -> Self {
        Self {
            communities: Community::seed(),
            ..Self::default()
        }
    }

    /// Case-insensitive lookup by email.
    pub fn user_by_email(&self, email: &str) -> Option<&User> {
        let email = email.to_lowercase();
        self.users.iter().find(|user| user.email == email)
    }

    pub fn user_by_id(&self, id: &str) -> Option<&User> {
        self.users.iter().find(|user| user.id == id)
    }
}
