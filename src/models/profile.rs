// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Per-user profile, keyed by user id in the document.

use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Profile {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub location: String,
    /// Free-text, comma separated activity tags
    #[serde(default)]
    pub activities: String,
    #[serde(default)]
    pub availability: String,
    #[serde(default)]
    pub bio: String,
}

impl Profile {
    /// Empty profile created alongside a new account.
    pub fn for_new_user(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Self::default()
        }
    }
}

/// Partial profile update. Omitted fields are left untouched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub location: Option<String>,
    pub activities: Option<String>,
    pub availability: Option<String>,
    pub bio: Option<String>,
}

impl ProfileUpdate {
    pub fn apply(self, profile: &mut Profile) {
        if let Some(name) = self.name {
            profile.name = name;
        }
        if let Some(location) = self.location {
            profile.location = location;
        }
        if let Some(activities) = self.activities {
            profile.activities = activities;
        }
        if let Some(availability) = self.availability {
            profile.availability = availability;
        }
        if let Some(bio) = self.bio {
            profile.bio = bio;
        }
    }
}
