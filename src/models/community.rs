// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Static community listings seeded into a fresh document.

use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Community {
    pub id: String,
    pub name: String,
    pub activity: String,
    pub members: u32,
}

impl Community {
    fn new(id: &str, name: &str, activity: &str, members: u32) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            activity: activity.to_string(),
            members,
        }
    }

    pub fn seed() -> Vec<Community> {
        vec![
            Community::new("denver", "Denver, CO", "Trail running + climbing", 420),
            Community::new("portland", "Portland, OR", "Hikes + paddling", 310),
            Community::new("austin", "Austin, TX", "Cycling + swimming", 275),
        ]
    }
}
