// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Profile repository. Callers can only read and edit their own profile.

use std::sync::Arc;

use crate::db::DocumentStore;
use crate::error::{AppError, Result};
use crate::middleware::auth::AuthUser;
use crate::models::{Profile, ProfileUpdate};

#[derive(Clone)]
pub struct ProfileRepository {
    store: Arc<DocumentStore>,
}

impl ProfileRepository {
    pub fn new(store: Arc<DocumentStore>) -> Self {
        Self { store }
    }

    pub async fn get(&self, caller: &AuthUser) -> Option<Profile> {
        self.store
            .read(|doc| doc.profiles.get(&caller.user_id).cloned())
            .await
    }

    /// Shallow-merge the supplied fields into the caller's profile.
    pub async fn update(&self, update: ProfileUpdate, caller: &AuthUser) -> Result<Profile> {
        let profile = self
            .store
            .mutate(|doc| {
                let profile = doc.profiles.entry(caller.user_id.clone()).or_default();
                update.apply(profile);
                Ok::<_, AppError>(profile.clone())
            })
            .await?;

        tracing::info!(user_id = %caller.user_id, "Profile updated");
        Ok(profile)
    }
}
