// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Integration request repository (append-only).

use std::sync::Arc;
use validator::Validate;

use crate::db::DocumentStore;
use crate::error::{AppError, Result};
use crate::middleware::auth::AuthUser;
use crate::models::{new_id, IntegrationDraft, IntegrationRequest};

#[derive(Clone)]
pub struct IntegrationRepository {
    store: Arc<DocumentStore>,
}

impl IntegrationRepository {
    pub fn new(store: Arc<DocumentStore>) -> Self {
        Self { store }
    }

    /// All requests, most recent first.
    pub async fn list(&self) -> Vec<IntegrationRequest> {
        self.store
            .read(|doc| doc.integration_requests.clone())
            .await
    }

    pub async fn create(
        &self,
        draft: IntegrationDraft,
        caller: &AuthUser,
    ) -> Result<IntegrationRequest> {
        draft.validate()?;

        let request = IntegrationRequest {
            id: new_id(),
            app: draft.app.unwrap_or_default(),
            reason: draft.reason.unwrap_or_default(),
            by: caller.name.clone(),
        };

        self.store
            .mutate(|doc| {
                doc.integration_requests.insert(0, request.clone());
                Ok::<_, AppError>(())
            })
            .await?;

        tracing::info!(
            request_id = %request.id,
            app = %request.app,
            user_id = %caller.user_id,
            "Integration requested"
        );
        Ok(request)
    }
}
