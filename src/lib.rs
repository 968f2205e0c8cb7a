// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Outdoor Hub: accounts, activity posts and interest groups.
//!
//! This crate provides the backend API behind the Outdoor Hub front-end:
//! credential management, bearer-token sessions, and the repositories for
//! posts, groups, profiles and integration requests, all persisted in a
//! single JSON document.

pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod time_utils;

use config::Config;
use db::DocumentStore;
use services::{
    CredentialService, GroupRepository, IntegrationRepository, PostRepository, ProfileRepository,
    TokenService,
};
use std::sync::Arc;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub store: Arc<DocumentStore>,
    pub tokens: TokenService,
    pub credentials: CredentialService,
    pub posts: PostRepository,
    pub groups: GroupRepository,
    pub profiles: ProfileRepository,
    pub integrations: IntegrationRepository,
}

impl AppState {
    /// Wire every service onto one opened document store.
    pub fn new(config: Config, store: DocumentStore) -> Self {
        let store = Arc::new(store);
        let tokens = TokenService::new(&config.jwt_signing_key, config.token_ttl_days);
        let credentials = CredentialService::new(
            store.clone(),
            tokens.clone(),
            config.password_hash_params.clone(),
        );

        Self {
            posts: PostRepository::new(store.clone()),
            groups: GroupRepository::new(store.clone()),
            profiles: ProfileRepository::new(store.clone()),
            integrations: IntegrationRepository::new(store.clone()),
            config,
            store,
            tokens,
            credentials,
        }
    }
}
