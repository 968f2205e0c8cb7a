// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.
//!
//! Every repository holds the shared [`DocumentStore`](crate::db::DocumentStore)
//! and performs its writes through `DocumentStore::mutate`.

pub mod credentials;
pub mod groups;
pub mod integrations;
pub mod posts;
pub mod profiles;
pub mod tokens;

pub use credentials::{AuthSession, CredentialService, LoginRequest, RegisterRequest};
pub use groups::GroupRepository;
pub use integrations::IntegrationRepository;
pub use posts::PostRepository;
pub use profiles::ProfileRepository;
pub use tokens::{Claims, TokenService};
