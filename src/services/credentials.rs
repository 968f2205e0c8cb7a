// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Account registration and login.
//!
//! Passwords are hashed with Argon2id on the blocking pool. Login against an
//! unknown email still verifies against a fixed dummy hash so the response
//! time does not reveal whether the account exists.

use argon2::password_hash::{PasswordHash, SaltString};
use argon2::{Algorithm, Argon2, PasswordHasher, PasswordVerifier, Version};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;
use validator::Validate;

use crate::db::DocumentStore;
use crate::error::{AppError, Result};
use crate::models::{new_id, Profile, PublicUser, User};
use crate::services::TokenService;

/// Registration payload.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(required, length(min = 1))]
    pub name: Option<String>,
    #[validate(required, email)]
    pub email: Option<String>,
    #[validate(required, length(min = 1))]
    pub password: Option<String>,
}

impl RegisterRequest {
    /// Trim the name and email and case-fold the email, so validation sees
    /// the values that would be stored.
    fn normalized(self) -> Self {
        Self {
            name: self.name.map(|name| name.trim().to_string()),
            email: self.email.map(|email| email.trim().to_lowercase()),
            password: self.password,
        }
    }
}

/// Login payload.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(required)]
    pub email: Option<String>,
    #[validate(required)]
    pub password: Option<String>,
}

/// Token plus sanitized user, returned by register and login.
#[derive(Debug, Clone, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct AuthSession {
    pub token: String,
    pub user: PublicUser,
}

#[derive(Clone)]
pub struct CredentialService {
    store: Arc<DocumentStore>,
    tokens: TokenService,
    hasher: Argon2<'static>,
    dummy_hash: String,
}

impl CredentialService {
    pub fn new(store: Arc<DocumentStore>, tokens: TokenService, params: argon2::Params) -> Self {
        let hasher = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);
        let dummy_hash = hash_with(&hasher, "outdoor-hub-timing-dummy").unwrap_or_default();

        Self {
            store,
            tokens,
            hasher,
            dummy_hash,
        }
    }

    /// Create an account and its empty profile, then start a session.
    pub async fn register(&self, request: RegisterRequest) -> Result<AuthSession> {
        let request = request.normalized();
        request.validate()?;

        let name = request.name.unwrap_or_default();
        let email = request.email.unwrap_or_default();
        let password = request.password.unwrap_or_default();

        // Cheap early rejection; re-checked under the write lock below.
        if self.email_taken(&email).await {
            return Err(email_conflict());
        }

        let hasher = self.hasher.clone();
        let password_hash = tokio::task::spawn_blocking(move || hash_with(&hasher, &password))
            .await
            .map_err(|e| AppError::Internal(e.into()))??;

        let user = User {
            id: new_id(),
            name,
            email,
            password_hash,
        };

        let user = self
            .store
            .mutate(|doc| {
                if doc.user_by_email(&user.email).is_some() {
                    return Err(email_conflict());
                }
                doc.profiles
                    .insert(user.id.clone(), Profile::for_new_user(&user.name));
                doc.users.push(user.clone());
                Ok(user)
            })
            .await?;

        tracing::info!(user_id = %user.id, "User registered");
        self.session_for(&user)
    }

    /// Check credentials and start a new session.
    pub async fn login(&self, request: LoginRequest) -> Result<AuthSession> {
        request.validate()?;

        let email = request.email.unwrap_or_default().trim().to_lowercase();
        let password = request.password.unwrap_or_default();

        let user = self
            .store
            .read(|doc| doc.user_by_email(&email).cloned())
            .await;

        let hash = user
            .as_ref()
            .map(|u| u.password_hash.clone())
            .unwrap_or_else(|| self.dummy_hash.clone());

        let hasher = self.hasher.clone();
        let verified =
            tokio::task::spawn_blocking(move || verify_with(&hasher, &password, &hash))
                .await
                .map_err(|e| AppError::Internal(e.into()))?;

        match user {
            Some(user) if verified => {
                tracing::info!(user_id = %user.id, "User logged in");
                self.session_for(&user)
            }
            _ => {
                tracing::warn!("Login rejected");
                Err(AppError::InvalidCredentials)
            }
        }
    }

    /// Sanitized user by id, if the account still exists.
    pub async fn find_user(&self, user_id: &str) -> Option<PublicUser> {
        self.store
            .read(|doc| doc.user_by_id(user_id).map(PublicUser::from))
            .await
    }

    async fn email_taken(&self, email: &str) -> bool {
        self.store
            .read(|doc| doc.user_by_email(email).is_some())
            .await
    }

    fn session_for(&self, user: &User) -> Result<AuthSession> {
        Ok(AuthSession {
            token: self.tokens.issue(user)?,
            user: PublicUser::from(user),
        })
    }
}

fn email_conflict() -> AppError {
    AppError::Conflict("Email already registered".to_string())
}

fn hash_with(hasher: &Argon2<'_>, password: &str) -> Result<String> {
    // v4 UUIDs are 122 bits from the OS RNG, plenty for a salt.
    let salt = SaltString::encode_b64(uuid::Uuid::new_v4().as_bytes())
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Salt generation failed: {e}")))?;
    hasher
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Password hashing failed: {e}")))
}

fn verify_with(hasher: &Argon2<'_>, password: &str, hash: &str) -> bool {
    PasswordHash::new(hash)
        .map(|parsed| hasher.verify_password(password.as_bytes(), &parsed).is_ok())
        .unwrap_or(false)
}
