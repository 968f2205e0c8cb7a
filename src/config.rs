// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application configuration loaded from environment variables.
//!
//! A `.env` file in the working directory is honoured for local development.

use std::env;
use std::path::PathBuf;

/// Signing secret used when `JWT_SIGNING_KEY` is not set.
pub const DEV_SIGNING_KEY: &str = "dev-secret-change-me";

const DEFAULT_PORT: u16 = 8000;
const DEFAULT_DATA_PATH: &str = "data/db.json";
const DEFAULT_FRONTEND_URL: &str = "http://localhost:5173";
const DEFAULT_TOKEN_TTL_DAYS: i64 = 7;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server port
    pub port: u16,
    /// Frontend origin allowed by CORS
    pub frontend_url: String,
    /// Location of the persisted document
    pub data_path: PathBuf,
    /// JWT signing key for session tokens (raw bytes)
    pub jwt_signing_key: Vec<u8>,
    /// Session token lifetime
    pub token_ttl_days: i64,
    /// Argon2 cost parameters for password hashes
    pub password_hash_params: argon2::Params,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let jwt_signing_key = match env::var("JWT_SIGNING_KEY") {
            Ok(key) if key.trim().is_empty() => {
                return Err(ConfigError::Invalid(
                    "JWT_SIGNING_KEY",
                    "must not be empty".to_string(),
                ))
            }
            Ok(key) => key.into_bytes(),
            Err(_) => {
                tracing::warn!("JWT_SIGNING_KEY not set, using the development secret");
                DEV_SIGNING_KEY.as_bytes().to_vec()
            }
        };

        let token_ttl_days = match env::var("TOKEN_TTL_DAYS") {
            Ok(raw) => raw
                .parse::<i64>()
                .ok()
                .filter(|days| *days > 0)
                .ok_or_else(|| {
                    ConfigError::Invalid(
                        "TOKEN_TTL_DAYS",
                        format!("expected positive days, got {raw:?}"),
                    )
                })?,
            Err(_) => DEFAULT_TOKEN_TTL_DAYS,
        };

        Ok(Self {
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_PORT),
            frontend_url: env::var("FRONTEND_URL")
                .unwrap_or_else(|_| DEFAULT_FRONTEND_URL.to_string()),
            data_path: env::var("DATA_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_DATA_PATH)),
            jwt_signing_key,
            token_ttl_days,
            password_hash_params: password_hash_params_from_env()?,
        })
    }

    /// Deterministic configuration for tests.
    ///
    /// Uses the cheapest Argon2 parameters so suites that register many
    /// accounts stay fast.
    pub fn test_default() -> Self {
        Self {
            port: 8000,
            frontend_url: DEFAULT_FRONTEND_URL.to_string(),
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            jwt_signing_key: b"test_jwt_key_32_bytes_minimum!!".to_vec(),
            token_ttl_days: DEFAULT_TOKEN_TTL_DAYS,
            password_hash_params: argon2::Params::new(argon2::Params::MIN_M_COST, 1, 1, None)
                .unwrap_or_default(),
        }
    }
}

/// Optional overrides: `PASSWORD_HASH_MEMORY_KIB` and `PASSWORD_HASH_ITERATIONS`.
fn password_hash_params_from_env() -> Result<argon2::Params, ConfigError> {
    let memory_kib = parse_optional_u32("PASSWORD_HASH_MEMORY_KIB")?
        .unwrap_or(argon2::Params::DEFAULT_M_COST);
    let iterations = parse_optional_u32("PASSWORD_HASH_ITERATIONS")?
        .unwrap_or(argon2::Params::DEFAULT_T_COST);

    argon2::Params::new(memory_kib, iterations, argon2::Params::DEFAULT_P_COST, None)
        .map_err(|e| ConfigError::Invalid("PASSWORD_HASH_*", e.to_string()))
}

fn parse_optional_u32(name: &'static str) -> Result<Option<u32>, ConfigError> {
    match env::var(name) {
        Ok(raw) => raw
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Invalid(name, format!("expected an integer, got {raw:?}"))),
        Err(_) => Ok(None),
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}: {1}")]
    Invalid(&'static str, String),
}
