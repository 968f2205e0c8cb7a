// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Requests for third-party app integrations.

use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct IntegrationRequest {
    pub id: String,
    pub app: String,
    #[serde(default)]
    pub reason: String,
    /// Requester display name at submission time
    pub by: String,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct IntegrationDraft {
    #[validate(required, length(min = 1))]
    pub app: Option<String>,
    pub reason: Option<String>,
}
