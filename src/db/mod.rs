// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Database layer (single JSON document).

pub mod document;
pub mod store;

pub use document::Document;
pub use store::{DocumentStore, StoreError};
