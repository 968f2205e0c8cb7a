// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Document store: the single source of truth for every collection.
//!
//! The whole document lives in memory behind one `RwLock` and is flushed to
//! disk as a unit. Every mutation runs its load-mutate-persist cycle under
//! the write lock:
//!
//! 1. clone the current document into a working copy
//! 2. apply the caller's closure to the copy
//! 3. write the copy to a sibling temp file and rename it over the target
//! 4. publish the copy as the current document
//!
//! A closure error skips steps 3-4, and a persist error skips step 4, so the
//! in-memory document and the file only ever hold fully applied mutations.

use std::path::{Path, PathBuf};
use tokio::io::AsyncWriteExt;
use tokio::sync::RwLock;

use super::Document;

/// Storage-layer failures. Never mapped onto client errors.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to encode document: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Corrupt document at {}: {source}", path.display())]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

fn io_error(path: &Path) -> impl FnOnce(std::io::Error) -> StoreError + '_ {
    move |source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    }
}

/// Shared document store. Open once at startup and share via `Arc`.
pub struct DocumentStore {
    /// `None` for in-memory stores (tests).
    path: Option<PathBuf>,
    state: RwLock<Document>,
}

impl DocumentStore {
    /// Open the document at `path`, seeding and writing a fresh one if the
    /// file does not exist yet.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();

        let document = match tokio::fs::read(&path).await {
            Ok(bytes) => {
                let document: Document =
                    serde_json::from_slice(&bytes).map_err(|source| StoreError::Corrupt {
                        path: path.clone(),
                        source,
                    })?;
                tracing::info!(
                    path = %path.display(),
                    users = document.users.len(),
                    posts = document.posts.len(),
                    groups = document.groups.len(),
                    "Loaded document"
                );
                document
            }
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                let document = Document::seeded();
                write_atomically(&path, &document).await?;
                tracing::info!(path = %path.display(), "Initialized new document");
                document
            }
            Err(err) => return Err(io_error(&path)(err)),
        };

        Ok(Self {
            path: Some(path),
            state: RwLock::new(document),
        })
    }

    /// Seeded store that is never written to disk.
    pub fn in_memory() -> Self {
        Self {
            path: None,
            state: RwLock::new(Document::seeded()),
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Run `f` against a consistent snapshot of the document.
    pub async fn read<T>(&self, f: impl FnOnce(&Document) -> T) -> T {
        let state = self.state.read().await;
        f(&state)
    }

    /// Apply `f` and persist the result as one serialized cycle.
    pub async fn mutate<T, E, F>(&self, f: F) -> Result<T, E>
    where
        F: FnOnce(&mut Document) -> Result<T, E>,
        E: From<StoreError>,
    {
        let mut state = self.state.write().await;

        let mut working = state.clone();
        let result = f(&mut working)?;

        if let Some(path) = &self.path {
            write_atomically(path, &working).await?;
        }

        *state = working;
        Ok(result)
    }
}

/// Write `document` to a temp file next to `path`, then rename it into place.
async fn write_atomically(path: &Path, document: &Document) -> Result<(), StoreError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(io_error(parent))?;
    }

    let payload = serde_json::to_vec_pretty(document)?;
    let temp_path = path.with_extension(format!("{}.tmp", uuid::Uuid::new_v4().simple()));

    let written = async {
        let mut file = tokio::fs::File::create(&temp_path).await?;
        file.write_all(&payload).await?;
        file.sync_all().await?;
        tokio::fs::rename(&temp_path, path).await
    }
    .await;

    if let Err(err) = written {
        // The target is untouched; drop the partial temp file if it exists.
        let _ = tokio::fs::remove_file(&temp_path).await;
        return Err(io_error(path)(err));
    }

    Ok(())
}
