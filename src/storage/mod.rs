// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Key/value persistence shared by the session gate and the attachment store.
//!
//! Values are plain text. Both stateful components receive the store as an
//! `Arc<dyn KeyValueStore>` so tests can swap in [`MemoryStore`].

pub mod file_store;
pub mod memory;

use std::path::Path;
use std::sync::Arc;

use log::{info, warn};

pub use file_store::FileStore;
pub use memory::MemoryStore;

/// Key holding the logged-in user's email.
pub const SESSION_KEY: &str = "user";
/// Key holding the JSON-encoded résumé attachment record.
pub const ATTACHMENT_KEY: &str = "resumeFile";

/// Failures raised by a storage backend.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("storage file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Minimal text key/value interface.
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Remove `key`. Removing a missing key is not an error.
    fn delete(&self, key: &str) -> Result<(), StoreError>;
}

/// Open the on-disk store in `dir`, falling back to an in-memory store.
///
/// The error is returned alongside the fallback so the caller can tell the
/// user that nothing will persist this run.
pub fn open_or_memory(dir: &Path) -> (Arc<dyn KeyValueStore>, Option<StoreError>) {
    match FileStore::open_in(dir) {
        Ok(store) => {
            info!("Using storage at {}", store.path().display());
            (Arc::new(store), None)
        }
        Err(err) => {
            warn!(
                "Could not open storage in {}: {err}; nothing will persist this run",
                dir.display()
            );
            (Arc::new(MemoryStore::new()), Some(err))
        }
    }
}
