// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Process-scoped object URLs for in-memory file contents.
//!
//! Each URL points at a private copy of the bytes inside a temp directory that
//! is removed when the registry is dropped, so URLs never outlive the run and
//! must not be persisted.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use tempfile::TempDir;
use url::Url;
use uuid::Uuid;

use crate::utils::sanitize_component;

/// Owner of every object URL created during this run.
#[derive(Debug)]
pub struct ObjectUrls {
    dir: TempDir,
}

impl ObjectUrls {
    /// Create a registry backed by a fresh temp directory.
    pub fn new() -> Result<Self> {
        let dir = tempfile::Builder::new()
            .prefix("resume-gate-")
            .tempdir()
            .context("Failed to create object URL directory")?;
        Ok(Self { dir })
    }

    /// Materialize `bytes` and return a `file://` URL for them.
    ///
    /// The file name keeps the (sanitized) original name so external viewers
    /// pick the right application; a UUID prefix keeps URLs unique.
    pub fn create(&self, name: &str, bytes: &[u8]) -> Result<Url> {
        let safe = sanitize_component(name);
        let path = self.dir.path().join(format!("{}-{safe}", Uuid::new_v4()));
        fs::write(&path, bytes)
            .with_context(|| format!("Failed to write object URL contents: {:?}", path))?;
        Url::from_file_path(&path).map_err(|_| anyhow!("Not an absolute path: {:?}", path))
    }

    /// Drop the contents behind a URL created by this registry.
    ///
    /// Unknown or foreign URLs are ignored.
    pub fn revoke(&self, url: &Url) {
        let Some(path) = self.path_of(url) else {
            return;
        };
        if let Err(err) = fs::remove_file(&path) {
            log::debug!("object URL {url} already gone: {err}");
        }
    }

    fn path_of(&self, url: &Url) -> Option<PathBuf> {
        let path = url.to_file_path().ok()?;
        path.starts_with(self.dir.path()).then_some(path)
    }
}
