// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Content digest helpers.

use sha2::{Digest, Sha256};

/// SHA-256 of `bytes` as a lowercase hex string.
///
/// # Examples
///
/// ```rust,ignore
/// let digest = resume_gate::utils::hash_bytes(b"abc");
/// assert_eq!(digest.len(), 64);
/// ```
pub fn hash_bytes(bytes: &[u8]) -> String {
    format!("{:x}", Sha256::digest(bytes))
}
