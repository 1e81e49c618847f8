// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Résumé attachment domain types (UI-agnostic).

use serde::{Deserialize, Serialize};
use url::Url;

/// MIME types accepted for the résumé upload.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResumeMime {
    Pdf,
    Docx,
}

impl ResumeMime {
    pub const PDF: &'static str = "application/pdf";
    pub const DOCX: &'static str =
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

    /// Match a declared MIME string against the allow-list (exact match).
    pub fn from_mime(mime: &str) -> Option<Self> {
        match mime {
            Self::PDF => Some(Self::Pdf),
            Self::DOCX => Some(Self::Docx),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pdf => Self::PDF,
            Self::Docx => Self::DOCX,
        }
    }

    /// Short label for display.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Pdf => "PDF",
            Self::Docx => "DOCX",
        }
    }
}

/// A file the user selected, fully read into memory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PickedFile {
    /// File name without directories.
    pub name: String,
    /// Declared MIME type.
    pub mime: String,
    pub bytes: Vec<u8>,
}

/// Persisted shape under the attachment key: `{name, type, data}` with base64 data.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttachmentRecord {
    pub name: String,
    #[serde(rename = "type")]
    pub mime: String,
    pub data: String,
}

/// Displayable attachment with its page-lifetime object URL.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoadedAttachment {
    pub name: String,
    pub mime: ResumeMime,
    /// Size of the original bytes.
    pub size: u64,
    /// Lowercase hex SHA-256 of the original bytes.
    pub sha256: String,
    /// Ephemeral URL; never persisted.
    pub url: Url,
}
