// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Single-slot résumé attachment persisted as base64 text.
//!
//! Responsibilities:
//! - Enforce the PDF/DOCX allow-list before anything is written.
//! - Encode the bytes and overwrite the one attachment record.
//! - Rebuild a displayable object URL from the record on start-up.

use std::sync::Arc;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use log::{info, warn};
use url::Url;

use crate::logic::object_url::ObjectUrls;
use crate::models::attachment::{AttachmentRecord, LoadedAttachment, PickedFile, ResumeMime};
use crate::storage::{ATTACHMENT_KEY, KeyValueStore, StoreError};
use crate::utils::hash_bytes;

/// Failures while saving or restoring the attachment.
#[derive(Debug, thiserror::Error)]
pub enum AttachmentError {
    #[error("Please upload a PDF or DOCX file!")]
    UnsupportedType { mime: String },
    #[error("Saved résumé could not be restored: {0}")]
    CorruptRecord(String),
    #[error("Résumé could not be stored: {0}")]
    Storage(#[from] StoreError),
    #[error("Résumé could not be prepared for viewing: {0:#}")]
    ObjectUrl(anyhow::Error),
}

/// Reads and writes the attachment record and mints its object URLs.
pub struct AttachmentStore {
    store: Arc<dyn KeyValueStore>,
    urls: ObjectUrls,
}

/// Check a declared MIME type against the résumé allow-list.
pub fn check_type(mime: &str) -> Result<ResumeMime, AttachmentError> {
    ResumeMime::from_mime(mime).ok_or_else(|| AttachmentError::UnsupportedType {
        mime: mime.to_string(),
    })
}

impl AttachmentStore {
    pub fn new(store: Arc<dyn KeyValueStore>, urls: ObjectUrls) -> Self {
        Self { store, urls }
    }

    /// Persist `file` as the only attachment and return it ready for display.
    ///
    /// Rejected types leave the previous record untouched. The returned URL
    /// is built from `file.bytes` directly.
    pub fn save(&self, file: &PickedFile) -> Result<LoadedAttachment, AttachmentError> {
        let mime = check_type(&file.mime)?;

        let record = AttachmentRecord {
            name: file.name.clone(),
            mime: mime.as_str().to_string(),
            data: STANDARD.encode(&file.bytes),
        };
        let json = serde_json::to_string(&record).map_err(StoreError::from)?;
        self.store.set(ATTACHMENT_KEY, &json)?;
        info!(
            "saved résumé '{}' ({}, {} bytes)",
            file.name,
            mime.label(),
            file.bytes.len()
        );

        self.present(&file.name, mime, &file.bytes)
    }

    /// Restore the persisted attachment, if one exists.
    pub fn load_persisted(&self) -> Result<Option<LoadedAttachment>, AttachmentError> {
        let Some(json) = self.store.get(ATTACHMENT_KEY)? else {
            return Ok(None);
        };

        let record: AttachmentRecord = serde_json::from_str(&json)
            .map_err(|e| AttachmentError::CorruptRecord(format!("invalid record: {e}")))?;
        let mime = ResumeMime::from_mime(&record.mime).ok_or_else(|| {
            AttachmentError::CorruptRecord(format!("unexpected type '{}'", record.mime))
        })?;
        let bytes = STANDARD.decode(record.data.as_bytes()).map_err(|e| {
            warn!("attachment record for '{}' has bad base64: {e}", record.name);
            AttachmentError::CorruptRecord(format!("invalid base64 data: {e}"))
        })?;

        info!("restored résumé '{}' ({} bytes)", record.name, bytes.len());
        self.present(&record.name, mime, &bytes).map(Some)
    }

    /// Release an object URL that is no longer displayed.
    pub fn revoke(&self, url: &Url) {
        self.urls.revoke(url);
    }

    fn present(
        &self,
        name: &str,
        mime: ResumeMime,
        bytes: &[u8],
    ) -> Result<LoadedAttachment, AttachmentError> {
        let url = self
            .urls
            .create(name, bytes)
            .map_err(AttachmentError::ObjectUrl)?;
        Ok(LoadedAttachment {
            name: name.to_string(),
            mime,
            size: bytes.len() as u64,
            sha256: hash_bytes(bytes),
            url,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;
    use crate::storage::MemoryStore;

    fn store() -> (AttachmentStore, Arc<MemoryStore>) {
        let kv = Arc::new(MemoryStore::new());
        let store = AttachmentStore::new(kv.clone(), ObjectUrls::new().unwrap());
        (store, kv)
    }

    fn pdf(name: &str, bytes: &[u8]) -> PickedFile {
        PickedFile {
            name: name.into(),
            mime: ResumeMime::PDF.into(),
            bytes: bytes.to_vec(),
        }
    }

    fn url_bytes(att: &LoadedAttachment) -> Vec<u8> {
        fs::read(att.url.to_file_path().unwrap()).unwrap()
    }

    #[test]
    fn nothing_persisted_loads_none() {
        let (store, _) = store();
        assert!(store.load_persisted().unwrap().is_none());
    }

    #[test]
    fn save_then_load_round_trips_bytes() {
        let (store, kv) = store();
        let original: Vec<u8> = (0..=255u8).cycle().take(4096).collect();

        let saved = store.save(&pdf("cv.pdf", &original)).unwrap();
        assert_eq!(saved.name, "cv.pdf");
        assert_eq!(saved.size, 4096);
        assert_eq!(url_bytes(&saved), original);

        let loaded = store.load_persisted().unwrap().expect("record present");
        assert_eq!(loaded.name, "cv.pdf");
        assert_eq!(loaded.mime, ResumeMime::Pdf);
        assert_eq!(loaded.sha256, saved.sha256);
        assert_ne!(loaded.url, saved.url, "object URLs are minted per load");
        assert_eq!(url_bytes(&loaded), original);

        let raw = kv.get(ATTACHMENT_KEY).unwrap().unwrap();
        let record: AttachmentRecord = serde_json::from_str(&raw).unwrap();
        assert_eq!(record.mime, "application/pdf");
        assert_eq!(STANDARD.decode(record.data).unwrap(), original);
    }

    #[test]
    fn docx_is_accepted() {
        let (store, _) = store();
        let file = PickedFile {
            name: "cv.docx".into(),
            mime: ResumeMime::DOCX.into(),
            bytes: b"PK\x03\x04".to_vec(),
        };
        let saved = store.save(&file).unwrap();
        assert_eq!(saved.mime, ResumeMime::Docx);
    }

    #[test]
    fn unsupported_type_keeps_previous_record() {
        let (store, kv) = store();
        store.save(&pdf("first.pdf", b"first")).unwrap();
        let before = kv.get(ATTACHMENT_KEY).unwrap();

        let png = PickedFile {
            name: "photo.png".into(),
            mime: "image/png".into(),
            bytes: vec![0x89, b'P', b'N', b'G'],
        };
        let err = store.save(&png).unwrap_err();
        assert!(matches!(err, AttachmentError::UnsupportedType { ref mime } if mime == "image/png"));
        assert_eq!(err.to_string(), "Please upload a PDF or DOCX file!");

        assert_eq!(kv.get(ATTACHMENT_KEY).unwrap(), before);
        assert_eq!(store.load_persisted().unwrap().unwrap().name, "first.pdf");
    }

    #[test]
    fn second_save_overwrites_first() {
        let (store, kv) = store();
        store.save(&pdf("a.pdf", b"aaaa")).unwrap();
        store.save(&pdf("b.pdf", b"bb")).unwrap();

        let loaded = store.load_persisted().unwrap().unwrap();
        assert_eq!(loaded.name, "b.pdf");
        assert_eq!(url_bytes(&loaded), b"bb");
        assert_eq!(kv.key_count(), 1);
    }

    #[test]
    fn empty_file_is_allowed() {
        let (store, _) = store();
        store.save(&pdf("empty.pdf", b"")).unwrap();
        let loaded = store.load_persisted().unwrap().unwrap();
        assert_eq!(loaded.size, 0);
        assert!(url_bytes(&loaded).is_empty());
    }

    #[test]
    fn corrupt_records_are_reported() {
        let (store, kv) = store();

        kv.set(ATTACHMENT_KEY, "not json").unwrap();
        assert!(matches!(
            store.load_persisted(),
            Err(AttachmentError::CorruptRecord(_))
        ));

        kv.set(
            ATTACHMENT_KEY,
            r#"{"name":"cv.pdf","type":"application/pdf","data":"***"}"#,
        )
        .unwrap();
        assert!(matches!(
            store.load_persisted(),
            Err(AttachmentError::CorruptRecord(_))
        ));

        kv.set(
            ATTACHMENT_KEY,
            r#"{"name":"cv.png","type":"image/png","data":""}"#,
        )
        .unwrap();
        assert!(matches!(
            store.load_persisted(),
            Err(AttachmentError::CorruptRecord(_))
        ));
    }

    #[test]
    fn check_type_matches_allow_list() {
        assert_eq!(check_type("application/pdf").unwrap(), ResumeMime::Pdf);
        assert!(check_type("text/plain").is_err());
    }
}
