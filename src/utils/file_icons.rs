// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges
//! Phosphor file-icon mapping for uploaded documents.

use std::path::Path;

/// Return a Phosphor file icon for the MIME type, falling back to the extension.
pub fn icon_for(mime: &str, name: &str) -> &'static str {
    let mime = mime
        .split(';')
        .next()
        .unwrap_or("")
        .trim()
        .to_ascii_lowercase();
    let ext = Path::new(name)
        .extension()
        .and_then(|e| e.to_str())
        .map(|s| s.to_ascii_lowercase())
        .unwrap_or_default();

    if mime == "application/pdf" || ext == "pdf" {
        return egui_phosphor::regular::FILE_PDF;
    }
    if mime == "application/msword"
        || mime == "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
        || ext == "doc"
        || ext == "docx"
    {
        return egui_phosphor::regular::FILE_DOC;
    }
    if mime.starts_with("image/") {
        return egui_phosphor::regular::FILE_IMAGE;
    }
    if mime.starts_with("text/") || ext == "txt" {
        return egui_phosphor::regular::FILE_TXT;
    }

    egui_phosphor::regular::FILE
}

#[cfg(test)]
mod tests {
    use super::icon_for;

    #[test]
    fn resume_types_get_document_icons() {
        assert_eq!(
            icon_for("application/pdf", "cv.pdf"),
            egui_phosphor::regular::FILE_PDF
        );
        assert_eq!(
            icon_for(
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
                "cv.docx"
            ),
            egui_phosphor::regular::FILE_DOC
        );
        assert_eq!(
            icon_for("", "CV.PDF"),
            egui_phosphor::regular::FILE_PDF
        );
        assert_eq!(
            icon_for("application/octet-stream", "blob"),
            egui_phosphor::regular::FILE
        );
    }
}
