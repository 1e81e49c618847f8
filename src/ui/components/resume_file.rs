// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Résumé attachment panel: upload, persist, and open the single stored file.

use std::path::{Path, PathBuf};

use eframe::egui;
use url::Url;

use crate::logic::attachment_store::{AttachmentError, AttachmentStore, check_type};
use crate::models::attachment::{LoadedAttachment, PickedFile};
use crate::utils::icon_for;

/// MVU state for the attachment panel.
#[derive(Debug, Default)]
pub struct ResumeFileModel {
    current: Option<LoadedAttachment>,
    /// A file read is in flight.
    reading: bool,
}

/// Messages emitted by the panel or produced by its commands.
#[derive(Debug)]
pub enum ResumeFileMsg {
    RequestPick,
    FilePicked(Option<PathBuf>),
    /// Completion of the one asynchronous read.
    FileRead(Result<PickedFile, String>),
    /// Restore the persisted attachment (entering the profile view).
    Restore,
    Open,
    OpenFailed(String),
    /// Forget the displayed attachment (logout). The record stays stored.
    Clear,
}

/// Side-effects executed off the UI path.
#[derive(Debug, PartialEq, Eq)]
pub enum ResumeFileCommand {
    PickFile,
    ReadFile { path: PathBuf, mime: String },
    OpenUrl(Url),
}

/// User-facing events for status/error surfaces.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResumeFileEvent {
    pub message: String,
    pub is_error: bool,
}

impl ResumeFileEvent {
    fn info(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            is_error: false,
        }
    }

    fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            is_error: true,
        }
    }
}

impl ResumeFileModel {
    /// Attachment currently displayed, if any.
    pub fn current(&self) -> Option<&LoadedAttachment> {
        self.current.as_ref()
    }

    pub fn is_reading(&self) -> bool {
        self.reading
    }

    fn replace(&mut self, store: &AttachmentStore, next: Option<LoadedAttachment>) {
        if let Some(old) = self.current.take() {
            store.revoke(&old.url);
        }
        self.current = next;
    }
}

/// Apply a message to the panel. Returns a user-facing event when relevant.
pub fn update(
    model: &mut ResumeFileModel,
    msg: ResumeFileMsg,
    store: &AttachmentStore,
    cmds: &mut Vec<ResumeFileCommand>,
) -> Option<ResumeFileEvent> {
    match msg {
        ResumeFileMsg::RequestPick => {
            cmds.push(ResumeFileCommand::PickFile);
            None
        }
        ResumeFileMsg::FilePicked(None) => None,
        ResumeFileMsg::FilePicked(Some(path)) => {
            let mime = guess_mime(&path);
            if let Err(err) = check_type(&mime) {
                if let AttachmentError::UnsupportedType { mime: rejected } = &err {
                    log::warn!("rejected upload {} ({rejected})", path.display());
                }
                return Some(ResumeFileEvent::error(err.to_string()));
            }
            model.reading = true;
            cmds.push(ResumeFileCommand::ReadFile { path, mime });
            Some(ResumeFileEvent::info("Reading résumé..."))
        }
        ResumeFileMsg::FileRead(Err(err)) => {
            model.reading = false;
            Some(ResumeFileEvent::error(format!("Failed to read file:\n\n{err}")))
        }
        ResumeFileMsg::FileRead(Ok(file)) => {
            model.reading = false;
            match store.save(&file) {
                Ok(saved) => {
                    let message = format!("Résumé saved: {}", saved.name);
                    model.replace(store, Some(saved));
                    Some(ResumeFileEvent::info(message))
                }
                Err(err) => Some(ResumeFileEvent::error(err.to_string())),
            }
        }
        ResumeFileMsg::Restore => match store.load_persisted() {
            Ok(loaded) => {
                let message = loaded
                    .as_ref()
                    .map(|att| format!("Restored résumé: {}", att.name));
                model.replace(store, loaded);
                message.map(ResumeFileEvent::info)
            }
            Err(err) => {
                log::warn!("could not restore résumé: {err}");
                model.replace(store, None);
                Some(ResumeFileEvent::error(err.to_string()))
            }
        },
        ResumeFileMsg::Open => {
            if let Some(att) = &model.current {
                cmds.push(ResumeFileCommand::OpenUrl(att.url.clone()));
            }
            None
        }
        ResumeFileMsg::OpenFailed(err) => Some(ResumeFileEvent::error(format!(
            "Could not open résumé:\n\n{err}"
        ))),
        ResumeFileMsg::Clear => {
            model.replace(store, None);
            model.reading = false;
            None
        }
    }
}

/// Render the panel and return any messages triggered by user interaction.
pub fn view(ui: &mut egui::Ui, model: &ResumeFileModel) -> Vec<ResumeFileMsg> {
    let mut msgs = Vec::new();

    ui.horizontal(|ui| {
        let upload = egui::Button::new(format!(
            "{} Upload résumé",
            egui_phosphor::regular::UPLOAD_SIMPLE
        ));
        if ui
            .add_enabled(!model.reading, upload)
            .on_hover_text("PDF or DOCX")
            .clicked()
        {
            msgs.push(ResumeFileMsg::RequestPick);
        }
        if model.reading {
            ui.add(egui::Spinner::new().size(14.0));
        }
    });

    ui.add_space(6.0);

    let visuals = ui.visuals().clone();
    egui::Frame::new()
        .fill(visuals.panel_fill)
        .stroke(visuals.window_stroke())
        .inner_margin(8.0)
        .show(ui, |ui| match &model.current {
            None => {
                ui.label(
                    egui::RichText::new("No résumé uploaded").color(egui::Color32::from_gray(150)),
                );
            }
            Some(att) => render_current(ui, att, &mut msgs),
        });

    msgs
}

fn render_current(ui: &mut egui::Ui, att: &LoadedAttachment, msgs: &mut Vec<ResumeFileMsg>) {
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new(icon_for(att.mime.as_str(), &att.name)).size(32.0));
        ui.vertical(|ui| {
            ui.label(att.name.as_str());
            ui.label(
                egui::RichText::new(format!("{} | {}", att.mime.label(), format_bytes(att.size)))
                    .small()
                    .color(egui::Color32::from_gray(102)),
            );
            ui.label(
                egui::RichText::new(format!("sha256 {}", att.sha256))
                    .small()
                    .color(egui::Color32::from_gray(90)),
            );
        });
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui
                .button(format!("{} Open", egui_phosphor::regular::ARROW_SQUARE_OUT))
                .on_hover_text("Open in the system viewer")
                .clicked()
            {
                msgs.push(ResumeFileMsg::Open);
            }
        });
    });
}

/// Declared MIME type for a picked file, derived from its extension.
fn guess_mime(path: &Path) -> String {
    mime_guess::from_path(path)
        .first_or_octet_stream()
        .essence_str()
        .to_string()
}

/// Human-readable formatting for byte sizes with binary units.
fn format_bytes(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    if unit == 0 {
        format!("{bytes} B")
    } else {
        format!("{value:.1} {}", UNITS[unit])
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::logic::object_url::ObjectUrls;
    use crate::models::attachment::ResumeMime;
    use crate::storage::{ATTACHMENT_KEY, KeyValueStore, MemoryStore};

    fn store() -> (AttachmentStore, Arc<MemoryStore>) {
        let kv = Arc::new(MemoryStore::new());
        (
            AttachmentStore::new(kv.clone(), ObjectUrls::new().unwrap()),
            kv,
        )
    }

    fn picked(name: &str, bytes: &[u8]) -> PickedFile {
        PickedFile {
            name: name.into(),
            mime: ResumeMime::PDF.into(),
            bytes: bytes.to_vec(),
        }
    }

    #[test]
    fn guess_mime_follows_extension() {
        assert_eq!(guess_mime(Path::new("cv.pdf")), "application/pdf");
        assert_eq!(guess_mime(Path::new("CV.DOCX")), ResumeMime::DOCX);
        assert_eq!(guess_mime(Path::new("photo.png")), "image/png");
        assert_eq!(guess_mime(Path::new("noext")), "application/octet-stream");
    }

    #[test]
    fn picking_unsupported_file_enqueues_nothing() {
        let (store, kv) = store();
        let mut model = ResumeFileModel::default();
        let mut cmds = Vec::new();

        let event = update(
            &mut model,
            ResumeFileMsg::FilePicked(Some(PathBuf::from("photo.png"))),
            &store,
            &mut cmds,
        )
        .unwrap();

        assert!(event.is_error);
        assert_eq!(event.message, "Please upload a PDF or DOCX file!");
        assert!(cmds.is_empty());
        assert!(!model.is_reading());
        assert_eq!(kv.get(ATTACHMENT_KEY).unwrap(), None);
    }

    #[test]
    fn picking_pdf_enqueues_read() {
        let (store, _) = store();
        let mut model = ResumeFileModel::default();
        let mut cmds = Vec::new();

        update(
            &mut model,
            ResumeFileMsg::FilePicked(Some(PathBuf::from("/docs/cv.pdf"))),
            &store,
            &mut cmds,
        );

        assert!(model.is_reading());
        assert_eq!(
            cmds,
            vec![ResumeFileCommand::ReadFile {
                path: PathBuf::from("/docs/cv.pdf"),
                mime: "application/pdf".into(),
            }]
        );
    }

    #[test]
    fn cancelled_pick_is_silent() {
        let (store, _) = store();
        let mut model = ResumeFileModel::default();
        let mut cmds = Vec::new();
        let event = update(&mut model, ResumeFileMsg::FilePicked(None), &store, &mut cmds);
        assert!(event.is_none());
        assert!(cmds.is_empty());
    }

    #[test]
    fn read_completion_saves_and_replaces_previous_url() {
        let (store, _) = store();
        let mut model = ResumeFileModel::default();
        let mut cmds = Vec::new();

        update(
            &mut model,
            ResumeFileMsg::FileRead(Ok(picked("a.pdf", b"aaa"))),
            &store,
            &mut cmds,
        );
        let first_path = model.current().unwrap().url.to_file_path().unwrap();
        assert!(first_path.exists());

        let event = update(
            &mut model,
            ResumeFileMsg::FileRead(Ok(picked("b.pdf", b"bbb"))),
            &store,
            &mut cmds,
        )
        .unwrap();

        assert!(!event.is_error);
        assert_eq!(model.current().unwrap().name, "b.pdf");
        assert!(!first_path.exists(), "previous object URL is revoked");
        assert_eq!(store.load_persisted().unwrap().unwrap().name, "b.pdf");
    }

    #[test]
    fn read_failure_is_reported() {
        let (store, _) = store();
        let mut model = ResumeFileModel {
            reading: true,
            ..Default::default()
        };
        let mut cmds = Vec::new();
        let event = update(
            &mut model,
            ResumeFileMsg::FileRead(Err("permission denied".into())),
            &store,
            &mut cmds,
        )
        .unwrap();
        assert!(event.is_error);
        assert!(event.message.contains("permission denied"));
        assert!(!model.is_reading());
    }

    #[test]
    fn restore_loads_persisted_record() {
        let (store, _) = store();
        store.save(&picked("cv.pdf", b"%PDF")).unwrap();

        let mut model = ResumeFileModel::default();
        let mut cmds = Vec::new();
        update(&mut model, ResumeFileMsg::Restore, &store, &mut cmds);

        let current = model.current().unwrap();
        assert_eq!(current.name, "cv.pdf");
        assert_eq!(
            std::fs::read(current.url.to_file_path().unwrap()).unwrap(),
            b"%PDF"
        );
    }

    #[test]
    fn restore_with_corrupt_record_shows_error_and_keeps_record() {
        let (store, kv) = store();
        kv.set(ATTACHMENT_KEY, "{broken").unwrap();

        let mut model = ResumeFileModel::default();
        let mut cmds = Vec::new();
        let event = update(&mut model, ResumeFileMsg::Restore, &store, &mut cmds).unwrap();

        assert!(event.is_error);
        assert!(model.current().is_none());
        assert_eq!(kv.get(ATTACHMENT_KEY).unwrap().as_deref(), Some("{broken"));
    }

    #[test]
    fn open_and_clear() {
        let (store, kv) = store();
        let mut model = ResumeFileModel::default();
        let mut cmds = Vec::new();

        update(&mut model, ResumeFileMsg::Open, &store, &mut cmds);
        assert!(cmds.is_empty(), "nothing to open yet");

        update(
            &mut model,
            ResumeFileMsg::FileRead(Ok(picked("cv.pdf", b"x"))),
            &store,
            &mut cmds,
        );
        update(&mut model, ResumeFileMsg::Open, &store, &mut cmds);
        let url = model.current().unwrap().url.clone();
        assert_eq!(cmds, vec![ResumeFileCommand::OpenUrl(url)]);

        update(&mut model, ResumeFileMsg::Clear, &store, &mut cmds);
        assert!(model.current().is_none());
        assert!(kv.get(ATTACHMENT_KEY).unwrap().is_some());
    }

    #[test]
    fn format_bytes_uses_binary_units() {
        assert_eq!(format_bytes(512), "512 B");
        assert_eq!(format_bytes(2048), "2.0 KB");
        assert_eq!(format_bytes(5 * 1024 * 1024), "5.0 MB");
    }
}
