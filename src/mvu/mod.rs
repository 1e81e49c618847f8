// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Root Model-View-Update kernel wiring component state, messages, and commands.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use url::Url;

use crate::logic::attachment_store::AttachmentStore;
use crate::logic::object_url::ObjectUrls;
use crate::logic::session::SessionGate;
use crate::models::attachment::PickedFile;
use crate::models::session::SessionState;
use crate::storage::{KeyValueStore, StoreError};
use crate::ui::components::login::{self, LoginEvent, LoginModel, LoginMsg, SIGNUP_NOTICE};
use crate::ui::components::reset::{self, ResetModel, ResetMsg};
use crate::ui::components::resume_file::{
    self, ResumeFileCommand, ResumeFileModel, ResumeFileMsg,
};

/// Which top-level screen is shown.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    Login,
    Profile,
}

/// Top-level application state.
pub struct AppModel {
    /// Persisted session access.
    pub gate: SessionGate,
    /// Persisted résumé access.
    pub resume_store: AttachmentStore,
    /// Session as last observed.
    pub session: SessionState,
    /// Login / sign-up card.
    pub login: LoginModel,
    /// Forgot-password dialog.
    pub reset: ResetModel,
    /// Résumé attachment panel.
    pub resume_file: ResumeFileModel,
    /// Latest status message to display.
    pub status: Option<String>,
    /// Latest error message to display in modal.
    pub error: Option<String>,
    /// Informational message to display in modal.
    pub notice: Option<String>,
    /// Count of queued background commands.
    pub pending_commands: usize,
}

/// Application messages routed through the update function.
#[derive(Debug)]
pub enum Msg {
    Login(LoginMsg),
    Reset(ResetMsg),
    ResumeFile(ResumeFileMsg),
    Logout,
    /// An external viewer was launched for this URL.
    Opened(Url),
    DismissError,
    DismissNotice,
}

/// Commands represent side-effects executed between frames.
#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    PickResume,
    ReadResume { path: PathBuf, mime: String },
    OpenUrl(Url),
}

impl AppModel {
    /// Build the model over a shared store and decide the initial screen.
    ///
    /// When a session record already exists the persisted résumé is restored
    /// right away.
    pub fn new(store: Arc<dyn KeyValueStore>, urls: ObjectUrls) -> Self {
        let gate = SessionGate::new(store.clone());
        let session = gate.state();
        let mut model = Self {
            gate,
            resume_store: AttachmentStore::new(store, urls),
            session,
            login: LoginModel::default(),
            reset: ResetModel::default(),
            resume_file: ResumeFileModel::default(),
            status: None,
            error: None,
            notice: None,
            pending_commands: 0,
        };
        if model.session.is_logged_in() {
            log::info!(
                "resuming session for {}",
                model.session.email().unwrap_or_default()
            );
            enter_profile(&mut model);
        }
        model
    }

    /// Report that the persistent store could not be opened at start-up.
    pub fn storage_unavailable(&mut self, dir: &Path, err: &StoreError) {
        surface_event(
            self,
            format!(
                "Storage in {} could not be opened:\n\n{err}\n\nLogins and uploads will not be saved after you quit.",
                dir.display()
            ),
            true,
        );
    }

    pub fn screen(&self) -> Screen {
        if self.session.is_logged_in() {
            Screen::Profile
        } else {
            Screen::Login
        }
    }
}

/// Update the application model and enqueue commands.
pub fn update(model: &mut AppModel, msg: Msg, cmds: &mut Vec<Command>) {
    match msg {
        Msg::Login(m) => match login::update(&mut model.login, m) {
            Some(LoginEvent::Authenticated { email }) => match model.gate.login(&email) {
                Ok(state) => {
                    model.session = state;
                    model.login = LoginModel::default();
                    model.reset = ResetModel::default();
                    surface_event(model, format!("Logged in as {email}"), false);
                    enter_profile(model);
                }
                Err(err) => surface_event(model, format!("Could not start session:\n\n{err}"), true),
            },
            Some(LoginEvent::SignedUp) => {
                model.notice = Some(SIGNUP_NOTICE.to_string());
                model.status = Some(SIGNUP_NOTICE.to_string());
            }
            Some(LoginEvent::ForgotRequested) => reset::update(&mut model.reset, ResetMsg::Open),
            None => {}
        },
        Msg::Reset(m) => reset::update(&mut model.reset, m),
        Msg::ResumeFile(m) => {
            if !model.session.is_logged_in() {
                log::debug!("ignoring résumé message while logged out: {m:?}");
                return;
            }
            route_resume_file(model, m, cmds);
        }
        Msg::Logout => match model.gate.logout() {
            Ok(state) => {
                model.session = state;
                route_resume_file(model, ResumeFileMsg::Clear, cmds);
                model.login = LoginModel::default();
                surface_event(model, "Logged out.".to_string(), false);
            }
            Err(err) => surface_event(model, format!("Could not end session:\n\n{err}"), true),
        },
        Msg::Opened(url) => {
            log::debug!("opened {url}");
            model.status = Some("Opened résumé in the system viewer.".to_string());
        }
        Msg::DismissError => model.error = None,
        Msg::DismissNotice => model.notice = None,
    }
}

/// Execute a command and return the resulting message.
///
/// Each command yields exactly one message, so a file read completes with a
/// single `FileRead` event.
pub fn run_command(cmd: Command) -> Msg {
    match cmd {
        Command::PickResume => {
            let file = rfd::FileDialog::new()
                .set_title("Select résumé")
                .add_filter("Résumé (PDF, DOCX)", &["pdf", "docx"])
                .add_filter("All files", &["*"])
                .pick_file();
            Msg::ResumeFile(ResumeFileMsg::FilePicked(file))
        }
        Command::ReadResume { path, mime } => {
            let result = read_picked_file(path, mime).map_err(|e| format!("{e:#}"));
            Msg::ResumeFile(ResumeFileMsg::FileRead(result))
        }
        Command::OpenUrl(url) => match open::that(url.as_str()) {
            Ok(()) => Msg::Opened(url),
            Err(err) => Msg::ResumeFile(ResumeFileMsg::OpenFailed(err.to_string())),
        },
    }
}

/// Read a picked file fully into memory.
fn read_picked_file(path: PathBuf, mime: String) -> Result<PickedFile> {
    let bytes =
        std::fs::read(&path).with_context(|| format!("Failed to read {}", path.display()))?;
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "resume".to_string());
    Ok(PickedFile { name, mime, bytes })
}

fn enter_profile(model: &mut AppModel) {
    let mut cmds = Vec::new();
    route_resume_file(model, ResumeFileMsg::Restore, &mut cmds);
    debug_assert!(cmds.is_empty(), "restoring never enqueues commands");
}

fn route_resume_file(model: &mut AppModel, msg: ResumeFileMsg, cmds: &mut Vec<Command>) {
    let mut file_cmds = Vec::new();
    if let Some(event) = resume_file::update(
        &mut model.resume_file,
        msg,
        &model.resume_store,
        &mut file_cmds,
    ) {
        surface_event(model, event.message, event.is_error);
    }
    for c in file_cmds {
        match c {
            ResumeFileCommand::PickFile => cmds.push(Command::PickResume),
            ResumeFileCommand::ReadFile { path, mime } => {
                cmds.push(Command::ReadResume { path, mime })
            }
            ResumeFileCommand::OpenUrl(url) => cmds.push(Command::OpenUrl(url)),
        }
    }
}

/// Update status/error fields consistently for user feedback.
fn surface_event(model: &mut AppModel, message: String, is_error: bool) {
    if is_error {
        model.error = Some(message.clone());
    }
    model.status = Some(message);
}
