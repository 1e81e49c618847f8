// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Forgot-password dialog. Sending is simulated; no email leaves the machine.

use std::time::{Duration, Instant};

use eframe::egui;

use crate::logic::credentials::validate_reset_request;

/// Confirmation shown after a valid request.
pub const RESET_SENT: &str = "Password reset link has been sent to your email!";
/// How long the confirmation stays visible before the dialog closes itself.
pub const AUTO_CLOSE_AFTER: Duration = Duration::from_secs(2);

#[derive(Debug, Default)]
pub struct ResetModel {
    pub open: bool,
    pub email: String,
    pub message: Option<String>,
    close_at: Option<Instant>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ResetMsg {
    Open,
    Close,
    EmailChanged(String),
    Submit { now: Instant },
    Tick { now: Instant },
}

impl ResetModel {
    /// Time left until the dialog closes itself, if a close is scheduled.
    pub fn pending_close(&self, now: Instant) -> Option<Duration> {
        self.close_at.map(|at| at.saturating_duration_since(now))
    }
}

pub fn update(model: &mut ResetModel, msg: ResetMsg) {
    match msg {
        ResetMsg::Open => model.open = true,
        ResetMsg::Close => {
            model.open = false;
            model.close_at = None;
        }
        ResetMsg::EmailChanged(text) => model.email = text,
        ResetMsg::Submit { now } => match validate_reset_request(&model.email) {
            Ok(()) => {
                log::info!("simulated password reset for {}", model.email.trim());
                model.message = Some(RESET_SENT.to_string());
                model.close_at = Some(now + AUTO_CLOSE_AFTER);
            }
            Err(err) => model.message = Some(err.reset_message()),
        },
        ResetMsg::Tick { now } => {
            if model.close_at.is_some_and(|at| now >= at) {
                model.open = false;
                model.close_at = None;
            }
        }
    }
}

/// Render the modal when open and return triggered messages.
pub fn view(ctx: &egui::Context, model: &ResetModel) -> Vec<ResetMsg> {
    let mut msgs = Vec::new();
    if !model.open {
        return msgs;
    }

    let now = Instant::now();
    if let Some(remaining) = model.pending_close(now) {
        msgs.push(ResetMsg::Tick { now });
        ctx.request_repaint_after(remaining);
    }

    egui::Window::new("Reset Password")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
        .show(ctx, |ui| {
            let mut email = model.email.clone();
            let resp = ui.add(
                egui::TextEdit::singleline(&mut email)
                    .hint_text("Enter your email")
                    .desired_width(260.0),
            );
            if resp.changed() {
                msgs.push(ResetMsg::EmailChanged(email));
            }
            let enter = resp.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

            if let Some(message) = &model.message {
                ui.label(message);
            }

            ui.add_space(6.0);
            ui.horizontal(|ui| {
                if ui.button("Send Link").clicked() || enter {
                    msgs.push(ResetMsg::Submit { now });
                }
                if ui.button("Cancel").clicked() {
                    msgs.push(ResetMsg::Close);
                }
            });
        });

    msgs
}
