// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Top-level egui application shell.
//! Chooses between the login card and the profile view and wires the worker pool.

pub mod components;

use eframe::egui;

use crate::models::profile::PROFILE;
use crate::mvu::{self, AppModel, Command, Msg, Screen};
use crate::ui::components::{login, profile, reset, resume_file};

/// Stateful egui application for the résumé gate.
pub struct ResumeGateApp {
    model: AppModel,
    inbox: Vec<Msg>,
    cmd_tx: crossbeam_channel::Sender<Command>,
    msg_rx: crossbeam_channel::Receiver<Msg>,
}

impl ResumeGateApp {
    /// Wrap a prepared model and start the command workers.
    pub fn new(model: AppModel) -> Self {
        let (cmd_tx, cmd_rx) = crossbeam_channel::unbounded::<Command>();
        let (msg_tx, msg_rx) = crossbeam_channel::unbounded::<Msg>();

        // Two workers: a blocking file dialog must not stall a file read.
        for _ in 0..2 {
            let cmd_rx = cmd_rx.clone();
            let msg_tx = msg_tx.clone();
            std::thread::spawn(move || {
                for cmd in cmd_rx.iter() {
                    let msg = mvu::run_command(cmd);
                    let _ = msg_tx.send(msg);
                }
            });
        }

        Self {
            model,
            inbox: Vec::new(),
            cmd_tx,
            msg_rx,
        }
    }
}

impl eframe::App for ResumeGateApp {
    /// Required by eframe 0.34; all rendering happens in the (still-invoked) `update`.
    fn ui(&mut self, _ui: &mut egui::Ui, _frame: &mut eframe::Frame) {}

    /// Drives a single UI frame: drains worker results, applies queued messages,
    /// dispatches new commands, then renders the active screen.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ctx.style_mut(|style| {
            style.spacing.item_spacing = egui::vec2(6.0, 6.0);
        });

        while let Ok(msg) = self.msg_rx.try_recv() {
            self.model.pending_commands = self.model.pending_commands.saturating_sub(1);
            self.inbox.push(msg);
        }

        for msg in std::mem::take(&mut self.inbox) {
            let mut commands = Vec::new();
            mvu::update(&mut self.model, msg, &mut commands);
            for cmd in commands {
                if self.cmd_tx.send(cmd).is_ok() {
                    self.model.pending_commands += 1;
                }
            }
        }
        if self.model.pending_commands > 0 {
            // Keep polling the worker channel while work is outstanding.
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }

        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                ui.heading(match self.model.screen() {
                    Screen::Login => "Welcome",
                    Screen::Profile => "My Resume",
                });
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    egui::widgets::global_theme_preference_switch(ui);
                    if self.model.screen() == Screen::Profile {
                        ui.separator();
                        self.render_logout_button(ui);
                    }
                });
            });
            ui.add_space(4.0);
        });

        self.render_modals(ctx);

        egui::TopBottomPanel::bottom("status_panel")
            .resizable(false)
            .show(ctx, |ui| {
                self.render_status(ui);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(8.0);
            match self.model.screen() {
                Screen::Login => self.render_login(ui, ctx),
                Screen::Profile => self.render_profile(ui),
            }
        });
    }
}

impl ResumeGateApp {
    fn render_logout_button(&mut self, ui: &mut egui::Ui) {
        let label = format!("{} Logout", egui_phosphor::regular::SIGN_OUT);
        if ui.button(label).clicked() {
            self.inbox.push(Msg::Logout);
        }
        if let Some(email) = self.model.session.email() {
            ui.label(
                egui::RichText::new(email)
                    .small()
                    .color(egui::Color32::from_gray(110)),
            );
        }
    }

    /// Login card centered in the window, plus the reset dialog when open.
    fn render_login(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        ui.vertical_centered(|ui| {
            ui.add_space(24.0);
            egui::Frame::group(ui.style())
                .inner_margin(16.0)
                .show(ui, |ui| {
                    ui.set_max_width(340.0);
                    let msgs = login::view(ui, &self.model.login);
                    self.inbox.extend(msgs.into_iter().map(Msg::Login));
                });
        });

        let reset_msgs = reset::view(ctx, &self.model.reset);
        self.inbox.extend(reset_msgs.into_iter().map(Msg::Reset));
    }

    fn render_profile(&mut self, ui: &mut egui::Ui) {
        egui::ScrollArea::vertical().show(ui, |ui| {
            profile::view(ui, &PROFILE);
            ui.add_space(12.0);

            egui::CollapsingHeader::new("Résumé file")
                .default_open(true)
                .show(ui, |ui| {
                    let msgs = resume_file::view(ui, &self.model.resume_file);
                    self.inbox.extend(msgs.into_iter().map(Msg::ResumeFile));
                });
            ui.add_space(8.0);
        });
    }

    /// Error and notice dialogs. Errors take precedence.
    fn render_modals(&mut self, ctx: &egui::Context) {
        let (title, message, dismiss) = if let Some(message) = &self.model.error {
            ("Error", message.clone(), Msg::DismissError)
        } else if let Some(message) = &self.model.notice {
            ("Notice", message.clone(), Msg::DismissNotice)
        } else {
            return;
        };

        let mut dismiss = Some(dismiss);
        egui::Window::new(title)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .show(ctx, |ui| {
                ui.label(message);
                ui.add_space(8.0);
                if ui.button("OK").clicked()
                    && let Some(msg) = dismiss.take()
                {
                    self.inbox.push(msg);
                }
            });
    }

    /// Render latest status message when present.
    fn render_status(&self, ui: &mut egui::Ui) {
        if let Some(text) = &self.model.status {
            let display = if self.model.pending_commands > 0 {
                format!("{}  ({} working…)", text, self.model.pending_commands)
            } else {
                text.to_string()
            };
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(display).color(egui::Color32::from_gray(68)));
                if self.model.pending_commands > 0 {
                    ui.add(egui::Spinner::new().size(14.0));
                }
            });
        }
    }
}
