// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Read-only profile card, skills, projects, and download link.

use eframe::egui;

use crate::models::profile::Profile;

/// Render the static profile sections. Stateless; emits no messages.
pub fn view(ui: &mut egui::Ui, profile: &Profile) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.vertical_centered(|ui| {
            ui.label(egui::RichText::new(egui_phosphor::regular::USER_CIRCLE).size(64.0));
            ui.heading(profile.name);
            ui.label(egui::RichText::new(profile.title).strong());
        });
        ui.add_space(6.0);
        ui.label(format!("{} {}", egui_phosphor::regular::ENVELOPE, profile.email));
        ui.label(format!("{} {}", egui_phosphor::regular::PHONE, profile.phone));
        ui.label(format!("{} {}", egui_phosphor::regular::MAP_PIN, profile.location));
        ui.add_space(6.0);
        ui.label(profile.summary);
    });

    ui.add_space(12.0);
    egui::CollapsingHeader::new("Skills")
        .default_open(true)
        .show(ui, |ui| {
            ui.horizontal_wrapped(|ui| {
                for skill in profile.skills {
                    ui.label(egui::RichText::new(*skill).background_color(
                        ui.visuals().faint_bg_color,
                    ));
                }
            });
        });

    ui.add_space(12.0);
    egui::CollapsingHeader::new("Projects")
        .default_open(true)
        .show(ui, |ui| {
            for (i, project) in profile.projects.iter().enumerate() {
                ui.label(egui::RichText::new(project.name).strong());
                ui.label(project.description);
                if let Some(link) = &project.link {
                    ui.hyperlink_to(
                        format!("{} {}", egui_phosphor::regular::GLOBE, link.label),
                        link.url,
                    );
                }
                if i + 1 < profile.projects.len() {
                    ui.separator();
                }
            }
        });

    ui.add_space(12.0);
    ui.horizontal(|ui| {
        ui.label("Download my résumé:");
        ui.hyperlink_to(
            format!("{} Open folder", egui_phosphor::regular::LINK),
            profile.download_url,
        );
    });
}
