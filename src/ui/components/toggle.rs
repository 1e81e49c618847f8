// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Compact on/off switch used for the password visibility control.

use eframe::egui;

/// Draw a toggle switch. Clicking flips `on` and marks the response changed.
pub fn toggle_switch(ui: &mut egui::Ui, on: &mut bool) -> egui::Response {
    let interact = ui.style().spacing.interact_size;
    let size = egui::vec2(interact.x.max(32.0), interact.y.max(18.0));
    let (rect, mut response) = ui.allocate_exact_size(size, egui::Sense::click());
    if response.clicked() {
        *on = !*on;
        response.mark_changed();
    }

    if !ui.is_rect_visible(rect) {
        return response;
    }

    let t = ui.ctx().animate_bool(response.id, *on);
    let visuals = ui.style().interact_selectable(&response, *on);
    let off_fill = ui.visuals().widgets.inactive.bg_fill;
    let rail = off_fill.lerp_to_gamma(visuals.bg_fill, t);
    let radius = rect.height() * 0.45;
    ui.painter()
        .rect_filled(rect.expand(visuals.expansion), radius, rail);

    let knob_x = egui::lerp((rect.left() + 8.0)..=(rect.right() - 8.0), t);
    ui.painter().circle(
        egui::pos2(knob_x, rect.center().y),
        6.5,
        visuals.bg_fill,
        visuals.fg_stroke,
    );

    response
}
