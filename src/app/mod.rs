// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Application entry point wiring egui/eframe to launch the résumé gate UI.

use eframe::egui;
use egui_phosphor::Variant;

use crate::logic::object_url::ObjectUrls;
use crate::mvu::AppModel;
use crate::settings::AppConfig;
use crate::storage::open_or_memory;
use crate::ui::ResumeGateApp;

/// Bootstrap the desktop application and run the main egui event loop.
pub fn run(cfg: AppConfig) -> eframe::Result<()> {
    let dir = cfg.storage_dir();
    let (store, storage_error) = open_or_memory(&dir);
    let urls = ObjectUrls::new().map_err(|e| eframe::Error::AppCreation(e.into()))?;

    // Register Phosphor icon font.
    let mut fonts = egui::FontDefinitions::default();
    egui_phosphor::add_to_fonts(&mut fonts, Variant::Regular);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([cfg.window_width, cfg.window_height])
            .with_min_inner_size([480.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Resume Gate",
        options,
        Box::new(move |cc| {
            cc.egui_ctx.set_fonts(fonts);
            let mut model = AppModel::new(store, urls);
            if let Some(err) = storage_error {
                model.storage_unavailable(&dir, &err);
            }
            Ok(Box::new(ResumeGateApp::new(model)))
        }),
    )
}
