// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

mod app;
mod logic;
mod models;
mod mvu;
mod settings;
mod storage;
mod ui;
mod utils;

use log::error;

use crate::settings::AppConfig;

fn main() -> eframe::Result<()> {
    env_logger::init();

    let cfg = AppConfig::load().unwrap_or_else(|err| {
        error!("Invalid configuration, using defaults: {err:#}");
        AppConfig::default()
    });

    app::run(cfg)
}
