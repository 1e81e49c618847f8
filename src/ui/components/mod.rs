// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Reusable egui components structured for MVU-style updates.

pub mod login;
pub mod profile;
pub mod reset;
pub mod resume_file;
pub mod toggle;

pub use toggle::toggle_switch;
