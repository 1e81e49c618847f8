// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Domain layer: pure data types shared between UI and logic.

pub mod attachment;
pub mod credentials;
pub mod profile;
pub mod session;
