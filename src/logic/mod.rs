// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Business logic: credential checks, the session gate, and attachment persistence.

pub mod attachment_store;
pub mod credentials;
pub mod object_url;
pub mod session;
