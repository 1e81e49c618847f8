// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! The single demo credential accepted by the login gate.

/// Email/password pair compared by exact string equality.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Credential {
    pub email: &'static str,
    pub password: &'static str,
}

impl Credential {
    pub fn matches(&self, email: &str, password: &str) -> bool {
        self.email == email && self.password == password
    }
}

/// The only account that can log in.
pub const DEMO_CREDENTIAL: Credential = Credential {
    email: "intern@demo.com",
    password: "pass123",
};

/// Minimum password length, counted in characters.
pub const MIN_PASSWORD_LEN: usize = 6;
