// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Pure validation for the login, sign-up and password-reset forms.
//!
//! Nothing here touches storage; the caller persists a session only after
//! [`validate_login`] succeeds.

use std::sync::LazyLock;

use regex::Regex;

use crate::models::credentials::{DEMO_CREDENTIAL, MIN_PASSWORD_LEN};

/// Reasons a form submission is rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("Please enter a valid email address!")]
    InvalidFormat,
    #[error("Password must be at least 6 characters long!")]
    WeakPassword,
    #[error("Passwords do not match!")]
    PasswordMismatch,
    #[error("Invalid email or password!")]
    BadCredentials,
    #[error("Please enter your email.")]
    EmptyEmail,
}

impl AuthError {
    /// Wording used inside the password-reset modal.
    pub fn reset_message(&self) -> String {
        match self {
            Self::InvalidFormat => "Please enter a valid email address.".to_string(),
            other => other.to_string(),
        }
    }
}

/// One run of characters that are neither `@` nor ECMAScript whitespace.
///
/// Written out instead of `\s`: Rust's `\s` is Unicode `White_Space`, which
/// includes U+0085 and excludes U+FEFF.
const EMAIL_PART: &str = r"[^\t\n\x0B\x0C\r \x{a0}\x{1680}\x{2000}-\x{200a}\x{2028}\x{2029}\x{202f}\x{205f}\x{3000}\x{feff}@]+";

static EMAIL_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"^{EMAIL_PART}@{EMAIL_PART}\.{EMAIL_PART}$"))
        .expect("email pattern is a valid regex")
});

/// Permissive email shape check: `local@domain.tld`.
///
/// Exactly one `@`, a non-empty local part, and a domain with a `.` that has
/// text on both sides. No whitespace anywhere. This is a shape check, not an
/// address grammar.
pub fn is_valid_email(s: &str) -> bool {
    EMAIL_SHAPE.is_match(s)
}

fn check_format_and_length(email: &str, password: &str) -> Result<(), AuthError> {
    if !is_valid_email(email) {
        return Err(AuthError::InvalidFormat);
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(AuthError::WeakPassword);
    }
    Ok(())
}

/// Validate a login attempt against the demo credential.
pub fn validate_login(email: &str, password: &str) -> Result<(), AuthError> {
    check_format_and_length(email, password)?;
    if DEMO_CREDENTIAL.matches(email, password) {
        Ok(())
    } else {
        Err(AuthError::BadCredentials)
    }
}

/// Validate the sign-up form. Success creates no account.
pub fn validate_signup(email: &str, password: &str, confirm: &str) -> Result<(), AuthError> {
    check_format_and_length(email, password)?;
    if password != confirm {
        return Err(AuthError::PasswordMismatch);
    }
    Ok(())
}

/// Validate the password-reset email. Success sends nothing.
pub fn validate_reset_request(email: &str) -> Result<(), AuthError> {
    if email.trim().is_empty() {
        return Err(AuthError::EmptyEmail);
    }
    if !is_valid_email(email) {
        return Err(AuthError::InvalidFormat);
    }
    Ok(())
}
