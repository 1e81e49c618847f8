// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Two-state session machine, independent of any storage backend.

/// Whether a user is currently logged in.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SessionState {
    #[default]
    LoggedOut,
    LoggedIn {
        email: String,
    },
}

/// Inputs that move the session between states.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionEvent {
    /// Credentials were validated for `email`.
    LoginSucceeded { email: String },
    /// The user asked to log out.
    LoggedOut,
}

impl SessionState {
    /// Derive the state from a stored session record.
    ///
    /// Any present value counts as logged in; the stored email is trusted as-is.
    pub fn from_record(record: Option<String>) -> Self {
        match record {
            Some(email) => Self::LoggedIn { email },
            None => Self::LoggedOut,
        }
    }

    /// Pure transition function.
    ///
    /// A second successful login replaces the email; logging out while logged
    /// out stays logged out.
    pub fn apply(self, event: SessionEvent) -> Self {
        match event {
            SessionEvent::LoginSucceeded { email } => Self::LoggedIn { email },
            SessionEvent::LoggedOut => Self::LoggedOut,
        }
    }

    pub fn is_logged_in(&self) -> bool {
        matches!(self, Self::LoggedIn { .. })
    }

    /// Email of the logged-in user.
    pub fn email(&self) -> Option<&str> {
        match self {
            Self::LoggedIn { email } => Some(email),
            Self::LoggedOut => None,
        }
    }
}
