// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Session gate: maps the persisted session record onto [`SessionState`].

use std::sync::Arc;

use log::{info, warn};

use crate::models::session::{SessionEvent, SessionState};
use crate::storage::{KeyValueStore, SESSION_KEY, StoreError};

/// Reads and writes the single session record.
///
/// The stored value is trusted without verification; this gate is a
/// presentation convenience, not a security boundary.
#[derive(Clone)]
pub struct SessionGate {
    store: Arc<dyn KeyValueStore>,
}

impl SessionGate {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// True iff a session record exists right now.
    pub fn is_authenticated(&self) -> bool {
        self.state().is_logged_in()
    }

    /// Current state derived from storage. A read failure counts as logged out.
    pub fn state(&self) -> SessionState {
        match self.store.get(SESSION_KEY) {
            Ok(record) => SessionState::from_record(record),
            Err(err) => {
                warn!("failed to read session record: {err}");
                SessionState::LoggedOut
            }
        }
    }

    /// Persist a session for `email`. Call only after credentials were validated.
    pub fn login(&self, email: &str) -> Result<SessionState, StoreError> {
        self.store.set(SESSION_KEY, email)?;
        info!("session started for {email}");
        Ok(self.state().apply(SessionEvent::LoginSucceeded {
            email: email.to_string(),
        }))
    }

    /// Remove the session record.
    pub fn logout(&self) -> Result<SessionState, StoreError> {
        self.store.delete(SESSION_KEY)?;
        info!("session ended");
        Ok(self.state().apply(SessionEvent::LoggedOut))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn gate() -> (SessionGate, Arc<MemoryStore>) {
        let store = Arc::new(MemoryStore::new());
        (SessionGate::new(store.clone()), store)
    }

    #[test]
    fn starts_logged_out_without_record() {
        let (gate, _) = gate();
        assert!(!gate.is_authenticated());
        assert_eq!(gate.state(), SessionState::LoggedOut);
    }

    #[test]
    fn existing_record_means_logged_in() {
        let (gate, store) = gate();
        store.set(SESSION_KEY, "forged@anything.io").unwrap();
        assert!(gate.is_authenticated());
        assert_eq!(gate.state().email(), Some("forged@anything.io"));
    }

    #[test]
    fn login_then_logout_round_trip() {
        let (gate, store) = gate();

        let state = gate.login("intern@demo.com").unwrap();
        assert_eq!(state.email(), Some("intern@demo.com"));
        assert!(gate.is_authenticated());
        assert_eq!(
            store.get(SESSION_KEY).unwrap().as_deref(),
            Some("intern@demo.com")
        );

        let state = gate.logout().unwrap();
        assert_eq!(state, SessionState::LoggedOut);
        assert!(!gate.is_authenticated());
        assert_eq!(store.get(SESSION_KEY).unwrap(), None);
    }

    #[test]
    fn second_login_overwrites_single_record() {
        let (gate, store) = gate();
        gate.login("a@demo.com").unwrap();
        gate.login("b@demo.com").unwrap();
        assert_eq!(gate.state().email(), Some("b@demo.com"));
        assert_eq!(store.key_count(), 1);
    }
}
