//! Auth-session state published to the UI.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards and user-aware components to coordinate login redirects
//! and identity-dependent rendering. The session manager keeps an
//! `RwSignal<AuthState>` in sync with every session change.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use super::session::Session;
use crate::net::types::{Role, User};

/// Authentication state tracking the current user and loading status.
///
/// `loading` stays set until the session has been hydrated from storage,
/// which only happens in the browser.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
}

impl AuthState {
    /// Initial state before the token store has been read.
    #[must_use]
    pub fn hydrating() -> Self {
        Self { user: None, loading: true }
    }

    #[must_use]
    pub fn from_session(session: &Session) -> Self {
        Self { user: session.user().cloned(), loading: false }
    }

    #[must_use]
    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().map(|u| u.role)
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role() == Some(Role::Admin)
    }

    #[must_use]
    pub fn is_member(&self) -> bool {
        self.role() == Some(Role::Member)
    }
}
