//! In-memory session shared by the session manager and the API gateway.
//!
//! DESIGN
//! ======
//! `SessionCell` pairs the published in-memory session with the durable
//! [`TokenStore`] and is the only place either is written. Every login and
//! every clear bumps a generation counter. Async callers capture the
//! generation before awaiting and pass it back when applying a result, so a
//! response issued under an older session can never overwrite a newer one
//! (a late `auth/me` cannot resurrect a logged-out session, and a late 401
//! cannot log out a fresh login).
//!
//! The lock is never held across an `.await` and listeners run after it is
//! released.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use super::store::TokenStore;
use crate::net::types::{Role, User};

/// A user together with the bearer token issued for them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Credentials {
    pub user: User,
    pub token: String,
}

/// Who, if anyone, is signed in on this device.
///
/// User and token are set and cleared together.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    credentials: Option<Credentials>,
}

impl Session {
    #[must_use]
    pub fn signed_in(user: User, token: impl Into<String>) -> Self {
        Self { credentials: Some(Credentials { user, token: token.into() }) }
    }

    #[must_use]
    pub fn signed_out() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn user(&self) -> Option<&User> {
        self.credentials.as_ref().map(|c| &c.user)
    }

    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.credentials.as_ref().map(|c| c.token.as_str())
    }

    #[must_use]
    pub fn role(&self) -> Option<Role> {
        self.user().map(|u| u.role)
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.credentials.is_some()
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

pub type Listener = Arc<dyn Fn(&Session) + Send + Sync>;

#[derive(Default)]
struct CellState {
    session: Session,
    generation: u64,
    hydrated: bool,
    listeners: Vec<Listener>,
}

#[derive(Clone)]
pub struct SessionCell {
    state: Arc<Mutex<CellState>>,
    store: TokenStore,
}

impl SessionCell {
    #[must_use]
    pub fn new(store: TokenStore) -> Self {
        Self { state: Arc::new(Mutex::new(CellState::default())), store }
    }

    fn lock(&self) -> MutexGuard<'_, CellState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Run listeners outside the lock so they may read the cell again.
    fn publish(session: &Session, listeners: Vec<Listener>) {
        for listener in listeners {
            listener(session);
        }
    }

    #[must_use]
    pub fn store(&self) -> &TokenStore {
        &self.store
    }

    #[must_use]
    pub fn snapshot(&self) -> Session {
        self.lock().session.clone()
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.lock().generation
    }

    #[must_use]
    pub fn is_hydrated(&self) -> bool {
        self.lock().hydrated
    }

    pub fn subscribe(&self, listener: Listener) {
        self.lock().listeners.push(listener);
    }

    /// Load the session from the token store. Only the first call reads.
    ///
    /// A store holding just one half of the pair is treated as signed out
    /// and the leftover value is removed.
    pub fn hydrate(&self) -> Session {
        let (session, listeners) = {
            let mut state = self.lock();
            if state.hydrated {
                return state.session.clone();
            }
            let stored = self.store.read();
            state.session = match (stored.user, stored.token) {
                (Some(user), Some(token)) => Session::signed_in(user, token),
                (None, None) => Session::signed_out(),
                _ => {
                    self.store.clear();
                    Session::signed_out()
                }
            };
            state.hydrated = true;
            (state.session.clone(), state.listeners.clone())
        };
        Self::publish(&session, listeners);
        session
    }

    /// Start a new session, replacing any current one.
    ///
    /// A blank token is refused and leaves the current session as it was,
    /// since the store treats a blank token as absent.
    pub fn establish(&self, user: User, token: String) -> bool {
        if token.trim().is_empty() {
            return false;
        }
        let (session, listeners) = {
            let mut state = self.lock();
            self.store.save(&user, &token);
            state.session = Session::signed_in(user, token);
            state.generation += 1;
            state.hydrated = true;
            (state.session.clone(), state.listeners.clone())
        };
        Self::publish(&session, listeners);
        true
    }

    /// Swap in a refreshed user, keeping the token.
    ///
    /// Returns `false` without writing if the session changed since
    /// `generation` was captured or nobody is signed in.
    pub fn replace_user(&self, user: User, generation: u64) -> bool {
        let (session, listeners) = {
            let mut state = self.lock();
            if state.generation != generation {
                return false;
            }
            let Some(token) = state.session.token().map(str::to_owned) else {
                return false;
            };
            self.store.save(&user, &token);
            state.session = Session::signed_in(user, token);
            (state.session.clone(), state.listeners.clone())
        };
        Self::publish(&session, listeners);
        true
    }

    fn reset(&self, state: &mut CellState) -> (Session, Vec<Listener>) {
        self.store.clear();
        state.session = Session::signed_out();
        state.generation += 1;
        state.hydrated = true;
        (state.session.clone(), state.listeners.clone())
    }

    /// Drop the session unconditionally.
    pub fn clear(&self) {
        let (session, listeners) = self.reset(&mut self.lock());
        Self::publish(&session, listeners);
    }

    /// Drop the session only if it is still the one seen at `generation`.
    pub fn invalidate(&self, generation: u64) -> bool {
        let (session, listeners) = {
            let mut state = self.lock();
            if state.generation != generation {
                return false;
            }
            self.reset(&mut state)
        };
        Self::publish(&session, listeners);
        true
    }
}

impl std::fmt::Debug for SessionCell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.lock();
        f.debug_struct("SessionCell")
            .field("session", &state.session)
            .field("generation", &state.generation)
            .field("hydrated", &state.hydrated)
            .finish_non_exhaustive()
    }
}
