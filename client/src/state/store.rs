//! Durable token + user persistence.
//!
//! SYSTEM CONTEXT
//! ==============
//! The token store is the only copy of the credentials that survives a page
//! reload. It writes two fixed keys: the raw token and the JSON-serialized
//! user. Browser builds go through `localStorage`; tests and server
//! rendering use an in-memory map.
//!
//! TRADE-OFFS
//! ==========
//! Storage failures are swallowed. A browser without `localStorage` simply
//! behaves as permanently logged out for that page load.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use crate::net::types::User;

pub const TOKEN_KEY: &str = "auth_token";
pub const USER_KEY: &str = "auth_user";

/// String key/value persistence with `localStorage` semantics.
pub trait KeyValueStorage: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// `window.localStorage`, looked up on every access.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl KeyValueStorage for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&self, key: &str, value: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.set_item(key, value);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
        }
    }

    fn remove(&self, key: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.remove_item(key);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
        }
    }
}

#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner).get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_owned(), value.to_owned());
    }

    fn remove(&self, key: &str) {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner).remove(key);
    }
}

/// Whatever the store currently holds. Either half may be missing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StoredAuth {
    pub user: Option<User>,
    pub token: Option<String>,
}

/// Credential persistence over a [`KeyValueStorage`].
#[derive(Clone)]
pub struct TokenStore {
    storage: Arc<dyn KeyValueStorage>,
}

impl TokenStore {
    pub fn new(storage: Arc<dyn KeyValueStorage>) -> Self {
        Self { storage }
    }

    #[must_use]
    pub fn browser() -> Self {
        Self::new(Arc::new(BrowserStorage))
    }

    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStorage::new()))
    }

    /// Overwrite both values.
    pub fn save(&self, user: &User, token: &str) {
        let Ok(raw) = serde_json::to_string(user) else {
            return;
        };
        self.storage.set(USER_KEY, &raw);
        self.storage.set(TOKEN_KEY, token);
    }

    /// Current values. An unparseable user reads as absent.
    #[must_use]
    pub fn read(&self) -> StoredAuth {
        let user = self.storage.get(USER_KEY).and_then(|raw| serde_json::from_str(&raw).ok());
        let token = self.token();
        StoredAuth { user, token }
    }

    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.storage.get(TOKEN_KEY).filter(|t| !t.is_empty())
    }

    pub fn clear(&self) {
        self.storage.remove(TOKEN_KEY);
        self.storage.remove(USER_KEY);
    }
}

impl std::fmt::Debug for TokenStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenStore").finish_non_exhaustive()
    }
}
