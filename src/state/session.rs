//! Session store: current user, bearer token, and their persistence.
//!
//! INVARIANT
//! =========
//! `token` and `user` are both present or both absent. Hydration only
//! accepts persisted state when both slots exist and the user record
//! parses; anything else yields an empty session.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::api::HttpApi;
use crate::net::types::User;
use crate::util::storage::{BrowserStorage, StorageBackend};

/// Persisted slot holding the raw bearer token.
pub const TOKEN_KEY: &str = "auth_token";
/// Persisted slot holding the serialized user record.
pub const USER_KEY: &str = "user";

/// The browser-backed session used by the running application.
pub type Session = SessionStore<BrowserStorage>;

/// Authentication state with storage-backed persistence.
#[derive(Clone, Debug)]
pub struct SessionStore<S: StorageBackend> {
    storage: S,
    token: Option<String>,
    user: Option<User>,
    loading: bool,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(BrowserStorage)
    }
}

impl<S: StorageBackend> SessionStore<S> {
    /// Build a store and hydrate it from persisted state.
    pub fn new(storage: S) -> Self {
        let mut store = Self {
            storage,
            token: None,
            user: None,
            loading: true,
        };
        store.hydrate();
        store.loading = false;
        store
    }

    /// Re-read persisted state. Corrupt or partial data clears the
    /// persisted slots and leaves the session empty; never errors.
    pub fn hydrate(&mut self) {
        let token = self.storage.get(TOKEN_KEY);
        let user = self.storage.get(USER_KEY);

        match (token, user) {
            (Some(token), Some(user_json)) => {
                if let Ok(user) = serde_json::from_str::<User>(&user_json) {
                    self.token = Some(token);
                    self.user = Some(user);
                } else {
                    self.clear_persisted();
                    self.token = None;
                    self.user = None;
                }
            }
            (None, None) => {
                self.token = None;
                self.user = None;
            }
            // One slot without the other is corrupt state.
            _ => {
                self.clear_persisted();
                self.token = None;
                self.user = None;
            }
        }
    }

    /// Persist and set both fields. The token comes from the verification
    /// exchange and is trusted as-is.
    pub fn login(&mut self, token: String, user: User) {
        self.storage.set(TOKEN_KEY, &token);
        if let Ok(json) = serde_json::to_string(&user) {
            self.storage.set(USER_KEY, &json);
        }
        self.token = Some(token);
        self.user = Some(user);
    }

    /// Best-effort remote invalidation, then unconditional local clear.
    /// No token means no network call; local logout is never blocked by
    /// network state.
    pub async fn logout(&mut self) {
        if let Some(token) = self.token.as_deref() {
            HttpApi.logout(token).await;
        }
        self.clear();
    }

    /// Drop the session locally, persisted slots included.
    pub fn clear(&mut self) {
        self.clear_persisted();
        self.token = None;
        self.user = None;
    }

    fn clear_persisted(&self) {
        self.storage.remove(TOKEN_KEY);
        self.storage.remove(USER_KEY);
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some() && self.user.is_some()
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    #[must_use]
    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    #[must_use]
    pub fn storage(&self) -> &S {
        &self.storage
    }
}
