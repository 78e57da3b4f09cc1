//! Session primitives and durable session storage.
//!
//! # Design
//! - A session is the `{user, token}` pair; either both are held or neither is.
//! - Durable storage sits behind [`SessionStorage`] so the browser's local storage
//!   and the in-memory test double share one code path.
//! - A corrupt persisted user is treated as logged out and scrubbed.

use crate::models::UserProfile;
use std::cell::RefCell;
use std::collections::HashMap;
use thiserror::Error;

/// Storage key holding the JSON-serialized [`UserProfile`].
pub const USER_KEY: &str = "user";
/// Storage key holding the bearer token.
pub const TOKEN_KEY: &str = "token";

/// Authenticated caller: profile plus bearer token.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    /// Signed-in user's profile.
    pub user: UserProfile,
    /// Bearer token issued at login.
    pub token: String,
}

impl Session {
    /// Build a session, rejecting blank tokens.
    #[must_use]
    pub fn new(user: UserProfile, token: impl Into<String>) -> Option<Self> {
        let token = token.into();
        if token.trim().is_empty() || user.username.trim().is_empty() {
            return None;
        }
        Some(Self { user, token })
    }
}

/// Failures raised by durable storage backends.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SessionError {
    /// The backend refused a write.
    #[error("storage write failed for {key}: {detail}")]
    Write {
        /// Storage key being written.
        key: &'static str,
        /// Backend detail.
        detail: String,
    },
    /// The persisted user could not be encoded or decoded.
    #[error("stored user is not valid JSON: {0}")]
    Encoding(String),
}

/// Minimal string key/value store used to persist the session.
pub trait SessionStorage {
    /// Read a value.
    fn get(&self, key: &'static str) -> Option<String>;
    /// Write a value.
    ///
    /// # Errors
    /// Returns [`SessionError::Write`] when the backend rejects the value.
    fn set(&self, key: &'static str, value: &str) -> Result<(), SessionError>;
    /// Delete a value; missing keys are ignored.
    fn remove(&self, key: &'static str);
}

/// In-memory [`SessionStorage`] for tests and non-browser builds.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RefCell<HashMap<&'static str, String>>,
}

impl MemoryStorage {
    /// Empty storage.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether nothing is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl SessionStorage for MemoryStorage {
    fn get(&self, key: &'static str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &'static str, value: &str) -> Result<(), SessionError> {
        self.entries.borrow_mut().insert(key, value.to_string());
        Ok(())
    }

    fn remove(&self, key: &'static str) {
        self.entries.borrow_mut().remove(key);
    }
}

/// Persist both halves of the session.
///
/// # Errors
/// Returns [`SessionError`] when the user cannot be encoded or a write fails.
pub fn persist_session(
    storage: &dyn SessionStorage,
    session: &Session,
) -> Result<(), SessionError> {
    let user = serde_json::to_string(&session.user)
        .map_err(|err| SessionError::Encoding(err.to_string()))?;
    storage.set(USER_KEY, &user)?;
    storage.set(TOKEN_KEY, &session.token)
}

/// Persist an updated profile for the current session without touching the token.
///
/// # Errors
/// Returns [`SessionError`] when the user cannot be encoded or the write fails.
pub fn persist_user(storage: &dyn SessionStorage, user: &UserProfile) -> Result<(), SessionError> {
    let encoded =
        serde_json::to_string(user).map_err(|err| SessionError::Encoding(err.to_string()))?;
    storage.set(USER_KEY, &encoded)
}

/// Restore a session persisted by [`persist_session`].
///
/// Returns `None` when either half is missing. A user entry that fails to decode
/// clears both keys so the next load starts clean.
pub fn restore_session(storage: &dyn SessionStorage) -> Option<Session> {
    let token = storage.get(TOKEN_KEY)?;
    let raw_user = storage.get(USER_KEY)?;
    let Ok(user) = serde_json::from_str::<UserProfile>(&raw_user) else {
        clear_session(storage);
        return None;
    };
    Session::new(user, token)
}

/// Remove every persisted session key.
pub fn clear_session(storage: &dyn SessionStorage) {
    storage.remove(USER_KEY);
    storage.remove(TOKEN_KEY);
}
