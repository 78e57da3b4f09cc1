//! Durable session storage backed by the browser's local storage.

use crate::core::auth::{
    Session, SessionError, SessionStorage, clear_session, persist_session, persist_user,
    restore_session,
};
use crate::models::UserProfile;
use gloo::console;
use gloo::storage::{LocalStorage, Storage};

/// [`SessionStorage`] over `window.localStorage`, storing raw strings.
pub(crate) struct BrowserStorage;

impl SessionStorage for BrowserStorage {
    fn get(&self, key: &'static str) -> Option<String> {
        LocalStorage::raw().get_item(key).ok().flatten()
    }

    fn set(&self, key: &'static str, value: &str) -> Result<(), SessionError> {
        LocalStorage::raw()
            .set_item(key, value)
            .map_err(|err| SessionError::Write {
                key,
                detail: format!("{err:?}"),
            })
    }

    fn remove(&self, key: &'static str) {
        if let Err(err) = LocalStorage::raw().remove_item(key) {
            log_storage_error("remove", key, &format!("{err:?}"));
        }
    }
}

pub(crate) fn load_session() -> Option<Session> {
    restore_session(&BrowserStorage)
}

pub(crate) fn save_session(session: &Session) {
    if let Err(err) = persist_session(&BrowserStorage, session) {
        log_storage_error("persist", "session", &err.to_string());
    }
}

pub(crate) fn save_user(user: &UserProfile) {
    if let Err(err) = persist_user(&BrowserStorage, user) {
        log_storage_error("persist", "user", &err.to_string());
    }
}

pub(crate) fn forget_session() {
    clear_session(&BrowserStorage);
}

fn log_storage_error(operation: &'static str, key: &'static str, detail: &str) {
    console::error!("storage operation failed", operation, key, detail);
}
