//! App-wide yewdux store slices.
//!
//! # Design
//! - Keep shared UI state in one store to avoid ad-hoc contexts.
//! - Use small, focused slices so reducers stay predictable.
//! - Every login/logout bumps the session epoch; async work started under an older
//!   epoch must not write back.

use crate::core::auth::Session;
use crate::core::http::ApiError;
use crate::features::catalog::state::CatalogState;
use crate::features::favorites::state::{
    FavoriteIntent, FavoritesState, ToggleRejected, begin_toggle, commit_toggle, rollback_toggle,
};
use crate::features::movies::state::MoviesState;
use crate::features::profile::state::ProfileState;
use crate::models::{Toast, ToastKind, UserProfile};
use yewdux::prelude::Dispatch;
use yewdux::store::Store;

/// Toasts kept on screen at once; older ones are dropped first.
pub const MAX_TOASTS: usize = 4;
/// Toast shown when the server rejects the session.
pub const SESSION_EXPIRED: &str = "Your session has expired. Please log in again.";

/// Global application store for shared state.
#[derive(Clone, Debug, PartialEq, Store, Default)]
pub struct AppStore {
    /// Signed-in session and its epoch.
    pub session: SessionSlice,
    /// Movie list state.
    pub movies: MoviesState,
    /// Genre and director collections.
    pub catalog: CatalogState,
    /// Favorite toggle lifecycle.
    pub favorites: FavoritesState,
    /// Profile view/edit state.
    pub profile: ProfileState,
    /// Toasts.
    pub ui: UiState,
}

/// Session slice.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct SessionSlice {
    /// Active session, if any.
    pub session: Option<Session>,
    /// Bumped on every login/logout.
    pub epoch: u64,
}

/// Transient UI feedback.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct UiState {
    /// Visible toasts, oldest first.
    pub toasts: Vec<Toast>,
    /// Last issued toast id.
    pub last_toast_id: u64,
}

/// How a failed API call was handled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FailureOutcome {
    /// Nothing to report (no session was held).
    Silent,
    /// A toast was shown.
    Notified,
    /// The server rejected the session and it was torn down.
    SessionEnded,
}

/// Dispatcher for the global store.
#[must_use]
pub fn app_dispatch() -> Dispatch<AppStore> {
    Dispatch::new()
}

/// Install a session and start a fresh epoch.
pub fn begin_session(store: &mut AppStore, session: Session) {
    reset_data(store);
    store.session.session = Some(session);
    store.session.epoch += 1;
}

/// Drop the session and every slice derived from it.
pub fn end_session(store: &mut AppStore) {
    reset_data(store);
    store.session.session = None;
    store.session.epoch += 1;
}

fn reset_data(store: &mut AppStore) {
    store.movies = MoviesState::default();
    store.catalog = CatalogState::default();
    store.favorites = FavoritesState::default();
    store.profile = ProfileState::default();
}

/// Whether async work started at `epoch` may still write to the store.
#[must_use]
pub const fn is_current(store: &AppStore, epoch: u64) -> bool {
    store.session.epoch == epoch
}

/// Whether a session is held.
#[must_use]
pub const fn is_authenticated(store: &AppStore) -> bool {
    store.session.session.is_some()
}

/// Signed-in user's profile.
#[must_use]
pub fn current_user(store: &AppStore) -> Option<&UserProfile> {
    store.session.session.as_ref().map(|session| &session.user)
}

/// Bearer token of the active session.
#[must_use]
pub fn current_token(store: &AppStore) -> Option<&str> {
    store
        .session
        .session
        .as_ref()
        .map(|session| session.token.as_str())
}

/// Replace the signed-in user's profile, keeping the token.
///
/// Returns `false` when no session is held.
pub fn replace_user(store: &mut AppStore, user: UserProfile) -> bool {
    match store.session.session.as_mut() {
        Some(session) => {
            session.user = user;
            true
        }
        None => false,
    }
}

/// Show a toast, dropping the oldest beyond [`MAX_TOASTS`].
pub fn push_toast(store: &mut AppStore, kind: ToastKind, message: impl Into<String>) -> u64 {
    store.ui.last_toast_id += 1;
    let id = store.ui.last_toast_id;
    store.ui.toasts.push(Toast {
        id,
        message: message.into(),
        kind,
    });
    if store.ui.toasts.len() > MAX_TOASTS {
        let drain = store.ui.toasts.len() - MAX_TOASTS;
        store.ui.toasts.drain(0..drain);
    }
    id
}

/// Remove a toast by id.
pub fn dismiss_toast(store: &mut AppStore, id: u64) {
    store.ui.toasts.retain(|toast| toast.id != id);
}

/// Route an API failure: missing sessions are ignored, auth failures end the
/// session, anything else becomes an error toast prefixed with `context`.
pub fn apply_api_failure(store: &mut AppStore, context: &str, err: &ApiError) -> FailureOutcome {
    if err.is_silent() {
        return FailureOutcome::Silent;
    }
    if err.is_auth_failure() {
        let had_session = is_authenticated(store);
        end_session(store);
        if had_session {
            push_toast(store, ToastKind::Error, SESSION_EXPIRED);
        }
        return FailureOutcome::SessionEnded;
    }
    push_toast(store, ToastKind::Error, format!("{context}: {err}"));
    FailureOutcome::Notified
}

/// Start a favorite toggle against the session user's favorites.
///
/// # Errors
/// Returns [`ToggleRejected`] without a session or while another toggle is pending.
pub fn begin_favorite_toggle(
    store: &mut AppStore,
    movie_id: &str,
) -> Result<FavoriteIntent, ToggleRejected> {
    let Some(session) = store.session.session.as_ref() else {
        return Err(ToggleRejected::NoSession);
    };
    begin_toggle(&mut store.favorites, &session.user.fav_movies, movie_id)
}

/// Commit the pending toggle, adopting the server's favorites when returned.
pub fn commit_favorite_toggle(store: &mut AppStore, returned: Option<UserProfile>) -> bool {
    let Some(session) = store.session.session.as_mut() else {
        return false;
    };
    commit_toggle(
        &mut store.favorites,
        &mut session.user.fav_movies,
        returned.map(|user| user.fav_movies),
    )
}

/// Roll back the pending toggle and keep the error for display.
pub fn rollback_favorite_toggle(store: &mut AppStore, error: impl Into<String>) -> bool {
    let Some(session) = store.session.session.as_mut() else {
        return false;
    };
    rollback_toggle(&mut store.favorites, &mut session.user.fav_movies, error)
}
