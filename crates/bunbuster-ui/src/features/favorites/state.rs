//! Favorite toggling as a confirm-then-update state machine.
//!
//! # Design
//! - One toggle runs at a time; a second request while one is pending is rejected.
//! - Local membership only changes once the server acknowledges.
//! - A failed toggle restores the snapshot taken when it started.

use std::collections::BTreeSet;
use thiserror::Error;

/// Direction of a toggle, derived from current membership.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FavoriteIntent {
    /// Movie was absent: `PUT /users/:username/:movieId`.
    Add,
    /// Movie was present: `DELETE /users/:username/:movieId`.
    Remove,
}

/// Lifecycle of the most recent toggle.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum ToggleState {
    /// Nothing has been toggled yet.
    #[default]
    Idle,
    /// Waiting for the server.
    Pending {
        /// Movie being toggled.
        movie_id: String,
        /// Requested direction.
        intent: FavoriteIntent,
        /// Favorites before the toggle started.
        previous: BTreeSet<String>,
    },
    /// The server acknowledged the toggle.
    Committed {
        /// Movie that was toggled.
        movie_id: String,
        /// Applied direction.
        intent: FavoriteIntent,
    },
    /// The server refused the toggle and the snapshot was restored.
    RolledBack {
        /// Movie that was toggled.
        movie_id: String,
        /// Failure message.
        error: String,
    },
}

/// Reasons a toggle could not start.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ToggleRejected {
    /// Another toggle is still waiting for the server.
    #[error("a favorite update is already in progress")]
    AlreadyPending,
    /// Nobody is signed in.
    #[error("not signed in")]
    NoSession,
}

/// Favorites controller slice.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct FavoritesState {
    /// Current toggle lifecycle.
    pub toggle: ToggleState,
}

impl FavoritesState {
    /// Whether any toggle is waiting for the server.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        matches!(self.toggle, ToggleState::Pending { .. })
    }

    /// Whether the given movie is the one being toggled.
    #[must_use]
    pub fn is_pending_for(&self, movie_id: &str) -> bool {
        matches!(&self.toggle, ToggleState::Pending { movie_id: pending, .. } if pending == movie_id)
    }
}

/// Start a toggle for `movie_id` against the current favorites.
///
/// # Errors
/// Returns [`ToggleRejected::AlreadyPending`] while another toggle is in flight.
pub fn begin_toggle(
    state: &mut FavoritesState,
    favorites: &BTreeSet<String>,
    movie_id: &str,
) -> Result<FavoriteIntent, ToggleRejected> {
    if state.is_pending() {
        return Err(ToggleRejected::AlreadyPending);
    }
    let intent = if favorites.contains(movie_id) {
        FavoriteIntent::Remove
    } else {
        FavoriteIntent::Add
    };
    state.toggle = ToggleState::Pending {
        movie_id: movie_id.to_string(),
        intent,
        previous: favorites.clone(),
    };
    Ok(intent)
}

/// Apply the server's acknowledgement.
///
/// When the server returned the updated favorites they are adopted verbatim;
/// otherwise the pending intent is applied locally. Returns `false` when no
/// toggle was pending.
pub fn commit_toggle(
    state: &mut FavoritesState,
    favorites: &mut BTreeSet<String>,
    server_favorites: Option<BTreeSet<String>>,
) -> bool {
    if !state.is_pending() {
        return false;
    }
    let ToggleState::Pending {
        movie_id, intent, ..
    } = std::mem::take(&mut state.toggle)
    else {
        return false;
    };
    match server_favorites {
        Some(adopted) => *favorites = adopted,
        None => match intent {
            FavoriteIntent::Add => {
                favorites.insert(movie_id.clone());
            }
            FavoriteIntent::Remove => {
                favorites.remove(&movie_id);
            }
        },
    }
    state.toggle = ToggleState::Committed { movie_id, intent };
    true
}

/// Restore the snapshot after a failed toggle and record the error.
///
/// Returns `false` when no toggle was pending.
pub fn rollback_toggle(
    state: &mut FavoritesState,
    favorites: &mut BTreeSet<String>,
    error: impl Into<String>,
) -> bool {
    if !state.is_pending() {
        return false;
    }
    let ToggleState::Pending {
        movie_id, previous, ..
    } = std::mem::take(&mut state.toggle)
    else {
        return false;
    };
    *favorites = previous;
    state.toggle = ToggleState::RolledBack {
        movie_id,
        error: error.into(),
    };
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(ids: &[&str]) -> BTreeSet<String> {
        ids.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn intent_follows_membership() {
        let mut state = FavoritesState::default();
        assert_eq!(
            begin_toggle(&mut state, &set(&["a"]), "a"),
            Ok(FavoriteIntent::Remove)
        );
        let mut state = FavoritesState::default();
        assert_eq!(
            begin_toggle(&mut state, &set(&["a"]), "b"),
            Ok(FavoriteIntent::Add)
        );
        assert!(state.is_pending_for("b"));
        assert!(!state.is_pending_for("a"));
    }

    #[test]
    fn second_toggle_is_rejected_while_pending() {
        let mut state = FavoritesState::default();
        let favorites = set(&[]);
        begin_toggle(&mut state, &favorites, "a").expect("first toggle");
        assert_eq!(
            begin_toggle(&mut state, &favorites, "b"),
            Err(ToggleRejected::AlreadyPending)
        );
    }

    #[test]
    fn local_state_changes_only_on_commit() {
        let mut state = FavoritesState::default();
        let mut favorites = set(&[]);
        begin_toggle(&mut state, &favorites, "a").expect("toggle");
        assert!(!favorites.contains("a"));
        assert!(commit_toggle(&mut state, &mut favorites, None));
        assert!(favorites.contains("a"));
        assert_eq!(
            state.toggle,
            ToggleState::Committed {
                movie_id: "a".into(),
                intent: FavoriteIntent::Add
            }
        );
    }

    #[test]
    fn server_favorites_are_adopted() {
        let mut state = FavoritesState::default();
        let mut favorites = set(&["a"]);
        begin_toggle(&mut state, &favorites, "b").expect("toggle");
        commit_toggle(&mut state, &mut favorites, Some(set(&["b", "c"])));
        assert_eq!(favorites, set(&["b", "c"]));
    }

    #[test]
    fn failure_restores_snapshot() {
        let mut state = FavoritesState::default();
        let mut favorites = set(&["a"]);
        begin_toggle(&mut state, &favorites, "a").expect("toggle");
        favorites.clear();
        assert!(rollback_toggle(&mut state, &mut favorites, "Error 500"));
        assert_eq!(favorites, set(&["a"]));
        assert!(matches!(state.toggle, ToggleState::RolledBack { ref error, .. } if error == "Error 500"));
        assert!(!state.is_pending());
    }

    #[test]
    fn commit_and_rollback_without_pending_are_ignored() {
        let mut state = FavoritesState::default();
        let mut favorites = set(&["a"]);
        assert!(!commit_toggle(&mut state, &mut favorites, None));
        assert!(!rollback_toggle(&mut state, &mut favorites, "x"));
        assert_eq!(favorites, set(&["a"]));
        assert_eq!(state.toggle, ToggleState::Idle);
    }

    #[test]
    fn successful_toggles_flip_membership_by_parity() {
        for initial in [false, true] {
            for count in 0..6 {
                let mut state = FavoritesState::default();
                let mut favorites = if initial { set(&["m"]) } else { set(&[]) };
                for _ in 0..count {
                    begin_toggle(&mut state, &favorites, "m").expect("toggle");
                    commit_toggle(&mut state, &mut favorites, None);
                }
                assert_eq!(favorites.contains("m"), initial ^ (count % 2 == 1));
            }
        }
    }
}
