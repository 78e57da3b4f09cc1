//! Genre and director collections.

use crate::core::logic::{DetailState, decode_path_segment, resolve_detail};
use crate::models::{Director, Genre};

/// Catalog slice; `None` means the collection has not been fetched.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct CatalogState {
    /// All genres.
    pub genres: Option<Vec<Genre>>,
    /// All directors.
    pub directors: Option<Vec<Director>>,
}

/// Replace the genre collection.
pub fn set_genres(state: &mut CatalogState, genres: Vec<Genre>) {
    state.genres = Some(genres);
}

/// Replace the director collection.
pub fn set_directors(state: &mut CatalogState, directors: Vec<Director>) {
    state.directors = Some(directors);
}

/// Mark a failed fetch as loaded-but-empty so detail views stop waiting.
pub fn settle_genres(state: &mut CatalogState) {
    state.genres.get_or_insert_with(Vec::new);
}

/// Director counterpart of [`settle_genres`].
pub fn settle_directors(state: &mut CatalogState) {
    state.directors.get_or_insert_with(Vec::new);
}

/// Resolve a genre route parameter (URL-encoded name).
#[must_use]
pub fn select_genre(state: &CatalogState, raw_name: &str) -> DetailState<Genre> {
    let name = decode_path_segment(raw_name);
    resolve_detail(state.genres.as_deref(), |genre| genre.name == name)
}

/// Resolve a director route parameter (URL-encoded name).
#[must_use]
pub fn select_director(state: &CatalogState, raw_name: &str) -> DetailState<Director> {
    let name = decode_path_segment(raw_name);
    resolve_detail(state.directors.as_deref(), |director| director.name == name)
}
