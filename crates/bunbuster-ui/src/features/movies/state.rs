//! Movie list slice and pure state transformations for testing outside wasm.

use crate::core::logic::{DetailState, resolve_detail};
use crate::features::movies::logic::{MovieListOutcome, MovieQuery};
use crate::models::Movie;

/// Filter inputs for the movie list.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct MovieFilters {
    /// Title substring.
    pub title: String,
    /// Genre name.
    pub genre: String,
    /// Director name.
    pub director: String,
}

impl MovieFilters {
    /// Whether every filter is blank.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.title.trim().is_empty()
            && self.genre.trim().is_empty()
            && self.director.trim().is_empty()
    }
}

/// Pagination cursor returned by the paginated movie endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pagination {
    /// One-based current page.
    pub page: u32,
    /// Total pages for the active filters.
    pub total_pages: u32,
}

impl Pagination {
    /// Whether a later page exists.
    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// Whether an earlier page exists.
    #[must_use]
    pub const fn has_previous(&self) -> bool {
        self.page > 1
    }
}

/// Current movies slice stored in the app state.
#[derive(Clone, Debug, PartialEq)]
pub struct MoviesState {
    /// Movies on the current page.
    pub movies: Vec<Movie>,
    /// Whether at least one fetch completed.
    pub loaded: bool,
    /// Whether a fetch is in flight.
    pub loading: bool,
    /// Cursor for paginated responses; `None` for flat lists and empty results.
    pub pagination: Option<Pagination>,
    /// Active filters.
    pub filters: MovieFilters,
    /// Requested page.
    pub page: u32,
    /// Server notice shown instead of the list (for example "No movies found").
    pub notice: Option<String>,
    /// Ticket of the most recent fetch; older responses are dropped.
    pub latest_ticket: u64,
}

impl Default for MoviesState {
    fn default() -> Self {
        Self {
            movies: Vec::new(),
            loaded: false,
            loading: false,
            pagination: None,
            filters: MovieFilters::default(),
            page: 1,
            notice: None,
            latest_ticket: 0,
        }
    }
}

/// Query for the current filters and page.
#[must_use]
pub fn current_query(state: &MoviesState, limit: u32) -> MovieQuery {
    MovieQuery {
        page: state.page,
        limit,
        filters: state.filters.clone(),
    }
}

/// Start a fetch and return its ticket.
pub const fn begin_fetch(state: &mut MoviesState) -> u64 {
    state.latest_ticket += 1;
    state.loading = true;
    state.latest_ticket
}

/// Apply a fetch outcome if its ticket is still current.
///
/// Returns `false` when the response is stale and was dropped.
pub fn apply_outcome(state: &mut MoviesState, ticket: u64, outcome: MovieListOutcome) -> bool {
    if ticket != state.latest_ticket {
        return false;
    }
    state.loading = false;
    state.loaded = true;
    match outcome {
        MovieListOutcome::Paginated {
            movies,
            page,
            total_pages,
        } => {
            state.movies = movies;
            state.page = page.max(1);
            state.pagination = Some(Pagination {
                page: state.page,
                total_pages,
            });
            state.notice = None;
        }
        MovieListOutcome::List(movies) => {
            state.movies = movies;
            state.pagination = None;
            state.notice = None;
        }
        MovieListOutcome::Empty { message } => {
            state.movies.clear();
            state.pagination = None;
            state.notice = Some(message);
        }
    }
    true
}

/// Mark a fetch as failed, keeping the previous movies.
///
/// Returns `false` when the failure belongs to a stale fetch.
pub const fn fail_fetch(state: &mut MoviesState, ticket: u64) -> bool {
    if ticket != state.latest_ticket {
        return false;
    }
    state.loading = false;
    true
}

/// Replace the filters and go back to the first page.
pub fn set_filters(state: &mut MoviesState, filters: MovieFilters) {
    state.filters = filters;
    state.page = 1;
}

/// Advance to the next page when the cursor allows it.
pub fn next_page(state: &mut MoviesState) -> bool {
    match state.pagination {
        Some(cursor) if cursor.has_next() => {
            state.page = cursor.page + 1;
            true
        }
        _ => false,
    }
}

/// Step back to the previous page when the cursor allows it.
pub fn previous_page(state: &mut MoviesState) -> bool {
    match state.pagination {
        Some(cursor) if cursor.has_previous() => {
            state.page = cursor.page - 1;
            true
        }
        _ => false,
    }
}

/// Resolve a movie detail route against the fetched page, then the hydrated favorites.
///
/// Favorites link to movies that may sit on another page. The answer stays
/// [`DetailState::Loading`] until the page itself has loaded.
#[must_use]
pub fn select_movie(
    state: &MoviesState,
    favorites: Option<&[Movie]>,
    movie_id: &str,
) -> DetailState<Movie> {
    let matches = |movie: &Movie| movie.id == movie_id;
    let on_page = resolve_detail(state.loaded.then_some(state.movies.as_slice()), matches);
    if on_page.is_found() {
        return on_page;
    }
    match resolve_detail(favorites, matches) {
        DetailState::Found(movie) => DetailState::Found(movie),
        DetailState::Loading | DetailState::NotFound => on_page,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(id: &str) -> Movie {
        Movie {
            id: id.to_string(),
            title: format!("Movie {id}"),
            year: None,
            genre: Vec::new(),
            director: Vec::new(),
            rating: None,
            duration: None,
            language: String::new(),
            description: String::new(),
            image_path: None,
            featured: false,
        }
    }

    fn page_of(count: usize, page: u32, total_pages: u32) -> MovieListOutcome {
        MovieListOutcome::Paginated {
            movies: (0..count).map(|idx| movie(&format!("m{idx}"))).collect(),
            page,
            total_pages,
        }
    }

    #[test]
    fn paginated_outcome_sets_cursor() {
        let mut state = MoviesState::default();
        let ticket = begin_fetch(&mut state);
        assert!(state.loading);
        assert!(apply_outcome(&mut state, ticket, page_of(9, 1, 3)));
        assert_eq!(state.movies.len(), 9);
        let cursor = state.pagination.expect("cursor");
        assert_eq!(cursor, Pagination { page: 1, total_pages: 3 });
        assert!(cursor.has_next());
        assert!(!cursor.has_previous());
        assert!(!state.loading);
    }

    #[test]
    fn stale_ticket_is_dropped() {
        let mut state = MoviesState::default();
        let old = begin_fetch(&mut state);
        let fresh = begin_fetch(&mut state);
        assert!(apply_outcome(&mut state, fresh, page_of(2, 1, 1)));
        assert!(!apply_outcome(&mut state, old, page_of(9, 1, 3)));
        assert_eq!(state.movies.len(), 2);
        assert!(!fail_fetch(&mut state, old));
    }

    #[test]
    fn empty_outcome_clears_movies_and_cursor() {
        let mut state = MoviesState::default();
        let ticket = begin_fetch(&mut state);
        apply_outcome(&mut state, ticket, page_of(3, 1, 2));
        let ticket = begin_fetch(&mut state);
        apply_outcome(
            &mut state,
            ticket,
            MovieListOutcome::Empty {
                message: "No movies found".into(),
            },
        );
        assert!(state.movies.is_empty());
        assert_eq!(state.pagination, None);
        assert_eq!(state.notice.as_deref(), Some("No movies found"));
    }

    #[test]
    fn failure_keeps_previous_movies() {
        let mut state = MoviesState::default();
        let ticket = begin_fetch(&mut state);
        apply_outcome(&mut state, ticket, MovieListOutcome::List(vec![movie("a")]));
        let ticket = begin_fetch(&mut state);
        assert!(fail_fetch(&mut state, ticket));
        assert_eq!(state.movies.len(), 1);
        assert!(!state.loading);
    }

    #[test]
    fn page_navigation_respects_cursor() {
        let mut state = MoviesState::default();
        assert!(!next_page(&mut state));
        let ticket = begin_fetch(&mut state);
        apply_outcome(&mut state, ticket, page_of(9, 2, 3));
        assert!(next_page(&mut state));
        assert_eq!(state.page, 3);
        let ticket = begin_fetch(&mut state);
        apply_outcome(&mut state, ticket, page_of(1, 3, 3));
        assert!(!next_page(&mut state));
        assert!(previous_page(&mut state));
        assert_eq!(state.page, 2);
    }

    #[test]
    fn filters_reset_to_first_page() {
        let mut state = MoviesState {
            page: 3,
            ..MoviesState::default()
        };
        set_filters(
            &mut state,
            MovieFilters {
                title: "down".into(),
                ..MovieFilters::default()
            },
        );
        assert_eq!(state.page, 1);
        let query = current_query(&state, 9);
        assert_eq!(query.page, 1);
        assert_eq!(query.limit, 9);
        assert_eq!(query.filters.title, "down");
    }

    #[test]
    fn movie_detail_resolution() {
        let mut state = MoviesState::default();
        assert_eq!(select_movie(&state, None, "a"), DetailState::Loading);
        let ticket = begin_fetch(&mut state);
        apply_outcome(&mut state, ticket, MovieListOutcome::List(vec![movie("a")]));
        assert!(select_movie(&state, None, "a").is_found());
        assert_eq!(select_movie(&state, None, "zzz"), DetailState::NotFound);
    }

    #[test]
    fn favorite_off_the_current_page_still_resolves() {
        let mut state = MoviesState::default();
        let ticket = begin_fetch(&mut state);
        apply_outcome(
            &mut state,
            ticket,
            MovieListOutcome::Paginated {
                movies: (0..9).map(|idx| movie(&format!("m{idx}"))).collect(),
                page: 1,
                total_pages: 3,
            },
        );
        let favorites = vec![movie("fav-on-page-3")];

        assert_eq!(
            select_movie(&state, Some(&favorites), "fav-on-page-3"),
            DetailState::Found(movie("fav-on-page-3"))
        );
        assert_eq!(
            select_movie(&state, Some(&favorites), "nowhere"),
            DetailState::NotFound
        );
        assert!(select_movie(&state, Some(&favorites), "m4").is_found());
    }

    #[test]
    fn favorite_match_wins_before_the_page_loads() {
        let state = MoviesState::default();
        let favorites = vec![movie("f1")];
        assert!(select_movie(&state, Some(&favorites), "f1").is_found());
        assert_eq!(select_movie(&state, Some(&favorites), "f2"), DetailState::Loading);
    }
}
