//! Movie list query building and response normalization.
//!
//! # Design
//! - Every `/movies` response shape collapses into one [`MovieListOutcome`].
//! - A `{message}` notice is an empty result, not a failure, even on a 404.

use crate::core::http::{ApiError, is_success};
use crate::features::movies::state::MovieFilters;
use crate::models::Movie;
use bunbuster_api_models::{MessageBody, MovieListResponse, NO_MOVIES_FOUND};
use std::fmt::Write;

/// Parameters for one `/movies` request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MovieQuery {
    /// One-based page.
    pub page: u32,
    /// Page size.
    pub limit: u32,
    /// Optional filters; blank values are omitted from the query.
    pub filters: MovieFilters,
}

/// Normalized result of a movie list fetch.
#[derive(Clone, Debug, PartialEq)]
pub enum MovieListOutcome {
    /// One page of a paginated listing.
    Paginated {
        /// Movies on the page.
        movies: Vec<Movie>,
        /// One-based page index.
        page: u32,
        /// Total pages.
        total_pages: u32,
    },
    /// Unpaginated listing.
    List(Vec<Movie>),
    /// The server reported no matches.
    Empty {
        /// Notice text from the server.
        message: String,
    },
}

impl From<MovieListResponse> for MovieListOutcome {
    fn from(value: MovieListResponse) -> Self {
        match value {
            MovieListResponse::Page(page) => Self::Paginated {
                movies: page.data.into_iter().map(Movie::from).collect(),
                page: page.current_page,
                total_pages: page.total_pages,
            },
            MovieListResponse::List(items) => {
                Self::List(items.into_iter().map(Movie::from).collect())
            }
            MovieListResponse::Single(item) => Self::List(vec![Movie::from(*item)]),
            MovieListResponse::Notice(body) => Self::empty(body),
        }
    }
}

impl MovieListOutcome {
    /// Empty result for a notice body; a blank notice reads as the standard sentinel.
    fn empty(body: MessageBody) -> Self {
        let message = if body.message.trim().is_empty() {
            NO_MOVIES_FOUND.to_string()
        } else {
            body.message
        };
        Self::Empty { message }
    }
}

/// Build the `/movies` path for a query.
#[must_use]
pub fn build_movies_path(query: &MovieQuery) -> String {
    let mut path = format!("/movies?page={}&limit={}", query.page, query.limit);
    for (key, value) in [
        ("title", &query.filters.title),
        ("genre", &query.filters.genre),
        ("director", &query.filters.director),
    ] {
        let value = value.trim();
        if !value.is_empty() {
            let _ = write!(path, "&{key}={}", urlencoding::encode(value));
        }
    }
    path
}

/// Normalize a raw `/movies` response.
///
/// # Errors
/// Returns [`ApiError::Http`] for failures other than a 404 notice and
/// [`ApiError::Decode`] when a 2xx body matches no known shape.
pub fn movie_list_outcome(
    status: u16,
    status_text: &str,
    body: &str,
) -> Result<MovieListOutcome, ApiError> {
    if status == 404
        && let Ok(notice) = serde_json::from_str::<MessageBody>(body)
    {
        return Ok(MovieListOutcome::empty(notice));
    }
    if !is_success(status) {
        return Err(ApiError::from_response(status, status_text, body));
    }
    serde_json::from_str::<MovieListResponse>(body)
        .map(MovieListOutcome::from)
        .map_err(|err| ApiError::Decode(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn query(filters: MovieFilters) -> MovieQuery {
        MovieQuery {
            page: 2,
            limit: 9,
            filters,
        }
    }

    #[test]
    fn path_includes_only_non_blank_filters() {
        assert_eq!(
            build_movies_path(&query(MovieFilters::default())),
            "/movies?page=2&limit=9"
        );
        let filters = MovieFilters {
            title: " Watership Down ".into(),
            genre: "  ".into(),
            director: "Martin Rosen".into(),
        };
        assert_eq!(
            build_movies_path(&query(filters)),
            "/movies?page=2&limit=9&title=Watership%20Down&director=Martin%20Rosen"
        );
    }

    #[test]
    fn paginated_body_maps_to_paginated_outcome() {
        let movies: Vec<_> = (0..9)
            .map(|idx| json!({"_id": format!("m{idx}"), "title": format!("Movie {idx}")}))
            .collect();
        let body = json!({"data": movies, "totalPages": 3, "currentPage": 1}).to_string();
        let outcome = movie_list_outcome(200, "OK", &body).expect("outcome");
        match outcome {
            MovieListOutcome::Paginated {
                movies,
                page,
                total_pages,
            } => {
                assert_eq!(movies.len(), 9);
                assert_eq!(page, 1);
                assert_eq!(total_pages, 3);
            }
            other => panic!("unexpected outcome {other:?}"),
        }
    }

    #[test]
    fn flat_and_single_bodies_map_to_lists() {
        let list = json!([{"_id": "a", "title": "A"}, {"_id": "b", "title": "B"}]).to_string();
        assert!(matches!(
            movie_list_outcome(200, "OK", &list),
            Ok(MovieListOutcome::List(ref movies)) if movies.len() == 2
        ));
        let single = json!({"_id": "a", "title": "A"}).to_string();
        assert!(matches!(
            movie_list_outcome(200, "OK", &single),
            Ok(MovieListOutcome::List(ref movies)) if movies.len() == 1
        ));
    }

    #[test]
    fn notices_are_empty_results_on_200_and_404() {
        let body = json!({"message": "No movies found"}).to_string();
        for status in [200, 404] {
            assert_eq!(
                movie_list_outcome(status, "", &body),
                Ok(MovieListOutcome::Empty {
                    message: "No movies found".into()
                })
            );
        }
    }

    #[test]
    fn blank_notice_falls_back_to_sentinel_text() {
        let body = json!({"message": "  "}).to_string();
        for status in [200, 404] {
            assert_eq!(
                movie_list_outcome(status, "", &body),
                Ok(MovieListOutcome::Empty {
                    message: NO_MOVIES_FOUND.into()
                })
            );
        }
    }

    #[test]
    fn other_failures_surface_as_errors() {
        let result = movie_list_outcome(500, "Internal Server Error", "");
        assert_eq!(
            result,
            Err(ApiError::Http {
                status: 500,
                message: "Error 500: Internal Server Error".into()
            })
        );
        assert!(matches!(
            movie_list_outcome(404, "Not Found", "<html></html>"),
            Err(ApiError::Http { status: 404, .. })
        ));
        assert!(matches!(
            movie_list_outcome(200, "OK", "42"),
            Err(ApiError::Decode(_))
        ));
    }
}
