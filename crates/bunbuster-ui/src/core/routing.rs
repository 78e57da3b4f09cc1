//! Route table and session guard.
//!
//! # Design
//! - Routes are declared once and shared by the router and the guard.
//! - The guard is a pure function of the route and session presence.

use yew_router::prelude::*;

/// Client-side routes.
#[derive(Clone, Routable, PartialEq, Eq, Debug)]
pub enum Route {
    /// Movie list with filters and pagination.
    #[at("/")]
    Movies,
    /// Login form.
    #[at("/login")]
    Login,
    /// Signup form.
    #[at("/signup")]
    Signup,
    /// Single movie.
    #[at("/movies/:movie_id")]
    MovieDetail {
        /// Movie id.
        movie_id: String,
    },
    /// Director list.
    #[at("/movies/directors")]
    Directors,
    /// Single director, addressed by URL-encoded name.
    #[at("/movies/directors/:director_name")]
    DirectorDetail {
        /// Director name as it appears in the path.
        director_name: String,
    },
    /// Genre list.
    #[at("/movies/genres")]
    Genres,
    /// Single genre, addressed by URL-encoded name.
    #[at("/movies/genres/:genre_name")]
    GenreDetail {
        /// Genre name as it appears in the path.
        genre_name: String,
    },
    /// Profile view and edit form.
    #[at("/users/:username")]
    Profile {
        /// Profile owner.
        username: String,
    },
    /// Fallback for unknown paths.
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// Whether the route requires a session.
    #[must_use]
    pub const fn is_protected(&self) -> bool {
        !matches!(self, Self::Login | Self::Signup | Self::NotFound)
    }

    /// Whether the route is one of the sign-in entry points.
    #[must_use]
    pub const fn is_auth_entry(&self) -> bool {
        matches!(self, Self::Login | Self::Signup)
    }
}

/// Detail route for a genre, URL-encoding its name.
#[must_use]
pub fn genre_route(name: &str) -> Route {
    Route::GenreDetail {
        genre_name: urlencoding::encode(name).into_owned(),
    }
}

/// Detail route for a director, URL-encoding its name.
#[must_use]
pub fn director_route(name: &str) -> Route {
    Route::DirectorDetail {
        director_name: urlencoding::encode(name).into_owned(),
    }
}

/// Outcome of [`guard`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteDecision {
    /// Render the requested view.
    Render,
    /// No session: send the caller to `/login`.
    RedirectToLogin,
    /// Already signed in: send the caller to `/`.
    RedirectToRoot,
}

/// Decide whether a route renders or redirects for the given session presence.
#[must_use]
pub const fn guard(route: &Route, authenticated: bool) -> RouteDecision {
    if route.is_protected() && !authenticated {
        RouteDecision::RedirectToLogin
    } else if route.is_auth_entry() && authenticated {
        RouteDecision::RedirectToRoot
    } else {
        RouteDecision::Render
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn protected_routes_need_a_session() {
        let protected = [
            Route::Movies,
            Route::MovieDetail {
                movie_id: "m1".into(),
            },
            Route::Directors,
            Route::DirectorDetail {
                director_name: "Martin Rosen".into(),
            },
            Route::Genres,
            Route::GenreDetail {
                genre_name: "Drama".into(),
            },
            Route::Profile {
                username: "bunny".into(),
            },
        ];
        for route in protected {
            assert_eq!(guard(&route, false), RouteDecision::RedirectToLogin);
            assert_eq!(guard(&route, true), RouteDecision::Render);
        }
    }

    #[test]
    fn auth_entry_points_bounce_signed_in_users() {
        assert_eq!(guard(&Route::Login, false), RouteDecision::Render);
        assert_eq!(guard(&Route::Signup, false), RouteDecision::Render);
        assert_eq!(guard(&Route::Login, true), RouteDecision::RedirectToRoot);
        assert_eq!(guard(&Route::Signup, true), RouteDecision::RedirectToRoot);
    }

    #[test]
    fn not_found_is_public() {
        assert_eq!(guard(&Route::NotFound, false), RouteDecision::Render);
        assert_eq!(guard(&Route::NotFound, true), RouteDecision::Render);
    }

    #[test]
    fn paths_render_from_variants() {
        assert_eq!(Route::Movies.to_path(), "/");
        assert_eq!(Route::Directors.to_path(), "/movies/directors");
        assert_eq!(
            Route::Profile {
                username: "bunny".into()
            }
            .to_path(),
            "/users/bunny"
        );
    }

    #[test]
    fn static_segments_win_over_movie_ids() {
        assert_eq!(Route::recognize("/movies/directors"), Some(Route::Directors));
        assert_eq!(Route::recognize("/movies/genres"), Some(Route::Genres));
        assert_eq!(
            Route::recognize("/movies/abc123"),
            Some(Route::MovieDetail {
                movie_id: "abc123".into()
            })
        );
    }

    #[test]
    fn name_routes_are_encoded() {
        assert_eq!(
            director_route("Martin Rosen").to_path(),
            "/movies/directors/Martin%20Rosen"
        );
        assert_eq!(
            genre_route("Sci-Fi & Fantasy"),
            Route::GenreDetail {
                genre_name: "Sci-Fi%20%26%20Fantasy".into()
            }
        );
    }
}
