#![forbid(unsafe_code)]
#![warn(
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]
//! Shared HTTP DTOs for the Bunbuster movie API.
//!
//! These types mirror the wire format of the remote REST service exactly
//! (`_id`, snake_case date fields, camelCase envelopes). The UI converts them
//! into view-models in one place so the rest of the client never sees the raw
//! shapes.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

/// Sentinel text the movie list endpoint answers with when a filter matches nothing.
pub const NO_MOVIES_FOUND: &str = "No movies found";

/// Error document returned by the API on non-2xx responses.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorBody {
    /// Human-readable failure description, when the server supplied one.
    #[serde(default)]
    pub message: Option<String>,
}

/// Plain `{message}` envelope used for notices such as "no results".
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessageBody {
    /// Notice text.
    pub message: String,
}

/// Lightweight `{_id, name}` reference embedded in movie records.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NamedRef {
    /// Referenced record id.
    #[serde(rename = "_id", default)]
    pub id: String,
    /// Display name of the referenced record.
    #[serde(default)]
    pub name: String,
}

/// Raw movie record as served by `/movies` and `/users/:username/favMoviesAll`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MovieRecord {
    /// Movie id.
    #[serde(rename = "_id")]
    pub id: String,
    /// Movie title.
    pub title: String,
    /// Release year.
    #[serde(default)]
    pub year: Option<u16>,
    /// Genres; older records carry a single object instead of a list.
    #[serde(default, deserialize_with = "one_or_many")]
    pub genre: Vec<NamedRef>,
    /// Directors; older records carry a single object instead of a list.
    #[serde(default, deserialize_with = "one_or_many")]
    pub director: Vec<NamedRef>,
    /// IMDb rating.
    #[serde(default)]
    pub imdb_rating: Option<f32>,
    /// Running time in minutes.
    #[serde(default)]
    pub duration: Option<u32>,
    /// Spoken language.
    #[serde(default)]
    pub language: Option<String>,
    /// Plot summary.
    #[serde(default)]
    pub description: Option<String>,
    /// Poster URL.
    #[serde(rename = "imagePath", default)]
    pub image_path: Option<String>,
    /// Whether the movie is featured.
    #[serde(default)]
    pub featured: bool,
}

/// Raw genre record from `/movies/genres/all`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GenreRecord {
    /// Genre id.
    #[serde(rename = "_id")]
    pub id: String,
    /// Genre name.
    pub name: String,
    /// Genre description.
    #[serde(default)]
    pub description: Option<String>,
}

/// Raw director record from `/movies/directors/all`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DirectorRecord {
    /// Director id.
    #[serde(rename = "_id")]
    pub id: String,
    /// Director name.
    pub name: String,
    /// Biography.
    #[serde(default)]
    pub bio: Option<String>,
    /// Birth date as an ISO-8601 date or timestamp.
    #[serde(default)]
    pub date_of_birth: Option<String>,
    /// Death date as an ISO-8601 date or timestamp.
    #[serde(default)]
    pub date_of_death: Option<String>,
}

/// Favorite movie reference stored on a user; either a bare id or a populated record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum MovieRef {
    /// Bare movie id.
    Id(String),
    /// Populated object carrying at least `_id`.
    Object {
        /// Movie id.
        #[serde(rename = "_id")]
        id: String,
    },
}

impl MovieRef {
    /// Movie id regardless of representation.
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::Id(id) | Self::Object { id } => id,
        }
    }
}

/// Raw user record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserRecord {
    /// User id.
    #[serde(rename = "_id", default)]
    pub id: String,
    /// Login name.
    pub username: String,
    /// Email address.
    #[serde(default)]
    pub email: String,
    /// Birthday as an ISO-8601 date or timestamp.
    #[serde(default)]
    pub birthday: Option<String>,
    /// Favorite movie references.
    #[serde(rename = "favMovies", default)]
    pub fav_movies: Vec<MovieRef>,
}

/// `POST /login` body. The server accepts a username or email under `access`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    /// Username or email.
    pub access: String,
    /// Plain-text password.
    pub password: String,
}

/// `POST /login` response. Both fields are optional on the wire and checked by the client.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginResponse {
    /// Authenticated user.
    #[serde(default)]
    pub user: Option<UserRecord>,
    /// Bearer token.
    #[serde(default)]
    pub token: Option<String>,
}

/// `POST /users` body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SignupRequest {
    /// Login name.
    pub username: String,
    /// Plain-text password.
    pub password: String,
    /// Email address.
    pub email: String,
    /// Birthday as `YYYY-MM-DD`.
    pub birthday: String,
}

/// `PUT /users/:username` body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdateRequest {
    /// New login name.
    pub username: String,
    /// New email address.
    pub email: String,
    /// New birthday as `YYYY-MM-DD`.
    pub birthday: String,
    /// Current password, sent only with a password change.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_password: Option<String>,
    /// Replacement password, sent only with a password change.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_password: Option<String>,
}

/// User payload returned by mutations, either wrapped as `{user}` or bare.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum UserResponse {
    /// `{ "user": { ... } }`.
    Wrapped {
        /// Updated user.
        user: UserRecord,
    },
    /// Bare user object.
    Bare(UserRecord),
}

impl UserResponse {
    /// Unwrap the user record.
    #[must_use]
    pub fn into_user(self) -> UserRecord {
        match self {
            Self::Wrapped { user } | Self::Bare(user) => user,
        }
    }
}

/// Paginated movie list envelope.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MoviePage {
    /// Movies on this page.
    pub data: Vec<MovieRecord>,
    /// Total number of pages for the current filter.
    pub total_pages: u32,
    /// One-based page index.
    #[serde(default = "first_page")]
    pub current_page: u32,
}

const fn first_page() -> u32 {
    1
}

/// Every shape the `/movies` endpoint answers with.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum MovieListResponse {
    /// `{data, totalPages, currentPage}`.
    Page(MoviePage),
    /// Flat list of movies.
    List(Vec<MovieRecord>),
    /// Single movie object.
    Single(Box<MovieRecord>),
    /// `{message}` notice such as [`NO_MOVIES_FOUND`].
    Notice(MessageBody),
}

/// `GET /users/:username/favMoviesAll` response.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct FavoriteMoviesResponse {
    /// Hydrated favorite movies.
    #[serde(rename = "favMovies", default)]
    pub fav_movies: Vec<MovieRecord>,
}

/// Parse an API date (`YYYY-MM-DD` or a full ISO-8601 timestamp) into a calendar date.
///
/// Returns `None` for empty or malformed values.
#[must_use]
pub fn parse_api_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    let date_part = trimmed.get(..10)?;
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}

fn one_or_many<'de, D>(deserializer: D) -> Result<Vec<NamedRef>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        Many(Vec<NamedRef>),
        One(NamedRef),
        Null,
    }

    Ok(match OneOrMany::deserialize(deserializer)? {
        OneOrMany::Many(items) => items,
        OneOrMany::One(item) => vec![item],
        OneOrMany::Null => Vec::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn movie_record_accepts_single_director_object() {
        let record: MovieRecord = serde_json::from_value(json!({
            "_id": "m1",
            "title": "Watership Down",
            "director": {"_id": "d1", "name": "Martin Rosen"},
            "genre": [{"_id": "g1", "name": "Animation"}],
        }))
        .expect("movie should decode");
        assert_eq!(record.director.len(), 1);
        assert_eq!(record.director[0].name, "Martin Rosen");
        assert_eq!(record.genre[0].id, "g1");
        assert!(!record.featured);
    }

    #[test]
    fn movie_record_tolerates_null_references() {
        let record: MovieRecord = serde_json::from_value(json!({
            "_id": "m1",
            "title": "Harvey",
            "director": null,
        }))
        .expect("movie should decode");
        assert!(record.director.is_empty());
        assert!(record.genre.is_empty());
    }

    #[test]
    fn movie_list_response_distinguishes_shapes() {
        let page: MovieListResponse = serde_json::from_value(json!({
            "data": [{"_id": "m1", "title": "A"}],
            "totalPages": 3,
            "currentPage": 2,
        }))
        .expect("page");
        assert!(matches!(page, MovieListResponse::Page(ref p) if p.total_pages == 3 && p.current_page == 2));

        let list: MovieListResponse =
            serde_json::from_value(json!([{"_id": "m1", "title": "A"}])).expect("list");
        assert!(matches!(list, MovieListResponse::List(ref items) if items.len() == 1));

        let notice: MovieListResponse =
            serde_json::from_value(json!({"message": NO_MOVIES_FOUND})).expect("notice");
        assert!(matches!(notice, MovieListResponse::Notice(ref body) if body.message == NO_MOVIES_FOUND));
    }

    #[test]
    fn user_response_unwraps_both_envelopes() {
        let wrapped: UserResponse =
            serde_json::from_value(json!({"user": {"username": "bunny", "favMovies": ["m1"]}}))
                .expect("wrapped");
        let bare: UserResponse =
            serde_json::from_value(json!({"username": "bunny", "favMovies": [{"_id": "m1"}]}))
                .expect("bare");
        assert_eq!(wrapped.into_user().fav_movies[0].id(), "m1");
        assert_eq!(bare.into_user().fav_movies[0].id(), "m1");
    }

    #[test]
    fn profile_update_omits_password_fields_when_unset() {
        let body = ProfileUpdateRequest {
            username: "bunny".into(),
            email: "bunny@example.com".into(),
            birthday: "1990-04-01".into(),
            current_password: None,
            new_password: None,
        };
        let value = serde_json::to_value(&body).expect("serialize");
        assert!(value.get("currentPassword").is_none());
        assert!(value.get("newPassword").is_none());
    }

    #[test]
    fn parse_api_date_handles_timestamps_and_garbage() {
        assert_eq!(
            parse_api_date("1946-12-18T00:00:00.000Z"),
            NaiveDate::from_ymd_opt(1946, 12, 18)
        );
        assert_eq!(parse_api_date("1990-04-01"), NaiveDate::from_ymd_opt(1990, 4, 1));
        assert_eq!(parse_api_date(""), None);
        assert_eq!(parse_api_date("not a date"), None);
    }
}
