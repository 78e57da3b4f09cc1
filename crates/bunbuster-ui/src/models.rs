//! View-models rendered by the UI, converted from the raw API records.

use bunbuster_api_models::{
    DirectorRecord, GenreRecord, MovieRecord, NamedRef, UserRecord, parse_api_date,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Genre or director reference attached to a movie.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reference {
    /// Referenced id.
    pub id: String,
    /// Display name.
    pub name: String,
}

impl From<NamedRef> for Reference {
    fn from(value: NamedRef) -> Self {
        Self {
            id: value.id,
            name: value.name,
        }
    }
}

/// Movie card/detail view-model.
#[derive(Clone, Debug, PartialEq)]
pub struct Movie {
    /// Movie id.
    pub id: String,
    /// Title.
    pub title: String,
    /// Release year.
    pub year: Option<u16>,
    /// Genres.
    pub genre: Vec<Reference>,
    /// Directors.
    pub director: Vec<Reference>,
    /// IMDb rating.
    pub rating: Option<f32>,
    /// Running time in minutes.
    pub duration: Option<u32>,
    /// Spoken language.
    pub language: String,
    /// Plot summary.
    pub description: String,
    /// Poster URL.
    pub image_path: Option<String>,
    /// Featured flag.
    pub featured: bool,
}

impl Movie {
    /// Comma-joined genre names for cards.
    #[must_use]
    pub fn genre_names(&self) -> String {
        join_names(&self.genre, "No genre available")
    }

    /// Comma-joined director names for cards.
    #[must_use]
    pub fn director_names(&self) -> String {
        join_names(&self.director, "No director available")
    }
}

impl From<MovieRecord> for Movie {
    fn from(value: MovieRecord) -> Self {
        Self {
            id: value.id,
            title: value.title,
            year: value.year,
            genre: value.genre.into_iter().map(Reference::from).collect(),
            director: value.director.into_iter().map(Reference::from).collect(),
            rating: value.imdb_rating,
            duration: value.duration,
            language: value.language.unwrap_or_default(),
            description: value.description.unwrap_or_default(),
            image_path: value.image_path.filter(|path| !path.trim().is_empty()),
            featured: value.featured,
        }
    }
}

/// Genre view-model.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Genre {
    /// Genre id.
    pub id: String,
    /// Genre name.
    pub name: String,
    /// Description (empty when missing).
    pub description: String,
}

impl From<GenreRecord> for Genre {
    fn from(value: GenreRecord) -> Self {
        Self {
            id: value.id,
            name: value.name,
            description: value.description.unwrap_or_default(),
        }
    }
}

/// Director view-model.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Director {
    /// Director id.
    pub id: String,
    /// Director name.
    pub name: String,
    /// Biography (empty when missing).
    pub bio: String,
    /// Birth date.
    pub birth_date: Option<NaiveDate>,
    /// Death date, if deceased.
    pub death_date: Option<NaiveDate>,
}

impl From<DirectorRecord> for Director {
    fn from(value: DirectorRecord) -> Self {
        Self {
            id: value.id,
            name: value.name,
            bio: value.bio.unwrap_or_default(),
            birth_date: value.date_of_birth.as_deref().and_then(parse_api_date),
            death_date: value.date_of_death.as_deref().and_then(parse_api_date),
        }
    }
}

/// Authenticated user's profile. Persisted as JSON under the `user` storage key.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// User id.
    #[serde(default)]
    pub id: String,
    /// Login name.
    pub username: String,
    /// Email address.
    #[serde(default)]
    pub email: String,
    /// Birthday.
    #[serde(default)]
    pub birthday: Option<NaiveDate>,
    /// Favorite movie ids.
    #[serde(default)]
    pub fav_movies: BTreeSet<String>,
}

impl UserProfile {
    /// Whether the movie is among the user's favorites.
    #[must_use]
    pub fn is_favorite(&self, movie_id: &str) -> bool {
        self.fav_movies.contains(movie_id)
    }
}

impl From<UserRecord> for UserProfile {
    fn from(value: UserRecord) -> Self {
        Self {
            id: value.id,
            username: value.username,
            email: value.email,
            birthday: value.birthday.as_deref().and_then(parse_api_date),
            fav_movies: value
                .fav_movies
                .iter()
                .map(|entry| entry.id().to_string())
                .collect(),
        }
    }
}

/// Toast variants used across the UI.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    /// Informational toast.
    Info,
    /// Success toast.
    Success,
    /// Error toast.
    Error,
}

/// Toast message displayed in the toast host.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    /// Monotonic toast id.
    pub id: u64,
    /// Message body.
    pub message: String,
    /// Visual variant.
    pub kind: ToastKind,
}

fn join_names(refs: &[Reference], fallback: &str) -> String {
    if refs.is_empty() {
        return fallback.to_string();
    }
    refs.iter()
        .map(|reference| reference.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use bunbuster_api_models::MovieRef;

    fn record() -> MovieRecord {
        MovieRecord {
            id: "m1".into(),
            title: "Watership Down".into(),
            year: Some(1978),
            genre: vec![
                NamedRef {
                    id: "g1".into(),
                    name: "Animation".into(),
                },
                NamedRef {
                    id: "g2".into(),
                    name: "Adventure".into(),
                },
            ],
            director: Vec::new(),
            imdb_rating: Some(7.6),
            duration: Some(92),
            language: None,
            description: Some("Rabbits flee their warren.".into()),
            image_path: Some("  ".into()),
            featured: true,
        }
    }

    #[test]
    fn movie_conversion_joins_names_and_applies_fallbacks() {
        let movie = Movie::from(record());
        assert_eq!(movie.genre_names(), "Animation, Adventure");
        assert_eq!(movie.director_names(), "No director available");
        assert_eq!(movie.language, "");
        assert_eq!(movie.image_path, None);
        assert_eq!(movie.rating, Some(7.6));
    }

    #[test]
    fn director_dates_parse_from_timestamps() {
        let director = Director::from(DirectorRecord {
            id: "d1".into(),
            name: "Martin Rosen".into(),
            bio: None,
            date_of_birth: Some("1936-02-22T00:00:00.000Z".into()),
            date_of_death: None,
        });
        assert_eq!(director.birth_date, NaiveDate::from_ymd_opt(1936, 2, 22));
        assert_eq!(director.death_date, None);
        assert!(director.bio.is_empty());
    }

    #[test]
    fn user_profile_collects_favorite_ids() {
        let profile = UserProfile::from(UserRecord {
            id: "u1".into(),
            username: "bunny".into(),
            email: "bunny@example.com".into(),
            birthday: Some("1990-04-01".into()),
            fav_movies: vec![
                MovieRef::Id("m1".into()),
                MovieRef::Object { id: "m2".into() },
                MovieRef::Id("m1".into()),
            ],
        });
        assert_eq!(profile.fav_movies.len(), 2);
        assert!(profile.is_favorite("m2"));
        assert_eq!(profile.birthday, NaiveDate::from_ymd_opt(1990, 4, 1));
    }

    #[test]
    fn user_profile_survives_json_round_trip_for_storage() {
        let profile = UserProfile {
            id: "u1".into(),
            username: "bunny".into(),
            email: "bunny@example.com".into(),
            birthday: NaiveDate::from_ymd_opt(1990, 4, 1),
            fav_movies: ["m1".to_string()].into_iter().collect(),
        };
        let json = serde_json::to_string(&profile).expect("serialize");
        assert!(json.contains("favMovies"));
        let back: UserProfile = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, profile);
    }
}
