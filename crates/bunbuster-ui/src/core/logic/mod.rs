//! Pure UI helpers extracted from components for non-wasm testing.

use chrono::NaiveDate;
use std::borrow::Cow;

/// Text shown for a missing date.
pub const DATE_NOT_SET: &str = "Not set";
/// Text shown while a detail view waits for its collection.
pub const LOADING_TEXT: &str = "Loading...";
/// Text shown for an empty list view.
pub const EMPTY_LIST_TEXT: &str = "List is loading or empty";

/// Resolution of a detail route against an already-fetched collection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DetailState<T> {
    /// The collection has not been fetched yet.
    Loading,
    /// A matching entry exists.
    Found(T),
    /// The collection is loaded and holds no match.
    NotFound,
}

impl<T> DetailState<T> {
    /// Whether a match was found.
    #[must_use]
    pub const fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }
}

/// Scan a collection for the first entry matching `predicate`.
///
/// `None` means the collection was never fetched and yields [`DetailState::Loading`].
#[must_use]
pub fn resolve_detail<T, F>(collection: Option<&[T]>, predicate: F) -> DetailState<T>
where
    T: Clone,
    F: Fn(&T) -> bool,
{
    let Some(items) = collection else {
        return DetailState::Loading;
    };
    items
        .iter()
        .find(|item| predicate(item))
        .cloned()
        .map_or(DetailState::NotFound, DetailState::Found)
}

/// Decode a URL path segment, keeping the raw text when it is not valid UTF-8 once decoded.
#[must_use]
pub fn decode_path_segment(raw: &str) -> Cow<'_, str> {
    urlencoding::decode(raw).unwrap_or(Cow::Borrowed(raw))
}

/// API path for a user resource.
#[must_use]
pub fn user_path(username: &str) -> String {
    format!("/users/{}", urlencoding::encode(username))
}

/// API path for one favorite of a user.
#[must_use]
pub fn favorite_path(username: &str, movie_id: &str) -> String {
    format!("{}/{}", user_path(username), urlencoding::encode(movie_id))
}

/// API path for a user's hydrated favorites.
#[must_use]
pub fn favorite_movies_path(username: &str) -> String {
    format!("{}/favMoviesAll", user_path(username))
}

/// Display form `DD-MM-YYYY`, or [`DATE_NOT_SET`].
#[must_use]
pub fn format_display_date(date: Option<NaiveDate>) -> String {
    date.map_or_else(
        || DATE_NOT_SET.to_string(),
        |value| value.format("%d-%m-%Y").to_string(),
    )
}

/// Input form `YYYY-MM-DD`, or an empty string.
#[must_use]
pub fn format_input_date(date: Option<NaiveDate>) -> String {
    date.map(|value| value.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

/// Parse the `YYYY-MM-DD` value of a date input.
#[must_use]
pub fn parse_input_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

/// Running time as `N min`, or `-`.
#[must_use]
pub fn format_duration(minutes: Option<u32>) -> String {
    minutes.map_or_else(|| "-".to_string(), |value| format!("{value} min"))
}

/// Rating with one decimal, or `-`.
#[must_use]
pub fn format_rating(rating: Option<f32>) -> String {
    rating.map_or_else(|| "-".to_string(), |value| format!("{value:.1}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_detail_distinguishes_loading_and_missing() {
        let names = vec!["Drama".to_string(), "Comedy".to_string()];
        assert_eq!(
            resolve_detail::<String, _>(None, |_| true),
            DetailState::Loading
        );
        assert_eq!(
            resolve_detail(Some(names.as_slice()), |name| name == "Comedy"),
            DetailState::Found("Comedy".to_string())
        );
        assert_eq!(
            resolve_detail(Some(names.as_slice()), |name| name == "Horror"),
            DetailState::NotFound
        );
        assert_eq!(
            resolve_detail::<String, _>(Some(&[][..]), |_| true),
            DetailState::NotFound
        );
    }

    #[test]
    fn path_segments_decode() {
        assert_eq!(decode_path_segment("Martin%20Rosen"), "Martin Rosen");
        assert_eq!(decode_path_segment("Plain"), "Plain");
        assert_eq!(decode_path_segment("%FF"), "%FF");
    }

    #[test]
    fn user_paths_are_encoded() {
        assert_eq!(user_path("bunny"), "/users/bunny");
        assert_eq!(user_path("bun ny"), "/users/bun%20ny");
        assert_eq!(favorite_path("bunny", "m1"), "/users/bunny/m1");
        assert_eq!(favorite_movies_path("bunny"), "/users/bunny/favMoviesAll");
    }

    #[test]
    fn dates_format_for_display_and_input() {
        let date = NaiveDate::from_ymd_opt(1990, 4, 1);
        assert_eq!(format_display_date(date), "01-04-1990");
        assert_eq!(format_display_date(None), DATE_NOT_SET);
        assert_eq!(format_input_date(date), "1990-04-01");
        assert_eq!(format_input_date(None), "");
        assert_eq!(parse_input_date(" 1990-04-01 "), date);
        assert_eq!(parse_input_date("01-04-1990"), None);
    }

    #[test]
    fn numeric_fields_have_placeholders() {
        assert_eq!(format_duration(Some(92)), "92 min");
        assert_eq!(format_duration(None), "-");
        assert_eq!(format_rating(Some(7.6)), "7.6");
        assert_eq!(format_rating(None), "-");
    }
}
