//! Favorite mutation response handling.

use crate::models::UserProfile;
use bunbuster_api_models::UserResponse;

/// Updated user carried by a favorite mutation response, if any.
///
/// The endpoints answer with the user (bare or wrapped in `{user}`) or with an
/// unrelated acknowledgement; anything that does not decode as a user yields `None`.
#[must_use]
pub fn returned_user(body: &str) -> Option<UserProfile> {
    serde_json::from_str::<UserResponse>(body)
        .ok()
        .map(|response| UserProfile::from(response.into_user()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn wrapped_and_bare_users_are_recognized() {
        let wrapped = json!({"user": {"username": "bunny", "favMovies": ["m1", "m2"]}}).to_string();
        let bare = json!({"username": "bunny", "favMovies": [{"_id": "m3"}]}).to_string();
        assert_eq!(returned_user(&wrapped).map(|user| user.fav_movies.len()), Some(2));
        assert!(returned_user(&bare).is_some_and(|user| user.is_favorite("m3")));
    }

    #[test]
    fn acknowledgements_are_ignored() {
        assert_eq!(returned_user(""), None);
        assert_eq!(returned_user(r#"{"message":"Movie added"}"#), None);
        assert_eq!(returned_user("Movie added"), None);
    }
}
