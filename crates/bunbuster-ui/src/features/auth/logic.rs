//! Login response handling.

use crate::core::auth::Session;
use crate::core::http::ApiError;
use crate::models::UserProfile;
use bunbuster_api_models::LoginResponse;

/// Failure text for a 2xx login response without both `user` and `token`.
pub const INVALID_LOGIN_PAYLOAD: &str = "Invalid user data returned from server.";
/// Fallback for a failed signup without a server message.
pub const SIGNUP_FAILED: &str = "Signup failed. Please try again.";

/// Turn a decoded login response into a session.
///
/// # Errors
/// Returns [`ApiError::Decode`] when the user or token is missing or blank.
pub fn session_from_login(response: LoginResponse) -> Result<Session, ApiError> {
    let (Some(user), Some(token)) = (response.user, response.token) else {
        return Err(ApiError::Decode(INVALID_LOGIN_PAYLOAD.to_string()));
    };
    Session::new(UserProfile::from(user), token)
        .ok_or_else(|| ApiError::Decode(INVALID_LOGIN_PAYLOAD.to_string()))
}

/// Message shown for a failed login.
#[must_use]
pub fn login_failure_message(err: &ApiError) -> String {
    match err {
        ApiError::Decode(message) if message == INVALID_LOGIN_PAYLOAD => message.clone(),
        ApiError::Http { message, .. } => message.clone(),
        ApiError::Network(_) | ApiError::Decode(_) | ApiError::NoSession => {
            "Something went wrong, please try again.".to_string()
        }
    }
}

/// Message shown for a failed signup.
#[must_use]
pub fn signup_failure_message(err: &ApiError) -> String {
    match err {
        ApiError::Http { message, .. } if !message.trim().is_empty() => message.clone(),
        _ => SIGNUP_FAILED.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn complete_response_becomes_session() {
        let response: LoginResponse = serde_json::from_value(json!({
            "user": {"_id": "u1", "username": "bunny", "favMovies": ["m1"]},
            "token": "jwt-abc",
        }))
        .expect("decode");
        let session = session_from_login(response).expect("session");
        assert_eq!(session.token, "jwt-abc");
        assert!(session.user.is_favorite("m1"));
    }

    #[test]
    fn partial_response_is_rejected() {
        let response: LoginResponse =
            serde_json::from_value(json!({"token": "jwt-abc"})).expect("decode");
        let err = session_from_login(response).expect_err("missing user");
        assert_eq!(err.to_string(), format!("unexpected response: {INVALID_LOGIN_PAYLOAD}"));
        assert_eq!(login_failure_message(&err), INVALID_LOGIN_PAYLOAD);

        let blank: LoginResponse = serde_json::from_value(json!({
            "user": {"username": "bunny"},
            "token": "",
        }))
        .expect("decode");
        assert!(session_from_login(blank).is_err());
    }

    #[test]
    fn http_failures_show_server_text() {
        let err =
            ApiError::from_response(400, "Bad Request", r#"{"message":"Incorrect password"}"#);
        assert_eq!(login_failure_message(&err), "Incorrect password");
        assert_eq!(
            login_failure_message(&ApiError::Network("offline".into())),
            "Something went wrong, please try again."
        );
    }

    #[test]
    fn signup_failures_prefer_server_text() {
        let err = ApiError::from_response(
            422,
            "Unprocessable Entity",
            r#"{"message":"Username already exists"}"#,
        );
        assert_eq!(signup_failure_message(&err), "Username already exists");
        assert_eq!(
            signup_failure_message(&ApiError::Network("offline".into())),
            SIGNUP_FAILED
        );
    }
}
