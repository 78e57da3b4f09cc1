//! Profile view/edit slice.
//!
//! # Design
//! - The session user is the saved profile; this slice only holds the draft.
//! - Every field is validated on submit, not just the ones the user touched.
//! - Password fields are cleared after every save attempt.

use crate::core::http::ApiError;
use crate::core::logic::format_input_date;
use crate::core::validation::{Field, FieldErrors, REQUIRED_ERROR, validate_field};
use crate::models::{Movie, UserProfile};
use bunbuster_api_models::ProfileUpdateRequest;
use chrono::NaiveDate;

/// Shown after a successful save.
pub const PROFILE_UPDATED: &str = "Profile updated successfully!";
/// Shown when a save fails without a server message.
pub const PROFILE_UPDATE_FAILED: &str = "There was an issue with updating your profile.";
/// Shown when a save never reached the server.
pub const PROFILE_UPDATE_NETWORK_FAILED: &str = "Error updating profile. Please try again.";
/// Shown when deletion fails without a server message.
pub const PROFILE_DELETE_FAILED: &str = "Failed to delete the profile. Please try again.";
/// How long the save banner stays visible.
pub const MESSAGE_TIMEOUT_MS: u32 = 7_000;

/// Editable copy of the profile.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct ProfileForm {
    /// Login name.
    pub username: String,
    /// Email address.
    pub email: String,
    /// Birthday as `YYYY-MM-DD`.
    pub birthday: String,
    /// Current password; only sent with a password change.
    pub current_password: String,
    /// Replacement password; only sent with a password change.
    pub new_password: String,
}

impl ProfileForm {
    /// Draft seeded from the saved profile.
    #[must_use]
    pub fn from_profile(profile: &UserProfile) -> Self {
        Self {
            username: profile.username.clone(),
            email: profile.email.clone(),
            birthday: format_input_date(profile.birthday),
            current_password: String::new(),
            new_password: String::new(),
        }
    }

    fn value(&self, field: Field) -> &str {
        match field {
            Field::Username => &self.username,
            Field::Email => &self.email,
            Field::Birthday => &self.birthday,
            Field::CurrentPassword => &self.current_password,
            Field::Password | Field::NewPassword => &self.new_password,
        }
    }

    fn value_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Username => &mut self.username,
            Field::Email => &mut self.email,
            Field::Birthday => &mut self.birthday,
            Field::CurrentPassword => &mut self.current_password,
            Field::Password | Field::NewPassword => &mut self.new_password,
        }
    }

    /// Whether the user started a password change.
    #[must_use]
    pub fn wants_password_change(&self) -> bool {
        !self.current_password.is_empty() || !self.new_password.is_empty()
    }

    /// Request body for `PUT /users/:username`.
    #[must_use]
    pub fn to_update_request(&self) -> ProfileUpdateRequest {
        let change = self.wants_password_change();
        ProfileUpdateRequest {
            username: self.username.trim().to_string(),
            email: self.email.trim().to_string(),
            birthday: self.birthday.trim().to_string(),
            current_password: change.then(|| self.current_password.clone()),
            new_password: change.then(|| self.new_password.clone()),
        }
    }
}

/// Validate every field of the draft.
#[must_use]
pub fn validate_profile(form: &ProfileForm, today: NaiveDate) -> FieldErrors {
    let mut errors = FieldErrors::default();
    for field in [Field::Username, Field::Email, Field::Birthday] {
        errors.check(field, form.value(field), today);
    }
    validate_password_pair(form, &mut errors, today);
    errors
}

fn validate_password_pair(form: &ProfileForm, errors: &mut FieldErrors, today: NaiveDate) {
    if !form.wants_password_change() {
        errors.set(Field::CurrentPassword, None);
        errors.set(Field::NewPassword, None);
        return;
    }
    errors.set(
        Field::CurrentPassword,
        form.current_password.is_empty().then_some(REQUIRED_ERROR),
    );
    let new_error = if form.new_password.is_empty() {
        Some(REQUIRED_ERROR)
    } else {
        validate_field(Field::NewPassword, &form.new_password, today)
    };
    errors.set(Field::NewPassword, new_error);
}

/// Save banner.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProfileMessage {
    /// Save succeeded.
    Success(String),
    /// Save or delete failed.
    Error(String),
}

/// Profile slice.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct ProfileState {
    /// Whether the edit form is open.
    pub editing: bool,
    /// Whether the password change fields are shown.
    pub show_password_fields: bool,
    /// Whether password inputs render as plain text.
    pub show_passwords: bool,
    /// Draft values.
    pub form: ProfileForm,
    /// Inline validation errors.
    pub errors: FieldErrors,
    /// Whether a save is in flight.
    pub saving: bool,
    /// Last save/delete banner.
    pub message: Option<ProfileMessage>,
    /// Whether the delete confirmation is open.
    pub confirm_delete: bool,
    /// Hydrated favorite movies; `None` until fetched.
    pub favorite_movies: Option<Vec<Movie>>,
}

/// Open the edit form seeded from the saved profile.
pub fn start_editing(state: &mut ProfileState, profile: &UserProfile) {
    state.editing = true;
    state.form = ProfileForm::from_profile(profile);
    state.errors = FieldErrors::default();
    state.message = None;
}

/// Discard the draft and restore the saved values.
pub fn cancel_editing(state: &mut ProfileState, profile: &UserProfile) {
    state.editing = false;
    state.show_password_fields = false;
    state.form = ProfileForm::from_profile(profile);
    state.errors = FieldErrors::default();
}

/// Show or hide the password change pair; hiding discards it.
pub fn toggle_password_fields(state: &mut ProfileState) {
    state.show_password_fields = !state.show_password_fields;
    if !state.show_password_fields {
        state.form.current_password.clear();
        state.form.new_password.clear();
        state.errors.set(Field::CurrentPassword, None);
        state.errors.set(Field::NewPassword, None);
    }
}

/// Switch password inputs between masked and plain text.
pub const fn toggle_show_passwords(state: &mut ProfileState) {
    state.show_passwords = !state.show_passwords;
}

/// Record an input event and re-validate the field.
pub fn update_field(state: &mut ProfileState, field: Field, value: String, today: NaiveDate) {
    *state.form.value_mut(field) = value;
    match field {
        Field::CurrentPassword | Field::NewPassword | Field::Password => {
            validate_password_pair(&state.form, &mut state.errors, today);
        }
        _ => state.errors.check(field, state.form.value(field), today),
    }
}

/// Validate the whole draft and, when clean, mark the save as started.
///
/// Returns the request body to send, or `None` when submission is blocked.
pub fn begin_save(state: &mut ProfileState, today: NaiveDate) -> Option<ProfileUpdateRequest> {
    if state.saving {
        return None;
    }
    state.errors = validate_profile(&state.form, today);
    if !state.errors.is_empty() {
        return None;
    }
    state.saving = true;
    state.message = None;
    Some(state.form.to_update_request())
}

/// Apply the outcome of a save.
///
/// On success the form is reseeded from the updated profile and edit mode closes.
pub fn finish_save(state: &mut ProfileState, result: Result<&UserProfile, &ApiError>) {
    state.saving = false;
    state.form.current_password.clear();
    state.form.new_password.clear();
    match result {
        Ok(profile) => {
            state.editing = false;
            state.show_password_fields = false;
            state.form = ProfileForm::from_profile(profile);
            state.message = Some(ProfileMessage::Success(PROFILE_UPDATED.to_string()));
        }
        Err(err) => {
            state.message = Some(ProfileMessage::Error(save_failure_message(err)));
        }
    }
}

/// Message for a failed save.
#[must_use]
pub fn save_failure_message(err: &ApiError) -> String {
    match err {
        ApiError::Http { message, .. } if !message.trim().is_empty() => message.clone(),
        ApiError::Network(_) => PROFILE_UPDATE_NETWORK_FAILED.to_string(),
        _ => PROFILE_UPDATE_FAILED.to_string(),
    }
}

/// Message for a failed account deletion.
#[must_use]
pub fn delete_failure_message(err: &ApiError) -> String {
    match err {
        ApiError::Http { message, .. } if !message.trim().is_empty() => message.clone(),
        _ => PROFILE_DELETE_FAILED.to_string(),
    }
}

/// Clear the save banner.
pub fn clear_message(state: &mut ProfileState) {
    state.message = None;
}

/// Replace the hydrated favorites.
pub fn set_favorite_movies(state: &mut ProfileState, movies: Vec<Movie>) {
    state.favorite_movies = Some(movies);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::validation::{BIRTHDAY_FUTURE_ERROR, PASSWORD_ERROR, USERNAME_ERROR};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).expect("date")
    }

    fn profile() -> UserProfile {
        UserProfile {
            id: "u1".into(),
            username: "bunny".into(),
            email: "bunny@example.com".into(),
            birthday: NaiveDate::from_ymd_opt(1990, 4, 1),
            fav_movies: Default::default(),
        }
    }

    fn editing() -> ProfileState {
        let mut state = ProfileState::default();
        start_editing(&mut state, &profile());
        state
    }

    #[test]
    fn draft_is_seeded_from_profile() {
        let state = editing();
        assert!(state.editing);
        assert_eq!(state.form.birthday, "1990-04-01");
        assert_eq!(state.form.username, "bunny");
    }

    #[test]
    fn future_birthday_blocks_submission() {
        let mut state = editing();
        update_field(&mut state, Field::Birthday, "2999-01-01".into(), today());
        assert_eq!(state.errors.get(Field::Birthday), Some(BIRTHDAY_FUTURE_ERROR));
        assert_eq!(begin_save(&mut state, today()), None);
        assert!(!state.saving);
    }

    #[test]
    fn submit_validates_untouched_fields() {
        let mut state = ProfileState {
            editing: true,
            form: ProfileForm {
                username: "bun".into(),
                email: "bunny@example.com".into(),
                birthday: "1990-04-01".into(),
                ..ProfileForm::default()
            },
            ..ProfileState::default()
        };
        assert!(begin_save(&mut state, today()).is_none());
        assert_eq!(state.errors.get(Field::Username), Some(USERNAME_ERROR));
    }

    #[test]
    fn password_pair_requires_both_fields() {
        let mut state = editing();
        update_field(&mut state, Field::NewPassword, "Abc123!@".into(), today());
        assert_eq!(state.errors.get(Field::CurrentPassword), Some(REQUIRED_ERROR));
        update_field(&mut state, Field::CurrentPassword, "Old123!@".into(), today());
        assert!(state.errors.is_empty());
        update_field(&mut state, Field::NewPassword, "weak".into(), today());
        assert_eq!(state.errors.get(Field::NewPassword), Some(PASSWORD_ERROR));
        update_field(&mut state, Field::NewPassword, String::new(), today());
        assert_eq!(state.errors.get(Field::NewPassword), Some(REQUIRED_ERROR));
        update_field(&mut state, Field::CurrentPassword, String::new(), today());
        assert!(state.errors.is_empty());
    }

    #[test]
    fn clean_submit_builds_request() {
        let mut state = editing();
        update_field(&mut state, Field::Email, "new@example.com".into(), today());
        let request = begin_save(&mut state, today()).expect("request");
        assert!(state.saving);
        assert_eq!(request.email, "new@example.com");
        assert_eq!(request.current_password, None);
        assert_eq!(begin_save(&mut state, today()), None);
    }

    #[test]
    fn password_change_is_sent_together() {
        let mut state = editing();
        update_field(&mut state, Field::CurrentPassword, "Old123!@".into(), today());
        update_field(&mut state, Field::NewPassword, "New123!@".into(), today());
        let request = begin_save(&mut state, today()).expect("request");
        assert_eq!(request.current_password.as_deref(), Some("Old123!@"));
        assert_eq!(request.new_password.as_deref(), Some("New123!@"));
    }

    #[test]
    fn successful_save_closes_editor_and_clears_passwords() {
        let mut state = editing();
        update_field(&mut state, Field::CurrentPassword, "Old123!@".into(), today());
        update_field(&mut state, Field::NewPassword, "New123!@".into(), today());
        begin_save(&mut state, today()).expect("request");
        let mut updated = profile();
        updated.email = "new@example.com".into();
        finish_save(&mut state, Ok(&updated));
        assert!(!state.editing);
        assert!(!state.saving);
        assert!(state.form.current_password.is_empty());
        assert_eq!(state.form.email, "new@example.com");
        assert_eq!(
            state.message,
            Some(ProfileMessage::Success(PROFILE_UPDATED.into()))
        );
    }

    #[test]
    fn failed_save_keeps_editor_and_reports() {
        let mut state = editing();
        update_field(&mut state, Field::CurrentPassword, "Old123!@".into(), today());
        update_field(&mut state, Field::NewPassword, "New123!@".into(), today());
        begin_save(&mut state, today()).expect("request");
        let err = ApiError::Http {
            status: 400,
            message: "Current password is incorrect".into(),
        };
        finish_save(&mut state, Err(&err));
        assert!(state.editing);
        assert!(state.form.new_password.is_empty());
        assert_eq!(
            state.message,
            Some(ProfileMessage::Error("Current password is incorrect".into()))
        );
        assert_eq!(
            save_failure_message(&ApiError::Decode("x".into())),
            PROFILE_UPDATE_FAILED
        );
        assert_eq!(
            save_failure_message(&ApiError::Network("offline".into())),
            PROFILE_UPDATE_NETWORK_FAILED
        );
    }

    #[test]
    fn cancel_restores_saved_values() {
        let mut state = editing();
        update_field(&mut state, Field::Username, "bu".into(), today());
        cancel_editing(&mut state, &profile());
        assert!(!state.editing);
        assert_eq!(state.form.username, "bunny");
        assert!(state.errors.is_empty());
    }

    #[test]
    fn delete_failure_falls_back_to_default_text() {
        assert_eq!(
            delete_failure_message(&ApiError::Network("offline".into())),
            PROFILE_DELETE_FAILED
        );
        assert_eq!(
            delete_failure_message(&ApiError::Http {
                status: 404,
                message: "User not found".into()
            }),
            "User not found"
        );
    }

    #[test]
    fn hiding_password_fields_discards_the_pair() {
        let mut state = ProfileState::default();
        start_editing(&mut state, &profile());
        toggle_password_fields(&mut state);
        update_field(&mut state, Field::CurrentPassword, "Old123!@".into(), today());
        assert_eq!(state.errors.get(Field::NewPassword), Some(REQUIRED_ERROR));
        toggle_password_fields(&mut state);
        assert!(!state.form.wants_password_change());
        assert!(state.errors.is_empty());
        toggle_show_passwords(&mut state);
        assert!(state.show_passwords);
    }
}
