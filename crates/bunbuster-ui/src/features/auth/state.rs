//! Login and signup form state.

use crate::core::validation::{Field, FieldErrors};
use bunbuster_api_models::{LoginRequest, SignupRequest};
use chrono::NaiveDate;

/// Shown after a successful signup.
pub const SIGNUP_SUCCEEDED: &str = "Signup successful. Please log in.";

/// Login form draft.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct LoginForm {
    /// Username or email.
    pub username: String,
    /// Password.
    pub password: String,
    /// Inline validation errors.
    pub errors: FieldErrors,
    /// Whether a request is in flight.
    pub submitting: bool,
}

impl LoginForm {
    /// Record an input event and re-validate the field.
    pub fn update(&mut self, field: Field, value: String, today: NaiveDate) {
        match field {
            Field::Username => self.username = value,
            Field::Password => self.password = value,
            _ => return,
        }
        let current = match field {
            Field::Username => &self.username,
            _ => &self.password,
        };
        self.errors.check(field, current, today);
    }

    /// Validate every field; returns the request when submission may proceed.
    pub fn submit(&mut self, today: NaiveDate) -> Option<LoginRequest> {
        if self.submitting {
            return None;
        }
        self.errors = FieldErrors::default();
        self.errors.check(Field::Username, &self.username, today);
        self.errors.check(Field::Password, &self.password, today);
        if !self.errors.is_empty() {
            return None;
        }
        self.submitting = true;
        Some(LoginRequest {
            access: self.username.trim().to_string(),
            password: self.password.clone(),
        })
    }

    /// Mark the request as finished.
    pub fn finish(&mut self) {
        self.submitting = false;
    }
}

/// Signup form draft.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct SignupForm {
    /// Login name.
    pub username: String,
    /// Password.
    pub password: String,
    /// Email address.
    pub email: String,
    /// Birthday as `YYYY-MM-DD`.
    pub birthday: String,
    /// Inline validation errors.
    pub errors: FieldErrors,
    /// Whether a request is in flight.
    pub submitting: bool,
}

impl SignupForm {
    fn value(&self, field: Field) -> Option<&str> {
        match field {
            Field::Username => Some(&self.username),
            Field::Password => Some(&self.password),
            Field::Email => Some(&self.email),
            Field::Birthday => Some(&self.birthday),
            Field::CurrentPassword | Field::NewPassword => None,
        }
    }

    /// Record an input event and re-validate the field.
    pub fn update(&mut self, field: Field, value: String, today: NaiveDate) {
        match field {
            Field::Username => self.username = value,
            Field::Password => self.password = value,
            Field::Email => self.email = value,
            Field::Birthday => self.birthday = value,
            Field::CurrentPassword | Field::NewPassword => return,
        }
        if let Some(current) = self.value(field) {
            let current = current.to_string();
            self.errors.check(field, &current, today);
        }
    }

    /// Validate every field; returns the request when submission may proceed.
    pub fn submit(&mut self, today: NaiveDate) -> Option<SignupRequest> {
        if self.submitting {
            return None;
        }
        let mut errors = FieldErrors::default();
        for field in [Field::Username, Field::Password, Field::Email, Field::Birthday] {
            if let Some(value) = self.value(field) {
                errors.check(field, value, today);
            }
        }
        self.errors = errors;
        if !self.errors.is_empty() {
            return None;
        }
        self.submitting = true;
        Some(SignupRequest {
            username: self.username.trim().to_string(),
            password: self.password.clone(),
            email: self.email.trim().to_string(),
            birthday: self.birthday.trim().to_string(),
        })
    }

    /// Mark the request as finished.
    pub fn finish(&mut self) {
        self.submitting = false;
    }
}
