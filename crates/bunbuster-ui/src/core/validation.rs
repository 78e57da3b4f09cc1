//! Client-side form validation shared by signup, login and profile edit.
//!
//! # Design
//! - Each validator returns the message to show, or `None` when the value is fine.
//! - Forms validate single fields on input and every field on submit.
//! - "Today" is passed in so date rules are deterministic under test.

use chrono::{Months, NaiveDate};
use once_cell::sync::Lazy;
use regex::{Regex, RegexSet};
use std::collections::BTreeMap;

/// Minimum username length.
pub const USERNAME_MIN_LEN: usize = 5;
/// Minimum password length.
pub const PASSWORD_MIN_LEN: usize = 8;
/// Oldest accepted age in years.
pub const MAX_AGE_YEARS: u32 = 200;

/// Username too short.
pub const USERNAME_ERROR: &str = "Username must be at least 5 characters long.";
/// Password does not meet the complexity rule.
pub const PASSWORD_ERROR: &str = "Password must contain at least 8 characters, an uppercase letter, a lowercase letter, a number, and a symbol.";
/// Email does not look like `local@domain.tld`.
pub const EMAIL_ERROR: &str = "Please enter a valid email address.";
/// Birthday after today.
pub const BIRTHDAY_FUTURE_ERROR: &str = "The birthday cannot be in the future.";
/// Birthday more than [`MAX_AGE_YEARS`] ago.
pub const BIRTHDAY_AGE_ERROR: &str = "This is not a valid age in the bunnyverse.";
/// Birthday missing or not `YYYY-MM-DD`.
pub const BIRTHDAY_FORMAT_ERROR: &str = "Please enter a valid date.";
/// Required field left empty.
pub const REQUIRED_ERROR: &str = "This field is required.";

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-z0-9._%+-]+@[a-z0-9.-]+\.[a-z]{2,}$").expect("email pattern is valid")
});

// Lower, upper, digit, symbol: every class must match at least once.
static PASSWORD_CLASSES: Lazy<RegexSet> = Lazy::new(|| {
    RegexSet::new([r"[a-z]", r"[A-Z]", r"\d", r"[\W_]"]).expect("password patterns are valid")
});

/// Form fields subject to validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    /// Login name.
    Username,
    /// Password on login/signup.
    Password,
    /// Email address.
    Email,
    /// Birthday.
    Birthday,
    /// Current password on profile edit.
    CurrentPassword,
    /// Replacement password on profile edit.
    NewPassword,
}

/// Validate a username.
#[must_use]
pub fn validate_username(value: &str) -> Option<&'static str> {
    (value.trim().chars().count() < USERNAME_MIN_LEN).then_some(USERNAME_ERROR)
}

/// Validate a password against the length and character-class rule.
#[must_use]
pub fn validate_password(value: &str) -> Option<&'static str> {
    let long_enough = value.chars().count() >= PASSWORD_MIN_LEN;
    let all_classes = PASSWORD_CLASSES.matches(value).matched_all();
    (!(long_enough && all_classes)).then_some(PASSWORD_ERROR)
}

/// Validate an email address.
#[must_use]
pub fn validate_email(value: &str) -> Option<&'static str> {
    (!EMAIL_PATTERN.is_match(value.trim())).then_some(EMAIL_ERROR)
}

/// Validate a `YYYY-MM-DD` birthday relative to `today`.
#[must_use]
pub fn validate_birthday(value: &str, today: NaiveDate) -> Option<&'static str> {
    let Ok(birthday) = NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d") else {
        return Some(BIRTHDAY_FORMAT_ERROR);
    };
    if birthday > today {
        return Some(BIRTHDAY_FUTURE_ERROR);
    }
    let oldest = today
        .checked_sub_months(Months::new(MAX_AGE_YEARS * 12))
        .unwrap_or(NaiveDate::MIN);
    (birthday < oldest).then_some(BIRTHDAY_AGE_ERROR)
}

/// Validate any field by kind.
#[must_use]
pub fn validate_field(field: Field, value: &str, today: NaiveDate) -> Option<&'static str> {
    match field {
        Field::Username => validate_username(value),
        Field::Password | Field::NewPassword => validate_password(value),
        Field::Email => validate_email(value),
        Field::Birthday => validate_birthday(value, today),
        Field::CurrentPassword => value.is_empty().then_some(REQUIRED_ERROR),
    }
}

/// Per-field error messages for a form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors {
    errors: BTreeMap<Field, &'static str>,
}

impl FieldErrors {
    /// Record (or clear) the error for a field.
    pub fn set(&mut self, field: Field, error: Option<&'static str>) {
        match error {
            Some(message) => {
                self.errors.insert(field, message);
            }
            None => {
                self.errors.remove(&field);
            }
        }
    }

    /// Re-validate one field and record the outcome.
    pub fn check(&mut self, field: Field, value: &str, today: NaiveDate) {
        self.set(field, validate_field(field, value, today));
    }

    /// Error for a field, if any.
    #[must_use]
    pub fn get(&self, field: Field) -> Option<&'static str> {
        self.errors.get(&field).copied()
    }

    /// Whether no field has an error; submission is allowed only then.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).expect("date")
    }

    #[test]
    fn username_needs_five_characters() {
        assert_eq!(validate_username("bun"), Some(USERNAME_ERROR));
        assert_eq!(validate_username("bunny"), None);
    }

    #[test]
    fn password_requires_every_character_class() {
        assert_eq!(validate_password("abc12345"), Some(PASSWORD_ERROR));
        assert_eq!(validate_password("Abc123!@"), None);
        assert_eq!(validate_password("Ab1!"), Some(PASSWORD_ERROR));
        assert_eq!(validate_password("ABCDEFG1!"), Some(PASSWORD_ERROR));
        assert_eq!(validate_password("Abcdefg_1"), None);
    }

    #[test]
    fn email_follows_simple_pattern() {
        assert_eq!(validate_email("bunny@example.com"), None);
        assert_eq!(validate_email("bunny@example"), Some(EMAIL_ERROR));
        assert_eq!(validate_email("@example.com"), Some(EMAIL_ERROR));
    }

    #[test]
    fn birthday_rules() {
        assert_eq!(validate_birthday("2999-01-01", today()), Some(BIRTHDAY_FUTURE_ERROR));
        assert_eq!(validate_birthday("1800-01-01", today()), Some(BIRTHDAY_AGE_ERROR));
        assert_eq!(validate_birthday("", today()), Some(BIRTHDAY_FORMAT_ERROR));
        assert_eq!(validate_birthday("1990-04-01", today()), None);
        assert_eq!(validate_birthday("2024-06-15", today()), None);
        assert_eq!(validate_birthday("1824-06-15", today()), None);
    }

    #[test]
    fn field_errors_track_set_and_clear() {
        let mut errors = FieldErrors::default();
        errors.check(Field::Username, "bun", today());
        errors.check(Field::Email, "bunny@example.com", today());
        assert_eq!(errors.get(Field::Username), Some(USERNAME_ERROR));
        assert_eq!(errors.get(Field::Email), None);
        errors.check(Field::Username, "bunny", today());
        assert!(errors.is_empty());
    }
}
