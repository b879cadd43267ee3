//! Declarative field rules for the login form.
//!
//! DESIGN
//! ======
//! Each form field maps to an ordered list of `Rule`s in `LOGIN_SCHEMA`.
//! Validation walks the list and reports the first failing rule, so the
//! schema stays data and the form state never hard-codes per-field checks.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

/// Minimum accepted password length, in characters.
pub const PASSWORD_MIN_LEN: usize = 8;

// Local part, `@`, one or more dotted labels, alphabetic TLD. The leading-dot
// and double-dot constraints are checked outside the pattern. Case folding is
// ASCII-only (`-u`) so letters like U+017F or U+212A never fold into `[A-Z]`.
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i-u)^[A-Z0-9_'+\-.]*[A-Z0-9_+\-]@([A-Z0-9][A-Z0-9\-]*\.)+[A-Z]{2,}$")
        .expect("email pattern is a valid regex")
});

/// Form fields known to the login schema.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Email,
    Password,
}

impl Field {
    /// Input `name` attribute for this field.
    pub fn name(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Password => "password",
        }
    }
}

/// A single declarative check applied to a field value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rule {
    /// Value must match the email grammar.
    Email,
    /// Value must contain at least this many characters.
    MinLength(usize),
}

/// Human-readable validation failure, rendered inline under the field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Invalid email")]
    InvalidEmail,
    #[error("String must contain at least {min} character(s)")]
    TooShort { min: usize },
}

impl Rule {
    /// Apply this rule to `value`.
    ///
    /// # Errors
    ///
    /// Returns the matching `ValidationError` when `value` breaks the rule.
    pub fn check(self, value: &str) -> Result<(), ValidationError> {
        match self {
            Self::Email if is_email(value) => Ok(()),
            Self::Email => Err(ValidationError::InvalidEmail),
            Self::MinLength(min) if value.chars().count() >= min => Ok(()),
            Self::MinLength(min) => Err(ValidationError::TooShort { min }),
        }
    }
}

/// Rules attached to one field.
#[derive(Clone, Copy, Debug)]
pub struct FieldSchema {
    pub field: Field,
    pub rules: &'static [Rule],
}

/// Schema for the login form: a valid email and a password of at least
/// `PASSWORD_MIN_LEN` characters. Both fields are required; an empty value
/// fails its first rule.
pub const LOGIN_SCHEMA: &[FieldSchema] = &[
    FieldSchema { field: Field::Email, rules: &[Rule::Email] },
    FieldSchema { field: Field::Password, rules: &[Rule::MinLength(PASSWORD_MIN_LEN)] },
];

/// Validate `value` against every rule the schema lists for `field`.
///
/// # Errors
///
/// Returns the first failing rule's error.
pub fn validate_field(field: Field, value: &str) -> Result<(), ValidationError> {
    LOGIN_SCHEMA
        .iter()
        .filter(|schema| schema.field == field)
        .flat_map(|schema| schema.rules.iter())
        .try_for_each(|rule| rule.check(value))
}

/// Whether `value` is a syntactically valid email address.
pub fn is_email(value: &str) -> bool {
    !value.starts_with('.') && !value.contains("..") && EMAIL_RE.is_match(value)
}
