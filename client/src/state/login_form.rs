//! Transient login form state.
//!
//! DESIGN
//! ======
//! Every change re-validates the whole form against `util::validation`, so
//! `errors` always reflects the current values once the user starts typing.
//! A field's message is only surfaced once that field has been edited or
//! the form has been submitted. Nothing here is persisted; the state is
//! dropped when the page unmounts.

#[cfg(test)]
#[path = "login_form_test.rs"]
mod login_form_test;

use std::fmt;

use serde::Serialize;

use crate::util::validation::{Field, ValidationError, validate_field};

/// Current validation failure per field, if any.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub email: Option<ValidationError>,
    pub password: Option<ValidationError>,
}

impl FieldErrors {
    pub fn get(&self, field: Field) -> Option<ValidationError> {
        match field {
            Field::Email => self.email,
            Field::Password => self.password,
        }
    }

    fn set(&mut self, field: Field, error: Option<ValidationError>) {
        match field {
            Field::Email => self.email = error,
            Field::Password => self.password = error,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.password.is_none()
    }
}

/// Validated login values handed to the submission handler.
///
/// Only `LoginFormState::submit` constructs these, and only when every field
/// passes the schema.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    email: String,
    #[serde(skip_serializing)]
    password: String,
}

impl Credentials {
    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Login form values, per-field validity, and presentation flags.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginFormState {
    pub email: String,
    pub password: String,
    pub email_dirty: bool,
    pub password_dirty: bool,
    pub submitted: bool,
    pub errors: FieldErrors,
    pub password_visible: bool,
}

impl LoginFormState {
    pub fn set_email(&mut self, value: String) {
        self.email = value;
        self.email_dirty = true;
        self.revalidate();
    }

    pub fn set_password(&mut self, value: String) {
        self.password = value;
        self.password_dirty = true;
        self.revalidate();
    }

    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Email => &self.email,
            Field::Password => &self.password,
        }
    }

    fn revalidate(&mut self) {
        for field in [Field::Email, Field::Password] {
            let error = validate_field(field, self.value(field)).err();
            self.errors.set(field, error);
        }
    }

    /// Whether `field` has been edited since the form was created.
    pub fn is_touched(&self, field: Field) -> bool {
        match field {
            Field::Email => self.email_dirty,
            Field::Password => self.password_dirty,
        }
    }

    /// Whether the field's current value passes the schema.
    pub fn is_field_valid(&self, field: Field) -> bool {
        validate_field(field, self.value(field)).is_ok()
    }

    /// Whether every field passes the schema, independent of what is shown.
    pub fn is_valid(&self) -> bool {
        [Field::Email, Field::Password].into_iter().all(|f| self.is_field_valid(f))
    }

    /// Whether any field differs from its empty default.
    pub fn is_dirty(&self) -> bool {
        !self.email.is_empty() || !self.password.is_empty()
    }

    /// Message to render under `field`: its current error, but only once the
    /// field has been edited or the form submitted.
    pub fn error(&self, field: Field) -> Option<String> {
        if !self.submitted && !self.is_touched(field) {
            return None;
        }
        self.errors.get(field).map(|e| e.to_string())
    }

    /// Validate every field and, when all pass, hand back the credentials.
    ///
    /// Always marks the form submitted so every failing field shows its
    /// message, even ones the user never touched.
    pub fn submit(&mut self) -> Option<Credentials> {
        self.submitted = true;
        self.revalidate();
        if !self.errors.is_empty() {
            return None;
        }
        Some(Credentials { email: self.email.clone(), password: self.password.clone() })
    }

    pub fn toggle_password_visibility(&mut self) {
        self.password_visible = !self.password_visible;
    }

    /// `type` attribute for the password input.
    pub fn password_input_type(&self) -> &'static str {
        if self.password_visible { "text" } else { "password" }
    }
}
