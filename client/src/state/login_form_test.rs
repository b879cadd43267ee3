use super::*;
use crate::util::validation::PASSWORD_MIN_LEN;

fn filled(email: &str, password: &str) -> LoginFormState {
    let mut form = LoginFormState::default();
    form.set_email(email.to_owned());
    form.set_password(password.to_owned());
    form
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_form_is_empty_and_pristine() {
    let form = LoginFormState::default();
    assert!(form.email.is_empty());
    assert!(form.password.is_empty());
    assert!(!form.is_dirty());
    assert!(!form.submitted);
    assert!(!form.password_visible);
}

#[test]
fn default_form_shows_no_errors_but_is_invalid() {
    let form = LoginFormState::default();
    assert_eq!(form.error(Field::Email), None);
    assert_eq!(form.error(Field::Password), None);
    assert!(!form.is_valid());
}

// =============================================================
// On-change validation
// =============================================================

#[test]
fn set_email_revalidates_on_every_change() {
    let mut form = LoginFormState::default();
    form.set_email("a@b".to_owned());
    assert!(form.email_dirty);
    assert_eq!(form.error(Field::Email).as_deref(), Some("Invalid email"));

    form.set_email("a@b.com".to_owned());
    assert_eq!(form.error(Field::Email), None);
    assert!(form.is_field_valid(Field::Email));
}

#[test]
fn set_password_revalidates_on_every_change() {
    let mut form = LoginFormState::default();
    form.set_password("short".to_owned());
    assert!(form.password_dirty);
    assert_eq!(
        form.error(Field::Password).as_deref(),
        Some("String must contain at least 8 character(s)")
    );

    form.set_password("password1".to_owned());
    assert_eq!(form.error(Field::Password), None);
}

#[test]
fn editing_one_field_hides_the_untouched_fields_error() {
    let mut form = LoginFormState::default();
    form.set_email("nope".to_owned());
    assert!(form.error(Field::Email).is_some());
    assert!(form.is_touched(Field::Email));
    assert!(!form.is_touched(Field::Password));
    // Validated, but not yet shown.
    assert!(form.errors.password.is_some());
    assert_eq!(form.error(Field::Password), None);
}

#[test]
fn submitting_reveals_errors_on_untouched_fields() {
    let mut form = LoginFormState::default();
    form.set_email("a@b.com".to_owned());
    assert_eq!(form.error(Field::Password), None);
    assert_eq!(form.submit(), None);
    assert_eq!(
        form.error(Field::Password).as_deref(),
        Some("String must contain at least 8 character(s)")
    );
}

#[test]
fn clearing_a_field_reports_it_required() {
    let mut form = filled("a@b.com", "password1");
    form.set_email(String::new());
    form.set_password(String::new());
    assert!(form.error(Field::Email).is_some());
    assert!(form.error(Field::Password).is_some());
    assert!(!form.is_dirty());
}

#[test]
fn any_short_password_is_invalid() {
    for len in 0..PASSWORD_MIN_LEN {
        let form = filled("a@b.com", &"x".repeat(len));
        assert!(!form.is_field_valid(Field::Password), "length {len} should be invalid");
        assert!(!form.is_valid());
    }
}

// =============================================================
// Submission
// =============================================================

#[test]
fn submit_valid_form_returns_credentials() {
    let mut form = filled("a@b.com", "password1");
    let credentials = form.submit().expect("valid form yields credentials");
    assert!(form.submitted);
    assert_eq!(credentials.email(), "a@b.com");
    assert_eq!(credentials.password(), "password1");
}

#[test]
fn submit_invalid_form_returns_none_and_reveals_errors() {
    let mut form = filled("not-an-email", "short");
    assert_eq!(form.submit(), None);
    assert!(form.submitted);
    assert_eq!(form.error(Field::Email).as_deref(), Some("Invalid email"));
    assert_eq!(
        form.error(Field::Password).as_deref(),
        Some("String must contain at least 8 character(s)")
    );
}

#[test]
fn submit_untouched_form_reveals_required_errors() {
    let mut form = LoginFormState::default();
    assert_eq!(form.submit(), None);
    assert!(form.error(Field::Email).is_some());
    assert!(form.error(Field::Password).is_some());
}

#[test]
fn submit_with_one_invalid_field_is_rejected() {
    let mut form = filled("a@b.com", "short");
    assert_eq!(form.submit(), None);
    assert_eq!(form.error(Field::Email), None);
    assert!(form.error(Field::Password).is_some());
}

// =============================================================
// Credentials
// =============================================================

#[test]
fn credentials_debug_redacts_password() {
    let credentials = filled("a@b.com", "password1").submit().expect("valid form yields credentials");
    let debug = format!("{credentials:?}");
    assert!(debug.contains("a@b.com"));
    assert!(!debug.contains("password1"));
}

#[test]
fn credentials_serialization_omits_password() {
    let credentials = filled("a@b.com", "password1").submit().expect("valid form yields credentials");
    let json = serde_json::to_value(&credentials).unwrap();
    assert_eq!(json, serde_json::json!({ "email": "a@b.com" }));
}

// =============================================================
// Password visibility
// =============================================================

#[test]
fn password_is_obscured_by_default() {
    assert_eq!(LoginFormState::default().password_input_type(), "password");
}

#[test]
fn toggling_visibility_twice_restores_obscured_state() {
    let mut form = LoginFormState::default();
    form.toggle_password_visibility();
    assert!(form.password_visible);
    assert_eq!(form.password_input_type(), "text");
    form.toggle_password_visibility();
    assert!(!form.password_visible);
    assert_eq!(form.password_input_type(), "password");
}

#[test]
fn visibility_does_not_affect_validation() {
    let mut form = filled("a@b.com", "password1");
    form.toggle_password_visibility();
    assert!(form.is_valid());
    assert!(form.submit().is_some());
}
