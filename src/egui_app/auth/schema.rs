//! Validation schema and the pure validation pass.
//!
//! Each mode maps every one of its fields to exactly one rule. Validation
//! is deterministic: the same field values always produce the same errors,
//! so it can run on every edit and once more before submission.

use std::collections::BTreeMap;

use super::{FormFields, FormMode};

/// Wire names of the form fields, shared by validation and payloads.
pub mod fields {
    pub const FIRST_NAME: &str = "firstName";
    pub const LAST_NAME: &str = "lastName";
    pub const EMAIL: &str = "email";
    pub const PASSWORD: &str = "password";
    pub const LOCATION: &str = "location";
    pub const OCCUPATION: &str = "occupation";
    pub const PICTURE: &str = "picture";
    pub const PICTURE_PATH: &str = "picturePath";
}

pub const MSG_REQUIRED: &str = "required";
pub const MSG_INVALID_EMAIL: &str = "invalid email";

/// Rule attached to a single field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRule {
    Required,
    RequiredEmail,
    Optional,
}

/// Per-field error messages; empty means the form is valid.
pub type ValidationErrors = BTreeMap<&'static str, &'static str>;

const LOGIN_SCHEMA: &[(&str, FieldRule)] = &[
    (fields::EMAIL, FieldRule::RequiredEmail),
    (fields::PASSWORD, FieldRule::Required),
];

const REGISTER_SCHEMA: &[(&str, FieldRule)] = &[
    (fields::FIRST_NAME, FieldRule::Required),
    (fields::LAST_NAME, FieldRule::Required),
    (fields::EMAIL, FieldRule::RequiredEmail),
    (fields::PASSWORD, FieldRule::Required),
    (fields::LOCATION, FieldRule::Required),
    (fields::OCCUPATION, FieldRule::Required),
    (fields::PICTURE, FieldRule::Optional),
];

/// Active schema for a mode.
pub fn schema(mode: FormMode) -> &'static [(&'static str, FieldRule)] {
    match mode {
        FormMode::Login => LOGIN_SCHEMA,
        FormMode::Register => REGISTER_SCHEMA,
    }
}

/// Validate the field set against its mode's schema. Rules apply per field
/// with no cross-field dependencies.
pub fn validate(form_fields: &FormFields) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    for &(name, rule) in schema(form_fields.mode()) {
        let value = form_fields.value(name).unwrap_or("");
        match rule {
            FieldRule::Required => {
                if value.is_empty() {
                    errors.insert(name, MSG_REQUIRED);
                }
            }
            FieldRule::RequiredEmail => {
                if value.is_empty() {
                    errors.insert(name, MSG_REQUIRED);
                } else if !is_valid_email(value) {
                    errors.insert(name, MSG_INVALID_EMAIL);
                }
            }
            FieldRule::Optional => {}
        }
    }
    errors
}

/// Accepts the standard `local@domain.tld` shape: one `@`, a non-empty
/// local part, a dotted domain with non-empty labels, no whitespace.
pub fn is_valid_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') || value.contains(char::is_whitespace) {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}
