//! Authentication Form Module
//!
//! The form that toggles between sign-in and register, validated against a
//! per-mode schema and submitted to the auth service. Split into:
//!
//! - **`schema`** - field rules and the pure validation pass
//! - **`form`** - the form state machine (mode, errors, submission state)
//! - **`payload`** - outbound request construction (JSON / multipart)
//! - **`client`** - HTTP dispatch against the auth endpoints

pub mod client;
pub mod form;
pub mod payload;
pub mod schema;

pub use form::{AuthEvent, AuthForm, SubmissionState};
pub use payload::{AuthRequest, RegisterPayload, RequestBody};
pub use schema::{validate, FieldRule, ValidationErrors};

/// Which face of the form is active. The two modes have disjoint field
/// sets and schemas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Login,
    Register,
}

impl FormMode {
    pub fn toggled(self) -> Self {
        match self {
            Self::Login => Self::Register,
            Self::Register => Self::Login,
        }
    }
}

/// A profile picture selected for registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PictureFile {
    pub name: String,
    pub bytes: Vec<u8>,
}

/// Current field values, tagged by mode so each mode only ever carries its
/// own fields and validation dispatches on the tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormFields {
    Login {
        email: String,
        password: String,
    },
    Register {
        first_name: String,
        last_name: String,
        email: String,
        password: String,
        location: String,
        occupation: String,
        picture: Option<PictureFile>,
    },
}

impl FormFields {
    /// Fresh, empty field set for a mode.
    pub fn empty(mode: FormMode) -> Self {
        match mode {
            FormMode::Login => Self::Login {
                email: String::new(),
                password: String::new(),
            },
            FormMode::Register => Self::Register {
                first_name: String::new(),
                last_name: String::new(),
                email: String::new(),
                password: String::new(),
                location: String::new(),
                occupation: String::new(),
                picture: None,
            },
        }
    }

    pub fn mode(&self) -> FormMode {
        match self {
            Self::Login { .. } => FormMode::Login,
            Self::Register { .. } => FormMode::Register,
        }
    }

    /// Text value of a field by wire name. The picture is not a text field
    /// and yields `None`, as does any name outside the active mode.
    pub fn value(&self, field: &str) -> Option<&str> {
        match self {
            Self::Login { email, password } => match field {
                schema::fields::EMAIL => Some(email),
                schema::fields::PASSWORD => Some(password),
                _ => None,
            },
            Self::Register {
                first_name,
                last_name,
                email,
                password,
                location,
                occupation,
                picture: _,
            } => match field {
                schema::fields::FIRST_NAME => Some(first_name),
                schema::fields::LAST_NAME => Some(last_name),
                schema::fields::EMAIL => Some(email),
                schema::fields::PASSWORD => Some(password),
                schema::fields::LOCATION => Some(location),
                schema::fields::OCCUPATION => Some(occupation),
                _ => None,
            },
        }
    }

    /// Selected picture, if the active mode has one.
    pub fn picture(&self) -> Option<&PictureFile> {
        match self {
            Self::Login { .. } => None,
            Self::Register { picture, .. } => picture.as_ref(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_toggled() {
        assert_eq!(FormMode::Login.toggled(), FormMode::Register);
        assert_eq!(FormMode::Register.toggled(), FormMode::Login);
    }

    #[test]
    fn test_empty_fields_match_mode() {
        assert_eq!(FormFields::empty(FormMode::Login).mode(), FormMode::Login);
        assert_eq!(FormFields::empty(FormMode::Register).mode(), FormMode::Register);
    }

    #[test]
    fn test_value_lookup_respects_mode() {
        let fields = FormFields::empty(FormMode::Login);
        assert_eq!(fields.value(schema::fields::EMAIL), Some(""));
        // firstName belongs to register only
        assert_eq!(fields.value(schema::fields::FIRST_NAME), None);
    }

    #[test]
    fn test_picture_absent_in_login_mode() {
        assert!(FormFields::empty(FormMode::Login).picture().is_none());
    }
}
