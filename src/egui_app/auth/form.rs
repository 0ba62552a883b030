//! The authentication form state machine.
//!
//! `AuthForm` owns the active mode, field values, validation errors and the
//! submission lifecycle:
//!
//! ```text
//! Idle --submit()--> InFlight --success--> Succeeded
//!                  \
//!                   --failure--> Failed(message) --submit()--> InFlight
//! ```
//!
//! `submit()` is a no-op while a request is in flight, so rapid repeated
//! clicks never produce a second outbound request. Each accepted submission
//! bumps a sequence number; `resolve()` discards any outcome whose sequence
//! no longer matches, which is what makes a response arriving after a mode
//! switch harmless.

use std::collections::BTreeSet;

use crate::shared::{AuthError, AuthResponse, UserRecord};

use super::payload::AuthRequest;
use super::schema::{self, ValidationErrors};
use super::{FormFields, FormMode, PictureFile};

/// Lifecycle of the current submission attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionState {
    Idle,
    InFlight,
    Succeeded,
    Failed(String),
}

/// Outbound events emitted when a submission succeeds. The session store
/// and router consume these; the form holds no reference afterward.
#[derive(Debug, Clone, PartialEq)]
pub enum AuthEvent {
    SessionEstablished { user: UserRecord, token: String },
    NavigateHome,
}

/// Login/register form state.
#[derive(Debug, Clone)]
pub struct AuthForm {
    pub fields: FormFields,
    errors: ValidationErrors,
    touched: BTreeSet<&'static str>,
    submission: SubmissionState,
    seq: u64,
}

impl AuthForm {
    pub fn new() -> Self {
        Self {
            fields: FormFields::empty(FormMode::Login),
            errors: ValidationErrors::new(),
            touched: BTreeSet::new(),
            submission: SubmissionState::Idle,
            seq: 0,
        }
    }

    pub fn mode(&self) -> FormMode {
        self.fields.mode()
    }

    pub fn submission(&self) -> &SubmissionState {
        &self.submission
    }

    pub fn is_in_flight(&self) -> bool {
        self.submission == SubmissionState::InFlight
    }

    /// Server banner for the last failed attempt, if any.
    pub fn banner(&self) -> Option<&str> {
        match &self.submission {
            SubmissionState::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Toggle between login and register. Fields, errors and submission
    /// state all reset; the sequence bump orphans any in-flight response.
    pub fn switch_mode(&mut self) {
        self.seq += 1;
        self.fields = FormFields::empty(self.mode().toggled());
        self.errors.clear();
        self.touched.clear();
        self.submission = SubmissionState::Idle;
    }

    /// Mark a field as touched so its error becomes visible. Called on
    /// change and on blur.
    pub fn touch(&mut self, field: &'static str) {
        self.touched.insert(field);
    }

    /// Recompute validation errors from the current field values.
    pub fn revalidate(&mut self) {
        self.errors = schema::validate(&self.fields);
    }

    /// Error to display next to a field. Untouched fields stay quiet until
    /// a submission attempt touches everything.
    pub fn error_for(&self, field: &str) -> Option<&'static str> {
        if !self.touched.contains(field) {
            return None;
        }
        self.errors.get(field).copied()
    }

    /// Record a selected picture file. Ignored in login mode, which has no
    /// picture field.
    pub fn set_picture(&mut self, file: PictureFile) {
        if let FormFields::Register { picture, .. } = &mut self.fields {
            *picture = Some(file);
        }
    }

    /// Attempt to submit. Returns the prepared request when the attempt is
    /// accepted; the caller dispatches it and later feeds the outcome back
    /// through [`resolve`](Self::resolve).
    ///
    /// Returns `None` while a request is already in flight, and `None` when
    /// the authoritative validation pass finds errors (the errors are
    /// surfaced and the submission state stays `Idle`).
    pub fn submit(&mut self) -> Option<AuthRequest> {
        if self.is_in_flight() {
            return None;
        }
        self.revalidate();
        if !self.errors.is_empty() {
            for &(name, _) in schema::schema(self.mode()) {
                self.touched.insert(name);
            }
            self.submission = SubmissionState::Idle;
            return None;
        }
        self.seq += 1;
        self.submission = SubmissionState::InFlight;
        Some(AuthRequest::build(self.seq, &self.fields))
    }

    /// Apply the outcome of a dispatched request. An outcome whose sequence
    /// number no longer matches the current attempt is stale and ignored.
    pub fn resolve(
        &mut self,
        seq: u64,
        outcome: Result<AuthResponse, AuthError>,
    ) -> Vec<AuthEvent> {
        if seq != self.seq || !self.is_in_flight() {
            tracing::debug!(seq, "discarding stale auth response");
            return Vec::new();
        }
        match outcome {
            Ok(AuthResponse { user, token }) => {
                self.fields = FormFields::empty(self.mode());
                self.errors.clear();
                self.touched.clear();
                self.submission = SubmissionState::Succeeded;
                vec![
                    AuthEvent::SessionEstablished { user, token },
                    AuthEvent::NavigateHome,
                ]
            }
            Err(error) => {
                self.submission = SubmissionState::Failed(error.to_string());
                Vec::new()
            }
        }
    }
}

impl Default for AuthForm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::egui_app::auth::schema::fields;
    use assert_matches::assert_matches;

    fn fill_login(form: &mut AuthForm, email: &str, password: &str) {
        form.fields = FormFields::Login {
            email: email.to_string(),
            password: password.to_string(),
        };
    }

    fn user() -> UserRecord {
        UserRecord {
            id: "u1".to_string(),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            picture_path: String::new(),
            location: String::new(),
            occupation: String::new(),
            friends: Vec::new(),
        }
    }

    fn success() -> Result<AuthResponse, AuthError> {
        Ok(AuthResponse {
            user: user(),
            token: "jwt".to_string(),
        })
    }

    #[test]
    fn test_new_form_starts_in_login_idle() {
        let form = AuthForm::new();
        assert_eq!(form.mode(), FormMode::Login);
        assert_eq!(*form.submission(), SubmissionState::Idle);
        assert!(form.banner().is_none());
    }

    #[test]
    fn test_switch_mode_resets_everything() {
        let mut form = AuthForm::new();
        fill_login(&mut form, "not-an-email", "pw");
        form.touch(fields::EMAIL);
        form.revalidate();
        assert!(form.error_for(fields::EMAIL).is_some());

        form.switch_mode();
        assert_eq!(form.mode(), FormMode::Register);
        assert_eq!(form.fields, FormFields::empty(FormMode::Register));
        assert_eq!(*form.submission(), SubmissionState::Idle);
        assert!(form.error_for(fields::EMAIL).is_none());
    }

    #[test]
    fn test_submit_blocked_by_validation() {
        let mut form = AuthForm::new();
        fill_login(&mut form, "", "pw");
        assert!(form.submit().is_none());
        assert_eq!(*form.submission(), SubmissionState::Idle);
        // submission attempt touches every field, surfacing the error
        assert_eq!(form.error_for(fields::EMAIL), Some("required"));
    }

    #[test]
    fn test_submit_guard_while_in_flight() {
        let mut form = AuthForm::new();
        fill_login(&mut form, "ada@example.com", "pw");
        assert!(form.submit().is_some());
        assert!(form.is_in_flight());
        // second click: no second outbound request
        assert!(form.submit().is_none());
        assert!(form.is_in_flight());
    }

    #[test]
    fn test_successful_login_emits_session_and_navigation() {
        let mut form = AuthForm::new();
        fill_login(&mut form, "ada@example.com", "pw");
        let request = form.submit().unwrap();

        let events = form.resolve(request.seq(), success());
        assert_eq!(events.len(), 2);
        assert_matches!(&events[0], AuthEvent::SessionEstablished { user, token } => {
            assert_eq!(user.id, "u1");
            assert_eq!(token.as_str(), "jwt");
        });
        assert_eq!(events[1], AuthEvent::NavigateHome);
        assert_eq!(*form.submission(), SubmissionState::Succeeded);
        // field values are cleared on success
        assert_eq!(form.fields, FormFields::empty(FormMode::Login));
    }

    #[test]
    fn test_failed_login_stores_server_message() {
        let mut form = AuthForm::new();
        fill_login(&mut form, "ada@example.com", "pw");
        let request = form.submit().unwrap();

        let events = form.resolve(request.seq(), Err(AuthError::rejected("bad credentials")));
        assert!(events.is_empty());
        assert_eq!(
            *form.submission(),
            SubmissionState::Failed("bad credentials".to_string())
        );
        assert_eq!(form.banner(), Some("bad credentials"));
    }

    #[test]
    fn test_resubmit_after_failure_reenters_in_flight() {
        let mut form = AuthForm::new();
        fill_login(&mut form, "ada@example.com", "pw");
        let request = form.submit().unwrap();
        form.resolve(request.seq(), Err(AuthError::rejected("nope")));

        let retry = form.submit();
        assert!(retry.is_some());
        assert!(form.is_in_flight());
        // the retry carries a fresh sequence number
        assert!(retry.unwrap().seq() > request.seq());
    }

    #[test]
    fn test_response_after_mode_switch_is_discarded() {
        let mut form = AuthForm::new();
        fill_login(&mut form, "ada@example.com", "pw");
        let request = form.submit().unwrap();

        form.switch_mode();
        let events = form.resolve(request.seq(), success());
        assert!(events.is_empty());
        assert_eq!(form.mode(), FormMode::Register);
        assert_eq!(*form.submission(), SubmissionState::Idle);
    }

    #[test]
    fn test_stale_sequence_is_discarded() {
        let mut form = AuthForm::new();
        fill_login(&mut form, "ada@example.com", "pw");
        let request = form.submit().unwrap();

        let events = form.resolve(request.seq() + 1, success());
        assert!(events.is_empty());
        assert!(form.is_in_flight());
    }

    #[test]
    fn test_unexpected_failure_shows_generic_banner() {
        let mut form = AuthForm::new();
        fill_login(&mut form, "ada@example.com", "pw");
        let request = form.submit().unwrap();

        form.resolve(request.seq(), Err(AuthError::unexpected("connection refused")));
        assert_eq!(form.banner(), Some("something went wrong"));
    }

    #[test]
    fn test_set_picture_ignored_in_login_mode() {
        let mut form = AuthForm::new();
        form.set_picture(PictureFile {
            name: "me.png".to_string(),
            bytes: vec![0],
        });
        assert!(form.fields.picture().is_none());

        form.switch_mode();
        form.set_picture(PictureFile {
            name: "me.png".to_string(),
            bytes: vec![0],
        });
        assert_eq!(form.fields.picture().unwrap().name, "me.png");
    }
}
