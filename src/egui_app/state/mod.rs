use std::sync::mpsc::{channel, Receiver, TryRecvError};

use crate::egui_app::auth::{client, AuthEvent, AuthForm};
use crate::egui_app::{Config, SessionStore};
use crate::shared::{AuthError, AuthResponse};

/// Current app view/mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppView {
    /// Login/register screen
    Auth,
    /// Home page for the signed-in user
    Home,
}

type Outcome = (u64, Result<AuthResponse, AuthError>);

/// Central application state shared across egui views.
pub struct AppState {
    pub config: Config,
    pub form: AuthForm,
    pub session: SessionStore,
    pub current_view: AppView,
    pending: Option<Receiver<Outcome>>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            config: Config::new(),
            form: AuthForm::new(),
            session: SessionStore::new(),
            current_view: AppView::Auth,
            pending: None,
        }
    }

    pub fn with_config(config: Config) -> Self {
        Self {
            config,
            ..Self::new()
        }
    }

    /// Submit the form. If the form accepts the attempt, the request runs
    /// on a worker thread and [`poll_submission`](Self::poll_submission)
    /// picks up the outcome. The form's in-flight guard means calling this
    /// again before resolution does nothing.
    pub fn submit(&mut self) {
        let Some(request) = self.form.submit() else {
            return;
        };

        let config = self.config.clone();
        let (tx, rx) = channel();
        std::thread::spawn(move || {
            let seq = request.seq();
            let outcome = client::dispatch(&config, request);
            let _ = tx.send((seq, outcome));
        });

        self.pending = Some(rx);
    }

    /// Poll the worker for a finished submission; called once per frame.
    /// The form's sequence check discards outcomes that no longer match
    /// the current attempt.
    pub fn poll_submission(&mut self) {
        let Some(rx) = &self.pending else {
            return;
        };
        match rx.try_recv() {
            Ok((seq, outcome)) => {
                self.pending = None;
                if let Err(error) = &outcome {
                    tracing::warn!(%error, "authentication attempt failed");
                }
                for event in self.form.resolve(seq, outcome) {
                    self.apply(event);
                }
            }
            Err(TryRecvError::Empty) => {}
            Err(TryRecvError::Disconnected) => {
                self.pending = None;
            }
        }
    }

    fn apply(&mut self, event: AuthEvent) {
        match event {
            AuthEvent::SessionEstablished { user, token } => {
                tracing::info!(email = %user.email, "session established");
                self.config.set_token(Some(token.clone()));
                self.session.establish(user, token);
            }
            AuthEvent::NavigateHome => {
                self.current_view = AppView::Home;
            }
        }
    }

    /// Toggle the form between login and register. Drops any pending
    /// receiver so a late response has nowhere to land.
    pub fn switch_mode(&mut self) {
        self.pending = None;
        self.form.switch_mode();
    }

    pub fn logout(&mut self) {
        self.pending = None;
        self.config.clear_token();
        self.session.clear();
        self.form = AuthForm::new();
        self.current_view = AppView::Auth;
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::egui_app::FormFields;
    use crate::shared::UserRecord;
    use std::sync::mpsc::channel;

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

    fn in_flight_state() -> AppState {
        let mut state = AppState::new();
        state.form.fields = FormFields::Login {
            email: "ada@example.com".to_string(),
            password: "pw".to_string(),
        };
        state
    }

    #[test]
    fn test_poll_applies_success_events() {
        let mut state = in_flight_state();
        let request = state.form.submit().unwrap();

        let (tx, rx) = channel();
        state.pending = Some(rx);
        tx.send((
            request.seq(),
            Ok(AuthResponse {
                user: user(),
                token: "jwt".to_string(),
            }),
        ))
        .unwrap();

        state.poll_submission();
        assert!(state.session.is_authenticated());
        assert_eq!(state.config.get_token(), Some(&"jwt".to_string()));
        assert_eq!(state.current_view, AppView::Home);
        assert!(state.pending.is_none());
    }

    #[test]
    fn test_poll_failure_keeps_auth_view() {
        let mut state = in_flight_state();
        let request = state.form.submit().unwrap();

        let (tx, rx) = channel();
        state.pending = Some(rx);
        tx.send((request.seq(), Err(AuthError::rejected("bad credentials"))))
            .unwrap();

        state.poll_submission();
        assert!(!state.session.is_authenticated());
        assert_eq!(state.current_view, AppView::Auth);
        assert_eq!(state.form.banner(), Some("bad credentials"));
    }

    #[test]
    fn test_stale_outcome_after_mode_switch_is_ignored() {
        let mut state = in_flight_state();
        let request = state.form.submit().unwrap();
        let seq = request.seq();

        state.switch_mode();
        assert!(state.pending.is_none());

        // even a hand-delivered late outcome is discarded by the form
        let (tx, rx) = channel();
        state.pending = Some(rx);
        tx.send((
            seq,
            Ok(AuthResponse {
                user: user(),
                token: "jwt".to_string(),
            }),
        ))
        .unwrap();

        state.poll_submission();
        assert!(!state.session.is_authenticated());
        assert_eq!(state.current_view, AppView::Auth);
    }

    #[test]
    fn test_logout_clears_session_and_returns_to_auth() {
        let mut state = AppState::new();
        state.session.establish(user(), "jwt".to_string());
        state.config.set_token(Some("jwt".to_string()));
        state.current_view = AppView::Home;

        state.logout();
        assert!(!state.session.is_authenticated());
        assert!(state.config.get_token().is_none());
        assert_eq!(state.current_view, AppView::Auth);
    }
}
