//! Session store.
//!
//! Consumes the `SessionEstablished` event: takes ownership of the user
//! record and credential issued by the auth service. The form never holds
//! a reference to either after handing them over.

use crate::shared::UserRecord;

/// An established session.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub user: UserRecord,
    pub token: String,
}

/// Holder for the current session, if any.
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    session: Option<Session>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn establish(&mut self, user: UserRecord, token: String) {
        self.session = Some(Session { user, token });
    }

    pub fn clear(&mut self) {
        self.session = None;
    }

    pub fn current(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

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

    #[test]
    fn test_store_starts_empty() {
        let store = SessionStore::new();
        assert!(!store.is_authenticated());
        assert!(store.current().is_none());
    }

    #[test]
    fn test_establish_and_clear() {
        let mut store = SessionStore::new();
        store.establish(user(), "jwt".to_string());
        assert!(store.is_authenticated());
        assert_eq!(store.current().unwrap().token, "jwt");

        store.clear();
        assert!(!store.is_authenticated());
    }
}
