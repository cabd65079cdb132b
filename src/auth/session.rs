// Allow dead code: infrastructure accessors for future use
#![allow(dead_code)]

use chrono::{DateTime, Utc};

/// In-memory session state for the platform connection.
///
/// Holds the account identity and the opaque bearer token issued at login.
/// The token starts out empty, is replaced whenever the server rotates it,
/// and is cleared again on logout. Nothing is persisted to disk.
#[derive(Debug, Clone, Default)]
pub struct Session {
    username: String,
    token: String,
    established_at: Option<DateTime<Utc>>,
}

impl Session {
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Current session token; empty until a login succeeds.
    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn is_authenticated(&self) -> bool {
        !self.token.is_empty()
    }

    /// Time the current session was established, if any.
    pub fn established_at(&self) -> Option<DateTime<Utc>> {
        self.established_at
    }

    /// Record a fresh login.
    pub fn establish(&mut self, username: &str, token: &str) {
        self.username = username.to_owned();
        self.token = token.to_owned();
        self.established_at = Some(Utc::now());
    }

    /// Replace the token when the server issues a different one. Returns
    /// whether the stored token actually changed.
    pub fn adopt_token(&mut self, token: &str) -> bool {
        if self.token == token {
            return false;
        }
        self.token = token.to_owned();
        true
    }

    /// Drop the identity and token, returning to the unauthenticated state.
    pub fn clear(&mut self) {
        self.username.clear();
        self.token.clear();
        self.established_at = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_unauthenticated_with_an_empty_token() {
        let session = Session::default();
        assert_eq!(session.token(), "");
        assert!(!session.is_authenticated());
        assert!(session.established_at().is_none());
    }

    #[test]
    fn establish_records_identity_and_token() {
        let mut session = Session::default();
        session.establish("user@example.com", "abc123");
        assert_eq!(session.username(), "user@example.com");
        assert_eq!(session.token(), "abc123");
        assert!(session.is_authenticated());
        assert!(session.established_at().is_some());
    }

    #[test]
    fn adopt_token_reports_whether_the_token_changed() {
        let mut session = Session::default();
        session.establish("user@example.com", "abc123");
        assert!(!session.adopt_token("abc123"));
        assert!(session.adopt_token("def456"));
        assert_eq!(session.token(), "def456");
    }

    #[test]
    fn clear_returns_to_the_unauthenticated_state() {
        let mut session = Session::default();
        session.establish("user@example.com", "abc123");
        session.clear();
        assert_eq!(session.token(), "");
        assert_eq!(session.username(), "");
        assert!(!session.is_authenticated());
        assert!(session.established_at().is_none());
    }
}
