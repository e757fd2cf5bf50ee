//! # Session State
//!
//! The current authenticated identity (or none) and its derived role.
//!
//! ## Login Policy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  login(email, password)                                                 │
//! │       │                                                                 │
//! │       ├── matches the fixed admin pair ──────────► Admin identity       │
//! │       │                                                                 │
//! │       ├── both fields non-empty ─────────────────► Customer identity    │
//! │       │   (intentionally permissive demo policy)                        │
//! │       │                                                                 │
//! │       └── otherwise ─────────────────────────────► InvalidCredentials   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Credentials are compared in plaintext; there is no credential store and
//! no session persistence across restarts.

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use wandrobe_core::{AuthError, Identity, Role, ADMIN_EMAIL, ADMIN_PASSWORD};

/// The session: at most one signed-in identity at a time.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    identity: Option<Identity>,
}

impl Session {
    /// Creates a new anonymous session.
    pub fn new() -> Self {
        Session { identity: None }
    }

    /// Attempts a login and stores the identity on success.
    pub fn login(&mut self, email: &str, password: &str) -> Result<&Identity, AuthError> {
        let identity = if email == ADMIN_EMAIL && password == ADMIN_PASSWORD {
            Identity {
                id: Uuid::new_v4(),
                email: email.to_string(),
                display_name: "Admin User".to_string(),
                role: Role::Admin,
            }
        } else if !email.is_empty() && !password.is_empty() {
            Identity {
                id: Uuid::new_v4(),
                email: email.to_string(),
                display_name: "Customer".to_string(),
                role: Role::Customer,
            }
        } else {
            return Err(AuthError::InvalidCredentials);
        };

        Ok(&*self.identity.insert(identity))
    }

    /// Clears the session identity unconditionally.
    pub fn logout(&mut self) {
        self.identity = None;
    }

    /// The signed-in identity, if any.
    pub fn identity(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }

    /// The derived access role; the source of truth for role-gated views.
    pub fn current_role(&self) -> Role {
        self.identity
            .as_ref()
            .map(|i| i.role)
            .unwrap_or(Role::Anonymous)
    }

    /// Convenience check for the admin dashboard gate.
    pub fn is_admin(&self) -> bool {
        self.current_role() == Role::Admin
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_login() {
        let mut session = Session::new();
        let identity = session.login("admin@wandrobe.com", "admin123").unwrap();

        assert_eq!(identity.role, Role::Admin);
        assert_eq!(identity.display_name, "Admin User");
        assert_eq!(session.current_role(), Role::Admin);
        assert!(session.is_admin());
    }

    #[test]
    fn test_any_non_empty_credentials_yield_customer() {
        let mut session = Session::new();
        let identity = session.login("a@b.com", "x").unwrap();

        assert_eq!(identity.role, Role::Customer);
        assert_eq!(session.current_role(), Role::Customer);
        assert!(!session.is_admin());
    }

    #[test]
    fn test_admin_email_with_wrong_password_is_customer() {
        // The permissive demo policy applies whenever the exact admin pair
        // doesn't match.
        let mut session = Session::new();
        let identity = session.login("admin@wandrobe.com", "wrong").unwrap();
        assert_eq!(identity.role, Role::Customer);
    }

    #[test]
    fn test_empty_credentials_rejected() {
        let mut session = Session::new();

        assert!(matches!(
            session.login("", ""),
            Err(AuthError::InvalidCredentials)
        ));
        assert!(matches!(
            session.login("a@b.com", ""),
            Err(AuthError::InvalidCredentials)
        ));
        assert!(matches!(
            session.login("", "secret"),
            Err(AuthError::InvalidCredentials)
        ));
        assert_eq!(session.current_role(), Role::Anonymous);
    }

    #[test]
    fn test_failed_login_keeps_previous_identity() {
        let mut session = Session::new();
        session.login("a@b.com", "x").unwrap();

        assert!(session.login("", "").is_err());
        assert_eq!(session.current_role(), Role::Customer);
    }

    #[test]
    fn test_logout_clears_identity() {
        let mut session = Session::new();
        session.login("a@b.com", "x").unwrap();
        assert!(session.identity().is_some());

        session.logout();
        assert!(session.identity().is_none());
        assert_eq!(session.current_role(), Role::Anonymous);

        // Logout on an anonymous session is fine.
        session.logout();
        assert_eq!(session.current_role(), Role::Anonymous);
    }

    #[test]
    fn test_relogin_replaces_identity() {
        let mut session = Session::new();
        session.login("a@b.com", "x").unwrap();
        let first_id = session.identity().unwrap().id;

        session.login("admin@wandrobe.com", "admin123").unwrap();
        assert_eq!(session.current_role(), Role::Admin);
        assert_ne!(session.identity().unwrap().id, first_id);
    }
}
