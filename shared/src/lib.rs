use serde::{Deserialize, Serialize};

pub mod auth;
pub mod controller;
pub mod session;

pub use auth::{AuthAction, AuthPhase, AuthState};
pub use controller::{
    AuthController, AuthDispatch, Destination, GuardOutcome, LoginOutcome, Navigate,
    SessionService,
};
pub use session::{session_present, CookieSource, SESSION_COOKIE_MARKER};

/// Body of `POST /auth/login`. Built by the login form and consumed by a single request.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LoginCredentials {
    pub name: String,
    pub email: String,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum CredentialsError {
    #[error("name_required")]
    EmptyName,
    #[error("invalid_email")]
    InvalidEmail,
}

impl LoginCredentials {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into().trim().to_owned(),
            email: email.into().trim().to_owned(),
        }
    }

    pub fn validate(&self) -> Result<(), CredentialsError> {
        if self.name.trim().is_empty() {
            return Err(CredentialsError::EmptyName);
        }
        if !is_valid_email(&self.email) {
            return Err(CredentialsError::InvalidEmail);
        }
        Ok(())
    }
}

/// Same acceptance rules as an HTML `<input type="email">`.
pub fn is_valid_email(email: &str) -> bool {
    const LOCAL_SPECIALS: &str = ".!#$%&'*+/=?^_`{|}~-";

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() {
        return false;
    }
    let local_ok = local
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || LOCAL_SPECIALS.contains(c));
    let domain_ok = domain.split('.').all(|label| {
        !label.is_empty()
            && label.len() <= 63
            && !label.starts_with('-')
            && !label.ends_with('-')
            && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
    });
    local_ok && domain_ok
}

/// Failure of a call to the remote auth endpoints. The payload is transport detail,
/// meant for logs; the UI only shows a static message.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum AuthError {
    #[error("login request failed: {0}")]
    LoginFailed(String),
    #[error("logout request failed: {0}")]
    LogoutFailed(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_are_trimmed() {
        let credentials = LoginCredentials::new("  Rex ", " rex@example.com\n");
        assert_eq!(credentials.name, "Rex");
        assert_eq!(credentials.email, "rex@example.com");
        assert_eq!(credentials.validate(), Ok(()));
    }

    #[test]
    fn test_empty_name_is_rejected() {
        let credentials = LoginCredentials::new("   ", "rex@example.com");
        assert_eq!(credentials.validate(), Err(CredentialsError::EmptyName));
    }

    #[test]
    fn test_email_syntax() {
        let valid = ["a@b", "first.last@example.com", "x+tag@sub.domain.org"];
        let invalid = [
            "",
            "plain",
            "@example.com",
            "user@",
            "user@@example.com",
            "user@exa mple.com",
            "user@-example.com",
            "user@example..com",
            "us er@example.com",
        ];
        for email in valid {
            assert!(is_valid_email(email), "expected valid: {email}");
        }
        for email in invalid {
            assert!(!is_valid_email(email), "expected invalid: {email}");
        }
    }

    #[test]
    fn test_credentials_wire_format() {
        let credentials = LoginCredentials::new("Rex", "rex@example.com");
        let json = serde_json::to_value(&credentials).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"name": "Rex", "email": "rex@example.com"})
        );
    }
}
