use strum_macros::{AsRefStr, Display};

use crate::AuthError;

/// Tab-wide authentication state plus the status of the last login attempt.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AuthState {
    pub is_authenticated: bool,
    pub is_loading: bool,
    pub error: Option<AuthError>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, AsRefStr)]
pub enum AuthPhase {
    Unauthenticated,
    Authenticating,
    Authenticated,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AuthAction {
    LoginStarted,
    LoginSucceeded,
    LoginFailed(AuthError),
    LoggedOut,
    /// Result of inspecting the cookie jar; overrides whatever the flag was.
    SessionChecked(bool),
    SetAuthenticated(bool),
}

impl AuthState {
    pub fn phase(&self) -> AuthPhase {
        if self.is_loading {
            AuthPhase::Authenticating
        } else if self.is_authenticated {
            AuthPhase::Authenticated
        } else {
            AuthPhase::Unauthenticated
        }
    }

    pub fn reduce(&self, action: AuthAction) -> AuthState {
        match action {
            AuthAction::LoginStarted => AuthState {
                is_loading: true,
                error: None,
                ..self.clone()
            },
            AuthAction::LoginSucceeded => AuthState {
                is_authenticated: true,
                is_loading: false,
                error: None,
            },
            // the flag is left as it was
            AuthAction::LoginFailed(error) => AuthState {
                is_loading: false,
                error: Some(error),
                ..self.clone()
            },
            AuthAction::LoggedOut => AuthState::default(),
            AuthAction::SessionChecked(present) | AuthAction::SetAuthenticated(present) => {
                AuthState {
                    is_authenticated: present,
                    ..self.clone()
                }
            }
        }
    }
}
