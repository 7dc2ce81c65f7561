use std::cell::Cell;
use std::rc::Rc;

use async_trait::async_trait;
use strum_macros::Display;

use crate::auth::AuthAction;
use crate::session::{session_present, CookieSource, SESSION_COOKIE_MARKER};
use crate::{AuthError, LoginCredentials};

/// Remote auth endpoints. The server answers login by setting the session cookie;
/// nothing else comes back.
#[async_trait(?Send)]
pub trait SessionService {
    async fn login(&self, credentials: &LoginCredentials) -> Result<(), AuthError>;
    async fn logout(&self) -> Result<(), AuthError>;
}

#[async_trait(?Send)]
impl<T: SessionService + ?Sized> SessionService for Rc<T> {
    async fn login(&self, credentials: &LoginCredentials) -> Result<(), AuthError> {
        (**self).login(credentials).await
    }

    async fn logout(&self) -> Result<(), AuthError> {
        (**self).logout().await
    }
}

/// Write side of the auth state store.
pub trait AuthDispatch {
    fn dispatch(&self, action: AuthAction);
}

impl<T: AuthDispatch + ?Sized> AuthDispatch for Rc<T> {
    fn dispatch(&self, action: AuthAction) {
        (**self).dispatch(action)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Destination {
    Root,
    Login,
}

pub trait Navigate {
    fn navigate(&self, destination: Destination);
}

impl<T: Navigate + ?Sized> Navigate for Rc<T> {
    fn navigate(&self, destination: Destination) {
        (**self).navigate(destination)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginOutcome {
    Authenticated,
    /// Another login was still pending; no request was sent.
    AlreadyInFlight,
    /// The user logged out while the request was pending; its result was dropped.
    CancelledByLogout,
}

/// What a protected route does with its children.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardOutcome {
    Render,
    Redirect(Destination),
}

impl GuardOutcome {
    pub fn from_session(session_present: bool) -> Self {
        if session_present {
            GuardOutcome::Render
        } else {
            GuardOutcome::Redirect(Destination::Login)
        }
    }
}

/// Drives the login/logout/session-check flow against its collaborators.
///
/// The controller never reads the store: every transition goes out through
/// [`AuthDispatch`], so the same code runs against a Yew reducer in the browser
/// and against plain recorders in tests.
pub struct AuthController<S, C, D, N> {
    service: S,
    cookies: C,
    store: D,
    navigator: N,
    cookie_marker: &'static str,
    login_in_flight: Cell<bool>,
    logout_generation: Cell<u64>,
}

impl<S, C, D, N> AuthController<S, C, D, N>
where
    S: SessionService,
    C: CookieSource,
    D: AuthDispatch,
    N: Navigate,
{
    pub fn new(service: S, cookies: C, store: D, navigator: N) -> Self {
        Self {
            service,
            cookies,
            store,
            navigator,
            cookie_marker: SESSION_COOKIE_MARKER,
            login_in_flight: Cell::new(false),
            logout_generation: Cell::new(0),
        }
    }

    pub fn with_cookie_marker(mut self, marker: &'static str) -> Self {
        self.cookie_marker = marker;
        self
    }

    pub fn is_login_in_flight(&self) -> bool {
        self.login_in_flight.get()
    }

    /// Single attempt, no retry. On success the flag is set optimistically, before
    /// any session check has seen the cookie.
    pub async fn login(&self, credentials: LoginCredentials) -> Result<LoginOutcome, AuthError> {
        if self.login_in_flight.replace(true) {
            log::debug!("Login ignored, another login request is pending");
            return Ok(LoginOutcome::AlreadyInFlight);
        }
        let generation = self.logout_generation.get();
        self.store.dispatch(AuthAction::LoginStarted);
        let result = self.service.login(&credentials).await;
        if self.logout_generation.get() != generation {
            // logout already reset the store and the in-flight flag
            log::info!("Login result dropped, user logged out while it was pending");
            return result.map(|()| LoginOutcome::CancelledByLogout);
        }
        self.login_in_flight.set(false);
        match result {
            Ok(()) => {
                log::info!("User login successful, name={}", credentials.name);
                self.store.dispatch(AuthAction::LoginSucceeded);
                self.navigator.navigate(Destination::Root);
                Ok(LoginOutcome::Authenticated)
            }
            Err(error) => {
                log::warn!("Login failed, error: {error}");
                self.store.dispatch(AuthAction::LoginFailed(error.clone()));
                Err(error)
            }
        }
    }

    /// Local reset and redirect, also abandoning any pending login. The remote
    /// session is ended separately by [`AuthController::end_remote_session`].
    pub fn logout(&self) {
        log::info!("User logged out");
        self.logout_generation.set(self.logout_generation.get().wrapping_add(1));
        self.login_in_flight.set(false);
        self.store.dispatch(AuthAction::LoggedOut);
        self.navigator.navigate(Destination::Login);
    }

    pub async fn end_remote_session(&self) -> Result<(), AuthError> {
        self.service
            .logout()
            .await
            .inspect_err(|error| log::warn!("Remote logout failed, error: {error}"))
    }

    /// Reads the cookie jar without touching the store.
    pub fn session_present(&self) -> bool {
        session_present(&self.cookies.cookie_header(), self.cookie_marker)
    }

    /// Render-or-redirect decision for a protected route, from a fresh cookie read.
    pub fn guard(&self) -> GuardOutcome {
        GuardOutcome::from_session(self.session_present())
    }

    pub fn check_auth(&self) -> bool {
        let present = self.session_present();
        log::debug!("Session check, present={present}");
        self.store.dispatch(AuthAction::SessionChecked(present));
        present
    }

    pub fn set_authenticated(&self, is_authenticated: bool) {
        self.store
            .dispatch(AuthAction::SetAuthenticated(is_authenticated));
    }
}
