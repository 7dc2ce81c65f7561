#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use async_trait::async_trait;
use shared::{
    AuthAction, AuthController, AuthDispatch, AuthError, AuthState, CookieSource, Destination,
    LoginCredentials, Navigate, SessionService,
};
use tokio::sync::Notify;

pub type TestController = AuthController<
    Rc<FakeSessionService>,
    Rc<FakeCookies>,
    Rc<RecordingStore>,
    Rc<RecordingNavigator>,
>;

/// Records every request and answers with the configured results.
#[derive(Default)]
pub struct FakeSessionService {
    pub login_requests: RefCell<Vec<LoginCredentials>>,
    pub logout_requests: Cell<usize>,
    pub login_error: Option<AuthError>,
    pub logout_error: Option<AuthError>,
    /// When set, login waits for a notification before answering.
    pub login_gate: Option<Rc<Notify>>,
}

impl FakeSessionService {
    pub fn failing_login(detail: &str) -> Self {
        Self {
            login_error: Some(AuthError::LoginFailed(detail.to_owned())),
            ..Default::default()
        }
    }

    pub fn failing_logout(detail: &str) -> Self {
        Self {
            logout_error: Some(AuthError::LogoutFailed(detail.to_owned())),
            ..Default::default()
        }
    }

    pub fn gated(gate: Rc<Notify>) -> Self {
        Self {
            login_gate: Some(gate),
            ..Default::default()
        }
    }
}

#[async_trait(?Send)]
impl SessionService for FakeSessionService {
    async fn login(&self, credentials: &LoginCredentials) -> Result<(), AuthError> {
        self.login_requests.borrow_mut().push(credentials.clone());
        if let Some(gate) = &self.login_gate {
            gate.notified().await;
        }
        match &self.login_error {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }

    async fn logout(&self) -> Result<(), AuthError> {
        self.logout_requests.set(self.logout_requests.get() + 1);
        match &self.logout_error {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }
}

#[derive(Default)]
pub struct FakeCookies {
    pub header: RefCell<String>,
}

impl FakeCookies {
    pub fn with_header(header: &str) -> Self {
        Self {
            header: RefCell::new(header.to_owned()),
        }
    }

    pub fn set(&self, header: &str) {
        *self.header.borrow_mut() = header.to_owned();
    }
}

impl CookieSource for FakeCookies {
    fn cookie_header(&self) -> String {
        self.header.borrow().clone()
    }
}

/// Applies actions with the real reducer and keeps the history.
#[derive(Default)]
pub struct RecordingStore {
    pub state: RefCell<AuthState>,
    pub actions: RefCell<Vec<AuthAction>>,
}

impl RecordingStore {
    pub fn with_state(state: AuthState) -> Self {
        Self {
            state: RefCell::new(state),
            ..Default::default()
        }
    }

    pub fn current(&self) -> AuthState {
        self.state.borrow().clone()
    }
}

impl AuthDispatch for RecordingStore {
    fn dispatch(&self, action: AuthAction) {
        let next = self.state.borrow().reduce(action.clone());
        *self.state.borrow_mut() = next;
        self.actions.borrow_mut().push(action);
    }
}

#[derive(Default)]
pub struct RecordingNavigator {
    pub visits: RefCell<Vec<Destination>>,
}

impl Navigate for RecordingNavigator {
    fn navigate(&self, destination: Destination) {
        self.visits.borrow_mut().push(destination);
    }
}

pub struct Harness {
    pub service: Rc<FakeSessionService>,
    pub cookies: Rc<FakeCookies>,
    pub store: Rc<RecordingStore>,
    pub navigator: Rc<RecordingNavigator>,
    pub controller: TestController,
}

impl Harness {
    pub fn new(service: FakeSessionService, cookies: FakeCookies, store: RecordingStore) -> Self {
        let service = Rc::new(service);
        let cookies = Rc::new(cookies);
        let store = Rc::new(store);
        let navigator = Rc::new(RecordingNavigator::default());
        let controller = AuthController::new(
            service.clone(),
            cookies.clone(),
            store.clone(),
            navigator.clone(),
        );
        Self {
            service,
            cookies,
            store,
            navigator,
            controller,
        }
    }

    pub fn with_service(service: FakeSessionService) -> Self {
        Self::new(service, FakeCookies::default(), RecordingStore::default())
    }

    pub fn visits(&self) -> Vec<Destination> {
        self.navigator.visits.borrow().clone()
    }
}

pub fn credentials() -> LoginCredentials {
    LoginCredentials::new("Rex", "rex@example.com")
}
