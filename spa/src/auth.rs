use std::rc::Rc;

use shared::{AuthController, AuthError, AuthPhase, GuardOutcome, LoginCredentials};
use yew::platform::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api::auth_api::HttpSessionService;
use crate::router::RouterNavigate;
use crate::user_session::{AuthStore, DocumentCookies, StoreDispatch};

pub type BrowserAuthController =
    AuthController<HttpSessionService, DocumentCookies, StoreDispatch, RouterNavigate>;

#[derive(Clone)]
pub struct AuthContext {
    state: UseReducerHandle<AuthStore>,
    controller: Rc<BrowserAuthController>,
}

impl PartialEq for AuthContext {
    fn eq(&self, other: &Self) -> bool {
        self.state == other.state && Rc::ptr_eq(&self.controller, &other.controller)
    }
}

#[derive(PartialEq, Properties)]
pub struct Props {
    #[prop_or_default]
    pub children: Html,
}

/// Owns the auth store for the whole tab. Must sit inside the router.
#[function_component(AuthProvider)]
pub fn auth_provider(props: &Props) -> Html {
    let state = use_reducer(AuthStore::default);
    let navigator = use_navigator().expect("AuthProvider must be rendered inside a router");

    let controller = {
        let dispatcher = state.dispatcher();
        use_memo((), move |_| {
            AuthController::new(
                HttpSessionService,
                DocumentCookies,
                StoreDispatch(dispatcher),
                RouterNavigate(navigator),
            )
        })
    };

    let context = AuthContext { state, controller };

    html! {
        <ContextProvider<AuthContext> {context}>
            { props.children.clone() }
        </ContextProvider<AuthContext>>
    }
}

#[derive(Clone, PartialEq)]
pub struct UseAuthHandle {
    context: AuthContext,
}

impl UseAuthHandle {
    pub fn is_authenticated(&self) -> bool {
        self.context.state.is_authenticated
    }

    pub fn is_loading(&self) -> bool {
        self.context.state.is_loading
    }

    pub fn error(&self) -> Option<AuthError> {
        self.context.state.error.clone()
    }

    pub fn phase(&self) -> AuthPhase {
        self.context.state.phase()
    }

    /// Fire and forget; the outcome lands in the store.
    pub fn login(&self, credentials: LoginCredentials) {
        let controller = self.context.controller.clone();
        spawn_local(async move {
            // already logged and recorded in the store by the controller
            let _ = controller.login(credentials).await;
        });
    }

    pub fn logout(&self) {
        self.context.controller.logout();
        let controller = self.context.controller.clone();
        spawn_local(async move {
            // a failure is logged by the controller; the local logout already happened
            let _ = controller.end_remote_session().await;
        });
    }

    pub fn check_auth(&self) -> bool {
        self.context.controller.check_auth()
    }

    pub fn guard(&self) -> GuardOutcome {
        self.context.controller.guard()
    }
}

#[hook]
pub fn use_auth() -> UseAuthHandle {
    let context =
        use_context::<AuthContext>().expect("use_auth must be called under AuthProvider");
    UseAuthHandle { context }
}
