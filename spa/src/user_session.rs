use std::ops::Deref;
use std::rc::Rc;

use shared::{AuthAction, AuthDispatch, AuthState, CookieSource};
use wasm_bindgen::JsCast;
use web_sys::HtmlDocument;
use yew::prelude::*;

/// Reducer-backed auth state, published to the tree through [`crate::auth::AuthProvider`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AuthStore(AuthState);

impl Deref for AuthStore {
    type Target = AuthState;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Reducible for AuthStore {
    type Action = AuthAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = self.0.reduce(action);
        // same Rc means no re-render
        if next == self.0 {
            self
        } else {
            Rc::new(AuthStore(next))
        }
    }
}

pub struct StoreDispatch(pub UseReducerDispatcher<AuthStore>);

impl AuthDispatch for StoreDispatch {
    fn dispatch(&self, action: AuthAction) {
        self.0.dispatch(action);
    }
}

/// `document.cookie` of the current page. Cookies flagged `HttpOnly` never show up here.
#[derive(Debug, Default, Clone, Copy)]
pub struct DocumentCookies;

impl CookieSource for DocumentCookies {
    fn cookie_header(&self) -> String {
        web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.dyn_into::<HtmlDocument>().ok())
            .and_then(|document| document.cookie().ok())
            .unwrap_or_default()
    }
}
