use shared::GuardOutcome;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::auth::use_auth;
use crate::router::Route;

#[derive(PartialEq, Properties)]
pub struct Props {
    #[prop_or_default]
    pub children: Html,
}

/// Renders its children only while the session cookie is present, otherwise
/// replaces the current entry with `/login`.
///
/// The decision is taken from the same synchronous cookie read that the session
/// check commits to the store, so the first render is already correct.
#[function_component(ProtectedRoute)]
pub fn protected_route(props: &Props) -> Html {
    let auth = use_auth();
    let navigator = use_navigator().expect("ProtectedRoute must be rendered inside a router");
    let outcome = auth.guard();

    {
        let auth = auth.clone();
        use_effect(move || {
            let was_authenticated = auth.is_authenticated();
            if auth.check_auth() != was_authenticated {
                log::debug!("Session flag changed by cookie check, was={was_authenticated}");
            }
        });
    }

    use_effect_with(outcome, move |outcome| {
        if let GuardOutcome::Redirect(destination) = *outcome {
            log::info!("No session cookie, redirecting, destination={destination}");
            navigator.replace(&Route::from(destination));
        }
    });

    match outcome {
        GuardOutcome::Render => props.children.clone(),
        GuardOutcome::Redirect(_) => Html::default(),
    }
}
