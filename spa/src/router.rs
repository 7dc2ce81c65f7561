use shared::{Destination, Navigate};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::composite::protected_route::ProtectedRoute;
use crate::pages::{login::Login, not_found::NotFound, search::SearchPage};

#[derive(Debug, Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Root,
    #[at("/login")]
    Login,
    #[at("/search")]
    Search,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl From<Destination> for Route {
    fn from(value: Destination) -> Self {
        match value {
            Destination::Root => Route::Root,
            Destination::Login => Route::Login,
        }
    }
}

pub fn switch(route: Route) -> Html {
    match route {
        Route::Root => html! { <Redirect<Route> to={Route::Search} /> },
        Route::Login => html! { <Login /> },
        Route::Search => html! {
            <ProtectedRoute>
                <SearchPage />
            </ProtectedRoute>
        },
        Route::NotFound => html! { <NotFound /> },
    }
}

pub struct RouterNavigate(pub Navigator);

impl Navigate for RouterNavigate {
    fn navigate(&self, destination: Destination) {
        log::debug!("Navigating, destination={destination}");
        self.0.push(&Route::from(destination));
    }
}

#[cfg(test)]
mod tests {
    use shared::GuardOutcome;

    use super::*;

    #[test]
    fn test_route_paths() {
        assert_eq!(Route::Root.to_path(), "/");
        assert_eq!(Route::Login.to_path(), "/login");
        assert_eq!(Route::Search.to_path(), "/search");
    }

    #[test]
    fn test_route_recognition() {
        assert_eq!(Route::recognize("/search"), Some(Route::Search));
        assert_eq!(Route::recognize("/login"), Some(Route::Login));
        assert_eq!(Route::recognize("/dogs/42"), Some(Route::NotFound));
    }

    #[test]
    fn test_destinations_map_to_routes() {
        assert_eq!(Route::from(Destination::Root), Route::Root);
        assert_eq!(Route::from(Destination::Login), Route::Login);
    }

    #[test]
    fn test_guard_redirect_targets_login_path() {
        let GuardOutcome::Redirect(destination) = GuardOutcome::from_session(false) else {
            panic!("missing session must redirect");
        };
        assert_eq!(Route::from(destination).to_path(), "/login");
        assert_eq!(GuardOutcome::from_session(true), GuardOutcome::Render);
    }
}
