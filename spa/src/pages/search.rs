use yew::prelude::*;

use crate::auth::use_auth;
use crate::components::composite::navigation_bar::NavigationBar;

#[function_component(SearchPage)]
pub fn search_page() -> Html {
    let auth = use_auth();

    let on_logout = {
        let auth = auth.clone();
        Callback::from(move |_| auth.logout())
    };

    html! {
        <div class="p-4">
            <NavigationBar title="Dog Search" {on_logout} />
            <p>{ "Search functionality will be implemented here." }</p>
        </div>
    }
}
