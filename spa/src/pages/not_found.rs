use yew::prelude::*;
use yew_router::prelude::*;

use crate::router::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <main class="p-4">
            <p>{ "Page not found!" }</p>
            <Link<Route> to={Route::Root}>{ "click here to go home" }</Link<Route>>
        </main>
    }
}
