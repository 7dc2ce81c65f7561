use shared::LoginCredentials;
use yew::prelude::*;

use crate::auth::use_auth;
use crate::components::composite::login_form::LoginForm;

#[function_component(Login)]
pub fn login() -> Html {
    let auth = use_auth();

    let on_login_event = {
        let auth = auth.clone();
        Callback::from(move |credentials: LoginCredentials| {
            log::info!("Login submitted, phase={}", auth.phase());
            auth.login(credentials);
        })
    };

    html! {
        <main class="min-h-screen w-full flex items-center justify-center bg-gradient-to-br from-rose-50 to-slate-50">
            <div class="w-full max-w-md p-8">
                <div class="bg-white rounded-2xl shadow-xl overflow-hidden">
                    <div class="px-8 pt-8">
                        <h2 class="text-2xl font-bold text-gray-800 text-center mb-2">{ "Welcome back" }</h2>
                        <p class="text-center text-gray-600 text-sm mb-8">
                            { "Please enter your details to continue" }
                        </p>
                    </div>
                    <div class="px-8 pb-8">
                        <LoginForm
                            on_login={on_login_event}
                            is_loading={auth.is_loading()}
                            failed={auth.error().is_some()} />
                    </div>
                </div>
            </div>
        </main>
    }
}
