use shared::{CredentialsError, LoginCredentials};
use yew::prelude::*;

use crate::components::atoms::input_text::{InputText, InputType};

#[derive(Debug, PartialEq, Default, Clone)]
pub struct LoginFormData {
    pub name: String,
    pub email: String,
}

impl From<LoginFormData> for LoginCredentials {
    fn from(value: LoginFormData) -> Self {
        LoginCredentials::new(value.name, value.email)
    }
}

#[derive(PartialEq, Properties)]
pub struct Props {
    pub on_login: Callback<LoginCredentials>,
    #[prop_or_default]
    pub is_loading: bool,
    #[prop_or_default]
    pub failed: bool,
}

fn validation_message(error: &CredentialsError) -> &'static str {
    match error {
        CredentialsError::EmptyName => "Please enter your name.",
        CredentialsError::InvalidEmail => "Please enter a valid email address.",
    }
}

#[function_component(LoginForm)]
pub fn login_form(props: &Props) -> Html {
    let state = use_state(LoginFormData::default);
    let validation = use_state(|| None::<CredentialsError>);

    let on_change_name = {
        let state = state.clone();
        Callback::from(move |input_text: String| {
            let mut data: LoginFormData = (*state).clone();
            data.name = input_text;
            state.set(data);
        })
    };

    let on_change_email = {
        let state = state.clone();
        Callback::from(move |input_text: String| {
            let mut data = (*state).clone();
            data.email = input_text;
            state.set(data);
        })
    };

    let on_submit = {
        let state = state.clone();
        let validation = validation.clone();
        let on_login = props.on_login.clone();
        let is_loading = props.is_loading;
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if is_loading {
                return;
            }
            let credentials: LoginCredentials = (*state).clone().into();
            match credentials.validate() {
                Ok(()) => {
                    validation.set(None);
                    on_login.emit(credentials);
                }
                Err(error) => {
                    log::debug!("Login form rejected, error: {error}");
                    validation.set(Some(error));
                }
            }
        })
    };

    let input_classes = classes!(
        "w-full", "px-4", "py-3", "text-gray-700", "bg-gray-50", "rounded-lg",
        "focus:outline-none", "focus:ring-2", "focus:ring-rose-500", "focus:bg-white"
    );

    html! {
        <form onsubmit={on_submit} class="space-y-6">
            <div class="space-y-4">
                <InputText
                    id="name"
                    name="name"
                    value={state.name.clone()}
                    placeholder="Enter your name"
                    class={input_classes.clone()}
                    input_type={InputType::Text}
                    required={true}
                    disabled={props.is_loading}
                    on_change={on_change_name} />
                <InputText
                    id="email"
                    name="email"
                    value={state.email.clone()}
                    placeholder="Enter your email"
                    class={input_classes}
                    input_type={InputType::Email}
                    required={true}
                    disabled={props.is_loading}
                    on_change={on_change_email} />
            </div>
            if let Some(error) = &*validation {
                <div class="bg-amber-50 text-amber-700 px-4 py-3 rounded-lg text-sm">
                    { validation_message(error) }
                </div>
            }
            if props.failed {
                <div class="bg-red-50 text-red-600 px-4 py-3 rounded-lg text-sm">
                    { "Login failed. Please check your credentials and try again." }
                </div>
            }
            <button
                type="submit"
                disabled={props.is_loading}
                class="w-full py-3 px-4 bg-rose-500 text-white font-medium rounded-lg hover:bg-rose-600 disabled:bg-gray-400 disabled:cursor-not-allowed">
                if props.is_loading {
                    { "Logging in..." }
                } else {
                    { "Continue" }
                }
            </button>
        </form>
    }
}
