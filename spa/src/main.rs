mod api;
mod app;
mod auth;
mod components;
mod pages;
mod router;
mod user_session;

use app::App;

fn main() {
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    wasm_logger::init(wasm_logger::Config::new(level));
    log::info!("Starting dog search, api={}", api::PUBLIC_API_ENDPOINT);
    yew::Renderer::<App>::new().render();
}
