use leptos::*;
use leptos_router::*;

mod api;
mod components;
pub mod config;
mod pages;
mod state;
pub mod utils;

#[cfg(test)]
mod test_support;

use api::User;
use pages::{home::HomePage, login::LoginPage};
use state::session::{self, use_session, SessionProvider, SessionState};

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&"Logger was already initialized".into());
    }
    log::info!("Starting ClaimEase frontend (wasm)");

    // Resolve runtime config (env.js, window config, ./config.json) before
    // the first render so the login view picks the right authenticator.
    leptos::spawn_local(async move {
        let cfg = config::load().await;
        log::info!("Runtime config initialized (auth mode: {:?})", cfg.auth_mode);
        mount_to_body(App);
    });
}

#[component]
pub fn App() -> impl IntoView {
    view! {
        <SessionProvider>
            <Router>
                <Routes>
                    <Route path="/" view=HomePage/>
                    <Route path="/login" view=LoginRoute/>
                </Routes>
            </Router>
        </SessionProvider>
    }
}

#[component]
fn LoginRoute() -> impl IntoView {
    let (_session, set_session) = use_session();
    let on_login = complete_login(set_session, use_navigate());
    view! { <LoginPage on_login=on_login/> }
}

/// Stores the signed-in user and leaves the login route.
fn complete_login(
    set_session: WriteSignal<SessionState>,
    navigate: impl Fn(&str, NavigateOptions) + 'static,
) -> Callback<User> {
    Callback::new(move |user: User| {
        session::sign_in(set_session, user);
        navigate("/", NavigateOptions::default());
    })
}
