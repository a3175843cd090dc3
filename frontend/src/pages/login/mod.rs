use crate::api::User;
use leptos::*;

pub mod components;
pub mod repository;
pub mod utils;
pub mod view_model;

mod panel;

pub use panel::LoginPanel;

#[component]
pub fn LoginPage(on_login: Callback<User>) -> impl IntoView {
    view! { <LoginPanel on_login=on_login /> }
}
