//! Auth Panel Component
//!
//! Logged-out view: one of the two auth forms plus a switch to the other.

use leptos::prelude::*;

use crate::components::{LoginForm, RegisterForm};
use crate::models::AuthMode;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn AuthPanel(
    on_login: Callback<(String, String)>,
    on_register: Callback<(String, String)>,
) -> impl IntoView {
    let store = use_app_store();
    let mode = move || store.auth_mode().get();

    view! {
        <section class="auth-panel">
            <h2>{move || mode().heading()}</h2>

            {move || match mode() {
                AuthMode::Login => view! { <LoginForm on_submit=on_login /> }.into_any(),
                AuthMode::Register => view! { <RegisterForm on_submit=on_register /> }.into_any(),
            }}

            <span>{move || mode().switch_prompt()}</span>
            <button on:click=move |_| store.auth_mode().set(mode().other())>
                {move || mode().other().heading()}
            </button>
        </section>
    }
}
