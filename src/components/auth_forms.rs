//! Login / Register Forms
//!
//! Both collect an email and a password; only labels differ.

use leptos::prelude::*;

use crate::validation::CredentialsDraft;

#[component]
fn CredentialsForm(
    on_submit: Callback<(String, String)>,
    submit_label: &'static str,
    password_autocomplete: &'static str,
) -> impl IntoView {
    let draft = RwSignal::new(CredentialsDraft::default());

    let handle_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let mut submitted = None;
        draft.update(|d| submitted = d.submit());
        if let Some(credentials) = submitted {
            on_submit.run(credentials);
        }
    };

    view! {
        <form class="auth-form" on:submit=handle_submit>
            {move || draft.with(|d| d.error).map(|err| view! {
                <p style="color: red;">{err.message()}</p>
            })}
            <input
                type="email"
                name="email"
                placeholder="メールアドレス"
                autocomplete="email"
                prop:value=move || draft.with(|d| d.email.clone())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    draft.update(|d| d.email = value);
                }
            />
            <input
                type="password"
                name="password"
                placeholder="パスワード"
                autocomplete=password_autocomplete
                prop:value=move || draft.with(|d| d.password.clone())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    draft.update(|d| d.password = value);
                }
            />
            <button type="submit">{submit_label}</button>
        </form>
    }
}

#[component]
pub fn LoginForm(#[prop(into)] on_submit: Callback<(String, String)>) -> impl IntoView {
    view! {
        <CredentialsForm
            on_submit=on_submit
            submit_label="ログイン"
            password_autocomplete="current-password"
        />
    }
}

#[component]
pub fn RegisterForm(#[prop(into)] on_submit: Callback<(String, String)>) -> impl IntoView {
    view! {
        <CredentialsForm
            on_submit=on_submit
            submit_label="登録"
            password_autocomplete="new-password"
        />
    }
}
