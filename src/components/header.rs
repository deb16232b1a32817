//! Header Component
//!
//! App title and session buttons.

use leptos::prelude::*;

/// Page header: logout while logged in, login / register otherwise
#[component]
pub fn Header(
    #[prop(into)] is_logged_in: Signal<bool>,
    on_click_logout: Callback<()>,
    on_click_login: Callback<()>,
    on_click_register: Callback<()>,
) -> impl IntoView {
    view! {
        <header>
            <nav>
                <h1>"ToDoアプリ"</h1>

                <ul>
                    <Show
                        when=move || is_logged_in.get()
                        fallback=move || view! {
                            <li>
                                <button on:click=move |_| on_click_login.run(())>"ログイン"</button>
                            </li>
                            <li>
                                <button on:click=move |_| on_click_register.run(())>"会員登録"</button>
                            </li>
                        }
                    >
                        <li>
                            <button on:click=move |_| on_click_logout.run(())>"ログアウト"</button>
                        </li>
                    </Show>
                </ul>
            </nav>
        </header>
    }
}
