//! ToDo Frontend App
//!
//! Root controller: owns the store, calls the API, reports failures.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;
use todo_client::TodoClient;

use crate::components::{AuthPanel, Header, TodoForm, TodoList};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::dialog;
use crate::models::{AuthMode, Todo};
use crate::store::{
    store_apply_fetch, store_clear_session, store_finish_register, store_finish_update, AppState,
    AppStateStoreFields,
};

const LOGGED_IN: &str = "ログインしました。";
const LOGGED_OUT: &str = "ログアウトしました。";
const REGISTERED: &str = "会員登録が完了しました。";
const CONFIRM_DELETE: &str = "本当に削除しますか？";

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    // State
    let store = Store::new(AppState::default());
    let (reload_trigger, set_reload_trigger) = signal(0u32);
    let client = TodoClient::http(&config.api_url);
    let ctx = AppContext::new((reload_trigger, set_reload_trigger), client);

    // Provide context to all children
    provide_context(store);
    provide_context(ctx);

    // Session check on mount; a failed check leaves the user logged out
    Effect::new(move |_| {
        spawn_local(async move {
            match ctx.client().fetch_login_status().await {
                Ok(logged_in) => store.is_logged_in().set(logged_in),
                Err(err) => log::error!("{:?}", err),
            }
        });
    });

    // Load todos when the session starts or a mutation asks for it
    Effect::new(move |_| {
        let trigger = ctx.reload_trigger.get();
        if !store.is_logged_in().get() {
            return;
        }
        log::debug!("loading todos, trigger={}", trigger);
        spawn_local(async move {
            let result = ctx.client().fetch_todos().await;
            if let Some(err) = store_apply_fetch(&store, result) {
                dialog::alert_error(&err);
            }
        });
    });

    // Session actions
    let on_logout = Callback::new(move |_: ()| {
        spawn_local(async move {
            match ctx.client().logout().await {
                Ok(()) => {
                    store_clear_session(&store);
                    dialog::alert(LOGGED_OUT);
                }
                Err(err) => dialog::alert_error(&err),
            }
        });
    });

    let on_login = Callback::new(move |(email, password): (String, String)| {
        spawn_local(async move {
            match ctx.client().login(&email, &password).await {
                Ok(()) => {
                    store.is_logged_in().set(true);
                    dialog::alert(LOGGED_IN);
                }
                Err(err) => dialog::alert_error(&err),
            }
        });
    });

    let on_register = Callback::new(move |(email, password): (String, String)| {
        spawn_local(async move {
            match ctx.client().register(&email, &password).await {
                Ok(()) => {
                    store_finish_register(&store);
                    dialog::alert(REGISTERED);
                }
                Err(err) => dialog::alert_error(&err),
            }
        });
    });

    let show_login = Callback::new(move |_: ()| store.auth_mode().set(AuthMode::Login));
    let show_register = Callback::new(move |_: ()| store.auth_mode().set(AuthMode::Register));

    // Todo actions; every success re-fetches the list
    let on_add = Callback::new(move |title: String| {
        spawn_local(async move {
            match ctx.client().add_todo(&title).await {
                Ok(()) => ctx.reload(),
                Err(err) => dialog::alert_error(&err),
            }
        });
    });

    let on_update = Callback::new(move |(id, title, completed): (i64, String, bool)| {
        spawn_local(async move {
            match ctx.client().update_todo(id, &title, completed).await {
                Ok(()) => {
                    store_finish_update(&store);
                    ctx.reload();
                }
                Err(err) => dialog::alert_error(&err),
            }
        });
    });

    let on_toggle = Callback::new(move |todo: Todo| {
        spawn_local(async move {
            match ctx.client().toggle_todo(&todo).await {
                Ok(()) => ctx.reload(),
                Err(err) => dialog::alert_error(&err),
            }
        });
    });

    let on_delete = Callback::new(move |id: i64| {
        if !dialog::confirm(CONFIRM_DELETE) {
            return;
        }
        spawn_local(async move {
            match ctx.client().delete_todo(id).await {
                Ok(()) => ctx.reload(),
                Err(err) => dialog::alert_error(&err),
            }
        });
    });

    let on_edit = Callback::new(move |id: i64| store.editing_id().set(Some(id)));
    let on_cancel_edit = Callback::new(move |_: ()| store.editing_id().set(None));

    view! {
        <Header
            is_logged_in=Signal::derive(move || store.is_logged_in().get())
            on_click_logout=on_logout
            on_click_login=show_login
            on_click_register=show_register
        />

        <main>
            <Show
                when=move || store.is_logged_in().get()
                fallback=move || view! { <AuthPanel on_login=on_login on_register=on_register /> }
            >
                <h2>"ToDo一覧"</h2>
                <TodoForm on_submit=on_add />

                <TodoList
                    on_toggle=on_toggle
                    on_edit=on_edit
                    on_cancel_edit=on_cancel_edit
                    on_update=on_update
                    on_delete=on_delete
                />
            </Show>
        </main>
    }
}
