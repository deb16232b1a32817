//! Todo List Component

use leptos::prelude::*;

use crate::components::TodoItem;
use crate::store::{use_app_store, AppStateStoreFields};

/// All todos from the store, in server order
#[component]
pub fn TodoList(
    on_toggle: Callback<crate::models::Todo>,
    on_edit: Callback<i64>,
    on_cancel_edit: Callback<()>,
    on_update: Callback<(i64, String, bool)>,
    on_delete: Callback<i64>,
) -> impl IntoView {
    let store = use_app_store();

    view! {
        <ul class="todo-list">
            <For
                each=move || store.todos().get()
                // Mutable fields are part of the key so edits re-render the row
                key=|todo| (todo.id, todo.title.clone(), todo.completed)
                children=move |todo| {
                    view! {
                        <TodoItem
                            todo=todo
                            on_toggle=on_toggle
                            on_edit=on_edit
                            on_cancel_edit=on_cancel_edit
                            on_update=on_update
                            on_delete=on_delete
                        />
                    }
                }
            />
        </ul>
    }
}
