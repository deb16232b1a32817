//! Todo Item Component
//!
//! One row of the list: either the todo itself or its edit form.

use chrono::{DateTime, Local, TimeZone};
use leptos::prelude::*;

use crate::components::TodoForm;
use crate::models::Todo;
use crate::store::{use_app_store, AppStateStoreFields};

/// Creation time as the ja-JP locale prints it, e.g. `2024/5/1 9:03:07`
pub fn format_created_at<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    at.format("%Y/%-m/%-d %-H:%M:%S").to_string()
}

/// A single todo row
#[component]
pub fn TodoItem(
    todo: Todo,
    on_toggle: Callback<Todo>,
    on_edit: Callback<i64>,
    on_cancel_edit: Callback<()>,
    on_update: Callback<(i64, String, bool)>,
    on_delete: Callback<i64>,
) -> impl IntoView {
    let store = use_app_store();
    let id = todo.id;
    let todo = StoredValue::new(todo);
    let is_editing = move || store.editing_id().get() == Some(id);

    let display = move || {
        let current = todo.get_value();
        let created = format_created_at(&current.created_at.with_timezone(&Local));
        view! {
            <strong>{current.title.clone()}</strong>
            "（作成日時: " {created} "）"
            <button
                style="margin-right: 0.5em;"
                on:click=move |_| on_toggle.run(todo.get_value())
            >
                {if current.completed { "✅" } else { "☐" }}
            </button>
            <button
                style="margin-right: 0.5em;"
                on:click=move |_| on_edit.run(id)
            >
                "編集"
            </button>
            <button on:click=move |_| on_delete.run(id)>"削除"</button>
        }
    };

    view! {
        <li>
            <Show when=is_editing fallback=display>
                {move || {
                    let current = todo.get_value();
                    let completed = current.completed;
                    let submit = Callback::new(move |title: String| {
                        on_update.run((id, title, completed))
                    });
                    view! {
                        <TodoForm
                            on_submit=submit
                            initial_title=current.title
                            submit_label="更新"
                        />
                    }
                }}
                <button on:click=move |_| on_cancel_edit.run(())>"キャンセル"</button>
            </Show>
        </li>
    }
}
