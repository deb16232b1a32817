//! Todo Form Component
//!
//! Title input used both for adding and for editing a todo.

use leptos::prelude::*;

use crate::validation::{TitleDraft, TITLE_MAX_CHARS};

/// Validates the title and hands the trimmed value to `on_submit`
#[component]
pub fn TodoForm(
    #[prop(into)] on_submit: Callback<String>,
    #[prop(optional, into)] initial_title: String,
    #[prop(default = "追加")] submit_label: &'static str,
) -> impl IntoView {
    let draft = RwSignal::new(TitleDraft::new(initial_title));

    let handle_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let mut submitted = None;
        draft.update(|d| submitted = d.submit());
        if let Some(title) = submitted {
            on_submit.run(title);
        }
    };

    view! {
        <form class="todo-form" on:submit=handle_submit>
            {move || draft.with(|d| d.error).map(|err| view! {
                <p style="color: red;">{err.message()}</p>
            })}
            <input
                type="text"
                name="title"
                placeholder="Todoを入力"
                maxlength=TITLE_MAX_CHARS.to_string()
                prop:value=move || draft.with(|d| d.title.clone())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    draft.update(|d| d.title = value);
                }
            />
            <button type="submit">{submit_label}</button>
        </form>
    }
}
