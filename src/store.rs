//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.
//! Only the root controller writes to it.

use leptos::prelude::*;
use reactive_stores::Store;
use todo_client::ApiError;

use crate::models::{AuthMode, Todo};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Last list fetched from the server
    pub todos: Vec<Todo>,
    /// Todo whose edit form is open
    pub editing_id: Option<i64>,
    pub is_logged_in: bool,
    /// Auth form shown while logged out
    pub auth_mode: AuthMode,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Drop everything tied to the current session
pub fn store_clear_session(store: &AppStore) {
    store.is_logged_in().set(false);
    store.todos().write().clear();
    store.editing_id().set(None);
}

/// Registration done: the user logs in next
pub fn store_finish_register(store: &AppStore) {
    store.auth_mode().set(AuthMode::Login);
}

/// Edit saved: close the edit form
pub fn store_finish_update(store: &AppStore) {
    store.editing_id().set(None);
}

/// Apply a todo list fetch.
///
/// Results that land after logout are dropped, errors included.
/// Returns the error the user should see, if any.
pub fn store_apply_fetch(
    store: &AppStore,
    result: Result<Vec<Todo>, ApiError>,
) -> Option<ApiError> {
    if !store.is_logged_in().get_untracked() {
        if let Err(err) = result {
            log::debug!("dropping fetch error after logout: {:?}", err);
        }
        return None;
    }
    match result {
        Ok(todos) => {
            log::debug!("loaded {} todos", todos.len());
            store.todos().set(todos);
            None
        }
        Err(err) => Some(err),
    }
}
