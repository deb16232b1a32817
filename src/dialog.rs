//! Blocking browser dialogs (`alert` / `confirm`).

use leptos::prelude::window;
use todo_client::ApiError;

pub fn alert(message: &str) {
    if let Err(err) = window().alert_with_message(message) {
        log::error!("alert failed: {:?}", err);
    }
}

/// `false` when the user cancels or the dialog can't be shown
pub fn confirm(message: &str) -> bool {
    window().confirm_with_message(message).unwrap_or(false)
}

/// Log the full error, show the user its fixed message
pub fn alert_error(err: &ApiError) {
    log::error!("{:?}", err);
    alert(&err.to_string());
}
