//! UI Components
//!
//! Reusable Leptos components.

mod auth_forms;
mod auth_panel;
mod header;
mod todo_form;
mod todo_item;
mod todo_list;

pub use auth_forms::{LoginForm, RegisterForm};
pub use auth_panel::AuthPanel;
pub use header::Header;
pub use todo_form::TodoForm;
pub use todo_item::TodoItem;
pub use todo_list::TodoList;
