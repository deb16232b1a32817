//! Application Context
//!
//! Shared handles provided via Leptos Context API.

use leptos::prelude::*;
use todo_client::TodoClient;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Bumped after every mutation; the todo list reloads when it changes - read
    pub reload_trigger: ReadSignal<u32>,
    /// Bumped after every mutation; the todo list reloads when it changes - write
    set_reload_trigger: WriteSignal<u32>,
    /// Backend client
    client: StoredValue<TodoClient, LocalStorage>,
}

impl AppContext {
    pub fn new(reload_trigger: (ReadSignal<u32>, WriteSignal<u32>), client: TodoClient) -> Self {
        Self {
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
            client: StoredValue::new_local(client),
        }
    }

    /// Re-fetch the todo list from the server
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    /// Cheap clone, safe to move into `spawn_local`
    pub fn client(&self) -> TodoClient {
        self.client.get_value()
    }
}
