//! ToDo REST Client
//!
//! Typed wrappers over the backend's todo and auth endpoints.
//! Every wrapper performs exactly one HTTP request through a [`Transport`].

mod auth;
mod client;
mod error;
mod models;
mod todos;
mod transport;

#[cfg(test)]
mod testing;

pub use client::TodoClient;
pub use error::{ApiError, Operation};
pub use models::{Credentials, LoginStatus, NewTodo, Todo, TodoUpdate};
pub use transport::{ApiRequest, ApiResponse, HttpTransport, Method, Transport, TransportError};
