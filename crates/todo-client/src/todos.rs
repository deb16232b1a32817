//! Todo Endpoints
//!
//! One HTTP call per function. Mutations discard the response body.

use crate::client::TodoClient;
use crate::error::{ApiError, Operation};
use crate::models::{NewTodo, Todo, TodoUpdate};
use crate::transport::{Method, Transport};

impl<T: Transport> TodoClient<T> {
    /// `GET /todos`
    pub async fn fetch_todos(&self) -> Result<Vec<Todo>, ApiError> {
        let request = self.request(Method::Get, "/todos");
        self.execute_json(Operation::FetchTodos, request).await
    }

    /// `POST /todos` with `{title}`
    pub async fn add_todo(&self, title: &str) -> Result<(), ApiError> {
        let op = Operation::AddTodo;
        let request = self.json_request(op, Method::Post, "/todos", &NewTodo { title })?;
        self.execute(op, request).await?;
        Ok(())
    }

    /// `PUT /todos/:id` with `{title, completed}`
    pub async fn update_todo(&self, id: i64, title: &str, completed: bool) -> Result<(), ApiError> {
        let op = Operation::UpdateTodo;
        let path = format!("/todos/{}", id);
        let request = self.json_request(op, Method::Put, &path, &TodoUpdate { title, completed })?;
        self.execute(op, request).await?;
        Ok(())
    }

    /// `DELETE /todos/:id`
    pub async fn delete_todo(&self, id: i64) -> Result<(), ApiError> {
        let request = self.request(Method::Delete, &format!("/todos/{}", id));
        self.execute(Operation::DeleteTodo, request).await?;
        Ok(())
    }

    /// Flip completion, sending the title the client currently shows
    pub async fn toggle_todo(&self, todo: &Todo) -> Result<(), ApiError> {
        let update = todo.toggled();
        self.update_todo(todo.id, update.title, update.completed).await
    }
}
