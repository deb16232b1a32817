//! Wire Models
//!
//! Data structures matching the backend's JSON.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Todo record (server-assigned id and creation time)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: i64,
    pub title: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}

impl Todo {
    /// Update body that flips completion and keeps the current title
    pub fn toggled(&self) -> TodoUpdate<'_> {
        TodoUpdate {
            title: &self.title,
            completed: !self.completed,
        }
    }
}

/// `POST /todos` body
#[derive(Debug, Clone, Copy, Serialize)]
pub struct NewTodo<'a> {
    pub title: &'a str,
}

/// `PUT /todos/:id` body
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TodoUpdate<'a> {
    pub title: &'a str,
    pub completed: bool,
}

/// Register / login body
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Credentials<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// `GET /auth/status` response
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct LoginStatus {
    #[serde(rename = "isLoggedIn")]
    pub is_logged_in: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_todo_from_backend_json() {
        let json = r#"{"id":12,"title":"牛乳を買う","completed":false,
            "createdAt":"2024-05-01T03:04:05.000Z"}"#;
        let todo: Todo = serde_json::from_str(json).unwrap();

        assert_eq!(todo.id, 12);
        assert_eq!(todo.title, "牛乳を買う");
        assert!(!todo.completed);
        assert_eq!(todo.created_at, Utc.with_ymd_and_hms(2024, 5, 1, 3, 4, 5).unwrap());
    }

    #[test]
    fn test_toggled_keeps_title() {
        let todo = Todo {
            id: 1,
            title: "散歩".to_string(),
            completed: true,
            created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        };

        let update = todo.toggled();
        assert_eq!(update, TodoUpdate { title: "散歩", completed: false });
    }

    #[test]
    fn test_login_status_key() {
        let status: LoginStatus = serde_json::from_str(r#"{"isLoggedIn":true}"#).unwrap();
        assert!(status.is_logged_in);
    }
}
