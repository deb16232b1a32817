//! API Errors
//!
//! Every failure displays one fixed, user-facing message per operation.
//! The status code and the underlying cause are kept for logging.

use crate::transport::TransportError;

/// The API call that failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    FetchTodos,
    AddTodo,
    UpdateTodo,
    DeleteTodo,
    Register,
    Login,
    Logout,
    FetchLoginStatus,
}

impl Operation {
    /// Message shown to the user when this operation fails
    pub fn failure_message(&self) -> &'static str {
        match self {
            Operation::FetchTodos => "ToDo一覧の取得に失敗しました。",
            Operation::AddTodo => "ToDoの追加に失敗しました。",
            Operation::UpdateTodo => "ToDoの更新に失敗しました。",
            Operation::DeleteTodo => "ToDoの削除に失敗しました。",
            Operation::Register => "会員登録に失敗しました。",
            Operation::Login => "ログインに失敗しました。",
            Operation::Logout => "ログアウトに失敗しました。",
            Operation::FetchLoginStatus => "ログイン状態の取得に失敗しました。",
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Server answered outside 2xx
    #[error("{}", .operation.failure_message())]
    Status { operation: Operation, status: u16 },

    /// No response at all
    #[error("{}", .operation.failure_message())]
    Transport {
        operation: Operation,
        #[source]
        source: TransportError,
    },

    /// Body could not be encoded or the response could not be parsed
    #[error("{}", .operation.failure_message())]
    Decode {
        operation: Operation,
        #[source]
        source: serde_json::Error,
    },
}

impl ApiError {
    pub fn operation(&self) -> Operation {
        match self {
            ApiError::Status { operation, .. }
            | ApiError::Transport { operation, .. }
            | ApiError::Decode { operation, .. } => *operation,
        }
    }

    /// HTTP status, when the server responded
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_variant_shows_operation_message() {
        let status = ApiError::Status { operation: Operation::DeleteTodo, status: 404 };
        let transport = ApiError::Transport {
            operation: Operation::DeleteTodo,
            source: TransportError("connection refused".into()),
        };
        let json = ApiError::Decode {
            operation: Operation::DeleteTodo,
            source: serde_json::from_str::<u32>("x").unwrap_err(),
        };

        for err in [status, transport, json] {
            assert_eq!(err.to_string(), "ToDoの削除に失敗しました。");
            assert_eq!(err.operation(), Operation::DeleteTodo);
        }
    }

    #[test]
    fn test_status_only_for_http_failures() {
        let err = ApiError::Status { operation: Operation::Login, status: 401 };
        assert_eq!(err.status(), Some(401));

        let err = ApiError::Transport {
            operation: Operation::Login,
            source: TransportError("offline".into()),
        };
        assert_eq!(err.status(), None);
        let source = std::error::Error::source(&err).map(|s| s.to_string());
        assert_eq!(source, Some("offline".to_string()));
    }
}
