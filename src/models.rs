//! Frontend Models
//!
//! Backend entities plus client-only view state.

pub use todo_client::Todo;

/// Which auth form is shown while logged out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthMode {
    #[default]
    Login,
    Register,
}

impl AuthMode {
    pub fn heading(&self) -> &'static str {
        match self {
            AuthMode::Login => "ログイン",
            AuthMode::Register => "会員登録",
        }
    }

    /// Prompt next to the button that switches to the other form
    pub fn switch_prompt(&self) -> &'static str {
        match self {
            AuthMode::Login => "アカウントをお持ちではありませんか？",
            AuthMode::Register => "すでにアカウントをお持ちですか？",
        }
    }

    pub fn other(&self) -> AuthMode {
        match self {
            AuthMode::Login => AuthMode::Register,
            AuthMode::Register => AuthMode::Login,
        }
    }
}
