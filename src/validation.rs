//! Form Validation
//!
//! Input state for the forms, kept free of Leptos so it can be unit tested.

pub const TITLE_MAX_CHARS: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TitleError {
    Empty,
    TooLong,
}

impl TitleError {
    pub fn message(&self) -> &'static str {
        match self {
            TitleError::Empty => "Todoを入力してください。",
            TitleError::TooLong => "Todoは50文字以内で入力してください。",
        }
    }
}

/// Trimmed title, or why it can't be submitted
pub fn validate_title(input: &str) -> Result<String, TitleError> {
    let title = input.trim();
    if title.is_empty() {
        return Err(TitleError::Empty);
    }
    if title.chars().count() > TITLE_MAX_CHARS {
        return Err(TitleError::TooLong);
    }
    Ok(title.to_string())
}

/// Contents of a todo title form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TitleDraft {
    pub title: String,
    pub error: Option<TitleError>,
}

impl TitleDraft {
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            title: initial.into(),
            error: None,
        }
    }

    /// Returns the title to hand to the submit callback.
    /// On success the input and error are cleared; on failure only the error is set.
    pub fn submit(&mut self) -> Option<String> {
        match validate_title(&self.title) {
            Ok(title) => {
                self.title.clear();
                self.error = None;
                Some(title)
            }
            Err(err) => {
                self.error = Some(err);
                None
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialsError {
    MissingEmail,
    MissingPassword,
}

impl CredentialsError {
    pub fn message(&self) -> &'static str {
        match self {
            CredentialsError::MissingEmail => "メールアドレスを入力してください。",
            CredentialsError::MissingPassword => "パスワードを入力してください。",
        }
    }
}

/// Email is trimmed; the password is passed through untouched
pub fn validate_credentials(
    email: &str,
    password: &str,
) -> Result<(String, String), CredentialsError> {
    let email = email.trim();
    if email.is_empty() {
        return Err(CredentialsError::MissingEmail);
    }
    if password.is_empty() {
        return Err(CredentialsError::MissingPassword);
    }
    Ok((email.to_string(), password.to_string()))
}

/// Contents of the login / register forms
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CredentialsDraft {
    pub email: String,
    pub password: String,
    pub error: Option<CredentialsError>,
}

impl CredentialsDraft {
    /// Keeps the email after a successful submit, forgets the password
    pub fn submit(&mut self) -> Option<(String, String)> {
        match validate_credentials(&self.email, &self.password) {
            Ok(credentials) => {
                self.password.clear();
                self.error = None;
                Some(credentials)
            }
            Err(err) => {
                self.error = Some(err);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_title_rejected() {
        assert_eq!(validate_title(""), Err(TitleError::Empty));
        assert_eq!(validate_title("   \t\n"), Err(TitleError::Empty));
        // Full-width space counts as whitespace
        assert_eq!(validate_title("\u{3000}"), Err(TitleError::Empty));
        assert_eq!(TitleError::Empty.message(), "Todoを入力してください。");
    }

    #[test]
    fn test_title_length_limit() {
        let fifty = "あ".repeat(50);
        assert_eq!(validate_title(&fifty), Ok(fifty.clone()));

        let fifty_one = "a".repeat(51);
        assert_eq!(validate_title(&fifty_one), Err(TitleError::TooLong));
        assert_eq!(TitleError::TooLong.message(), "Todoは50文字以内で入力してください。");

        // Surrounding whitespace doesn't count towards the limit
        let padded = format!("  {}  ", "b".repeat(50));
        assert_eq!(validate_title(&padded), Ok("b".repeat(50)));
    }

    #[test]
    fn test_rejected_submit_keeps_input() {
        let mut draft = TitleDraft::new("  ");
        assert_eq!(draft.submit(), None);
        assert_eq!(draft.error, Some(TitleError::Empty));
        assert_eq!(draft.title, "  ");

        draft.title = "x".repeat(51);
        assert_eq!(draft.submit(), None);
        assert_eq!(draft.error, Some(TitleError::TooLong));
        assert_eq!(draft.title.len(), 51);
    }

    #[test]
    fn test_successful_submit_clears_input_and_error() {
        let mut draft = TitleDraft::new("");
        assert_eq!(draft.submit(), None);
        assert!(draft.error.is_some());

        draft.title = " 牛乳を買う ".to_string();
        assert_eq!(draft.submit(), Some("牛乳を買う".to_string()));
        assert_eq!(draft, TitleDraft::default());
    }

    #[test]
    fn test_edit_draft_starts_with_title() {
        let mut draft = TitleDraft::new("部屋の掃除");
        assert_eq!(draft.submit(), Some("部屋の掃除".to_string()));
        assert!(draft.title.is_empty());
    }

    #[test]
    fn test_credentials_required() {
        assert_eq!(validate_credentials(" ", "pw"), Err(CredentialsError::MissingEmail));
        assert_eq!(
            validate_credentials("a@example.com", ""),
            Err(CredentialsError::MissingPassword)
        );
        assert_eq!(
            validate_credentials(" a@example.com ", " pw "),
            Ok(("a@example.com".to_string(), " pw ".to_string()))
        );
    }

    #[test]
    fn test_credentials_draft_submit() {
        let mut draft = CredentialsDraft {
            email: "a@example.com".to_string(),
            ..Default::default()
        };
        assert_eq!(draft.submit(), None);
        assert_eq!(draft.error.map(|e| e.message()), Some("パスワードを入力してください。"));

        draft.password = "secret".to_string();
        assert_eq!(draft.submit(), Some(("a@example.com".to_string(), "secret".to_string())));
        assert_eq!(draft.email, "a@example.com");
        assert!(draft.password.is_empty());
        assert_eq!(draft.error, None);
    }
}
