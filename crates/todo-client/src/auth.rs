//! Auth Endpoints
//!
//! Session-cookie auth: the server sets the cookie on login and clears it on logout.

use crate::client::TodoClient;
use crate::error::{ApiError, Operation};
use crate::models::{Credentials, LoginStatus};
use crate::transport::{Method, Transport};

impl<T: Transport> TodoClient<T> {
    /// `POST /auth/register` with `{email, password}`
    pub async fn register(&self, email: &str, password: &str) -> Result<(), ApiError> {
        let op = Operation::Register;
        let body = Credentials { email, password };
        let request = self.json_request(op, Method::Post, "/auth/register", &body)?;
        self.execute(op, request).await?;
        Ok(())
    }

    /// `POST /auth/login` with `{email, password}`
    pub async fn login(&self, email: &str, password: &str) -> Result<(), ApiError> {
        let op = Operation::Login;
        let body = Credentials { email, password };
        let request = self.json_request(op, Method::Post, "/auth/login", &body)?;
        self.execute(op, request).await?;
        Ok(())
    }

    /// `POST /auth/logout`
    pub async fn logout(&self) -> Result<(), ApiError> {
        let request = self.request(Method::Post, "/auth/logout");
        self.execute(Operation::Logout, request).await?;
        Ok(())
    }

    /// `GET /auth/status` -> `{isLoggedIn}`
    pub async fn fetch_login_status(&self) -> Result<bool, ApiError> {
        let request = self.request(Method::Get, "/auth/status");
        let status: LoginStatus = self.execute_json(Operation::FetchLoginStatus, request).await?;
        Ok(status.is_logged_in)
    }
}
