//! API Client
//!
//! Base URL plus transport; the endpoint wrappers live in `todos` and `auth`.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{ApiError, Operation};
use crate::transport::{ApiRequest, ApiResponse, HttpTransport, Method, Transport};

/// Client for the ToDo backend
#[derive(Debug, Clone)]
pub struct TodoClient<T = HttpTransport> {
    base_url: String,
    transport: T,
}

impl TodoClient<HttpTransport> {
    /// Client talking HTTP to `base_url`
    pub fn http(base_url: &str) -> Self {
        Self::new(base_url, HttpTransport::new())
    }
}

impl<T: Transport> TodoClient<T> {
    pub fn new(base_url: &str, transport: T) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            transport,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// `path` must start with `/`
    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub(crate) fn request(&self, method: Method, path: &str) -> ApiRequest {
        ApiRequest::new(method, self.url(path))
    }

    pub(crate) fn json_request<B: Serialize>(
        &self,
        operation: Operation,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<ApiRequest, ApiError> {
        self.request(method, path)
            .with_json(body)
            .map_err(|source| ApiError::Decode { operation, source })
    }

    /// Send one request; anything but 2xx becomes an error
    pub(crate) async fn execute(
        &self,
        operation: Operation,
        request: ApiRequest,
    ) -> Result<ApiResponse, ApiError> {
        log::debug!("{} {} ({:?})", request.method.as_str(), request.url, operation);

        let response = self.transport.send(request).await.map_err(|source| {
            log::warn!("{:?} failed before a response: {}", operation, source);
            ApiError::Transport { operation, source }
        })?;

        if !response.is_success() {
            log::warn!("{:?} failed with status {}", operation, response.status);
            return Err(ApiError::Status {
                operation,
                status: response.status,
            });
        }

        Ok(response)
    }

    /// `execute`, then parse the body as JSON
    pub(crate) async fn execute_json<R: DeserializeOwned>(
        &self,
        operation: Operation,
        request: ApiRequest,
    ) -> Result<R, ApiError> {
        let response = self.execute(operation, request).await?;
        serde_json::from_str(&response.body).map_err(|source| {
            log::warn!("{:?} returned an unreadable body: {}", operation, source);
            ApiError::Decode { operation, source }
        })
    }
}
