//! In-memory transport for tests: records requests, replays queued responses.

use std::cell::RefCell;
use std::collections::VecDeque;

use async_trait::async_trait;

use crate::client::TodoClient;
use crate::transport::{ApiRequest, ApiResponse, Transport, TransportError};

#[derive(Default)]
pub struct RecordingTransport {
    requests: RefCell<Vec<ApiRequest>>,
    responses: RefCell<VecDeque<Result<ApiResponse, TransportError>>>,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(self, status: u16, body: &str) -> Self {
        self.responses.borrow_mut().push_back(Ok(ApiResponse {
            status,
            body: body.to_string(),
        }));
        self
    }

    pub fn fail(self, message: &str) -> Self {
        self.responses
            .borrow_mut()
            .push_back(Err(TransportError(message.to_string())));
        self
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.borrow().clone()
    }
}

#[async_trait(?Send)]
impl Transport for RecordingTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        self.requests.borrow_mut().push(request);
        // Unscripted calls get an empty 200
        self.responses.borrow_mut().pop_front().unwrap_or(Ok(ApiResponse {
            status: 200,
            body: String::new(),
        }))
    }
}

pub const BASE_URL: &str = "http://api.test";

pub fn client(transport: RecordingTransport) -> TodoClient<RecordingTransport> {
    TodoClient::new(BASE_URL, transport)
}
