//! In-memory transport for async tests

use std::cell::RefCell;
use std::collections::VecDeque;

use async_trait::async_trait;
use serde_json::Value;

use super::api::{ApiError, ApiRequest, HttpTransport};

/// Replays queued outcomes in order and records every request.
/// An empty queue behaves like an unreachable server.
#[derive(Default)]
pub struct FakeTransport {
    outcomes: RefCell<VecDeque<Result<Value, ApiError>>>,
    requests: RefCell<Vec<ApiRequest>>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, body: Value) {
        self.outcomes.borrow_mut().push_back(Ok(body));
    }

    pub fn fail(&self, error: ApiError) {
        self.outcomes.borrow_mut().push_back(Err(error));
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.borrow().clone()
    }
}

#[async_trait(?Send)]
impl HttpTransport for FakeTransport {
    async fn send(&self, request: ApiRequest) -> Result<Value, ApiError> {
        self.requests.borrow_mut().push(request);
        self.outcomes
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Network("no response queued".into())))
    }
}
