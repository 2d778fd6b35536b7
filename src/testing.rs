//! Recording transport used by the service tests.

use crate::error::{ApiError, IncreaseError};
use crate::requester::{ApiRequest, Requester};
use serde_json::Value;
use std::collections::VecDeque;
use std::future::{self, Future};
use std::sync::Mutex;

#[derive(Debug, Default)]
pub struct MockRequester {
    responses: Mutex<VecDeque<Result<String, ApiError>>>,
    calls: Mutex<Vec<ApiRequest>>,
}

impl MockRequester {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(self, body: Value) -> Self {
        self.respond_raw(&body.to_string())
    }

    pub fn respond_raw(self, body: &str) -> Self {
        self.push(Ok(body.to_string()))
    }

    pub fn fail(self, status: u16, body: Value) -> Self {
        self.push(Err(ApiError::from_response(status, &body.to_string())))
    }

    fn push(self, response: Result<String, ApiError>) -> Self {
        self.responses
            .lock()
            .expect("responses lock")
            .push_back(response);
        self
    }

    pub fn calls(&self) -> Vec<ApiRequest> {
        self.calls.lock().expect("calls lock").clone()
    }

    pub fn last_call(&self) -> ApiRequest {
        self.calls()
            .pop()
            .expect("at least one request should have been sent")
    }
}

impl Requester for MockRequester {
    fn send(
        &self,
        request: ApiRequest,
    ) -> impl Future<Output = Result<String, IncreaseError>> + Send {
        self.calls.lock().expect("calls lock").push(request);
        let response = self
            .responses
            .lock()
            .expect("responses lock")
            .pop_front()
            .expect("no response queued for request");
        future::ready(response.map_err(IncreaseError::Api))
    }
}
