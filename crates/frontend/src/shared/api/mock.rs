//! In-memory [`ApiClient`] for controller tests

use super::client::{ApiClient, Method};
use super::error::ApiError;
use async_trait::async_trait;
use contracts::shared::ApiEnvelope;
use serde_json::Value;
use std::cell::RefCell;
use std::collections::VecDeque;

#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub method: Method,
    pub path: String,
    pub body: Option<Value>,
}

/// Replays queued envelopes in order and records every request
#[derive(Default)]
pub struct MockApiClient {
    calls: RefCell<Vec<RecordedCall>>,
    replies: RefCell<VecDeque<Result<Value, ApiError>>>,
}

impl MockApiClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a raw envelope as the next reply
    pub fn reply(&self, envelope: Value) -> &Self {
        self.replies.borrow_mut().push_back(Ok(envelope));
        self
    }

    pub fn fail(&self, error: ApiError) -> &Self {
        self.replies.borrow_mut().push_back(Err(error));
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }

    pub fn last_call(&self) -> Option<RecordedCall> {
        self.calls.borrow().last().cloned()
    }
}

#[async_trait(?Send)]
impl ApiClient for MockApiClient {
    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<ApiEnvelope<Value>, ApiError> {
        self.calls.borrow_mut().push(RecordedCall {
            method,
            path: path.to_string(),
            body,
        });
        let reply = self
            .replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Network(format!("no reply queued for {}", path))))?;
        serde_json::from_value(reply).map_err(|e| ApiError::Decode(e.to_string()))
    }
}
