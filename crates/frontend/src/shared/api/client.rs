//! Seam between the page controllers and the REST backend.
//!
//! Controllers only see [`ApiClient`]; the browser build plugs in
//! [`super::http::HttpApiClient`], tests plug in an in-memory mock.

use super::error::{ApiError, CrudError};
use async_trait::async_trait;
use contracts::shared::ApiEnvelope;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

#[async_trait(?Send)]
pub trait ApiClient {
    /// Send one request and return the decoded envelope, whatever `sucesso` says
    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<ApiEnvelope<Value>, ApiError>;
}

pub type SharedClient = Rc<dyn ApiClient>;

/// Send and unwrap the envelope: `Ok(dados)` or the normalized failure
pub async fn call(
    client: &dyn ApiClient,
    method: Method,
    path: &str,
    body: Option<Value>,
) -> Result<Option<Value>, CrudError> {
    let envelope = client.send(method, path, body).await?;
    envelope.into_result().map_err(CrudError::from)
}

pub fn decode<T: DeserializeOwned>(value: Value) -> Result<T, CrudError> {
    serde_json::from_value(value).map_err(|e| ApiError::Decode(e.to_string()).into())
}

/// `GET` that must return `dados`
pub async fn get_data<T: DeserializeOwned>(
    client: &dyn ApiClient,
    path: &str,
) -> Result<T, CrudError> {
    match call(client, Method::Get, path, None).await? {
        Some(Value::Null) | None => Err(CrudError::NotFound),
        Some(value) => decode(value),
    }
}
