use super::client::{ApiClient, Method};
use super::error::ApiError;
use crate::shared::api_utils::join_url;
use crate::system::auth::{session, storage};
use async_trait::async_trait;
use contracts::shared::ApiEnvelope;
use gloo_net::http::{Request, RequestBuilder};
use serde_json::Value;

/// Browser client: `fetch` through gloo-net with the stored bearer token
pub struct HttpApiClient {
    base: String,
    login_url: String,
}

impl HttpApiClient {
    pub fn new(base: impl Into<String>, login_url: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            login_url: login_url.into(),
        }
    }

    fn builder(&self, method: Method, url: &str) -> RequestBuilder {
        let builder = match method {
            Method::Get => Request::get(url),
            Method::Post => Request::post(url),
            Method::Put => Request::put(url),
            Method::Delete => Request::delete(url),
        }
        .header("Accept", "application/json");

        match storage::get_access_token() {
            Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
            None => builder,
        }
    }
}

#[async_trait(?Send)]
impl ApiClient for HttpApiClient {
    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<ApiEnvelope<Value>, ApiError> {
        let url = join_url(&self.base, path);
        log::debug!("{} {}", method.as_str(), url);

        let builder = self.builder(method, &url);
        let response = match body {
            Some(body) => builder
                .json(&body)
                .map_err(|e| ApiError::Network(format!("Failed to serialize request: {}", e)))?
                .send()
                .await,
            None => builder.send().await,
        }
        .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        if status == 401 {
            log::warn!("{} {} answered 401, ending session", method.as_str(), url);
            session::expire(&self.login_url);
            return Err(ApiError::Unauthorized);
        }

        let text = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        decode_envelope(status, response.ok(), &text)
    }
}

/// Non-2xx bodies are still read as envelopes when they parse as one
fn decode_envelope(status: u16, ok: bool, text: &str) -> Result<ApiEnvelope<Value>, ApiError> {
    if text.trim().is_empty() {
        return if ok {
            Ok(ApiEnvelope {
                sucesso: true,
                dados: None,
                mensagem: None,
                erros: None,
            })
        } else {
            Err(ApiError::Status { status })
        };
    }

    match serde_json::from_str::<ApiEnvelope<Value>>(text) {
        Ok(envelope) => Ok(envelope),
        Err(e) if ok => Err(ApiError::Decode(e.to_string())),
        Err(_) => Err(ApiError::Status { status }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_body_is_read_as_envelope() {
        let env = decode_envelope(422, false, r#"{"sucesso":false,"erros":{"nome":"obrigatório"}}"#)
            .unwrap();
        let failure = env.into_result().unwrap_err();
        assert_eq!(failure.field_errors["nome"], "obrigatório");
    }

    #[test]
    fn test_html_error_page_becomes_status_error() {
        let err = decode_envelope(502, false, "<html>Bad Gateway</html>").unwrap_err();
        assert_eq!(err, ApiError::Status { status: 502 });
    }

    #[test]
    fn test_empty_success_body() {
        let env = decode_envelope(204, true, "").unwrap();
        assert_eq!(env.into_result().unwrap(), None);
    }

    #[test]
    fn test_garbage_success_body_is_decode_error() {
        assert!(matches!(
            decode_envelope(200, true, "not json"),
            Err(ApiError::Decode(_))
        ));
    }
}
