use async_trait::async_trait;
use gloo_net::http::Request;
use serde_json::Value;
use thiserror::Error;

/// Failure of a single HTTP round-trip
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("Request failed: {0}")]
    Network(String),

    #[error("HTTP error: {status} {text}")]
    Status { status: u16, text: String },

    #[error("Failed to parse response: {0}")]
    Decode(String),

    #[error("Failed to serialize request: {0}")]
    Encode(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    pub body: Option<Value>,
}

impl ApiRequest {
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            method: Method::Get,
            url: url.into(),
            body: None,
        }
    }

    pub fn delete(url: impl Into<String>) -> Self {
        Self {
            method: Method::Delete,
            url: url.into(),
            body: None,
        }
    }

    pub fn patch(url: impl Into<String>) -> Self {
        Self {
            method: Method::Patch,
            url: url.into(),
            body: None,
        }
    }

    pub fn with_body(method: Method, url: impl Into<String>, body: Value) -> Self {
        Self {
            method,
            url: url.into(),
            body: Some(body),
        }
    }
}

/// Sends JSON requests; any non-2xx status is an error
#[async_trait(?Send)]
pub trait HttpTransport {
    async fn send(&self, request: ApiRequest) -> Result<Value, ApiError>;
}

/// Browser fetch through gloo-net
#[derive(Debug, Clone, Copy, Default)]
pub struct GlooTransport;

#[async_trait(?Send)]
impl HttpTransport for GlooTransport {
    async fn send(&self, request: ApiRequest) -> Result<Value, ApiError> {
        let builder = match request.method {
            Method::Get => Request::get(&request.url),
            Method::Post => Request::post(&request.url),
            Method::Put => Request::put(&request.url),
            Method::Patch => Request::patch(&request.url),
            Method::Delete => Request::delete(&request.url),
        };

        let response = match (&request.body, request.method) {
            (Some(body), _) => {
                builder
                    .header("Content-Type", "application/json")
                    .json(body)
                    .map_err(|e| ApiError::Encode(e.to_string()))?
                    .send()
                    .await
            }
            (None, Method::Patch) => {
                builder
                    .header("Content-Type", "application/json")
                    .send()
                    .await
            }
            (None, _) => builder.send().await,
        }
        .map_err(|e| ApiError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(ApiError::Status {
                status: response.status(),
                text: response.status_text(),
            });
        }

        let text = response
            .text()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        decode_body(&text)
    }
}

/// Empty bodies (DELETE, PATCH status) decode to `null`
pub fn decode_body(text: &str) -> Result<Value, ApiError> {
    if text.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(text).map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_body() {
        assert_eq!(decode_body(""), Ok(Value::Null));
        assert_eq!(decode_body("  \n"), Ok(Value::Null));
        assert_eq!(decode_body(r#"{"id":1}"#), Ok(serde_json::json!({"id": 1})));
        assert!(matches!(decode_body("<html>"), Err(ApiError::Decode(_))));
    }

    #[test]
    fn test_error_messages() {
        let err = ApiError::Status {
            status: 404,
            text: "Not Found".into(),
        };
        assert_eq!(err.to_string(), "HTTP error: 404 Not Found");
        assert_eq!(
            ApiError::Network("offline".into()).to_string(),
            "Request failed: offline"
        );
    }
}
