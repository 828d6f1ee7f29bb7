//! HTTP client abstraction for testability

use std::fmt;

use async_trait::async_trait;
use serde::de::DeserializeOwned;

/// HTTP method used by the farm API
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Method::Get => write!(f, "GET"),
            Method::Post => write!(f, "POST"),
        }
    }
}

/// An outgoing request
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub bearer: Option<String>,
    pub body: Option<serde_json::Value>,
}

impl HttpRequest {
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            method: Method::Get,
            url: url.into(),
            bearer: None,
            body: None,
        }
    }

    pub fn post_json(url: impl Into<String>, body: serde_json::Value) -> Self {
        Self {
            method: Method::Post,
            url: url.into(),
            bearer: None,
            body: Some(body),
        }
    }

    /// Attach an `Authorization: Bearer` credential
    pub fn bearer(mut self, token: impl Into<String>) -> Self {
        self.bearer = Some(token.into());
        self
    }
}

/// HTTP response from a request
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Decode the body as JSON
    pub fn json<T: DeserializeOwned>(&self) -> crate::Result<T> {
        Ok(serde_json::from_str(&self.body)?)
    }
}

/// Abstraction over HTTP client for dependency injection
///
/// Browser fetch futures are not `Send`, so neither is this trait.
#[async_trait(?Send)]
#[cfg_attr(test, mockall::automock)]
pub trait HttpClient {
    /// Send a request and collect the full response body
    async fn send(&self, request: HttpRequest) -> crate::Result<HttpResponse>;
}

#[cfg(not(target_arch = "wasm32"))]
pub use native::ReqwestHttpClient;

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use async_trait::async_trait;

    use super::{HttpClient, HttpRequest, HttpResponse, Method};

    /// Production HTTP client using reqwest
    #[derive(Debug, Default)]
    pub struct ReqwestHttpClient {
        client: reqwest::Client,
    }

    #[async_trait(?Send)]
    impl HttpClient for ReqwestHttpClient {
        async fn send(&self, request: HttpRequest) -> crate::Result<HttpResponse> {
            let HttpRequest {
                method,
                url,
                bearer,
                body,
            } = request;
            tracing::debug!("{} {}", method, url);

            let mut builder = match method {
                Method::Get => self.client.get(&url),
                Method::Post => self.client.post(&url),
            };
            if let Some(token) = &bearer {
                builder = builder.bearer_auth(token);
            }
            if let Some(body) = &body {
                builder = builder.json(body);
            }

            let response = builder.send().await.map_err(|e| {
                crate::FarmError::Http(format!("{} {} failed: {}", method, url, e))
            })?;

            let status = response.status().as_u16();
            let body = response.text().await.map_err(|e| {
                crate::FarmError::Http(format!("Reading response body: {}", e))
            })?;

            tracing::debug!("{} {} -> {} ({} bytes)", method, url, status, body.len());
            Ok(HttpResponse { status, body })
        }
    }

}
