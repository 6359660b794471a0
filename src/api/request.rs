//! HTTP transport wrapper.
//!
//! Every backend call goes through [`ApiClient::send`]: it prefixes the
//! configured base path, enforces a fixed timeout, injects the auth token
//! when the call opts in, and collapses the raw response into the body the
//! caller sees. Callers get no headers and no status code back, only the
//! JSON body of a 200 response.

use std::rc::Rc;

use futures::future::{self, Either};
use gloo_net::http::{Request, Response};
use gloo_timers::future::TimeoutFuture;
use serde::de::DeserializeOwned;
use serde_json::Value;
use web_sys::console;

/// Default API base path; rewritten to the backend by the dev-server proxy.
pub const DEFAULT_API_BASE: &str = "/api";

/// Fixed request timeout, not configurable per call.
pub const REQUEST_TIMEOUT_MS: u32 = 5000;

/// localStorage key the auth token is stored under.
pub const TOKEN_STORAGE_KEY: &str = "access_token";

/// localStorage key for the API base path override.
const API_BASE_STORAGE_KEY: &str = "kinatlas_api_base";

/// Header field name carrying the auth token.
pub const TOKEN_HEADER: &str = "token";

/// HTTP verb of a [`RequestDescriptor`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// One outgoing call: verb, path, optional JSON payload, token opt-in.
///
/// Descriptors are built ad hoc per call by the endpoint functions and are
/// never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestDescriptor {
    pub method: Method,
    pub path: String,
    pub payload: Option<Value>,
    pub with_token: bool,
}

impl RequestDescriptor {
    /// A GET request without payload.
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: Method::Get,
            path: path.into(),
            payload: None,
            with_token: false,
        }
    }

    /// A POST request carrying a JSON payload.
    pub fn post(path: impl Into<String>, payload: Value) -> Self {
        Self {
            method: Method::Post,
            path: path.into(),
            payload: Some(payload),
            with_token: false,
        }
    }

    /// Opt this call into auth token injection.
    pub fn with_token(mut self) -> Self {
        self.with_token = true;
        self
    }
}

/// Where the auth token comes from. Queried once per outgoing request so a
/// token written after startup is picked up without a reload.
pub trait CredentialProvider {
    fn token(&self) -> Option<String>;
}

/// Reads the token from `window.localStorage` under [`TOKEN_STORAGE_KEY`].
pub struct LocalStorageCredentials;

impl CredentialProvider for LocalStorageCredentials {
    fn token(&self) -> Option<String> {
        read_storage(TOKEN_STORAGE_KEY)
    }
}

/// Fixed credentials for tests and non-browser targets.
pub struct StaticCredentials(Option<String>);

impl StaticCredentials {
    pub fn new(token: impl Into<String>) -> Self {
        Self(Some(token.into()))
    }

    pub fn anonymous() -> Self {
        Self(None)
    }
}

impl CredentialProvider for StaticCredentials {
    fn token(&self) -> Option<String> {
        self.0.clone()
    }
}

/// Transport failures, normalized.
///
/// The `Display` of [`RequestError::Transport`] is exactly the original
/// failure message; callers surface it to the user unchanged.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RequestError {
    #[error("request timed out after {0} ms")]
    Timeout(u32),

    #[error("{0}")]
    Transport(String),

    #[error("request failed with status {0}")]
    Status(u16),

    #[error("invalid response body: {0}")]
    Decode(String),
}

/// Shared HTTP client: base path, timeout and credential provider.
#[derive(Clone)]
pub struct ApiClient {
    base: String,
    timeout_ms: u32,
    credentials: Rc<dyn CredentialProvider>,
}

impl ApiClient {
    /// Client with the persisted base path and localStorage credentials.
    pub fn new() -> Self {
        Self::with_parts(get_api_base(), Rc::new(LocalStorageCredentials))
    }

    /// Client with explicit base path and credentials (tests, embedding).
    pub fn with_parts(base: impl Into<String>, credentials: Rc<dyn CredentialProvider>) -> Self {
        Self {
            base: base.into(),
            timeout_ms: REQUEST_TIMEOUT_MS,
            credentials,
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    /// Issue one call described by `descriptor`.
    ///
    /// Resolves to `Some(body)` only for status 200. Any other success
    /// status resolves to `None`: the upstream contract never handled
    /// 201/204 and callers have come to rely on the absent body.
    pub async fn send(&self, descriptor: RequestDescriptor) -> Result<Option<Value>, RequestError> {
        let url = resolve_url(&self.base, &descriptor.path);

        let mut builder = match descriptor.method {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
        };

        if let Some(token) = token_header(&descriptor, self.credentials.as_ref()) {
            builder = builder.header(TOKEN_HEADER, &token);
        }

        type SendFuture =
            std::pin::Pin<Box<dyn std::future::Future<Output = Result<Response, gloo_net::Error>>>>;
        let send: SendFuture =
            match &descriptor.payload {
                Some(payload) => {
                    let request = builder
                        .json(payload)
                        .map_err(|e| RequestError::Transport(e.to_string()))?;
                    Box::pin(request.send())
                }
                None => Box::pin(builder.send()),
            };
        let timeout = Box::pin(TimeoutFuture::new(self.timeout_ms));

        let result = match future::select(send, timeout).await {
            Either::Left((result, _)) => result,
            Either::Right(_) => {
                console::error_1(
                    &format!("request to {} timed out after {} ms", url, self.timeout_ms).into(),
                );
                return Err(RequestError::Timeout(self.timeout_ms));
            }
        };

        let response = result.map_err(|e| {
            let message = e.to_string();
            console::error_1(&format!("request to {} failed: {}", url, message).into());
            RequestError::Transport(message)
        })?;

        let status = response.status();
        if status >= 400 {
            log_status(status);
        }

        let body = if status == 200 {
            Some(
                response
                    .json::<Value>()
                    .await
                    .map_err(|e| RequestError::Decode(e.to_string()))?,
            )
        } else {
            None
        };

        normalize(status, body)
    }

    /// [`ApiClient::send`] plus typed deserialization of the 200 body.
    pub async fn send_as<T: DeserializeOwned>(
        &self,
        descriptor: RequestDescriptor,
    ) -> Result<Option<T>, RequestError> {
        match self.send(descriptor).await? {
            Some(value) => serde_json::from_value(value)
                .map(Some)
                .map_err(|e| RequestError::Decode(e.to_string())),
            None => Ok(None),
        }
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Prefix `path` with the base, tolerating stray slashes on either side.
pub fn resolve_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    if path.starts_with('/') {
        format!("{}{}", base, path)
    } else {
        format!("{}/{}", base, path)
    }
}

/// Token to inject, if the call opted in and the provider has one.
pub fn token_header(
    descriptor: &RequestDescriptor,
    credentials: &dyn CredentialProvider,
) -> Option<String> {
    if descriptor.with_token {
        credentials.token()
    } else {
        None
    }
}

/// Collapse a transport status into the caller-visible result.
///
/// 200 yields the body, other success statuses yield nothing, everything
/// else is an error carrying the status code.
pub fn normalize(status: u16, body: Option<Value>) -> Result<Option<Value>, RequestError> {
    match status {
        200 => Ok(body),
        201..=399 => Ok(None),
        _ => Err(RequestError::Status(status)),
    }
}

/// Diagnostic dispatch on error statuses; only 404 and 500 are called out,
/// everything else falls through silently.
fn log_status(status: u16) {
    match status {
        404 => console::warn_1(&"resource not found (404)".into()),
        500 => console::warn_1(&"server fault (500)".into()),
        _ => {}
    }
}

/// API base path from localStorage, or the default.
pub fn get_api_base() -> String {
    read_storage(API_BASE_STORAGE_KEY)
        .unwrap_or_else(|| DEFAULT_API_BASE.to_string())
        .trim_end_matches('/')
        .to_string()
}

/// Persist an API base path override.
pub fn set_api_base(url: &str) {
    write_storage(API_BASE_STORAGE_KEY, Some(url));
}

/// Persist the auth token under [`TOKEN_STORAGE_KEY`].
pub fn set_token(token: &str) {
    write_storage(TOKEN_STORAGE_KEY, Some(token));
}

/// Drop the persisted auth token.
pub fn clear_token() {
    write_storage(TOKEN_STORAGE_KEY, None);
}

fn read_storage(key: &str) -> Option<String> {
    let window = web_sys::window()?;
    let storage = window.local_storage().ok().flatten()?;
    storage.get_item(key).ok().flatten()
}

fn write_storage(key: &str, value: Option<&str>) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = match value {
                Some(value) => storage.set_item(key, value),
                None => storage.remove_item(key),
            };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_resolve_url_applies_base_prefix() {
        assert_eq!(resolve_url("/api", "/books"), "/api/books");
        assert_eq!(resolve_url("/api/", "/books"), "/api/books");
        assert_eq!(resolve_url("http://localhost:8000", "books"), "http://localhost:8000/books");
    }

    #[test]
    fn test_descriptor_get_defaults() {
        let descriptor = RequestDescriptor::get("/books");
        assert_eq!(descriptor.method, Method::Get);
        assert_eq!(descriptor.path, "/books");
        assert_eq!(descriptor.payload, None);
        assert!(!descriptor.with_token);
    }

    #[test]
    fn test_descriptor_post_carries_payload() {
        let descriptor = RequestDescriptor::post("/chat", json!({"data": "hi"}));
        assert_eq!(descriptor.method, Method::Post);
        assert_eq!(descriptor.payload, Some(json!({"data": "hi"})));
        assert!(!descriptor.with_token);
    }

    #[test]
    fn test_token_injected_only_on_opt_in() {
        let credentials = StaticCredentials::new("secret");

        let opted_in = RequestDescriptor::get("/books").with_token();
        assert_eq!(token_header(&opted_in, &credentials), Some("secret".to_string()));

        let opted_out = RequestDescriptor::get("/books");
        assert_eq!(token_header(&opted_out, &credentials), None);
    }

    #[test]
    fn test_no_token_without_credentials() {
        let credentials = StaticCredentials::anonymous();
        let descriptor = RequestDescriptor::get("/books").with_token();
        assert_eq!(token_header(&descriptor, &credentials), None);
    }

    #[test]
    fn test_normalize_returns_body_for_200() {
        let body = json!({"name": "X"});
        assert_eq!(normalize(200, Some(body.clone())), Ok(Some(body)));
    }

    #[test]
    fn test_normalize_drops_body_for_other_success() {
        // Characterizes the inherited gap: 201/204/304 resolve to nothing.
        assert_eq!(normalize(201, None), Ok(None));
        assert_eq!(normalize(204, None), Ok(None));
        assert_eq!(normalize(304, None), Ok(None));
    }

    #[test]
    fn test_normalize_rejects_error_statuses() {
        assert_eq!(normalize(404, None), Err(RequestError::Status(404)));
        assert_eq!(normalize(500, None), Err(RequestError::Status(500)));
        assert_eq!(normalize(418, None), Err(RequestError::Status(418)));
    }

    #[test]
    fn test_transport_error_preserves_message() {
        let err = RequestError::Transport("connection refused".to_string());
        assert_eq!(err.to_string(), "connection refused");
    }

    #[test]
    fn test_status_error_names_the_code() {
        assert_eq!(
            RequestError::Status(404).to_string(),
            "request failed with status 404"
        );
    }
}
