//! HTTP helpers for the marketplace JSON API with consistent timeouts and error
//! handling. Feature clients use these helpers to avoid duplicating request setup
//! and to enforce a predictable timeout policy. The helpers do not store secrets
//! or tokens; they only attach headers provided by callers.

use super::{config::AppConfig, errors::AppError};
use gloo_net::http::{Method, Request, RequestBuilder, Response};
use gloo_timers::callback::Timeout;
use serde::{Serialize, de::DeserializeOwned};
use serde_json::to_string;
use web_sys::{AbortController, AbortSignal};

/// Default request timeout (milliseconds) applied to all HTTP helpers.
const DEFAULT_TIMEOUT_MS: u32 = 10_000;

/// A request header as `(name, value)`.
pub type Header = (String, String);

/// Fetches JSON with optional headers (usually the bearer token).
pub async fn get_json_with_headers<T: DeserializeOwned>(
    path: &str,
    headers: &[Header],
) -> Result<T, AppError> {
    let url = build_url(path);
    let response = send_with_timeout(|signal| {
        builder(Method::GET, &url, headers, signal)
            .build()
            .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))
    })
    .await?;

    handle_json_response(response).await
}

/// Posts an empty body with custom headers and parses a JSON response.
pub async fn post_empty_with_headers_response<T: DeserializeOwned>(
    path: &str,
    headers: &[Header],
) -> Result<T, AppError> {
    let url = build_url(path);
    let response = send_with_timeout(|signal| {
        builder(Method::POST, &url, headers, signal)
            .build()
            .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))
    })
    .await?;

    handle_json_response(response).await
}

/// Posts an empty body with custom headers and ignores the response body.
pub async fn post_empty_with_headers(path: &str, headers: &[Header]) -> Result<(), AppError> {
    let url = build_url(path);
    let response = send_with_timeout(|signal| {
        builder(Method::POST, &url, headers, signal)
            .build()
            .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))
    })
    .await?;

    handle_empty_response(response).await
}

/// Posts JSON with custom headers and parses a JSON response.
pub async fn post_json_with_headers_response<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
    headers: &[Header],
) -> Result<T, AppError> {
    let url = build_url(path);
    let payload = to_string(body)
        .map_err(|err| AppError::Serialization(format!("Failed to encode request: {err}")))?;
    let response = send_with_timeout(move |signal| {
        builder(Method::POST, &url, headers, signal)
            .header("Content-Type", "application/json")
            .body(payload)
            .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))
    })
    .await?;

    handle_json_response(response).await
}

fn builder(method: Method, url: &str, headers: &[Header], signal: &AbortSignal) -> RequestBuilder {
    let mut builder = RequestBuilder::new(url)
        .method(method)
        .abort_signal(Some(signal));

    for (name, value) in headers {
        builder = builder.header(name.as_str(), value.as_str());
    }

    builder
}

/// Builds a URL from the configured API base URL and the provided path.
fn build_url(path: &str) -> String {
    AppConfig::load().api_url(path)
}

/// Maps network errors into user-facing `AppError` variants with timeout detection.
fn map_request_error(err: gloo_net::Error) -> AppError {
    let message = err.to_string();
    let lowered = message.to_lowercase();

    if lowered.contains("timeout") || lowered.contains("abort") {
        AppError::Timeout("Request timed out. Please try again.".to_string())
    } else {
        AppError::Network(format!("Unable to reach the server: {message}"))
    }
}

/// Sends a request with an abort timeout to avoid hanging UI state.
async fn send_with_timeout(
    build_request: impl FnOnce(&AbortSignal) -> Result<Request, AppError>,
) -> Result<Response, AppError> {
    let controller = AbortController::new()
        .map_err(|_| AppError::Config("Failed to initialize request timeout.".to_string()))?;
    let signal = controller.signal();
    let timeout_controller = controller.clone();
    let _timeout = Timeout::new(DEFAULT_TIMEOUT_MS, move || timeout_controller.abort());

    let request = build_request(&signal)?;
    request.send().await.map_err(map_request_error)
}

/// Parses JSON responses and surfaces HTTP errors with sanitized bodies.
async fn handle_json_response<T: DeserializeOwned>(response: Response) -> Result<T, AppError> {
    if response.ok() {
        response
            .json::<T>()
            .await
            .map_err(|err| AppError::Parse(format!("Failed to decode response: {err}")))
    } else {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Err(AppError::http(status, &body))
    }
}

/// Handles responses whose body is irrelevant and returns sanitized HTTP errors.
async fn handle_empty_response(response: Response) -> Result<(), AppError> {
    if response.ok() {
        Ok(())
    } else {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Err(AppError::http(status, &body))
    }
}
