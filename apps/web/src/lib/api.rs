//! HTTP helpers for the directory's JSON endpoints. Feature clients use these
//! helpers to avoid duplicating request setup and error mapping. Requests carry
//! no credentials and are never retried or timed out.

use super::errors::AppError;
#[cfg(target_arch = "wasm32")]
use super::config::AppConfig;
#[cfg(target_arch = "wasm32")]
use gloo_net::http::Request;
#[cfg(target_arch = "wasm32")]
use serde::de::DeserializeOwned;

/// Maximum number of error body characters kept in an `AppError`.
const MAX_ERROR_CHARS: usize = 200;

/// Fetches JSON from the configured directory base URL.
#[cfg(target_arch = "wasm32")]
pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, AppError> {
    let config = AppConfig::load();
    let url = build_url_with_base(&config.api_base_url, path);
    tracing::debug!(%url, "GET");

    let response = Request::get(&url)
        .build()
        .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))?
        .send()
        .await
        .map_err(map_request_error)?;

    handle_json_response(response).await
}

/// Builds a URL from an explicit base URL and the provided path.
pub fn build_url_with_base(base_url: &str, path: &str) -> String {
    let base = base_url.trim().trim_end_matches('/');
    let path = path.trim();

    if base.is_empty() {
        path.to_string()
    } else {
        format!("{}/{}", base, path.trim_start_matches('/'))
    }
}

#[cfg(target_arch = "wasm32")]
fn map_request_error(err: gloo_net::Error) -> AppError {
    AppError::Network(format!("Unable to reach the directory: {err}"))
}

/// Parses JSON responses and surfaces HTTP errors with sanitized bodies.
#[cfg(target_arch = "wasm32")]
async fn handle_json_response<T: DeserializeOwned>(
    response: gloo_net::http::Response,
) -> Result<T, AppError> {
    if response.ok() {
        response
            .json::<T>()
            .await
            .map_err(|err| AppError::Parse(format!("Failed to decode response: {err}")))
    } else {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Err(http_error(status, body))
    }
}

fn http_error(status: u16, body: String) -> AppError {
    AppError::Http {
        status,
        message: sanitize_body(body),
    }
}

/// Trims and truncates HTTP error bodies.
fn sanitize_body(body: String) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        "Request failed.".to_string()
    } else {
        trimmed.chars().take(MAX_ERROR_CHARS).collect()
    }
}
