//! HTTP Client
//!
//! Authenticated async HTTP client wrapping reqwest. Attaches a bearer
//! token to every request and decodes JSON response bodies. Transport
//! resilience (retries, backoff) is intentionally out of scope; failures
//! surface to the caller as-is.

use crate::error::{Result, ShelfwareError};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use tracing::debug;

/// Authenticated HTTP client for the Shelfware backend
pub struct HttpClient {
    /// Inner reqwest client
    client: Client,
}

impl HttpClient {
    /// Create a new HTTP client
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .pool_max_idle_per_host(10)
            .build()
            .map_err(|e| {
                ShelfwareError::Config(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self { client })
    }

    /// Make a GET request and decode the JSON response
    pub async fn get<R>(&self, url: &str, token: &str) -> Result<R>
    where
        R: DeserializeOwned,
    {
        debug!(%url, "GET");
        let response = self
            .client
            .get(url)
            .headers(auth_headers(token)?)
            .send()
            .await?;

        decode_response(response).await
    }

    /// Make a POST request with a JSON body and decode the JSON response
    pub async fn post<T, R>(&self, url: &str, body: &T, token: &str) -> Result<R>
    where
        T: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        debug!(%url, "POST");
        let response = self
            .client
            .post(url)
            .headers(json_headers(token)?)
            .json(body)
            .send()
            .await?;

        decode_response(response).await
    }

    /// Make a PUT request with a JSON body and decode the JSON response
    pub async fn put<T, R>(&self, url: &str, body: &T, token: &str) -> Result<R>
    where
        T: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        debug!(%url, "PUT");
        let response = self
            .client
            .put(url)
            .headers(json_headers(token)?)
            .json(body)
            .send()
            .await?;

        decode_response(response).await
    }

    /// Make a DELETE request; resolves to unit on success
    pub async fn delete(&self, url: &str, token: &str) -> Result<()> {
        debug!(%url, "DELETE");
        let response = self
            .client
            .delete(url)
            .headers(auth_headers(token)?)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        Err(status_error(status, response).await)
    }
}

/// Build headers carrying the bearer token
fn auth_headers(token: &str) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();
    headers.insert(
        AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {}", token))
            .map_err(|e| ShelfwareError::Config(format!("Invalid token format: {}", e)))?,
    );
    Ok(headers)
}

/// Build headers for requests that carry a JSON body
fn json_headers(token: &str) -> Result<HeaderMap> {
    let mut headers = auth_headers(token)?;
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    Ok(headers)
}

/// Longest body excerpt carried in error messages
const MAX_ERROR_BODY: usize = 500;

/// Truncate a body for error messages without splitting a character
fn truncate_body(body: &str) -> &str {
    if body.len() <= MAX_ERROR_BODY {
        return body;
    }

    let mut end = MAX_ERROR_BODY;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    &body[..end]
}

/// Decode a response body, classifying failures by status
async fn decode_response<R>(response: Response) -> Result<R>
where
    R: DeserializeOwned,
{
    let status = response.status();

    if status.is_success() {
        let body = response.text().await?;
        return serde_json::from_str(&body).map_err(|e| {
            ShelfwareError::Response(format!(
                "Failed to parse response: {}. Body: {}",
                e,
                truncate_body(&body)
            ))
        });
    }

    Err(status_error(status, response).await)
}

/// Map a non-2xx response to an error, preserving the body
async fn status_error(status: StatusCode, response: Response) -> ShelfwareError {
    let body = response.text().await.unwrap_or_default();

    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        return ShelfwareError::Auth(body);
    }

    ShelfwareError::Request(format!(
        "Request failed with status {}: {}",
        status,
        truncate_body(&body)
    ))
}
