mod error;
mod questions;
mod submissions;
mod tasks;
mod views;

pub use error::ClientError;
pub use views::TaskView;

use std::time::Duration;

use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::core::config::Settings;

const DEFAULT_TIMEOUT_SECONDS: u64 = 30;
const DEFAULT_CONNECT_TIMEOUT_SECONDS: u64 = 10;

/// HTTP client for the ClassHub API. Cheap to clone; all endpoint methods
/// live in the sibling modules of this one.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    pub fn from_settings(settings: &Settings) -> Result<Self, ClientError> {
        let api = settings.api();
        Self::build(&api.base_url, api.timeout_seconds, api.connect_timeout_seconds)
    }

    /// Client with default timeouts against an explicit base URL.
    pub fn with_base_url(base_url: &str) -> Result<Self, ClientError> {
        Self::build(base_url, DEFAULT_TIMEOUT_SECONDS, DEFAULT_CONNECT_TIMEOUT_SECONDS)
    }

    fn build(
        base_url: &str,
        timeout_seconds: u64,
        connect_timeout_seconds: u64,
    ) -> Result<Self, ClientError> {
        let http = Client::builder()
            .connect_timeout(Duration::from_secs(connect_timeout_seconds))
            .timeout(Duration::from_secs(timeout_seconds))
            .build()?;

        Ok(Self { http, base_url: base_url.trim_end_matches('/').to_string() })
    }

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ClientError> {
        let response = self.http.get(self.url(path)).query(query).send().await?;
        Self::decode(response).await
    }

    pub(crate) async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
        if !response.status().is_success() {
            return Err(Self::status_error(response).await);
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }

    pub(crate) async fn expect_success(response: Response) -> Result<(), ClientError> {
        if !response.status().is_success() {
            return Err(Self::status_error(response).await);
        }

        Ok(())
    }

    async fn status_error(response: Response) -> ClientError {
        let status = response.status().as_u16();
        let detail = match response.text().await {
            Ok(body) => extract_error_message(&body),
            Err(_) => "unknown_error".to_string(),
        };

        ClientError::Status { status, detail }
    }
}

fn extract_error_message(body: &str) -> String {
    let message = serde_json::from_str::<Value>(body).ok().and_then(|payload| {
        payload
            .get("detail")
            .and_then(Value::as_str)
            .or_else(|| payload.get("message").and_then(Value::as_str))
            .or_else(|| payload.get("error").and_then(Value::as_str))
            .map(str::to_string)
    });

    match message {
        Some(text) => text,
        None if body.trim().is_empty() => "unknown_error".to_string(),
        None => body.trim().to_string(),
    }
}
