use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

use crate::config::AppConfig;
use crate::core::error::AppError;
use crate::core::http_client::build_http_client;
use crate::features::datetime::dto::TimeLookupResult;

const BODY_SNIPPET_CHARS: usize = 256;

#[async_trait]
pub trait TimeSource: Send + Sync {
    /// Performs exactly one lookup for `timezone`. Implementations must not
    /// retry or cache.
    async fn fetch_time(&self, timezone: &str) -> Result<TimeLookupResult, AppError>;
}

pub struct WorldTimeClient {
    http_client: Client,
    base_url: String,
}

impl WorldTimeClient {
    pub fn new(config: &AppConfig) -> Result<Self, AppError> {
        let http_client = build_http_client(config.upstream_timeout_secs, config.disable_proxy)
            .map_err(|err| AppError::internal(format!("failed to build HTTP client: {err}")))?;

        Ok(Self::with_client(http_client, config.time_api_base_url.clone()))
    }

    pub fn with_client(http_client: Client, base_url: String) -> Self {
        Self {
            http_client,
            base_url,
        }
    }

    /// The timezone is appended as-is: no escaping, no allow-list.
    pub fn timezone_url(&self, timezone: &str) -> String {
        format!("{}{}", self.base_url, timezone)
    }
}

#[async_trait]
impl TimeSource for WorldTimeClient {
    async fn fetch_time(&self, timezone: &str) -> Result<TimeLookupResult, AppError> {
        let url = self.timezone_url(timezone);
        tracing::debug!(%url, "requesting current time");

        let response = self.http_client.get(&url).send().await.map_err(|err| {
            if err.is_builder() {
                AppError::bad_request(format!("invalid timezone {timezone:?}: {err}"))
            } else {
                AppError::upstream_unavailable(format!("network error contacting {url}: {err}"))
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let text = response
                .text()
                .await
                .unwrap_or_else(|_| "<failed to read body>".to_string());
            let body_snippet = text.chars().take(BODY_SNIPPET_CHARS).collect::<String>();
            tracing::warn!(%url, %status, body = %body_snippet, "time lookup rejected");
            return Err(AppError::upstream_unavailable(format!(
                "request to {url} failed with {status}"
            )));
        }

        let body = response.bytes().await.map_err(|err| {
            AppError::upstream_unavailable(format!("failed to read response from {url}: {err}"))
        })?;

        parse_lookup_body(&body)
            .map_err(|message| AppError::upstream_parse(format!("{message} from {url}")))
    }
}

/// Only a JSON object carrying a string `datetime` counts as a lookup
/// result. A zone-prefix listing comes back as an array and must not be
/// read positionally.
fn parse_lookup_body(body: &[u8]) -> Result<TimeLookupResult, String> {
    let value = serde_json::from_slice::<Value>(body)
        .map_err(|err| format!("failed to parse response: {err}"))?;

    if !value.is_object() {
        return Err("expected a JSON object in response".to_string());
    }
    if !value.get("datetime").is_some_and(Value::is_string) {
        return Err("missing string datetime in response".to_string());
    }

    serde_json::from_value(value).map_err(|err| format!("failed to parse response: {err}"))
}
