use std::sync::Arc;

use serde_json::Value;

use crate::core::error::AppError;
use crate::features::apps::{CallRequest, CallResponse};
use crate::features::datetime::client::TimeSource;
use crate::features::datetime::declarations::TIMEZONE_FIELD;

pub struct DatetimeService {
    time_source: Arc<dyn TimeSource>,
    default_timezone: String,
}

impl DatetimeService {
    pub fn new(time_source: Arc<dyn TimeSource>, default_timezone: String) -> Self {
        Self {
            time_source,
            default_timezone,
        }
    }

    /// Picks the timezone to look up. Missing and null values fall back to
    /// the configured default; anything else, the empty string included, is
    /// used as given.
    pub fn resolve_timezone(&self, request: &CallRequest) -> String {
        match request.values.get(TIMEZONE_FIELD) {
            None | Some(Value::Null) => self.default_timezone.clone(),
            Some(Value::String(value)) => value.clone(),
            Some(other) => other.to_string(),
        }
    }

    pub async fn current_datetime(&self, request: &CallRequest) -> Result<String, AppError> {
        let timezone = self.resolve_timezone(request);
        let result = self.time_source.fetch_time(&timezone).await?;

        tracing::info!(
            %timezone,
            datetime = %result.datetime,
            resolved_timezone = result.timezone.as_deref().unwrap_or(""),
            utc_offset = result.utc_offset.as_deref().unwrap_or(""),
            abbreviation = result.abbreviation.as_deref().unwrap_or(""),
            "time lookup succeeded"
        );

        Ok(result.datetime)
    }

    /// Runs one `/send` call. Every failure ends up as an `error` envelope
    /// so the host can show it to the user.
    pub async fn send(&self, request: &CallRequest) -> CallResponse {
        match self.current_datetime(request).await {
            Ok(datetime) => CallResponse::text(datetime),
            Err(err) => {
                tracing::warn!(error = %err, "send call failed");
                CallResponse::error(err.to_string())
            }
        }
    }
}
