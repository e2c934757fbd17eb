use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use tokio::sync::Mutex;

use mattermost_datetime_app::core::error::AppError;
use mattermost_datetime_app::features::apps::{CallRequest, CallResponseType};
use mattermost_datetime_app::features::datetime::{DatetimeService, TimeLookupResult, TimeSource};

struct MockTimeSource {
    datetimes: HashMap<String, String>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl MockTimeSource {
    fn new() -> Self {
        let datetimes = [
            ("Asia/Tokyo", "2024-01-01T00:00:00+09:00"),
            ("Europe/London", "2023-12-31T15:00:00+00:00"),
        ]
        .into_iter()
        .map(|(zone, datetime)| (zone.to_string(), datetime.to_string()))
        .collect();

        Self {
            datetimes,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    async fn calls(&self) -> Vec<String> {
        self.calls.lock().await.clone()
    }
}

#[async_trait]
impl TimeSource for MockTimeSource {
    async fn fetch_time(&self, timezone: &str) -> Result<TimeLookupResult, AppError> {
        self.calls.lock().await.push(timezone.to_string());
        match self.datetimes.get(timezone) {
            Some(datetime) => Ok(TimeLookupResult {
                datetime: datetime.clone(),
                timezone: Some(timezone.to_string()),
                utc_offset: None,
                abbreviation: None,
            }),
            None => Err(AppError::upstream_unavailable(format!(
                "request for {timezone} failed with 404 Not Found"
            ))),
        }
    }
}

fn call_with(values: serde_json::Value) -> CallRequest {
    serde_json::from_value(json!({ "path": "/send", "values": values })).expect("call request")
}

#[tokio::test]
async fn send_relays_datetime_for_requested_timezone() {
    let mock = Arc::new(MockTimeSource::new());
    let source: Arc<dyn TimeSource> = mock.clone();
    let service = DatetimeService::new(source, "Asia/Tokyo".to_string());

    let response = service
        .send(&call_with(json!({ "Timezone": "Europe/London" })))
        .await;

    assert_eq!(response.response_type, CallResponseType::Ok);
    assert_eq!(response.text.as_deref(), Some("2023-12-31T15:00:00+00:00"));
    assert_eq!(mock.calls().await, vec!["Europe/London".to_string()]);
}

#[tokio::test]
async fn send_without_timezone_looks_up_default_once() {
    let mock = Arc::new(MockTimeSource::new());
    let source: Arc<dyn TimeSource> = mock.clone();
    let service = DatetimeService::new(source, "Asia/Tokyo".to_string());

    let response = service.send(&call_with(json!({}))).await;

    assert_eq!(response.text.as_deref(), Some("2024-01-01T00:00:00+09:00"));
    assert_eq!(mock.calls().await, vec!["Asia/Tokyo".to_string()]);
}

#[tokio::test]
async fn failed_lookup_is_not_retried() {
    let mock = Arc::new(MockTimeSource::new());
    let source: Arc<dyn TimeSource> = mock.clone();
    let service = DatetimeService::new(source, "Asia/Tokyo".to_string());

    let response = service
        .send(&call_with(json!({ "Timezone": "Mars/Olympus_Mons" })))
        .await;

    assert_eq!(response.response_type, CallResponseType::Error);
    assert!(
        response
            .text
            .as_deref()
            .is_some_and(|text| text.contains("Mars/Olympus_Mons"))
    );
    assert_eq!(mock.calls().await.len(), 1);
}

#[tokio::test]
async fn concurrent_sends_do_not_mix_results() {
    let mock = Arc::new(MockTimeSource::new());
    let source: Arc<dyn TimeSource> = mock.clone();
    let service = Arc::new(DatetimeService::new(source, "Asia/Tokyo".to_string()));

    let mut handles = Vec::new();
    for round in 0..20 {
        let service = service.clone();
        let zone = if round % 2 == 0 { "Asia/Tokyo" } else { "Europe/London" };
        handles.push(tokio::spawn(async move {
            let response = service.send(&call_with(json!({ "Timezone": zone }))).await;
            (zone, response.text)
        }));
    }

    for handle in handles {
        let (zone, text) = handle.await.expect("task");
        let expected = match zone {
            "Asia/Tokyo" => "2024-01-01T00:00:00+09:00",
            _ => "2023-12-31T15:00:00+00:00",
        };
        assert_eq!(text.as_deref(), Some(expected));
    }
    assert_eq!(mock.calls().await.len(), 20);
}
