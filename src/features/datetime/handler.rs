use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;
use serde_json::{Value, json};

use crate::core::error::AppError;
use crate::features::apps::{CallRequest, CallResponse, Manifest};
use crate::features::datetime::declarations::ICON_PNG;
use crate::server::AppState;

pub async fn handle_manifest(State(state): State<AppState>) -> Json<Manifest> {
    Json(state.declarations.manifest.clone())
}

pub async fn handle_icon() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "image/png")], ICON_PNG)
}

pub async fn handle_bindings(
    State(state): State<AppState>,
) -> Result<Json<CallResponse>, AppError> {
    let bindings = serde_json::to_value(&state.declarations.bindings)
        .map_err(|err| AppError::internal(format!("failed to serialise bindings: {err}")))?;

    Ok(Json(CallResponse::data(bindings)))
}

pub async fn handle_send(State(state): State<AppState>, body: Bytes) -> Json<CallResponse> {
    let request = match parse_call_request(&body) {
        Ok(request) => request,
        Err(err) => {
            tracing::warn!(error = %err, "rejecting malformed call request");
            return Json(CallResponse::error(err.to_string()));
        }
    };

    Json(state.service.send(&request).await)
}

pub async fn handle_healthcheck() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// An empty body is treated as a call without values.
fn parse_call_request(body: &[u8]) -> Result<CallRequest, AppError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(CallRequest::default());
    }

    serde_json::from_slice(body)
        .map_err(|err| AppError::bad_request(format!("failed to parse call request: {err}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_body_is_an_empty_call() {
        let request = parse_call_request(b"").expect("empty body");
        assert!(request.values.is_empty());
    }

    #[test]
    fn garbage_body_is_a_bad_request() {
        let err = parse_call_request(b"{not json").unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }
}
