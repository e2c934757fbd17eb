use axum::Router;
use axum::routing::{get, post};

use crate::features::datetime::{
    handle_bindings, handle_healthcheck, handle_icon, handle_manifest, handle_send,
};
use crate::server::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(handle_healthcheck))
        .route("/manifest.json", get(handle_manifest))
        .route("/static/icon.png", get(handle_icon))
        .route("/bindings", get(handle_bindings).post(handle_bindings))
        .route("/send", post(handle_send))
        .with_state(state)
}
