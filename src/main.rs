use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use mattermost_datetime_app::config::load_config;
use mattermost_datetime_app::core::error::AppError;
use mattermost_datetime_app::features::datetime::{
    AppDeclarations, DatetimeService, TimeSource, WorldTimeClient,
};
use mattermost_datetime_app::server::{AppState, build_router};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    init_tracing();

    let config = load_config()?;
    let time_source: Arc<dyn TimeSource> = Arc::new(WorldTimeClient::new(&config)?);
    let service = Arc::new(DatetimeService::new(
        time_source,
        config.default_timezone.clone(),
    ));
    let app_state = AppState::new(service, AppDeclarations::new(&config));
    let app = build_router(app_state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!(
        %addr,
        time_api = %config.time_api_base_url,
        timeout_secs = config.upstream_timeout_secs,
        "starting server"
    );
    tracing::info!(
        "use '/apps install http {}/manifest.json' to install the app",
        config.root_url
    );

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|err| AppError::internal(format!("failed to bind: {err}")))?;
    axum::serve(listener, app)
        .await
        .map_err(|err| AppError::internal(format!("server error: {err}")))?;

    Ok(())
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse().unwrap()))
        .with_target(false)
        .init();
}
