use std::env;

use crate::config::dto::AppConfig;
use crate::core::error::AppError;

pub const DEFAULT_PORT: u16 = 4000;
pub const DEFAULT_ROOT_URL: &str = "http://mattermost-apps-datetime:4000";
pub const DEFAULT_TIME_API_BASE_URL: &str = "http://worldtimeapi.org/api/timezone/";
pub const DEFAULT_TIMEZONE: &str = "Asia/Tokyo";
pub const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 10;

pub fn load_config() -> Result<AppConfig, AppError> {
    dotenvy::dotenv().ok();
    config_from_lookup(|key| env::var(key).ok())
}

/// Builds the config from an arbitrary variable source so tests don't have
/// to touch the process environment.
pub fn config_from_lookup<F>(lookup: F) -> Result<AppConfig, AppError>
where
    F: Fn(&str) -> Option<String>,
{
    let port = match lookup("APP_PORT").or_else(|| lookup("PORT")) {
        Some(value) => value
            .parse::<u16>()
            .map_err(|err| AppError::configuration(format!("invalid port: {err}")))?,
        None => DEFAULT_PORT,
    };

    let root_url =
        non_empty(lookup("APP_ROOT_URL")).unwrap_or_else(|| DEFAULT_ROOT_URL.to_string());

    let mut time_api_base_url = non_empty(lookup("TIME_API_BASE_URL"))
        .unwrap_or_else(|| DEFAULT_TIME_API_BASE_URL.to_string());
    if !time_api_base_url.ends_with('/') {
        time_api_base_url.push('/');
    }

    let default_timezone =
        non_empty(lookup("DEFAULT_TIMEZONE")).unwrap_or_else(|| DEFAULT_TIMEZONE.to_string());

    let upstream_timeout_secs = match lookup("UPSTREAM_TIMEOUT_SECS") {
        Some(value) => value.parse::<u64>().map_err(|err| {
            AppError::configuration(format!("invalid UPSTREAM_TIMEOUT_SECS: {err}"))
        })?,
        None => DEFAULT_UPSTREAM_TIMEOUT_SECS,
    };
    if upstream_timeout_secs == 0 {
        return Err(AppError::configuration(
            "UPSTREAM_TIMEOUT_SECS must be greater than zero".to_string(),
        ));
    }

    let disable_proxy = lookup("DISABLE_PROXY")
        .map(|value| parse_bool(&value))
        .unwrap_or(false);

    Ok(AppConfig {
        port,
        root_url,
        time_api_base_url,
        default_timezone,
        upstream_timeout_secs,
        disable_proxy,
    })
}

fn parse_bool(value: &str) -> bool {
    matches!(value, "true" | "1" | "TRUE" | "True")
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
