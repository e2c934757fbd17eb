use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub port: u16,
    /// Public URL the Mattermost server uses to reach this app.
    pub root_url: String,
    /// Always ends with `/`; the timezone id is appended verbatim.
    pub time_api_base_url: String,
    pub default_timezone: String,
    pub upstream_timeout_secs: u64,
    pub disable_proxy: bool,
}
