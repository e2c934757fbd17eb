use std::time::Duration;

use reqwest::Client;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

pub fn build_http_client(
    timeout_secs: u64,
    disable_proxy: bool,
) -> Result<Client, reqwest::Error> {
    let mut builder = Client::builder()
        .user_agent(USER_AGENT)
        .timeout(Duration::from_secs(timeout_secs));

    if disable_proxy {
        builder = builder.no_proxy();
    }

    builder.build()
}
