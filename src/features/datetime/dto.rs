use serde::Deserialize;

/// Body of `GET /api/timezone/<id>` on worldtimeapi.org. Only `datetime` is
/// relayed; the rest is logged on success.
#[derive(Debug, Clone, Deserialize)]
pub struct TimeLookupResult {
    pub datetime: String,
    #[serde(default)]
    pub timezone: Option<String>,
    #[serde(default)]
    pub utc_offset: Option<String>,
    #[serde(default)]
    pub abbreviation: Option<String>,
}
