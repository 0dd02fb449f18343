// src/core/net.rs

use std::time::Duration;

use crate::error::Error;
use crate::params::HTTP_TIMEOUT_SECS;

const USER_AGENT: &str = concat!("tabscrape/", env!("CARGO_PKG_VERSION"));

/// Blocking GET with a bounded timeout. Non-2xx is a load failure.
pub fn http_get(url: &str) -> Result<String, Error> {
    let wrap = |source: reqwest::Error| Error::Network { url: s!(url), source };

    let client = reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
        .user_agent(USER_AGENT)
        .build()
        .map_err(wrap)?;

    let resp = client.get(url).send().map_err(wrap)?;
    let status = resp.status();
    if !status.is_success() {
        return Err(Error::HttpStatus { url: s!(url), status });
    }
    resp.text().map_err(wrap)
}
