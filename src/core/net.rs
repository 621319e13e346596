// src/core/net.rs

// Blocking HTTP GET. One request per call: no retries, no rate limiting.

use reqwest::blocking::Client;

use crate::config::FetchOptions;
use crate::error::{Result, YowebError};

pub fn build_client(options: &FetchOptions) -> Result<Client> {
    options.validate()?;
    Client::builder()
        .timeout(options.timeout)
        .user_agent(options.user_agent.clone())
        .build()
        .map_err(|e| YowebError::Config(format!("failed to build HTTP client: {e}")))
}

/// GET `url` and return the body. Anything but a 2xx status is a fetch error.
pub fn http_get(client: &Client, url: &str) -> Result<String> {
    let response = client
        .get(url)
        .send()
        .map_err(|e| YowebError::fetch(url, e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(YowebError::fetch(url, format!("HTTP error: {status}")));
    }

    response
        .text()
        .map_err(|e| YowebError::fetch(url, format!("failed to read body: {e}")))
}
