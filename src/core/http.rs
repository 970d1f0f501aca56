//! HTTP client construction for the remote source.

use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT},
    Client,
};

use crate::core::config::ScraperConfig;
use crate::Result;

const UA: &str = concat!("understat-xg/", env!("CARGO_PKG_VERSION"));

/// Build the shared reqwest client with the configured timeout.
pub fn build_client(config: &ScraperConfig) -> Result<Client> {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("text/html"));
    headers.insert(USER_AGENT, HeaderValue::from_static(UA));

    let client = Client::builder()
        .timeout(config.timeout)
        .default_headers(headers)
        .build()?;

    Ok(client)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_with_default_config() {
        let config = ScraperConfig::default();
        assert!(build_client(&config).is_ok());
    }
}
