// src/utils/http.rs

//! HTTP client utilities.

use std::time::Duration;

use crate::error::Result;
use crate::models::HttpConfig;

/// Create a configured asynchronous HTTP client.
pub fn create_async_client(config: &HttpConfig) -> Result<reqwest::Client> {
    let client = reqwest::Client::builder()
        .user_agent(&config.user_agent)
        .timeout(Duration::from_secs(config.timeout_secs))
        .build()?;
    Ok(client)
}

/// Whether a source location should be fetched over HTTP.
pub fn is_remote(location: &str) -> bool {
    url::Url::parse(location)
        .map(|u| matches!(u.scheme(), "http" | "https"))
        .unwrap_or(false)
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_remote() {
        assert!(is_remote("https://example.com/2022.md"));
        assert!(is_remote("http://localhost:3000/standards.md"));
        assert!(!is_remote("data/2015 성취기준 5-6학년.md"));
        assert!(!is_remote("/abs/path.md"));
        assert!(!is_remote("file:///abs/path.md"));
    }

    #[test]
    fn test_create_client() {
        assert!(create_async_client(&HttpConfig::default()).is_ok());
    }
}
