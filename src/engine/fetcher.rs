//! HTTP transport
//!
//! This module handles all HTTP requests for the engine:
//! - Building the HTTP client with proper user agent and timeouts
//! - Raw GET requests returning the full response body
//! - The JSON timeline envelope interpreter
//!
//! Parsing HTML bodies into documents happens in the extractor; the transport
//! only moves bytes.

use crate::config::ClientConfig;
use crate::{DriftnetError, Result};
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use url::Url;

/// The JSON envelope returned by the AJAX timeline path.
///
/// `min_position` reuses the serialized cursor format; `items_html` is an
/// HTML fragment parsed independently by the extractor.
#[derive(Debug, Clone, Deserialize)]
pub struct TimelineEnvelope {
    pub min_position: String,
    pub items_html: String,
}

/// Builds an HTTP client from the client configuration
///
/// # Arguments
///
/// * `config` - The HTTP client configuration
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
pub fn build_http_client(config: &ClientConfig) -> std::result::Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(&config.user_agent)
        .timeout(Duration::from_secs(config.timeout_secs))
        .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Performs a single GET request and returns the full response body
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `url` - The URL to fetch
///
/// # Returns
///
/// * `Ok(String)` - The response body
/// * `Err(DriftnetError)` - Network failure or non-success status
pub async fn fetch_raw(client: &Client, url: &Url) -> Result<String> {
    let response = client
        .get(url.clone())
        .send()
        .await
        .map_err(|source| DriftnetError::Http {
            url: url.to_string(),
            source,
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(DriftnetError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    response.text().await.map_err(|source| DriftnetError::Http {
        url: url.to_string(),
        source,
    })
}

/// Fetches an AJAX timeline page and decodes its JSON envelope
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `url` - The timeline URL, including the `max_position` parameter
///
/// # Returns
///
/// * `Ok(TimelineEnvelope)` - The new pagination marker and the HTML fragment
/// * `Err(DriftnetError)` - Transport failure or malformed envelope
pub async fn fetch_timeline(client: &Client, url: &Url) -> Result<TimelineEnvelope> {
    let body = fetch_raw(client, url).await?;
    let envelope: TimelineEnvelope = serde_json::from_str(&body)?;
    Ok(envelope)
}
