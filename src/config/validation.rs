use crate::config::types::Config;
use crate::ConfigError;
use scraper::Selector;
use url::Url;

/// Validates a configuration after parsing
///
/// Checks that the base URL parses as an absolute http(s) URL, that both
/// request paths are rooted, and that every CSS selector compiles.
///
/// # Arguments
///
/// * `config` - The configuration to validate
///
/// # Returns
///
/// * `Ok(())` - Configuration is valid
/// * `Err(ConfigError)` - The first problem found
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    let base = Url::parse(&config.endpoints.base_url)
        .map_err(|e| ConfigError::InvalidUrl(format!("{}: {}", config.endpoints.base_url, e)))?;

    if base.scheme() != "http" && base.scheme() != "https" {
        return Err(ConfigError::InvalidUrl(format!(
            "base-url must be http or https, got {}",
            base.scheme()
        )));
    }

    if base.host_str().is_none() {
        return Err(ConfigError::InvalidUrl(format!(
            "base-url has no host: {}",
            config.endpoints.base_url
        )));
    }

    for (name, path) in [
        ("search-path", &config.endpoints.search_path),
        ("timeline-path", &config.endpoints.timeline_path),
    ] {
        if !path.starts_with('/') {
            return Err(ConfigError::Validation(format!(
                "{} must start with '/', got {:?}",
                name, path
            )));
        }
    }

    for (name, selector) in [
        ("session-container", &config.selectors.session_container),
        ("stream-item", &config.selectors.stream_item),
        ("item-text", &config.selectors.item_text),
        ("item-timestamp", &config.selectors.item_timestamp),
    ] {
        if Selector::parse(selector).is_err() {
            return Err(ConfigError::InvalidSelector(format!(
                "{}: {:?}",
                name, selector
            )));
        }
    }

    if config.client.timeout_secs == 0 {
        return Err(ConfigError::Validation(
            "timeout-secs must be greater than zero".to_string(),
        ));
    }

    Ok(())
}
