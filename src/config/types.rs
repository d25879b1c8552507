use serde::Deserialize;

/// Main configuration structure for driftnet
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub endpoints: EndpointConfig,
    #[serde(default)]
    pub selectors: SelectorConfig,
    #[serde(default)]
    pub client: ClientConfig,
}

/// Remote endpoint configuration
///
/// The query parameters themselves (`f=tweets`, `vertical=news`, ...) are
/// protocol-contract constants and live in the URL builder, not here.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EndpointConfig {
    /// Scheme and host of the remote service
    #[serde(rename = "base-url")]
    pub base_url: String,

    /// Primary (non-AJAX) search path, used only for session bootstrap
    #[serde(rename = "search-path")]
    pub search_path: String,

    /// AJAX timeline path, used for every subsequent page
    #[serde(rename = "timeline-path")]
    pub timeline_path: String,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            base_url: "https://twitter.com".to_string(),
            search_path: "/search".to_string(),
            timeline_path: "/i/search/timeline".to_string(),
        }
    }
}

/// CSS selectors for the pieces of the remote markup the engine reads
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SelectorConfig {
    /// Element carrying the session cursor in its `data-max-position` attribute
    #[serde(rename = "session-container")]
    pub session_container: String,

    /// One result item, carrying its id in `data-item-id`
    #[serde(rename = "stream-item")]
    pub stream_item: String,

    /// Text container inside a result item
    #[serde(rename = "item-text")]
    pub item_text: String,

    /// Timestamp element inside a result item, epoch in `data-time`
    #[serde(rename = "item-timestamp")]
    pub item_timestamp: String,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            session_container: ".stream-container[data-max-position]".to_string(),
            stream_item: ".stream-item[data-item-id]".to_string(),
            item_text: ".tweet-text".to_string(),
            item_timestamp: "._timestamp".to_string(),
        }
    }
}

/// HTTP client configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClientConfig {
    /// User-Agent header sent with every request
    #[serde(rename = "user-agent")]
    pub user_agent: String,

    /// Total request timeout in seconds
    #[serde(rename = "timeout-secs")]
    pub timeout_secs: u64,

    /// Connection timeout in seconds
    #[serde(rename = "connect-timeout-secs")]
    pub connect_timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            user_agent: format!("driftnet/{}", env!("CARGO_PKG_VERSION")),
            timeout_secs: 30,
            connect_timeout_secs: 10,
        }
    }
}
