//! Request URL construction
//!
//! The remote service treats the query string literally, so parameters are
//! appended in a fixed order and identical inputs always produce
//! byte-identical URLs.

use crate::config::EndpointConfig;
use crate::cursor::MaxPosition;
use crate::Result;
use url::Url;

/// Protocol-contract query parameters the remote service requires, appended
/// after `q` in this order. Not user-configurable.
const FIXED_PARAMS: [(&str, &str); 4] = [
    ("f", "tweets"),
    ("vertical", "news"),
    ("include_entities", "0"),
    ("src", "sprv"),
];

/// Builds the request URL for a query
///
/// Without a cursor the URL targets the primary search path (session
/// bootstrap only). With a cursor it targets the AJAX timeline path and
/// attaches the serialized cursor as `max_position`.
///
/// # Arguments
///
/// * `endpoints` - Remote endpoint configuration
/// * `query` - The search phrase
/// * `cursor` - The current pagination cursor, if past bootstrap
///
/// # Returns
///
/// * `Ok(Url)` - The request URL
/// * `Err(DriftnetError)` - The configured base URL does not parse
pub fn search_url(
    endpoints: &EndpointConfig,
    query: &str,
    cursor: Option<&MaxPosition>,
) -> Result<Url> {
    let mut url = Url::parse(&endpoints.base_url)?;

    url.set_path(match cursor {
        None => &endpoints.search_path,
        Some(_) => &endpoints.timeline_path,
    });

    {
        let mut pairs = url.query_pairs_mut();
        pairs.append_pair("q", query);
        for (key, value) in FIXED_PARAMS {
            pairs.append_pair(key, value);
        }
        if let Some(cursor) = cursor {
            pairs.append_pair("max_position", &cursor.to_string());
        }
    }

    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cursor() -> MaxPosition {
        MaxPosition {
            last: "100".to_string(),
            fixed: "abc".to_string(),
            session: "xyz".to_string(),
        }
    }

    #[test]
    fn test_bootstrap_url() {
        let url = search_url(&EndpointConfig::default(), "rust", None).unwrap();
        assert_eq!(
            url.as_str(),
            "https://twitter.com/search?q=rust&f=tweets&vertical=news&include_entities=0&src=sprv"
        );
    }

    #[test]
    fn test_timeline_url_attaches_cursor() {
        let url = search_url(&EndpointConfig::default(), "rust", Some(&cursor())).unwrap();
        assert_eq!(
            url.as_str(),
            "https://twitter.com/i/search/timeline?q=rust&f=tweets&vertical=news&include_entities=0&src=sprv&max_position=TWEET-100-abc-xyz"
        );
    }

    #[test]
    fn test_query_is_form_encoded() {
        let url = search_url(&EndpointConfig::default(), "rust lang", None).unwrap();
        assert!(url.as_str().contains("q=rust+lang"));
    }

    #[test]
    fn test_deterministic() {
        let endpoints = EndpointConfig::default();
        let first = search_url(&endpoints, "rust", Some(&cursor())).unwrap();
        let second = search_url(&endpoints, "rust", Some(&cursor())).unwrap();
        assert_eq!(first.as_str(), second.as_str());
    }

    #[test]
    fn test_custom_endpoints() {
        let endpoints = EndpointConfig {
            base_url: "http://127.0.0.1:9999".to_string(),
            search_path: "/fixtures/search".to_string(),
            timeline_path: "/fixtures/timeline".to_string(),
        };
        let bootstrap = search_url(&endpoints, "q", None).unwrap();
        assert!(bootstrap.as_str().starts_with("http://127.0.0.1:9999/fixtures/search?"));
        let page = search_url(&endpoints, "q", Some(&cursor())).unwrap();
        assert!(page.as_str().starts_with("http://127.0.0.1:9999/fixtures/timeline?"));
    }
}
