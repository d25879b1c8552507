//! Post extraction from result markup
//!
//! The remote service renders results as a stream of item elements. Each item
//! carries its identifier in a `data-item-id` attribute, its text in a marker
//! class descendant, and its timestamp in a `data-time` attribute on a
//! timestamp element. The selectors for all of these come from configuration.

use crate::config::SelectorConfig;
use crate::post::Post;
use crate::ConfigError;
use scraper::{Html, Selector};

/// The compiled CSS selectors the engine reads the remote markup with
#[derive(Debug, Clone)]
pub struct Selectors {
    session_container: Selector,
    stream_item: Selector,
    item_text: Selector,
    item_timestamp: Selector,
}

impl Selectors {
    /// Compiles the configured selectors once, at engine construction
    ///
    /// # Arguments
    ///
    /// * `config` - The selector configuration
    ///
    /// # Returns
    ///
    /// * `Ok(Selectors)` - All four selectors compiled
    /// * `Err(ConfigError)` - The first selector that does not parse
    pub fn from_config(config: &SelectorConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            session_container: compile("session-container", &config.session_container)?,
            stream_item: compile("stream-item", &config.stream_item)?,
            item_text: compile("item-text", &config.item_text)?,
            item_timestamp: compile("item-timestamp", &config.item_timestamp)?,
        })
    }
}

fn compile(name: &str, input: &str) -> Result<Selector, ConfigError> {
    Selector::parse(input)
        .map_err(|_| ConfigError::InvalidSelector(format!("{}: {:?}", name, input)))
}

/// Reads the embedded session cursor from a bootstrap document
///
/// # Arguments
///
/// * `doc` - The parsed bootstrap page
/// * `selectors` - The compiled selectors
///
/// # Returns
///
/// The `data-max-position` attribute of the first session container match,
/// or `None` if the element or attribute is missing
pub fn session_cursor(doc: &Html, selectors: &Selectors) -> Option<String> {
    doc.select(&selectors.session_container)
        .next()
        .and_then(|element| element.value().attr("data-max-position"))
        .map(str::to_string)
}

/// Extracts every post from a result document, in document order
///
/// Per item: the identifier defaults to empty when the attribute is absent,
/// the text comes from the first text-container descendant, and the timestamp
/// from the `data-time` attribute of the first timestamp descendant of that
/// item. An item is kept if its identifier is non-empty or its timestamp
/// parsed; text alone does not qualify. An empty document yields an empty
/// vector, never an error.
///
/// # Arguments
///
/// * `doc` - The parsed result page or fragment
/// * `selectors` - The compiled selectors
///
/// # Returns
///
/// The extracted posts, in document order
pub fn extract_posts(doc: &Html, selectors: &Selectors) -> Vec<Post> {
    let mut posts = Vec::new();

    for item in doc.select(&selectors.stream_item) {
        let id = item.value().attr("data-item-id").unwrap_or("").to_string();

        let text = item
            .select(&selectors.item_text)
            .next()
            .map(|element| element.text().collect::<String>().trim().to_string())
            .unwrap_or_default();

        let timestamp = item
            .select(&selectors.item_timestamp)
            .next()
            .and_then(|element| element.value().attr("data-time"))
            .and_then(|raw| raw.parse::<u64>().ok());

        if id.is_empty() && timestamp.is_none() {
            tracing::debug!("Skipping item with no id and no parseable timestamp");
            continue;
        }

        posts.push(Post {
            id,
            text,
            published_at: timestamp.unwrap_or(0),
        });
    }

    posts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selectors() -> Selectors {
        Selectors::from_config(&SelectorConfig::default()).unwrap()
    }

    fn item(id: &str, text: &str, time: &str) -> String {
        format!(
            r#"<div class="stream-item" data-item-id="{id}">
                <p class="tweet-text">{text}</p>
                <span class="_timestamp" data-time="{time}"></span>
            </div>"#
        )
    }

    #[test]
    fn test_extracts_fields() {
        let html = item("123", "hello world", "1500000000");
        let doc = Html::parse_fragment(&html);
        let posts = extract_posts(&doc, &selectors());
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].id, "123");
        assert_eq!(posts[0].text, "hello world");
        assert_eq!(posts[0].published_at, 1500000000);
    }

    #[test]
    fn test_document_order() {
        let html = format!("{}{}{}", item("1", "a", "10"), item("2", "b", "20"), item("3", "c", "30"));
        let doc = Html::parse_fragment(&html);
        let posts = extract_posts(&doc, &selectors());
        let ids: Vec<&str> = posts.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["1", "2", "3"]);
    }

    #[test]
    fn test_timestamp_scoped_per_item() {
        let html = format!("{}{}", item("1", "a", "10"), item("2", "b", "20"));
        let doc = Html::parse_fragment(&html);
        let posts = extract_posts(&doc, &selectors());
        assert_eq!(posts[0].published_at, 10);
        assert_eq!(posts[1].published_at, 20);
    }

    #[test]
    fn test_keeps_item_with_id_but_bad_timestamp() {
        let html = item("123", "text", "not-a-number");
        let doc = Html::parse_fragment(&html);
        let posts = extract_posts(&doc, &selectors());
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].published_at, 0);
    }

    #[test]
    fn test_keeps_item_with_timestamp_but_no_id() {
        // data-item-id present but empty still matches the attribute selector
        let html = item("", "text", "1500000000");
        let doc = Html::parse_fragment(&html);
        let posts = extract_posts(&doc, &selectors());
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].id, "");
        assert_eq!(posts[0].published_at, 1500000000);
    }

    #[test]
    fn test_drops_item_with_neither() {
        let html = format!(
            r#"{}<div class="stream-item" data-item-id="">
                <p class="tweet-text">orphan</p>
            </div>{}"#,
            item("1", "a", "10"),
            item("3", "c", "30"),
        );
        let doc = Html::parse_fragment(&html);
        let posts = extract_posts(&doc, &selectors());
        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].id, "1");
        assert_eq!(posts[1].id, "3");
    }

    #[test]
    fn test_missing_text_container() {
        let html = r#"<div class="stream-item" data-item-id="9"></div>"#;
        let doc = Html::parse_fragment(html);
        let posts = extract_posts(&doc, &selectors());
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].text, "");
        assert_eq!(posts[0].published_at, 0);
    }

    #[test]
    fn test_empty_document() {
        let doc = Html::parse_fragment("");
        assert!(extract_posts(&doc, &selectors()).is_empty());
    }

    #[test]
    fn test_text_is_trimmed_and_joined() {
        let html = r##"<div class="stream-item" data-item-id="5">
            <p class="tweet-text">  hello <a href="#">link</a> world  </p>
        </div>"##;
        let doc = Html::parse_fragment(html);
        let posts = extract_posts(&doc, &selectors());
        assert_eq!(posts[0].text, "hello link world");
    }

    #[test]
    fn test_session_cursor_found() {
        let html = r#"<html><body>
            <div class="stream-container" data-max-position="TWEET-100-abc-xyz"></div>
        </body></html>"#;
        let doc = Html::parse_document(html);
        assert_eq!(
            session_cursor(&doc, &selectors()),
            Some("TWEET-100-abc-xyz".to_string())
        );
    }

    #[test]
    fn test_session_cursor_missing() {
        let doc = Html::parse_document("<html><body><p>no container</p></body></html>");
        assert_eq!(session_cursor(&doc, &selectors()), None);
    }
}
