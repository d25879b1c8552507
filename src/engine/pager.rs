//! Session bootstrap and the pagination loop
//!
//! A run moves through four states: uninitialized, bootstrapping, paging,
//! terminated. Bootstrap failures surface to the caller; once paging starts
//! the consumer only ever observes a stream that eventually closes.

use crate::config::Config;
use crate::cursor::MaxPosition;
use crate::engine::extractor::{extract_posts, session_cursor, Selectors};
use crate::engine::fetcher::{build_http_client, fetch_raw, fetch_timeline};
use crate::engine::urls::search_url;
use crate::post::Post;
use crate::stream::PostStream;
use crate::{DriftnetError, Result};
use reqwest::Client;
use scraper::Html;
use tokio::sync::mpsc::Sender;

/// A validated search query: trimmed and non-empty
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query(String);

impl Query {
    /// Trims the input and rejects queries that are empty afterwards
    ///
    /// # Arguments
    ///
    /// * `raw` - The raw query string
    ///
    /// # Returns
    ///
    /// * `Ok(Query)` - The validated query
    /// * `Err(DriftnetError::EmptyQuery)` - Nothing left after trimming
    pub fn new(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(DriftnetError::EmptyQuery);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// The pagination engine for one scraping run
pub struct Scraper {
    query: Query,
    config: Config,
    selectors: Selectors,
    client: Client,
}

impl Scraper {
    /// Creates a new scraper for the given query
    ///
    /// Compiles the configured selectors and builds the HTTP client up
    /// front, so a broken configuration fails here rather than mid-run.
    ///
    /// # Arguments
    ///
    /// * `query` - The validated search query
    /// * `config` - Endpoints, selectors, and client settings for the run
    ///
    /// # Returns
    ///
    /// * `Ok(Scraper)` - Ready to start
    /// * `Err(DriftnetError)` - Invalid selector or client build failure
    pub fn new(query: Query, config: Config) -> Result<Self> {
        let selectors = Selectors::from_config(&config.selectors)?;
        let client = build_http_client(&config.client)?;
        Ok(Self {
            query,
            config,
            selectors,
            client,
        })
    }

    /// Bootstraps the session and starts the paging task
    ///
    /// Fetches the no-cursor search page, reads the embedded max-position
    /// cursor from the session container, and spawns the pagination loop.
    /// Any failure up to that point is terminal for the run and returned
    /// here; after that the caller only observes the stream.
    ///
    /// # Returns
    ///
    /// * `Ok(PostStream)` - The live result stream
    /// * `Err(DriftnetError)` - Transport failure, missing session
    ///   container, or malformed cursor
    pub async fn start(self) -> Result<PostStream> {
        let bootstrap_url = search_url(&self.config.endpoints, self.query.as_str(), None)?;
        tracing::info!("Bootstrapping session for query {:?}", self.query.as_str());

        let body = fetch_raw(&self.client, &bootstrap_url).await?;
        let raw_cursor = {
            let doc = Html::parse_document(&body);
            session_cursor(&doc, &self.selectors).ok_or(DriftnetError::MissingSession)?
        };
        let initial = MaxPosition::parse(&raw_cursor)?;
        tracing::debug!(
            session = %initial.session,
            fixed = %initial.fixed,
            marker = %initial.last,
            "Session established"
        );

        let (tx, stream) = PostStream::channel();
        tokio::spawn(page_loop(self, initial, tx));
        Ok(stream)
    }
}

/// The paging state machine: one explicit loop carrying the current marker.
///
/// `session` and `fixed` never change after bootstrap; the marker is owned
/// by exactly one iteration at a time. The loop ends when the server returns
/// the marker it was just asked for, or when the consumer drops the stream.
async fn page_loop(scraper: Scraper, initial: MaxPosition, tx: Sender<Post>) {
    let Scraper {
        query,
        config,
        selectors,
        client,
    } = scraper;

    let MaxPosition {
        last: mut marker,
        fixed,
        session,
    } = initial;

    let mut pages: u64 = 0;
    let mut emitted: u64 = 0;

    loop {
        if tx.is_closed() {
            tracing::debug!("Consumer dropped the stream, stopping run");
            return;
        }

        let cursor = MaxPosition {
            last: marker.clone(),
            fixed: fixed.clone(),
            session: session.clone(),
        };
        let url = match search_url(&config.endpoints, query.as_str(), Some(&cursor)) {
            Ok(url) => url,
            Err(e) => {
                tracing::error!("Cannot build page URL: {}", e);
                return;
            }
        };

        // A failed page is logged and treated as empty; the run keeps going
        // with the same marker. Only a successfully decoded response can
        // advance or terminate the run.
        let mut new_marker = None;
        match fetch_timeline(&client, &url).await {
            Ok(envelope) => {
                pages += 1;
                let posts = {
                    let doc = Html::parse_fragment(&envelope.items_html);
                    extract_posts(&doc, &selectors)
                };
                tracing::debug!(page = pages, posts = posts.len(), "Fetched page");

                for post in posts {
                    if tx.send(post).await.is_err() {
                        tracing::debug!("Consumer dropped the stream mid-page, stopping run");
                        return;
                    }
                    emitted += 1;
                }

                match MaxPosition::parse(&envelope.min_position) {
                    Ok(next) => new_marker = Some(next.last),
                    Err(e) => {
                        tracing::warn!("Malformed min_position, keeping marker {:?}: {}", marker, e);
                    }
                }
            }
            Err(e) => {
                tracing::warn!("Page fetch failed, keeping marker {:?}: {}", marker, e);
            }
        }

        match new_marker {
            Some(next) if next == marker => {
                tracing::info!(pages, posts = emitted, "Marker unchanged, run exhausted");
                return;
            }
            Some(next) => marker = next,
            None => {}
        }
    }
}
