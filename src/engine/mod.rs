//! Scraping engine for the feed search contract
//!
//! This module contains the core scraping logic, including:
//! - HTTP transport and the two response interpreters
//! - Request URL construction
//! - Post extraction from result markup
//! - Session bootstrap and the pagination loop

mod extractor;
mod fetcher;
mod pager;
mod urls;

pub use extractor::{extract_posts, session_cursor, Selectors};
pub use fetcher::{build_http_client, fetch_raw, fetch_timeline, TimelineEnvelope};
pub use pager::{Query, Scraper};
pub use urls::search_url;
