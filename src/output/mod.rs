//! Output sinks for scraped posts
//!
//! Enrichment and document-store persistence are external collaborators that
//! consume the result stream; what ships here are the local sinks: console
//! printing and JSON Lines files.

mod console;
mod jsonl;
mod traits;

pub use console::ConsoleSink;
pub use jsonl::JsonlSink;
pub use traits::{OutputError, OutputResult, PostSink};
