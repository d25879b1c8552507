//! Output handler trait and error types

use crate::post::Post;
use thiserror::Error;

/// Errors that can occur during output operations
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("Failed to write output: {0}")]
    Write(String),

    #[error("Failed to serialize post: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;

/// A destination for scraped posts
///
/// Sinks receive posts in stream order, one at a time, and are flushed once
/// the stream has closed.
pub trait PostSink {
    /// Writes one post to the sink
    fn write(&mut self, post: &Post) -> OutputResult<()>;

    /// Flushes any buffered output after the stream closes
    fn finish(&mut self) -> OutputResult<()> {
        Ok(())
    }
}
