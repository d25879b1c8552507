//! Console output sink

use crate::output::traits::{OutputResult, PostSink};
use crate::post::Post;
use chrono::{TimeZone, Utc};

/// Prints each post to stdout, one line per post
#[derive(Debug, Default)]
pub struct ConsoleSink {
    written: u64,
}

impl ConsoleSink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PostSink for ConsoleSink {
    fn write(&mut self, post: &Post) -> OutputResult<()> {
        let when = if post.published_at == 0 {
            "-".to_string()
        } else {
            Utc.timestamp_opt(post.published_at as i64, 0)
                .single()
                .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
                .unwrap_or_else(|| "-".to_string())
        };

        println!("[{}] {} {}", when, post.id, post.text);
        self.written += 1;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        tracing::info!("Printed {} posts", self.written);
        Ok(())
    }
}
