//! JSON Lines file sink

use crate::output::traits::{OutputResult, PostSink};
use crate::post::Post;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Writes each post as one JSON object per line
#[derive(Debug)]
pub struct JsonlSink {
    writer: BufWriter<File>,
    written: u64,
}

impl JsonlSink {
    /// Creates or truncates the output file at `path`
    ///
    /// # Arguments
    ///
    /// * `path` - Destination file
    ///
    /// # Returns
    ///
    /// * `Ok(JsonlSink)` - Ready to write
    /// * `Err(OutputError)` - The file could not be created
    pub fn new(path: &Path) -> OutputResult<Self> {
        let file = File::create(path)?;
        Ok(Self {
            writer: BufWriter::new(file),
            written: 0,
        })
    }
}

impl PostSink for JsonlSink {
    fn write(&mut self, post: &Post) -> OutputResult<()> {
        let line = serde_json::to_string(post)?;
        writeln!(self.writer, "{}", line)?;
        self.written += 1;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        self.writer.flush()?;
        tracing::info!("Wrote {} posts", self.written);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn post(id: &str) -> Post {
        Post {
            id: id.to_string(),
            text: format!("text {}", id),
            published_at: 1500000000,
        }
    }

    #[test]
    fn test_writes_one_line_per_post() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("posts.jsonl");

        let mut sink = JsonlSink::new(&path).unwrap();
        sink.write(&post("1")).unwrap();
        sink.write(&post("2")).unwrap();
        sink.finish().unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);

        let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first["id"], "1");
        assert_eq!(first["text"], "text 1");
        assert_eq!(first["published_at"], 1500000000u64);
    }

    #[test]
    fn test_new_fails_on_bad_path() {
        assert!(JsonlSink::new(Path::new("/nonexistent/dir/posts.jsonl")).is_err());
    }
}
