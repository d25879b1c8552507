//! Result stream plumbing
//!
//! The pagination engine emits posts onto a bounded channel of capacity 1,
//! the smallest bound tokio offers. At most one record is ever in flight, so
//! a slow consumer throttles the whole pagination chain instead of letting
//! pages pile up in memory.

use crate::post::Post;
use tokio::sync::mpsc;

/// Channel bound for the result stream and every derived stage
const STREAM_CAPACITY: usize = 1;

/// The ordered, unbounded, incrementally produced sequence of posts a
/// scraping run emits.
///
/// The stream closes when the run is exhausted. Dropping it signals the
/// producing task to stop at its next emission or fetch.
pub struct PostStream {
    rx: mpsc::Receiver<Post>,
}

impl PostStream {
    /// Creates a connected sender/stream pair
    pub(crate) fn channel() -> (mpsc::Sender<Post>, PostStream) {
        let (tx, rx) = mpsc::channel(STREAM_CAPACITY);
        (tx, PostStream { rx })
    }

    /// Receives the next post, or `None` once the stream is closed and drained
    pub async fn recv(&mut self) -> Option<Post> {
        self.rx.recv().await
    }

    /// Derives a pass-through stage from this stream.
    ///
    /// The stage applies `f` to every post; returning `None` drops the post.
    /// The derived stream preserves order, carries the same capacity-1
    /// backpressure, and closes when this stream closes.
    ///
    /// # Arguments
    ///
    /// * `f` - Transform applied to each post
    ///
    /// # Returns
    ///
    /// The derived stream
    pub fn pipe<F>(mut self, mut f: F) -> PostStream
    where
        F: FnMut(Post) -> Option<Post> + Send + 'static,
    {
        let (tx, downstream) = PostStream::channel();

        tokio::spawn(async move {
            while let Some(post) = self.rx.recv().await {
                let Some(mapped) = f(post) else {
                    continue;
                };
                if tx.send(mapped).await.is_err() {
                    // Downstream consumer is gone; dropping self closes the
                    // upstream in turn
                    break;
                }
            }
        });

        downstream
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(id: &str) -> Post {
        Post {
            id: id.to_string(),
            text: format!("text {}", id),
            published_at: 1,
        }
    }

    #[tokio::test]
    async fn test_recv_in_order_then_closed() {
        let (tx, mut stream) = PostStream::channel();

        tokio::spawn(async move {
            for id in ["1", "2", "3"] {
                tx.send(post(id)).await.unwrap();
            }
        });

        assert_eq!(stream.recv().await.unwrap().id, "1");
        assert_eq!(stream.recv().await.unwrap().id, "2");
        assert_eq!(stream.recv().await.unwrap().id, "3");
        assert!(stream.recv().await.is_none());
    }

    #[tokio::test]
    async fn test_pipe_transforms_and_preserves_order() {
        let (tx, stream) = PostStream::channel();
        let mut stream = stream.pipe(|mut p| {
            p.text = p.text.to_uppercase();
            Some(p)
        });

        tokio::spawn(async move {
            tx.send(post("a")).await.unwrap();
            tx.send(post("b")).await.unwrap();
        });

        assert_eq!(stream.recv().await.unwrap().text, "TEXT A");
        assert_eq!(stream.recv().await.unwrap().text, "TEXT B");
        assert!(stream.recv().await.is_none());
    }

    #[tokio::test]
    async fn test_pipe_drops_filtered_posts() {
        let (tx, stream) = PostStream::channel();
        let mut stream = stream.pipe(|p| if p.id == "skip" { None } else { Some(p) });

        tokio::spawn(async move {
            tx.send(post("keep")).await.unwrap();
            tx.send(post("skip")).await.unwrap();
            tx.send(post("keep2")).await.unwrap();
        });

        assert_eq!(stream.recv().await.unwrap().id, "keep");
        assert_eq!(stream.recv().await.unwrap().id, "keep2");
        assert!(stream.recv().await.is_none());
    }

    #[tokio::test]
    async fn test_pipe_closes_when_upstream_closes() {
        let (tx, stream) = PostStream::channel();
        let mut stream = stream.pipe(Some);

        drop(tx);
        assert!(stream.recv().await.is_none());
    }

    #[tokio::test]
    async fn test_dropped_stream_fails_producer_send() {
        let (tx, stream) = PostStream::channel();
        drop(stream);
        assert!(tx.send(post("1")).await.is_err());
    }
}
