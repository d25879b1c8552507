//! The extracted post record

use serde::Serialize;

/// One post extracted from a result page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Post {
    /// The item identifier from the markup; empty when the attribute is absent
    pub id: String,

    /// Visible text content; empty when the text container is missing
    pub text: String,

    /// Publication time as epoch seconds; 0 when no timestamp was present
    pub published_at: u64,
}
