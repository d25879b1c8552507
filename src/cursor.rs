//! Max-position cursor codec
//!
//! The remote service paginates search results with an opaque token it calls
//! `max_position`. The token is a constant tag plus three `-`-delimited
//! segments: the marker of the last result seen, a fixed per-session segment,
//! and the session id. Only the marker changes from page to page.

use crate::CursorError;
use std::fmt;
use std::str::FromStr;

/// Tag segment leading every serialized cursor
const CURSOR_TAG: &str = "TWEET";

/// Delimiter between cursor segments
const CURSOR_DELIMITER: char = '-';

/// The three-part pagination cursor exchanged with the remote service.
///
/// Serializes as `TWEET-<last>-<fixed>-<session>`. The delimiter is not
/// escaped; the server never emits segment values containing `-`, and callers
/// constructing cursors by hand must uphold the same.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaxPosition {
    /// Marker of the last result on the previous page; varies per page
    pub last: String,

    /// Server-assigned segment, stable for the whole run
    pub fixed: String,

    /// Server-assigned session id, stable for the whole run
    pub session: String,
}

impl MaxPosition {
    /// Parses a serialized cursor string.
    ///
    /// Splits on the delimiter and assigns the marker, fixed, and session
    /// segments by position, ignoring the leading tag. Anything with fewer
    /// than four segments is malformed.
    ///
    /// # Arguments
    ///
    /// * `input` - The serialized cursor, e.g. `TWEET-100-abc-xyz`
    ///
    /// # Returns
    ///
    /// * `Ok(MaxPosition)` - Successfully parsed cursor
    /// * `Err(CursorError)` - Fewer than four delimited segments
    pub fn parse(input: &str) -> Result<Self, CursorError> {
        let parts: Vec<&str> = input.split(CURSOR_DELIMITER).collect();
        if parts.len() < 4 {
            return Err(CursorError::TooFewSegments {
                input: input.to_string(),
                found: parts.len(),
            });
        }

        Ok(Self {
            last: parts[1].to_string(),
            fixed: parts[2].to_string(),
            session: parts[3].to_string(),
        })
    }
}

impl fmt::Display for MaxPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{tag}{d}{last}{d}{fixed}{d}{session}",
            tag = CURSOR_TAG,
            d = CURSOR_DELIMITER,
            last = self.last,
            fixed = self.fixed,
            session = self.session,
        )
    }
}

impl FromStr for MaxPosition {
    type Err = CursorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
