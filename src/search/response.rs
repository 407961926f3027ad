//! Wire-shaped response types.
//!
//! Field names follow the external contract exactly (camelCase for scores,
//! cursors, and continuation flags; snake_case for `total_estimate` and
//! `requested_limit`), reproduced with serde renames so serialized JSON is
//! wire-faithful.

use serde::{Deserialize, Serialize};

use crate::pagination::Direction;

/// One result item of a paginated hybrid search response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchItem<T> {
    /// Identifier of the matched object.
    pub id: String,
    /// Combined, weighted score.
    #[serde(rename = "fusedScore")]
    pub fused_score: f64,
    /// Normalized lexical contribution; absent when the lexical channel
    /// did not match this id.
    #[serde(rename = "lexicalScore", skip_serializing_if = "Option::is_none")]
    pub lexical_score: Option<f64>,
    /// Normalized vector contribution; absent when the vector channel did
    /// not match this id.
    #[serde(rename = "vectorScore", skip_serializing_if = "Option::is_none")]
    pub vector_score: Option<f64>,
    /// Payload carried through from the channel hit.
    pub payload: T,
    /// Opaque cursor for this item's own position, so a client can resume
    /// from any row, not just page boundaries.
    pub cursor: String,
}

/// Echo of the effective pagination parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestEcho {
    /// Effective (clamped) page size.
    pub limit: usize,
    /// The page size the client originally asked for.
    pub requested_limit: usize,
    /// The direction the page was computed in; `forward` when the client
    /// omitted it.
    pub direction: Direction,
}

/// Pagination metadata for one response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponseMeta {
    /// Size of the full fused ranked list this page was cut from. An
    /// estimate: channels are over-fetched, not exhaustively drained.
    pub total_estimate: usize,
    /// Echo of the effective request parameters.
    pub request: RequestEcho,
    /// Cursor continuing in the requested direction, `null` at the end.
    #[serde(rename = "nextCursor")]
    pub next_cursor: Option<String>,
    /// Cursor walking back the other way, `null` at the start.
    #[serde(rename = "prevCursor")]
    pub prev_cursor: Option<String>,
    /// True iff `nextCursor` points at a real position.
    #[serde(rename = "hasNext")]
    pub has_next: bool,
    /// True iff `prevCursor` points at a real position.
    #[serde(rename = "hasPrev")]
    pub has_prev: bool,
}

/// A paginated hybrid search response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse<T> {
    /// The page's items, in ranked order.
    pub items: Vec<SearchItem<T>>,
    /// Pagination metadata.
    pub meta: ResponseMeta,
}

impl<T> SearchResponse<T> {
    /// Number of items on this page.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the page is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
