//! Types returned by retrieval channels.

use serde::{Deserialize, Serialize};

/// Identifies which retrieval channel produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChannelKind {
    /// Full-text / keyword search channel.
    Lexical,
    /// Semantic / embedding-similarity search channel.
    Vector,
}

impl ChannelKind {
    /// Human-readable channel name, used in error messages and logs.
    pub fn name(&self) -> &'static str {
        match self {
            ChannelKind::Lexical => "lexical",
            ChannelKind::Vector => "vector",
        }
    }
}

/// One row returned by a single retrieval channel.
///
/// `id` is unique within one channel call, but the same id may appear in
/// both channels when they matched the same logical object. Raw scores are
/// on the channel's own scale (BM25-like for lexical, similarity for
/// vector) and are not comparable across channels until normalized.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChannelHit<T> {
    /// Identifier of the matched object.
    pub id: String,
    /// Raw, channel-scale relevance score.
    pub raw_score: f64,
    /// Opaque payload carried through fusion untouched.
    pub payload: T,
}

impl<T> ChannelHit<T> {
    /// Create a new channel hit.
    pub fn new<S: Into<String>>(id: S, raw_score: f64, payload: T) -> Self {
        Self {
            id: id.into(),
            raw_score,
            payload,
        }
    }
}
