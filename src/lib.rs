//! # Fusor
//!
//! A hybrid retrieval fusion and cursor-paginated navigation engine for
//! Rust.
//!
//! ## Features
//!
//! - Combines a lexical (full-text) and a semantic (vector) channel into
//!   one ranked list
//! - Per-request score statistics with z-score (+ sigmoid) or min-max
//!   normalization
//! - Weighted fusion with a stable, total ordering (score desc, id asc)
//! - Opaque, stateless Base64URL cursors for forward and backward paging
//! - Concurrent channel execution with per-channel timeouts and a
//!   configurable fail-or-degrade policy

pub mod channel;
pub mod error;
pub mod fusion;
pub mod pagination;
pub mod search;

pub mod prelude {
    pub use crate::channel::{ChannelExecutor, ChannelHit, ChannelKind, FailurePolicy};
    pub use crate::error::{FusorError, Result};
    pub use crate::fusion::{FusedHit, NormalizationStrategy};
    pub use crate::pagination::{Cursor, Direction, PageRequest};
    pub use crate::search::{HybridSearchEngine, SearchConfig, SearchResponse};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
