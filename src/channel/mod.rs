//! Retrieval channel abstraction for hybrid search.
//!
//! A channel is one independently-scored retrieval source (lexical full-text
//! or semantic vector). The engine talks to channels only through the
//! [`ChannelExecutor`] trait and runs both channels of a request
//! concurrently, joining on both completions.

pub mod executor;
pub mod types;

pub use executor::*;
pub use types::*;
