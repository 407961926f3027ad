//! Error types for the fusor library.
//!
//! All fallible operations return [`Result`], whose error type is the
//! [`FusorError`] enum. Client-caused failures (malformed cursors, stale
//! cursors) and upstream channel failures are distinct variants so callers
//! can branch on them.
//!
//! # Examples
//!
//! ```
//! use fusor::error::{FusorError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(FusorError::bad_request("cursor is not valid base64url"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use anyhow;
use thiserror::Error;

/// The main error type for fusor operations.
///
/// Malformed cursors ([`FusorError::BadRequest`]) and stale cursors
/// ([`FusorError::UnresolvableCursor`]) are deliberately separate variants:
/// the first means "your link is broken", the second means "the underlying
/// data changed, re-issue a fresh query".
#[derive(Error, Debug)]
pub enum FusorError {
    /// Client error: the request itself is malformed (undecodable cursor,
    /// cursor missing required fields, invalid pagination parameters).
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// The cursor decoded fine but its id no longer exists in the current
    /// ranked list.
    #[error("Unresolvable cursor: {0}")]
    UnresolvableCursor(String),

    /// One or both retrieval channels failed or timed out and the
    /// configured failure policy did not allow degrading.
    #[error("Channel failure: {0}")]
    ChannelFailure(String),

    /// Configuration errors
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with FusorError.
pub type Result<T> = std::result::Result<T, FusorError>;

impl FusorError {
    /// Create a new bad request error.
    pub fn bad_request<S: Into<String>>(msg: S) -> Self {
        FusorError::BadRequest(msg.into())
    }

    /// Create a new unresolvable cursor error.
    pub fn unresolvable_cursor<S: Into<String>>(msg: S) -> Self {
        FusorError::UnresolvableCursor(msg.into())
    }

    /// Create a new channel failure error.
    pub fn channel_failure<S: Into<String>>(msg: S) -> Self {
        FusorError::ChannelFailure(msg.into())
    }

    /// Create a new timeout error. Timeouts surface as channel failures.
    pub fn timeout<S: Into<String>>(msg: S) -> Self {
        FusorError::ChannelFailure(format!("Timeout: {}", msg.into()))
    }

    /// Create a new invalid config error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        FusorError::InvalidConfig(msg.into())
    }
}
