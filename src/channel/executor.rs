//! Channel execution: the executor trait, timeouts, and the failure policy.

use std::time::Duration;

use futures::future::BoxFuture;
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::types::{ChannelHit, ChannelKind};
use crate::error::{FusorError, Result};

/// A single retrieval channel the engine can query.
///
/// Implementations wrap whatever index or remote service backs the channel.
/// Returning an empty list is a valid, non-error outcome; an `Err` means
/// the channel itself failed (dependency down, internal error) and triggers
/// the configured [`FailurePolicy`].
pub trait ChannelExecutor<T>: Send + Sync {
    /// Execute the query against this channel, returning at most
    /// `fetch_limit` scored hits.
    fn execute<'a>(
        &'a self,
        query: &'a str,
        fetch_limit: usize,
    ) -> BoxFuture<'a, Result<Vec<ChannelHit<T>>>>;
}

/// Policy applied when a channel executor fails or times out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailurePolicy {
    /// Fail the whole request with [`FusorError::ChannelFailure`].
    #[default]
    Fail,
    /// Treat the failed channel as an empty result set and fuse from the
    /// remaining channel. If both channels fail the request still errors.
    Degrade,
}

/// Run both channel executors concurrently and join on both completions.
///
/// Each call is wrapped in a per-channel timeout. How a failure propagates
/// is decided by `policy`; under [`FailurePolicy::Degrade`] the failed
/// channel contributes an empty result set and the decision is logged.
pub async fn run_channels<T>(
    lexical: &dyn ChannelExecutor<T>,
    vector: &dyn ChannelExecutor<T>,
    query: &str,
    fetch_limit: usize,
    timeout: Duration,
    policy: FailurePolicy,
) -> Result<(Vec<ChannelHit<T>>, Vec<ChannelHit<T>>)> {
    let (lexical_outcome, vector_outcome) = tokio::join!(
        tokio::time::timeout(timeout, lexical.execute(query, fetch_limit)),
        tokio::time::timeout(timeout, vector.execute(query, fetch_limit)),
    );

    let lexical_outcome = flatten_timeout(ChannelKind::Lexical, lexical_outcome);
    let vector_outcome = flatten_timeout(ChannelKind::Vector, vector_outcome);

    match policy {
        FailurePolicy::Fail => Ok((lexical_outcome?, vector_outcome?)),
        FailurePolicy::Degrade => match (lexical_outcome, vector_outcome) {
            (Ok(lex), Ok(vec)) => Ok((lex, vec)),
            (Ok(lex), Err(e)) => {
                warn!(channel = "vector", error = %e, "channel failed, degrading to lexical only");
                Ok((lex, Vec::new()))
            }
            (Err(e), Ok(vec)) => {
                warn!(channel = "lexical", error = %e, "channel failed, degrading to vector only");
                Ok((Vec::new(), vec))
            }
            (Err(lex_err), Err(vec_err)) => Err(FusorError::channel_failure(format!(
                "both channels failed: lexical: {lex_err}; vector: {vec_err}"
            ))),
        },
    }
}

/// Collapse the timeout wrapper into the channel's own error type.
fn flatten_timeout<T>(
    kind: ChannelKind,
    outcome: std::result::Result<Result<Vec<ChannelHit<T>>>, tokio::time::error::Elapsed>,
) -> Result<Vec<ChannelHit<T>>> {
    match outcome {
        Ok(inner) => inner,
        Err(_) => Err(FusorError::timeout(format!("{} channel", kind.name()))),
    }
}
