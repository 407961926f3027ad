//! Hybrid search engine: the request orchestrator.
//!
//! One request flows through: both channel executors concurrently → join →
//! per-channel statistics → normalization → weighted fusion → pagination →
//! cursor encoding. Everything after the join is synchronous and in-memory;
//! nothing is shared between requests.

use tracing::debug;

use super::config::SearchConfig;
use super::response::{RequestEcho, ResponseMeta, SearchItem, SearchResponse};
use crate::channel::{ChannelExecutor, run_channels};
use crate::error::{FusorError, Result};
use crate::fusion::{FusedHit, FusionEngine};
use crate::pagination::{Cursor, PageRequest, paginate};

/// Hybrid search engine combining a lexical and a vector channel.
///
/// Holds no per-request state: the ranked list, statistics, and cursors are
/// values constructed fresh per call, so concurrent requests need no
/// coordination.
pub struct HybridSearchEngine<T> {
    config: SearchConfig,
    fusion: FusionEngine,
    lexical: Box<dyn ChannelExecutor<T>>,
    vector: Box<dyn ChannelExecutor<T>>,
}

impl<T> HybridSearchEngine<T> {
    /// Create a new engine over the two channel executors.
    pub fn new(
        config: SearchConfig,
        lexical: Box<dyn ChannelExecutor<T>>,
        vector: Box<dyn ChannelExecutor<T>>,
    ) -> Result<Self> {
        validate_config(&config)?;
        let fusion = FusionEngine::new(
            config.lexical_weight,
            config.vector_weight,
            config.normalization,
            config.apply_sigmoid,
        );

        Ok(Self {
            config,
            fusion,
            lexical,
            vector,
        })
    }

    /// The engine's configuration.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Run a full hybrid search, returning the complete fused ranked list.
    ///
    /// Channels are over-fetched at `hard_limit_cap × overfetch_factor`.
    pub async fn search(&self, query: &str) -> Result<Vec<FusedHit<T>>> {
        let fetch_limit = self.config.hard_limit_cap * self.config.overfetch_factor;
        self.ranked_list(query, fetch_limit).await
    }

    /// Run a hybrid search and slice out one page.
    pub async fn search_page(
        &self,
        query: &str,
        request: &PageRequest,
    ) -> Result<SearchResponse<T>> {
        let requested_limit = request.limit.unwrap_or(self.config.default_limit);
        let limit = requested_limit.clamp(1, self.config.hard_limit_cap);
        // Over-fetch per channel so fusion has enough candidates from each
        // side even after overlap.
        let fetch_limit = limit * self.config.overfetch_factor;

        let ranked = self.ranked_list(query, fetch_limit).await?;
        let total_estimate = ranked.len();

        let window = paginate(
            &ranked,
            request,
            self.config.default_limit,
            self.config.hard_limit_cap,
        )?;

        let page_len = window.end - window.start;
        let mut items = Vec::with_capacity(page_len);
        for hit in ranked.into_iter().skip(window.start).take(page_len) {
            let cursor = Cursor::for_hit(&hit).encode()?;
            items.push(SearchItem {
                id: hit.id,
                fused_score: hit.fused_score,
                lexical_score: hit.lexical_score,
                vector_score: hit.vector_score,
                payload: hit.payload,
                cursor,
            });
        }

        let next_cursor = window
            .next_cursor
            .as_ref()
            .map(Cursor::encode)
            .transpose()?;
        let prev_cursor = window
            .prev_cursor
            .as_ref()
            .map(Cursor::encode)
            .transpose()?;

        Ok(SearchResponse {
            items,
            meta: ResponseMeta {
                total_estimate,
                request: RequestEcho {
                    limit: window.limit,
                    requested_limit: window.requested_limit,
                    direction: request.direction,
                },
                has_next: next_cursor.is_some(),
                has_prev: prev_cursor.is_some(),
                next_cursor,
                prev_cursor,
            },
        })
    }

    /// Execute both channels concurrently and fuse into the ranked list.
    async fn ranked_list(&self, query: &str, fetch_limit: usize) -> Result<Vec<FusedHit<T>>> {
        let (lexical_hits, vector_hits) = run_channels(
            self.lexical.as_ref(),
            self.vector.as_ref(),
            query,
            fetch_limit,
            self.config.channel_timeout,
            self.config.failure_policy,
        )
        .await?;

        debug!(
            query,
            fetch_limit,
            lexical_hits = lexical_hits.len(),
            vector_hits = vector_hits.len(),
            "channel results joined"
        );

        Ok(self.fusion.fuse(lexical_hits, vector_hits))
    }
}

/// Reject configurations the pipeline cannot run with.
fn validate_config(config: &SearchConfig) -> Result<()> {
    if !config.lexical_weight.is_finite() || config.lexical_weight < 0.0 {
        return Err(FusorError::invalid_config(
            "lexical_weight must be finite and non-negative",
        ));
    }
    if !config.vector_weight.is_finite() || config.vector_weight < 0.0 {
        return Err(FusorError::invalid_config(
            "vector_weight must be finite and non-negative",
        ));
    }
    if config.hard_limit_cap == 0 {
        return Err(FusorError::invalid_config(
            "hard_limit_cap must be at least 1",
        ));
    }
    if config.default_limit == 0 {
        return Err(FusorError::invalid_config(
            "default_limit must be at least 1",
        ));
    }
    if config.overfetch_factor == 0 {
        return Err(FusorError::invalid_config(
            "overfetch_factor must be at least 1",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::channel::{ChannelHit, FailurePolicy};
    use crate::fusion::NormalizationStrategy;
    use crate::pagination::Direction;
    use futures::future::BoxFuture;

    struct StaticChannel {
        hits: Vec<(&'static str, f64)>,
    }

    impl ChannelExecutor<()> for StaticChannel {
        fn execute<'a>(
            &'a self,
            _query: &'a str,
            fetch_limit: usize,
        ) -> BoxFuture<'a, Result<Vec<ChannelHit<()>>>> {
            let mut hits: Vec<ChannelHit<()>> = self
                .hits
                .iter()
                .map(|(id, score)| ChannelHit::new(*id, *score, ()))
                .collect();
            hits.truncate(fetch_limit);
            Box::pin(async move { Ok(hits) })
        }
    }

    struct FailingChannel;

    impl ChannelExecutor<()> for FailingChannel {
        fn execute<'a>(
            &'a self,
            _query: &'a str,
            _fetch_limit: usize,
        ) -> BoxFuture<'a, Result<Vec<ChannelHit<()>>>> {
            Box::pin(async { Err(FusorError::channel_failure("backend down")) })
        }
    }

    fn engine_with(
        config: SearchConfig,
        lexical: Vec<(&'static str, f64)>,
        vector: Vec<(&'static str, f64)>,
    ) -> HybridSearchEngine<()> {
        HybridSearchEngine::new(
            config,
            Box::new(StaticChannel { hits: lexical }),
            Box::new(StaticChannel { hits: vector }),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_search_returns_full_ranked_list() {
        let engine = engine_with(
            SearchConfig::default(),
            vec![("a", 10.0), ("b", 5.0)],
            vec![("b", 0.9), ("c", 0.1)],
        );

        let ranked = engine.search("query").await.unwrap();
        assert_eq!(ranked.len(), 3);
        for pair in ranked.windows(2) {
            assert!(pair[0].fused_score >= pair[1].fused_score);
        }
    }

    #[tokio::test]
    async fn test_search_page_first_page_meta() {
        let engine = engine_with(
            SearchConfig::default(),
            vec![("a", 10.0), ("b", 8.0), ("c", 6.0), ("d", 4.0), ("e", 2.0)],
            vec![],
        );

        let response = engine
            .search_page("query", &PageRequest::first(2))
            .await
            .unwrap();

        assert_eq!(response.len(), 2);
        // The 2x over-fetch caps the ranked list at 4 of the 5 hits.
        assert_eq!(response.meta.total_estimate, 4);
        assert_eq!(response.meta.request.limit, 2);
        assert_eq!(response.meta.request.requested_limit, 2);
        assert_eq!(response.meta.request.direction, Direction::Forward);
        assert!(response.meta.has_next);
        assert!(!response.meta.has_prev);
        assert!(response.meta.next_cursor.is_some());
        assert!(response.meta.prev_cursor.is_none());
        // Every item carries its own resolvable cursor.
        for item in &response.items {
            let decoded = Cursor::decode(&item.cursor).unwrap();
            assert_eq!(decoded.id, item.id);
        }
    }

    #[tokio::test]
    async fn test_direction_echoes_request() {
        let engine = engine_with(
            SearchConfig::default(),
            vec![("a", 10.0), ("b", 8.0), ("c", 6.0)],
            vec![],
        );

        let first = engine
            .search_page("query", &PageRequest::first(1))
            .await
            .unwrap();
        let next = first.meta.next_cursor.unwrap();

        let back = engine
            .search_page("query", &PageRequest::resume(next, Direction::Backward, 1))
            .await
            .unwrap();
        assert_eq!(back.meta.request.direction, Direction::Backward);

        let default_direction = engine
            .search_page("query", &PageRequest::default())
            .await
            .unwrap();
        assert_eq!(default_direction.meta.request.direction, Direction::Forward);
    }

    #[tokio::test]
    async fn test_requested_limit_preserved_when_clamped() {
        let config = SearchConfig {
            hard_limit_cap: 3,
            ..Default::default()
        };
        let engine = engine_with(
            config,
            vec![("a", 10.0), ("b", 8.0), ("c", 6.0), ("d", 4.0), ("e", 2.0)],
            vec![],
        );

        let response = engine
            .search_page("query", &PageRequest::first(100))
            .await
            .unwrap();

        assert_eq!(response.meta.request.limit, 3);
        assert_eq!(response.meta.request.requested_limit, 100);
        assert_eq!(response.len(), 3);
    }

    #[tokio::test]
    async fn test_degrade_policy_survives_channel_failure() {
        let config = SearchConfig {
            failure_policy: FailurePolicy::Degrade,
            ..Default::default()
        };
        let engine = HybridSearchEngine::new(
            config,
            Box::new(StaticChannel {
                hits: vec![("a", 10.0), ("b", 5.0)],
            }),
            Box::new(FailingChannel),
        )
        .unwrap();

        let ranked = engine.search("query").await.unwrap();
        assert_eq!(ranked.len(), 2);
        assert!(ranked.iter().all(|hit| hit.vector_score.is_none()));
    }

    #[tokio::test]
    async fn test_fail_policy_propagates_channel_failure() {
        let engine = HybridSearchEngine::new(
            SearchConfig::default(),
            Box::new(StaticChannel {
                hits: vec![("a", 10.0)],
            }),
            Box::new(FailingChannel),
        )
        .unwrap();

        match engine.search("query").await {
            Err(FusorError::ChannelFailure(_)) => {}
            other => panic!("Expected ChannelFailure, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_empty_channels_yield_empty_page() {
        let engine = engine_with(SearchConfig::default(), vec![], vec![]);

        let response = engine
            .search_page("nothing", &PageRequest::first(10))
            .await
            .unwrap();

        assert!(response.is_empty());
        assert_eq!(response.meta.total_estimate, 0);
        assert!(!response.meta.has_next);
        assert!(!response.meta.has_prev);
    }

    #[test]
    fn test_invalid_configs_are_rejected() {
        let bad_configs = vec![
            SearchConfig {
                lexical_weight: -1.0,
                ..Default::default()
            },
            SearchConfig {
                vector_weight: f64::NAN,
                ..Default::default()
            },
            SearchConfig {
                hard_limit_cap: 0,
                ..Default::default()
            },
            SearchConfig {
                default_limit: 0,
                ..Default::default()
            },
            SearchConfig {
                overfetch_factor: 0,
                ..Default::default()
            },
        ];

        for config in bad_configs {
            let result = HybridSearchEngine::<()>::new(
                config,
                Box::new(StaticChannel { hits: vec![] }),
                Box::new(StaticChannel { hits: vec![] }),
            );
            match result {
                Err(FusorError::InvalidConfig(_)) => {}
                other => panic!("Expected InvalidConfig, got {:?}", other.is_ok()),
            }
        }
    }

    #[tokio::test]
    async fn test_minmax_strategy_via_config() {
        let config = SearchConfig {
            normalization: NormalizationStrategy::MinMax,
            apply_sigmoid: false,
            ..Default::default()
        };
        let engine = engine_with(
            config,
            vec![("a", 10.0), ("b", 5.0)],
            vec![("b", 0.9), ("c", 0.1)],
        );

        let ranked = engine.search("query").await.unwrap();
        assert_eq!(ranked[0].id, "b");
    }
}
