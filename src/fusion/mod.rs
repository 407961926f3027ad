//! Score fusion: statistics, normalization, and the merge-and-rank engine.
//!
//! Raw scores from the lexical and vector channels live on incomparable
//! scales. This module normalizes each channel against its own per-request
//! statistics, combines the contributions with configurable weights, and
//! produces one deterministically-ordered ranked list.

pub mod engine;
pub mod normalizer;
pub mod stats;
pub mod types;

pub use engine::*;
pub use normalizer::*;
pub use stats::*;
pub use types::*;
