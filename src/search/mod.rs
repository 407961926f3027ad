//! Search orchestration: configuration, the hybrid engine, and the
//! wire-shaped response types.

pub mod config;
pub mod engine;
pub mod response;

pub use config::*;
pub use engine::*;
pub use response::*;
