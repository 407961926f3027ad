//! Stateless cursor pagination over a fused ranked list.
//!
//! A cursor is an opaque, client-held token encoding `(rounded fused
//! score, id)`. The server never stores per-client position: every request
//! recomputes the ranked list and relocates the cursor by id.

pub mod cursor;
pub mod paginator;

pub use cursor::*;
pub use paginator::*;
