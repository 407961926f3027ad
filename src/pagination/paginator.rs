//! Bidirectional window slicing over the fused ranked list.
//!
//! Pagination is purely functional over `(ranked list, cursor, direction,
//! limit)` — nothing is kept between requests. Cursors mark boundaries
//! between pages: a cursor's id names the first item after its boundary,
//! so a forward page starts at the cursor's item and a backward page ends
//! just before it (the cursor item itself is excluded).

use serde::{Deserialize, Serialize};

use super::cursor::Cursor;
use crate::error::{FusorError, Result};
use crate::fusion::FusedHit;

/// Paging direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Walk the ranked list top-down (the default).
    #[default]
    Forward,
    /// Walk back toward the top of the ranked list.
    Backward,
}

/// A client's pagination parameters.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PageRequest {
    /// Requested page size. Omitted means the server default; the value is
    /// clamped to the hard cap either way.
    pub limit: Option<usize>,
    /// Opaque cursor from a previous response, if resuming.
    pub cursor: Option<String>,
    /// Paging direction, `Forward` when omitted.
    #[serde(default)]
    pub direction: Direction,
}

impl PageRequest {
    /// First page with an explicit limit.
    pub fn first(limit: usize) -> Self {
        Self {
            limit: Some(limit),
            cursor: None,
            direction: Direction::Forward,
        }
    }

    /// Continue from a cursor in the given direction.
    pub fn resume<S: Into<String>>(cursor: S, direction: Direction, limit: usize) -> Self {
        Self {
            limit: Some(limit),
            cursor: Some(cursor.into()),
            direction,
        }
    }
}

/// The resolved window of one page, plus its boundary cursors.
#[derive(Debug, Clone, PartialEq)]
pub struct PageWindow {
    /// Start index of the page in the ranked list (inclusive).
    pub start: usize,
    /// End index of the page in the ranked list (exclusive).
    pub end: usize,
    /// Effective page size after clamping.
    pub limit: usize,
    /// The page size the client originally asked for.
    pub requested_limit: usize,
    /// The direction the page was computed in.
    pub direction: Direction,
    /// Cursor continuing the walk in the requested direction, when a
    /// further page exists.
    pub next_cursor: Option<Cursor>,
    /// Cursor walking back the other way from this page's boundary.
    pub prev_cursor: Option<Cursor>,
}

impl PageWindow {
    /// The page's items within the ranked list.
    pub fn slice<'a, T>(&self, ranked: &'a [FusedHit<T>]) -> &'a [FusedHit<T>] {
        &ranked[self.start..self.end]
    }

    /// Whether a next page (in the requested direction) exists.
    pub fn has_next(&self) -> bool {
        self.next_cursor.is_some()
    }

    /// Whether a previous page exists.
    pub fn has_prev(&self) -> bool {
        self.prev_cursor.is_some()
    }
}

/// Compute the requested page window over a fused ranked list.
///
/// The cursor, when present, must resolve by id against `ranked`; a
/// decodable cursor whose id is gone is an [`FusorError::UnresolvableCursor`]
/// (stale link), never a silent reset to page one.
pub fn paginate<T>(
    ranked: &[FusedHit<T>],
    request: &PageRequest,
    default_limit: usize,
    hard_limit_cap: usize,
) -> Result<PageWindow> {
    let requested_limit = request.limit.unwrap_or(default_limit);
    let limit = requested_limit.clamp(1, hard_limit_cap.max(1));

    let position = match &request.cursor {
        Some(encoded) => {
            let cursor = Cursor::decode(encoded)?;
            let idx = ranked
                .iter()
                .position(|hit| hit.id == cursor.id)
                .ok_or_else(|| {
                    FusorError::unresolvable_cursor(format!(
                        "cursor id '{}' is not in the current result set",
                        cursor.id
                    ))
                })?;
            Some(idx)
        }
        None => None,
    };

    match request.direction {
        Direction::Forward => {
            let start = position.unwrap_or(0);
            let end = (start + limit).min(ranked.len());

            Ok(PageWindow {
                start,
                end,
                limit,
                requested_limit,
                direction: Direction::Forward,
                next_cursor: ranked.get(end).map(Cursor::for_hit),
                prev_cursor: if start > 0 {
                    Some(Cursor::for_hit(&ranked[start]))
                } else {
                    None
                },
            })
        }
        Direction::Backward => {
            let Some(end) = position else {
                return Err(FusorError::bad_request(
                    "backward pagination requires a cursor",
                ));
            };
            let start = end.saturating_sub(limit);

            Ok(PageWindow {
                start,
                end,
                limit,
                requested_limit,
                direction: Direction::Backward,
                // Continuing backward needs the boundary before this page.
                next_cursor: if start > 0 {
                    Some(Cursor::for_hit(&ranked[start]))
                } else {
                    None
                },
                // Switching to forward from where the client ended up.
                prev_cursor: ranked.get(end).map(Cursor::for_hit),
            })
        }
    }
}
