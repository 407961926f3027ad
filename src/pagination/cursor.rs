//! Opaque cursor codec.
//!
//! Wire format: Base64URL (no padding) of `{"s": <score, 6 decimals>,
//! "id": "<string>"}`. The id is what resolves a cursor against a freshly
//! recomputed ranked list; the score is advisory only, because independent
//! requests may compute slightly different normalized statistics for the
//! same underlying raw scores.

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::{Deserialize, Serialize};

use crate::error::{FusorError, Result};
use crate::fusion::FusedHit;

/// Decimal places kept when a fused score is carried inside a cursor.
const SCORE_DECIMALS: i32 = 6;

/// A decoded position in a ranked result list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cursor {
    /// Fused score at the position, rounded to 6 decimal places. Advisory;
    /// never compared exactly against recomputed scores.
    pub s: f64,
    /// Id of the item at the position. This is what resolution uses.
    pub id: String,
}

impl Cursor {
    /// Create a cursor for a position, rounding the score.
    pub fn new<S: Into<String>>(score: f64, id: S) -> Self {
        Self {
            s: round_score(score),
            id: id.into(),
        }
    }

    /// Create a cursor pointing at a fused hit.
    pub fn for_hit<T>(hit: &FusedHit<T>) -> Self {
        Self::new(hit.fused_score, hit.id.clone())
    }

    /// Encode into the opaque wire form.
    pub fn encode(&self) -> Result<String> {
        let json = serde_json::to_vec(self)?;
        Ok(URL_SAFE_NO_PAD.encode(json))
    }

    /// Decode an opaque wire cursor.
    ///
    /// Undecodable input (bad Base64URL, bad JSON, missing `s` or `id`) is
    /// a [`FusorError::BadRequest`]; whether the id still resolves is the
    /// paginator's concern, not the codec's.
    pub fn decode(encoded: &str) -> Result<Self> {
        let bytes = URL_SAFE_NO_PAD
            .decode(encoded)
            .map_err(|e| FusorError::bad_request(format!("cursor is not valid base64url: {e}")))?;

        let cursor: Cursor = serde_json::from_slice(&bytes)
            .map_err(|e| FusorError::bad_request(format!("cursor payload is not valid: {e}")))?;

        Ok(cursor)
    }
}

/// Round a fused score to the cursor's 6-decimal precision.
pub fn round_score(score: f64) -> f64 {
    let factor = 10f64.powi(SCORE_DECIMALS);
    (score * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_law() {
        let cursors = [
            Cursor::new(0.5, "doc-1"),
            Cursor::new(-0.333333333, "doc/with/slashes"),
            Cursor::new(0.0, ""),
            Cursor::new(123456.789012345, "ünïcödé-id"),
        ];

        for cursor in cursors {
            let encoded = cursor.encode().unwrap();
            let decoded = Cursor::decode(&encoded).unwrap();
            assert_eq!(decoded, cursor);
        }
    }

    #[test]
    fn test_score_is_rounded_to_six_decimals() {
        let cursor = Cursor::new(0.123456789, "a");
        assert_eq!(cursor.s, 0.123457);

        assert_eq!(round_score(2.0), 2.0);
        assert_eq!(round_score(-1.5000004), -1.5);
    }

    #[test]
    fn test_wire_format_is_base64url_json() {
        let cursor = Cursor::new(0.5, "doc-1");
        let encoded = cursor.encode().unwrap();

        // Base64URL alphabet only, no padding.
        assert!(
            encoded
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        );

        let bytes = URL_SAFE_NO_PAD.decode(&encoded).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(value["s"], 0.5);
        assert_eq!(value["id"], "doc-1");
    }

    #[test]
    fn test_decode_rejects_bad_base64() {
        let result = Cursor::decode("not base64url!!!");
        match result {
            Err(FusorError::BadRequest(msg)) => assert!(msg.contains("base64url")),
            other => panic!("Expected BadRequest, got {other:?}"),
        }
    }

    #[test]
    fn test_decode_rejects_bad_json() {
        let encoded = URL_SAFE_NO_PAD.encode(b"not json");
        match Cursor::decode(&encoded) {
            Err(FusorError::BadRequest(_)) => {}
            other => panic!("Expected BadRequest, got {other:?}"),
        }
    }

    #[test]
    fn test_decode_rejects_missing_fields() {
        for payload in [r#"{"s": 0.5}"#, r#"{"id": "a"}"#, r#"{}"#] {
            let encoded = URL_SAFE_NO_PAD.encode(payload.as_bytes());
            match Cursor::decode(&encoded) {
                Err(FusorError::BadRequest(_)) => {}
                other => panic!("Expected BadRequest for {payload}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_for_hit_uses_rounded_score() {
        let hit = FusedHit {
            id: "a".to_string(),
            fused_score: 0.333333333333,
            lexical_score: None,
            vector_score: None,
            payload: (),
        };
        let cursor = Cursor::for_hit(&hit);
        assert_eq!(cursor.s, 0.333333);
        assert_eq!(cursor.id, "a");
    }
}
