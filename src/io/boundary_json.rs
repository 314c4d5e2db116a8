//! JSON encoding of raw boundary dictionaries.
//!
//! The document holds the un-aggregated dictionary, so parsing it back gives
//! a registry equal to the one it was written from. Reading and writing the
//! bytes is left to the caller.
//!
//! ```text
//! [
//!   {"ibtype": null, "entries": [{"node_id": [1, 2, 3]}]},
//!   {"ibtype": "0", "entries": [{"node_id": [3, 4, 5]}]},
//!   {"ibtype": "24", "entries": [{"node_id": [["10", "20"], ["11", "21"]], "barrier_height": 1.5}]}
//! ]
//! ```

use thiserror::Error;
use tracing::debug;

use crate::boundary::RawBoundaries;

/// Error type for boundary JSON encoding.
#[derive(Debug, Error)]
pub enum BoundaryJsonError {
    /// Malformed JSON or unexpected structure
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Parse a raw boundary dictionary from a JSON string.
pub fn parse_boundaries_json(content: &str) -> Result<RawBoundaries, BoundaryJsonError> {
    let raw: RawBoundaries = serde_json::from_str(content)?;
    debug!(
        buckets = raw.len(),
        entries = raw.n_entries(),
        "parsed boundary dictionary"
    );
    Ok(raw)
}

/// Serialize a raw boundary dictionary to pretty-printed JSON.
pub fn boundaries_to_json_string(raw: &RawBoundaries) -> Result<String, BoundaryJsonError> {
    Ok(serde_json::to_string_pretty(raw)?)
}
