//! Error type for boundary resolution and geometry construction.

use thiserror::Error;

/// Result alias used throughout the boundary module.
pub type BoundaryResult<T> = Result<T, BoundaryError>;

/// Error type for boundary operations.
///
/// Every variant is local to the category or entry being processed;
/// nothing is cached when one is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoundaryError {
    /// External node id is not present in the node table.
    #[error("Node id {id} not found in node table")]
    NodeNotFound { id: i64 },

    /// Node reference outside the accepted encodings.
    #[error("Invalid node reference: {reason}")]
    InvalidNodeRef { reason: String },

    /// A pass-through barrier index that does not address a node.
    #[error("Node index {index} out of range for {len} nodes")]
    IndexOutOfRange { index: usize, len: usize },

    /// A barrier node reference that is not a (front, back) pair.
    #[error("Boundary {key}: node reference {position} is not a node pair")]
    MalformedPair { key: String, position: usize },

    /// Barrier entry with no node pairs, so its faces cannot be split.
    #[error("Barrier boundary {key} has no node pairs")]
    EmptyBarrier { key: String },

    /// The same external id was inserted twice into a node table.
    #[error("Duplicate node id {id}")]
    DuplicateNodeId { id: i64 },
}

impl BoundaryError {
    pub(crate) fn invalid_ref(reason: impl Into<String>) -> Self {
        BoundaryError::InvalidNodeRef {
            reason: reason.into(),
        }
    }

    /// Check if this is a failed node lookup.
    pub fn is_lookup(&self) -> bool {
        matches!(self, BoundaryError::NodeNotFound { .. })
    }
}
