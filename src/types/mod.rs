//! Strongly-typed index types for safer APIs.
//!
//! Positional node indices and synthetic boundary ids are both plain
//! counters underneath; the newtypes keep them from being mixed up with
//! each other or with external node ids from the mesh file.
//!
//! # Example
//!
//! ```
//! use adcirc_mesh::types::{BoundaryId, NodeIndex};
//!
//! let first = BoundaryId::ZERO.next();
//! assert_eq!(first.get(), 1);
//!
//! let node = NodeIndex::new(0);
//! assert_eq!(node.to_string(), "N0");
//! ```

mod indices;

pub use indices::{BoundaryId, NodeIndex};
