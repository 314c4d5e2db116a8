//! Mesh representation.
//!
//! Provides the pieces of an unstructured coastal mesh that boundary
//! handling needs:
//! - Ordered node table (external id -> coordinate)
//! - Node references and their resolution to positional indices
//! - Boundary categories derived from type codes
//! - `Fort14` mesh pairing nodes with boundary records

mod boundary_tags;
mod fort14;
mod node_ref;
mod node_table;

pub use boundary_tags::BoundaryCategory;
pub use fort14::Fort14;
pub use node_ref::{NodeIndexResolver, NodeRef};
pub use node_table::NodeTable;
