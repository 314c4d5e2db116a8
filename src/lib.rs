//! # adcirc-mesh
//!
//! Boundary classification and node index resolution for ADCIRC-style
//! unstructured coastal meshes.
//!
//! This crate provides:
//! - Node table with stable positional indices for external node ids
//! - Node reference normalization (integer, numeric string, wrapped id)
//! - Classification of raw boundary records into seven categories
//!   (ocean, land, interior, inflow, outflow, weir, culvert)
//! - Resolved index lists and `geo` geometry layers per category
//! - A lazily cached registry per mesh, round-tripping its raw input
//! - JSON I/O for raw boundary dictionaries
//!
//! # Example
//!
//! ```
//! use adcirc_mesh::{BoundaryCategory, BoundaryEntry, Fort14, NodeTable, RawBoundaries};
//!
//! let nodes = NodeTable::from_nodes(vec![
//!     (101, (0.0, 0.0)),
//!     (102, (1.0, 0.0)),
//!     (201, (0.0, 1.0)),
//!     (202, (1.0, 1.0)),
//! ])
//! .unwrap();
//!
//! let mut raw = RawBoundaries::new();
//! raw.push_ocean(BoundaryEntry::from_ids([101, 102]));
//! raw.push_typed(
//!     "24",
//!     BoundaryEntry::from_pairs([("101", "201"), ("102", "202")]).with_attribute("barrier_height", 1.5),
//! );
//!
//! let mesh = Fort14::new(nodes, Some(raw));
//! let weirs = mesh.boundaries().layer(BoundaryCategory::Weir).unwrap();
//! assert_eq!(weirs.len(), 1);
//! assert!(weirs.get("24:1").unwrap().multi_line_string().is_some());
//! ```

pub mod boundary;
pub mod io;
pub mod mesh;
pub mod types;

// Re-export main types for convenience
pub use boundary::{
    BarrierIdPolicy, BoundaryConfig, BoundaryEntry, BoundaryError, BoundaryFeature,
    BoundaryLayer, BoundaryRecord, BoundaryResult, BoundarySet, BoundarySetRef,
    ClassifiedBoundaries, MeshBoundaryRegistry, PairedNodeBoundarySet, RawBoundaries,
    SingleNodeBoundarySet,
};
pub use io::{BoundaryJsonError, boundaries_to_json_string, parse_boundaries_json};
pub use mesh::{BoundaryCategory, Fort14, NodeIndexResolver, NodeRef, NodeTable};
pub use types::{BoundaryId, NodeIndex};
