//! JSON encoding for boundary data.
//!
//! This module provides:
//! - **Boundary JSON**: Raw boundary dictionaries (type code -> entries) as JSON
//!   text, for handing boundaries between a mesh-file parser and this crate
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use adcirc_mesh::io::parse_boundaries_json;
//! use adcirc_mesh::boundary::MeshBoundaryRegistry;
//!
//! let raw = parse_boundaries_json(&content)?;
//! let registry = MeshBoundaryRegistry::new(Arc::new(nodes), raw);
//! for (category, layer) in registry.layers()? {
//!     println!("{}: {} features", category, layer.len());
//! }
//! ```

mod boundary_json;

pub use boundary_json::{BoundaryJsonError, boundaries_to_json_string, parse_boundaries_json};
