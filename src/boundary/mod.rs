//! Boundary classification and resolution.
//!
//! Turns the raw, type-code-keyed boundary dictionary of a mesh into seven
//! category views, each with resolved node indices and a geometry layer.
//!
//! # Categories
//!
//! | Category | Set | Geometry |
//! |----------|-----|----------|
//! | ocean, land, interior, inflow | `SingleNodeBoundarySet` | `LineString` |
//! | outflow, weir, culvert | `PairedNodeBoundarySet` | `MultiLineString` (front, back) |
//!
//! # Data Flow
//!
//! ```text
//! RawBoundaries -> classify -> ClassifiedBoundaries -> {Single|Paired}NodeBoundarySet
//!               -> resolved indices (NodeIndexResolver) -> BoundaryLayer
//! ```
//!
//! Everything is exposed through [`MeshBoundaryRegistry`], which caches each
//! derived view on first access.

mod classifier;
mod config;
mod error;
mod layer;
mod paired;
mod raw;
mod registry;
mod single;

use std::cell::OnceCell;

pub use classifier::{
    classify, classify_suffix, enumerate_ocean, unclassified_type_codes, BoundaryRecord,
    ClassifiedBoundaries,
};
pub use config::{BarrierIdPolicy, BoundaryConfig};
pub use error::{BoundaryError, BoundaryResult};
pub use layer::{BoundaryFeature, BoundaryLayer, FeatureIndexes};
pub use paired::{IndexPair, PairedNodeBoundarySet};
pub use raw::{AttributeValue, BoundaryEntry, RawBoundaries, RawBucket};
pub use registry::{BoundarySetRef, MeshBoundaryRegistry};
pub use single::SingleNodeBoundarySet;

use crate::mesh::{BoundaryCategory, NodeRef};
use crate::types::BoundaryId;

/// Common interface of single-node and barrier boundary sets.
pub trait BoundarySet {
    /// Resolved index type per node reference.
    type Index;

    /// Category this set holds.
    fn category(&self) -> BoundaryCategory;

    /// Classified records in aggregation order.
    fn records(&self) -> &ClassifiedBoundaries;

    /// Resolved indices, one list per record, in record and node order.
    ///
    /// # Errors
    /// Lookup failure for an id absent from the node table.
    fn resolved_indices(&self) -> BoundaryResult<&[Vec<Self::Index>]>;

    /// One feature per record.
    fn layer(&self) -> BoundaryResult<&BoundaryLayer>;

    fn len(&self) -> usize {
        self.records().len()
    }

    fn is_empty(&self) -> bool {
        self.records().is_empty()
    }

    /// Synthetic ids in order.
    fn ids(&self) -> Vec<BoundaryId> {
        self.records().ids()
    }

    /// Raw node references per record.
    fn node_ids(&self) -> Vec<&[NodeRef]> {
        self.records().node_ids()
    }
}

/// Return the cached value, or compute and cache it on success.
pub(crate) fn get_or_try_init<T>(
    cell: &OnceCell<T>,
    init: impl FnOnce() -> BoundaryResult<T>,
) -> BoundaryResult<&T> {
    if let Some(value) = cell.get() {
        return Ok(value);
    }
    let value = init()?;
    Ok(cell.get_or_init(|| value))
}
