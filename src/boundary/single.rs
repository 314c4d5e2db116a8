//! Boundaries addressed by single node ids (ocean, land, interior, inflow).

use std::cell::OnceCell;
use std::sync::Arc;

use geo::Geometry;
use tracing::debug;

use crate::mesh::{BoundaryCategory, NodeTable};
use crate::types::NodeIndex;

use super::classifier::ClassifiedBoundaries;
use super::error::BoundaryResult;
use super::layer::{polyline, BoundaryFeature, BoundaryLayer, FeatureIndexes};
use super::{get_or_try_init, BoundarySet};

/// Records of one single-node category with lazily resolved views.
///
/// Resolved indices and the geometry layer are computed on first access
/// and reused afterwards. A failed computation leaves the cache empty.
#[derive(Debug)]
pub struct SingleNodeBoundarySet {
    category: BoundaryCategory,
    nodes: Arc<NodeTable>,
    records: ClassifiedBoundaries,
    crs: Option<String>,
    indexes: OnceCell<Vec<Vec<NodeIndex>>>,
    layer: OnceCell<BoundaryLayer>,
}

impl SingleNodeBoundarySet {
    pub fn new(
        category: BoundaryCategory,
        nodes: Arc<NodeTable>,
        records: ClassifiedBoundaries,
        crs: Option<String>,
    ) -> Self {
        debug_assert!(!category.is_barrier(), "{category} boundaries use node pairs");
        Self {
            category,
            nodes,
            records,
            crs,
            indexes: OnceCell::new(),
            layer: OnceCell::new(),
        }
    }

    fn compute_indexes(&self) -> BoundaryResult<Vec<Vec<NodeIndex>>> {
        let resolver = self.nodes.resolver();
        self.records
            .iter()
            .map(|record| resolver.resolve_all(record.node_id()))
            .collect()
    }

    fn build_layer(&self) -> BoundaryResult<BoundaryLayer> {
        let indexes = self.resolved_indices()?;
        let mut layer = BoundaryLayer::new(self.crs.clone());

        for (record, idx) in self.records.iter().zip(indexes) {
            let line = polyline(&self.nodes, idx)?;
            layer.push(BoundaryFeature {
                id: record.id,
                key: record.key(),
                ibtype: record.ibtype.clone(),
                geometry: Geometry::LineString(line),
                indexes: FeatureIndexes::Single(idx.clone()),
                attributes: record.entry.attributes.clone(),
            });
        }

        debug!(category = %self.category, features = layer.len(), "built boundary layer");
        Ok(layer)
    }
}

impl BoundarySet for SingleNodeBoundarySet {
    type Index = NodeIndex;

    fn category(&self) -> BoundaryCategory {
        self.category
    }

    fn records(&self) -> &ClassifiedBoundaries {
        &self.records
    }

    fn resolved_indices(&self) -> BoundaryResult<&[Vec<NodeIndex>]> {
        get_or_try_init(&self.indexes, || self.compute_indexes()).map(Vec::as_slice)
    }

    fn layer(&self) -> BoundaryResult<&BoundaryLayer> {
        get_or_try_init(&self.layer, || self.build_layer())
    }
}

impl PartialEq for SingleNodeBoundarySet {
    fn eq(&self, other: &Self) -> bool {
        self.category == other.category && self.records == other.records
    }
}
