//! Barrier boundaries addressed by (front, back) node pairs
//! (outflow, weir, culvert).

use std::cell::OnceCell;
use std::sync::Arc;

use geo::{Geometry, MultiLineString};
use tracing::debug;

use crate::mesh::{BoundaryCategory, NodeTable};
use crate::types::NodeIndex;

use super::classifier::{BoundaryRecord, ClassifiedBoundaries};
use super::config::BarrierIdPolicy;
use super::error::{BoundaryError, BoundaryResult};
use super::layer::{polyline, BoundaryFeature, BoundaryLayer, FeatureIndexes};
use super::{get_or_try_init, BoundarySet};

/// Resolved (front, back) positional indices of one barrier node pair.
pub type IndexPair = (NodeIndex, NodeIndex);

/// Records of one barrier category with lazily resolved views.
///
/// Each side of a pair is resolved on its own according to the
/// configured [`BarrierIdPolicy`].
#[derive(Debug)]
pub struct PairedNodeBoundarySet {
    category: BoundaryCategory,
    nodes: Arc<NodeTable>,
    records: ClassifiedBoundaries,
    policy: BarrierIdPolicy,
    crs: Option<String>,
    indexes: OnceCell<Vec<Vec<IndexPair>>>,
    layer: OnceCell<BoundaryLayer>,
}

impl PairedNodeBoundarySet {
    pub fn new(
        category: BoundaryCategory,
        nodes: Arc<NodeTable>,
        records: ClassifiedBoundaries,
        policy: BarrierIdPolicy,
        crs: Option<String>,
    ) -> Self {
        debug_assert!(category.is_barrier(), "{category} boundaries use single nodes");
        Self {
            category,
            nodes,
            records,
            policy,
            crs,
            indexes: OnceCell::new(),
            layer: OnceCell::new(),
        }
    }

    fn resolve_record(&self, record: &BoundaryRecord) -> BoundaryResult<Vec<IndexPair>> {
        let resolver = self.nodes.resolver();
        record
            .node_id()
            .iter()
            .enumerate()
            .map(|(position, node)| -> BoundaryResult<IndexPair> {
                let (front, back) = node.as_pair().ok_or_else(|| BoundaryError::MalformedPair {
                    key: record.key(),
                    position,
                })?;
                Ok((
                    resolver.resolve_barrier_side(front, self.policy)?,
                    resolver.resolve_barrier_side(back, self.policy)?,
                ))
            })
            .collect()
    }

    fn compute_indexes(&self) -> BoundaryResult<Vec<Vec<IndexPair>>> {
        self.records
            .iter()
            .map(|record| self.resolve_record(record))
            .collect()
    }

    fn build_layer(&self) -> BoundaryResult<BoundaryLayer> {
        let indexes = self.resolved_indices()?;
        let mut layer = BoundaryLayer::new(self.crs.clone());

        for (record, pairs) in self.records.iter().zip(indexes) {
            if pairs.is_empty() {
                return Err(BoundaryError::EmptyBarrier { key: record.key() });
            }
            let (front_face, back_face): (Vec<NodeIndex>, Vec<NodeIndex>) =
                pairs.iter().copied().unzip();
            let faces = MultiLineString::new(vec![
                polyline(&self.nodes, &front_face)?,
                polyline(&self.nodes, &back_face)?,
            ]);
            layer.push(BoundaryFeature {
                id: record.id,
                key: record.key(),
                ibtype: record.ibtype.clone(),
                geometry: Geometry::MultiLineString(faces),
                indexes: FeatureIndexes::Paired(pairs.clone()),
                attributes: record.entry.attributes.clone(),
            });
        }

        debug!(category = %self.category, features = layer.len(), "built barrier layer");
        Ok(layer)
    }
}

impl BoundarySet for PairedNodeBoundarySet {
    type Index = IndexPair;

    fn category(&self) -> BoundaryCategory {
        self.category
    }

    fn records(&self) -> &ClassifiedBoundaries {
        &self.records
    }

    fn resolved_indices(&self) -> BoundaryResult<&[Vec<IndexPair>]> {
        get_or_try_init(&self.indexes, || self.compute_indexes()).map(Vec::as_slice)
    }

    fn layer(&self) -> BoundaryResult<&BoundaryLayer> {
        get_or_try_init(&self.layer, || self.build_layer())
    }
}

impl PartialEq for PairedNodeBoundarySet {
    fn eq(&self, other: &Self) -> bool {
        self.category == other.category && self.records == other.records
    }
}
