//! Geometry layers built from resolved boundaries.
//!
//! One [`BoundaryFeature`] per boundary record: an open polyline through
//! the node coordinates for single-node boundaries, or a two-line
//! `MultiLineString` (front face, back face) for barriers.

use std::collections::BTreeMap;

use geo::{EuclideanLength, Geometry, LineString, MultiLineString};

use crate::mesh::NodeTable;
use crate::types::{BoundaryId, NodeIndex};

use super::error::BoundaryResult;
use super::raw::AttributeValue;

/// Resolved node indices carried by a feature.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FeatureIndexes {
    /// Positional indices in boundary order
    Single(Vec<NodeIndex>),
    /// (front, back) positional index pairs
    Paired(Vec<(NodeIndex, NodeIndex)>),
}

/// Geometry of one boundary record plus its metadata.
#[derive(Clone, Debug, PartialEq)]
pub struct BoundaryFeature {
    /// Synthetic id of the record
    pub id: BoundaryId,
    /// `"<type-code>:<id>"`
    pub key: String,
    /// Originating type code (`None` for ocean)
    pub ibtype: Option<String>,
    /// `LineString` or `MultiLineString`
    pub geometry: Geometry<f64>,
    /// Indices the geometry was built from
    pub indexes: FeatureIndexes,
    /// Auxiliary attributes of the raw entry
    pub attributes: BTreeMap<String, AttributeValue>,
}

impl BoundaryFeature {
    /// The polyline of a single-node boundary.
    pub fn line_string(&self) -> Option<&LineString<f64>> {
        match &self.geometry {
            Geometry::LineString(ls) => Some(ls),
            _ => None,
        }
    }

    /// The (front, back) lines of a barrier boundary.
    pub fn multi_line_string(&self) -> Option<&MultiLineString<f64>> {
        match &self.geometry {
            Geometry::MultiLineString(mls) => Some(mls),
            _ => None,
        }
    }

    /// Planar length of the geometry (both faces for barriers).
    pub fn length(&self) -> f64 {
        match &self.geometry {
            Geometry::LineString(ls) => ls.euclidean_length(),
            Geometry::MultiLineString(mls) => mls.euclidean_length(),
            _ => 0.0,
        }
    }
}

/// Features of one boundary category, in record order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BoundaryLayer {
    crs: Option<String>,
    features: Vec<BoundaryFeature>,
}

impl BoundaryLayer {
    /// Create an empty layer.
    pub fn new(crs: Option<String>) -> Self {
        Self {
            crs,
            features: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, feature: BoundaryFeature) {
        self.features.push(feature);
    }

    /// Coordinate reference system label of the mesh, if known.
    pub fn crs(&self) -> Option<&str> {
        self.crs.as_deref()
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Features in record order.
    pub fn iter(&self) -> std::slice::Iter<'_, BoundaryFeature> {
        self.features.iter()
    }

    /// Feature by key, e.g. `"24:1"`.
    pub fn get(&self, key: &str) -> Option<&BoundaryFeature> {
        self.features.iter().find(|f| f.key == key)
    }

    /// Sum of feature lengths.
    pub fn total_length(&self) -> f64 {
        self.features.iter().map(BoundaryFeature::length).sum()
    }
}

/// Open polyline through the coordinates at `indexes`, in order.
pub(crate) fn polyline(nodes: &NodeTable, indexes: &[NodeIndex]) -> BoundaryResult<LineString<f64>> {
    let coords = indexes
        .iter()
        .map(|&i| nodes.coord_checked(i))
        .collect::<BoundaryResult<Vec<_>>>()?;
    Ok(LineString::from(coords))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boundary::BoundaryError;
    use approx::assert_relative_eq;

    fn nodes() -> NodeTable {
        NodeTable::from_nodes(vec![(1, (0.0, 0.0)), (2, (3.0, 0.0)), (3, (3.0, 4.0))]).unwrap()
    }

    #[test]
    fn test_polyline_follows_index_order() {
        let nodes = nodes();
        let line = polyline(&nodes, &[NodeIndex::new(2), NodeIndex::new(0)]).unwrap();
        assert_eq!(line.0.len(), 2);
        assert_eq!(line.0[0].x, 3.0);
        assert_eq!(line.0[0].y, 4.0);
        assert_eq!(line.0[1].x, 0.0);
    }

    #[test]
    fn test_polyline_out_of_range() {
        let nodes = nodes();
        assert_eq!(
            polyline(&nodes, &[NodeIndex::new(0), NodeIndex::new(7)]),
            Err(BoundaryError::IndexOutOfRange { index: 7, len: 3 })
        );
    }

    #[test]
    fn test_layer_lengths() {
        let nodes = nodes();
        let idx = vec![NodeIndex::new(0), NodeIndex::new(1), NodeIndex::new(2)];
        let line = polyline(&nodes, &idx).unwrap();

        let mut layer = BoundaryLayer::new(Some("EPSG:32632".to_string()));
        layer.push(BoundaryFeature {
            id: BoundaryId::new(1),
            key: "0:1".to_string(),
            ibtype: Some("0".to_string()),
            geometry: Geometry::LineString(line.clone()),
            indexes: FeatureIndexes::Single(idx),
            attributes: BTreeMap::new(),
        });
        layer.push(BoundaryFeature {
            id: BoundaryId::new(2),
            key: "4:2".to_string(),
            ibtype: Some("4".to_string()),
            geometry: Geometry::MultiLineString(MultiLineString::new(vec![line.clone(), line])),
            indexes: FeatureIndexes::Paired(vec![]),
            attributes: BTreeMap::new(),
        });

        assert_eq!(layer.len(), 2);
        let keys: Vec<_> = layer.iter().map(|f| f.key.as_str()).collect();
        assert_eq!(keys, vec!["0:1", "4:2"]);
        assert_eq!(layer.crs(), Some("EPSG:32632"));
        assert_relative_eq!(layer.get("0:1").unwrap().length(), 7.0);
        assert_relative_eq!(layer.get("4:2").unwrap().length(), 14.0);
        assert_relative_eq!(layer.total_length(), 21.0);
        assert!(layer.get("4:2").unwrap().line_string().is_none());
        assert!(layer.get("9:9").is_none());
    }

    #[test]
    fn test_empty_layer() {
        let layer = BoundaryLayer::default();
        assert!(layer.is_empty());
        assert_eq!(layer.total_length(), 0.0);
        assert!(layer.crs().is_none());
    }
}
