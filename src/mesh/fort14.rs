//! ADCIRC-style mesh with boundary records.
//!
//! Pairs a node table with its boundary registry. Reading and writing the
//! fort.14 file itself is left to the caller; this type takes the parsed
//! node table and raw boundary dictionary.
//!
//! # Example
//!
//! ```
//! use adcirc_mesh::boundary::{BoundaryEntry, BoundarySet, RawBoundaries};
//! use adcirc_mesh::mesh::{Fort14, NodeTable};
//!
//! let nodes = NodeTable::from_nodes(vec![(1, (0.0, 0.0)), (2, (1.0, 0.0))]).unwrap();
//! let raw = RawBoundaries::new().with_entry(None, BoundaryEntry::from_ids([1, 2]));
//!
//! let mesh = Fort14::new(nodes, Some(raw));
//! assert_eq!(mesh.ocean_boundaries().len(), 1);
//! ```

use std::sync::Arc;

use crate::boundary::{
    BoundaryConfig, MeshBoundaryRegistry, PairedNodeBoundarySet, RawBoundaries,
    SingleNodeBoundarySet,
};

use super::node_table::NodeTable;

/// Unstructured mesh nodes plus boundary records.
#[derive(Clone, Debug)]
pub struct Fort14 {
    nodes: Arc<NodeTable>,
    boundaries: MeshBoundaryRegistry,
}

impl Fort14 {
    /// Create a mesh; `None` boundaries means the mesh has none.
    pub fn new(nodes: NodeTable, boundaries: Option<RawBoundaries>) -> Self {
        Self::with_config(nodes, boundaries, BoundaryConfig::default())
    }

    /// Create a mesh whose boundary views use `config`.
    pub fn with_config(
        nodes: NodeTable,
        boundaries: Option<RawBoundaries>,
        config: BoundaryConfig,
    ) -> Self {
        let nodes = Arc::new(nodes);
        let boundaries =
            MeshBoundaryRegistry::with_config(Arc::clone(&nodes), boundaries.unwrap_or_default(), config);
        Self { nodes, boundaries }
    }

    /// Rebuild the boundary registry with a coordinate reference system.
    pub fn with_crs(self, crs: impl Into<String>) -> Self {
        let config = self.boundaries.config().clone().with_crs(crs);
        let raw = self.boundaries.into_raw();
        let boundaries = MeshBoundaryRegistry::with_config(Arc::clone(&self.nodes), raw, config);
        Self {
            nodes: self.nodes,
            boundaries,
        }
    }

    /// Node table the boundaries are resolved against.
    pub fn nodes(&self) -> &NodeTable {
        &self.nodes
    }

    /// Boundary registry holding all seven category views.
    pub fn boundaries(&self) -> &MeshBoundaryRegistry {
        &self.boundaries
    }

    /// Coordinate reference system, if set.
    pub fn crs(&self) -> Option<&str> {
        self.boundaries.config().crs.as_deref()
    }

    /// Open-ocean boundaries (no type code), ids from 0.
    pub fn ocean_boundaries(&self) -> &SingleNodeBoundarySet {
        self.boundaries.ocean()
    }

    /// Land boundaries (type codes ending in `0`).
    pub fn land_boundaries(&self) -> &SingleNodeBoundarySet {
        self.boundaries.land()
    }

    /// Interior (island) boundaries (type codes ending in `1`).
    pub fn interior_boundaries(&self) -> &SingleNodeBoundarySet {
        self.boundaries.interior()
    }

    /// Inflow flux boundaries (type codes ending in `2`).
    pub fn inflow_boundaries(&self) -> &SingleNodeBoundarySet {
        self.boundaries.inflow()
    }

    /// Outflow barrier boundaries (type codes ending in `3`).
    pub fn outflow_boundaries(&self) -> &PairedNodeBoundarySet {
        self.boundaries.outflow()
    }

    /// Weir barrier boundaries (type codes ending in `4`).
    pub fn weir_boundaries(&self) -> &PairedNodeBoundarySet {
        self.boundaries.weir()
    }

    /// Culvert barrier boundaries (type codes ending in `5`).
    pub fn culvert_boundaries(&self) -> &PairedNodeBoundarySet {
        self.boundaries.culvert()
    }

    /// Raw boundary dictionary, for writing the mesh back out.
    pub fn to_raw_boundaries(&self) -> &RawBoundaries {
        self.boundaries.to_raw()
    }
}

impl PartialEq for Fort14 {
    fn eq(&self, other: &Self) -> bool {
        self.nodes == other.nodes && self.boundaries == other.boundaries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boundary::{BoundaryEntry, BoundarySet};
    use crate::mesh::BoundaryCategory;
    use crate::types::NodeIndex;

    fn nodes() -> NodeTable {
        NodeTable::from_nodes(vec![(1, (0.0, 0.0)), (2, (1.0, 0.0)), (3, (1.0, 1.0))]).unwrap()
    }

    #[test]
    fn test_no_boundaries() {
        let mesh = Fort14::new(nodes(), None);
        assert!(mesh.to_raw_boundaries().is_empty());
        assert!(mesh.land_boundaries().layer().unwrap().is_empty());
        assert!(mesh.culvert_boundaries().layer().unwrap().is_empty());
    }

    #[test]
    fn test_accessors_share_node_table() {
        let raw = RawBoundaries::new().with_entry(Some("20"), BoundaryEntry::from_ids([3, 1]));
        let mesh = Fort14::new(nodes(), Some(raw));
        assert_eq!(mesh.nodes(), &nodes());
        assert_eq!(mesh.nodes().get_loc(3).unwrap(), NodeIndex::new(2));
        assert_eq!(
            mesh.boundaries().layer(BoundaryCategory::Land).unwrap().len(),
            mesh.land_boundaries().len()
        );
        assert_eq!(
            mesh.land_boundaries().resolved_indices().unwrap(),
            &[vec![NodeIndex::new(2), NodeIndex::new(0)]]
        );
    }

    #[test]
    fn test_with_crs_keeps_boundaries() {
        let raw = RawBoundaries::new().with_entry(Some("0"), BoundaryEntry::from_ids([1, 2, 3]));
        let mesh = Fort14::new(nodes(), Some(raw.clone())).with_crs("EPSG:32633");
        assert_eq!(mesh.crs(), Some("EPSG:32633"));
        assert_eq!(mesh.to_raw_boundaries(), &raw);
        assert_eq!(
            mesh.land_boundaries().layer().unwrap().crs(),
            Some("EPSG:32633")
        );
    }

    #[test]
    fn test_equality_covers_nodes_and_boundaries() {
        let raw = RawBoundaries::new().with_entry(None, BoundaryEntry::from_ids([1, 2]));
        let a = Fort14::new(nodes(), Some(raw.clone()));
        let b = Fort14::new(nodes(), Some(raw.clone()));
        assert_eq!(a, b);

        let mut other_nodes = nodes();
        other_nodes.insert(4, (0.0, 1.0)).unwrap();
        assert_ne!(a, Fort14::new(other_nodes, Some(raw)));
        assert_ne!(a, Fort14::new(nodes(), None));
    }
}
