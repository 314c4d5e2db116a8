//! Ordered node table.
//!
//! Maps the external node id written in the mesh file to a coordinate.
//! The positional index of a node is its rank in insertion order, and is
//! what all boundary index lists and geometries are expressed in.

use std::collections::HashMap;

use crate::boundary::{BoundaryError, BoundaryResult};
use crate::types::NodeIndex;

use super::node_ref::NodeIndexResolver;

/// Ordered mapping from external node id to coordinate.
#[derive(Clone, Debug, Default)]
pub struct NodeTable {
    /// External ids in insertion order
    ids: Vec<i64>,
    /// Horizontal coordinates: coords[i] = (x, y)
    coords: Vec<(f64, f64)>,
    /// Optional third coordinate (depth or elevation) per node
    values: Vec<Option<f64>>,
    /// External id -> positional index
    lookup: HashMap<i64, NodeIndex>,
}

impl NodeTable {
    /// Create an empty node table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty node table with room for `n` nodes.
    pub fn with_capacity(n: usize) -> Self {
        Self {
            ids: Vec::with_capacity(n),
            coords: Vec::with_capacity(n),
            values: Vec::with_capacity(n),
            lookup: HashMap::with_capacity(n),
        }
    }

    /// Build a table from `(id, (x, y))` pairs, in order.
    pub fn from_nodes<I>(nodes: I) -> BoundaryResult<Self>
    where
        I: IntoIterator<Item = (i64, (f64, f64))>,
    {
        let nodes = nodes.into_iter();
        let mut table = Self::with_capacity(nodes.size_hint().0);
        for (id, xy) in nodes {
            table.insert(id, xy)?;
        }
        Ok(table)
    }

    /// Append a node with horizontal coordinates only.
    ///
    /// Returns the positional index assigned to the node.
    pub fn insert(&mut self, id: i64, xy: (f64, f64)) -> BoundaryResult<NodeIndex> {
        self.push(id, xy, None)
    }

    /// Append a node with a third coordinate (x, y, z).
    pub fn insert_with_value(
        &mut self,
        id: i64,
        xy: (f64, f64),
        z: f64,
    ) -> BoundaryResult<NodeIndex> {
        self.push(id, xy, Some(z))
    }

    fn push(&mut self, id: i64, xy: (f64, f64), z: Option<f64>) -> BoundaryResult<NodeIndex> {
        if self.lookup.contains_key(&id) {
            return Err(BoundaryError::DuplicateNodeId { id });
        }
        let index = NodeIndex::new(self.ids.len());
        self.ids.push(id);
        self.coords.push(xy);
        self.values.push(z);
        self.lookup.insert(id, index);
        Ok(index)
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Check if the table holds no nodes.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// External ids in positional order.
    pub fn ids(&self) -> &[i64] {
        &self.ids
    }

    /// Coordinate of the node at a positional index.
    pub fn coord(&self, index: NodeIndex) -> Option<(f64, f64)> {
        self.coords.get(index.get()).copied()
    }

    /// Third coordinate of the node at a positional index, if it has one.
    pub fn value(&self, index: NodeIndex) -> Option<f64> {
        self.values.get(index.get()).copied().flatten()
    }

    /// Positional index of an external id, if present.
    pub fn index_of(&self, id: i64) -> Option<NodeIndex> {
        self.lookup.get(&id).copied()
    }

    /// Positional index of an external id, failing with a lookup error.
    pub fn get_loc(&self, id: i64) -> BoundaryResult<NodeIndex> {
        self.index_of(id).ok_or(BoundaryError::NodeNotFound { id })
    }

    /// Coordinate at a positional index, failing if out of range.
    pub(crate) fn coord_checked(&self, index: NodeIndex) -> BoundaryResult<(f64, f64)> {
        self.coord(index).ok_or(BoundaryError::IndexOutOfRange {
            index: index.get(),
            len: self.len(),
        })
    }

    /// Resolver translating node references against this table.
    pub fn resolver(&self) -> NodeIndexResolver<'_> {
        NodeIndexResolver::new(self)
    }
}

impl PartialEq for NodeTable {
    fn eq(&self, other: &Self) -> bool {
        self.ids == other.ids && self.coords == other.coords && self.values == other.values
    }
}
