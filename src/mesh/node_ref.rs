//! Node references and their resolution to positional indices.
//!
//! Upstream parsers hand node ids over in a few loose encodings. They are
//! captured by the closed [`NodeRef`] set and normalized in exactly one
//! place, [`NodeRef::normalize`], before being looked up in a
//! [`NodeTable`].
//!
//! # Example
//!
//! ```
//! use adcirc_mesh::mesh::{NodeRef, NodeTable};
//! use adcirc_mesh::types::NodeIndex;
//!
//! let nodes = NodeTable::from_nodes(vec![(101, (0.0, 0.0)), (102, (1.0, 0.0))]).unwrap();
//! let resolver = nodes.resolver();
//!
//! assert_eq!(resolver.resolve(&NodeRef::from(102)).unwrap(), NodeIndex::new(1));
//! assert_eq!(resolver.resolve(&NodeRef::from("102")).unwrap(), NodeIndex::new(1));
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::boundary::{BarrierIdPolicy, BoundaryError, BoundaryResult};
use crate::types::NodeIndex;

use super::node_table::NodeTable;

/// A node reference as it appears in a raw boundary entry.
///
/// Serialized untagged: a JSON integer, a JSON string, or a JSON array.
/// Barrier entries use two-element sequences for (front, back) pairs.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NodeRef {
    /// Native integer id
    Integer(i64),
    /// Integer id encoded as a string
    Text(String),
    /// Sequence wrapping ids (a single id, or a node pair)
    Sequence(Vec<NodeRef>),
}

impl NodeRef {
    /// Build a (front, back) node pair.
    pub fn pair(front: impl Into<NodeRef>, back: impl Into<NodeRef>) -> Self {
        NodeRef::Sequence(vec![front.into(), back.into()])
    }

    /// Build a one-element sequence wrapping `id`.
    pub fn wrapped(id: impl Into<NodeRef>) -> Self {
        NodeRef::Sequence(vec![id.into()])
    }

    /// Check if this reference is string-typed.
    pub fn is_text(&self) -> bool {
        matches!(self, NodeRef::Text(_))
    }

    /// Split a two-element sequence into its (front, back) sides.
    pub fn as_pair(&self) -> Option<(&NodeRef, &NodeRef)> {
        match self {
            NodeRef::Sequence(items) if items.len() == 2 => Some((&items[0], &items[1])),
            _ => None,
        }
    }

    /// Normalize to an external integer id.
    ///
    /// A sequence contributes its first element; a string is parsed as an
    /// integer; an integer is used as is.
    pub fn normalize(&self) -> BoundaryResult<i64> {
        match self {
            NodeRef::Sequence(items) => match items.first() {
                Some(NodeRef::Sequence(_)) => {
                    Err(BoundaryError::invalid_ref("nested sequence"))
                }
                Some(first) => first.normalize(),
                None => Err(BoundaryError::invalid_ref("empty sequence")),
            },
            NodeRef::Text(s) => parse_id(s),
            NodeRef::Integer(id) => Ok(*id),
        }
    }
}

fn parse_id(s: &str) -> BoundaryResult<i64> {
    s.trim()
        .parse::<i64>()
        .map_err(|_| BoundaryError::invalid_ref(format!("'{s}' is not an integer node id")))
}

impl From<i64> for NodeRef {
    fn from(id: i64) -> Self {
        NodeRef::Integer(id)
    }
}

impl From<i32> for NodeRef {
    fn from(id: i32) -> Self {
        NodeRef::Integer(i64::from(id))
    }
}

impl From<&str> for NodeRef {
    fn from(id: &str) -> Self {
        NodeRef::Text(id.to_string())
    }
}

impl From<String> for NodeRef {
    fn from(id: String) -> Self {
        NodeRef::Text(id)
    }
}

impl fmt::Display for NodeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeRef::Integer(id) => write!(f, "{id}"),
            NodeRef::Text(s) => write!(f, "\"{s}\""),
            NodeRef::Sequence(items) => {
                write!(f, "(")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, ")")
            }
        }
    }
}

/// Translates node references into positional indices of a node table.
///
/// Pure lookup over a borrowed table.
#[derive(Clone, Copy, Debug)]
pub struct NodeIndexResolver<'a> {
    nodes: &'a NodeTable,
}

impl<'a> NodeIndexResolver<'a> {
    pub fn new(nodes: &'a NodeTable) -> Self {
        Self { nodes }
    }

    /// Resolve one reference through the node table.
    pub fn resolve(&self, node: &NodeRef) -> BoundaryResult<NodeIndex> {
        self.nodes.get_loc(node.normalize()?)
    }

    /// Resolve a list of references, preserving order.
    pub fn resolve_all(&self, nodes: &[NodeRef]) -> BoundaryResult<Vec<NodeIndex>> {
        nodes.iter().map(|node| self.resolve(node)).collect()
    }

    /// Resolve one side of a barrier node pair.
    ///
    /// Under [`BarrierIdPolicy::PassThroughNonText`] only string-typed ids
    /// are looked up; integers are taken to be positional indices already.
    pub fn resolve_barrier_side(
        &self,
        node: &NodeRef,
        policy: BarrierIdPolicy,
    ) -> BoundaryResult<NodeIndex> {
        match (policy, node) {
            (BarrierIdPolicy::ResolveAll, _) | (_, NodeRef::Text(_)) => self.resolve(node),
            (BarrierIdPolicy::PassThroughNonText, NodeRef::Integer(index)) => {
                usize::try_from(*index)
                    .map(NodeIndex::new)
                    .map_err(|_| BoundaryError::invalid_ref(format!("negative node index {index}")))
            }
            (BarrierIdPolicy::PassThroughNonText, NodeRef::Sequence(_)) => Err(
                BoundaryError::invalid_ref(format!("{node} cannot be used as a node index")),
            ),
        }
    }
}
