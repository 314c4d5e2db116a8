//! Per-mesh registry of the seven boundary category views.
//!
//! The registry stores only the raw boundary dictionary. Each category set
//! is classified on first access and cached for the registry's lifetime;
//! a new registry has to be built to see different raw data.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use adcirc_mesh::boundary::{BoundaryEntry, BoundarySet, MeshBoundaryRegistry, RawBoundaries};
//! use adcirc_mesh::mesh::NodeTable;
//!
//! let nodes = Arc::new(
//!     NodeTable::from_nodes(vec![(1, (0.0, 0.0)), (2, (1.0, 0.0)), (3, (1.0, 1.0))]).unwrap(),
//! );
//! let mut raw = RawBoundaries::new();
//! raw.push_ocean(BoundaryEntry::from_ids([1, 2]));
//! raw.push_typed("0", BoundaryEntry::from_ids([2, 3]));
//!
//! let registry = MeshBoundaryRegistry::new(nodes, raw);
//! assert_eq!(registry.ocean().len(), 1);
//! assert_eq!(registry.land().layer().unwrap().len(), 1);
//! assert!(registry.weir().is_empty());
//! ```

use std::cell::OnceCell;
use std::fmt;
use std::sync::Arc;

use tracing::warn;

use crate::mesh::{BoundaryCategory, NodeTable};

use super::classifier::{classify, unclassified_type_codes, ClassifiedBoundaries};
use super::config::BoundaryConfig;
use super::error::BoundaryResult;
use super::layer::BoundaryLayer;
use super::paired::PairedNodeBoundarySet;
use super::raw::RawBoundaries;
use super::single::SingleNodeBoundarySet;
use super::BoundarySet;

/// Borrowed view of one category set, single-node or barrier.
#[derive(Clone, Copy, Debug)]
pub enum BoundarySetRef<'a> {
    Single(&'a SingleNodeBoundarySet),
    Paired(&'a PairedNodeBoundarySet),
}

impl<'a> BoundarySetRef<'a> {
    pub fn category(&self) -> BoundaryCategory {
        match *self {
            BoundarySetRef::Single(set) => set.category(),
            BoundarySetRef::Paired(set) => set.category(),
        }
    }

    pub fn records(&self) -> &'a ClassifiedBoundaries {
        match *self {
            BoundarySetRef::Single(set) => set.records(),
            BoundarySetRef::Paired(set) => set.records(),
        }
    }

    pub fn len(&self) -> usize {
        self.records().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records().is_empty()
    }

    /// Geometry layer of the set.
    pub fn layer(&self) -> BoundaryResult<&'a BoundaryLayer> {
        match *self {
            BoundarySetRef::Single(set) => set.layer(),
            BoundarySetRef::Paired(set) => set.layer(),
        }
    }
}

/// Lazily classified boundary categories of one mesh.
///
/// Two registries are equal when their raw dictionaries are equal,
/// whatever their cache state.
pub struct MeshBoundaryRegistry {
    nodes: Arc<NodeTable>,
    raw: RawBoundaries,
    config: BoundaryConfig,
    // set once unclassified codes have been reported
    checked: OnceCell<()>,
    ocean: OnceCell<SingleNodeBoundarySet>,
    land: OnceCell<SingleNodeBoundarySet>,
    interior: OnceCell<SingleNodeBoundarySet>,
    inflow: OnceCell<SingleNodeBoundarySet>,
    outflow: OnceCell<PairedNodeBoundarySet>,
    weir: OnceCell<PairedNodeBoundarySet>,
    culvert: OnceCell<PairedNodeBoundarySet>,
}

impl MeshBoundaryRegistry {
    /// Create a registry with the default configuration.
    pub fn new(nodes: Arc<NodeTable>, raw: RawBoundaries) -> Self {
        Self::with_config(nodes, raw, BoundaryConfig::default())
    }

    /// Create a registry with an explicit configuration.
    pub fn with_config(nodes: Arc<NodeTable>, raw: RawBoundaries, config: BoundaryConfig) -> Self {
        Self {
            nodes,
            raw,
            config,
            checked: OnceCell::new(),
            ocean: OnceCell::new(),
            land: OnceCell::new(),
            interior: OnceCell::new(),
            inflow: OnceCell::new(),
            outflow: OnceCell::new(),
            weir: OnceCell::new(),
            culvert: OnceCell::new(),
        }
    }

    /// Classify one category, reporting unmatched type codes on the first call.
    fn classify_category(&self, category: BoundaryCategory) -> ClassifiedBoundaries {
        self.checked.get_or_init(|| {
            for code in unclassified_type_codes(&self.raw) {
                warn!(ibtype = code, "boundary type code matches no category");
            }
        });
        classify(&self.raw, category)
    }

    fn single<'a>(
        &'a self,
        cell: &'a OnceCell<SingleNodeBoundarySet>,
        category: BoundaryCategory,
    ) -> &'a SingleNodeBoundarySet {
        cell.get_or_init(|| {
            SingleNodeBoundarySet::new(
                category,
                Arc::clone(&self.nodes),
                self.classify_category(category),
                self.config.crs.clone(),
            )
        })
    }

    fn paired<'a>(
        &'a self,
        cell: &'a OnceCell<PairedNodeBoundarySet>,
        category: BoundaryCategory,
    ) -> &'a PairedNodeBoundarySet {
        cell.get_or_init(|| {
            PairedNodeBoundarySet::new(
                category,
                Arc::clone(&self.nodes),
                self.classify_category(category),
                self.config.barrier_ids,
                self.config.crs.clone(),
            )
        })
    }

    pub fn ocean(&self) -> &SingleNodeBoundarySet {
        self.single(&self.ocean, BoundaryCategory::Ocean)
    }

    pub fn land(&self) -> &SingleNodeBoundarySet {
        self.single(&self.land, BoundaryCategory::Land)
    }

    pub fn interior(&self) -> &SingleNodeBoundarySet {
        self.single(&self.interior, BoundaryCategory::Interior)
    }

    pub fn inflow(&self) -> &SingleNodeBoundarySet {
        self.single(&self.inflow, BoundaryCategory::Inflow)
    }

    pub fn outflow(&self) -> &PairedNodeBoundarySet {
        self.paired(&self.outflow, BoundaryCategory::Outflow)
    }

    pub fn weir(&self) -> &PairedNodeBoundarySet {
        self.paired(&self.weir, BoundaryCategory::Weir)
    }

    pub fn culvert(&self) -> &PairedNodeBoundarySet {
        self.paired(&self.culvert, BoundaryCategory::Culvert)
    }

    /// Set for `category`.
    pub fn category(&self, category: BoundaryCategory) -> BoundarySetRef<'_> {
        match category {
            BoundaryCategory::Ocean => BoundarySetRef::Single(self.ocean()),
            BoundaryCategory::Land => BoundarySetRef::Single(self.land()),
            BoundaryCategory::Interior => BoundarySetRef::Single(self.interior()),
            BoundaryCategory::Inflow => BoundarySetRef::Single(self.inflow()),
            BoundaryCategory::Outflow => BoundarySetRef::Paired(self.outflow()),
            BoundaryCategory::Weir => BoundarySetRef::Paired(self.weir()),
            BoundaryCategory::Culvert => BoundarySetRef::Paired(self.culvert()),
        }
    }

    /// Set for a category name such as `"weir"`.
    pub fn by_name(&self, name: &str) -> Option<BoundarySetRef<'_>> {
        BoundaryCategory::ALL
            .into_iter()
            .find(|c| c.name() == name)
            .map(|c| self.category(c))
    }

    /// Geometry layer of one category.
    pub fn layer(&self, category: BoundaryCategory) -> BoundaryResult<&BoundaryLayer> {
        self.category(category).layer()
    }

    /// Geometry layers of all seven categories, ocean first.
    ///
    /// Stops at the first category that fails; layers built before it
    /// stay cached.
    pub fn layers(&self) -> BoundaryResult<Vec<(BoundaryCategory, &BoundaryLayer)>> {
        BoundaryCategory::ALL
            .into_iter()
            .map(|c| -> BoundaryResult<_> { Ok((c, self.layer(c)?)) })
            .collect()
    }

    /// Raw type codes that match no category.
    pub fn unclassified_type_codes(&self) -> Vec<&str> {
        unclassified_type_codes(&self.raw)
    }

    pub fn config(&self) -> &BoundaryConfig {
        &self.config
    }

    /// The raw dictionary this registry was built from.
    pub fn to_raw(&self) -> &RawBoundaries {
        &self.raw
    }

    pub fn into_raw(self) -> RawBoundaries {
        self.raw
    }
}

impl Clone for MeshBoundaryRegistry {
    /// Clones the inputs; caches start out empty.
    fn clone(&self) -> Self {
        Self::with_config(Arc::clone(&self.nodes), self.raw.clone(), self.config.clone())
    }
}

impl PartialEq for MeshBoundaryRegistry {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl fmt::Debug for MeshBoundaryRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MeshBoundaryRegistry")
            .field("n_nodes", &self.nodes.len())
            .field("raw", &self.raw)
            .field("config", &self.config)
            .finish()
    }
}
