//! Configuration for boundary resolution.

/// How barrier node pairs are turned into positional indices.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BarrierIdPolicy {
    /// String-typed ids are looked up in the node table; any other id is
    /// taken to be a positional index already and passed through unchanged.
    /// Each side of a pair is treated independently.
    #[default]
    PassThroughNonText,

    /// Every side is normalized and looked up in the node table, like
    /// single-node boundaries. For upstream data with uniform id typing.
    ResolveAll,
}

/// Configuration shared by all boundary sets of a registry.
///
/// # Example
///
/// ```
/// use adcirc_mesh::boundary::{BarrierIdPolicy, BoundaryConfig};
///
/// let config = BoundaryConfig::new()
///     .with_barrier_ids(BarrierIdPolicy::ResolveAll)
///     .with_crs("EPSG:4326");
/// assert_eq!(config.crs.as_deref(), Some("EPSG:4326"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BoundaryConfig {
    /// Resolution rule for barrier node pairs
    pub barrier_ids: BarrierIdPolicy,
    /// Coordinate reference system attached to produced layers
    pub crs: Option<String>,
}

impl BoundaryConfig {
    /// Default configuration: pass-through barrier ids, no CRS.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the barrier id resolution rule.
    pub fn with_barrier_ids(mut self, policy: BarrierIdPolicy) -> Self {
        self.barrier_ids = policy;
        self
    }

    /// Set the coordinate reference system label.
    pub fn with_crs(mut self, crs: impl Into<String>) -> Self {
        self.crs = Some(crs.into());
        self
    }
}
