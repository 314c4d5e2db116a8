//! Strongly-typed index newtypes.
//!
//! These types keep positional node indices apart from the synthetic
//! identifiers handed out when boundary records are aggregated.

use std::fmt;

/// Macro to generate index newtypes with common functionality.
macro_rules! define_index {
    (
        $(#[$meta:meta])*
        $name:ident, $display_prefix:literal
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[repr(transparent)]
        pub struct $name(usize);

        impl $name {
            /// Create a new index.
            #[inline]
            pub const fn new(index: usize) -> Self {
                Self(index)
            }

            /// Get the raw index value.
            #[inline]
            pub const fn get(self) -> usize {
                self.0
            }

            /// First index (0).
            pub const ZERO: Self = Self(0);

            /// Increment index by one.
            #[inline]
            pub fn next(self) -> Self {
                Self(self.0 + 1)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}{}", $display_prefix, self.0)
            }
        }

        impl From<usize> for $name {
            #[inline]
            fn from(index: usize) -> Self {
                Self(index)
            }
        }

        impl From<$name> for usize {
            #[inline]
            fn from(idx: $name) -> usize {
                idx.0
            }
        }

        impl<T> std::ops::Index<$name> for [T] {
            type Output = T;
            #[inline]
            fn index(&self, idx: $name) -> &T {
                &self[idx.0]
            }
        }

        impl<T> std::ops::Index<$name> for Vec<T> {
            type Output = T;
            #[inline]
            fn index(&self, idx: $name) -> &T {
                &self[idx.0]
            }
        }
    };
}

define_index!(
    /// Zero-based position of a node in a [`NodeTable`](crate::mesh::NodeTable).
    ///
    /// This is what every resolved index list and geometry is expressed in,
    /// as opposed to the external id written in the mesh file.
    ///
    /// # Example
    ///
    /// ```
    /// use adcirc_mesh::types::NodeIndex;
    ///
    /// let node = NodeIndex::new(3);
    /// assert_eq!(node.get(), 3);
    /// ```
    NodeIndex,
    "N"
);

define_index!(
    /// Synthetic id of a boundary record within one category.
    ///
    /// Assigned during aggregation: 1-based and contiguous for classified
    /// categories, 0-based for ocean boundaries.
    ///
    /// # Example
    ///
    /// ```
    /// use adcirc_mesh::types::BoundaryId;
    ///
    /// let id = BoundaryId::new(1);
    /// assert_eq!(id.to_string(), "B1");
    /// ```
    BoundaryId,
    "B"
);
