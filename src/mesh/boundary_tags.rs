//! Boundary categories for mesh boundary records.
//!
//! Raw boundary buckets carry a type code (`ibtype`) such as `"0"`, `"20"`
//! or `"24"`. Its trailing character selects one of seven categories:
//!
//! | Suffix | Category | Node references |
//! |--------|----------|-----------------|
//! | (no type code) | `Ocean` | single |
//! | `0` | `Land` | single |
//! | `1` | `Interior` | single |
//! | `2` | `Inflow` | single |
//! | `3` | `Outflow` | pairs |
//! | `4` | `Weir` | pairs |
//! | `5` | `Culvert` | pairs |

use std::fmt;

/// Semantic category of a boundary record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BoundaryCategory {
    /// Open-ocean boundary (raw bucket without a type code)
    Ocean,

    /// Land (mainland) boundary
    Land,

    /// Interior (island) boundary
    Interior,

    /// Specified-flux inflow boundary
    Inflow,

    /// Outflow barrier (front/back node pairs)
    Outflow,

    /// Weir barrier (front/back node pairs)
    Weir,

    /// Culvert barrier (front/back node pairs)
    Culvert,
}

impl BoundaryCategory {
    /// All categories, ocean first.
    pub const ALL: [BoundaryCategory; 7] = [
        BoundaryCategory::Ocean,
        BoundaryCategory::Land,
        BoundaryCategory::Interior,
        BoundaryCategory::Inflow,
        BoundaryCategory::Outflow,
        BoundaryCategory::Weir,
        BoundaryCategory::Culvert,
    ];

    /// Type-code suffix that routes a raw bucket into this category.
    ///
    /// Ocean boundaries have no type code and so no suffix.
    pub fn suffix(&self) -> Option<&'static str> {
        match self {
            BoundaryCategory::Ocean => None,
            BoundaryCategory::Land => Some("0"),
            BoundaryCategory::Interior => Some("1"),
            BoundaryCategory::Inflow => Some("2"),
            BoundaryCategory::Outflow => Some("3"),
            BoundaryCategory::Weir => Some("4"),
            BoundaryCategory::Culvert => Some("5"),
        }
    }

    /// Parse a raw type code into a category.
    ///
    /// `None` (the absent key) is the ocean bucket. Type codes ending in
    /// anything other than `0`..=`5` belong to no category.
    pub fn from_type_code(type_code: Option<&str>) -> Option<Self> {
        match type_code {
            None => Some(BoundaryCategory::Ocean),
            Some(code) => BoundaryCategory::ALL
                .into_iter()
                .find(|c| c.suffix().is_some_and(|s| code.ends_with(s))),
        }
    }

    /// Check if records in this category reference front/back node pairs.
    pub fn is_barrier(&self) -> bool {
        matches!(
            self,
            BoundaryCategory::Outflow | BoundaryCategory::Weir | BoundaryCategory::Culvert
        )
    }

    /// Lower-case category name.
    pub fn name(&self) -> &'static str {
        match self {
            BoundaryCategory::Ocean => "ocean",
            BoundaryCategory::Land => "land",
            BoundaryCategory::Interior => "interior",
            BoundaryCategory::Inflow => "inflow",
            BoundaryCategory::Outflow => "outflow",
            BoundaryCategory::Weir => "weir",
            BoundaryCategory::Culvert => "culvert",
        }
    }
}

impl fmt::Display for BoundaryCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
