//! Classification of raw boundary buckets into categories.
//!
//! Type codes are routed by suffix (see [`BoundaryCategory`]); matched
//! entries are flattened in bucket order and renumbered with synthetic ids
//! starting at 1. Ocean entries come straight from the absent-key bucket
//! and are numbered from 0.

use serde::ser::{Serialize, SerializeMap, Serializer};
use tracing::debug;

use crate::mesh::{BoundaryCategory, NodeRef};
use crate::types::BoundaryId;

use super::raw::{AttributeValue, BoundaryEntry, RawBoundaries};

/// Record fields that shadow entry attributes of the same name.
const RECORD_FIELDS: [&str; 3] = ["id", "ibtype", "node_id"];

/// A raw entry tagged with its synthetic id and originating type code.
///
/// Serializes as one flat map. `id`, `ibtype` and `node_id` always come
/// from the record; entry attributes with those names are skipped.
#[derive(Clone, Debug, PartialEq)]
pub struct BoundaryRecord {
    /// Synthetic id, unique within the category
    pub id: BoundaryId,
    /// Type code of the raw bucket the entry came from
    pub ibtype: Option<String>,
    pub entry: BoundaryEntry,
}

impl Serialize for BoundaryRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("id", &(self.id.get() as u64))?;
        map.serialize_entry("ibtype", &self.ibtype)?;
        map.serialize_entry("node_id", &self.entry.node_id)?;
        for (key, value) in &self.entry.attributes {
            if !RECORD_FIELDS.contains(&key.as_str()) {
                map.serialize_entry(key, value)?;
            }
        }
        map.end()
    }
}

impl BoundaryRecord {
    /// Feature key `"<type-code>:<id>"`.
    ///
    /// Ocean records have no type code and use `ocean` in its place
    /// (`"ocean:0"`) rather than a placeholder such as `"None:0"`.
    pub fn key(&self) -> String {
        format!(
            "{}:{}",
            self.ibtype.as_deref().unwrap_or("ocean"),
            self.id.get()
        )
    }

    /// Raw node references of the entry.
    pub fn node_id(&self) -> &[NodeRef] {
        &self.entry.node_id
    }

    /// Look up an auxiliary attribute.
    pub fn attribute(&self, key: &str) -> Option<&AttributeValue> {
        self.entry.attribute(key)
    }
}

/// Ordered records of one category; serializes as a JSON array.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ClassifiedBoundaries {
    records: Vec<BoundaryRecord>,
}

impl ClassifiedBoundaries {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, id: BoundaryId, ibtype: Option<&str>, entry: &BoundaryEntry) {
        self.records.push(BoundaryRecord {
            id,
            ibtype: ibtype.map(str::to_string),
            entry: entry.clone(),
        });
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in aggregation order.
    pub fn iter(&self) -> std::slice::Iter<'_, BoundaryRecord> {
        self.records.iter()
    }

    pub fn records(&self) -> &[BoundaryRecord] {
        &self.records
    }

    /// Record with a given synthetic id.
    pub fn get(&self, id: BoundaryId) -> Option<&BoundaryRecord> {
        // ids are contiguous from the first record's id
        let first = self.records.first()?.id.get();
        let record = self.records.get(id.get().checked_sub(first)?)?;
        debug_assert_eq!(record.id, id);
        Some(record)
    }

    /// Synthetic ids in order.
    pub fn ids(&self) -> Vec<BoundaryId> {
        self.records.iter().map(|r| r.id).collect()
    }

    /// Raw node references of every record, in order.
    pub fn node_ids(&self) -> Vec<&[NodeRef]> {
        self.records.iter().map(|r| r.node_id()).collect()
    }
}

impl Serialize for ClassifiedBoundaries {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.records.serialize(serializer)
    }
}

/// Collect entries of every typed bucket whose code ends with `suffix`.
///
/// The ocean bucket is skipped. Each flattened entry gets the synthetic id
/// `len + 1` at insertion time, so ids run 1..=n without gaps.
pub fn classify_suffix(raw: &RawBoundaries, suffix: &str) -> ClassifiedBoundaries {
    let mut out = ClassifiedBoundaries::new();
    for bucket in raw.iter() {
        let Some(code) = bucket.ibtype.as_deref() else {
            continue;
        };
        if !code.ends_with(suffix) {
            continue;
        }
        for entry in &bucket.entries {
            let id = BoundaryId::new(out.len() + 1);
            out.push(id, Some(code), entry);
        }
    }
    out
}

/// Ocean entries numbered by enumeration from 0.
pub fn enumerate_ocean(raw: &RawBoundaries) -> ClassifiedBoundaries {
    let mut out = ClassifiedBoundaries::new();
    for (i, entry) in raw.ocean().iter().enumerate() {
        out.push(BoundaryId::new(i), None, entry);
    }
    out
}

/// Records belonging to `category`.
pub fn classify(raw: &RawBoundaries, category: BoundaryCategory) -> ClassifiedBoundaries {
    let records = match category.suffix() {
        None => enumerate_ocean(raw),
        Some(suffix) => classify_suffix(raw, suffix),
    };
    debug!(%category, records = records.len(), "classified boundaries");
    records
}

/// Type codes that match no category.
pub fn unclassified_type_codes(raw: &RawBoundaries) -> Vec<&str> {
    raw.type_codes()
        .flatten()
        .filter(|code| BoundaryCategory::from_type_code(Some(code)).is_none())
        .collect()
}
