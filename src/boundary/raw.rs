//! Raw boundary dictionary, as handed over by the mesh-file parser.
//!
//! Buckets are keyed by type code (`ibtype`), with `None` holding the
//! open-ocean boundaries, and keep their insertion order. This is the
//! only stored representation; every categorized view is derived from it.
//!
//! # JSON Shape
//!
//! ```text
//! [
//!   {"ibtype": null, "entries": [{"node_id": [1, 2, 3]}]},
//!   {"ibtype": "24", "entries": [{"node_id": [["10", "20"]], "barrier_height": 1.5}]}
//! ]
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::mesh::NodeRef;

/// Auxiliary scalar attribute of a boundary entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    Bool(bool),
    Integer(i64),
    Float(f64),
    Text(String),
}

impl AttributeValue {
    /// Numeric value, if this attribute is a number.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            AttributeValue::Integer(v) => Some(*v as f64),
            AttributeValue::Float(v) => Some(*v),
            _ => None,
        }
    }

    /// String value, if this attribute is text.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            AttributeValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl From<f64> for AttributeValue {
    fn from(v: f64) -> Self {
        AttributeValue::Float(v)
    }
}

impl From<i64> for AttributeValue {
    fn from(v: i64) -> Self {
        AttributeValue::Integer(v)
    }
}

impl From<bool> for AttributeValue {
    fn from(v: bool) -> Self {
        AttributeValue::Bool(v)
    }
}

impl From<&str> for AttributeValue {
    fn from(v: &str) -> Self {
        AttributeValue::Text(v.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(v: String) -> Self {
        AttributeValue::Text(v)
    }
}

/// One boundary entry: its node references plus auxiliary attributes.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BoundaryEntry {
    /// Node references in boundary order (ids, or front/back pairs)
    pub node_id: Vec<NodeRef>,
    /// Auxiliary attributes (crest elevation, coefficients, ...)
    #[serde(flatten)]
    pub attributes: BTreeMap<String, AttributeValue>,
}

impl BoundaryEntry {
    pub fn new(node_id: Vec<NodeRef>) -> Self {
        Self {
            node_id,
            attributes: BTreeMap::new(),
        }
    }

    /// Entry addressed by single node ids.
    pub fn from_ids<I, T>(ids: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<NodeRef>,
    {
        Self::new(ids.into_iter().map(Into::into).collect())
    }

    /// Entry addressed by (front, back) node pairs.
    pub fn from_pairs<I, A, B>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (A, B)>,
        A: Into<NodeRef>,
        B: Into<NodeRef>,
    {
        Self::new(
            pairs
                .into_iter()
                .map(|(front, back)| NodeRef::pair(front, back))
                .collect(),
        )
    }

    /// Attach an attribute.
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<AttributeValue>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Look up an attribute by name.
    pub fn attribute(&self, key: &str) -> Option<&AttributeValue> {
        self.attributes.get(key)
    }
}

/// Entries sharing one type code.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RawBucket {
    /// Type code; `None` for open-ocean boundaries
    pub ibtype: Option<String>,
    /// Entries in file order
    pub entries: Vec<BoundaryEntry>,
}

/// Type-code-keyed boundary dictionary in insertion order.
///
/// Equality compares buckets by key regardless of bucket order, and
/// entry lists element by element.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(from = "Vec<RawBucket>", into = "Vec<RawBucket>")]
pub struct RawBoundaries {
    buckets: Vec<RawBucket>,
}

impl RawBoundaries {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry to the bucket for `ibtype`, creating it if needed.
    pub fn push(&mut self, ibtype: Option<&str>, entry: BoundaryEntry) {
        self.bucket_mut(ibtype).entries.push(entry);
    }

    /// Append an open-ocean entry.
    pub fn push_ocean(&mut self, entry: BoundaryEntry) {
        self.push(None, entry);
    }

    /// Append an entry under a type code.
    pub fn push_typed(&mut self, ibtype: &str, entry: BoundaryEntry) {
        self.push(Some(ibtype), entry);
    }

    /// Append several entries to one bucket, keeping their order.
    pub fn extend_bucket<I>(&mut self, ibtype: Option<&str>, entries: I)
    where
        I: IntoIterator<Item = BoundaryEntry>,
    {
        self.bucket_mut(ibtype).entries.extend(entries);
    }

    /// Builder form of [`push`](Self::push).
    pub fn with_entry(mut self, ibtype: Option<&str>, entry: BoundaryEntry) -> Self {
        self.push(ibtype, entry);
        self
    }

    fn bucket_mut(&mut self, ibtype: Option<&str>) -> &mut RawBucket {
        let pos = match self.buckets.iter().position(|b| b.ibtype.as_deref() == ibtype) {
            Some(pos) => pos,
            None => {
                self.buckets.push(RawBucket {
                    ibtype: ibtype.map(str::to_string),
                    entries: Vec::new(),
                });
                self.buckets.len() - 1
            }
        };
        &mut self.buckets[pos]
    }

    /// Entries stored under `ibtype`.
    pub fn bucket(&self, ibtype: Option<&str>) -> Option<&[BoundaryEntry]> {
        self.buckets
            .iter()
            .find(|b| b.ibtype.as_deref() == ibtype)
            .map(|b| b.entries.as_slice())
    }

    /// Open-ocean entries (empty if there are none).
    pub fn ocean(&self) -> &[BoundaryEntry] {
        self.bucket(None).unwrap_or(&[])
    }

    /// Type codes in insertion order.
    pub fn type_codes(&self) -> impl Iterator<Item = Option<&str>> + '_ {
        self.buckets.iter().map(|b| b.ibtype.as_deref())
    }

    /// Buckets in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, RawBucket> {
        self.buckets.iter()
    }

    /// Number of buckets (distinct type codes).
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Total number of entries across all buckets.
    pub fn n_entries(&self) -> usize {
        self.buckets.iter().map(|b| b.entries.len()).sum()
    }
}

impl PartialEq for RawBoundaries {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .buckets
                .iter()
                .all(|b| other.bucket(b.ibtype.as_deref()) == Some(b.entries.as_slice()))
    }
}

impl From<Vec<RawBucket>> for RawBoundaries {
    fn from(buckets: Vec<RawBucket>) -> Self {
        let mut raw = RawBoundaries::new();
        for bucket in buckets {
            raw.extend_bucket(bucket.ibtype.as_deref(), bucket.entries);
        }
        raw
    }
}

impl From<RawBoundaries> for Vec<RawBucket> {
    fn from(raw: RawBoundaries) -> Self {
        raw.buckets
    }
}
