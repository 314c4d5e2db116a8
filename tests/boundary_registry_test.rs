//! Integration tests for boundary classification and resolution.
//!
//! These tests verify:
//! - Encoding invariance of node id resolution
//! - Lookup failures for single and paired boundaries
//! - Suffix classification and synthetic id numbering
//! - Empty categories and empty layers
//! - Round-trip of the raw dictionary through JSON
//! - Barrier index pairs and dual-line geometry
//! - Registry equality

use std::sync::Arc;

use adcirc_mesh::boundary::{classify_suffix, IndexPair};
use adcirc_mesh::io::{boundaries_to_json_string, parse_boundaries_json};
use adcirc_mesh::{
    BoundaryCategory, BoundaryEntry, BoundaryError, BoundaryId, BoundarySet, Fort14,
    MeshBoundaryRegistry, NodeIndex, NodeRef, NodeTable, RawBoundaries,
};
use approx::assert_relative_eq;

/// Small estuary mesh: ids 101..=105 at positions 0..=4, 201..=205 at 5..=9.
fn estuary_nodes() -> Arc<NodeTable> {
    let ids = [101, 102, 103, 104, 105, 201, 202, 203, 204, 205];
    let nodes = ids.iter().enumerate().map(|(i, &id)| {
        let x = (i % 5) as f64 * 100.0;
        let y = if i < 5 { 0.0 } else { 50.0 };
        (id, (x, y))
    });
    Arc::new(NodeTable::from_nodes(nodes).unwrap())
}

fn estuary_boundaries() -> RawBoundaries {
    let mut raw = RawBoundaries::new();
    raw.push_ocean(BoundaryEntry::from_ids([101, 201]));
    raw.push_typed("0", BoundaryEntry::from_ids(["105", "205"]));
    raw.push_typed("20", BoundaryEntry::from_ids([102, 103]));
    raw.push_typed("1", BoundaryEntry::from_ids([203, 204, 203]));
    raw.push_typed(
        "2",
        BoundaryEntry::from_ids([104, 105]).with_attribute("flux", 35.0),
    );
    raw.push_typed(
        "24",
        BoundaryEntry::from_pairs([("101", "201"), ("102", "202")])
            .with_attribute("barrier_height", 1.5)
            .with_attribute("subcritical", 1.0)
            .with_attribute("supercritical", 0.8),
    );
    raw.push_typed(
        "leveeSomething4",
        BoundaryEntry::from_pairs([("103", "203")]).with_attribute("barrier_height", 2.0),
    );
    raw.push_typed(
        "5",
        BoundaryEntry::from_pairs([("104", "204")]).with_attribute("pipe_diameter", 0.5),
    );
    raw.push_typed("3", BoundaryEntry::from_pairs([("105", "205")]));
    raw
}

fn pair(front: usize, back: usize) -> IndexPair {
    (NodeIndex::new(front), NodeIndex::new(back))
}

#[test]
fn test_resolution_is_encoding_invariant() {
    let nodes = estuary_nodes();
    let resolver = nodes.resolver();
    for &id in nodes.ids() {
        let native = resolver.resolve(&NodeRef::from(id)).unwrap();
        assert_eq!(native, resolver.resolve(&NodeRef::from(id.to_string())).unwrap());
        assert_eq!(native, resolver.resolve(&NodeRef::wrapped(id)).unwrap());
    }
}

#[test]
fn test_absent_ids_fail_lookup() {
    let nodes = estuary_nodes();

    let single = RawBoundaries::new().with_entry(Some("0"), BoundaryEntry::from_ids([101, 999]));
    let registry = MeshBoundaryRegistry::new(Arc::clone(&nodes), single);
    assert!(registry.land().resolved_indices().unwrap_err().is_lookup());

    let front = RawBoundaries::new()
        .with_entry(Some("4"), BoundaryEntry::from_pairs([("999", "201")]));
    let back = RawBoundaries::new()
        .with_entry(Some("4"), BoundaryEntry::from_pairs([("101", "999")]));
    for raw in [front, back] {
        let registry = MeshBoundaryRegistry::new(Arc::clone(&nodes), raw);
        assert_eq!(
            registry.weir().resolved_indices().unwrap_err(),
            BoundaryError::NodeNotFound { id: 999 }
        );
    }
}

#[test]
fn test_suffix_classification_renumbers_from_one() {
    let raw = RawBoundaries::new()
        .with_entry(Some("20"), BoundaryEntry::from_ids([101, 102]))
        .with_entry(Some("leveeSomething4"), BoundaryEntry::from_pairs([("101", "201")]))
        .with_entry(Some("leveeSomething4"), BoundaryEntry::from_pairs([("102", "202")]))
        .with_entry(Some("leveeSomething4"), BoundaryEntry::from_pairs([("103", "203")]));

    let weirs = classify_suffix(&raw, "4");
    let ids: Vec<usize> = weirs.iter().map(|r| r.id.get()).collect();
    assert_eq!(ids, vec![1, 2, 3]);
    assert!(weirs
        .iter()
        .all(|r| r.ibtype.as_deref() == Some("leveeSomething4")));
}

#[test]
fn test_empty_dictionary_gives_empty_layers() {
    let registry = MeshBoundaryRegistry::new(estuary_nodes(), RawBoundaries::new());
    for category in BoundaryCategory::ALL {
        assert!(classify_suffix(registry.to_raw(), category.suffix().unwrap_or("")).is_empty());
        let layer = registry.layer(category).unwrap();
        assert!(layer.is_empty(), "{category}");
    }
}

#[test]
fn test_round_trip_through_json() {
    let written = MeshBoundaryRegistry::new(estuary_nodes(), estuary_boundaries());
    written.layers().unwrap();

    let json = boundaries_to_json_string(written.to_raw()).unwrap();
    let rebuilt = MeshBoundaryRegistry::new(estuary_nodes(), parse_boundaries_json(&json).unwrap());

    assert_eq!(written, rebuilt);
    assert_eq!(written.weir(), rebuilt.weir());
    assert_eq!(
        written.layer(BoundaryCategory::Land).unwrap(),
        rebuilt.layer(BoundaryCategory::Land).unwrap()
    );
}

#[test]
fn test_barrier_pairs_and_faces() {
    let registry = MeshBoundaryRegistry::new(estuary_nodes(), estuary_boundaries());
    let weirs = registry.weir();

    // "24" entry first, then the "leveeSomething4" entry
    assert_eq!(weirs.ids(), vec![BoundaryId::new(1), BoundaryId::new(2)]);
    let indexes = weirs.resolved_indices().unwrap();
    assert_eq!(indexes[0], vec![pair(0, 5), pair(1, 6)]);
    assert_eq!(indexes[1], vec![pair(2, 7)]);

    let layer = weirs.layer().unwrap();
    let faces = layer.get("24:1").unwrap().multi_line_string().unwrap();
    let (front, back) = (&faces.0[0], &faces.0[1]);
    assert_eq!(front.0.len(), 2);
    assert_eq!(back.0.len(), 2);
    assert_relative_eq!(front.0[0].x, 0.0);
    assert_relative_eq!(front.0[1].x, 100.0);
    assert_relative_eq!(back.0[0].y, 50.0);
    assert_relative_eq!(back.0[1].x, 100.0);
    assert_relative_eq!(layer.get("24:1").unwrap().length(), 200.0);
}

#[test]
fn test_registry_equality() {
    let a = MeshBoundaryRegistry::new(estuary_nodes(), estuary_boundaries());
    let b = MeshBoundaryRegistry::new(estuary_nodes(), estuary_boundaries());
    a.layers().unwrap();
    assert_eq!(a, b);

    let mut changed = RawBoundaries::new();
    for bucket in estuary_boundaries().iter() {
        let entries = bucket.entries.iter().cloned().map(|entry| {
            if bucket.ibtype.as_deref() == Some("5") {
                entry.with_attribute("pipe_diameter", 0.6)
            } else {
                entry
            }
        });
        changed.extend_bucket(bucket.ibtype.as_deref(), entries);
    }
    let c = MeshBoundaryRegistry::new(estuary_nodes(), changed);
    assert_ne!(a, c);
}

#[test]
fn test_category_views_through_mesh() {
    let nodes = (*estuary_nodes()).clone();
    let mesh = Fort14::new(nodes, Some(estuary_boundaries())).with_crs("EPSG:32632");

    assert_eq!(mesh.ocean_boundaries().len(), 1);
    assert_eq!(mesh.land_boundaries().len(), 2);
    assert_eq!(mesh.interior_boundaries().len(), 1);
    assert_eq!(mesh.inflow_boundaries().len(), 1);
    assert_eq!(mesh.outflow_boundaries().len(), 1);
    assert_eq!(mesh.weir_boundaries().len(), 2);
    assert_eq!(mesh.culvert_boundaries().len(), 1);

    let inflow = mesh.inflow_boundaries().layer().unwrap();
    assert_eq!(inflow.crs(), Some("EPSG:32632"));
    let feature = inflow.get("2:1").unwrap();
    assert_eq!(feature.attributes["flux"].as_f64(), Some(35.0));

    let land = mesh.land_boundaries().resolved_indices().unwrap();
    assert_eq!(land[0], vec![NodeIndex::new(4), NodeIndex::new(9)]);
    assert_eq!(land[1], vec![NodeIndex::new(1), NodeIndex::new(2)]);
}
