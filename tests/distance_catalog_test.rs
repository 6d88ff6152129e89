// ABOUTME: Integration tests for the distance catalog
// ABOUTME: Validates presets, default fallback, construction errors, and JSON loading
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::init_test_logging;
use pace_calculator::{CatalogError, Distance, DistanceCatalog};

#[test]
fn test_standard_catalog_order() {
    let catalog = DistanceCatalog::standard();
    let ids: Vec<&str> = catalog.distances().iter().map(|d| d.id.as_str()).collect();
    assert_eq!(
        ids,
        ["1k", "mile", "2mile", "3mile", "5k", "10k", "halfMarathon", "marathon"]
    );
    assert_eq!(catalog.default_distance().id, "1k");
}

#[test]
fn test_classic_catalog_has_no_1k_or_10k() {
    let catalog = DistanceCatalog::classic();
    assert_eq!(catalog.len(), 6);
    assert!(catalog.get("1k").is_none());
    assert!(catalog.get("10k").is_none());
    assert_eq!(catalog.get("mile").unwrap().label, "Mile");
}

#[test]
fn test_unknown_id_falls_back_to_default() {
    init_test_logging();
    let catalog = DistanceCatalog::standard();
    assert_eq!(catalog.lookup(Some("ultra")).id, "1k");
    assert_eq!(catalog.lookup(Some("")).id, "1k");
    assert_eq!(catalog.lookup(None).id, "1k");
    assert_eq!(catalog.lookup(Some("marathon")).id, "marathon");
}

#[test]
fn test_classic_falls_back_to_fourth_entry() {
    let catalog = DistanceCatalog::classic();
    assert_eq!(catalog.lookup(Some("1k")).id, "5k");
    assert_eq!(catalog.lookup(None), &catalog.distances()[3]);
}

#[test]
fn test_lookup_is_case_sensitive() {
    let catalog = DistanceCatalog::standard();
    assert!(catalog.get("Marathon").is_none());
    assert_eq!(catalog.lookup(Some("Marathon")).id, "1k");
}

#[test]
fn test_preset_by_name() {
    assert_eq!(DistanceCatalog::preset("classic").unwrap().len(), 6);
    assert_eq!(DistanceCatalog::preset(" Standard ").unwrap().len(), 8);
    assert!(matches!(
        DistanceCatalog::preset("metric"),
        Err(CatalogError::UnknownPreset(name)) if name == "metric"
    ));
}

#[test]
fn test_every_preset_distance_is_unit_consistent() {
    for catalog in [DistanceCatalog::standard(), DistanceCatalog::classic()] {
        for distance in catalog.distances() {
            assert!(distance.has_positive_length(), "{}", distance.id);
            assert!(distance.units_consistent(), "{}", distance.id);
        }
    }
}

#[test]
fn test_custom_catalog_with_custom_default() {
    let catalog = DistanceCatalog::new(
        vec![
            Distance::new("track", 0.248_548, 0.4, "400m"),
            Distance::new("15k", 9.320_57, 15.0, "15K"),
        ],
        "15k",
    )
    .unwrap();
    assert_eq!(catalog.default_distance().label, "15K");
    assert_eq!(catalog.lookup(Some("missing")).id, "15k");
}

#[test]
fn test_construction_errors() {
    assert!(matches!(
        DistanceCatalog::new(Vec::new(), "5k"),
        Err(CatalogError::Empty)
    ));

    let five_k = Distance::new("5k", 3.106_86, 5.0, "5K");
    assert!(matches!(
        DistanceCatalog::new(vec![five_k.clone(), five_k.clone()], "5k"),
        Err(CatalogError::DuplicateId(id)) if id == "5k"
    ));

    assert!(matches!(
        DistanceCatalog::new(vec![Distance::new("zero", 0.0, 0.0, "Zero")], "zero"),
        Err(CatalogError::NonPositiveLength { .. })
    ));

    assert!(matches!(
        DistanceCatalog::new(vec![Distance::new("bad", 1.0, 2.0, "Bad")], "bad"),
        Err(CatalogError::InconsistentUnits { .. })
    ));

    assert!(matches!(
        DistanceCatalog::new(vec![five_k], "marathon"),
        Err(CatalogError::UnknownDefault(id)) if id == "marathon"
    ));
}

#[test]
fn test_catalog_from_json() {
    let json = r#"{
        "distances": [
            {"id": "mile", "miles": 1.0, "kilometers": 1.60934, "label": "Mile"},
            {"id": "marathon", "miles": 26.2188, "kilometers": 42.195, "label": "Marathon"}
        ],
        "default_id": "marathon"
    }"#;
    let catalog = DistanceCatalog::from_json(json).unwrap();
    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.default_distance().id, "marathon");
}

#[test]
fn test_catalog_json_is_validated() {
    let json = r#"{"distances": [], "default_id": "5k"}"#;
    assert!(matches!(
        DistanceCatalog::from_json(json),
        Err(CatalogError::Empty)
    ));
    assert!(matches!(
        DistanceCatalog::from_json("not json"),
        Err(CatalogError::Parse(_))
    ));
}

#[test]
fn test_catalog_serializes_with_default_id() {
    let catalog = DistanceCatalog::classic();
    let json = serde_json::to_string(&catalog).unwrap();
    let restored: DistanceCatalog = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, catalog);
    assert!(json.contains(r#""default_id":"5k""#));
}
