//! Tests for match criteria and market-share lookup.

use std::path::Path;

use materia_core::types::Property;
use materia_epd::lookup::{
    JsonMatchDirectory, Market, MarketShareSource, MarketShareTable, MatchCriteria, MatchCriteriaSource,
};

#[test]
fn test_criteria_from_bare_list() {
    let criteria = JsonMatchDirectory::parse(r#"[" a ", "b", "a", ""]"#, Path::new("g.json"))
        .unwrap()
        .unwrap();
    assert_eq!(criteria.uuids, ["a", "b"]);
    assert!(criteria.properties.is_empty());
}

#[test]
fn test_criteria_from_object_with_overrides() {
    let json = r#"{"uuids": ["x"], "properties": {"gross density": 2400, "colour": 3, "layer_thickness": 0.02}}"#;
    let criteria = JsonMatchDirectory::parse(json, Path::new("g.json")).unwrap().unwrap();
    assert_eq!(criteria.uuids, ["x"]);
    assert_eq!(criteria.properties.len(), 2);
    assert_eq!(criteria.properties[&Property::GrossDensity], 2400.0);
    assert_eq!(criteria.properties[&Property::LayerThickness], 0.02);
}

#[test]
fn test_empty_criteria_is_none() {
    assert_eq!(JsonMatchDirectory::parse("[]", Path::new("g.json")).unwrap(), None);
    assert_eq!(
        JsonMatchDirectory::parse(r#"{"properties": {"mass": 1}}"#, Path::new("g.json")).unwrap(),
        None
    );
}

#[test]
fn test_malformed_criteria_is_error() {
    let err = JsonMatchDirectory::parse("{not json", Path::new("g.json")).unwrap_err();
    assert_eq!(err.path(), Path::new("g.json"));
}

#[test]
fn test_criteria_directory_lookup() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("g-1.json"), r#"["s-1", "s-2"]"#).unwrap();
    let source = JsonMatchDirectory::new(dir.path());

    assert_eq!(
        source.criteria_for("g-1").unwrap(),
        Some(MatchCriteria {
            uuids: vec!["s-1".to_string(), "s-2".to_string()],
            properties: Default::default(),
        })
    );
    assert_eq!(source.criteria_for("g-2").unwrap(), None);
}

const SHARES: &str = r#"{
  "de": {
    "2523": {"DE": 0.6, "fr": 0.1, "PL": 0.3},
    "*": {"DE": 1.0}
  },
  "FR": {"*": {}}
}"#;

fn table() -> MarketShareTable {
    MarketShareTable::from_json(SHARES, Path::new("shares.json")).unwrap()
}

#[test]
fn test_markets_by_hs_code_sorted_by_share() {
    let markets = table().markets_for("DE", Some("2523"));
    assert_eq!(
        markets,
        [Market::new("DE", 0.6), Market::new("PL", 0.3), Market::new("FR", 0.1)]
    );
}

#[test]
fn test_markets_wildcard_and_default() {
    let table = table();
    assert_eq!(table.markets_for("de", Some("7214")), [Market::new("DE", 1.0)]);
    assert_eq!(table.markets_for("DE", None), [Market::new("DE", 1.0)]);
    // Empty share map falls back to the own location.
    assert_eq!(table.markets_for("FR", Some("2523")), [Market::new("FR", 1.0)]);
    assert_eq!(table.markets_for("JP", Some("2523")), [Market::new("JP", 1.0)]);
}

#[test]
fn test_markets_ties_break_by_code() {
    let table = MarketShareTable::from_json(
        r#"{"GLO": {"*": {"US": 0.5, "CN": 0.5}}}"#,
        Path::new("shares.json"),
    )
    .unwrap();
    let codes: Vec<String> = table
        .markets_for("global", None)
        .into_iter()
        .map(|m| m.code)
        .collect();
    assert_eq!(codes, ["CN", "US"]);
}

#[test]
fn test_malformed_share_table() {
    assert!(MarketShareTable::from_json(r#"{"DE": 1}"#, Path::new("s.json")).is_err());
    assert!(MarketShareTable::default().is_empty());
}
