//! Integration tests for EcoFlow: the full project pipeline from catalog
//! discovery through analysis, persistence, and client-side recalculation.

use eco_core::{Catalog, Config, FactorTable};
use eco_engine::{calculate, recalculate, AnalysisResult, ModelParams, ScenarioSelector};
use std::path::Path;

const CONFIG_YAML: &str = r#"
name: integration_test
catalog_paths:
  - products
model:
  transport_distance_km: 5000
  lifetime_years: 5
"#;

const KETTLE_YAML: &str = r#"
id: B00KETTLE1
name: Electric Kettle
category: appliances
weight_kg: 1.2
materials:
  stainless steel: 0.6
  plastic: 0.3
  copper: 0.1
"#;

const CHAIR_YAML: &str = r#"
id: B00CHAIR01
name: Wooden Chair
category: furniture
weight_kg: 6.5
materials:
  oak: 0.85
  steel: 0.15
eol_scenario: best_case
"#;

/// Create a throwaway project directory with config and products.
fn write_project(root: &Path) {
    std::fs::write(root.join("ecoflow.yml"), CONFIG_YAML).unwrap();
    let products = root.join("products");
    std::fs::create_dir(&products).unwrap();
    std::fs::write(products.join("kettle.yml"), KETTLE_YAML).unwrap();
    std::fs::write(products.join("chair.yml"), CHAIR_YAML).unwrap();
}

#[test]
fn test_load_project_and_catalog() {
    let dir = tempfile::tempdir().unwrap();
    write_project(dir.path());

    let config = Config::load_from_dir(dir.path()).unwrap();
    assert_eq!(config.name, "integration_test");

    let catalog = Catalog::load(dir.path(), &config).unwrap();
    assert_eq!(catalog.len(), 2);
    assert_eq!(
        catalog.get("B00CHAIR01").unwrap().eol_scenario.as_deref(),
        Some("best_case")
    );
}

#[test]
fn test_full_analysis_pipeline() {
    let dir = tempfile::tempdir().unwrap();
    write_project(dir.path());

    let config = Config::load_from_dir(dir.path()).unwrap();
    let catalog = Catalog::load(dir.path(), &config).unwrap();
    let factors = FactorTable::builtin();
    let params = ModelParams {
        transport_distance_km: config.model.transport_distance_km,
        lifetime_years: config.model.lifetime_years,
    };

    let spec = catalog.require("B00KETTLE1").unwrap();
    let input = spec.resolve(&factors).unwrap();
    let analysis = calculate(&factors, &params, &input, &ScenarioSelector::baseline()).unwrap();

    let summary = &analysis.result.summary;
    assert_eq!(summary.category, "appliances");
    assert_eq!(summary.eol_scenario, "baseline");
    assert!(summary.total_co2e_kg > 0.0);
    // stainless steel + abs (via "plastic") + copper
    assert_eq!(analysis.result.material_details.len(), 3);
    assert!(analysis.diagnostics.is_empty());
}

#[test]
fn test_persist_and_recalculate_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    write_project(dir.path());

    let config = Config::load_from_dir(dir.path()).unwrap();
    let catalog = Catalog::load(dir.path(), &config).unwrap();
    let factors = FactorTable::builtin();

    let spec = catalog.require("B00KETTLE1").unwrap();
    let input = spec.resolve(&factors).unwrap();
    let original = calculate(
        &factors,
        &ModelParams::default(),
        &input,
        &ScenarioSelector::baseline(),
    )
    .unwrap()
    .result;

    // Persist, read back, then recalculate from the stored copy, the same
    // flow a client runs against a cached response
    let path = dir.path().join("target").join("B00KETTLE1.json");
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, serde_json::to_string_pretty(&original).unwrap()).unwrap();

    let stored: AnalysisResult =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(stored, original);

    let recalc = recalculate(&factors, &stored, &ScenarioSelector::from_name("best_case"))
        .unwrap()
        .result;

    assert_eq!(recalc.summary.eol_scenario, "best_case");
    assert!(recalc.summary.breakdown.end_of_life < original.summary.breakdown.end_of_life);
    assert_eq!(
        recalc.summary.breakdown.materials,
        original.summary.breakdown.materials
    );
    assert_eq!(
        recalc.eol_edge_value(),
        Some(recalc.summary.breakdown.end_of_life.abs())
    );
}

#[test]
fn test_catalog_scenario_default_applies() {
    let dir = tempfile::tempdir().unwrap();
    write_project(dir.path());

    let config = Config::load_from_dir(dir.path()).unwrap();
    let catalog = Catalog::load(dir.path(), &config).unwrap();
    let factors = FactorTable::builtin();

    let spec = catalog.require("B00CHAIR01").unwrap();
    let input = spec.resolve(&factors).unwrap();
    let scenario = spec.eol_scenario.as_deref().unwrap();
    let analysis = calculate(
        &factors,
        &ModelParams::default(),
        &input,
        &ScenarioSelector::from_name(scenario),
    )
    .unwrap();

    assert_eq!(analysis.result.summary.eol_scenario, "best_case");
    // oak resolves to hardwood and accumulates with nothing else
    assert!(analysis
        .result
        .per_material_weights
        .contains_key("hardwood"));
}

#[test]
fn test_analysis_result_wire_contract() {
    // The serialized shape is consumed by external renderers and clients;
    // spot-check the top-level keys and the eol edge addressing scheme
    let factors = FactorTable::builtin();
    let dir = tempfile::tempdir().unwrap();
    write_project(dir.path());

    let config = Config::load_from_dir(dir.path()).unwrap();
    let catalog = Catalog::load(dir.path(), &config).unwrap();
    let input = catalog
        .require("B00KETTLE1")
        .unwrap()
        .resolve(&factors)
        .unwrap();
    let result = calculate(
        &factors,
        &ModelParams::default(),
        &input,
        &ScenarioSelector::baseline(),
    )
    .unwrap()
    .result;

    let value = serde_json::to_value(&result).unwrap();
    for key in [
        "nodes",
        "links",
        "summary",
        "per_material_weights",
        "material_details",
    ] {
        assert!(value.get(key).is_some(), "missing wire key {}", key);
    }
    assert!(value["links"]
        .as_array()
        .unwrap()
        .iter()
        .any(|l| l["source"] == "eol" && l["target"] == "total"));
}
