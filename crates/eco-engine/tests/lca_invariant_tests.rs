//! End-to-end invariant tests for the calculation engine: the properties
//! that must hold for any valid input, across the full calculate ->
//! recalculate pipeline.

use eco_core::{DisposalMix, FactorTable, Material, ProductId, ProductInput};
use eco_engine::{calculate, recalculate, ModelParams, ScenarioSelector};
use std::collections::BTreeMap;

fn product(weight_kg: f64, category: &str, materials: Vec<Material>) -> ProductInput {
    ProductInput {
        id: ProductId::new("B00INVARNT"),
        category: category.to_string(),
        weight_kg,
        materials,
    }
}

fn fixtures() -> Vec<ProductInput> {
    vec![
        product(1.0, "tools", vec![Material::new("steel", 1.0)]),
        product(
            1.2,
            "appliances",
            vec![
                Material::new("stainless_steel", 0.6),
                Material::new("abs", 0.3),
                Material::new("copper", 0.1),
            ],
        ),
        product(
            18.0,
            "furniture",
            vec![Material::new("softwood", 0.9), Material::new("steel", 0.1)],
        ),
        product(
            0.3,
            "electronics",
            vec![
                Material::new("abs", 0.5),
                Material::new("lithium_ion_battery", 0.3),
                Material::new("copper", 0.2),
            ],
        ),
    ]
}

#[test]
fn total_equals_sum_of_phases() {
    let factors = FactorTable::builtin();
    for input in fixtures() {
        let result = calculate(
            &factors,
            &ModelParams::default(),
            &input,
            &ScenarioSelector::baseline(),
        )
        .unwrap()
        .result;

        let b = &result.summary.breakdown;
        let sum = b.materials + b.manufacturing + b.transport + b.use_phase + b.end_of_life;
        assert!(
            (result.summary.total_co2e_kg - sum).abs() < 5e-5,
            "total {} drifted from phase sum {}",
            result.summary.total_co2e_kg,
            sum
        );
    }
}

#[test]
fn total_stays_consistent_across_recalculation() {
    let factors = FactorTable::builtin();
    for input in fixtures() {
        let original = calculate(
            &factors,
            &ModelParams::default(),
            &input,
            &ScenarioSelector::baseline(),
        )
        .unwrap()
        .result;

        for scenario in ["baseline", "best_case", "worst_case"] {
            let recalc = recalculate(
                &factors,
                &original,
                &ScenarioSelector::from_name(scenario),
            )
            .unwrap()
            .result;

            let b = &recalc.summary.breakdown;
            let sum = b.materials + b.manufacturing + b.transport + b.use_phase + b.end_of_life;
            assert!((recalc.summary.total_co2e_kg - sum).abs() < 5e-5);
        }
    }
}

#[test]
fn recalculation_preserves_everything_but_eol() {
    let factors = FactorTable::builtin();
    for input in fixtures() {
        let original = calculate(
            &factors,
            &ModelParams::default(),
            &input,
            &ScenarioSelector::baseline(),
        )
        .unwrap()
        .result;

        let recalc = recalculate(&factors, &original, &ScenarioSelector::from_name("best_case"))
            .unwrap()
            .result;

        assert_eq!(original.summary.breakdown.materials, recalc.summary.breakdown.materials);
        assert_eq!(
            original.summary.breakdown.manufacturing,
            recalc.summary.breakdown.manufacturing
        );
        assert_eq!(original.summary.breakdown.transport, recalc.summary.breakdown.transport);
        assert_eq!(original.summary.breakdown.use_phase, recalc.summary.breakdown.use_phase);
        assert_eq!(original.material_details, recalc.material_details);
        assert_eq!(original.per_material_weights, recalc.per_material_weights);
        assert_eq!(original.nodes, recalc.nodes);
    }
}

#[test]
fn recalculation_is_idempotent() {
    let factors = FactorTable::builtin();
    for input in fixtures() {
        let original = calculate(
            &factors,
            &ModelParams::default(),
            &input,
            &ScenarioSelector::baseline(),
        )
        .unwrap()
        .result;

        for scenario in ["baseline", "best_case", "worst_case"] {
            let selector = ScenarioSelector::from_name(scenario);
            let once = recalculate(&factors, &original, &selector).unwrap().result;
            let twice = recalculate(&factors, &once, &selector).unwrap().result;
            assert_eq!(once, twice, "scenario {} not idempotent", scenario);
        }
    }
}

#[test]
fn full_recycling_yields_credit() {
    let factors = FactorTable::builtin();
    let mut fractions = BTreeMap::new();
    fractions.insert("recycling".to_string(), 1.0);
    let selector = ScenarioSelector::Custom(DisposalMix::new(fractions).unwrap());

    for input in fixtures() {
        let result = calculate(&factors, &ModelParams::default(), &input, &selector)
            .unwrap()
            .result;
        assert!(
            result.summary.breakdown.end_of_life <= 0.0,
            "full recycling must not emit, got {}",
            result.summary.breakdown.end_of_life
        );
    }
}

#[test]
fn worked_scenario_example() {
    // 1.0 kg of a single material with extraction factor 2.0:
    // baseline blended factor 0.44, best_case -0.09, delta exactly 0.53
    let factors = FactorTable::builtin();
    let input = product(1.0, "tools", vec![Material::new("steel", 1.0)]);

    let baseline = calculate(
        &factors,
        &ModelParams::default(),
        &input,
        &ScenarioSelector::baseline(),
    )
    .unwrap()
    .result;

    assert_eq!(baseline.summary.breakdown.materials, 2.0);
    assert_eq!(baseline.summary.breakdown.end_of_life, 0.44);

    let best = recalculate(&factors, &baseline, &ScenarioSelector::from_name("best_case"))
        .unwrap()
        .result;

    assert_eq!(best.summary.breakdown.end_of_life, -0.09);
    let delta = baseline.summary.total_co2e_kg - best.summary.total_co2e_kg;
    assert!((delta - 0.53).abs() < 1e-12);

    assert_eq!(baseline.summary.breakdown.materials, best.summary.breakdown.materials);
    assert_eq!(
        baseline.summary.breakdown.manufacturing,
        best.summary.breakdown.manufacturing
    );
    assert_eq!(baseline.summary.breakdown.transport, best.summary.breakdown.transport);
    assert_eq!(baseline.summary.breakdown.use_phase, best.summary.breakdown.use_phase);
}

#[test]
fn eol_edge_tracks_summary() {
    let factors = FactorTable::builtin();
    for input in fixtures() {
        let original = calculate(
            &factors,
            &ModelParams::default(),
            &input,
            &ScenarioSelector::baseline(),
        )
        .unwrap()
        .result;

        assert_eq!(
            original.eol_edge_value(),
            Some(original.summary.breakdown.end_of_life.abs())
        );

        for scenario in ["best_case", "worst_case"] {
            let recalc = recalculate(&factors, &original, &ScenarioSelector::from_name(scenario))
                .unwrap()
                .result;
            assert_eq!(
                recalc.eol_edge_value(),
                Some(recalc.summary.breakdown.end_of_life.abs())
            );
        }
    }
}
