use super::*;
use serde_json::json;

fn sample() -> AnalysisResult {
    AnalysisResult {
        nodes: vec![
            FlowNode {
                id: "mat_steel".to_string(),
                label: "Steel".to_string(),
                phase: NodePhase::Material,
            },
            FlowNode {
                id: "eol".to_string(),
                label: "End of Life".to_string(),
                phase: NodePhase::Eol,
            },
            FlowNode {
                id: "total".to_string(),
                label: "Total CO2e".to_string(),
                phase: NodePhase::Total,
            },
        ],
        links: vec![FlowLink {
            source: "eol".to_string(),
            target: "total".to_string(),
            value: 0.44,
            credit: false,
        }],
        summary: Summary {
            total_co2e_kg: 5.44,
            breakdown: PhaseBreakdown {
                materials: 2.0,
                manufacturing: 2.0,
                transport: 0.5,
                use_phase: 0.5,
                end_of_life: 0.44,
            },
            weight_kg: 1.0,
            category: "tools".to_string(),
            eol_scenario: "baseline".to_string(),
        },
        per_material_weights: [("steel".to_string(), 1.0)].into_iter().collect(),
        material_details: vec![MaterialDetail {
            name: MaterialName::new("steel"),
            fraction: 1.0,
            weight_kg: 1.0,
            impact_kg_co2e: 2.0,
            factor: 2.0,
        }],
    }
}

#[test]
fn test_wire_shape() {
    let value = serde_json::to_value(sample()).unwrap();

    assert_eq!(
        value["nodes"][0],
        json!({"id": "mat_steel", "label": "Steel", "phase": "material"})
    );
    // No `credit` key on the wire for a non-credit flow
    assert_eq!(
        value["links"][0],
        json!({"source": "eol", "target": "total", "value": 0.44})
    );
    assert_eq!(
        value["summary"]["breakdown"],
        json!({
            "materials": 2.0,
            "manufacturing": 2.0,
            "transport": 0.5,
            "use": 0.5,
            "end_of_life": 0.44
        })
    );
    assert_eq!(value["summary"]["total_co2e_kg"], json!(5.44));
    assert_eq!(value["summary"]["eol_scenario"], json!("baseline"));
    assert_eq!(value["per_material_weights"], json!({"steel": 1.0}));
    assert_eq!(
        value["material_details"][0],
        json!({
            "name": "steel",
            "fraction": 1.0,
            "weight_kg": 1.0,
            "impact_kg_co2e": 2.0,
            "factor": 2.0
        })
    );
}

#[test]
fn test_credit_flag_on_wire() {
    let mut result = sample();
    result.links[0].value = 0.09;
    result.links[0].credit = true;

    let value = serde_json::to_value(&result).unwrap();
    assert_eq!(value["links"][0]["credit"], json!(true));
}

#[test]
fn test_round_trip() {
    let original = sample();
    let encoded = serde_json::to_string(&original).unwrap();
    let decoded: AnalysisResult = serde_json::from_str(&encoded).unwrap();
    assert_eq!(original, decoded);
}

#[test]
fn test_breakdown_total_is_derived() {
    let breakdown = PhaseBreakdown {
        materials: 2.0,
        manufacturing: 2.0,
        transport: 0.5,
        use_phase: 0.5,
        end_of_life: -0.09,
    };
    assert!((breakdown.total() - 4.91).abs() < 1e-12);
}

#[test]
fn test_eol_edge_value() {
    let result = sample();
    assert_eq!(result.eol_edge_value(), Some(0.44));

    let mut without = result.clone();
    without.links.clear();
    assert_eq!(without.eol_edge_value(), None);
}

#[test]
fn test_node_phase_display() {
    assert_eq!(NodePhase::Use.to_string(), "use");
    assert_eq!(NodePhase::Eol.to_string(), "eol");
    assert_eq!(NodePhase::Material.to_string(), "material");
}
