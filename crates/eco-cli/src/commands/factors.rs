//! `eco factors` command — list the emission factor reference data

use anyhow::Result;
use eco_core::disposal;
use serde_json::json;

use crate::cli::{FactorKind, FactorsArgs, GlobalArgs, OutputFormat};
use crate::commands::common::{load_factors, load_project, print_table};

/// Execute the factors command
pub(crate) async fn execute(args: &FactorsArgs, global: &GlobalArgs) -> Result<()> {
    let project = load_project(global)?;
    let factors = load_factors(&project)?;

    if args.output == OutputFormat::Json {
        let value = match args.kind {
            FactorKind::Materials => json!({ "materials": factors.materials }),
            FactorKind::Categories => json!({
                "manufacturing": factors.manufacturing,
                "use_phase": factors.use_phase,
            }),
            FactorKind::Disposal => disposal_json(&factors),
            FactorKind::All => {
                let mut value = serde_json::to_value(&factors)?;
                value["scenarios"] = scenario_table();
                value
            }
        };
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    match args.kind {
        FactorKind::Materials => print_materials(&factors),
        FactorKind::Categories => print_categories(&factors),
        FactorKind::Disposal => print_disposal(&factors),
        FactorKind::All => {
            print_materials(&factors);
            println!();
            print_categories(&factors);
            println!();
            print_disposal(&factors);
        }
    }

    Ok(())
}

fn print_materials(factors: &eco_core::FactorTable) {
    println!("Material extraction factors (kg CO2e / kg):\n");
    let rows: Vec<Vec<String>> = factors
        .materials
        .iter()
        .map(|(name, factor)| vec![name.clone(), format!("{:.2}", factor)])
        .collect();
    print_table(&["MATERIAL", "FACTOR"], &rows);
}

fn print_categories(factors: &eco_core::FactorTable) {
    println!("Category factors (kg CO2e / kg, use phase per year):\n");
    let rows: Vec<Vec<String>> = factors
        .manufacturing
        .iter()
        .map(|(category, manufacturing)| {
            let use_phase = factors
                .use_phase
                .get(category)
                .or_else(|| factors.use_phase.get("default"))
                .copied()
                .unwrap_or(0.0);
            vec![
                category.clone(),
                format!("{:.2}", manufacturing),
                format!("{:.2}", use_phase),
            ]
        })
        .collect();
    print_table(&["CATEGORY", "MANUFACTURING", "USE_PHASE"], &rows);
}

fn print_disposal(factors: &eco_core::FactorTable) {
    println!("Disposal method factors (kg CO2e / kg):\n");
    let rows: Vec<Vec<String>> = factors
        .disposal
        .iter()
        .map(|(method, factor)| vec![method.clone(), format!("{:.2}", factor)])
        .collect();
    print_table(&["METHOD", "FACTOR"], &rows);

    println!("\nPredefined disposal scenarios:\n");
    let scenario_rows: Vec<Vec<String>> = disposal::predefined()
        .into_iter()
        .map(|(name, mix)| {
            let allocation = mix
                .fractions()
                .iter()
                .map(|(method, fraction)| format!("{} {:.0}%", method, fraction * 100.0))
                .collect::<Vec<_>>()
                .join(", ");
            vec![name.to_string(), allocation]
        })
        .collect();
    print_table(&["SCENARIO", "ALLOCATION"], &scenario_rows);
}

fn disposal_json(factors: &eco_core::FactorTable) -> serde_json::Value {
    json!({
        "disposal": factors.disposal,
        "scenarios": scenario_table(),
    })
}

/// The predefined scenario table as JSON, keyed by scenario name.
fn scenario_table() -> serde_json::Value {
    let mut scenarios = serde_json::Map::new();
    for (name, mix) in disposal::predefined() {
        scenarios.insert(
            name.to_string(),
            serde_json::to_value(mix.fractions()).unwrap_or_default(),
        );
    }
    serde_json::Value::Object(scenarios)
}
