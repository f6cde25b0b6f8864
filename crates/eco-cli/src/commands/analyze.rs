//! `eco analyze` command — compute lifecycle analyses for catalog products

use anyhow::{Context, Result};
use chrono::Utc;
use eco_engine::{calculate, ScenarioSelector};
use serde::Serialize;
use std::time::Instant;

use crate::cli::{AnalyzeArgs, GlobalArgs, OutputFormat};
use crate::commands::common::{
    self, analysis_path, format_kg, load_catalog, load_factors, load_project, model_params,
    print_diagnostics, print_table, write_json_results, CommandResults, ExitCode,
};

/// Per-product outcome recorded in the run envelope.
#[derive(Debug, Clone, Serialize)]
struct ProductOutcome {
    product: String,
    status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    total_co2e_kg: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    eol_scenario: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Execute the analyze command
pub(crate) async fn execute(args: &AnalyzeArgs, global: &GlobalArgs) -> Result<()> {
    let started = Instant::now();
    let project = load_project(global)?;
    let factors = load_factors(&project)?;
    let catalog = load_catalog(&project)?;
    let params = model_params(&project.config);

    let selected: Vec<String> = match &args.products {
        Some(list) => list.split(',').map(|s| s.trim().to_string()).collect(),
        None => catalog.product_ids().map(|id| id.to_string()).collect(),
    };

    if selected.is_empty() {
        println!("No products to analyze.");
        return Ok(());
    }

    let mut outcomes = Vec::with_capacity(selected.len());
    let mut analyses: Vec<(String, eco_engine::Analysis)> = Vec::new();

    for product_id in &selected {
        match analyze_one(product_id, &catalog, &factors, &params, args, &project) {
            Ok(analysis) => {
                if global.verbose {
                    eprintln!("[verbose] analyzed '{}'", product_id);
                }
                print_diagnostics(&analysis.diagnostics);
                outcomes.push(ProductOutcome {
                    product: product_id.clone(),
                    status: "success".to_string(),
                    total_co2e_kg: Some(analysis.result.summary.total_co2e_kg),
                    eol_scenario: Some(analysis.result.summary.eol_scenario.clone()),
                    error: None,
                });
                analyses.push((product_id.clone(), analysis));
            }
            Err(e) => {
                eprintln!("  [error] {}: {:#}", product_id, e);
                outcomes.push(ProductOutcome {
                    product: product_id.clone(),
                    status: "error".to_string(),
                    total_co2e_kg: None,
                    eol_scenario: None,
                    error: Some(format!("{:#}", e)),
                });
            }
        }
    }

    let success_count = analyses.len();
    let failure_count = outcomes.len() - success_count;

    match args.output {
        OutputFormat::Json => {
            let results: Vec<_> = analyses.iter().map(|(_, a)| &a.result).collect();
            println!("{}", serde_json::to_string_pretty(&results)?);
        }
        OutputFormat::Table => print_summary_table(&analyses),
    }

    if !args.no_write {
        let envelope = CommandResults {
            timestamp: Utc::now(),
            invocation_id: uuid::Uuid::new_v4().to_string(),
            elapsed_secs: started.elapsed().as_secs_f64(),
            success_count,
            failure_count,
            results: outcomes,
        };
        let envelope_path = project
            .config
            .target_path_absolute(&project.root)
            .join("analyze_results.json");
        write_json_results(&envelope_path, &envelope)?;
    }

    if failure_count > 0 {
        println!("\n{} of {} analyses failed", failure_count, selected.len());
        return Err(ExitCode(1).into());
    }

    Ok(())
}

/// Analyze a single product and persist its result file.
fn analyze_one(
    product_id: &str,
    catalog: &eco_core::Catalog,
    factors: &eco_core::FactorTable,
    params: &eco_engine::ModelParams,
    args: &AnalyzeArgs,
    project: &common::ProjectContext,
) -> Result<eco_engine::Analysis> {
    let spec = catalog.require(product_id)?;
    let input = spec.resolve(factors)?;

    // CLI flag wins over the per-product default from the catalog
    let scenario_name = args
        .scenario
        .as_deref()
        .or(spec.eol_scenario.as_deref())
        .unwrap_or(eco_core::disposal::BASELINE);
    let selector = ScenarioSelector::from_name(scenario_name);

    let analysis = calculate(factors, params, &input, &selector)?;

    if !args.no_write {
        let path = analysis_path(project, product_id);
        write_json_results(&path, &analysis.result)
            .with_context(|| format!("Failed to persist analysis for '{}'", product_id))?;
    }

    Ok(analysis)
}

/// Print one row per successful analysis.
fn print_summary_table(analyses: &[(String, eco_engine::Analysis)]) {
    if analyses.is_empty() {
        println!("No analyses computed.");
        return;
    }

    let rows: Vec<Vec<String>> = analyses
        .iter()
        .map(|(product_id, a)| {
            let s = &a.result.summary;
            vec![
                product_id.clone(),
                s.category.clone(),
                format!("{:.3}", s.weight_kg),
                format_kg(s.breakdown.materials),
                format_kg(s.breakdown.end_of_life),
                format_kg(s.total_co2e_kg),
                s.eol_scenario.clone(),
            ]
        })
        .collect();

    print_table(
        &[
            "PRODUCT",
            "CATEGORY",
            "WEIGHT_KG",
            "MATERIALS",
            "EOL",
            "TOTAL_CO2E",
            "SCENARIO",
        ],
        &rows,
    );
}
