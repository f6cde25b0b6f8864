//! `eco scenario` command — client-side recalculation of a stored analysis.
//!
//! Reads a previously written analysis result and re-derives the
//! end-of-life phase and the total under a different disposal scenario,
//! without touching the catalog or recomputing anything else. This is the
//! same code path a remote client runs against cached results.

use anyhow::{Context, Result};
use eco_core::DisposalMix;
use eco_engine::{recalculate, AnalysisResult, ScenarioSelector};
use std::path::Path;

use crate::cli::{GlobalArgs, OutputFormat, ScenarioArgs};
use crate::commands::common::{
    analysis_path, analyses_dir, format_kg, load_factors, load_project, print_diagnostics,
    print_table, write_json_results,
};

/// Execute the scenario command
pub(crate) async fn execute(args: &ScenarioArgs, global: &GlobalArgs) -> Result<()> {
    let project = load_project(global)?;
    let factors = load_factors(&project)?;

    let stored_path = analysis_path(&project, &args.product);
    let original = read_analysis(&stored_path)?;

    let selector = build_selector(args)?;
    let recalc = recalculate(&factors, &original, &selector)?;
    print_diagnostics(&recalc.diagnostics);

    match args.output {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&recalc.result)?);
        }
        OutputFormat::Table => print_comparison(&original, &recalc.result),
    }

    if args.write {
        let label = &recalc.result.summary.eol_scenario;
        let path = analyses_dir(&project).join(format!("{}.{}.json", args.product, label));
        write_json_results(&path, &recalc.result)?;
        println!("\nWrote {}", path.display());
    }

    Ok(())
}

/// Read a stored analysis result from disk.
fn read_analysis(path: &Path) -> Result<AnalysisResult> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "No stored analysis at {} (run `eco analyze` first)",
            path.display()
        )
    })?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse stored analysis {}", path.display()))
}

/// Build the scenario selector from CLI arguments.
fn build_selector(args: &ScenarioArgs) -> Result<ScenarioSelector> {
    if let Some(mix_path) = &args.mix {
        let content = std::fs::read_to_string(mix_path)
            .with_context(|| format!("Failed to read mix file {}", mix_path))?;
        let mix: DisposalMix = serde_yaml::from_str(&content)
            .with_context(|| format!("Invalid disposal mix in {}", mix_path))?;
        return Ok(ScenarioSelector::Custom(mix));
    }
    let name = args.scenario.as_deref().unwrap_or(eco_core::disposal::BASELINE);
    Ok(ScenarioSelector::from_name(name))
}

/// Print a before/after comparison of the two results.
fn print_comparison(original: &AnalysisResult, recalc: &AnalysisResult) {
    let before = &original.summary;
    let after = &recalc.summary;

    let phase_rows = [
        ("materials", before.breakdown.materials, after.breakdown.materials),
        (
            "manufacturing",
            before.breakdown.manufacturing,
            after.breakdown.manufacturing,
        ),
        ("transport", before.breakdown.transport, after.breakdown.transport),
        ("use", before.breakdown.use_phase, after.breakdown.use_phase),
        (
            "end_of_life",
            before.breakdown.end_of_life,
            after.breakdown.end_of_life,
        ),
        ("total", before.total_co2e_kg, after.total_co2e_kg),
    ];

    let rows: Vec<Vec<String>> = phase_rows
        .iter()
        .map(|(phase, b, a)| {
            vec![
                phase.to_string(),
                format_kg(*b),
                format_kg(*a),
                format_kg(a - b),
            ]
        })
        .collect();

    println!(
        "Scenario: {} -> {}\n",
        before.eol_scenario, after.eol_scenario
    );
    let before_header = format!("{} (KG)", before.eol_scenario.to_uppercase());
    let after_header = format!("{} (KG)", after.eol_scenario.to_uppercase());
    print_table(
        &["PHASE", before_header.as_str(), after_header.as_str(), "DELTA"],
        &rows,
    );
}
