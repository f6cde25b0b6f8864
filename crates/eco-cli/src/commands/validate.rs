//! `eco validate` command — check catalog products against the factor table.
//!
//! Catches the conditions that would fail (or silently skew) an analysis
//! before any computation runs: unknown materials and categories,
//! non-positive weights, fraction sums off by more than the tolerance, and
//! mistyped scenario names.

use anyhow::Result;
use eco_core::{alias, disposal, ProductSpec};
use eco_engine::{Diagnostic, Severity};

use crate::cli::{GlobalArgs, OutputFormat, ValidateArgs};
use crate::commands::common::{
    has_errors, load_catalog, load_factors, load_project, print_table, ExitCode,
};

/// V001: material does not resolve against the factor table
const UNKNOWN_MATERIAL: &str = "V001";
/// V002: category missing from the manufacturing factors
const UNKNOWN_CATEGORY: &str = "V002";
/// V003: material fractions do not sum to 1.0 within tolerance
const FRACTION_SUM: &str = "V003";
/// V004: weight must be positive
const NON_POSITIVE_WEIGHT: &str = "V004";
/// V005: eol_scenario is not a predefined scenario name
const UNKNOWN_SCENARIO: &str = "V005";

/// Tolerance on the sum of material fractions, matching the calculator.
const FRACTION_SUM_TOLERANCE: f64 = 0.01;

/// Execute the validate command
pub(crate) async fn execute(args: &ValidateArgs, global: &GlobalArgs) -> Result<()> {
    let project = load_project(global)?;
    let factors = load_factors(&project)?;
    let catalog = load_catalog(&project)?;

    let mut diagnostics = Vec::new();
    for entry in catalog.entries() {
        check_product(&entry.spec, &factors, &mut diagnostics);
    }

    match args.output {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&diagnostics)?),
        OutputFormat::Table => print_report(catalog.len(), &diagnostics),
    }

    if has_errors(&diagnostics) {
        return Err(ExitCode(1).into());
    }
    Ok(())
}

/// Collect diagnostics for a single product spec.
fn check_product(spec: &ProductSpec, factors: &eco_core::FactorTable, out: &mut Vec<Diagnostic>) {
    let product = spec.id.as_str();

    if !spec.weight_kg.is_finite() || spec.weight_kg <= 0.0 {
        out.push(
            Diagnostic::new(
                NON_POSITIVE_WEIGHT,
                Severity::Error,
                format!("weight_kg must be positive, got {}", spec.weight_kg),
            )
            .with_product(product),
        );
    }

    for name in spec.materials.keys() {
        if alias::resolve_name(name, factors).is_none() {
            out.push(
                Diagnostic::new(
                    UNKNOWN_MATERIAL,
                    Severity::Error,
                    format!("material '{}' does not resolve to a factor table key", name),
                )
                .with_product(product)
                .with_hint("use a canonical key or a known alias (see `eco factors`)"),
            );
        }
    }

    if factors.manufacturing_factor(&spec.category).is_err() {
        out.push(
            Diagnostic::new(
                UNKNOWN_CATEGORY,
                Severity::Error,
                format!("unknown category '{}'", spec.category),
            )
            .with_product(product),
        );
    }

    let fraction_sum: f64 = spec.materials.values().sum();
    if (fraction_sum - 1.0).abs() > FRACTION_SUM_TOLERANCE {
        out.push(
            Diagnostic::new(
                FRACTION_SUM,
                Severity::Warning,
                format!(
                    "material fractions sum to {:.4}; the calculator will rescale them",
                    fraction_sum
                ),
            )
            .with_product(product),
        );
    }

    if let Some(scenario) = &spec.eol_scenario {
        if disposal::named(scenario).is_none() {
            out.push(
                Diagnostic::new(
                    UNKNOWN_SCENARIO,
                    Severity::Warning,
                    format!(
                        "eol_scenario '{}' is not predefined; analyses will fall back to baseline",
                        scenario
                    ),
                )
                .with_product(product)
                .with_hint(format!(
                    "valid scenarios: {}",
                    disposal::scenario_names().join(", ")
                )),
            );
        }
    }
}

/// Print diagnostics as a table plus a summary line.
fn print_report(product_count: usize, diagnostics: &[Diagnostic]) {
    if diagnostics.is_empty() {
        println!("{} products validated, no issues found.", product_count);
        return;
    }

    let rows: Vec<Vec<String>> = diagnostics
        .iter()
        .map(|d| {
            vec![
                d.product.clone().unwrap_or_default(),
                d.severity.to_string(),
                d.code.clone(),
                d.message.clone(),
            ]
        })
        .collect();
    print_table(&["PRODUCT", "SEVERITY", "CODE", "MESSAGE"], &rows);

    let errors = diagnostics
        .iter()
        .filter(|d| d.severity == Severity::Error)
        .count();
    let warnings = diagnostics
        .iter()
        .filter(|d| d.severity == Severity::Warning)
        .count();
    println!(
        "\n{} diagnostics ({} errors, {} warnings) across {} products",
        diagnostics.len(),
        errors,
        warnings,
        product_count
    );
}
