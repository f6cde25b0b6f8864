//! Shared utilities for CLI commands

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use eco_core::{Catalog, Config, FactorTable};
use eco_engine::{Diagnostic, ModelParams, Severity};
use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::cli::GlobalArgs;

/// Error type representing a non-zero process exit code.
///
/// Use `return Err(ExitCode(N).into())` instead of `std::process::exit(N)`
/// so that RAII destructors run and cleanup happens properly.
#[derive(Debug)]
pub(crate) struct ExitCode(pub(crate) i32);

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Intentionally empty: ExitCode is a control-flow mechanism, not a
        // user-facing error, so nothing should leak into stderr.
        write!(f, "")
    }
}

impl std::error::Error for ExitCode {}

/// The loaded project: config plus the root it was resolved against.
pub(crate) struct ProjectContext {
    pub root: PathBuf,
    pub config: Config,
}

/// Load the project config from global CLI arguments.
///
/// An explicit `--config` path wins over discovery in the project directory.
pub(crate) fn load_project(global: &GlobalArgs) -> Result<ProjectContext> {
    let root = PathBuf::from(&global.project_dir);
    let config = match &global.config {
        Some(path) => Config::load(Path::new(path)),
        None => Config::load_from_dir(&root),
    }
    .context("Failed to load project config")?;
    Ok(ProjectContext { root, config })
}

/// Load the factor table: the configured override file, or the built-in
/// catalog.
pub(crate) fn load_factors(project: &ProjectContext) -> Result<FactorTable> {
    match project.config.factor_table_absolute(&project.root) {
        Some(path) => FactorTable::load(&path)
            .with_context(|| format!("Failed to load factor table {}", path.display())),
        None => Ok(FactorTable::builtin()),
    }
}

/// Load the product catalog from the configured catalog paths.
pub(crate) fn load_catalog(project: &ProjectContext) -> Result<Catalog> {
    Catalog::load(&project.root, &project.config).context("Failed to load product catalog")
}

/// Lifecycle model constants from config.
pub(crate) fn model_params(config: &Config) -> ModelParams {
    ModelParams {
        transport_distance_km: config.model.transport_distance_km,
        lifetime_years: config.model.lifetime_years,
    }
}

/// Directory where analysis result files are written.
pub(crate) fn analyses_dir(project: &ProjectContext) -> PathBuf {
    project
        .config
        .target_path_absolute(&project.root)
        .join("analyses")
}

/// Path of the stored analysis result for a product.
pub(crate) fn analysis_path(project: &ProjectContext, product_id: &str) -> PathBuf {
    analyses_dir(project).join(format!("{}.json", product_id))
}

/// Generic wrapper for command results written to JSON.
///
/// Commands that process many products produce a JSON file with the same
/// envelope: a timestamp, an invocation id, elapsed seconds, success and
/// failure counts, and a vec of per-item results.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct CommandResults<T: Serialize> {
    pub timestamp: DateTime<Utc>,
    pub invocation_id: String,
    pub elapsed_secs: f64,
    pub success_count: usize,
    pub failure_count: usize,
    pub results: Vec<T>,
}

/// Serialize `data` as pretty-printed JSON and write it to `path`.
///
/// Creates any missing parent directories before writing.
pub(crate) fn write_json_results<T: Serialize + ?Sized>(path: &Path, data: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).context("Failed to create target directory")?;
    }
    let json = serde_json::to_string_pretty(data).context("Failed to serialize results")?;
    std::fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

/// Print engine diagnostics as `[severity] code: message` lines.
pub(crate) fn print_diagnostics(diagnostics: &[Diagnostic]) {
    for diagnostic in diagnostics {
        let subject = diagnostic
            .product
            .as_deref()
            .map(|p| format!("{}: ", p))
            .unwrap_or_default();
        eprintln!(
            "  [{}] {} {}{}",
            diagnostic.severity, diagnostic.code, subject, diagnostic.message
        );
        if let Some(hint) = &diagnostic.hint {
            eprintln!("          hint: {}", hint);
        }
    }
}

/// Whether any diagnostic is an error.
pub(crate) fn has_errors(diagnostics: &[Diagnostic]) -> bool {
    diagnostics.iter().any(|d| d.severity == Severity::Error)
}

// ---------------------------------------------------------------------------
// Table-printing utilities
// ---------------------------------------------------------------------------

/// Calculate column widths for a table given headers and row data.
pub(crate) fn calculate_column_widths(headers: &[&str], rows: &[Vec<String>]) -> Vec<usize> {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
    for row in rows {
        for (w, cell) in widths.iter_mut().zip(row.iter()) {
            *w = (*w).max(cell.len());
        }
    }
    widths
}

/// Print a formatted table to stdout.
///
/// Calculates column widths from `headers` and `rows`, then prints a
/// left-aligned header row, a separator line of dashes, and each data row.
/// Columns are separated by two spaces.
pub(crate) fn print_table(headers: &[&str], rows: &[Vec<String>]) {
    let widths = calculate_column_widths(headers, rows);

    let header_parts: Vec<String> = headers
        .iter()
        .zip(&widths)
        .map(|(h, &w)| format!("{:<width$}", h, width = w))
        .collect();
    println!("{}", header_parts.join("  "));

    let sep_parts: Vec<String> = widths.iter().map(|&w| "-".repeat(w)).collect();
    println!("{}", sep_parts.join("  "));

    for row in rows {
        let row_parts: Vec<String> = row
            .iter()
            .zip(&widths)
            .map(|(cell, &w)| format!("{:<width$}", cell, width = w))
            .collect();
        println!("{}", row_parts.join("  "));
    }
}

/// Format a kg CO2e quantity for table output.
pub(crate) fn format_kg(value: f64) -> String {
    format!("{:.4}", value)
}

#[cfg(test)]
#[path = "common_test.rs"]
mod tests;
