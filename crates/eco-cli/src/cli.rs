//! CLI argument definitions using clap derive API

use clap::{Args, Parser, Subcommand, ValueEnum};

/// EcoFlow - cradle-to-grave carbon footprint analysis for consumer products
#[derive(Parser, Debug)]
#[command(name = "eco")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Global options
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Global arguments available to all commands
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to project directory
    #[arg(short = 'p', long, global = true, default_value = ".")]
    pub project_dir: String,

    /// Override config file path
    #[arg(short, long, global = true)]
    pub config: Option<String>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scaffold a new EcoFlow project
    Init(InitArgs),

    /// Compute lifecycle analyses for catalog products
    Analyze(AnalyzeArgs),

    /// Re-derive a stored analysis under a different disposal scenario
    Scenario(ScenarioArgs),

    /// List emission factors and disposal scenarios
    Factors(FactorsArgs),

    /// Validate catalog products against the factor table
    Validate(ValidateArgs),

    /// Serve the analysis HTTP API
    Serve(ServeArgs),
}

/// Output formats shared by several commands
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable table
    Table,
    /// JSON output
    Json,
}

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Name of the project directory to create
    pub name: String,
}

/// Arguments for the analyze command
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Product ids to analyze (comma-separated, default: all)
    #[arg(long)]
    pub products: Option<String>,

    /// Disposal scenario override (baseline, best_case, worst_case)
    #[arg(short, long)]
    pub scenario: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub output: OutputFormat,

    /// Skip writing result files to the target directory
    #[arg(long)]
    pub no_write: bool,
}

/// Arguments for the scenario command
#[derive(Args, Debug)]
pub struct ScenarioArgs {
    /// Product id whose stored analysis to re-derive
    #[arg(long)]
    pub product: String,

    /// Named disposal scenario to apply
    #[arg(short, long, conflicts_with = "mix")]
    pub scenario: Option<String>,

    /// Path to a YAML file with a custom disposal mix (method -> fraction)
    #[arg(long, conflicts_with = "scenario")]
    pub mix: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub output: OutputFormat,

    /// Write the re-derived result next to the original
    #[arg(long)]
    pub write: bool,
}

/// Factor table sections for the factors command
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FactorKind {
    /// Material extraction factors
    Materials,
    /// Manufacturing and use-phase factors by category
    Categories,
    /// Disposal method factors and predefined scenarios
    Disposal,
    /// Everything
    All,
}

/// Arguments for the factors command
#[derive(Args, Debug)]
pub struct FactorsArgs {
    /// Which section of the factor table to list
    #[arg(short, long, value_enum, default_value = "all")]
    pub kind: FactorKind,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub output: OutputFormat,
}

/// Arguments for the validate command
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub output: OutputFormat,
}

/// Arguments for the serve command
#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Override the bind host from config
    #[arg(long)]
    pub host: Option<String>,

    /// Override the bind port from config
    #[arg(long)]
    pub port: Option<u16>,
}

#[cfg(test)]
#[path = "cli_test.rs"]
mod tests;
