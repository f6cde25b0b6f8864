use super::*;
use clap::CommandFactory;

#[test]
fn verify_cli_args() {
    // Validates the entire command tree: short flag conflicts,
    // duplicate args, and other clap definition errors.
    Cli::command().debug_assert();
}

#[test]
fn test_parse_analyze() {
    let cli = Cli::parse_from([
        "eco",
        "analyze",
        "--products",
        "B000AAA,B000BBB",
        "--scenario",
        "best_case",
        "--output",
        "json",
    ]);
    match cli.command {
        Commands::Analyze(args) => {
            assert_eq!(args.products.as_deref(), Some("B000AAA,B000BBB"));
            assert_eq!(args.scenario.as_deref(), Some("best_case"));
            assert_eq!(args.output, OutputFormat::Json);
            assert!(!args.no_write);
        }
        other => panic!("expected analyze, got {other:?}"),
    }
}

#[test]
fn test_parse_scenario_named() {
    let cli = Cli::parse_from([
        "eco", "scenario", "--product", "B000AAA", "--scenario", "worst_case", "--write",
    ]);
    match cli.command {
        Commands::Scenario(args) => {
            assert_eq!(args.product, "B000AAA");
            assert_eq!(args.scenario.as_deref(), Some("worst_case"));
            assert!(args.mix.is_none());
            assert!(args.write);
        }
        other => panic!("expected scenario, got {other:?}"),
    }
}

#[test]
fn test_scenario_and_mix_conflict() {
    let result = Cli::try_parse_from([
        "eco", "scenario", "--product", "X", "--scenario", "baseline", "--mix", "mix.yml",
    ]);
    assert!(result.is_err());
}

#[test]
fn test_global_project_dir() {
    let cli = Cli::parse_from(["eco", "-p", "/tmp/proj", "validate"]);
    assert_eq!(cli.global.project_dir, "/tmp/proj");
}
