//! Init command implementation - scaffolds a new EcoFlow project

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::cli::InitArgs;

const SAMPLE_CONFIG: &str = r#"name: {name}
version: 1.0.0

# Directories scanned for product YAML files
catalog_paths:
  - products

# Where analysis results are written
target_path: target

# Lifecycle model constants
model:
  transport_distance_km: 5000
  lifetime_years: 5

# HTTP API settings for `eco serve`
server:
  host: 127.0.0.1
  port: 3000
  cache_ttl_secs: 86400
"#;

const SAMPLE_PRODUCT: &str = r#"id: B00KETTLE1
name: Electric Kettle
category: appliances
weight_kg: 1.2
materials:
  stainless steel: 0.6
  plastic: 0.3
  copper: 0.1
"#;

const GITIGNORE: &str = "target/\n";

/// Execute the init command
pub(crate) async fn execute(args: &InitArgs) -> Result<()> {
    // Reject names that could cause path traversal or confusing directory names
    if args.name.contains('/')
        || args.name.contains('\\')
        || args.name.contains("..")
        || args.name.starts_with('.')
        || args.name.starts_with('-')
    {
        anyhow::bail!(
            "Invalid project name '{}': must not contain '/', '\\', '..', or start with '.' or '-'",
            args.name
        );
    }

    let project_dir = Path::new(&args.name);

    if project_dir.exists() {
        anyhow::bail!(
            "Directory '{}' already exists. Choose a different project name.",
            args.name
        );
    }

    println!("Creating new EcoFlow project: {}\n", args.name);

    let products_dir = project_dir.join("products");
    fs::create_dir_all(&products_dir)
        .with_context(|| format!("Failed to create directory: {}", products_dir.display()))?;

    let config_path = project_dir.join("ecoflow.yml");
    fs::write(&config_path, SAMPLE_CONFIG.replace("{name}", &args.name))
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    println!("  created ecoflow.yml");

    let product_path = products_dir.join("electric_kettle.yml");
    fs::write(&product_path, SAMPLE_PRODUCT)
        .with_context(|| format!("Failed to write {}", product_path.display()))?;
    println!("  created products/electric_kettle.yml");

    fs::write(project_dir.join(".gitignore"), GITIGNORE)?;
    println!("  created .gitignore");

    println!(
        "\nDone. Next steps:\n  cd {}\n  eco analyze\n  eco scenario --product B00KETTLE1 --scenario best_case",
        args.name
    );

    Ok(())
}
