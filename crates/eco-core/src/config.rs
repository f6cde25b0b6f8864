//! Configuration types and parsing for ecoflow.yml

use crate::error::{CoreError, CoreResult};
use crate::serde_helpers::default_true;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main project configuration from ecoflow.yml
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Project name
    pub name: String,

    /// Project version
    #[serde(default = "default_version")]
    pub version: String,

    /// Directories containing product YAML files
    #[serde(default = "default_catalog_paths")]
    pub catalog_paths: Vec<String>,

    /// Output directory for analysis results
    #[serde(default = "default_target_path")]
    pub target_path: String,

    /// Optional YAML file replacing the built-in emission factor table
    #[serde(default)]
    pub factor_table: Option<String>,

    /// Lifecycle model constants
    #[serde(default)]
    pub model: ModelConfig,

    /// HTTP server configuration for `eco serve`
    #[serde(default)]
    pub server: ServerConfig,
}

/// Lifecycle model constants, overridable per project.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelConfig {
    /// Assumed shipping distance in km (default 5000)
    #[serde(default = "default_transport_distance_km")]
    pub transport_distance_km: f64,

    /// Assumed product lifetime in years (default 5)
    #[serde(default = "default_lifetime_years")]
    pub lifetime_years: f64,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            transport_distance_km: default_transport_distance_km(),
            lifetime_years: default_lifetime_years(),
        }
    }
}

/// HTTP server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind host (default 127.0.0.1)
    #[serde(default = "default_host")]
    pub host: String,

    /// Bind port (default 3000)
    #[serde(default = "default_port")]
    pub port: u16,

    /// Whether the in-memory result cache is enabled (default: true)
    #[serde(default = "default_true")]
    pub cache_enabled: bool,

    /// Cache entry time-to-live in seconds (default 86400)
    #[serde(default = "default_cache_ttl_secs")]
    pub cache_ttl_secs: u64,

    /// Allowed CORS origins; empty allows any origin
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cache_enabled: true,
            cache_ttl_secs: default_cache_ttl_secs(),
            cors_origins: Vec::new(),
        }
    }
}

fn default_version() -> String {
    "1.0.0".to_string()
}

fn default_catalog_paths() -> Vec<String> {
    vec!["products".to_string()]
}

fn default_target_path() -> String {
    "target".to_string()
}

fn default_transport_distance_km() -> f64 {
    5000.0
}

fn default_lifetime_years() -> f64 {
    5.0
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_cache_ttl_secs() -> u64 {
    86_400
}

impl Config {
    /// Load configuration from a file path
    pub fn load(path: &Path) -> CoreResult<Self> {
        if !path.exists() {
            return Err(CoreError::ConfigNotFound {
                path: path.display().to_string(),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| CoreError::IoWithPath {
            path: path.display().to_string(),
            source: e,
        })?;
        let config: Config = serde_yaml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a project directory.
    /// Looks for ecoflow.yml or ecoflow.yaml.
    pub fn load_from_dir(dir: &Path) -> CoreResult<Self> {
        let yml_path = dir.join("ecoflow.yml");
        let yaml_path = dir.join("ecoflow.yaml");

        if yml_path.exists() {
            Self::load(&yml_path)
        } else if yaml_path.exists() {
            Self::load(&yaml_path)
        } else {
            Err(CoreError::ConfigNotFound {
                path: dir.join("ecoflow.yml").display().to_string(),
            })
        }
    }

    /// Validate the configuration
    fn validate(&self) -> CoreResult<()> {
        if self.name.is_empty() {
            return Err(CoreError::ConfigInvalid {
                message: "Project name cannot be empty".to_string(),
            });
        }

        if self.catalog_paths.is_empty() {
            return Err(CoreError::ConfigInvalid {
                message: "At least one catalog_paths entry must be specified".to_string(),
            });
        }

        if !self.model.transport_distance_km.is_finite() || self.model.transport_distance_km <= 0.0
        {
            return Err(CoreError::ConfigInvalid {
                message: format!(
                    "model.transport_distance_km must be positive, got {}",
                    self.model.transport_distance_km
                ),
            });
        }

        if !self.model.lifetime_years.is_finite() || self.model.lifetime_years <= 0.0 {
            return Err(CoreError::ConfigInvalid {
                message: format!(
                    "model.lifetime_years must be positive, got {}",
                    self.model.lifetime_years
                ),
            });
        }

        Ok(())
    }

    /// Resolve relative path strings to absolute paths against a root directory
    fn paths_absolute(paths: &[String], root: &Path) -> Vec<PathBuf> {
        paths.iter().map(|p| root.join(p)).collect()
    }

    /// Get absolute catalog paths relative to a project root
    pub fn catalog_paths_absolute(&self, root: &Path) -> Vec<PathBuf> {
        Self::paths_absolute(&self.catalog_paths, root)
    }

    /// Get absolute target path relative to a project root
    pub fn target_path_absolute(&self, root: &Path) -> PathBuf {
        root.join(&self.target_path)
    }

    /// Get the absolute factor table override path, if one is configured
    pub fn factor_table_absolute(&self, root: &Path) -> Option<PathBuf> {
        self.factor_table.as_ref().map(|p| root.join(p))
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
