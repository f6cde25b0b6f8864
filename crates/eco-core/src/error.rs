//! Error types for eco-core

use thiserror::Error;

/// Core error type for EcoFlow
#[derive(Error, Debug)]
pub enum CoreError {
    /// E001: Configuration file not found
    #[error("[E001] Config file not found: {path}")]
    ConfigNotFound { path: String },

    /// E002: Invalid configuration value
    #[error("[E002] Invalid config: {message}")]
    ConfigInvalid { message: String },

    /// E003: Failed to parse a product file
    #[error("[E003] Failed to parse product file {path}: {details}")]
    ProductParseError { path: String, details: String },

    /// E004: Duplicate product id across catalog files
    #[error("[E004] Duplicate product id '{id}' in {path1} and {path2}")]
    DuplicateProduct {
        id: String,
        path1: String,
        path2: String,
    },

    /// E005: Product id not present in the catalog
    #[error("[E005] Product not found: {id}")]
    ProductNotFound { id: String },

    /// E006: Material key not present in the emission factor table.
    ///
    /// A silent zero or default here would corrupt the footprint total
    /// undetectably, so unresolvable materials are always fatal to the
    /// analysis that referenced them.
    #[error("[E006] Unknown material '{name}': not present in the emission factor table")]
    UnknownMaterial { name: String },

    /// E007: Product category not present in the emission factor table
    #[error("[E007] Unknown product category '{category}'")]
    UnknownCategory { category: String },

    /// E008: Disposal method not present in the emission factor table
    #[error("[E008] Unknown disposal method '{method}'")]
    UnknownDisposalMethod { method: String },

    /// E009: Disposal mix fractions are malformed
    #[error("[E009] Invalid disposal mix: {reason}")]
    InvalidDisposalMix { reason: String },

    /// E010: Factor table override file failed validation
    #[error("[E010] Invalid factor table: {message}")]
    InvalidFactorTable { message: String },

    /// E011: IO error
    #[error("[E011] IO error: {0}")]
    Io(#[from] std::io::Error),

    /// E012: IO error with file path context
    #[error("[E012] Failed to read '{path}': {source}")]
    IoWithPath {
        path: String,
        source: std::io::Error,
    },

    /// E013: YAML parse error
    #[error("[E013] YAML parse error: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for CoreError
pub type CoreResult<T> = Result<T, CoreError>;
