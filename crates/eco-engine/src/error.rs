//! Error types for eco-engine
//!
//! These use the `LCA` prefix to avoid collisions with the non-fatal
//! diagnostic codes (`L001`-`L003` in `diagnostics`).

use thiserror::Error;

/// Engine error type
#[derive(Error, Debug)]
pub enum EngineError {
    /// LCA001: Analysis rejected before computation — no materials
    #[error("[LCA001] Product '{product}' has no materials")]
    EmptyMaterials { product: String },

    /// LCA002: Analysis rejected before computation — weight must be positive
    #[error("[LCA002] Product '{product}' has non-positive weight {weight_kg} kg")]
    NonPositiveWeight { product: String, weight_kg: f64 },

    /// LCA003: A material fraction is negative or not a number
    #[error("[LCA003] Product '{product}': material '{material}' has invalid fraction {fraction}")]
    InvalidFraction {
        product: String,
        material: String,
        fraction: f64,
    },

    /// LCA004: Material fractions sum to zero — nothing to normalize
    #[error("[LCA004] Product '{product}': material fractions sum to zero")]
    ZeroFractionSum { product: String },

    /// LCA005: Factor table lookup or disposal mix error
    #[error("[LCA005] {0}")]
    Factor(#[from] eco_core::CoreError),

    /// LCA006: The assembled flow graph is not acyclic
    #[error("[LCA006] Flow graph contains a cycle involving node '{node}'")]
    GraphCycle { node: String },
}

/// Result type alias for EngineError
pub type EngineResult<T> = Result<T, EngineError>;
