//! Material composition entry

use crate::material_name::MaterialName;
use serde::{Deserialize, Serialize};

/// One material in a product's composition: a canonical factor-table key
/// and the fraction of total product weight attributed to it.
///
/// Fractions across a product's material set sum to ≈1.0 (±0.01); the
/// calculator renormalizes defensively rather than assuming exactness.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    /// Canonical material key
    pub name: MaterialName,

    /// Fraction of total product weight in [0, 1]
    pub fraction: f64,
}

impl Material {
    /// Create a material entry.
    pub fn new(name: impl Into<String>, fraction: f64) -> Self {
        Self {
            name: MaterialName::new(name),
            fraction,
        }
    }
}
