//! Product specifications.
//!
//! A [`ProductSpec`] is the on-disk YAML description of a product, the
//! stand-in for whatever upstream extraction step produced the composition.
//! Resolving a spec against the factor table yields a [`ProductInput`], the
//! canonical input the calculation engine consumes.

use crate::alias;
use crate::error::{CoreError, CoreResult};
use crate::factors::FactorTable;
use crate::material::Material;
use crate::product_id::ProductId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// A product description as stored in a catalog file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProductSpec {
    /// Opaque product identifier (catalog/cache/persistence key)
    pub id: ProductId,

    /// Optional human-readable product name
    #[serde(default)]
    pub name: Option<String>,

    /// Product category (must resolve in the factor table)
    pub category: String,

    /// Total product weight in kilograms
    pub weight_kg: f64,

    /// Raw material name -> mass fraction (sums to ≈1.0)
    pub materials: BTreeMap<String, f64>,

    /// Disposal scenario to apply by default (baseline when omitted)
    #[serde(default)]
    pub eol_scenario: Option<String>,
}

impl ProductSpec {
    /// Parse a product spec from a YAML file.
    pub fn from_yaml_file(path: &Path) -> CoreResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| CoreError::IoWithPath {
            path: path.display().to_string(),
            source: e,
        })?;
        serde_yaml::from_str(&content).map_err(|e| CoreError::ProductParseError {
            path: path.display().to_string(),
            details: e.to_string(),
        })
    }

    /// Human-readable display name: the `name` field, or the id.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(self.id.as_str())
    }

    /// Resolve raw material names into canonical engine input.
    ///
    /// Unknown materials (after alias folding) are a hard error here,
    /// before any computation starts.
    pub fn resolve(&self, table: &FactorTable) -> CoreResult<ProductInput> {
        let materials = alias::resolve_materials(&self.materials, table)?;
        Ok(ProductInput {
            id: self.id.clone(),
            category: self.category.clone(),
            weight_kg: self.weight_kg,
            materials,
        })
    }
}

/// Canonical calculation input: the `(category, weight, materials)` triple
/// the engine consumes, with materials already resolved to factor-table
/// keys.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductInput {
    /// Product identifier
    pub id: ProductId,

    /// Product category
    pub category: String,

    /// Total product weight in kilograms
    pub weight_kg: f64,

    /// Canonical materials with mass fractions
    pub materials: Vec<Material>,
}

#[cfg(test)]
#[path = "product_test.rs"]
mod tests;
