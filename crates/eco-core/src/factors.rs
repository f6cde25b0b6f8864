//! Emission factor reference data.
//!
//! The factor table is process-wide immutable reference data: built once at
//! startup (either from the built-in catalog or a YAML override file) and
//! read-only thereafter. Every lookup of an unknown key is an error; a
//! silent zero would corrupt the footprint total undetectably.
//!
//! Units: kg CO2e per kg of material (cradle-to-gate) unless noted.
//! Sources for the built-in values: ecoinvent 3.9, EPA WARM, Carbon
//! Footprint Ltd, peer-reviewed LCA literature.

use crate::disposal::{self, DisposalMix};
use crate::error::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Transport emission factor: kg CO2e per kg of product per 1000 km shipped.
pub const TRANSPORT_FACTOR_PER_KKM: f64 = 0.1;

/// Material extraction factors (kg CO2e / kg, cradle-to-gate).
///
/// Negative values are sequestration credits for grown materials.
const MATERIAL_FACTORS: &[(&str, f64)] = &[
    // Plastics
    ("hdpe", 2.6),
    ("ldpe", 2.9),
    ("pp", 1.95),
    ("pet", 3.12),
    ("pvc", 3.1),
    ("abs", 3.55),
    ("polycarbonate", 5.5),
    ("polystyrene", 3.4),
    ("nylon", 9.0),
    ("acrylic", 5.2),
    ("polyurethane", 4.2),
    ("silicone", 6.0),
    ("epoxy", 5.8),
    ("eva", 2.8),
    ("tpu", 4.0),
    // Metals
    ("steel", 2.0),
    ("recycled_steel", 0.7),
    ("aluminum", 14.8),
    ("recycled_aluminum", 1.7),
    ("copper", 4.0),
    ("zinc", 3.1),
    ("tin", 16.0),
    ("brass", 3.5),
    ("stainless_steel", 6.15),
    ("titanium", 35.0),
    ("nickel", 12.0),
    // Natural / organic
    ("cotton", 6.5),
    ("wool", 17.0),
    ("leather", 17.0),
    ("silk", 30.0),
    ("softwood", -1.5),
    ("hardwood", -1.2),
    ("bamboo", -1.0),
    ("natural_rubber", 3.0),
    ("cork", -1.5),
    ("jute", 0.5),
    // Minerals / ceramics
    ("glass", 1.25),
    ("concrete", 0.13),
    ("ceramic", 0.7),
    ("clay", 0.3),
    ("stone", 0.7),
    // Paper / packaging
    ("cardboard", 1.3),
    ("paper", 1.1),
    ("recycled_paper", 0.7),
    // Composites / other
    ("carbon_fiber", 30.0),
    ("fiberglass", 8.0),
    ("polyester_fabric", 5.5),
    ("acetal", 3.8),
    ("ptfe", 10.0),
    ("lithium_ion_battery", 12.5),
];

/// Manufacturing factors (kg CO2e / kg of product, by product category).
const MANUFACTURING_FACTORS: &[(&str, f64)] = &[
    ("electronics", 3.0),
    ("appliances", 2.0),
    ("furniture", 1.0),
    ("clothing", 2.5),
    ("toys", 1.5),
    ("automotive", 2.5),
    ("sports", 1.5),
    ("kitchen", 1.8),
    ("tools", 2.0),
    ("beauty", 1.0),
    ("office", 1.2),
    ("garden", 1.2),
    ("pet", 1.0),
    ("default", 1.5),
];

/// Use-phase factors (kg CO2e / kg / year).
///
/// Only powered categories differ meaningfully; everything else carries the
/// small `default` factor for cleaning, consumables, and the like.
const USE_PHASE_FACTORS: &[(&str, f64)] = &[
    ("electronics", 2.0),
    ("appliances", 3.0),
    ("default", 0.1),
];

/// End-of-life disposal method factors (kg CO2e / kg).
///
/// Recycling is negative: an emission credit for displaced virgin material.
const DISPOSAL_FACTORS: &[(&str, f64)] = &[
    ("landfill", 0.5),
    ("incineration", 1.0),
    ("recycling", -0.3),
];

/// The emission factor table.
///
/// Loaded once at process start and read-only afterwards. All maps are
/// keyed by canonical lowercase names.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FactorTable {
    /// Material key -> extraction factor (kg CO2e / kg)
    pub materials: BTreeMap<String, f64>,

    /// Product category -> manufacturing factor (kg CO2e / kg)
    pub manufacturing: BTreeMap<String, f64>,

    /// Product category -> use-phase factor (kg CO2e / kg / year)
    pub use_phase: BTreeMap<String, f64>,

    /// Disposal method -> end-of-life factor (kg CO2e / kg)
    pub disposal: BTreeMap<String, f64>,
}

impl FactorTable {
    /// Build the built-in factor table.
    pub fn builtin() -> Self {
        let to_map = |entries: &[(&str, f64)]| {
            entries
                .iter()
                .map(|(k, v)| (k.to_string(), *v))
                .collect::<BTreeMap<String, f64>>()
        };
        Self {
            materials: to_map(MATERIAL_FACTORS),
            manufacturing: to_map(MANUFACTURING_FACTORS),
            use_phase: to_map(USE_PHASE_FACTORS),
            disposal: to_map(DISPOSAL_FACTORS),
        }
    }

    /// Load a factor table override from a YAML file.
    ///
    /// The file replaces the built-in table wholesale; the loaded table is
    /// validated before use and immutable afterwards.
    pub fn load(path: &Path) -> CoreResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| CoreError::IoWithPath {
            path: path.display().to_string(),
            source: e,
        })?;
        let table: FactorTable = serde_yaml::from_str(&content)?;
        table.validate()?;
        Ok(table)
    }

    /// Validate the table: no empty sections, finite values, and every
    /// disposal method referenced by the predefined scenarios resolvable.
    pub fn validate(&self) -> CoreResult<()> {
        let sections: [(&str, &BTreeMap<String, f64>); 4] = [
            ("materials", &self.materials),
            ("manufacturing", &self.manufacturing),
            ("use_phase", &self.use_phase),
            ("disposal", &self.disposal),
        ];
        for (name, map) in sections {
            if map.is_empty() {
                return Err(CoreError::InvalidFactorTable {
                    message: format!("section '{}' must not be empty", name),
                });
            }
            if let Some((key, value)) = map.iter().find(|(_, v)| !v.is_finite()) {
                return Err(CoreError::InvalidFactorTable {
                    message: format!("non-finite factor {} for '{}' in '{}'", value, key, name),
                });
            }
        }

        for (scenario, mix) in disposal::predefined() {
            for method in mix.fractions().keys() {
                if !self.disposal.contains_key(method) {
                    return Err(CoreError::InvalidFactorTable {
                        message: format!(
                            "scenario '{}' references disposal method '{}' missing from the table",
                            scenario, method
                        ),
                    });
                }
            }
        }

        Ok(())
    }

    /// Whether a canonical material key is present.
    pub fn has_material(&self, name: &str) -> bool {
        self.materials.contains_key(name)
    }

    /// Extraction factor for a material (kg CO2e / kg).
    pub fn material_factor(&self, name: &str) -> CoreResult<f64> {
        self.materials
            .get(name)
            .copied()
            .ok_or_else(|| CoreError::UnknownMaterial {
                name: name.to_string(),
            })
    }

    /// Manufacturing factor for a product category (kg CO2e / kg).
    pub fn manufacturing_factor(&self, category: &str) -> CoreResult<f64> {
        self.manufacturing
            .get(category)
            .copied()
            .ok_or_else(|| CoreError::UnknownCategory {
                category: category.to_string(),
            })
    }

    /// Use-phase factor for a product category (kg CO2e / kg / year).
    ///
    /// Categories without a dedicated use-phase entry fall back to the
    /// table's `default` row; a category unknown to the manufacturing
    /// section is still an error there, so this fallback never masks a
    /// typo across the whole analysis.
    pub fn use_phase_factor(&self, category: &str) -> CoreResult<f64> {
        if let Some(v) = self.use_phase.get(category) {
            return Ok(*v);
        }
        self.use_phase
            .get("default")
            .copied()
            .ok_or_else(|| CoreError::UnknownCategory {
                category: category.to_string(),
            })
    }

    /// End-of-life factor for a disposal method (kg CO2e / kg).
    pub fn disposal_factor(&self, method: &str) -> CoreResult<f64> {
        self.disposal
            .get(method)
            .copied()
            .ok_or_else(|| CoreError::UnknownDisposalMethod {
                method: method.to_string(),
            })
    }

    /// Blended end-of-life factor for a disposal mix:
    /// `Σ_method (mix_fraction × method_factor)`.
    ///
    /// This is the one implementation shared by the full calculator and the
    /// scenario recalculator.
    pub fn blended_disposal_factor(&self, mix: &DisposalMix) -> CoreResult<f64> {
        let mut blended = 0.0;
        for (method, fraction) in mix.fractions() {
            blended += fraction * self.disposal_factor(method)?;
        }
        Ok(blended)
    }

}

impl Default for FactorTable {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
#[path = "factors_test.rs"]
mod tests;
