//! The five-phase LCA calculator.
//!
//! Lifecycle phases:
//!   materials     — raw material extraction (cradle-to-gate)
//!   manufacturing — per-category factor on total weight
//!   transport     — distance-scaled factor on total weight
//!   use           — per-category factor over the product lifetime
//!   end_of_life   — blended disposal factor on per-material weights
//!
//! The total is the signed sum of all five phases; recycling-heavy disposal
//! mixes push `end_of_life` negative and lower the total.

use crate::diagnostics::{codes, Diagnostic, Severity};
use crate::error::{EngineError, EngineResult};
use crate::graph::{build_flow_graph, NEGLIGIBLE_FLOW_KG};
use crate::result::{AnalysisResult, MaterialDetail, PhaseBreakdown, Summary};
use crate::rounding::round4;
use crate::scenario::ScenarioSelector;
use eco_core::{FactorTable, ProductInput, TRANSPORT_FACTOR_PER_KKM};
use std::collections::BTreeMap;

/// Tolerance on the sum of material fractions before renormalization kicks in.
const FRACTION_SUM_TOLERANCE: f64 = 0.01;

/// Lifecycle model constants, overridable by the caller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelParams {
    /// Assumed shipping distance in km
    pub transport_distance_km: f64,

    /// Assumed product lifetime in years
    pub lifetime_years: f64,
}

impl Default for ModelParams {
    fn default() -> Self {
        Self {
            transport_distance_km: 5000.0,
            lifetime_years: 5.0,
        }
    }
}

/// A computed analysis plus the non-fatal conditions observed on the way.
#[derive(Debug, Clone)]
pub struct Analysis {
    /// The immutable result
    pub result: AnalysisResult,

    /// Non-fatal observability events (renormalization, scenario fallback)
    pub diagnostics: Vec<Diagnostic>,
}

/// Run the full LCA calculation for a resolved product.
///
/// Pure function: reads only its arguments and the read-only factor table.
/// Input is validated before any computation; fractions that do not sum to
/// 1.0 are rescaled by `1/Σ` under the documented best-estimate policy and
/// reported as a [`codes::NORMALIZED_FRACTIONS`] diagnostic rather than
/// rejected.
pub fn calculate(
    factors: &FactorTable,
    params: &ModelParams,
    input: &ProductInput,
    selector: &ScenarioSelector,
) -> EngineResult<Analysis> {
    let product = input.id.to_string();

    if input.materials.is_empty() {
        return Err(EngineError::EmptyMaterials { product });
    }
    if !input.weight_kg.is_finite() || input.weight_kg <= 0.0 {
        return Err(EngineError::NonPositiveWeight {
            product,
            weight_kg: input.weight_kg,
        });
    }
    for material in &input.materials {
        if !material.fraction.is_finite() || material.fraction < 0.0 {
            return Err(EngineError::InvalidFraction {
                product: product.clone(),
                material: material.name.to_string(),
                fraction: material.fraction,
            });
        }
    }

    let mut diagnostics = Vec::new();

    let fraction_sum: f64 = input.materials.iter().map(|m| m.fraction).sum();
    if fraction_sum <= 0.0 {
        return Err(EngineError::ZeroFractionSum { product });
    }
    let scale = if (fraction_sum - 1.0).abs() > FRACTION_SUM_TOLERANCE {
        diagnostics.push(
            Diagnostic::new(
                codes::NORMALIZED_FRACTIONS,
                Severity::Warning,
                format!(
                    "material fractions sum to {:.4}, rescaled to 1.0",
                    fraction_sum
                ),
            )
            .with_product(&product),
        );
        1.0 / fraction_sum
    } else {
        1.0
    };

    let resolved = selector.resolve();
    if let Some(fallback) = resolved.fallback {
        diagnostics.push(fallback.with_product(&product));
    }

    // Per-material weights and extraction impacts
    let weight = input.weight_kg;
    let mut material_details = Vec::with_capacity(input.materials.len());
    let mut per_material_weights = BTreeMap::new();
    let mut materials_phase = 0.0;

    for material in &input.materials {
        let fraction = material.fraction * scale;
        let material_weight = weight * fraction;
        let factor = factors.material_factor(material.name.as_str())?;
        let impact = material_weight * factor;
        materials_phase += impact;

        // Accumulate rather than insert: a repeated material name must not
        // drop mass from the end-of-life basis
        *per_material_weights
            .entry(material.name.to_string())
            .or_insert(0.0) += material_weight;
        material_details.push(MaterialDetail {
            name: material.name.clone(),
            fraction,
            weight_kg: round4(material_weight),
            impact_kg_co2e: round4(impact),
            factor,
        });
    }
    for weight_entry in per_material_weights.values_mut() {
        *weight_entry = round4(*weight_entry);
    }

    let manufacturing = weight * factors.manufacturing_factor(&input.category)?;
    let transport = weight * TRANSPORT_FACTOR_PER_KKM * (params.transport_distance_km / 1000.0);
    let use_phase =
        weight * factors.use_phase_factor(&input.category)? * params.lifetime_years;

    // End of life is applied per material weight, using the same emitted
    // (rounded) weights the scenario recalculator will read back, so the
    // two paths agree bit-for-bit.
    let blended = factors.blended_disposal_factor(&resolved.mix)?;
    let end_of_life: f64 = per_material_weights.values().map(|w| w * blended).sum();

    let breakdown = PhaseBreakdown {
        materials: round4(materials_phase),
        manufacturing: round4(manufacturing),
        transport: round4(transport),
        use_phase: round4(use_phase),
        end_of_life: round4(end_of_life),
    };
    let total = round4(breakdown.total());

    let graph = build_flow_graph(&material_details, &breakdown)?;

    // One link per material plus one per phase when nothing is filtered
    let omitted = material_details.len() + 5 - graph.links.len();
    if omitted > 0 {
        diagnostics.push(
            Diagnostic::new(
                codes::NEGLIGIBLE_FLOW,
                Severity::Info,
                format!(
                    "{} negligible flows (<= {} kg CO2e) omitted from the flow graph",
                    omitted, NEGLIGIBLE_FLOW_KG
                ),
            )
            .with_product(&product),
        );
    }

    let result = AnalysisResult {
        nodes: graph.nodes,
        links: graph.links,
        summary: Summary {
            total_co2e_kg: total,
            breakdown,
            weight_kg: weight,
            category: input.category.clone(),
            eol_scenario: resolved.label,
        },
        per_material_weights,
        material_details,
    };

    Ok(Analysis {
        result,
        diagnostics,
    })
}

#[cfg(test)]
#[path = "calculator_test.rs"]
mod tests;
