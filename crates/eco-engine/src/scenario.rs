//! Scenario recalculation.
//!
//! The client-side mirror of the end-of-life portion of the calculator:
//! given a previously computed result and a new disposal scenario, only the
//! end-of-life phase, the total, and the single `eol -> total` edge change.
//! The other four phases, every material detail, and the per-material
//! weight mapping are carried over from the original untouched, so repeated
//! scenario switches can never accumulate drift.

use crate::calculator::Analysis;
use crate::diagnostics::{codes, Diagnostic, Severity};
use crate::error::EngineResult;
use crate::graph::rebuild_eol_edge;
use crate::result::AnalysisResult;
use crate::rounding::round4;
use eco_core::{disposal, DisposalMix, FactorTable};

/// Selects the disposal mix for a calculation or recalculation: one of the
/// predefined named scenarios, or a custom validated mix.
#[derive(Debug, Clone)]
pub enum ScenarioSelector {
    /// A named scenario (`baseline`, `best_case`, `worst_case`)
    Named(String),
    /// A caller-supplied disposal mix
    Custom(DisposalMix),
}

/// Outcome of resolving a selector against the scenario table.
#[derive(Debug, Clone)]
pub struct ResolvedScenario {
    /// The disposal mix to apply
    pub mix: DisposalMix,
    /// Scenario label recorded in the result summary
    pub label: String,
    /// Set when an unknown name fell back to the baseline mix
    pub fallback: Option<Diagnostic>,
}

impl ScenarioSelector {
    /// Selector for a named scenario.
    pub fn from_name(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    /// The baseline selector.
    pub fn baseline() -> Self {
        Self::Named(disposal::BASELINE.to_string())
    }

    /// Resolve to a concrete mix.
    ///
    /// An unknown scenario name is not an error: it falls back to the
    /// baseline mix (a deliberate permissive policy) and reports a
    /// [`codes::SCENARIO_FALLBACK`] diagnostic so mistyped names stay
    /// observable.
    pub fn resolve(&self) -> ResolvedScenario {
        match self {
            Self::Named(name) => match disposal::named(name) {
                Some(mix) => ResolvedScenario {
                    mix,
                    label: name.clone(),
                    fallback: None,
                },
                None => ResolvedScenario {
                    mix: disposal::baseline(),
                    label: disposal::BASELINE.to_string(),
                    fallback: Some(
                        Diagnostic::new(
                            codes::SCENARIO_FALLBACK,
                            Severity::Warning,
                            format!(
                                "unknown disposal scenario '{}', using baseline",
                                name
                            ),
                        )
                        .with_hint(format!(
                            "valid scenarios: {}",
                            disposal::scenario_names().join(", ")
                        )),
                    ),
                },
            },
            Self::Custom(mix) => ResolvedScenario {
                mix: mix.clone(),
                label: "custom".to_string(),
                fallback: None,
            },
        }
    }
}

/// Re-derive an analysis under a different disposal scenario.
///
/// The input result is read-only; a new result is returned. Only the
/// end-of-life phase, the total, the scenario label, and the `eol -> total`
/// edge differ from the original. The end-of-life value is recomputed from
/// the original per-material weight mapping (never from fractions) using
/// the same blended-factor formula and rounding as the full calculator.
pub fn recalculate(
    factors: &FactorTable,
    original: &AnalysisResult,
    selector: &ScenarioSelector,
) -> EngineResult<Analysis> {
    let resolved = selector.resolve();
    let mut diagnostics = Vec::new();
    if let Some(fallback) = resolved.fallback {
        diagnostics.push(fallback);
    }

    let blended = factors.blended_disposal_factor(&resolved.mix)?;
    let end_of_life = round4(
        original
            .per_material_weights
            .values()
            .map(|weight| weight * blended)
            .sum::<f64>(),
    );

    let mut result = original.clone();
    result.summary.breakdown.end_of_life = end_of_life;
    result.summary.total_co2e_kg = round4(result.summary.breakdown.total());
    result.summary.eol_scenario = resolved.label;
    rebuild_eol_edge(&mut result.links, end_of_life);

    Ok(Analysis {
        result,
        diagnostics,
    })
}

#[cfg(test)]
#[path = "scenario_test.rs"]
mod tests;
