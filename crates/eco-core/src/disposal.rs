//! Disposal mixes and the predefined end-of-life scenarios.
//!
//! The three named scenarios and their fractions are part of the wire
//! contract: every implementation of the engine (and any client performing
//! local recalculation) must use exactly these constants, so they live here
//! and nowhere else.

use crate::error::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Name of the default scenario applied when none is requested.
pub const BASELINE: &str = "baseline";

/// Name of the high-recycling scenario.
pub const BEST_CASE: &str = "best_case";

/// Name of the no-recycling scenario.
pub const WORST_CASE: &str = "worst_case";

/// Predefined scenario fractions, method -> fraction.
const SCENARIOS: &[(&str, &[(&str, f64)])] = &[
    (
        BASELINE,
        &[("landfill", 0.6), ("incineration", 0.2), ("recycling", 0.2)],
    ),
    (
        BEST_CASE,
        &[("landfill", 0.1), ("incineration", 0.1), ("recycling", 0.8)],
    ),
    (
        WORST_CASE,
        &[("landfill", 0.8), ("incineration", 0.2), ("recycling", 0.0)],
    ),
];

/// Tolerance on the sum of mix fractions.
const MIX_SUM_TOLERANCE: f64 = 0.01;

/// Fractional allocation of a product's end-of-life handling across
/// disposal methods.
///
/// Fractions are validated at construction: each in `[0, 1]`, summing to
/// 1.0 within tolerance. The mapping is open: any method key is accepted
/// here, and resolution against the factor table happens at lookup time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisposalMix(BTreeMap<String, f64>);

impl DisposalMix {
    /// Validate and wrap a method -> fraction mapping.
    pub fn new(fractions: BTreeMap<String, f64>) -> CoreResult<Self> {
        if fractions.is_empty() {
            return Err(CoreError::InvalidDisposalMix {
                reason: "mix must name at least one disposal method".to_string(),
            });
        }
        for (method, fraction) in &fractions {
            if !fraction.is_finite() || *fraction < 0.0 || *fraction > 1.0 {
                return Err(CoreError::InvalidDisposalMix {
                    reason: format!(
                        "fraction {} for method '{}' must be in [0, 1]",
                        fraction, method
                    ),
                });
            }
        }
        let sum: f64 = fractions.values().sum();
        if (sum - 1.0).abs() > MIX_SUM_TOLERANCE {
            return Err(CoreError::InvalidDisposalMix {
                reason: format!("fractions sum to {}, expected 1.0", sum),
            });
        }
        Ok(Self(fractions))
    }

    /// The method -> fraction mapping.
    pub fn fractions(&self) -> &BTreeMap<String, f64> {
        &self.0
    }
}

impl<'de> Deserialize<'de> for DisposalMix {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let fractions = BTreeMap::<String, f64>::deserialize(deserializer)?;
        DisposalMix::new(fractions).map_err(serde::de::Error::custom)
    }
}

/// Build a mix from known-valid constant pairs.
fn from_pairs(pairs: &[(&str, f64)]) -> DisposalMix {
    DisposalMix(
        pairs
            .iter()
            .map(|(method, fraction)| (method.to_string(), *fraction))
            .collect(),
    )
}

/// The baseline disposal mix.
pub fn baseline() -> DisposalMix {
    from_pairs(SCENARIOS[0].1)
}

/// Look up a predefined scenario by name.
pub fn named(name: &str) -> Option<DisposalMix> {
    SCENARIOS
        .iter()
        .find(|(scenario, _)| *scenario == name)
        .map(|(_, pairs)| from_pairs(pairs))
}

/// Names of the predefined scenarios, in declaration order.
pub fn scenario_names() -> Vec<&'static str> {
    SCENARIOS.iter().map(|(name, _)| *name).collect()
}

/// All predefined scenarios as `(name, mix)` pairs.
pub fn predefined() -> Vec<(&'static str, DisposalMix)> {
    SCENARIOS
        .iter()
        .map(|(name, pairs)| (*name, from_pairs(pairs)))
        .collect()
}

#[cfg(test)]
#[path = "disposal_test.rs"]
mod tests;
