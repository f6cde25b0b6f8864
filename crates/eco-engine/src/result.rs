//! Analysis result wire types.
//!
//! [`AnalysisResult`] is the JSON contract between the engine and every
//! caller, including clients performing local scenario recalculation. Field
//! names and shapes here are load-bearing: recalculation locates the edge
//! to update by `source == "eol" && target == "total"`, so this module is
//! the only place the shape is defined.

use eco_core::MaterialName;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Signed per-phase emissions in kg CO2e.
///
/// `end_of_life` may be negative: recycling contributes an emission credit.
/// The total is always derived by [`total`](Self::total), never stored
/// separately inside the breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhaseBreakdown {
    /// Raw material extraction (cradle-to-gate)
    pub materials: f64,
    /// Manufacturing
    pub manufacturing: f64,
    /// Transportation
    pub transport: f64,
    /// Use phase over the product lifetime
    #[serde(rename = "use")]
    pub use_phase: f64,
    /// End of life under the active disposal mix
    pub end_of_life: f64,
}

impl PhaseBreakdown {
    /// Sum of the five phase values.
    pub fn total(&self) -> f64 {
        self.materials + self.manufacturing + self.transport + self.use_phase + self.end_of_life
    }
}

/// Per-material derivation record: computed once per analysis, carried
/// through every recalculation unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialDetail {
    /// Canonical material key
    pub name: MaterialName,
    /// Normalized fraction of total product weight
    pub fraction: f64,
    /// Mass attributed to this material (kg)
    pub weight_kg: f64,
    /// Extraction impact (kg CO2e)
    pub impact_kg_co2e: f64,
    /// Extraction factor applied (kg CO2e / kg)
    pub factor: f64,
}

/// Lifecycle stage tag carried on every flow graph node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodePhase {
    /// An individual material feeding the extraction hub
    Material,
    /// Raw material extraction hub
    Extraction,
    /// Manufacturing phase
    Manufacturing,
    /// Transportation phase
    Transport,
    /// Use phase
    Use,
    /// End of life phase
    Eol,
    /// The running-total sink
    Total,
}

impl std::fmt::Display for NodePhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NodePhase::Material => write!(f, "material"),
            NodePhase::Extraction => write!(f, "extraction"),
            NodePhase::Manufacturing => write!(f, "manufacturing"),
            NodePhase::Transport => write!(f, "transport"),
            NodePhase::Use => write!(f, "use"),
            NodePhase::Eol => write!(f, "eol"),
            NodePhase::Total => write!(f, "total"),
        }
    }
}

/// A node in the Sankey flow graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowNode {
    /// Stable node id (e.g. `mat_steel`, `eol`, `total`)
    pub id: String,
    /// Display label for rendering
    pub label: String,
    /// Lifecycle stage tag
    pub phase: NodePhase,
}

/// A weighted edge in the Sankey flow graph.
///
/// `value` is always >= 0, since rendering layouts need nonnegative widths. The
/// sign of a credit flow is carried on the `credit` flag, which is omitted
/// from the wire when false so the contract shape stays minimal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowLink {
    /// Source node id
    pub source: String,
    /// Target node id
    pub target: String,
    /// Flow magnitude in kg CO2e (≥ 0, rounded)
    pub value: f64,
    /// True when the underlying contribution is an emission credit
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub credit: bool,
}

/// Summary block of an analysis result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// Total footprint: sum of the five phases (kg CO2e, rounded)
    pub total_co2e_kg: f64,
    /// Per-phase breakdown (rounded)
    pub breakdown: PhaseBreakdown,
    /// Total product weight (kg)
    pub weight_kg: f64,
    /// Product category the factors were resolved under
    pub category: String,
    /// Name of the active disposal scenario
    pub eol_scenario: String,
}

/// The complete analysis result: the wire contract between the engine and
/// rendering, caching, persistence, and client-side recalculation.
///
/// Immutable once produced: recalculation derives a new value and never
/// mutates a stored copy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Flow graph nodes
    pub nodes: Vec<FlowNode>,
    /// Flow graph edges
    pub links: Vec<FlowLink>,
    /// Totals and breakdown
    pub summary: Summary,
    /// Material key -> mass (kg, rounded); the basis for every subsequent
    /// end-of-life recalculation
    pub per_material_weights: BTreeMap<String, f64>,
    /// Per-material derivation records
    pub material_details: Vec<MaterialDetail>,
}

impl AnalysisResult {
    /// The `eol -> total` edge magnitude, if the edge is present.
    pub fn eol_edge_value(&self) -> Option<f64> {
        self.links
            .iter()
            .find(|l| l.source == crate::graph::EOL_NODE_ID && l.target == crate::graph::TOTAL_NODE_ID)
            .map(|l| l.value)
    }
}

#[cfg(test)]
#[path = "result_test.rs"]
mod tests;
