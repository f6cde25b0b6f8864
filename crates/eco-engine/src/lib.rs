//! eco-engine: the EcoFlow lifecycle assessment calculation engine
//!
//! Pure, side-effect-free functions over immutable inputs: the five-phase
//! LCA calculator, the Sankey flow graph builder, and the scenario
//! recalculator that re-derives the end-of-life phase from an existing
//! result without touching anything else. There is no I/O, no shared
//! mutable state, and no suspension point anywhere in this crate, so every
//! entry point is safe to call concurrently with no coordination.

pub mod calculator;
pub mod diagnostics;
pub(crate) mod error;
pub mod graph;
pub mod result;
pub mod rounding;
pub mod scenario;

pub use calculator::{calculate, Analysis, ModelParams};
pub use diagnostics::{codes, Diagnostic, Severity};
pub use error::{EngineError, EngineResult};
pub use graph::{build_flow_graph, rebuild_eol_edge, FlowGraph, NEGLIGIBLE_FLOW_KG};
pub use result::{AnalysisResult, FlowLink, FlowNode, MaterialDetail, NodePhase, PhaseBreakdown, Summary};
pub use rounding::round4;
pub use scenario::{recalculate, ResolvedScenario, ScenarioSelector};
