//! Non-fatal observability events produced alongside analysis results.
//!
//! Fatal conditions are [`EngineError`](crate::EngineError)s; a
//! `Diagnostic` reports a condition the engine recovered from under a
//! documented policy (renormalized fractions, scenario fallback) so
//! callers can surface it.

use serde::{Deserialize, Serialize};

/// Diagnostic codes emitted by the engine and the catalog validator.
pub mod codes {
    /// Material fractions did not sum to 1.0 and were rescaled
    pub const NORMALIZED_FRACTIONS: &str = "L001";
    /// Unknown scenario name fell back to the baseline mix
    pub const SCENARIO_FALLBACK: &str = "L002";
    /// A flow below the rendering threshold was filtered from the graph
    pub const NEGLIGIBLE_FLOW: &str = "L003";
}

/// Diagnostic severity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational — no action required
    Info,
    /// Warning — potential issue worth reviewing
    Warning,
    /// Error — the input needs fixing
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Info => write!(f, "info"),
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// A non-fatal condition reported for observability
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Diagnostic code (e.g. "L001")
    pub code: String,
    /// Severity level
    pub severity: Severity,
    /// Human-readable message
    pub message: String,
    /// Product the diagnostic applies to
    pub product: Option<String>,
    /// Optional hint for how to fix
    pub hint: Option<String>,
}

impl Diagnostic {
    /// Create a diagnostic with the given code, severity, and message.
    pub fn new(code: &str, severity: Severity, message: impl Into<String>) -> Self {
        Self {
            code: code.to_string(),
            severity,
            message: message.into(),
            product: None,
            hint: None,
        }
    }

    /// Attach the product this diagnostic applies to.
    pub fn with_product(mut self, product: impl Into<String>) -> Self {
        self.product = Some(product.into());
        self
    }

    /// Attach a fix-it hint.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}
