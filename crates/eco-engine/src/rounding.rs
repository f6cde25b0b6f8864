//! Numeric rounding policy.
//!
//! Every emitted quantity (phase values, totals, edge values, per-material
//! weights and impacts) is rounded to 4 decimal places, half away from
//! zero. The same function is applied wherever a value is produced, on the
//! originating side and during client-side recalculation alike, so
//! repeated scenario round-trips are idempotent.

/// Decimal places kept on every emitted quantity.
const DECIMALS: u32 = 4;

/// Round to 4 decimal places, half away from zero.
///
/// Results that round to zero are folded to `0.0` so a negative credit of
/// negligible magnitude never serializes as `-0.0`.
pub fn round4(value: f64) -> f64 {
    let scale = 10_f64.powi(DECIMALS as i32);
    // f64::round ties away from zero, which is exactly the policy
    let rounded = (value * scale).round() / scale;
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

#[cfg(test)]
#[path = "rounding_test.rs"]
mod tests;
