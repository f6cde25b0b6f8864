//! Strongly-typed material name

use crate::newtype_string::define_newtype_string;

define_newtype_string! {
    /// A canonical material key into the emission factor table
    /// (e.g. `steel`, `abs`, `stainless_steel`).
    ///
    /// Canonical keys are lowercase with underscores; raw extraction output
    /// is folded into this form by [`alias::resolve_materials`](crate::alias::resolve_materials).
    pub struct MaterialName;
}
