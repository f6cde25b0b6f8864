//! Material alias resolution.
//!
//! The upstream extraction step emits free-form material names (`plastic`,
//! `aluminium`, `PU foam`, ...). This module folds them into canonical
//! factor-table keys: lowercase, trimmed, spaces and hyphens replaced with
//! underscores, then resolved through the alias table. Names that still
//! don't resolve are a hard error, never a silent default.

use crate::error::{CoreError, CoreResult};
use crate::factors::FactorTable;
use crate::material::Material;
use std::collections::BTreeMap;

/// Common extraction-output names mapped to canonical factor-table keys.
const MATERIAL_ALIASES: &[(&str, &str)] = &[
    ("plastic", "abs"),
    ("plastics", "abs"),
    ("metal", "steel"),
    ("iron", "steel"),
    ("stainless", "stainless_steel"),
    ("aluminium", "aluminum"),
    ("alu", "aluminum"),
    ("wood", "softwood"),
    ("timber", "softwood"),
    ("lumber", "softwood"),
    ("oak", "hardwood"),
    ("walnut", "hardwood"),
    ("maple", "hardwood"),
    ("teak", "hardwood"),
    ("pine", "softwood"),
    ("cedar", "softwood"),
    ("rubber", "natural_rubber"),
    ("synthetic_rubber", "tpu"),
    ("foam", "polyurethane"),
    ("pu_foam", "polyurethane"),
    ("memory_foam", "polyurethane"),
    ("polyethylene", "hdpe"),
    ("pe", "hdpe"),
    ("polypropylene", "pp"),
    ("polyester", "polyester_fabric"),
    ("neoprene", "natural_rubber"),
    ("spandex", "nylon"),
    ("elastane", "nylon"),
    ("lycra", "nylon"),
    ("teflon", "ptfe"),
    ("delrin", "acetal"),
    ("pom", "acetal"),
    ("pc", "polycarbonate"),
    ("ps", "polystyrene"),
    ("eps", "polystyrene"),
    ("styrofoam", "polystyrene"),
    ("kraft", "cardboard"),
    ("paperboard", "cardboard"),
    ("corrugated", "cardboard"),
    ("fabric", "cotton"),
    ("textile", "cotton"),
    ("cloth", "cotton"),
    ("denim", "cotton"),
    ("canvas", "cotton"),
    ("linen", "jute"),
    ("hemp", "jute"),
    ("granite", "stone"),
    ("marble", "stone"),
    ("slate", "stone"),
    ("chrome", "stainless_steel"),
    ("chromium", "stainless_steel"),
    ("bronze", "brass"),
    ("gold", "copper"),
    ("silver", "copper"),
    ("platinum", "nickel"),
    ("tungsten", "nickel"),
    ("fibre_glass", "fiberglass"),
    ("fiber_glass", "fiberglass"),
    ("cf", "carbon_fiber"),
    ("cfrp", "carbon_fiber"),
    ("gfrp", "fiberglass"),
    ("battery", "lithium_ion_battery"),
    ("li_ion", "lithium_ion_battery"),
    ("lithium", "lithium_ion_battery"),
];

/// Fold a raw material name into canonical key form.
pub fn fold_key(raw: &str) -> String {
    raw.trim().to_lowercase().replace([' ', '-'], "_")
}

/// Look up an alias for an already-folded key.
fn alias_for(key: &str) -> Option<&'static str> {
    MATERIAL_ALIASES
        .iter()
        .find(|(alias, _)| *alias == key)
        .map(|(_, canonical)| *canonical)
}

/// Resolve a single raw name to a canonical factor-table key.
///
/// Folds the key, then tries the factor table directly, then the alias
/// table. Returns `None` when neither resolves.
pub fn resolve_name(raw: &str, table: &FactorTable) -> Option<String> {
    let key = fold_key(raw);
    if table.has_material(&key) {
        Some(key)
    } else if let Some(alias) = alias_for(&key) {
        log::debug!("resolved material alias '{}' -> '{}'", key, alias);
        Some(alias.to_string())
    } else {
        None
    }
}

/// Resolve raw material names to canonical [`Material`] entries.
///
/// Fractions of names resolving to the same canonical material are
/// accumulated. Fractions are passed through untouched; renormalization
/// is the calculator's job, where it can be reported.
pub fn resolve_materials(
    raw: &BTreeMap<String, f64>,
    table: &FactorTable,
) -> CoreResult<Vec<Material>> {
    let mut resolved: BTreeMap<String, f64> = BTreeMap::new();

    for (name, fraction) in raw {
        let canonical = resolve_name(name, table)
            .ok_or_else(|| CoreError::UnknownMaterial { name: name.clone() })?;
        *resolved.entry(canonical).or_insert(0.0) += fraction;
    }

    Ok(resolved
        .into_iter()
        .map(|(name, fraction)| Material::new(name, fraction))
        .collect())
}

#[cfg(test)]
#[path = "alias_test.rs"]
mod tests;
