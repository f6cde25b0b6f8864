use super::*;

fn raw(entries: &[(&str, f64)]) -> BTreeMap<String, f64> {
    entries
        .iter()
        .map(|(k, v)| (k.to_string(), *v))
        .collect()
}

#[test]
fn test_fold_key() {
    assert_eq!(fold_key("Stainless Steel"), "stainless_steel");
    assert_eq!(fold_key("  PU-Foam "), "pu_foam");
    assert_eq!(fold_key("abs"), "abs");
}

#[test]
fn test_canonical_name_passes_through() {
    let table = FactorTable::builtin();
    let materials = resolve_materials(&raw(&[("steel", 1.0)]), &table).unwrap();
    assert_eq!(materials.len(), 1);
    assert_eq!(materials[0].name, "steel");
    assert_eq!(materials[0].fraction, 1.0);
}

#[test]
fn test_alias_resolution() {
    let table = FactorTable::builtin();
    let materials =
        resolve_materials(&raw(&[("Aluminium", 0.4), ("plastic", 0.6)]), &table).unwrap();
    let names: Vec<&str> = materials.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, vec!["abs", "aluminum"]);
}

#[test]
fn test_aliases_accumulate_fractions() {
    let table = FactorTable::builtin();
    // wood and pine both resolve to softwood
    let materials = resolve_materials(&raw(&[("wood", 0.5), ("pine", 0.3)]), &table).unwrap();
    assert_eq!(materials.len(), 1);
    assert_eq!(materials[0].name, "softwood");
    assert!((materials[0].fraction - 0.8).abs() < 1e-12);
}

#[test]
fn test_unknown_material_is_error() {
    let table = FactorTable::builtin();
    let err = resolve_materials(&raw(&[("mithril", 1.0)]), &table).unwrap_err();
    match err {
        CoreError::UnknownMaterial { name } => assert_eq!(name, "mithril"),
        other => panic!("expected UnknownMaterial, got {other:?}"),
    }
}

#[test]
fn test_fractions_are_not_rescaled_here() {
    let table = FactorTable::builtin();
    // sums to 0.9 on purpose; renormalization happens in the calculator
    let materials =
        resolve_materials(&raw(&[("steel", 0.5), ("glass", 0.4)]), &table).unwrap();
    let sum: f64 = materials.iter().map(|m| m.fraction).sum();
    assert!((sum - 0.9).abs() < 1e-12);
}
