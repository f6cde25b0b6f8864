use super::*;

const KETTLE_YAML: &str = r#"
id: B00KETTLE1
name: Electric Kettle
category: appliances
weight_kg: 1.2
materials:
  stainless steel: 0.6
  plastic: 0.3
  copper: 0.1
"#;

#[test]
fn test_parse_product_spec() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("kettle.yml");
    std::fs::write(&path, KETTLE_YAML).unwrap();

    let spec = ProductSpec::from_yaml_file(&path).unwrap();
    assert_eq!(spec.id, "B00KETTLE1");
    assert_eq!(spec.display_name(), "Electric Kettle");
    assert_eq!(spec.category, "appliances");
    assert_eq!(spec.weight_kg, 1.2);
    assert_eq!(spec.materials.len(), 3);
    assert!(spec.eol_scenario.is_none());
}

#[test]
fn test_unknown_field_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.yml");
    std::fs::write(
        &path,
        "id: X\ncategory: tools\nweight_kg: 1.0\nmaterials: {steel: 1.0}\ncolor: red\n",
    )
    .unwrap();

    let err = ProductSpec::from_yaml_file(&path).unwrap_err();
    assert!(matches!(err, CoreError::ProductParseError { .. }));
}

#[test]
fn test_resolve_to_input() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("kettle.yml");
    std::fs::write(&path, KETTLE_YAML).unwrap();

    let spec = ProductSpec::from_yaml_file(&path).unwrap();
    let input = spec.resolve(&FactorTable::builtin()).unwrap();

    assert_eq!(input.id, "B00KETTLE1");
    assert_eq!(input.weight_kg, 1.2);
    let names: Vec<&str> = input.materials.iter().map(|m| m.name.as_str()).collect();
    // "stainless steel" folds, "plastic" resolves via alias
    assert_eq!(names, vec!["abs", "copper", "stainless_steel"]);
}

#[test]
fn test_resolve_unknown_material_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.yml");
    std::fs::write(
        &path,
        "id: X\ncategory: tools\nweight_kg: 1.0\nmaterials: {adamantium: 1.0}\n",
    )
    .unwrap();

    let spec = ProductSpec::from_yaml_file(&path).unwrap();
    assert!(matches!(
        spec.resolve(&FactorTable::builtin()).unwrap_err(),
        CoreError::UnknownMaterial { .. }
    ));
}

#[test]
fn test_display_name_falls_back_to_id() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("p.yml");
    std::fs::write(
        &path,
        "id: B000PLAIN\ncategory: tools\nweight_kg: 0.5\nmaterials: {steel: 1.0}\n",
    )
    .unwrap();

    let spec = ProductSpec::from_yaml_file(&path).unwrap();
    assert_eq!(spec.display_name(), "B000PLAIN");
}
