use serde_json::json;

use dedupe_model::{MethodDescriptor, NormalizationMethod, Specification};

#[test]
fn specification_keeps_insertion_order() {
    let spec = Specification::new()
        .with_column("surname", MethodDescriptor::with_method("exact"))
        .with_column("first", MethodDescriptor::with_method("exact_case_insensitive"));
    let columns: Vec<&str> = spec.column_names().collect();
    assert_eq!(columns, vec!["surname", "first"]);
}

#[test]
fn reinserted_column_keeps_its_position() {
    let spec: Specification = [
        ("a", MethodDescriptor::with_method("exact")),
        ("b", MethodDescriptor::with_method("exact")),
        ("a", MethodDescriptor::with_method("exact_lower_alphanumeric")),
    ]
    .into_iter()
    .collect();
    assert_eq!(spec.len(), 2);
    let first = spec.iter().next().expect("first column");
    assert_eq!(first.column, "a");
    assert_eq!(
        first.descriptor.method(),
        Some(&json!("exact_lower_alphanumeric"))
    );
}

#[test]
fn descriptor_tolerates_extra_attributes() {
    let descriptor: MethodDescriptor =
        serde_json::from_value(json!({"method": "exact", "note": "ids"})).expect("descriptor");
    assert_eq!(descriptor.method(), Some(&json!("exact")));
    assert_eq!(descriptor.get("note"), Some(&json!("ids")));
}

#[test]
fn descriptor_without_method_still_parses() {
    let descriptor: MethodDescriptor =
        serde_json::from_value(json!({"kind": "exact"})).expect("descriptor");
    assert!(descriptor.method().is_none());
}

#[test]
fn every_method_has_a_distinct_name() {
    let mut names: Vec<&str> = NormalizationMethod::ALL
        .iter()
        .map(NormalizationMethod::as_str)
        .collect();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), NormalizationMethod::ALL.len());
}
