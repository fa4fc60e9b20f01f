//! Specification file loading.

use std::path::Path;

use serde_json::Value;
use tracing::debug;

use dedupe_model::{MethodDescriptor, Specification};

use crate::error::{IngestError, Result};

/// Loads a JSON specification file.
///
/// The document must be an object whose values are objects, for example
/// `{"name": {"method": "exact_case_insensitive"}}`. Key order is preserved
/// and decides composite key order. Descriptor contents are not checked
/// here.
pub fn load_specification(path: &Path) -> Result<Specification> {
    let text = std::fs::read_to_string(path).map_err(|e| IngestError::open(path, e))?;
    parse_specification(&text, path)
}

/// Parses specification JSON; `path` is only used in errors.
pub fn parse_specification(text: &str, path: &Path) -> Result<Specification> {
    let value: Value = serde_json::from_str(text).map_err(|source| IngestError::SpecParse {
        path: path.to_path_buf(),
        source,
    })?;
    let Value::Object(entries) = value else {
        return Err(IngestError::InvalidSpecification {
            path: path.to_path_buf(),
            reason: "expected an object mapping column names to method descriptors".to_string(),
        });
    };

    let mut spec = Specification::new();
    for (column, descriptor) in entries {
        let Value::Object(attributes) = descriptor else {
            return Err(IngestError::InvalidSpecification {
                path: path.to_path_buf(),
                reason: format!("descriptor for column '{column}' is not an object"),
            });
        };
        spec.insert(column, MethodDescriptor::new(attributes));
    }
    debug!(path = %path.display(), columns = spec.len(), "loaded specification");
    Ok(spec)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(text: &str) -> Result<Specification> {
        parse_specification(text, Path::new("spec.json"))
    }

    #[test]
    fn test_preserves_document_order() {
        let spec = parse(r#"{"zeta": {"method": "exact"}, "alpha": {"method": "exact"}}"#).unwrap();
        let columns: Vec<&str> = spec.column_names().collect();
        assert_eq!(columns, vec!["zeta", "alpha"]);
    }

    #[test]
    fn test_duplicate_key_keeps_first_position_last_value() {
        let spec = parse(
            r#"{"a": {"method": "exact"}, "b": {"method": "exact"}, "a": {"method": "exact_case_insensitive"}}"#,
        )
        .unwrap();
        let first = spec.iter().next().unwrap();
        assert_eq!(spec.len(), 2);
        assert_eq!(first.column, "a");
        assert_eq!(first.descriptor.method(), Some(&json!("exact_case_insensitive")));
    }

    #[test]
    fn test_descriptor_without_method_is_accepted() {
        let spec = parse(r#"{"a": {}}"#).unwrap();
        assert!(spec.iter().next().unwrap().descriptor.method().is_none());
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            parse(r#"{"a": {"method": "exact"}"#),
            Err(IngestError::SpecParse { .. })
        ));
    }

    #[test]
    fn test_top_level_must_be_object() {
        assert!(matches!(
            parse(r#"["a", "b"]"#),
            Err(IngestError::InvalidSpecification { .. })
        ));
    }

    #[test]
    fn test_descriptor_must_be_object() {
        let err = parse(r#"{"a": "exact"}"#).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid specification spec.json: descriptor for column 'a' is not an object"
        );
    }
}
