//! Normalization methods.
//!
//! Two raw values are duplicates under a column when that column's
//! normalizer maps them to the same string.

use serde_json::Value;

use dedupe_model::{ATTRIBUTE_METHOD, MethodDescriptor, NormalizationMethod};

use crate::error::ResolveError;

/// A pure string normalization.
pub type Normalizer = fn(&str) -> String;

/// Returns the normalizer implementing `method`.
pub fn normalizer_for(method: NormalizationMethod) -> Normalizer {
    match method {
        NormalizationMethod::Exact => exact,
        NormalizationMethod::ExactCaseInsensitive => exact_case_insensitive,
        NormalizationMethod::ExactLowerAlphanumeric => exact_lower_alphanumeric,
    }
}

/// Reads the method named by a descriptor.
///
/// # Errors
///
/// [`ResolveError::MissingAttribute`] when the descriptor has no `"method"`
/// key, [`ResolveError::UnrecognizedMethod`] when its value is not a known
/// method name. Non-string values are reported by their JSON rendering.
pub fn resolve_method(descriptor: &MethodDescriptor) -> Result<NormalizationMethod, ResolveError> {
    let value = descriptor
        .method()
        .ok_or(ResolveError::MissingAttribute {
            attribute: ATTRIBUTE_METHOD,
        })?;
    match value {
        Value::String(name) => {
            name.parse()
                .map_err(|_| ResolveError::UnrecognizedMethod {
                    method: name.clone(),
                })
        }
        other => Err(ResolveError::UnrecognizedMethod {
            method: other.to_string(),
        }),
    }
}

fn exact(value: &str) -> String {
    value.to_string()
}

fn exact_case_insensitive(value: &str) -> String {
    value.to_lowercase()
}

fn exact_lower_alphanumeric(value: &str) -> String {
    value
        .to_lowercase()
        .chars()
        .filter(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Map, json};

    fn descriptor(value: Value) -> MethodDescriptor {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn exact_is_identity() {
        let normalize = normalizer_for(NormalizationMethod::Exact);
        assert_eq!(normalize(" Mixed-Case 42 "), " Mixed-Case 42 ");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn case_insensitive_lowercases_everything() {
        let normalize = normalizer_for(NormalizationMethod::ExactCaseInsensitive);
        assert_eq!(normalize("Alice"), "alice");
        assert_eq!(normalize("ÉCOLE"), "école");
        assert_eq!(normalize("A-1 "), "a-1 ");
    }

    #[test]
    fn lower_alphanumeric_strips_punctuation_and_whitespace() {
        let normalize = normalizer_for(NormalizationMethod::ExactLowerAlphanumeric);
        assert_eq!(normalize("AB-12 cd"), "ab12cd");
        assert_eq!(normalize("A-1"), "a1");
        assert_eq!(normalize("A1 "), "a1");
        assert_eq!(normalize("\tO'Brien,\n"), "obrien");
    }

    #[test]
    fn lower_alphanumeric_drops_non_ascii_letters() {
        let normalize = normalizer_for(NormalizationMethod::ExactLowerAlphanumeric);
        assert_eq!(normalize("Café 9"), "caf9");
        assert_eq!(normalize("ÅÄÖ"), "");
    }

    #[test]
    fn resolves_each_known_method() {
        for method in NormalizationMethod::ALL {
            let resolved = resolve_method(&MethodDescriptor::with_method(method.as_str()));
            assert_eq!(resolved, Ok(method));
        }
    }

    #[test]
    fn missing_method_key_is_reported() {
        let error = resolve_method(&MethodDescriptor::new(Map::new())).unwrap_err();
        assert_eq!(
            error,
            ResolveError::MissingAttribute {
                attribute: "method"
            }
        );
    }

    #[test]
    fn unknown_method_name_is_reported() {
        let error = resolve_method(&MethodDescriptor::with_method("fuzzy")).unwrap_err();
        assert_eq!(
            error,
            ResolveError::UnrecognizedMethod {
                method: "fuzzy".to_string()
            }
        );
        assert_eq!(
            error.to_string(),
            "normalization method 'fuzzy' was not recognised"
        );
    }

    #[test]
    fn non_string_method_is_unrecognized() {
        let error = resolve_method(&descriptor(json!({"method": 3}))).unwrap_err();
        assert_eq!(
            error,
            ResolveError::UnrecognizedMethod {
                method: "3".to_string()
            }
        );
    }

    #[test]
    fn extra_attributes_are_ignored() {
        let resolved = resolve_method(&descriptor(json!({
            "method": "exact_case_insensitive",
            "comment": "names"
        })));
        assert_eq!(resolved, Ok(NormalizationMethod::ExactCaseInsensitive));
    }
}
