//! Deduplication specifications.
//!
//! A specification is an ordered list of columns, each paired with the raw
//! descriptor object from the specification file. The order decides how
//! normalized values are concatenated into a composite key.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Descriptor key naming the normalization method.
pub const ATTRIBUTE_METHOD: &str = "method";

/// The descriptor object for one specified column.
///
/// Kept as raw JSON so that extra parameters are tolerated and a missing
/// `"method"` key surfaces when the descriptor is resolved, not when it is
/// parsed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MethodDescriptor(Map<String, Value>);

impl MethodDescriptor {
    pub fn new(attributes: Map<String, Value>) -> Self {
        Self(attributes)
    }

    /// Descriptor of the form `{"method": "<name>"}`.
    pub fn with_method(name: impl Into<String>) -> Self {
        let mut attributes = Map::new();
        attributes.insert(ATTRIBUTE_METHOD.to_string(), Value::String(name.into()));
        Self(attributes)
    }

    /// Raw value of the `"method"` attribute, if present.
    pub fn method(&self) -> Option<&Value> {
        self.0.get(ATTRIBUTE_METHOD)
    }

    pub fn get(&self, attribute: &str) -> Option<&Value> {
        self.0.get(attribute)
    }

    pub fn attributes(&self) -> &Map<String, Value> {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SpecColumn {
    pub column: String,
    pub descriptor: MethodDescriptor,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Specification {
    columns: Vec<SpecColumn>,
}

impl Specification {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a column, or replaces the descriptor of an existing one while
    /// keeping its original position.
    pub fn insert(&mut self, column: impl Into<String>, descriptor: MethodDescriptor) {
        let column = column.into();
        if let Some(existing) = self.columns.iter_mut().find(|entry| entry.column == column) {
            existing.descriptor = descriptor;
        } else {
            self.columns.push(SpecColumn { column, descriptor });
        }
    }

    #[must_use]
    pub fn with_column(mut self, column: impl Into<String>, descriptor: MethodDescriptor) -> Self {
        self.insert(column, descriptor);
        self
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SpecColumn> {
        self.columns.iter()
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|entry| entry.column.as_str())
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, MethodDescriptor)> for Specification {
    fn from_iter<I: IntoIterator<Item = (K, MethodDescriptor)>>(iter: I) -> Self {
        let mut spec = Specification::new();
        for (column, descriptor) in iter {
            spec.insert(column, descriptor);
        }
        spec
    }
}

impl<'a> IntoIterator for &'a Specification {
    type Item = &'a SpecColumn;
    type IntoIter = std::slice::Iter<'a, SpecColumn>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
