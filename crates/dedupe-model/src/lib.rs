//! Data model for row deduplication.
//!
//! Rows are ordered column/value containers read from a tabular file. A
//! [`Specification`] names the columns that decide uniqueness and the
//! normalization method applied to each before comparison.

pub mod error;
pub mod method;
pub mod row;
pub mod spec;

pub use error::{ModelError, Result};
pub use method::{KeyMode, NormalizationMethod};
pub use row::Row;
pub use spec::{ATTRIBUTE_METHOD, MethodDescriptor, SpecColumn, Specification};
