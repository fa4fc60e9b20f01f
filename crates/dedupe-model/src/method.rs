//! Normalization methods and composite key layouts.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::ModelError;

/// A named rule deciding when two raw values count as the same.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NormalizationMethod {
    /// Values must match byte for byte.
    Exact,
    /// Values match after lowercasing.
    ExactCaseInsensitive,
    /// Values match after lowercasing and dropping everything outside `[a-z0-9]`.
    ExactLowerAlphanumeric,
}

impl NormalizationMethod {
    pub const ALL: [NormalizationMethod; 3] = [
        NormalizationMethod::Exact,
        NormalizationMethod::ExactCaseInsensitive,
        NormalizationMethod::ExactLowerAlphanumeric,
    ];

    /// Returns the name used in specification files.
    pub fn as_str(&self) -> &'static str {
        match self {
            NormalizationMethod::Exact => "exact",
            NormalizationMethod::ExactCaseInsensitive => "exact_case_insensitive",
            NormalizationMethod::ExactLowerAlphanumeric => "exact_lower_alphanumeric",
        }
    }
}

impl fmt::Display for NormalizationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NormalizationMethod {
    type Err = ModelError;

    /// Method names are matched exactly; `"Exact"` is not a method.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|method| method.as_str() == s)
            .ok_or_else(|| ModelError::UnknownMethod(s.to_string()))
    }
}

/// How normalized column values are joined into a composite key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum KeyMode {
    /// Values are appended with no separator.
    ///
    /// Distinct tuples can alias: `("1", "23")` and `("12", "3")` both
    /// produce `"123"`. Kept as the default for compatibility with existing
    /// specification files and their expected outputs.
    #[default]
    Concatenated,
    /// Each value is written as `<char count>:<value>`, so no two distinct
    /// tuples share a key.
    LengthPrefixed,
}

impl KeyMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            KeyMode::Concatenated => "concatenated",
            KeyMode::LengthPrefixed => "length-prefixed",
        }
    }
}

impl fmt::Display for KeyMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
