//! Composite-key deduplication.
//!
//! Every row is reduced to a composite key built from the normalized values
//! of the specified columns, in specification order. The last row seen for a
//! key replaces any earlier one.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use tracing::{debug, info, info_span};

use dedupe_model::{KeyMode, NormalizationMethod, Row, Specification};

use crate::error::{DedupeError, MissingColumn};
use crate::normalize::{Normalizer, normalizer_for, resolve_method};

#[derive(Debug, Clone)]
struct ResolvedColumn {
    name: String,
    method: NormalizationMethod,
    normalize: Normalizer,
}

/// A specification with every column's normalizer resolved.
#[derive(Debug, Clone)]
pub struct DedupeEngine {
    columns: Vec<ResolvedColumn>,
    key_mode: KeyMode,
}

/// Rows retained by one run, with the number of rows consumed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DedupeOutcome {
    /// One row per distinct composite key, positioned where the key first
    /// appeared and holding the last row that produced it.
    pub rows: Vec<Row>,
    /// Rows consumed from the input.
    pub total: usize,
}

impl DedupeOutcome {
    pub fn retained(&self) -> usize {
        self.rows.len()
    }

    pub fn removed(&self) -> usize {
        self.total - self.rows.len()
    }

    pub fn into_rows(self) -> Vec<Row> {
        self.rows
    }
}

impl DedupeEngine {
    /// Resolves the normalizer of every specified column.
    ///
    /// # Errors
    ///
    /// Returns [`DedupeError::Resolve`] for the first column whose descriptor
    /// lacks a `"method"` key or names an unknown method. This happens before
    /// any row is read, so an invalid specification fails even on empty input.
    pub fn new(spec: &Specification) -> Result<Self, DedupeError> {
        let columns = spec
            .iter()
            .map(|entry| {
                let method =
                    resolve_method(&entry.descriptor).map_err(|source| DedupeError::Resolve {
                        column: entry.column.clone(),
                        source,
                    })?;
                debug!(column = %entry.column, method = %method, "resolved normalizer");
                Ok(ResolvedColumn {
                    name: entry.column.clone(),
                    method,
                    normalize: normalizer_for(method),
                })
            })
            .collect::<Result<Vec<_>, DedupeError>>()?;
        Ok(Self {
            columns,
            key_mode: KeyMode::default(),
        })
    }

    #[must_use]
    pub fn with_key_mode(mut self, key_mode: KeyMode) -> Self {
        self.key_mode = key_mode;
        self
    }

    /// Specified columns and their methods, in key order.
    pub fn columns(&self) -> impl Iterator<Item = (&str, NormalizationMethod)> {
        self.columns
            .iter()
            .map(|column| (column.name.as_str(), column.method))
    }

    /// Builds the composite key for a single row.
    pub fn composite_key(&self, row: &Row) -> Result<String, MissingColumn> {
        let mut key = String::new();
        for column in &self.columns {
            let value = row.get(&column.name).ok_or_else(|| MissingColumn {
                column: column.name.clone(),
            })?;
            let normalized = (column.normalize)(value);
            if self.key_mode == KeyMode::LengthPrefixed {
                key.push_str(&normalized.chars().count().to_string());
                key.push(':');
            }
            key.push_str(&normalized);
        }
        Ok(key)
    }

    /// Consumes `rows` in order and keeps the last row for each composite key.
    ///
    /// # Errors
    ///
    /// Returns [`DedupeError::MissingColumn`] for the first row lacking a
    /// specified column. Nothing retained so far is returned.
    pub fn run<I>(&self, rows: I) -> Result<DedupeOutcome, DedupeError>
    where
        I: IntoIterator<Item = Row>,
    {
        let span = info_span!(
            "dedupe",
            columns = self.columns.len(),
            key_mode = %self.key_mode
        );
        let _guard = span.enter();

        let mut slots: HashMap<String, usize> = HashMap::new();
        let mut retained: Vec<Row> = Vec::new();
        let mut total = 0usize;
        for row in rows {
            total += 1;
            let key = self
                .composite_key(&row)
                .map_err(|missing| DedupeError::MissingColumn {
                    column: missing.column,
                    row_number: total,
                })?;
            match slots.entry(key) {
                Entry::Occupied(slot) => {
                    let index = *slot.get();
                    debug!(row_number = total, slot = index, "replacing earlier duplicate");
                    retained[index] = row;
                }
                Entry::Vacant(slot) => {
                    slot.insert(retained.len());
                    retained.push(row);
                }
            }
        }

        let outcome = DedupeOutcome {
            rows: retained,
            total,
        };
        info!(
            total,
            retained = outcome.retained(),
            removed = outcome.removed(),
            "deduplication complete"
        );
        Ok(outcome)
    }
}

/// Resolves `spec` and runs it over `rows` with concatenated keys.
pub fn dedupe<I>(rows: I, spec: &Specification) -> Result<DedupeOutcome, DedupeError>
where
    I: IntoIterator<Item = Row>,
{
    DedupeEngine::new(spec)?.run(rows)
}
