//! Input loading for deduplication runs.
//!
//! # Features
//!
//! - **CSV Loading**: Read a data file whose first record names the columns
//!   into ordered [`Row`](dedupe_model::Row)s
//! - **Specification Loading**: Parse a JSON object mapping column names to
//!   method descriptors, keeping the document's key order
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use dedupe_ingest::{load_specification, read_rows};
//!
//! let spec = load_specification(Path::new("spec.json"))?;
//! let table = read_rows(Path::new("contacts.csv"))?;
//! println!("{} rows over {} columns", table.rows_read(), table.headers.len());
//! ```

mod csv;
mod error;
mod spec;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading ===
pub use self::csv::{CsvRows, read_rows, read_rows_from_reader};

// === Specification Loading ===
pub use spec::{load_specification, parse_specification};
