//! CSV data file reading.

mod reader;

pub use reader::{CsvRows, read_rows, read_rows_from_reader};
