//! CSV reading into ordered rows.

use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::sync::Arc;

use csv::ReaderBuilder;
use tracing::{debug, warn};

use dedupe_model::Row;

use crate::error::{IngestError, Result};

/// Rows of a CSV file together with its header.
#[derive(Debug, Clone)]
pub struct CsvRows {
    pub headers: Arc<[String]>,
    pub rows: Vec<Row>,
}

impl CsvRows {
    /// Number of data records read (header excluded).
    pub fn rows_read(&self) -> usize {
        self.rows.len()
    }

    pub fn into_rows(self) -> Vec<Row> {
        self.rows
    }
}

/// Reads a CSV file whose first record is the header.
///
/// Values are kept exactly as written. Blank lines are skipped. Records
/// shorter than the header lack the trailing columns; fields past the end of
/// the header are dropped with a warning.
pub fn read_rows(path: &Path) -> Result<CsvRows> {
    let file = File::open(path).map_err(|e| IngestError::open(path, e))?;
    read_rows_from_reader(file, path)
}

/// Reads CSV rows from any reader; `path` is only used in errors and logs.
pub fn read_rows_from_reader<R: Read>(reader: R, path: &Path) -> Result<CsvRows> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);
    let parse_error = |source: csv::Error| IngestError::CsvParse {
        path: path.to_path_buf(),
        source,
    };

    let headers: Arc<[String]> = reader
        .headers()
        .map_err(parse_error)?
        .iter()
        .enumerate()
        .map(|(idx, name)| {
            if idx == 0 {
                name.trim_start_matches('\u{feff}').to_string()
            } else {
                name.to_string()
            }
        })
        .collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(parse_error)?;
        if record.len() > headers.len() {
            warn!(
                path = %path.display(),
                line = record.position().map(csv::Position::line),
                fields = record.len(),
                columns = headers.len(),
                "dropping fields beyond the header"
            );
        }
        let values = record.iter().map(str::to_string).collect();
        rows.push(Row::new(Arc::clone(&headers), values));
    }

    debug!(
        path = %path.display(),
        columns = headers.len(),
        rows = rows.len(),
        "read csv"
    );
    Ok(CsvRows { headers, rows })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", content).unwrap();
        file
    }

    #[test]
    fn test_read_rows_basic() {
        let file = create_temp_csv("id,name\n1,Alice\n2,Bob\n");
        let table = read_rows(file.path()).unwrap();

        assert_eq!(&*table.headers, ["id", "name"]);
        assert_eq!(table.rows_read(), 2);
        assert_eq!(table.rows[1].get("name"), Some("Bob"));
    }

    #[test]
    fn test_values_are_not_trimmed() {
        let file = create_temp_csv("code\n\"A1 \"\n  b2\n");
        let table = read_rows(file.path()).unwrap();

        assert_eq!(table.rows[0].get("code"), Some("A1 "));
        assert_eq!(table.rows[1].get("code"), Some("  b2"));
    }

    #[test]
    fn test_strips_bom_from_header() {
        let file = create_temp_csv("\u{feff}id,name\n1,Alice\n");
        let table = read_rows(file.path()).unwrap();

        assert_eq!(table.headers[0], "id");
        assert_eq!(table.rows[0].get("id"), Some("1"));
    }

    #[test]
    fn test_skips_blank_lines() {
        let file = create_temp_csv("id\n1\n\n2\n");
        let table = read_rows(file.path()).unwrap();

        assert_eq!(table.rows_read(), 2);
    }

    #[test]
    fn test_short_and_long_records() {
        let file = create_temp_csv("id,name,email\n1,Ann\n2,Bo,b@x.org,extra\n");
        let table = read_rows(file.path()).unwrap();

        assert_eq!(table.rows[0].get("email"), None);
        assert_eq!(table.rows[1].get("email"), Some("b@x.org"));
        assert_eq!(table.rows[1].len(), 3);
    }

    #[test]
    fn test_empty_file() {
        let file = create_temp_csv("");
        let table = read_rows(file.path()).unwrap();

        assert!(table.headers.is_empty());
        assert_eq!(table.rows_read(), 0);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = read_rows(&dir.path().join("absent.csv"));

        assert!(matches!(result, Err(IngestError::FileNotFound { .. })));
    }

    #[test]
    fn test_invalid_utf8_is_parse_error() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"id\n\xff\xfe\n").unwrap();
        let result = read_rows(file.path());

        assert!(matches!(result, Err(IngestError::CsvParse { .. })));
    }
}
