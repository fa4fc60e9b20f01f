//! CSV writer for retained rows.

use std::collections::HashSet;
use std::io::Write;
use std::path::{Path, PathBuf};

use csv::{Terminator, WriterBuilder};
use tempfile::NamedTempFile;
use tracing::info;

use dedupe_model::Row;

use crate::error::{OutputError, Result};

/// Appended to the data file's stem to name the output file.
pub const OUTPUT_FILE_SUFFIX: &str = "_duplicates_removed.csv";

/// `<output_dir>/<input stem>_duplicates_removed.csv`.
pub fn output_path(input: &Path, output_dir: &Path) -> Result<PathBuf> {
    let stem = input.file_stem().ok_or_else(|| OutputError::InvalidInputName {
        path: input.to_path_buf(),
    })?;
    let mut name = stem.to_os_string();
    name.push(OUTPUT_FILE_SUFFIX);
    Ok(output_dir.join(name))
}

/// The input header followed by any other row columns, in order of first
/// appearance.
///
/// Columns of the input header are kept even when no retained row carries
/// them, so short records still produce the full header.
pub fn output_headers(input_headers: &[String], rows: &[Row]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut headers = Vec::new();
    for column in input_headers {
        if seen.insert(column.as_str()) {
            headers.push(column.clone());
        }
    }
    for row in rows {
        for column in row.columns() {
            if seen.insert(column.as_str()) {
                headers.push(column.clone());
            }
        }
    }
    headers
}

/// Writes `rows` as CSV with a header line built by [`output_headers`].
///
/// Cells a row does not have are written empty. Nothing at all is written
/// when there are no columns.
pub fn write_rows_to<W: Write>(writer: W, input_headers: &[String], rows: &[Row]) -> csv::Result<()> {
    let headers = output_headers(input_headers, rows);
    let mut writer = WriterBuilder::new()
        .terminator(Terminator::Any(b'\n'))
        .from_writer(writer);
    if headers.is_empty() {
        return Ok(());
    }
    writer.write_record(&headers)?;
    for row in rows {
        writer.write_record(
            headers
                .iter()
                .map(|column| row.get(column).unwrap_or_default()),
        )?;
    }
    writer.flush()?;
    Ok(())
}

/// Writes `rows` to `path`.
///
/// The CSV is written to a temporary file next to `path` and moved into
/// place once complete, so a failed write leaves no output behind. The file
/// gets the same permissions as one created with [`std::fs::write`].
pub fn write_rows(path: &Path, input_headers: &[String], rows: &[Row]) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let temp = create_temp_file(dir).map_err(|source| OutputError::FileCreate {
        dir: dir.to_path_buf(),
        source,
    })?;
    write_rows_to(temp.as_file(), input_headers, rows).map_err(|source| OutputError::CsvWrite {
        path: path.to_path_buf(),
        source,
    })?;
    temp.persist(path).map_err(|e| OutputError::Persist {
        path: path.to_path_buf(),
        source: e.error,
    })?;
    info!(path = %path.display(), rows = rows.len(), "wrote output");
    Ok(())
}

/// Temporary file created with mode 0666 less the umask, like a plain
/// `File::create`, instead of the owner-only default of `tempfile`.
#[cfg(unix)]
fn create_temp_file(dir: &Path) -> std::io::Result<NamedTempFile> {
    use std::os::unix::fs::PermissionsExt;

    tempfile::Builder::new()
        .permissions(std::fs::Permissions::from_mode(0o666))
        .tempfile_in(dir)
}

#[cfg(not(unix))]
fn create_temp_file(dir: &Path) -> std::io::Result<NamedTempFile> {
    NamedTempFile::new_in(dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_path_uses_input_stem() {
        let path = output_path(Path::new("data/contacts.csv"), Path::new("out")).unwrap();
        assert_eq!(path, Path::new("out/contacts_duplicates_removed.csv"));
    }

    #[test]
    fn output_path_without_extension() {
        let path = output_path(Path::new("contacts"), Path::new("/tmp")).unwrap();
        assert_eq!(path, Path::new("/tmp/contacts_duplicates_removed.csv"));
    }

    #[test]
    fn output_path_rejects_empty_name() {
        assert!(matches!(
            output_path(Path::new(""), Path::new("out")),
            Err(OutputError::InvalidInputName { .. })
        ));
    }

    fn header(names: &[&str]) -> Vec<String> {
        names.iter().map(|name| (*name).to_string()).collect()
    }

    #[test]
    fn headers_are_first_seen_union() {
        let rows = vec![
            Row::from_pairs([("id", "1"), ("name", "a")]),
            Row::from_pairs([("id", "2"), ("email", "e"), ("name", "b")]),
        ];
        assert_eq!(output_headers(&[], &rows), vec!["id", "name", "email"]);
    }

    #[test]
    fn input_header_comes_first_and_is_kept_whole() {
        let rows = vec![Row::from_pairs([("id", "1"), ("extra", "x")])];
        assert_eq!(
            output_headers(&header(&["id", "name", "email"]), &rows),
            vec!["id", "name", "email", "extra"]
        );
    }

    #[test]
    fn repeated_input_columns_are_written_once() {
        assert_eq!(output_headers(&header(&["a", "b", "a"]), &[]), vec!["a", "b"]);
    }

    #[test]
    fn no_rows_writes_header_only() {
        let mut buffer = Vec::new();
        write_rows_to(&mut buffer, &header(&["id", "name"]), &[]).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "id,name\n");
    }

    #[test]
    fn no_columns_writes_nothing() {
        let mut buffer = Vec::new();
        write_rows_to(&mut buffer, &[], &[]).unwrap();
        assert!(buffer.is_empty());
    }
}
