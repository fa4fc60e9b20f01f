//! Load, deduplicate, write.

use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use dedupe_core::DedupeEngine;
use dedupe_ingest::{load_specification, read_rows};
use dedupe_output::{output_path, write_rows};

use crate::types::{DedupeReport, DedupeRequest, KeyColumn};

/// Runs one deduplication.
///
/// The specification is resolved before the data file is read. Output is
/// written only after every row has been processed; any failure leaves the
/// output directory untouched.
pub fn run_dedupe(request: &DedupeRequest) -> Result<DedupeReport> {
    let span = info_span!(
        "run",
        datafile = %request.datafile.display(),
        specfile = %request.specfile.display()
    );
    let _guard = span.enter();
    let start = Instant::now();

    let spec = load_specification(&request.specfile).context("load specification")?;
    let engine = DedupeEngine::new(&spec)
        .context("resolve specification")?
        .with_key_mode(request.key_mode);
    let key_columns: Vec<KeyColumn> = engine
        .columns()
        .map(|(column, method)| KeyColumn {
            column: column.to_string(),
            method,
        })
        .collect();

    let table = read_rows(&request.datafile).context("read data file")?;
    let rows_read = table.rows_read();
    let headers = Arc::clone(&table.headers);
    let outcome = engine
        .run(table.into_rows())
        .context("remove duplicates")?;

    let destination = output_path(&request.datafile, &request.output_dir)?;
    let output = if request.dry_run {
        info!(path = %destination.display(), "dry run, output not written");
        None
    } else {
        write_rows(&destination, &headers, &outcome.rows).context("write output")?;
        Some(destination)
    };

    info!(
        rows_read,
        removed = outcome.removed(),
        duration_ms = start.elapsed().as_millis(),
        "run complete"
    );
    Ok(DedupeReport {
        datafile: request.datafile.clone(),
        output,
        rows_read,
        duplicates_removed: outcome.removed(),
        rows_written: outcome.retained(),
        key_mode: request.key_mode,
        key_columns,
    })
}
