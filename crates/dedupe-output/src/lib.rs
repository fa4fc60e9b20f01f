//! Output generation for deduplicated rows.

mod error;
mod writer;

pub use error::{OutputError, Result};
pub use writer::{OUTPUT_FILE_SUFFIX, output_headers, output_path, write_rows, write_rows_to};
