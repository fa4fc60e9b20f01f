//! Deduplication core.
//!
//! [`normalize`] turns a specification's method descriptors into string
//! normalizers; [`engine`] applies them to every row, builds a composite key
//! and keeps the last row seen for each key.
//!
//! ```ignore
//! use dedupe_core::DedupeEngine;
//!
//! let engine = DedupeEngine::new(&specification)?;
//! let outcome = engine.run(rows)?;
//! println!("removed {} of {}", outcome.removed(), outcome.total);
//! ```

pub mod engine;
pub mod error;
pub mod normalize;

pub use engine::{DedupeEngine, DedupeOutcome, dedupe};
pub use error::{DedupeError, MissingColumn, ResolveError};
pub use normalize::{Normalizer, normalizer_for, resolve_method};
