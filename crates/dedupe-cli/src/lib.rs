//! CLI library components for the duplicate remover.

pub mod logging;
pub mod pipeline;
pub mod types;
pub mod validate;
