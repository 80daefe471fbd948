//! Decode-table generation pipeline: load a text table of bit-pattern
//! encodings, compile each pattern to a `(mask, signature)` pair, sort by
//! specificity, prove the table unambiguous, and render it as a dispatch
//! table fragment.

pub mod check;
pub mod emit;
pub mod loader;
pub mod pattern;
pub mod table;

use thiserror::Error;

pub use crate::check::{check, AmbiguityError, AmbiguousPair};
pub use crate::emit::{render, write_atomic};
pub use crate::loader::{load, LoadReport, SkipReason, SkippedLine};
pub use crate::pattern::{compile, compile_table, CompiledPattern};
pub use crate::table::{sort_by_specificity, EncodingRecord, GeneratorConfig, RawRecord};

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum GenerateError {
    #[error("table width {0} out of bounds, must be [1, {max}]", max = GeneratorConfig::MAX_WIDTH)]
    InvalidWidth(u32),
    #[error(transparent)]
    Ambiguous(#[from] AmbiguityError),
}

pub type Result<T> = std::result::Result<T, GenerateError>;

/// Run the whole pipeline on raw input text and return the rendered table.
///
/// Malformed input lines are logged and skipped; an ambiguous table fails
/// the run after every ambiguous pair has been reported.
pub fn generate_str(content: &str, namespace: &str, config: &GeneratorConfig) -> Result<String> {
    if config.width == 0 || config.width > GeneratorConfig::MAX_WIDTH {
        return Err(GenerateError::InvalidWidth(config.width));
    }

    let report = loader::load(content, config);
    tracing::info!(
        "loaded {} records, skipped {} lines",
        report.records.len(),
        report.skipped.len()
    );

    tracing::info!("computing mask and signature values");
    let mut records = pattern::compile_table(report.records);
    table::sort_by_specificity(&mut records);

    tracing::info!("checking distinguishability");
    check::check(&records)?;

    Ok(emit::render(&records, namespace))
}
