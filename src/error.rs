// Pipeline error taxonomy
// Only fatal conditions live here. Recovered conditions (skipped catalog
// documents, empty inventory, unmatched cards) are handled in place and
// never surface as errors.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EtlError {
    /// A required column is missing from an inventory source.
    ///
    /// Inventory is the authoritative row source and cannot be silently
    /// truncated, so this aborts the run before any artifact is written.
    #[error("inventory source '{file}': missing required column '{column}'")]
    MissingColumn { file: String, column: String },

    /// The portfolio artifact does not exist (reporting step).
    #[error("portfolio file '{}' not found", .0.display())]
    ArtifactMissing(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}
