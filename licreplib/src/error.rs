//! Error types for licreplib

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading or parsing a results document
#[derive(Error, Debug)]
pub enum LicrepError {
    /// Failed to read a results file
    #[error("failed to read results file '{path}': {source}")]
    ResultsRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Results document is not valid JSON or violates the input contract
    /// (e.g. a product record without `prod_key`)
    #[error("failed to parse results document: {0}")]
    ParseResults(#[from] serde_json::Error),
}
