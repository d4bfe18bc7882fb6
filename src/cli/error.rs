use miette::Diagnostic;
use thiserror::Error;

use crate::sync::{ExportError, ImportError};

#[derive(Error, Diagnostic, Debug)]
pub enum CliError {
    #[error("Export failed: {0}")]
    #[diagnostic(code(instrsync::cli::export))]
    Export(#[from] ExportError),

    #[error("Import failed: {0}")]
    #[diagnostic(code(instrsync::cli::import))]
    Import(#[from] ImportError),

    #[error("Failed to serialize summary: {0}")]
    #[diagnostic(code(instrsync::cli::serialize))]
    Serialize(#[from] serde_json::Error),

    #[error("Unknown output format: {0}")]
    #[diagnostic(
        code(instrsync::cli::format),
        help("Supported formats are `table` and `json`.")
    )]
    UnknownFormat(String),
}

pub type CliResult<T> = Result<T, CliError>;
