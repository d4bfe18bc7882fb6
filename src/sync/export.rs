//! Export workspace instructions to markdown files.

use std::path::Path;

use miette::Diagnostic;
use serde::Serialize;
use thiserror::Error;

use crate::store::{self, StoreError};

use super::files;

/// Errors that can occur during export.
#[derive(Error, Diagnostic, Debug)]
pub enum ExportError {
    #[error("Workspace error: {0}")]
    #[diagnostic(code(instrsync::sync::export::store))]
    Store(#[from] StoreError),

    #[error("IO error: {0}")]
    #[diagnostic(code(instrsync::sync::export::io))]
    Io(#[from] std::io::Error),
}

/// Summary of an export run.
#[derive(Debug, Default, PartialEq, Eq, Serialize)]
pub struct ExportSummary {
    /// File names written, in document order.
    pub written: Vec<String>,
}

impl ExportSummary {
    pub fn total(&self) -> usize {
        self.written.len()
    }
}

/// Export every instruction in `workspace_file` to one markdown file each in
/// `output_dir`.
///
/// Creates `output_dir` if missing. A document without the instructions
/// component, or with an empty one, exports zero files; that is a valid
/// outcome, not an error. The source document is never modified, and
/// pre-existing files in `output_dir` are never deleted (only colliding names
/// are overwritten). Distinct ids whose sanitized names collide each get an
/// entry in `written` (duplicate names), but only the last one written
/// survives on disk; its header line still carries the real id.
///
/// # Errors
/// `NotFound` if the workspace file is missing, `Parse` if it is malformed,
/// IO errors for directory creation or file writes.
pub fn export_instructions(
    workspace_file: &Path,
    output_dir: &Path,
) -> Result<ExportSummary, ExportError> {
    if !workspace_file.exists() {
        return Err(StoreError::NotFound(workspace_file.to_path_buf()).into());
    }
    std::fs::create_dir_all(output_dir)?;

    let root = store::load_document(workspace_file)?;
    let Some(component) = store::find_component(&root) else {
        return Ok(ExportSummary::default());
    };

    let mut summary = ExportSummary::default();
    for instruction in store::list_entries(component) {
        let name = files::write_to(output_dir, &instruction)?;
        tracing::debug!(id = %instruction.id, file = %name, "exported instruction");
        summary.written.push(name);
    }

    Ok(summary)
}
