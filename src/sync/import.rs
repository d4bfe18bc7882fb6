//! Import markdown instruction files into the workspace document.

use std::path::{Path, PathBuf};

use miette::Diagnostic;
use serde::Serialize;
use thiserror::Error;

use crate::store::{self, StoreError};

use super::files;

/// Errors that can occur during import.
#[derive(Error, Diagnostic, Debug)]
pub enum ImportError {
    #[error("Workspace error: {0}")]
    #[diagnostic(code(instrsync::sync::import::store))]
    Store(#[from] StoreError),

    #[error("Instructions directory not found: {0}")]
    #[diagnostic(code(instrsync::sync::import::dir_not_found))]
    DirNotFound(PathBuf),

    #[error("IO error: {0}")]
    #[diagnostic(code(instrsync::sync::import::io))]
    Io(#[from] std::io::Error),
}

/// Summary of an import run.
#[derive(Debug, Default, PartialEq, Eq, Serialize)]
pub struct ImportSummary {
    /// Number of instructions merged into the document (created + updated).
    pub merged: usize,
}

/// Merge every instruction file in `input_dir` into `workspace_file`.
///
/// Scans non-recursively for `.md` files; files without a `# <id>` header are
/// skipped. Each parsed instruction is upserted into the instructions
/// component (the component is created if the document never held one).
/// Entries not present in the input set are left untouched, as is every
/// unrelated sibling node in the document.
///
/// The merge is all-or-nothing: the document is rewritten atomically, and a
/// failed write leaves the original intact. When nothing was merged the
/// document is not rewritten at all.
///
/// # Errors
/// `NotFound` if the workspace file is missing, `DirNotFound` if the input
/// directory is missing (two distinct conditions), `Parse` for a malformed
/// document, IO errors for the write-back.
pub fn import_instructions(
    workspace_file: &Path,
    input_dir: &Path,
) -> Result<ImportSummary, ImportError> {
    if !workspace_file.exists() {
        return Err(StoreError::NotFound(workspace_file.to_path_buf()).into());
    }
    if !input_dir.is_dir() {
        return Err(ImportError::DirNotFound(input_dir.to_path_buf()));
    }

    let instructions = files::read_all(input_dir)?;
    if instructions.is_empty() {
        return Ok(ImportSummary::default());
    }

    let mut root = store::load_document(workspace_file)?;
    let component = store::ensure_component(&mut root);
    for (id, content) in &instructions {
        store::upsert_entry(component, id, content);
        tracing::debug!(id = %id, "merged instruction");
    }

    store::save_document(workspace_file, &root)?;

    Ok(ImportSummary {
        merged: instructions.len(),
    })
}
