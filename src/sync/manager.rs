//! High-level sync operations bound to a project root.
//!
//! Resolves the project-relative paths, runs export/import, and tells the
//! host when the workspace document was rewritten on disk.

use std::path::Path;

use crate::host::Host;

use super::export::{ExportError, ExportSummary, export_instructions};
use super::import::{ImportError, ImportSummary, import_instructions};
use super::paths::{instructions_dir, workspace_file};

/// Coordinates export and import for a project.
pub struct SyncManager<H: Host> {
    host: H,
}

impl<H: Host> SyncManager<H> {
    /// Create a new sync manager backed by the given host.
    pub fn new(host: H) -> Self {
        Self { host }
    }

    /// Export instructions from the project's workspace document into its
    /// instructions directory.
    pub fn export(&self, project_root: &Path) -> Result<ExportSummary, ExportError> {
        export_instructions(
            &workspace_file(project_root),
            &instructions_dir(project_root),
        )
    }

    /// Import instruction files from the project's instructions directory
    /// into its workspace document.
    ///
    /// The host is notified of the changed file only when the document was
    /// actually rewritten (a zero-merge run touches nothing).
    pub fn import(&self, project_root: &Path) -> Result<ImportSummary, ImportError> {
        let workspace = workspace_file(project_root);
        let summary = import_instructions(&workspace, &instructions_dir(project_root))?;

        if summary.merged > 0 {
            self.host.notify_changed(&workspace);
        }
        Ok(summary)
    }

    /// Automatic import triggered when a project is opened.
    ///
    /// Identical to [`SyncManager::import`] except the result is never
    /// surfaced interactively: failures are logged and swallowed.
    pub fn import_on_open(&self, project_root: &Path) {
        match self.import(project_root) {
            Ok(summary) => {
                tracing::info!(merged = summary.merged, "imported instructions on project open");
            }
            Err(e) => {
                tracing::warn!(error = %e, "instruction import on project open failed");
            }
        }
    }
}
