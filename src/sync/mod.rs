//! Sync module - translate custom instructions between the workspace
//! document and the project's `.ai` directory of markdown files.
//!
//! Export materializes each keyed entry of the instructions component as one
//! markdown file; import merges the files back, upserting by id and leaving
//! everything else in the document alone. Both operations are one-shot and
//! idempotent.

mod export;
mod files;
mod import;
#[cfg(test)]
mod import_test;
mod manager;
mod paths;

pub use export::{ExportError, ExportSummary, export_instructions};
pub use files::{FILE_EXTENSION, file_name_for};
pub use import::{ImportError, ImportSummary, import_instructions};
pub use manager::SyncManager;
pub use paths::{instructions_dir, workspace_file};
