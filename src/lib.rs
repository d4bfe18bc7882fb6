//! instrsync - sync AI Assistant custom instructions between a project's
//! `.idea/workspace.xml` and its `.ai` directory of markdown files.
//!
//! The workspace document is the system of record; the `.ai` directory is a
//! derived, editable mirror. Export and import are independent, idempotent
//! one-shot operations.

pub mod cli;
pub mod host;
pub mod store;
pub mod sync;
