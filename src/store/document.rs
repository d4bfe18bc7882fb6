//! Load/save primitives for the workspace document.
//!
//! The document is read fresh at the start of every operation and written
//! back atomically: serialize into a temp file next to the original, then
//! rename over it. A failed write never leaves a half-written document.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write as _};
use std::path::{Path, PathBuf};

use miette::Diagnostic;
use tempfile::NamedTempFile;
use thiserror::Error;
use xmltree::{Element, EmitterConfig};

/// Errors that can occur while reading or writing the workspace document.
#[derive(Error, Diagnostic, Debug)]
pub enum StoreError {
    #[error("Workspace file not found: {0}")]
    #[diagnostic(code(instrsync::store::not_found))]
    NotFound(PathBuf),

    #[error("Failed to parse workspace file: {0}")]
    #[diagnostic(code(instrsync::store::parse))]
    Parse(#[from] xmltree::ParseError),

    #[error("Failed to serialize workspace file: {0}")]
    #[diagnostic(code(instrsync::store::serialize))]
    Serialize(String),

    #[error("IO error: {0}")]
    #[diagnostic(code(instrsync::store::io))]
    Io(#[from] std::io::Error),
}

/// Parse the workspace document into an element tree.
///
/// # Errors
/// `NotFound` if the file does not exist, `Parse` if it is not well-formed
/// XML.
pub fn load_document(path: &Path) -> Result<Element, StoreError> {
    if !path.exists() {
        return Err(StoreError::NotFound(path.to_path_buf()));
    }

    let file = File::open(path)?;
    let root = Element::parse(BufReader::new(file))?;
    Ok(root)
}

/// Serialize the element tree back to `path`, replacing the previous content.
///
/// Writes to a temp file in the same directory and renames it over the
/// original, so the document on disk is always either the old or the new
/// version in full.
pub fn save_document(path: &Path, root: &Element) -> Result<(), StoreError> {
    let dir = path.parent().filter(|p| !p.as_os_str().is_empty());
    let mut tmp = NamedTempFile::new_in(dir.unwrap_or_else(|| Path::new(".")))?;

    {
        let mut writer = BufWriter::new(tmp.as_file_mut());
        root.write_with_config(&mut writer, EmitterConfig::new().perform_indent(true))
            .map_err(|e| StoreError::Serialize(e.to_string()))?;
        writer.flush()?;
    }

    tmp.persist(path).map_err(|e| StoreError::Io(e.error))?;
    Ok(())
}
