//! Export/import command implementations.
//!
//! Each command runs one sync operation and renders its summary as a
//! display string; errors bubble up to the entry point as diagnostics.

use std::fmt::Write as _;
use std::path::Path;

use crate::cli::error::{CliError, CliResult};
use crate::host::Host;
use crate::sync::{SyncManager, instructions_dir, workspace_file};

fn check_format(format: &str) -> CliResult<()> {
    match format {
        "table" | "json" => Ok(()),
        other => Err(CliError::UnknownFormat(other.to_string())),
    }
}

/// Export instructions and describe what was written.
pub fn export<H: Host>(
    manager: &SyncManager<H>,
    project_root: &Path,
    format: &str,
) -> CliResult<String> {
    check_format(format)?;
    let summary = manager.export(project_root)?;

    if format == "json" {
        return Ok(serde_json::to_string_pretty(&summary)?);
    }

    if summary.written.is_empty() {
        return Ok("No instructions found to export.".to_string());
    }

    let mut output = String::new();
    let _ = writeln!(
        output,
        "✓ Exported {} instruction file(s) to {}\n",
        summary.total(),
        instructions_dir(project_root).display()
    );
    for name in &summary.written {
        let _ = writeln!(output, "  {name}");
    }
    Ok(output)
}

/// Import instruction files and describe the merge.
pub fn import<H: Host>(
    manager: &SyncManager<H>,
    project_root: &Path,
    format: &str,
) -> CliResult<String> {
    check_format(format)?;
    let summary = manager.import(project_root)?;

    if format == "json" {
        return Ok(serde_json::to_string_pretty(&summary)?);
    }

    if summary.merged == 0 {
        return Ok("No instruction files found to import.".to_string());
    }

    Ok(format!(
        "✓ Imported {} instruction file(s) into {}",
        summary.merged,
        workspace_file(project_root).display()
    ))
}
