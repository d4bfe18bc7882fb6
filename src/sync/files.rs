//! Instruction file primitives: naming, rendering and header parsing.

use std::collections::HashMap;
use std::io;
use std::path::Path;

use crate::store::Instruction;

/// Recognized suffix for instruction files.
pub const FILE_EXTENSION: &str = "md";

/// Derive the on-disk file name for an instruction id.
///
/// Characters outside `[A-Za-z0-9-]` are replaced with `_`. The mapping is
/// lossy (distinct ids can collide on the same name); the authoritative id
/// lives in the file's header line, never in its name.
pub fn file_name_for(id: &str) -> String {
    let sanitized: String = id
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' { c } else { '_' })
        .collect();
    format!("{sanitized}.{FILE_EXTENSION}")
}

/// Render a file body: `# <id>`, blank line, raw content.
pub fn render(instruction: &Instruction) -> String {
    format!("# {}\n\n{}", instruction.id, instruction.content)
}

/// Parse a file body back into an instruction.
///
/// The header must match `# <token>`: a hash, at least one whitespace
/// character, then the id as the first run of non-whitespace. Everything
/// after the token, trimmed, is the content. Returns `None` for anything
/// that does not match; malformed files are skipped, never errors.
pub fn parse(text: &str) -> Option<Instruction> {
    let rest = text.strip_prefix('#')?;
    if !rest.starts_with(char::is_whitespace) {
        return None;
    }
    let rest = rest.trim_start();
    if rest.is_empty() {
        return None;
    }

    let token_end = rest.find(char::is_whitespace).unwrap_or(rest.len());
    let (id, tail) = rest.split_at(token_end);
    Some(Instruction {
        id: id.to_string(),
        content: tail.trim().to_string(),
    })
}

/// Write one instruction file into `dir`, returning the file name used.
pub fn write_to(dir: &Path, instruction: &Instruction) -> io::Result<String> {
    let name = file_name_for(&instruction.id);
    std::fs::write(dir.join(&name), render(instruction))?;
    Ok(name)
}

/// Scan `dir` (non-recursively) for instruction files and parse them into an
/// id -> content map. Files without a valid header line are skipped.
pub fn read_all(dir: &Path) -> io::Result<HashMap<String, String>> {
    let mut instructions = HashMap::new();

    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if !path.is_file() || path.extension().and_then(|e| e.to_str()) != Some(FILE_EXTENSION) {
            continue;
        }

        let text = std::fs::read_to_string(&path)?;
        match parse(&text) {
            Some(instruction) => {
                instructions.insert(instruction.id, instruction.content);
            }
            None => {
                tracing::debug!(file = %path.display(), "skipping file without instruction header");
            }
        }
    }

    Ok(instructions)
}
