//! Project-relative path resolution.

use std::path::{Path, PathBuf};

/// Workspace configuration document: `<project_root>/.idea/workspace.xml`.
pub fn workspace_file(project_root: &Path) -> PathBuf {
    project_root.join(".idea").join("workspace.xml")
}

/// Instruction file directory: `<project_root>/.ai`.
pub fn instructions_dir(project_root: &Path) -> PathBuf {
    project_root.join(".ai")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workspace_file_under_idea_dir() {
        let path = workspace_file(Path::new("/work/demo"));
        assert!(path.ends_with(".idea/workspace.xml"));
    }

    #[test]
    fn test_instructions_dir_is_dot_ai() {
        let path = instructions_dir(Path::new("/work/demo"));
        assert!(path.ends_with(".ai"));
    }
}
