//! Importer tests, including the export/import round trip.

use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::store::{self, StoreError};
use crate::sync::export::export_instructions;
use crate::sync::import::{ImportError, ImportSummary, import_instructions};

const WORKSPACE: &str = r#"<project version="4">
  <component name="ChangeListManager">
    <list default="true" id="abc" name="Changes"/>
  </component>
  <component name="AIAssistantCustomInstructionsStorage">
    <option name="instructions">
      <map>
        <entry key="commit-message">
          <value><AIAssistantStoredInstruction>
            <option name="actionId" value="commit-message"/>
            <option name="content" value="Use conventional commits"/>
          </AIAssistantStoredInstruction></value>
        </entry>
        <entry key="code-review">
          <value><AIAssistantStoredInstruction>
            <option name="actionId" value="code-review"/>
            <option name="content" value="Be strict"/>
          </AIAssistantStoredInstruction></value>
        </entry>
      </map>
    </option>
  </component>
</project>"#;

const EMPTY_WORKSPACE: &str = "<project version=\"4\"><component name=\"Other\"/></project>";

fn write_workspace(dir: &Path, xml: &str) -> PathBuf {
    let path = dir.join("workspace.xml");
    std::fs::write(&path, xml).unwrap();
    path
}

fn entries_of(workspace: &Path) -> Vec<store::Instruction> {
    let root = store::load_document(workspace).unwrap();
    store::find_component(&root)
        .map(store::list_entries)
        .unwrap_or_default()
}

#[test]
fn test_import_missing_workspace_is_not_found() {
    let temp_dir = TempDir::new().unwrap();
    let input_dir = temp_dir.path().join(".ai");
    std::fs::create_dir_all(&input_dir).unwrap();

    let result = import_instructions(&temp_dir.path().join("workspace.xml"), &input_dir);
    assert!(matches!(
        result.unwrap_err(),
        ImportError::Store(StoreError::NotFound(_))
    ));
}

#[test]
fn test_import_missing_directory_is_distinct_error() {
    let temp_dir = TempDir::new().unwrap();
    let workspace = write_workspace(temp_dir.path(), EMPTY_WORKSPACE);

    let result = import_instructions(&workspace, &temp_dir.path().join(".ai"));
    assert!(matches!(result.unwrap_err(), ImportError::DirNotFound(_)));
}

#[test]
fn test_import_empty_directory_merges_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let workspace = write_workspace(temp_dir.path(), EMPTY_WORKSPACE);
    let input_dir = temp_dir.path().join(".ai");
    std::fs::create_dir_all(&input_dir).unwrap();

    let summary = import_instructions(&workspace, &input_dir).unwrap();
    assert_eq!(summary, ImportSummary::default());
    // Nothing merged, nothing rewritten.
    assert_eq!(std::fs::read_to_string(&workspace).unwrap(), EMPTY_WORKSPACE);
}

#[test]
fn test_import_creates_component_when_absent() {
    let temp_dir = TempDir::new().unwrap();
    let workspace = write_workspace(temp_dir.path(), EMPTY_WORKSPACE);
    let input_dir = temp_dir.path().join(".ai");
    std::fs::create_dir_all(&input_dir).unwrap();
    std::fs::write(input_dir.join("terminal.md"), "# terminal\n\nPrefer fish").unwrap();

    let summary = import_instructions(&workspace, &input_dir).unwrap();
    assert_eq!(summary.merged, 1);

    let entries = entries_of(&workspace);
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].id, "terminal");
    assert_eq!(entries[0].content, "Prefer fish");

    // The unrelated component survives the rewrite.
    let root = store::load_document(&workspace).unwrap();
    assert!(root.children.iter().any(|node| {
        node.as_element()
            .is_some_and(|el| el.attributes.get("name").map(String::as_str) == Some("Other"))
    }));
}

#[test]
fn test_import_merge_is_non_destructive() {
    let temp_dir = TempDir::new().unwrap();
    let workspace = write_workspace(temp_dir.path(), WORKSPACE);
    let input_dir = temp_dir.path().join(".ai");
    std::fs::create_dir_all(&input_dir).unwrap();
    // Only commit-message is present in the import set.
    std::fs::write(
        input_dir.join("commit-message.md"),
        "# commit-message\n\nImperative mood",
    )
    .unwrap();

    let summary = import_instructions(&workspace, &input_dir).unwrap();
    assert_eq!(summary.merged, 1);

    let entries = entries_of(&workspace);
    assert_eq!(entries.len(), 2);
    let commit = entries.iter().find(|e| e.id == "commit-message").unwrap();
    assert_eq!(commit.content, "Imperative mood");
    // code-review was absent from the input set and is untouched.
    let review = entries.iter().find(|e| e.id == "code-review").unwrap();
    assert_eq!(review.content, "Be strict");
}

#[test]
fn test_import_skips_malformed_files() {
    let temp_dir = TempDir::new().unwrap();
    let workspace = write_workspace(temp_dir.path(), EMPTY_WORKSPACE);
    let input_dir = temp_dir.path().join(".ai");
    std::fs::create_dir_all(&input_dir).unwrap();
    std::fs::write(input_dir.join("good.md"), "# good\n\ncontent").unwrap();
    std::fs::write(input_dir.join("bad.md"), "no header line").unwrap();

    let summary = import_instructions(&workspace, &input_dir).unwrap();
    assert_eq!(summary.merged, 1);
    assert_eq!(entries_of(&workspace).len(), 1);
}

#[test]
fn test_import_is_idempotent_with_unconditional_count() {
    let temp_dir = TempDir::new().unwrap();
    let workspace = write_workspace(temp_dir.path(), WORKSPACE);
    let input_dir = temp_dir.path().join(".ai");
    std::fs::create_dir_all(&input_dir).unwrap();
    std::fs::write(
        input_dir.join("commit-message.md"),
        "# commit-message\n\nUse conventional commits",
    )
    .unwrap();

    let first = import_instructions(&workspace, &input_dir).unwrap();
    let second = import_instructions(&workspace, &input_dir).unwrap();

    // Upsert is unconditional: unchanged files still count as merged.
    assert_eq!(first.merged, 1);
    assert_eq!(second.merged, 1);
    assert_eq!(entries_of(&workspace).len(), 2);
}

#[test]
fn test_import_malformed_document_leaves_it_intact() {
    let temp_dir = TempDir::new().unwrap();
    let broken = "<project version=\"4\"><component>";
    let workspace = write_workspace(temp_dir.path(), broken);
    let input_dir = temp_dir.path().join(".ai");
    std::fs::create_dir_all(&input_dir).unwrap();
    std::fs::write(input_dir.join("x.md"), "# x\n\ny").unwrap();

    let result = import_instructions(&workspace, &input_dir);
    assert!(matches!(
        result.unwrap_err(),
        ImportError::Store(StoreError::Parse(_))
    ));
    assert_eq!(std::fs::read_to_string(&workspace).unwrap(), broken);
}

#[test]
fn test_export_then_import_round_trip() {
    let temp_dir = TempDir::new().unwrap();
    let source = write_workspace(temp_dir.path(), WORKSPACE);
    let exchange = temp_dir.path().join(".ai");

    let exported = export_instructions(&source, &exchange).unwrap();
    assert_eq!(exported.total(), 2);

    // A fresh document that never held the instructions component.
    let target_dir = temp_dir.path().join("other");
    std::fs::create_dir_all(&target_dir).unwrap();
    let target = write_workspace(&target_dir, EMPTY_WORKSPACE);

    let imported = import_instructions(&target, &exchange).unwrap();
    assert_eq!(imported.merged, 2);

    let mut entries = entries_of(&target);
    entries.sort_by(|a, b| a.id.cmp(&b.id));
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].id, "code-review");
    assert_eq!(entries[0].content, "Be strict");
    assert_eq!(entries[1].id, "commit-message");
    assert_eq!(entries[1].content, "Use conventional commits");
}

#[test]
fn test_multiline_content_survives_round_trip() {
    let temp_dir = TempDir::new().unwrap();
    let source = write_workspace(temp_dir.path(), EMPTY_WORKSPACE);
    let input_dir = temp_dir.path().join(".ai");
    std::fs::create_dir_all(&input_dir).unwrap();
    std::fs::write(
        input_dir.join("style.md"),
        "# style\n\nFirst rule.\n\nSecond rule with <angle> & \"quotes\".",
    )
    .unwrap();

    import_instructions(&source, &input_dir).unwrap();

    let out_dir = temp_dir.path().join("out");
    let summary = export_instructions(&source, &out_dir).unwrap();
    assert_eq!(summary.written, vec!["style.md"]);

    let body = std::fs::read_to_string(out_dir.join("style.md")).unwrap();
    assert_eq!(
        body,
        "# style\n\nFirst rule.\n\nSecond rule with <angle> & \"quotes\"."
    );
}

#[test]
fn test_colliding_ids_both_importable_via_header() {
    let temp_dir = TempDir::new().unwrap();
    let workspace = write_workspace(temp_dir.path(), EMPTY_WORKSPACE);
    let input_dir = temp_dir.path().join(".ai");
    std::fs::create_dir_all(&input_dir).unwrap();
    // Two files whose embedded ids would sanitize to the same file name.
    std::fs::write(input_dir.join("a_b.md"), "# a/b\n\nslash").unwrap();
    std::fs::write(input_dir.join("a_b_2.md"), "# a:b\n\ncolon").unwrap();

    let summary = import_instructions(&workspace, &input_dir).unwrap();
    assert_eq!(summary.merged, 2);

    let mut entries = entries_of(&workspace);
    entries.sort_by(|a, b| a.id.cmp(&b.id));
    assert_eq!(entries[0].id, "a/b");
    assert_eq!(entries[1].id, "a:b");
}
