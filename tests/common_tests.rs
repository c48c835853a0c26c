//! Tests for the shared integration test helpers

mod common;

use common::{SCOPE_SECTION, SCOPE_SECTION_EXPANDED, TestWorkspace};

#[test]
fn test_workspace_file_operations() {
    let workspace = TestWorkspace::new();
    workspace.write_file("nested/doc.txt", "content\n");

    assert!(workspace.file_exists("nested/doc.txt"));
    assert_eq!(workspace.read_file("nested/doc.txt"), "content\n");
    assert_eq!(workspace.entries(), vec!["nested".to_string()]);
}

#[test]
fn test_index_document_contains_section() {
    let doc = common::index_document(SCOPE_SECTION);
    assert!(doc.starts_with("index:\n"));
    assert!(doc.contains(SCOPE_SECTION));
    assert!(!doc.contains(SCOPE_SECTION_EXPANDED));
    assert_eq!(doc.matches(SCOPE_SECTION).count(), 1);
}
