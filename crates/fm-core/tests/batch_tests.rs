//! Batch processing against real directories

use fm_core::{BatchOptions, BatchProcessor, FileStatus, Ruleset, load_ruleset};
use fm_test_utils::vault::TestVault;
use pretty_assertions::assert_eq;
use std::fs;

fn processor(top: &[&str], bottom: &[&str]) -> BatchProcessor {
    BatchProcessor::new(
        Ruleset::new(top.iter().copied(), bottom.iter().copied()),
        BatchOptions::default(),
    )
}

#[test]
fn test_reorders_documents_in_place() {
    let vault = TestVault::new();
    vault.write_doc(
        "post.md",
        "---\ntags: rust\nauthor: me\ntitle: Hello\n---\n# Hello\n\nBody text.\n",
    );

    let report = processor(&["title"], &["tags"])
        .process_dir(vault.root())
        .unwrap();

    assert_eq!(report.attempted(), 1);
    assert_eq!(report.succeeded(), 1);
    assert_eq!(report.files[0].status, FileStatus::Reordered);
    vault.assert_doc(
        "post.md",
        "---\ntitle: Hello\nauthor: me\ntags: rust\n---\n# Hello\n\nBody text.\n",
    );
}

#[test]
fn test_reorder_keeps_blank_line_before_body() {
    let vault = TestVault::new();
    vault.write_doc("post.md", "---\nauthor: me\ntitle: Hello\n---\n\n# Hello\n");

    let report = processor(&["title"], &[]).process_dir(vault.root()).unwrap();

    assert_eq!(report.files[0].status, FileStatus::Reordered);
    vault.assert_doc("post.md", "---\ntitle: Hello\nauthor: me\n---\n\n# Hello\n");
}

#[test]
fn test_document_without_frontmatter_is_untouched() {
    let vault = TestVault::new();
    let original = "# No frontmatter\n\n---\n\ntitle: nope\n";
    vault.write_doc("plain.md", original);

    let report = processor(&["title"], &[]).process_dir(vault.root()).unwrap();

    assert_eq!(report.files[0].status, FileStatus::NoFrontmatter);
    assert_eq!(report.failed(), 1);
    vault.assert_doc("plain.md", original);
}

#[test]
fn test_invalid_block_is_skipped_and_untouched() {
    let vault = TestVault::new();
    let original = "---\ntitle: [broken\n---\nBody\n";
    vault.write_doc("broken.md", original);

    let report = processor(&["title"], &[]).process_dir(vault.root()).unwrap();

    assert_eq!(report.files[0].status, FileStatus::NoFrontmatter);
    vault.assert_doc("broken.md", original);
}

#[test]
fn test_already_ordered_document_is_unchanged() {
    let vault = TestVault::new();
    let original = "---\ntitle: Hello\nauthor: me\n---\nBody\n";
    vault.write_doc("done.md", original);

    let report = processor(&["title"], &[]).process_dir(vault.root()).unwrap();

    assert_eq!(report.files[0].status, FileStatus::Unchanged);
    assert_eq!(report.succeeded(), 1);
    vault.assert_doc("done.md", original);
}

#[test]
fn test_empty_ruleset_only_normalizes_formatting() {
    let vault = TestVault::new();
    vault.write_doc("post.md", "---\nb: 1\ntags: [x, y]\n---\nBody\n");

    let report = BatchProcessor::new(Ruleset::default(), BatchOptions::default())
        .process_dir(vault.root())
        .unwrap();

    assert_eq!(report.files[0].status, FileStatus::Reordered);
    vault.assert_doc("post.md", "---\nb: 1\ntags:\n- x\n- y\n---\nBody\n");
}

#[test]
fn test_dry_run_writes_nothing() {
    let vault = TestVault::new();
    let original = "---\nb: 1\na: 2\n---\nBody\n";
    vault.write_doc("post.md", original);

    let options = BatchOptions {
        dry_run: true,
        ..BatchOptions::default()
    };
    let report = BatchProcessor::new(Ruleset::new(["a"], Vec::<String>::new()), options)
        .process_dir(vault.root())
        .unwrap();

    assert_eq!(report.files[0].status, FileStatus::WouldReorder);
    vault.assert_doc("post.md", original);
}

#[test]
fn test_only_direct_children_with_extension() {
    let vault = TestVault::new();
    vault.write_doc("b.md", "---\nz: 1\na: 2\n---\n");
    vault.write_doc("a.md", "---\nz: 1\na: 2\n---\n");
    vault.write_doc("notes.txt", "---\nz: 1\na: 2\n---\n");
    vault.write_doc("sub/c.md", "---\nz: 1\na: 2\n---\n");

    let report = processor(&["a"], &[]).process_dir(vault.root()).unwrap();

    let names: Vec<_> = report
        .files
        .iter()
        .map(|f| f.path.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["a.md", "b.md"]);
    vault.assert_doc("notes.txt", "---\nz: 1\na: 2\n---\n");
    vault.assert_doc("sub/c.md", "---\nz: 1\na: 2\n---\n");
}

#[test]
fn test_custom_extension() {
    let vault = TestVault::new();
    vault.write_doc("page.markdown", "---\nz: 1\na: 2\n---\n");
    vault.write_doc("page.md", "---\nz: 1\na: 2\n---\n");

    let options = BatchOptions {
        extension: "markdown".into(),
        ..BatchOptions::default()
    };
    let report = BatchProcessor::new(Ruleset::new(["a"], Vec::<String>::new()), options)
        .process_dir(vault.root())
        .unwrap();

    assert_eq!(report.attempted(), 1);
    vault.assert_doc("page.markdown", "---\na: 2\nz: 1\n---\n");
    vault.assert_doc("page.md", "---\nz: 1\na: 2\n---\n");
}

#[test]
fn test_unreadable_document_does_not_stop_batch() {
    let vault = TestVault::new();
    fs::write(vault.root().join("a_binary.md"), [0xff, 0xfe, 0x00]).unwrap();
    vault.write_doc("b_good.md", "---\nz: 1\na: 2\n---\n");

    let report = processor(&["a"], &[]).process_dir(vault.root()).unwrap();

    assert_eq!(report.attempted(), 2);
    assert!(matches!(report.files[0].status, FileStatus::Failed { .. }));
    assert_eq!(report.files[1].status, FileStatus::Reordered);
    vault.assert_doc("b_good.md", "---\na: 2\nz: 1\n---\n");
}

#[test]
fn test_conflicting_keys_are_reported() {
    let vault = TestVault::new();
    vault.write_doc("post.md", "---\nmeta_id: 1\ntitle: t\n---\n");

    let report = processor(&["meta_*", "title"], &["meta_id"])
        .process_dir(vault.root())
        .unwrap();

    assert_eq!(report.files[0].conflicts, vec!["meta_id".to_string()]);
    vault.assert_doc("post.md", "---\ntitle: t\nmeta_id: 1\n---\n");
}

#[test]
fn test_missing_directory_is_error() {
    let vault = TestVault::new();
    let result = processor(&[], &[]).process_dir(&vault.root().join("missing"));
    assert!(matches!(result, Err(fm_core::Error::NotADirectory { .. })));
}

#[test]
fn test_second_run_changes_nothing() {
    let vault = TestVault::new();
    vault.write_doc("post.md", "---\ntag_b: 1\nx: 2\ntitle: t\ntag_a: 3\n---\nBody\n");
    let processor = processor(&["title"], &["tag_*"]);

    processor.process_dir(vault.root()).unwrap();
    let first = vault.read_doc("post.md");
    let report = processor.process_dir(vault.root()).unwrap();

    assert_eq!(first, "---\ntitle: t\nx: 2\ntag_b: 1\ntag_a: 3\n---\nBody\n");
    assert_eq!(report.files[0].status, FileStatus::Unchanged);
    vault.assert_doc("post.md", &first);
}

#[test]
fn test_loaded_ruleset_drives_batch() {
    let vault = TestVault::new();
    let config = vault.write_config("frontmatter_config.json", &["title", "date"], &["tag*"]);
    vault.write_doc("post.md", "---\ntags: x\ndate: d\nbody: b\ntitle: t\n---\n");

    let load = load_ruleset(&config);
    assert!(!load.is_degraded());
    BatchProcessor::new(load.ruleset, BatchOptions::default())
        .process_dir(vault.root())
        .unwrap();

    vault.assert_doc("post.md", "---\ntitle: t\ndate: d\nbody: b\ntags: x\n---\n");
}

#[test]
fn test_report_serializes_status_inline() {
    let vault = TestVault::new();
    vault.write_doc("post.md", "no frontmatter\n");

    let report = processor(&[], &[]).process_dir(vault.root()).unwrap();
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["files"][0]["status"], "no_frontmatter");
    assert!(json["files"][0].get("conflicts").is_none());
}
