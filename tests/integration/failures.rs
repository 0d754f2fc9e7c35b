use super::support::*;
use rm_mirror::error::MirrorError;
use rm_mirror::sync::RunMode;
use serde_json::json;
use std::fs;

#[test]
fn trashed_records_never_reach_the_mirror() {
    let fixture = Fixture::new();
    fixture.folder(NOTES, "Notes", "");
    fixture.document(DRAFT, "Draft", NOTES, T1);
    fixture.document(PLAN, "Plan", "trash", T1);
    fixture.write_json(
        WORK,
        json!({
            "visibleName": "Old Work",
            "lastModified": T1,
            "parent": "",
            "type": "CollectionType",
            "deleted": true,
        }),
    );
    // Stale copies from before the records were trashed
    fs::write(fixture.path(&pdf("plan", PLAN)), b"x").unwrap();
    fs::create_dir(fixture.path(&entry("old_work", WORK))).unwrap();

    let report = fixture.run();

    assert_eq!(report.records_loaded, 4);
    assert_eq!(report.nodes, 2);
    assert_eq!(report.removed.len(), 2);
    assert_eq!(
        snapshot(fixture.root()),
        vec![
            entry("notes", NOTES),
            format!("{}/{}", entry("notes", NOTES), pdf("draft", DRAFT)),
        ]
    );
}

#[test]
fn missing_parent_aborts_before_any_mutation() {
    let fixture = Fixture::new();
    fixture.document(DRAFT, "Draft", NOTES, T1);
    fs::create_dir(fixture.path(&entry("ghost", GHOST))).unwrap();

    let result = fixture.try_run_with(&fixture.renderer, RunMode::Apply);

    assert!(matches!(result, Err(MirrorError::MissingRecord { .. })));
    assert_eq!(snapshot(fixture.root()), vec![entry("ghost", GHOST)]);
}

#[test]
fn child_of_trashed_folder_is_missing_record() {
    let fixture = Fixture::new();
    fixture.folder(NOTES, "Notes", "trash");
    fixture.document(DRAFT, "Draft", NOTES, T1);

    let result = fixture.try_run_with(&fixture.renderer, RunMode::Apply);
    assert!(matches!(
        result,
        Err(MirrorError::MissingRecord { ref parent, .. }) if parent == NOTES
    ));
}

#[test]
fn malformed_metadata_is_fatal() {
    let fixture = Fixture::new();
    fixture.folder(NOTES, "Notes", "");
    fs::write(
        fixture.source.path().join(format!("{}.metadata", DRAFT)),
        "{ not json",
    )
    .unwrap();

    let result = fixture.try_run_with(&fixture.renderer, RunMode::Apply);
    assert!(matches!(result, Err(MirrorError::MetadataParse { .. })));
    assert!(snapshot(fixture.root()).is_empty());
}

#[test]
fn render_failure_leaves_document_missing() {
    let fixture = Fixture::new();
    fixture.document(DRAFT, "Draft", "", T1);

    let result = fixture.try_run_with(&FailingRenderer, RunMode::Apply);

    assert!(matches!(result, Err(MirrorError::Render(_))));
    assert!(!fixture.path(&pdf("draft", DRAFT)).exists());

    let report = fixture.run();
    assert_eq!(report.created.len(), 1);
}

#[test]
fn missing_mirror_root_is_an_error() {
    let fixture = Fixture::new();
    fixture.folder(NOTES, "Notes", "");
    let fs_impl = rm_mirror::mirror::LocalFs::new();
    let source = rm_mirror::records::metadata::MetadataDirectory::new(fixture.source.path());
    let missing = fixture.root().join("absent");

    let result = rm_mirror::sync::MirrorSync::new(&fs_impl, &fixture.renderer, fixture.source.path())
        .run_from_source(&source, &missing, RunMode::Apply);

    assert!(matches!(result, Err(MirrorError::Io { .. })));
    assert!(!missing.exists());
}

#[test]
fn missing_source_directory_is_source_unavailable() {
    let fixture = Fixture::new();
    let source = rm_mirror::records::metadata::MetadataDirectory::new(
        fixture.source.path().join("absent"),
    );
    let fs_impl = rm_mirror::mirror::LocalFs::new();

    let result = rm_mirror::sync::MirrorSync::new(&fs_impl, &fixture.renderer, fixture.source.path())
        .run_from_source(&source, fixture.root(), RunMode::Apply);

    assert!(matches!(
        result,
        Err(MirrorError::SourceUnavailable { .. })
    ));
}
