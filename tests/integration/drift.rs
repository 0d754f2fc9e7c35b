use super::support::*;
use filetime::{set_file_mtime, FileTime};
use rm_mirror::mirror::StaleReason;
use std::fs;

#[test]
fn renamed_document_is_replaced() {
    let fixture = Fixture::new();
    fixture.document(DRAFT, "Draft", "", T1);
    fixture.run();

    fixture.document(DRAFT, "Final Draft", "", T1);
    let report = fixture.run();

    assert_eq!(report.removed.len(), 1);
    assert_eq!(report.removed[0].reason, StaleReason::Renamed);
    assert!(!fixture.path(&pdf("draft", DRAFT)).exists());
    assert!(fixture.path(&pdf("final_draft", DRAFT)).is_file());
    assert_eq!(fixture.renderer.calls(), 2);
}

#[test]
fn renamed_folder_is_rebuilt_with_children() {
    let fixture = Fixture::new();
    fixture.folder(NOTES, "Notes", "");
    fixture.document(DRAFT, "Draft", NOTES, T1);
    fixture.run();

    fixture.folder(NOTES, "Journal", "");
    let report = fixture.run();

    assert_eq!(report.removed.len(), 1);
    assert!(!fixture.path(&entry("notes", NOTES)).exists());
    assert!(fixture
        .path(&entry("journal", NOTES))
        .join(pdf("draft", DRAFT))
        .is_file());
    assert_eq!(report.created.len(), 2);
}

#[test]
fn moved_document_is_recreated_under_new_parent() {
    let fixture = Fixture::new();
    fixture.folder(NOTES, "Notes", "");
    fixture.folder(WORK, "Work", "");
    fixture.document(DRAFT, "Draft", NOTES, T1);
    fixture.run();

    fixture.document(DRAFT, "Draft", WORK, T1);
    let report = fixture.run();

    assert_eq!(report.removed.len(), 1);
    assert_eq!(report.removed[0].reason, StaleReason::Misplaced);
    assert!(!fixture
        .path(&entry("notes", NOTES))
        .join(pdf("draft", DRAFT))
        .exists());
    assert!(fixture
        .path(&entry("work", WORK))
        .join(pdf("draft", DRAFT))
        .is_file());
    assert_eq!(report.kept, 2);
}

#[test]
fn orphans_are_pruned_and_siblings_kept() {
    let fixture = Fixture::new();
    fixture.folder(NOTES, "Notes", "");
    fixture.document(DRAFT, "Draft", NOTES, T1);
    fixture.run();

    let notes = fixture.path(&entry("notes", NOTES));
    let orphan_dir = fixture.path(&entry("ghost", GHOST));
    fs::create_dir(&orphan_dir).unwrap();
    fs::write(orphan_dir.join("inner.pdf"), b"x").unwrap();
    let orphan_file = notes.join(pdf("old", PLAN));
    fs::write(&orphan_file, b"x").unwrap();

    let report = fixture.run();

    assert_eq!(report.removed.len(), 2);
    assert!(report
        .removed
        .iter()
        .all(|e| e.reason == StaleReason::Orphan));
    assert!(!orphan_dir.exists());
    assert!(!orphan_file.exists());
    assert!(notes.join(pdf("draft", DRAFT)).is_file());
    assert!(report.created.is_empty());
}

#[test]
fn deleted_record_prunes_its_entry() {
    let fixture = Fixture::new();
    fixture.folder(NOTES, "Notes", "");
    fixture.document(DRAFT, "Draft", NOTES, T1);
    fixture.run();

    fixture.remove_record(DRAFT);
    let report = fixture.run();

    assert_eq!(report.removed.len(), 1);
    assert_eq!(
        snapshot(fixture.root()),
        vec![entry("notes", NOTES)]
    );
}

#[test]
fn document_mtime_drift_triggers_rerender() {
    let fixture = Fixture::new();
    fixture.document(DRAFT, "Draft", "", T1);
    fixture.run();

    let draft = fixture.path(&pdf("draft", DRAFT));
    set_file_mtime(&draft, FileTime::from_unix_time(42, 0)).unwrap();

    let report = fixture.run();
    assert_eq!(report.removed[0].reason, StaleReason::Outdated);
    assert_eq!(mtime_secs(&draft), T1 / 1000);
    assert_eq!(fixture.renderer.calls(), 2);
}

#[test]
fn sub_second_drift_is_not_outdated() {
    let fixture = Fixture::new();
    fixture.document(DRAFT, "Draft", "", T1 + 999);
    fixture.run();

    let draft = fixture.path(&pdf("draft", DRAFT));
    set_file_mtime(&draft, FileTime::from_unix_time(T1 / 1000, 500_000_000)).unwrap();

    assert!(fixture.run().is_noop());
}

#[test]
fn folder_mtime_drift_is_ignored() {
    let fixture = Fixture::new();
    fixture.folder(NOTES, "Notes", "");
    fixture.run();

    let notes = fixture.path(&entry("notes", NOTES));
    set_file_mtime(&notes, FileTime::from_unix_time(42, 0)).unwrap();

    let report = fixture.run();
    assert!(report.is_noop());
    assert_eq!(report.kept, 1);
}

#[test]
fn kind_mismatch_is_replaced() {
    let fixture = Fixture::new();
    fixture.document(DRAFT, "Draft", "", T1);
    fixture.folder(NOTES, "Notes", "");

    // A directory where the document belongs and a file where the folder belongs
    fs::create_dir(fixture.path(&pdf("draft", DRAFT))).unwrap();
    fs::write(fixture.path(&entry("notes", NOTES)), b"x").unwrap();

    let report = fixture.run();

    assert_eq!(report.removed.len(), 2);
    assert!(report
        .removed
        .iter()
        .all(|e| e.reason == StaleReason::KindMismatch));
    assert!(fixture.path(&pdf("draft", DRAFT)).is_file());
    assert!(fixture.path(&entry("notes", NOTES)).is_dir());
}

#[test]
fn foreign_entries_are_left_alone() {
    let fixture = Fixture::new();
    fixture.folder(NOTES, "Notes", "");
    fixture.document(DRAFT, "Draft", NOTES, T1);

    let foreign = [
        "README.txt".to_string(),
        "exports".to_string(),
        format!("Notes_{}", NOTES),
        format!("notes_{}", NOTES.to_uppercase()),
        format!("draft_{}.PDF", DRAFT),
    ];
    for name in &foreign {
        fs::write(fixture.path(name), b"mine").unwrap();
    }
    // Never descended, so a stale-looking name inside survives
    fs::create_dir(fixture.path("archive")).unwrap();
    fs::write(fixture.path("archive").join(pdf("ghost", GHOST)), b"old").unwrap();

    let report = fixture.run();
    assert!(report.removed.is_empty());
    assert_eq!(report.created.len(), 2);
    for name in &foreign {
        assert_eq!(fs::read(fixture.path(name)).unwrap(), b"mine");
    }
    assert!(fixture.path("archive").join(pdf("ghost", GHOST)).exists());

    assert!(fixture.run().is_noop());
}
