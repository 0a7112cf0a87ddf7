//! Join and lookup behavior of the record store over the demo fixture.

use std::io::Write;

use pretty_assertions::assert_eq;
use rstest::rstest;
use gw_core::{CoreError, RecordStore};

#[rstest]
#[case("bloemhof", 8, 10, 8, 2)]
#[case("ventura", 0, 0, 0, 1)]
#[case("crestmont", 0, 0, 0, 0)]
#[case("missing", 0, 0, 0, 0)]
fn joins_by_project_id(
    #[case] project_id: &str,
    #[case] milestones: usize,
    #[case] tasks: usize,
    #[case] files: usize,
    #[case] change_orders: usize,
) {
    let store = RecordStore::demo().unwrap();
    assert_eq!(store.milestones_for(project_id).len(), milestones);
    assert_eq!(store.tasks_for(project_id).len(), tasks);
    assert_eq!(store.files_for(project_id).len(), files);
    assert_eq!(store.change_orders_for(project_id).len(), change_orders);
}

#[test]
fn milestone_join_keeps_fixture_order() {
    let store = RecordStore::demo().unwrap();
    let ids: Vec<&str> = store
        .milestones_for("bloemhof")
        .iter()
        .map(|milestone| milestone.id.as_str())
        .collect();
    assert_eq!(
        ids,
        vec!["ms-1", "ms-2", "ms-3", "ms-4", "ms-5", "ms-6", "ms-7", "ms-8"]
    );
}

#[test]
fn archived_lookup_distinguishes_missing_ids() {
    let store = RecordStore::demo().unwrap();
    let found = store.require_archived_project("arch-6").unwrap();
    assert_eq!(found.name, "Templeton Ranch Addition");
    assert!(found.testimonial.is_none());

    let err = store.require_archived_project("arch-99").unwrap_err();
    assert!(matches!(err, CoreError::NotFound { .. }));
}

#[test]
fn loads_fixture_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{"monthly_revenue": [{{"month": "Jan 2026", "revenue": 1000}}]}}"#
    )
    .unwrap();

    let store = RecordStore::from_path(file.path()).unwrap();
    assert_eq!(store.monthly_revenue.len(), 1);
    assert!(store.projects.is_empty());
}

#[test]
fn missing_fixture_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = RecordStore::from_path(&dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, CoreError::Io { .. }));
    assert!(err.to_string().contains("absent.json"));
}
