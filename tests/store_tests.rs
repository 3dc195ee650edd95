mod common;
use common::{date, hm, normal, span};
use rtimesheet::errors::AppError;
use rtimesheet::models::Record;
use rtimesheet::store::{RecordStore, UpdateOutcome};
use std::fs;

fn store() -> (tempfile::TempDir, RecordStore) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let store = RecordStore::new(dir.path().join("records"));
    (dir, store)
}

#[test]
fn test_add_writes_expected_strings() {
    let (_dir, store) = store();
    let d = date(15, 3, 2024);

    store
        .add(normal(d, "09:00-17:00", "12:00-12:30", "sick leave"))
        .unwrap();

    let path = store.month_path(2024, 3);
    assert!(path.ends_with("timesheet_2024_03.json"));

    let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    let row = &json[0];
    assert_eq!(row["date"], "15.03.2024");
    assert_eq!(row["start_day"], "09:00");
    assert_eq!(row["end_day"], "17:00");
    assert_eq!(row["start_break"], "12:00");
    assert_eq!(row["end_break"], "12:30");
    assert_eq!(row["comment"], "sick leave");
    assert_eq!(row["special"], "False");
}

#[test]
fn test_file_is_pretty_printed() {
    let (_dir, store) = store();
    store
        .add(normal(date(1, 4, 2024), "08:00-16:00", "12:00-12:45", ""))
        .unwrap();

    let content = fs::read_to_string(store.month_path(2024, 4)).unwrap();
    assert!(content.starts_with("[\n  {\n    \"date\": \"01.04.2024\""));
}

#[test]
fn test_second_add_on_same_date_is_rejected() {
    let (_dir, store) = store();
    let d = date(4, 3, 2024);

    store.add(normal(d, "09:00-17:00", "12:00-12:30", "first")).unwrap();
    let err = store
        .add(normal(d, "10:00-18:00", "13:00-13:30", "second"))
        .unwrap_err();
    assert!(matches!(err, AppError::RecordConflict(ref s) if s == "04.03.2024"));

    let month = store.load(2024, 3).unwrap();
    assert_eq!(month.len(), 1);
    assert_eq!(month.get(d).unwrap().comment, "first");
}

#[test]
fn test_round_trip_preserves_every_field() {
    let (_dir, store) = store();
    let regular = normal(date(5, 3, 2024), "07:45-16:15", "11:30-12:00", "Schule");
    let special = Record::special(date(6, 3, 2024), "Urlaub");

    store.add(regular.clone()).unwrap();
    store.add(special.clone()).unwrap();

    let month = store.load(2024, 3).unwrap();
    assert_eq!(month.get(regular.date), Some(&regular));
    assert_eq!(month.get(special.date), Some(&special));
    assert_eq!(special.work.start, hm(0, 0));
}

#[test]
fn test_records_keep_insertion_order_on_disk() {
    let (_dir, store) = store();
    store.add(normal(date(20, 3, 2024), "09:00-17:00", "12:00-12:30", "")).unwrap();
    store.add(normal(date(5, 3, 2024), "09:00-17:00", "12:00-12:30", "")).unwrap();

    let month = store.load(2024, 3).unwrap();
    let on_disk: Vec<_> = month.records().iter().map(|r| r.date).collect();
    assert_eq!(on_disk, vec![date(20, 3, 2024), date(5, 3, 2024)]);

    let sorted: Vec<_> = month.sorted().iter().map(|r| r.date).collect();
    assert_eq!(sorted, vec![date(5, 3, 2024), date(20, 3, 2024)]);
}

#[test]
fn test_months_are_stored_separately() {
    let (_dir, store) = store();
    store.add(normal(date(31, 1, 2024), "09:00-17:00", "12:00-12:30", "")).unwrap();
    store.add(normal(date(1, 2, 2024), "09:00-17:00", "12:00-12:30", "")).unwrap();

    assert_eq!(store.load(2024, 1).unwrap().len(), 1);
    assert_eq!(store.load(2024, 2).unwrap().len(), 1);
}

#[test]
fn test_update_missing_date_fails() {
    let (_dir, store) = store();
    let err = store
        .update(normal(date(7, 3, 2024), "09:00-17:00", "12:00-12:30", ""))
        .unwrap_err();
    assert!(matches!(err, AppError::RecordNotFound(_)));
    assert!(!store.month_path(2024, 3).exists());
}

#[test]
fn test_update_replaces_record_in_place() {
    let (_dir, store) = store();
    store.add(normal(date(7, 3, 2024), "09:00-17:00", "12:00-12:30", "a")).unwrap();
    store.add(normal(date(8, 3, 2024), "09:00-17:00", "12:00-12:30", "b")).unwrap();

    let changed = normal(date(7, 3, 2024), "08:00-15:00", "11:00-11:15", "changed");
    assert_eq!(store.update(changed.clone()).unwrap(), UpdateOutcome::Updated);

    let month = store.load(2024, 3).unwrap();
    assert_eq!(month.len(), 2);
    assert_eq!(month.records()[0], changed);
    assert_eq!(month.records()[1].comment, "b");
}

#[test]
fn test_update_with_same_fields_leaves_file_untouched() {
    let (_dir, store) = store();
    let record = normal(date(11, 3, 2024), "09:00-17:00", "12:00-12:30", "same");
    store.add(record.clone()).unwrap();

    let path = store.month_path(2024, 3);
    let before = fs::read(&path).unwrap();

    assert_eq!(store.update(record).unwrap(), UpdateOutcome::Unchanged);
    assert_eq!(fs::read(&path).unwrap(), before);
}

#[test]
fn test_update_to_special_drops_times() {
    let (_dir, store) = store();
    store.add(normal(date(12, 3, 2024), "09:00-17:00", "12:00-12:30", "")).unwrap();

    store.update(Record::special(date(12, 3, 2024), "krank")).unwrap();

    let month = store.load(2024, 3).unwrap();
    let r = month.get(date(12, 3, 2024)).unwrap();
    assert!(r.special);
    assert_eq!(r.work, span("00:00-00:00"));
}

#[test]
fn test_delete_missing_date_fails() {
    let (_dir, store) = store();
    store.add(normal(date(13, 3, 2024), "09:00-17:00", "12:00-12:30", "")).unwrap();

    let err = store.delete(date(14, 3, 2024)).unwrap_err();
    assert!(matches!(err, AppError::RecordNotFound(_)));
    assert_eq!(store.load(2024, 3).unwrap().len(), 1);
}

#[test]
fn test_delete_removes_exactly_one_record() {
    let (_dir, store) = store();
    for day in [13, 14, 15] {
        store
            .add(normal(date(day, 3, 2024), "09:00-17:00", "12:00-12:30", ""))
            .unwrap();
    }

    let removed = store.delete(date(14, 3, 2024)).unwrap();
    assert_eq!(removed.date, date(14, 3, 2024));

    let month = store.load(2024, 3).unwrap();
    assert_eq!(month.len(), 2);
    assert!(month.exists(date(13, 3, 2024)));
    assert!(!month.exists(date(14, 3, 2024)));
    assert!(month.exists(date(15, 3, 2024)));
}

#[test]
fn test_deleting_last_record_removes_file() {
    let (_dir, store) = store();
    store.add(normal(date(18, 3, 2024), "09:00-17:00", "12:00-12:30", "")).unwrap();

    store.delete(date(18, 3, 2024)).unwrap();

    assert!(!store.month_path(2024, 3).exists());
    assert!(store.load(2024, 3).unwrap().is_empty());
}

#[test]
fn test_empty_file_loads_as_empty_collection() {
    let (dir, store) = store();
    fs::create_dir_all(dir.path().join("records")).unwrap();
    fs::write(store.month_path(2024, 5), "").unwrap();

    assert!(store.load(2024, 5).unwrap().is_empty());
}

#[test]
fn test_legacy_record_without_special_field() {
    let (dir, store) = store();
    fs::create_dir_all(dir.path().join("records")).unwrap();
    fs::write(
        store.month_path(2019, 6),
        r#"[{"date": "03.06.2019", "start_day": "08:00", "end_day": "16:30",
             "start_break": "12:00", "end_break": "12:30", "comment": ""}]"#,
    )
    .unwrap();

    let month = store.load(2019, 6).unwrap();
    assert!(!month.records()[0].special);
    assert_eq!(month.records()[0].worked_hours(), 8.0);
}

#[test]
fn test_corrupt_record_is_reported() {
    let (dir, store) = store();
    fs::create_dir_all(dir.path().join("records")).unwrap();
    fs::write(
        store.month_path(2024, 7),
        r#"[{"date": "2024-07-01", "start_day": "08:00", "end_day": "16:30",
             "start_break": "12:00", "end_break": "12:30", "comment": "", "special": "False"}]"#,
    )
    .unwrap();

    assert!(store.load(2024, 7).is_err());
}
