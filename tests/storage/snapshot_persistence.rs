//! Snapshot Persistence Tests
//!
//! A ledger saved after a run and loaded for the next one behaves as if
//! the process had never exited.

use crate::common::*;
use ledgercc::{Executor, LedgerAccessor, LedgerSnapshot, MemoryLedger};
use ledgercc_storage::SnapshotError;

fn save(executor: &Executor<MemoryLedger>, path: &std::path::Path) {
    LedgerSnapshot::capture(executor.ledger()).save(path).unwrap();
}

fn load(path: &std::path::Path) -> Executor<MemoryLedger> {
    Executor::new(LedgerSnapshot::load(path).unwrap().restore().unwrap())
}

#[test]
fn balances_survive_save_and_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ledger.json");

    let first = create_executor();
    first.init(args(&["A", "100", "B", "200"])).unwrap();
    first.apply("move", args(&["A", "B", "30"])).unwrap();
    save(&first, &path);

    let second = load(&path);
    assert_eq!(balance(&second, "A"), 70);
    assert_eq!(balance(&second, "B"), 230);
    assert_eq!(second.ledger().version(), first.ledger().version());
}

#[test]
fn versions_continue_after_reload() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ledger.json");

    let first = create_executor();
    first.apply("write", args(&["k", "v1"])).unwrap();
    save(&first, &path);

    let second = load(&path);
    second.apply("write", args(&["k", "v2"])).unwrap();
    assert_eq!(second.ledger().version(), 2);
    assert_eq!(second.ledger().get_versioned("k").unwrap().version, 2);
}

#[test]
fn deleted_keys_stay_deleted() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ledger.json");

    let first = create_executor();
    first.apply("write", args(&["k", "v"])).unwrap();
    first.apply("delete", args(&["k"])).unwrap();
    save(&first, &path);

    let second = load(&path);
    let err = second.apply("read", args(&["k"])).unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn factor_records_survive_byte_for_byte() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ledger.json");
    let record = factor_json("0xfeed");

    let first = create_executor();
    first.apply("storeFactor", vec![record.clone()]).unwrap();
    save(&first, &path);

    let second = load(&path);
    assert_eq!(
        second.apply("getFactor", args(&["0xfeed"])).unwrap(),
        record.into_bytes()
    );
}

#[test]
fn binary_values_survive() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ledger.json");
    let ledger = MemoryLedger::new();
    let value = vec![0u8, 255, 10, 13, b'"', b'\\'];
    ledger.put("bin", &value).unwrap();

    LedgerSnapshot::capture(&ledger).save(&path).unwrap();
    let restored = LedgerSnapshot::load(&path).unwrap().restore().unwrap();

    assert_eq!(restored.get("bin").unwrap(), Some(value));
}

#[test]
fn save_replaces_previous_snapshot() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ledger.json");

    let ledger = MemoryLedger::new();
    ledger.put("a", b"1").unwrap();
    LedgerSnapshot::capture(&ledger).save(&path).unwrap();
    ledger.delete("a").unwrap();
    ledger.put("b", b"2").unwrap();
    LedgerSnapshot::capture(&ledger).save(&path).unwrap();

    let restored = LedgerSnapshot::load(&path).unwrap().restore().unwrap();
    assert_eq!(restored.keys(), vec!["b"]);
    assert!(!dir.path().join("ledger.json.tmp").exists());
}

#[test]
fn malformed_file_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ledger.json");
    std::fs::write(&path, b"not json").unwrap();

    assert!(matches!(
        LedgerSnapshot::load(&path),
        Err(SnapshotError::Json(_))
    ));
}

#[test]
fn bad_base64_names_the_key() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ledger.json");
    std::fs::write(
        &path,
        br#"{"version":1,"entries":{"A":{"value":"***","version":1}}}"#,
    )
    .unwrap();

    let snapshot = LedgerSnapshot::load(&path).unwrap();
    match snapshot.restore() {
        Err(SnapshotError::Base64 { key, .. }) => assert_eq!(key, "A"),
        other => panic!("Expected Base64 error, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn save_into_missing_directory_fails_with_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("no-such-dir").join("ledger.json");

    match LedgerSnapshot::default().save(&path) {
        Err(SnapshotError::Io { path: failed, .. }) => {
            assert!(failed.starts_with(dir.path().join("no-such-dir")));
        }
        other => panic!("Expected Io error, got {:?}", other),
    }
}
