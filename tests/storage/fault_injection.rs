//! Fault Injection Tests
//!
//! Storage failures surface as read or write errors naming the key, and
//! only the calls that succeeded reach the wrapped ledger.

use crate::common::*;
use ledgercc::{LedgerAccessor, LedgerCall, StorageError};
use ledgercc_executor::Error;

#[test]
fn injected_read_failure_keeps_storage_error_as_source() {
    let executor = create_instrumented();
    executor.ledger().fail_get("k");

    let err = executor.apply("read", args(&["k"])).unwrap_err();

    match err {
        Error::LedgerRead { key, source } => {
            assert_eq!(key, "k");
            assert!(matches!(source, StorageError::Injected { operation: "get", .. }));
        }
        other => panic!("Expected LedgerRead, got {:?}", other),
    }
}

#[test]
fn injected_delete_failure_leaves_value() {
    let executor = create_instrumented();
    executor.apply("write", args(&["k", "v"])).unwrap();
    executor.ledger().fail_delete("k");

    let err = executor.apply("delete", args(&["k"])).unwrap_err();

    assert_eq!(err.code(), "LedgerWriteError");
    assert_eq!(executor.ledger().inner().get("k").unwrap(), Some(b"v".to_vec()));
}

#[test]
fn clearing_faults_restores_service() {
    let executor = create_instrumented();
    executor.ledger().fail_put("k");
    assert!(executor.apply("write", args(&["k", "v"])).is_err());

    executor.ledger().clear_faults();
    executor.apply("write", args(&["k", "v"])).unwrap();

    assert_eq!(
        executor.ledger().committed_mutations(),
        vec![LedgerCall::Put("k".into())]
    );
    assert_eq!(executor.ledger().calls().len(), 2);
}

#[test]
fn read_only_operations_issue_single_get() {
    let executor = seeded(1, 2);

    executor.apply("query", args(&["A"])).unwrap();
    executor.apply("read", args(&["B"])).unwrap();
    let _ = executor.apply("getFactor", args(&["nobody"]));

    let calls = executor.ledger().calls();
    assert_eq!(calls.len(), 3);
    assert!(calls.iter().all(|c| !c.is_mutation()));
    assert_eq!(
        calls.iter().map(LedgerCall::key).collect::<Vec<_>>(),
        vec!["A", "B", "nobody"]
    );
}
