//! Transfer Invariant Tests
//!
//! Conservation, failure without writes, and partial failure reporting
//! for `move` and `init`.

use crate::common::*;
use ledgercc::{LedgerAccessor, LedgerCall};
use ledgercc_executor::Error;
use proptest::prelude::*;

#[test]
fn move_updates_both_balances() {
    let executor = seeded(100, 200);

    executor.apply("move", args(&["A", "B", "10"])).unwrap();

    assert_eq!(balance(&executor, "A"), 90);
    assert_eq!(balance(&executor, "B"), 210);
}

#[test]
fn move_can_overdraw() {
    let executor = seeded(5, 0);

    executor.apply("move", args(&["A", "B", "20"])).unwrap();

    assert_eq!(balance(&executor, "A"), -15);
    assert_eq!(balance(&executor, "B"), 20);
}

#[test]
fn negative_amount_moves_the_other_way() {
    let executor = seeded(100, 200);

    executor.apply("move", args(&["A", "B", "-50"])).unwrap();

    assert_eq!(balance(&executor, "A"), 150);
    assert_eq!(balance(&executor, "B"), 150);
}

#[test]
fn move_issues_two_reads_then_two_writes() {
    let executor = seeded(100, 200);

    executor.apply("move", args(&["A", "B", "1"])).unwrap();

    assert_eq!(
        executor.ledger().calls(),
        vec![
            LedgerCall::Get("A".into()),
            LedgerCall::Get("B".into()),
            LedgerCall::Put("A".into()),
            LedgerCall::Put("B".into()),
        ]
    );
}

#[test]
fn missing_source_or_destination_writes_nothing() {
    for (from, to) in [("ghost", "B"), ("A", "ghost")] {
        let executor = seeded(100, 200);

        let err = executor.apply("move", args(&[from, to, "10"])).unwrap_err();

        assert!(matches!(err, Error::EntityNotFound { ref key } if key == "ghost"));
        assert!(executor.ledger().committed_mutations().is_empty());
        assert_eq!(balance(&executor, "A"), 100);
    }
}

#[test]
fn non_integer_amount_writes_nothing() {
    let executor = seeded(100, 200);

    let err = executor.apply("move", args(&["A", "B", "ten"])).unwrap_err();

    assert_eq!(err.code(), "InvalidAmount");
    assert!(executor.ledger().committed_mutations().is_empty());
}

#[test]
fn read_failure_is_read_error() {
    let executor = seeded(100, 200);
    executor.ledger().fail_get("B");

    let err = executor.apply("move", args(&["A", "B", "1"])).unwrap_err();

    assert!(matches!(err, Error::LedgerRead { ref key, .. } if key == "B"));
    assert!(executor.ledger().committed_mutations().is_empty());
}

#[test]
fn failure_between_writes_is_reported_as_partial() {
    let executor = seeded(100, 200);
    executor.ledger().fail_put_after(1);

    let err = executor.apply("move", args(&["A", "B", "10"])).unwrap_err();

    assert!(err.is_partial());
    assert_eq!(err.key(), Some("B"));
    // The first write is not rolled back.
    let inner = executor.ledger().inner();
    assert_eq!(inner.get("A").unwrap(), Some(b"90".to_vec()));
    assert_eq!(inner.get("B").unwrap(), Some(b"200".to_vec()));
}

#[test]
fn init_failure_on_second_write_keeps_first() {
    let executor = create_instrumented();
    executor.ledger().fail_put("B");

    let err = executor.init(args(&["A", "100", "B", "200"])).unwrap_err();

    match err {
        Error::LedgerWrite { key, committed, .. } => {
            assert_eq!(key, "B");
            assert_eq!(committed, vec!["A".to_string()]);
        }
        other => panic!("Expected LedgerWrite, got {:?}", other),
    }
    assert_eq!(executor.ledger().inner().get("A").unwrap(), Some(b"100".to_vec()));
}

#[test]
fn init_rejects_non_integer_holdings() {
    let executor = create_instrumented();

    let err = executor.init(args(&["A", "100", "B", "2e3"])).unwrap_err();

    assert_eq!(err.code(), "InvalidAmount");
    assert!(executor.ledger().calls().is_empty());
}

proptest! {
    #[test]
    fn move_conserves_total(
        a0 in -1_000_000_000i64..1_000_000_000,
        b0 in -1_000_000_000i64..1_000_000_000,
        x in -1_000_000_000i64..1_000_000_000,
    ) {
        let executor = seeded(a0, b0);

        executor.apply("move", args(&["A", "B", &x.to_string()])).unwrap();

        let (a1, b1) = (balance(&executor, "A"), balance(&executor, "B"));
        prop_assert_eq!((a1, b1), (a0 - x, b0 + x));
        prop_assert_eq!(a0 + b0, a1 + b1);
    }
}
