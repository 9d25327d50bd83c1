//! Shared Ledger Tests
//!
//! Several executors over one ledger observe each other's writes; the
//! executor itself carries no state between calls.

use std::sync::Arc;
use std::thread;

use crate::common::*;
use ledgercc::{Executor, LedgerAccessor, MemoryLedger};

#[test]
fn executors_over_one_ledger_see_each_others_writes() {
    let ledger = Arc::new(MemoryLedger::new());
    let writer = Executor::new(Arc::clone(&ledger));
    let reader = Executor::new(Arc::clone(&ledger));

    writer.init(args(&["A", "10", "B", "20"])).unwrap();

    assert_eq!(balance(&reader, "A"), 10);
    assert_eq!(ledger.len(), 2);
}

#[test]
fn borrowed_ledger_outlives_executor() {
    let ledger = MemoryLedger::new();
    {
        let executor = Executor::new(&ledger);
        executor.apply("write", args(&["k", "v"])).unwrap();
    }
    assert_eq!(ledger.get("k").unwrap(), Some(b"v".to_vec()));
}

#[test]
fn into_ledger_hands_back_state() {
    let executor = create_executor();
    executor.apply("write", args(&["k", "v"])).unwrap();

    let ledger = executor.into_ledger();
    assert_eq!(ledger.keys(), vec!["k"]);
}

#[test]
fn concurrent_writers_on_disjoint_keys() {
    let ledger = Arc::new(MemoryLedger::new());
    let handles: Vec<_> = (0..8)
        .map(|t| {
            let executor = Executor::new(Arc::clone(&ledger));
            thread::spawn(move || {
                for i in 0..50 {
                    let key = format!("t{}-{}", t, i);
                    executor
                        .apply("write", vec![key, i.to_string()])
                        .unwrap();
                }
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }

    assert_eq!(ledger.len(), 400);
    assert_eq!(ledger.version(), 400);
    assert_eq!(ledger.get("t3-49").unwrap(), Some(b"49".to_vec()));
}

#[test]
fn disjoint_transfers_conserve_totals() {
    let ledger = Arc::new(MemoryLedger::new());
    let setup = Executor::new(Arc::clone(&ledger));
    for t in 0..4 {
        setup
            .init(args(&[&format!("a{}", t), "1000", &format!("b{}", t), "0"]))
            .unwrap();
    }

    let handles: Vec<_> = (0..4)
        .map(|t| {
            let executor = Executor::new(Arc::clone(&ledger));
            thread::spawn(move || {
                for _ in 0..100 {
                    executor
                        .apply("move", args(&[&format!("a{}", t), &format!("b{}", t), "3"]))
                        .unwrap();
                }
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }

    for t in 0..4 {
        assert_eq!(balance(&setup, &format!("a{}", t)), 700);
        assert_eq!(balance(&setup, &format!("b{}", t)), 300);
    }
}
