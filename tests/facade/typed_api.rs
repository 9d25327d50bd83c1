//! Typed API Tests
//!
//! The typed methods return the same results as the string-based invoke
//! entry point over the same ledger.

use ledgercc::prelude::*;
use ledgercc::{FactorKind, InstrumentedLedger, QuerySummary};

#[test]
fn init_and_transfer() {
    let cc = Chaincode::ephemeral();
    cc.init("A", 100, "B", 200).unwrap();

    cc.transfer("A", "B", 10).unwrap();

    assert_eq!(cc.balance("A").unwrap(), 90);
    assert_eq!(cc.balance("B").unwrap(), 210);
    assert_eq!(cc.query("A").unwrap(), b"90".to_vec());
}

#[test]
fn typed_and_string_calls_agree() {
    let cc = Chaincode::ephemeral();
    cc.init("A", 7, "B", 0).unwrap();

    let via_apply = cc
        .executor()
        .apply("query", vec!["A".to_string()])
        .unwrap();
    assert_eq!(via_apply, cc.query("A").unwrap());
}

#[test]
fn query_summary_uses_stored_text() {
    let cc = Chaincode::ephemeral();
    cc.init("A", -5, "B", 0).unwrap();

    let summary = cc.query_summary("A").unwrap();
    assert_eq!(
        summary,
        QuerySummary {
            name: "A".into(),
            amount: "-5".into()
        }
    );
    assert_eq!(summary.to_json(), r#"{"Name":"A","Amount":"-5"}"#);
}

#[test]
fn balance_of_non_numeric_value_is_invalid_amount() {
    let cc = Chaincode::ephemeral();
    cc.write("A", "lots").unwrap();

    let err = cc.balance("A").unwrap_err();
    assert_eq!(err.as_executor().map(|e| e.code()), Some("InvalidAmount"));
    // The raw query still succeeds.
    assert_eq!(cc.query("A").unwrap(), b"lots".to_vec());
}

#[test]
fn write_read_delete() {
    let cc = Chaincode::ephemeral();

    cc.write("k", [1u8, 2, 3]).unwrap();
    assert_eq!(cc.read("k").unwrap(), vec![1, 2, 3]);

    cc.delete("k").unwrap();
    assert!(cc.read("k").unwrap_err().is_not_found());
    cc.delete("k").unwrap();
}

#[test]
fn factor_record_round_trip() {
    let cc = Chaincode::ephemeral();
    let record = FactorRecord::new(
        "0xabc",
        "alice@example.com",
        "facial",
        vec!["0/1100".into(), "1/0011".into()],
    );

    cc.store_factor_record(&record).unwrap();

    let fetched = cc.get_factor_record("0xabc").unwrap().unwrap();
    assert_eq!(fetched, record);
    assert_eq!(fetched.factor_kind(), FactorKind::Facial);
    assert_eq!(fetched.bloom_descriptors().map(|d| d.ones()).sum::<usize>(), 4);
    assert_eq!(cc.get_factor("0xabc").unwrap(), record.to_bytes().unwrap());
}

#[test]
fn undecodable_factor_bytes_give_none() {
    let cc = Chaincode::ephemeral();
    cc.write("0xabc", "garbage").unwrap();

    assert_eq!(cc.get_factor_record("0xabc").unwrap(), None);
}

#[test]
fn missing_factor_is_not_found() {
    let cc = Chaincode::ephemeral();
    assert!(cc.get_factor_record("0xabc").unwrap_err().is_not_found());
}

#[test]
fn partial_transfer_is_flagged() {
    let cc = Chaincode::new(InstrumentedLedger::new(MemoryLedger::new()));
    cc.init("A", 10, "B", 0).unwrap();
    cc.ledger().fail_put("B");

    let err = cc.transfer("A", "B", 4).unwrap_err();

    assert!(err.is_partial());
    assert!(!err.is_not_found());
    assert_eq!(cc.ledger().inner().get("A").unwrap(), Some(b"6".to_vec()));
}

#[test]
fn overflow_is_rejected_without_writes() {
    let cc = Chaincode::new(InstrumentedLedger::new(MemoryLedger::new()));
    cc.init("A", i64::MIN, "B", 0).unwrap();
    cc.ledger().reset_calls();

    let err = cc.transfer("A", "B", 1).unwrap_err();

    assert_eq!(err.as_executor().map(|e| e.code()), Some("Overflow"));
    assert!(cc.ledger().committed_mutations().is_empty());
}
