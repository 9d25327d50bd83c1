//! Factor Record Tests
//!
//! storeFactor/getFactor keep the caller's bytes verbatim, keyed by the
//! record's address.

use crate::common::*;
use ledgercc::{FactorRecord, LedgerAccessor, LedgerCall};

#[test]
fn store_then_get_returns_identical_bytes() {
    let executor = create_executor();
    let record = factor_json("X");

    executor.apply("storeFactor", vec![record.clone()]).unwrap();
    let payload = executor.apply("getFactor", args(&["X"])).unwrap();

    assert_eq!(payload, record.into_bytes());
}

#[test]
fn stored_bytes_are_not_reencoded() {
    let executor = create_executor();
    // Field order and spacing differ from what serde would produce.
    let record = r#"{ "payload": [], "type": "pin",   "email": "e", "address": "X" }"#;

    executor.apply("storeFactor", args(&[record])).unwrap();

    assert_eq!(
        executor.ledger().get("X").unwrap(),
        Some(record.as_bytes().to_vec())
    );
}

#[test]
fn record_with_extra_fields_is_stored_verbatim() {
    let executor = create_executor();
    let record = r#"{"address":"X","nonce":7}"#;

    executor.apply("storeFactor", args(&[record])).unwrap();

    let stored = executor.apply("getFactor", args(&["X"])).unwrap();
    assert_eq!(stored, record.as_bytes().to_vec());
    let decoded = FactorRecord::decode(&stored).unwrap();
    assert_eq!(decoded.address, "X");
}

#[test]
fn malformed_record_is_stored_under_empty_address() {
    let executor = create_instrumented();

    executor.apply("storeFactor", args(&["{broken"])).unwrap();

    assert_eq!(
        executor.ledger().calls(),
        vec![LedgerCall::Put(String::new())]
    );
    assert_eq!(
        executor.apply("getFactor", args(&[""])).unwrap(),
        b"{broken".to_vec()
    );
}

#[test]
fn store_write_failure_is_reported() {
    let executor = create_instrumented();
    executor.ledger().fail_put("X");

    let err = executor
        .apply("storeFactor", vec![factor_json("X")])
        .unwrap_err();
    assert_eq!(err.code(), "LedgerWriteError");
    assert!(!err.is_partial());
}

#[test]
fn get_factor_returns_undecodable_bytes_too() {
    let executor = create_executor();
    executor.apply("write", args(&["X", "not a record"])).unwrap();

    let payload = executor.apply("getFactor", args(&["X"])).unwrap();
    assert_eq!(payload, b"not a record".to_vec());
}

#[test]
fn differently_cased_keys_round_trip() {
    let executor = create_executor();
    let record = r#"{"Address":"X","Email":"e","Type":"pin","Payload":[]}"#;

    executor.apply("storeFactor", args(&[record])).unwrap();

    assert_eq!(
        executor.apply("getFactor", args(&["X"])).unwrap(),
        record.as_bytes().to_vec()
    );
    assert!(!executor.ledger().contains(""));
}

#[test]
fn wrongly_typed_email_still_stores_under_address() {
    let executor = create_executor();
    let record = r#"{"address":"X","email":5,"type":"key","payload":["pk"]}"#;

    executor.apply("storeFactor", args(&[record])).unwrap();

    let stored = executor.apply("getFactor", args(&["X"])).unwrap();
    assert_eq!(stored, record.as_bytes().to_vec());
    let decoded = FactorRecord::decode(&stored).unwrap();
    assert_eq!(decoded.payload, vec!["pk".to_string()]);
}
