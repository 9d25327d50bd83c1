//! Executor Integration Tests
//!
//! Tests for ledgercc-executor through its public entry points.

#[path = "../common/mod.rs"]
mod common;

mod factor_records;
mod transfer_invariants;
