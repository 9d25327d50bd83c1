//! Facade Integration Tests
//!
//! Tests for the typed `Chaincode` handle: typed results, options, and
//! log routing.

#[path = "../common/mod.rs"]
mod common;

mod typed_api;
