//! Integration tests for bank-token

pub mod auth_gate_tests;
pub mod config_tests;
pub mod maker_tests;
