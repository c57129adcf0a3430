//! Text renderings of the circuit for people to read.
//!
//! This module provides:
//! - An operation trace for a single add or subtract
//! - Truth tables and worked examples for each stage
//! - A built-in self-test

pub mod trace;
pub mod tables;
pub mod selftest;

pub use trace::OperationReport;
pub use selftest::{self_test, CheckResult};
