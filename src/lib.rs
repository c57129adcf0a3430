//! # Nibble ALU
//!
//! A 4-bit adder/subtractor built from nothing but AND, OR and NOT gates.
//!
//! The gates are wired into a half adder, two half adders into a full
//! adder, four full adders into a ripple-carry adder, and the adder is
//! reused to negate its second operand so that subtraction becomes
//! addition. Every stage is a pure function, intended for learning how
//! arithmetic falls out of boolean logic.

pub mod logic;
pub mod report;
pub mod dispatch;

#[cfg(feature = "tui")]
pub mod tui;

#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export commonly used types
pub use logic::{Bit, Nibble, Operation, Gate, CircuitError, ParseError};
pub use logic::{add4, add_subtract, ones_complement, twos_complement, to_signed_value};
pub use report::{OperationReport, CheckResult, self_test};
pub use dispatch::{dispatch, Command, Response};

#[cfg(feature = "tui")]
pub use tui::run_workbench;
