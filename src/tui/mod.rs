//! Interactive terminal workbench.
//!
//! Provides:
//! - Editable A and B operands with bit coloring
//! - Add/subtract selection and a trace of the result
//! - Hotkeys for every truth table, demonstration and the self-test

mod app;
mod ui;

pub use app::{WorkbenchApp, run_workbench};
