//! WebAssembly bindings for the adder/subtractor.
//!
//! All functions are stateless: JavaScript passes bits in and receives JSON
//! or text back.

use wasm_bindgen::prelude::*;
use crate::dispatch::{dispatch, Command};
use crate::logic::{checked, Gate};
use crate::report::OperationReport;

/// Initialize panic hook for better error messages in console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Add (`op = 0`) or subtract (`op = 1`) two 4-bit arrays, MSB first.
///
/// Returns the operation report as JSON.
#[wasm_bindgen]
pub fn add_subtract(a: &[u8], b: &[u8], op: u8) -> Result<String, JsError> {
    let (a, b, op) = checked::operands(a, b, op)?;
    let report = OperationReport::new(a, b, op);
    Ok(serde_json::to_string(&report)?)
}

/// Interpret a result array using the carry it was produced with.
#[wasm_bindgen]
pub fn to_signed_value(result: &[u8], is_subtraction: bool, carry: u8) -> Result<i8, JsError> {
    Ok(checked::to_signed_value(result, is_subtraction, carry)?)
}

/// Calculate from text operands such as `"0101"`, `"-"`, `"0011"`.
#[wasm_bindgen]
pub fn calculate(a: &str, op: &str, b: &str) -> Result<String, JsError> {
    let command = Command::Calculate { a: a.into(), op: op.into(), b: b.into() };
    Ok(dispatch(&command)?.to_string())
}

/// Truth table for one gate by name, or all gates for an empty name.
#[wasm_bindgen]
pub fn truth_table(gate: &str) -> Result<String, JsError> {
    let gate = if gate.trim().is_empty() {
        None
    } else {
        Some(gate.parse::<Gate>()?)
    };
    Ok(dispatch(&Command::TruthTable(gate))?.to_string())
}
