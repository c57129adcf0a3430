//! Gate-level binary arithmetic.
//!
//! This module provides the circuit types and the stages built from them:
//! - [`Bit`] - A single binary digit (0 or 1)
//! - [`Nibble`] - A 4-bit word, most significant bit first
//! - [`gates`] - AND, OR, NOT and the gates derived from them
//! - [`arith`] - Half adder up to the 4-bit adder/subtractor
//! - [`checked`] - The same stages over unvalidated integers

mod bit;
mod nibble;
pub mod gates;
pub mod arith;
pub mod checked;

pub use bit::Bit;
pub use nibble::{Nibble, ParseError};
pub use gates::{Gate, TruthRow};
pub use arith::{
    add4, add_subtract, full_adder, half_adder, ones_complement, to_signed_value,
    to_unsigned_value, twos_complement, Operation,
};
pub use checked::CircuitError;
