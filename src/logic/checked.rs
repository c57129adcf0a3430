//! Validating entry points over raw integers.
//!
//! The typed API in [`crate::logic::arith`] cannot be handed a bad bit or a
//! short word. Callers holding plain `u8`s (slices from a UI, JavaScript
//! arrays) come through here instead. Every argument is checked before any
//! gate is evaluated, in a fixed order: operation selector, lengths, word
//! bits, then standalone bits.

use thiserror::Error;
use tracing::{event, Level};
use crate::logic::arith::{self, Operation};
use crate::logic::{Bit, Nibble};

/// A precondition violation on raw circuit input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CircuitError {
    #[error("{argument}: expected exactly 4 bits, got {got}")]
    InvalidLength { argument: String, got: usize },

    #[error("{argument}: bit must be 0 or 1, got {value}")]
    InvalidBit { argument: String, value: u8 },

    #[error("operation must be 0 (add) or 1 (subtract), got {0}")]
    InvalidOperation(u8),
}

fn rejected(err: CircuitError) -> CircuitError {
    event!(Level::DEBUG, "rejected circuit input: {}", err);
    err
}

fn check_length(argument: &str, raw: &[u8]) -> Result<(), CircuitError> {
    if raw.len() != Nibble::WIDTH {
        return Err(rejected(CircuitError::InvalidLength {
            argument: argument.to_string(),
            got: raw.len(),
        }));
    }
    Ok(())
}

// Length must already have been checked.
fn nibble_bits(argument: &str, raw: &[u8]) -> Result<Nibble, CircuitError> {
    let mut bits = [Bit::Zero; Nibble::WIDTH];
    for (i, &value) in raw.iter().enumerate() {
        bits[i] = Bit::try_from(value).map_err(|_| {
            rejected(CircuitError::InvalidBit {
                argument: format!("{}[{}]", argument, i),
                value,
            })
        })?;
    }
    Ok(Nibble::from_bits(bits))
}

/// Validate a standalone bit argument such as a carry.
pub fn bit(argument: &str, value: u8) -> Result<Bit, CircuitError> {
    Bit::try_from(value).map_err(|_| {
        rejected(CircuitError::InvalidBit {
            argument: argument.to_string(),
            value,
        })
    })
}

/// Validate a single word argument.
pub fn nibble(argument: &str, raw: &[u8]) -> Result<Nibble, CircuitError> {
    check_length(argument, raw)?;
    nibble_bits(argument, raw)
}

/// Validate an operation selector.
pub fn operation(op: u8) -> Result<Operation, CircuitError> {
    Operation::try_from(op).map_err(rejected)
}

/// Validate both operands and the selector of an add/subtract request.
pub fn operands(a: &[u8], b: &[u8], op: u8) -> Result<(Nibble, Nibble, Operation), CircuitError> {
    let op = operation(op)?;
    check_length("a", a)?;
    check_length("b", b)?;
    let a = nibble_bits("a", a)?;
    let b = nibble_bits("b", b)?;
    Ok((a, b, op))
}

/// [`arith::add4`] over raw input.
pub fn add4(a: &[u8], b: &[u8], cin: u8) -> Result<(Nibble, Bit), CircuitError> {
    check_length("a", a)?;
    check_length("b", b)?;
    let a = nibble_bits("a", a)?;
    let b = nibble_bits("b", b)?;
    let cin = bit("cin", cin)?;
    Ok(arith::add4(&a, &b, cin))
}

/// [`arith::ones_complement`] over raw input.
pub fn ones_complement(bits: &[u8]) -> Result<Nibble, CircuitError> {
    Ok(arith::ones_complement(&nibble("bits", bits)?))
}

/// [`arith::twos_complement`] over raw input.
pub fn twos_complement(bits: &[u8]) -> Result<Nibble, CircuitError> {
    Ok(arith::twos_complement(&nibble("bits", bits)?))
}

/// [`arith::add_subtract`] over raw input.
pub fn add_subtract(a: &[u8], b: &[u8], op: u8) -> Result<(Nibble, Bit), CircuitError> {
    let (a, b, op) = operands(a, b, op)?;
    Ok(arith::add_subtract(&a, &b, op))
}

/// [`arith::to_signed_value`] over raw input.
pub fn to_signed_value(result: &[u8], is_subtraction: bool, carry: u8) -> Result<i8, CircuitError> {
    let result = nibble("result", result)?;
    let carry = bit("carry", carry)?;
    Ok(arith::to_signed_value(&result, is_subtraction, carry))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_subtract_scenarios() {
        assert_eq!(
            add_subtract(&[0, 1, 0, 1], &[0, 0, 1, 1], 0),
            Ok((Nibble::from_u8(8), Bit::Zero))
        );
        assert_eq!(
            add_subtract(&[0, 1, 1, 1], &[0, 0, 1, 0], 1),
            Ok((Nibble::from_u8(5), Bit::One))
        );
        assert_eq!(
            add_subtract(&[0, 0, 1, 0], &[0, 1, 1, 1], 1),
            Ok((Nibble::from_u8(0b1011), Bit::Zero))
        );
        assert_eq!(to_signed_value(&[1, 0, 1, 1], true, 0), Ok(-5));
        assert_eq!(
            add_subtract(&[1, 0, 0, 0], &[1, 0, 0, 0], 0),
            Ok((Nibble::ZERO, Bit::One))
        );
    }

    #[test]
    fn test_short_operand_is_invalid_length() {
        assert_eq!(
            add_subtract(&[0, 0, 0], &[0, 0, 0, 0], 0),
            Err(CircuitError::InvalidLength { argument: "a".into(), got: 3 })
        );
        assert_eq!(
            add_subtract(&[0, 0, 0, 0], &[0, 0, 0, 0, 1], 1),
            Err(CircuitError::InvalidLength { argument: "b".into(), got: 5 })
        );
    }

    #[test]
    fn test_bad_selector_is_invalid_operation() {
        assert_eq!(
            add_subtract(&[0, 0, 0, 0], &[0, 0, 0, 0], 2),
            Err(CircuitError::InvalidOperation(2))
        );
    }

    #[test]
    fn test_selector_checked_before_operands() {
        assert_eq!(
            add_subtract(&[0, 0], &[7, 7, 7, 7], 9),
            Err(CircuitError::InvalidOperation(9))
        );
    }

    #[test]
    fn test_lengths_checked_before_bits() {
        assert_eq!(
            add4(&[0, 2, 0, 0], &[0, 0, 0], 0),
            Err(CircuitError::InvalidLength { argument: "b".into(), got: 3 })
        );
    }

    #[test]
    fn test_invalid_bit_names_position() {
        assert_eq!(
            add4(&[0, 2, 0, 0], &[0, 0, 0, 0], 0),
            Err(CircuitError::InvalidBit { argument: "a[1]".into(), value: 2 })
        );
        assert_eq!(
            add4(&[0, 0, 0, 0], &[0, 0, 0, 0], 3),
            Err(CircuitError::InvalidBit { argument: "cin".into(), value: 3 })
        );
        assert_eq!(
            to_signed_value(&[0, 0, 0, 0], true, 5),
            Err(CircuitError::InvalidBit { argument: "carry".into(), value: 5 })
        );
    }

    #[test]
    fn test_complements() {
        assert_eq!(ones_complement(&[0, 1, 0, 1]), Ok(Nibble::from_u8(0b1010)));
        assert_eq!(twos_complement(&[0, 0, 0, 1]), Ok(Nibble::from_u8(15)));
        assert_eq!(
            twos_complement(&[1, 0, 0, 0, 0]),
            Err(CircuitError::InvalidLength { argument: "bits".into(), got: 5 })
        );
        assert_eq!(
            ones_complement(&[1, 0, 9, 0]),
            Err(CircuitError::InvalidBit { argument: "bits[2]".into(), value: 9 })
        );
    }

    #[test]
    fn test_add4_with_carry_in() {
        assert_eq!(
            add4(&[0, 0, 0, 1], &[0, 0, 0, 1], 1),
            Ok((Nibble::from_u8(3), Bit::Zero))
        );
    }

    #[test]
    fn test_error_messages() {
        let err = CircuitError::InvalidBit { argument: "a[1]".into(), value: 2 };
        assert_eq!(err.to_string(), "a[1]: bit must be 0 or 1, got 2");
        assert_eq!(
            CircuitError::InvalidOperation(2).to_string(),
            "operation must be 0 (add) or 1 (subtract), got 2"
        );
    }
}
