//! Human-readable record of one pass through the adder/subtractor.

use std::fmt;
use serde::{Serialize, Deserialize};
use crate::logic::{add_subtract, to_signed_value, to_unsigned_value, Bit, Nibble, Operation};

/// Smallest difference a 4-bit two's-complement result can hold.
pub const SIGNED_MIN: i8 = -8;
/// Largest difference a 4-bit two's-complement result can hold.
pub const SIGNED_MAX: i8 = 7;

/// Everything worth showing about a single operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationReport {
    pub a: Nibble,
    pub b: Nibble,
    pub operation: Operation,
    pub a_value: u8,
    pub b_value: u8,
    pub result: Nibble,
    pub carry: Bit,
    /// The result read back with [`to_signed_value`].
    pub value: i8,
    /// Subtraction that borrowed; `result` is two's-complement encoded.
    pub negative: bool,
    /// Addition past 15, or a difference outside -8..=7.
    pub overflow: bool,
}

impl OperationReport {
    /// Run the operation and record what happened.
    pub fn new(a: Nibble, b: Nibble, operation: Operation) -> Self {
        let (result, carry) = add_subtract(&a, &b, operation);
        let is_subtraction = operation.is_subtraction();
        let value = to_signed_value(&result, is_subtraction, carry);

        let overflow = if is_subtraction {
            !(SIGNED_MIN..=SIGNED_MAX).contains(&value)
        } else {
            carry.is_one()
        };

        Self {
            a,
            b,
            operation,
            a_value: to_unsigned_value(&a),
            b_value: to_unsigned_value(&b),
            result,
            carry,
            value,
            negative: is_subtraction && carry.is_zero(),
            overflow,
        }
    }

    /// The mathematically exact answer, before truncation to 4 bits.
    pub fn exact_value(&self) -> i16 {
        let (a, b) = (self.a_value as i16, self.b_value as i16);
        match self.operation {
            Operation::Add => a + b,
            Operation::Subtract => a - b,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for OperationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Operation: {}", self.operation.name().to_uppercase())?;
        writeln!(
            f,
            "  {} ({}) {} {} ({})",
            self.a, self.a_value, self.operation.symbol(), self.b, self.b_value
        )?;
        writeln!(f, "  Result: {} ({})", self.result, self.value)?;

        match self.operation {
            Operation::Add => {
                writeln!(f, "  Carry out: {}", self.carry)?;
                if self.overflow {
                    writeln!(
                        f,
                        "  ⚠️  OVERFLOW: {} + {} = {} does not fit in 4 bits (max 15)",
                        self.a_value, self.b_value, self.exact_value()
                    )?;
                }
            }
            Operation::Subtract => {
                writeln!(f, "  Carry (1 = no borrow): {}", self.carry)?;
                if self.negative {
                    writeln!(
                        f,
                        "  📉 Negative result: {} is the two's complement of {}",
                        self.result, -(self.value as i16)
                    )?;
                }
                if self.overflow {
                    writeln!(
                        f,
                        "  ⚠️  OVERFLOW: {} is outside the signed range {}..{}",
                        self.value, SIGNED_MIN, SIGNED_MAX
                    )?;
                }
            }
        }

        write!(
            f,
            "  {} {} {} = {}",
            self.a_value, self.operation.symbol(), self.b_value, self.value
        )
    }
}
