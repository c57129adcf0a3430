//! Logic gates.
//!
//! AND, OR and NOT are the only primitives: each is defined directly by its
//! truth table. XOR and NAND are wired together from those three and never
//! fall back to a native boolean operator.

use std::fmt;
use std::str::FromStr;
use serde::{Serialize, Deserialize};
use crate::logic::Bit;
use crate::logic::nibble::ParseError;

/// AND gate: 1 only when both inputs are 1.
#[inline]
pub const fn and(a: Bit, b: Bit) -> Bit {
    match (a, b) {
        (Bit::One, Bit::One) => Bit::One,
        _ => Bit::Zero,
    }
}

/// OR gate: 0 only when both inputs are 0.
#[inline]
pub const fn or(a: Bit, b: Bit) -> Bit {
    match (a, b) {
        (Bit::Zero, Bit::Zero) => Bit::Zero,
        _ => Bit::One,
    }
}

/// NOT gate (inverter).
#[inline]
pub const fn not(a: Bit) -> Bit {
    match a {
        Bit::Zero => Bit::One,
        Bit::One => Bit::Zero,
    }
}

/// XOR gate: `(A AND NOT B) OR (NOT A AND B)`.
#[inline]
pub const fn xor(a: Bit, b: Bit) -> Bit {
    or(and(a, not(b)), and(not(a), b))
}

/// NAND gate: `NOT (A AND B)`.
#[inline]
pub const fn nand(a: Bit, b: Bit) -> Bit {
    not(and(a, b))
}

/// The gates available for inspection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Gate {
    And,
    Or,
    Not,
    Xor,
    Nand,
}

/// One row of a truth table. `b` is `None` for single-input gates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TruthRow {
    pub a: Bit,
    pub b: Option<Bit>,
    pub output: Bit,
}

impl Gate {
    /// Primitives first, then the derived gates.
    pub const ALL: [Gate; 5] = [Gate::And, Gate::Or, Gate::Not, Gate::Xor, Gate::Nand];

    pub const fn name(self) -> &'static str {
        match self {
            Gate::And => "AND",
            Gate::Or => "OR",
            Gate::Not => "NOT",
            Gate::Xor => "XOR",
            Gate::Nand => "NAND",
        }
    }

    /// Number of inputs the gate reads.
    pub const fn arity(self) -> usize {
        match self {
            Gate::Not => 1,
            _ => 2,
        }
    }

    /// Whether the gate is built from other gates rather than defined directly.
    pub const fn is_derived(self) -> bool {
        matches!(self, Gate::Xor | Gate::Nand)
    }

    /// Evaluate the gate. `NOT` ignores `b`.
    pub const fn eval(self, a: Bit, b: Bit) -> Bit {
        match self {
            Gate::And => and(a, b),
            Gate::Or => or(a, b),
            Gate::Not => not(a),
            Gate::Xor => xor(a, b),
            Gate::Nand => nand(a, b),
        }
    }

    /// Every input combination in ascending binary order.
    pub fn truth_table(self) -> Vec<TruthRow> {
        if self.arity() == 1 {
            return Bit::ALL
                .iter()
                .map(|&a| TruthRow { a, b: None, output: self.eval(a, Bit::Zero) })
                .collect();
        }

        let mut rows = Vec::with_capacity(4);
        for a in Bit::ALL {
            for b in Bit::ALL {
                rows.push(TruthRow { a, b: Some(b), output: self.eval(a, b) });
            }
        }
        rows
    }
}

impl fmt::Display for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Gate {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Gate::ALL
            .into_iter()
            .find(|gate| gate.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| ParseError::UnknownGate(name.to_string()))
    }
}
