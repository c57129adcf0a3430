//! Adder circuits.
//!
//! Each stage is wired only from the stages below it:
//! gates → half adder → full adder → 4-bit ripple adder →
//! two's-complement unit → adder/subtractor.

use std::fmt;
use std::str::FromStr;
use serde::{Serialize, Deserialize};
use crate::logic::checked::CircuitError;
use crate::logic::gates::{and, or, xor};
use crate::logic::nibble::ParseError;
use crate::logic::{Bit, Nibble};

/// What the adder/subtractor should do with its second operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// Selector 0: pass `b` through.
    Add,
    /// Selector 1: negate `b` first.
    Subtract,
}

impl Operation {
    pub const fn is_subtraction(self) -> bool {
        matches!(self, Operation::Subtract)
    }

    pub const fn symbol(self) -> char {
        match self {
            Operation::Add => '+',
            Operation::Subtract => '-',
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Operation::Add => "addition",
            Operation::Subtract => "subtraction",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl TryFrom<u8> for Operation {
    type Error = CircuitError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Operation::Add),
            1 => Ok(Operation::Subtract),
            _ => Err(CircuitError::InvalidOperation(value)),
        }
    }
}

impl FromStr for Operation {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "+" | "0" | "add" => Ok(Operation::Add),
            "-" | "1" | "sub" | "subtract" => Ok(Operation::Subtract),
            other => Err(ParseError::UnknownOperation(other.to_string())),
        }
    }
}

/// Half adder: returns (sum, carry) for two bits.
#[inline]
pub const fn half_adder(a: Bit, b: Bit) -> (Bit, Bit) {
    (xor(a, b), and(a, b))
}

/// Full adder: adds `a`, `b` and `cin`, returns (sum, carry_out).
#[inline]
pub const fn full_adder(a: Bit, b: Bit, cin: Bit) -> (Bit, Bit) {
    // First half-adder: a + b
    let (s1, c1) = half_adder(a, b);

    // Second half-adder: s1 + carry_in
    let (sum, c2) = half_adder(s1, cin);

    (sum, or(c1, c2))
}

/// Ripple-carry addition of two nibbles, returning (result, carry_out).
///
/// A carry out of 1 means the unsigned sum exceeded 15.
pub fn add4(a: &Nibble, b: &Nibble, cin: Bit) -> (Nibble, Bit) {
    let mut result = [Bit::Zero; Nibble::WIDTH];
    let mut carry = cin;

    for i in (0..Nibble::WIDTH).rev() {
        let (sum, new_carry) = full_adder(a.get(i), b.get(i), carry);
        result[i] = sum;
        carry = new_carry;
    }

    (Nibble::from_bits(result), carry)
}

/// Invert every bit.
#[inline]
pub fn ones_complement(bits: &Nibble) -> Nibble {
    !*bits
}

/// Additive inverse modulo 16: ones' complement, then `+ 0001` through the
/// adder with its carry out dropped.
///
/// `1000` maps to itself: +8 has no 4-bit two's-complement encoding.
pub fn twos_complement(bits: &Nibble) -> Nibble {
    let (negated, _) = add4(&ones_complement(bits), &Nibble::ONE, Bit::Zero);
    negated
}

/// Add or subtract `b` from `a`, returning (result, carry).
///
/// For [`Operation::Add`] a carry of 1 means unsigned overflow. For
/// [`Operation::Subtract`] a carry of 1 means the difference is
/// non-negative, and 0 means `result` is the two's-complement encoding of a
/// negative difference.
///
/// Subtracting `0000` is the exception: its negation is `0000` again, so
/// the adder never carries and `a - 0000` comes back with carry 0.
pub fn add_subtract(a: &Nibble, b: &Nibble, op: Operation) -> (Nibble, Bit) {
    let operand = match op {
        Operation::Add => *b,
        Operation::Subtract => twos_complement(b),
    };

    add4(a, &operand, Bit::Zero)
}

/// Weighted sum of the bits, MSB weight 8.
#[inline]
pub fn to_unsigned_value(bits: &Nibble) -> u8 {
    bits.to_u8()
}

/// Read a result back as an integer using the carry it was produced with.
///
/// Additions and non-borrowing subtractions read as unsigned. A
/// subtraction with carry 0 is negative: its magnitude is recovered with a
/// second two's complement.
pub fn to_signed_value(result: &Nibble, is_subtraction: bool, carry: Bit) -> i8 {
    if !is_subtraction || carry.is_one() {
        to_unsigned_value(result) as i8
    } else {
        -(to_unsigned_value(&twos_complement(result)) as i8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn n(value: u8) -> Nibble {
        Nibble::from_u8(value)
    }

    fn nibble() -> impl Strategy<Value = Nibble> {
        (0u8..=15).prop_map(Nibble::from_u8)
    }

    #[test]
    fn test_half_adder_truth_table() {
        assert_eq!(half_adder(Bit::Zero, Bit::Zero), (Bit::Zero, Bit::Zero));
        assert_eq!(half_adder(Bit::Zero, Bit::One), (Bit::One, Bit::Zero));
        assert_eq!(half_adder(Bit::One, Bit::Zero), (Bit::One, Bit::Zero));
        assert_eq!(half_adder(Bit::One, Bit::One), (Bit::Zero, Bit::One));
    }

    #[test]
    fn test_full_adder_truth_table() {
        for a in Bit::ALL {
            for b in Bit::ALL {
                for cin in Bit::ALL {
                    let total = a.to_u8() + b.to_u8() + cin.to_u8();
                    assert_eq!(
                        full_adder(a, b, cin),
                        (Bit::from_lsb(total), Bit::from_bool(total >= 2)),
                        "full_add({}, {}, {})", a, b, cin
                    );
                }
            }
        }
        assert_eq!(full_adder(Bit::One, Bit::One, Bit::One), (Bit::One, Bit::One));
    }

    #[test]
    fn test_add4_cases() {
        assert_eq!(add4(&n(0), &n(0), Bit::Zero), (n(0), Bit::Zero));
        assert_eq!(add4(&n(5), &n(3), Bit::Zero), (n(8), Bit::Zero));
        assert_eq!(add4(&n(8), &n(8), Bit::Zero), (n(0), Bit::One));
        assert_eq!(add4(&n(15), &n(1), Bit::Zero), (n(0), Bit::One));
        assert_eq!(add4(&n(1), &n(1), Bit::Zero), (n(2), Bit::Zero));
        assert_eq!(add4(&n(15), &n(0), Bit::One), (n(0), Bit::One));
    }

    #[test]
    fn test_add4_matches_integer_sum() {
        for a in Nibble::all() {
            for b in Nibble::all() {
                for cin in Bit::ALL {
                    let total = a.to_u8() + b.to_u8() + cin.to_u8();
                    let (result, carry) = add4(&a, &b, cin);
                    assert_eq!(result.to_u8(), total % 16);
                    assert_eq!(carry.is_one(), total > 15);
                }
            }
        }
    }

    #[test]
    fn test_ones_complement() {
        assert_eq!(ones_complement(&n(0b0000)), n(0b1111));
        assert_eq!(ones_complement(&n(0b0001)), n(0b1110));
        assert_eq!(ones_complement(&n(0b0101)), n(0b1010));
    }

    #[test]
    fn test_twos_complement() {
        assert_eq!(twos_complement(&n(0b0001)), n(0b1111));
        assert_eq!(twos_complement(&n(0b0101)), n(0b1011));
        assert_eq!(twos_complement(&n(0b0000)), n(0b0000));
        assert_eq!(twos_complement(&n(0b1000)), n(0b1000));
    }

    #[test]
    fn test_additive_inverse() {
        for x in Nibble::all().filter(|x| !x.is_zero()) {
            let (result, _) = add4(&x, &twos_complement(&x), Bit::Zero);
            assert!(result.is_zero(), "expected {:?} + (-{:?}) = 0", x, x);
        }
    }

    #[test]
    fn test_add_subtract_scenarios() {
        // 5 + 3 = 8
        assert_eq!(add_subtract(&n(5), &n(3), Operation::Add), (n(8), Bit::Zero));
        // 7 - 2 = 5, no borrow
        assert_eq!(add_subtract(&n(7), &n(2), Operation::Subtract), (n(5), Bit::One));
        // 2 - 7 = -5
        let (result, carry) = add_subtract(&n(2), &n(7), Operation::Subtract);
        assert_eq!((result, carry), (n(0b1011), Bit::Zero));
        assert_eq!(to_signed_value(&result, true, carry), -5);
        // 8 + 8 = 16 overflows
        assert_eq!(add_subtract(&n(8), &n(8), Operation::Add), (n(0), Bit::One));
        // 15 + 1 = 16 overflows
        assert_eq!(add_subtract(&n(15), &n(1), Operation::Add), (n(0), Bit::One));
        // 5 - 5 = 0
        assert_eq!(add_subtract(&n(5), &n(5), Operation::Subtract), (n(0), Bit::One));
    }

    #[test]
    fn test_subtracting_zero_goes_through_the_adder_unchanged() {
        // twos_complement(0000) = 0000, so the adder sees a + 0 and never carries.
        for a in Nibble::all() {
            assert_eq!(
                add_subtract(&a, &Nibble::ZERO, Operation::Subtract),
                add4(&a, &twos_complement(&Nibble::ZERO), Bit::Zero)
            );
            assert_eq!(add_subtract(&a, &Nibble::ZERO, Operation::Subtract), (a, Bit::Zero));
        }
        assert_eq!(add_subtract(&n(0), &n(0), Operation::Subtract), (n(0), Bit::Zero));
        assert_eq!(to_signed_value(&n(0), true, Bit::Zero), 0);
        assert_eq!(to_signed_value(&n(5), true, Bit::Zero), -11);
    }

    #[test]
    fn test_subtraction_reads_back_as_difference() {
        for a in Nibble::all() {
            for b in Nibble::all().filter(|b| !b.is_zero()) {
                let (result, carry) = add_subtract(&a, &b, Operation::Subtract);
                let expected = a.to_u8() as i8 - b.to_u8() as i8;
                assert_eq!(to_signed_value(&result, true, carry), expected, "{:?} - {:?}", a, b);
                assert_eq!(carry.is_one(), expected >= 0);
            }
        }
    }

    #[test]
    fn test_addition_reads_back_modulo_16() {
        for a in Nibble::all() {
            for b in Nibble::all() {
                let (result, carry) = add_subtract(&a, &b, Operation::Add);
                let total = a.to_u8() + b.to_u8();
                assert_eq!(to_signed_value(&result, false, carry), (total % 16) as i8);
                assert_eq!(carry.is_one(), total > 15);
            }
        }
    }

    #[test]
    fn test_to_signed_value() {
        assert_eq!(to_signed_value(&n(8), false, Bit::Zero), 8);
        assert_eq!(to_signed_value(&n(0b1011), true, Bit::Zero), -5);
        assert_eq!(to_signed_value(&n(0), true, Bit::One), 0);
        assert_eq!(to_signed_value(&n(0b1000), true, Bit::Zero), -8);
        assert_eq!(to_signed_value(&n(15), false, Bit::One), 15);
    }

    #[test]
    fn test_operation_selector() {
        assert_eq!(Operation::try_from(0), Ok(Operation::Add));
        assert_eq!(Operation::try_from(1), Ok(Operation::Subtract));
        assert_eq!(Operation::try_from(2), Err(CircuitError::InvalidOperation(2)));
    }

    #[test]
    fn test_operation_parse() {
        assert_eq!("+".parse::<Operation>(), Ok(Operation::Add));
        assert_eq!("SUB".parse::<Operation>(), Ok(Operation::Subtract));
        assert_eq!("-".parse::<Operation>(), Ok(Operation::Subtract));
        assert_eq!(
            "*".parse::<Operation>(),
            Err(ParseError::UnknownOperation("*".into()))
        );
    }

    proptest! {
        #[test]
        fn prop_ones_complement_involution(x in nibble()) {
            prop_assert_eq!(ones_complement(&ones_complement(&x)), x);
        }

        #[test]
        fn prop_twos_complement_involution(x in nibble()) {
            prop_assert_eq!(twos_complement(&twos_complement(&x)), x);
        }

        #[test]
        fn prop_add4_commutative(a in nibble(), b in nibble()) {
            prop_assert_eq!(add4(&a, &b, Bit::Zero), add4(&b, &a, Bit::Zero));
        }

        #[test]
        fn prop_add4_identity(a in nibble()) {
            prop_assert_eq!(add4(&a, &Nibble::ZERO, Bit::Zero), (a, Bit::Zero));
        }

        #[test]
        fn prop_self_subtraction(a in nibble()) {
            prop_assume!(!a.is_zero());
            prop_assert_eq!(add_subtract(&a, &a, Operation::Subtract), (Nibble::ZERO, Bit::One));
        }

        #[test]
        fn prop_subtract_is_add_of_complement(a in nibble(), b in nibble()) {
            prop_assert_eq!(
                add_subtract(&a, &b, Operation::Subtract),
                add4(&a, &twos_complement(&b), Bit::Zero)
            );
        }

        #[test]
        fn prop_addition_passes_b_through(a in nibble(), b in nibble()) {
            prop_assert_eq!(add_subtract(&a, &b, Operation::Add), add4(&a, &b, Bit::Zero));
        }
    }
}
