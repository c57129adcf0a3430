//! Fixed-width 4-bit word.
//!
//! Bits are stored most significant first: index 0 carries weight 8 and
//! index 3 carries weight 1, the same order the digits are written in.

use std::fmt;
use std::str::FromStr;
use serde::{Serialize, Deserialize};
use thiserror::Error;
use crate::logic::{gates, Bit};
use crate::logic::checked::{self, CircuitError};

/// A 4-bit word.
///
/// Read as an unsigned magnitude it ranges over 0 to 15. After a
/// subtraction that borrowed it holds a two's-complement encoding of a
/// negative number.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Nibble {
    /// Bits stored from most significant (index 0) to least significant (index 3)
    bits: [Bit; 4],
}

impl Nibble {
    /// Number of bits in a Nibble.
    pub const WIDTH: usize = 4;

    /// Largest unsigned value: 15 (1111)
    pub const MAX: u8 = 15;

    /// 0000
    pub const ZERO: Nibble = Nibble::from_u8(0);

    /// 0001, the constant fed to the adder when negating.
    pub const ONE: Nibble = Nibble::from_u8(1);

    /// Create a Nibble from an array of bits (MSB first).
    #[inline]
    pub const fn from_bits(bits: [Bit; 4]) -> Self {
        Self { bits }
    }

    /// Get the underlying bit array.
    #[inline]
    pub const fn bits(&self) -> &[Bit; 4] {
        &self.bits
    }

    /// Get a single bit by index (0 = MSB).
    #[inline]
    pub const fn get(&self, index: usize) -> Bit {
        self.bits[index]
    }

    /// Create from an unsigned integer already known to fit.
    ///
    /// Callers outside the crate go through `TryFrom<u8>`.
    pub(crate) const fn from_u8(value: u8) -> Self {
        assert!(value <= Self::MAX, "value out of range for Nibble [0, 15]");

        Self {
            bits: [
                Bit::from_lsb(value >> 3),
                Bit::from_lsb(value >> 2),
                Bit::from_lsb(value >> 1),
                Bit::from_lsb(value),
            ],
        }
    }

    /// Unsigned magnitude: the weighted sum of the bits, MSB weight 8.
    pub fn to_u8(&self) -> u8 {
        self.bits
            .iter()
            .fold(0, |acc, bit| acc * 2 + bit.to_u8())
    }

    /// Check if every bit is zero.
    pub fn is_zero(&self) -> bool {
        self.bits.iter().all(|b| b.is_zero())
    }

    /// All sixteen nibbles in ascending order.
    pub fn all() -> impl Iterator<Item = Nibble> {
        (0..=Self::MAX).map(Nibble::from_u8)
    }

    /// Parse from a string like "0101" or "0b0101".
    pub fn parse(s: &str) -> Result<Self, ParseError> {
        let s = s.trim();
        let s = s.strip_prefix("0b").unwrap_or(s);

        let count = s.chars().count();
        if count != Self::WIDTH {
            return Err(ParseError::WrongLength { expected: Self::WIDTH, got: count });
        }

        let mut bits = [Bit::Zero; 4];
        for (i, c) in s.chars().enumerate() {
            bits[i] = match c {
                '0' => Bit::Zero,
                '1' => Bit::One,
                _ => return Err(ParseError::InvalidChar(c)),
            };
        }

        Ok(Self { bits })
    }
}

impl fmt::Debug for Nibble {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Nibble({} = {})", self, self.to_u8())
    }
}

impl fmt::Display for Nibble {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in &self.bits {
            write!(f, "{}", bit)?;
        }
        Ok(())
    }
}

impl std::ops::Not for Nibble {
    type Output = Nibble;

    fn not(self) -> Nibble {
        Nibble::from_bits(self.bits.map(gates::not))
    }
}

impl FromStr for Nibble {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Nibble::parse(s)
    }
}

impl TryFrom<u8> for Nibble {
    type Error = ParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if value > Self::MAX {
            return Err(ParseError::OutOfRange(value));
        }
        Ok(Self::from_u8(value))
    }
}

impl TryFrom<&[u8]> for Nibble {
    type Error = CircuitError;

    fn try_from(raw: &[u8]) -> Result<Self, Self::Error> {
        checked::nibble("nibble", raw)
    }
}

impl From<Nibble> for u8 {
    fn from(nibble: Nibble) -> Self {
        nibble.to_u8()
    }
}

// ============================================================================
// Error Types
// ============================================================================

/// Errors that can occur when parsing text or integer input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The input string was the wrong length.
    #[error("expected {expected} bits, got {got}")]
    WrongLength { expected: usize, got: usize },

    /// An invalid character was encountered.
    #[error("invalid bit character: '{0}' (expected 0 or 1)")]
    InvalidChar(char),

    #[error("value {0} does not fit in 4 bits (expected 0 to 15)")]
    OutOfRange(u8),

    #[error("unknown operation: '{0}' (expected +, -, add or sub)")]
    UnknownOperation(String),

    #[error("unknown gate: '{0}' (expected AND, OR, NOT, XOR or NAND)")]
    UnknownGate(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_u8_roundtrip() {
        for value in 0..=15u8 {
            assert_eq!(Nibble::from_u8(value).to_u8(), value);
        }
    }

    #[test]
    fn test_bit_order_is_msb_first() {
        let eight = Nibble::from_u8(8);
        assert_eq!(eight.get(0), Bit::One);
        assert_eq!(eight.get(3), Bit::Zero);
        assert_eq!(Nibble::ONE.get(3), Bit::One);
    }

    #[test]
    fn test_try_from_integer() {
        assert_eq!(Nibble::try_from(9u8), Ok(Nibble::from_u8(9)));
        assert_eq!(Nibble::try_from(15u8).map(u8::from), Ok(15));
        assert_eq!(Nibble::try_from(16u8), Err(ParseError::OutOfRange(16)));
        assert_eq!(
            Nibble::try_from(255u8).unwrap_err().to_string(),
            "value 255 does not fit in 4 bits (expected 0 to 15)"
        );
    }

    #[test]
    fn test_not_inverts_every_bit() {
        assert_eq!(!Nibble::from_u8(0b0101), Nibble::from_u8(0b1010));
        assert_eq!(!Nibble::ZERO, Nibble::from_u8(15));
        for x in Nibble::all() {
            assert_eq!((!x).to_u8(), !x.to_u8() & 0x0f);
        }
    }

    #[test]
    fn test_parse() {
        assert_eq!(Nibble::parse("0101").unwrap().to_u8(), 5);
        assert_eq!(Nibble::parse(" 0b1011 ").unwrap().to_u8(), 11);
        assert_eq!(
            Nibble::parse("101"),
            Err(ParseError::WrongLength { expected: 4, got: 3 })
        );
        assert_eq!(
            Nibble::parse("01010"),
            Err(ParseError::WrongLength { expected: 4, got: 5 })
        );
        assert_eq!(Nibble::parse("0120"), Err(ParseError::InvalidChar('2')));
    }

    #[test]
    fn test_display_and_debug() {
        let five = Nibble::from_u8(5);
        assert_eq!(format!("{}", five), "0101");
        assert_eq!(format!("{:?}", five), "Nibble(0101 = 5)");
        assert_eq!(Nibble::parse(&five.to_string()), Ok(five));
    }

    #[test]
    fn test_all_is_ascending() {
        let values: Vec<u8> = Nibble::all().map(|n| n.to_u8()).collect();
        assert_eq!(values, (0..=15).collect::<Vec<u8>>());
    }

    #[test]
    fn test_try_from_raw() {
        let raw: &[u8] = &[1, 0, 0, 1];
        assert_eq!(Nibble::try_from(raw), Ok(Nibble::from_u8(9)));

        let short: &[u8] = &[1, 0, 0];
        assert!(matches!(
            Nibble::try_from(short),
            Err(CircuitError::InvalidLength { got: 3, .. })
        ));
    }

    #[test]
    fn test_serializes_as_bit_array() {
        let json = serde_json::to_string(&Nibble::from_u8(5)).unwrap();
        assert_eq!(json, "[0,1,0,1]");
        assert_eq!(serde_json::from_str::<Nibble>(&json).unwrap(), Nibble::from_u8(5));
    }
}
