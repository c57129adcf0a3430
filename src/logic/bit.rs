//! Single binary digit.
//!
//! A bit holds exactly one of two values, 0 or 1. Making it an enum keeps
//! every other value unrepresentable once a [`Bit`] exists; raw integers are
//! validated on the way in (see [`crate::logic::checked`]).

use std::fmt;
use serde::{Serialize, Deserialize};
use crate::logic::checked::CircuitError;
use crate::logic::gates;

/// A single binary digit.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
#[repr(u8)]
pub enum Bit {
    /// Low (0)
    Zero = 0,
    /// High (1)
    One = 1,
}

impl Bit {
    /// Both bit values in ascending order: 0, 1
    pub const ALL: [Bit; 2] = [Bit::Zero, Bit::One];

    /// Take the least significant bit of `value`.
    #[inline]
    pub const fn from_lsb(value: u8) -> Self {
        if value & 1 == 1 {
            Bit::One
        } else {
            Bit::Zero
        }
    }

    #[inline]
    pub const fn from_bool(value: bool) -> Self {
        if value {
            Bit::One
        } else {
            Bit::Zero
        }
    }

    /// Convert to the integer 0 or 1.
    #[inline]
    pub const fn to_u8(self) -> u8 {
        self as u8
    }

    #[inline]
    pub const fn is_one(self) -> bool {
        matches!(self, Bit::One)
    }

    #[inline]
    pub const fn is_zero(self) -> bool {
        matches!(self, Bit::Zero)
    }
}

impl Default for Bit {
    fn default() -> Self {
        Bit::Zero
    }
}

impl fmt::Debug for Bit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_u8())
    }
}

impl fmt::Display for Bit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_u8())
    }
}

impl std::ops::Not for Bit {
    type Output = Self;

    fn not(self) -> Self::Output {
        gates::not(self)
    }
}

impl TryFrom<u8> for Bit {
    type Error = CircuitError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Bit::Zero),
            1 => Ok(Bit::One),
            _ => Err(CircuitError::InvalidBit {
                argument: "bit".into(),
                value,
            }),
        }
    }
}

impl From<Bit> for u8 {
    fn from(bit: Bit) -> Self {
        bit.to_u8()
    }
}

impl From<bool> for Bit {
    fn from(value: bool) -> Self {
        Bit::from_bool(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_u8_roundtrip() {
        for bit in Bit::ALL {
            assert_eq!(Bit::try_from(bit.to_u8()), Ok(bit));
        }
    }

    #[test]
    fn test_rejects_non_binary_values() {
        for value in [2u8, 3, 7, 255] {
            assert_eq!(
                Bit::try_from(value),
                Err(CircuitError::InvalidBit { argument: "bit".into(), value })
            );
        }
    }

    #[test]
    fn test_from_lsb_ignores_high_bits() {
        assert_eq!(Bit::from_lsb(0b1010), Bit::Zero);
        assert_eq!(Bit::from_lsb(0b0111), Bit::One);
    }

    #[test]
    fn test_not_operator() {
        assert_eq!(!Bit::Zero, Bit::One);
        assert_eq!(!Bit::One, Bit::Zero);
    }

    #[test]
    fn test_serializes_as_integer() {
        assert_eq!(serde_json::to_string(&Bit::One).unwrap(), "1");
        assert_eq!(serde_json::from_str::<Bit>("0").unwrap(), Bit::Zero);
        assert!(serde_json::from_str::<Bit>("2").is_err());
    }
}
