//! Integer arithmetic under a fixed modulus

use std::fmt;
use thiserror::Error;

/// Errors from constructing or combining modular integers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ModIntError {
    /// The modulus must be strictly positive
    #[error("modulus must be positive, got {0}")]
    NonPositiveModulus(i64),
    /// Two values under different moduli cannot be combined
    #[error("modulus mismatch: {0} vs {1}")]
    ModulusMismatch(i64, i64),
}

/// An integer normalized into `0..modulus`.
///
/// Construction and arithmetic maintain `0 <= value < modulus` for any input,
/// negative values included. Combining two values under different moduli is
/// reported as an error rather than silently coerced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ModInt {
    value: i64,
    modulus: i64,
}

impl ModInt {
    /// Create a modular integer, normalizing `value` into `0..modulus`.
    pub fn new(value: i64, modulus: i64) -> Result<Self, ModIntError> {
        if modulus <= 0 {
            return Err(ModIntError::NonPositiveModulus(modulus));
        }
        Ok(Self {
            value: value.rem_euclid(modulus),
            modulus,
        })
    }

    /// The normalized value
    pub fn value(&self) -> i64 {
        self.value
    }

    /// The modulus
    pub fn modulus(&self) -> i64 {
        self.modulus
    }

    /// Modular addition; fails if the moduli differ.
    pub fn checked_add(self, other: ModInt) -> Result<Self, ModIntError> {
        if self.modulus != other.modulus {
            return Err(ModIntError::ModulusMismatch(self.modulus, other.modulus));
        }
        Self::new(self.value + other.value, self.modulus)
    }

    /// Modular subtraction; fails if the moduli differ.
    pub fn checked_sub(self, other: ModInt) -> Result<Self, ModIntError> {
        if self.modulus != other.modulus {
            return Err(ModIntError::ModulusMismatch(self.modulus, other.modulus));
        }
        Self::new(self.value - other.value, self.modulus)
    }
}

impl fmt::Display for ModInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}
