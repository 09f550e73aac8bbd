//! Seed validation errors

use core::fmt;

use crate::rng::MODULUS;

/// Reasons a seed is refused by [`ParkMiller::new`](crate::ParkMiller::new)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeedError {
    /// Zero is a fixed point of the recurrence: 0 * a mod m is 0 forever.
    Zero,
    /// Seeds must be strictly below the modulus.
    OutOfRange(u32),
}

impl fmt::Display for SeedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeedError::Zero => write!(f, "Invalid seed: 0 produces a constant zero sequence"),
            SeedError::OutOfRange(seed) => write!(
                f,
                "Invalid seed: {} must be in the range 1..={}",
                seed,
                MODULUS - 1
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for SeedError {}

#[cfg(test)]
mod tests {
    use super::*;

    extern crate std;
    use std::string::ToString;

    #[test]
    fn test_display() {
        assert_eq!(
            SeedError::Zero.to_string(),
            "Invalid seed: 0 produces a constant zero sequence"
        );
        assert_eq!(
            SeedError::OutOfRange(2147483647).to_string(),
            "Invalid seed: 2147483647 must be in the range 1..=2147483646"
        );
    }
}
