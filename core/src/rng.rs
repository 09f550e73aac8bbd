//! Park-Miller Linear Congruential Generator (MINSTD, 1988 "minimal standard")
//!
//! Recurrence: `seed = (seed * 16807) mod (2^31 - 1)`
//!
//! Constants:
//! - Multiplier (a): 16807
//! - Modulus (m): 2^31 - 1 = 2147483647 (a Mersenne prime)
//!
//! Raw output is in 1..=2147483646 and the full period is m - 1, so every
//! nonzero residue is visited once before the sequence repeats.
//!
//! Reference: http://www.firstpr.com.au/dsp/rand31/

/// Full-period multiplier for the modulus
pub const MULTIPLIER: u32 = 16807;

/// 2^31 - 1
pub const MODULUS: u32 = 2147483647;

/// Seed used when none is supplied
pub const DEFAULT_SEED: u32 = 1;

// Schrage decomposition of the modulus: m = a * q + r
const SCHRAGE_Q: i32 = 127773; // m / a
const SCHRAGE_R: i32 = 2836; // m % a

/// One step of the recurrence using a 64-bit intermediate product.
///
/// `seed * 16807` is at most ~2^46 so it cannot overflow a u64.
#[inline]
pub fn step(seed: u32) -> u32 {
    ((seed as u64 * MULTIPLIER as u64) % MODULUS as u64) as u32
}

/// One step of the recurrence using Schrage's method.
///
/// Every intermediate stays within a signed 32-bit integer. Bit-identical to
/// [`step`] for seeds in 1..=2147483646.
#[inline]
pub fn step_schrage(seed: u32) -> u32 {
    let seed = seed as i32;
    let test = MULTIPLIER as i32 * (seed % SCHRAGE_Q) - SCHRAGE_R * (seed / SCHRAGE_Q);
    if test > 0 {
        test as u32
    } else {
        (test + MODULUS as i32) as u32
    }
}

/// One step of the recurrence using David G. Carta's division-free method.
///
/// Splits the seed into 16-bit halves and folds the high product back in,
/// relying on 2^31 = 1 (mod m). Bit-identical to [`step`] for seeds in
/// 1..=2147483646.
#[inline]
pub fn step_carta(seed: u32) -> u32 {
    let hi = MULTIPLIER * (seed >> 16);
    let lo = MULTIPLIER * (seed & 0xFFFF) + ((hi & 0x7FFF) << 16) + (hi >> 15);
    if lo > MODULUS {
        lo - MODULUS
    } else {
        lo
    }
}

/// Park-Miller minimal standard generator
///
/// Owns a single 31-bit state. Every sampling call advances the state once,
/// so two generators built from the same seed produce identical sequences.
///
/// Instances are independent and share nothing. A single instance is not
/// synchronised: callers sharing one across threads must serialise access
/// themselves (`&mut self` already enforces this in safe code).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParkMiller {
    seed: u32,
}

impl Default for ParkMiller {
    fn default() -> Self {
        Self { seed: DEFAULT_SEED }
    }
}

impl ParkMiller {
    /// Create a generator from an explicit seed
    ///
    /// The seed must be in 1..=2147483646. Zero would lock the generator at
    /// zero forever and values at or above the modulus are outside the
    /// residue set, so both are refused rather than silently corrected.
    pub fn new(seed: u32) -> Result<Self, crate::SeedError> {
        validate(seed)?;
        Ok(Self { seed })
    }

    /// Current state (the last raw value produced, or the initial seed)
    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Replace the state with a new seed, validated like [`ParkMiller::new`]
    pub fn set_seed(&mut self, seed: u32) -> Result<(), crate::SeedError> {
        validate(seed)?;
        self.seed = seed;
        Ok(())
    }

    /// Advance RNG state and return it
    #[inline]
    fn advance(&mut self) -> u32 {
        self.seed = step(self.seed);
        self.seed
    }

    /// Raw generator output in 1..=2147483646
    pub fn next_int(&mut self) -> u32 {
        self.advance()
    }

    /// Next value normalised to the open unit interval (0, 1)
    pub fn next_double(&mut self) -> f64 {
        self.advance() as f64 / MODULUS as f64
    }

    /// `true` when the raw output is even
    pub fn next_boolean(&mut self) -> bool {
        self.advance() % 2 == 0
    }

    /// Integer in `[min, max]`, computed as `round(min + (max - min) * next_double())`
    ///
    /// Rounding is half away from zero. Since `next_double()` never reaches
    /// 1.0, rounding is what lets `max` be produced at all.
    ///
    /// Inverted ranges (`min > max`) are not guarded and behave as the formula
    /// dictates. For spans close to the limits of `i64` the f64 intermediate
    /// can land one unit outside the bounds; the final cast saturates.
    pub fn next_int_range(&mut self, min: i64, max: i64) -> i64 {
        let span = max as f64 - min as f64;
        libm::round(min as f64 + span * self.next_double()) as i64
    }

    /// Float in `[min, max)`, computed as `min + (max - min) * next_double()`
    pub fn next_double_range(&mut self, min: f64, max: f64) -> f64 {
        min + (max - min) * self.next_double()
    }

    /// Advance the state `count` times, discarding the output
    pub fn discard(&mut self, count: u64) {
        (0..count).for_each(|_| {
            self.advance();
        })
    }
}

impl Iterator for ParkMiller {
    type Item = u32;

    /// Never returns `None`; the sequence is cyclic.
    fn next(&mut self) -> Option<Self::Item> {
        Some(self.next_int())
    }
}

fn validate(seed: u32) -> Result<(), crate::SeedError> {
    if seed == 0 {
        Err(crate::SeedError::Zero)
    } else if seed >= MODULUS {
        Err(crate::SeedError::OutOfRange(seed))
    } else {
        Ok(())
    }
}
