//! Park-Miller "minimal standard" pseudo-random number generator
//!
//! A seeded, reproducible Lehmer generator with multiplier 16807 and modulus
//! 2^31 - 1, plus the derived sampling operations (doubles, booleans and
//! ranged values) built on top of it.
//!
//! The generator is fast and statistically weak. It is NOT suitable for
//! anything security sensitive.
//!
//! The crate is no_std compatible. The `std` feature adds
//! `std::error::Error` impls for host-side convenience.

#![no_std]

#[cfg(feature = "std")]
extern crate std;

pub mod error;
pub mod rng;

// Re-export commonly used types for convenience
pub use error::SeedError;
pub use rng::{step, step_carta, step_schrage, ParkMiller, DEFAULT_SEED, MODULUS, MULTIPLIER};
