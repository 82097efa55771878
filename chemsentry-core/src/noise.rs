//! Randomness Source Abstraction
//!
//! The engine has three deliberately random terms: ambient sensor noise in
//! normal operations, the thermal surge of a chemical fire, and steady-state
//! forecast noise. All of them draw from a [`NoiseSource`] supplied by the
//! caller, which keeps the deterministic remainder of the engine testable.
//!
//! ## Implementations
//!
//! - [`RngNoise`]: any `rand::Rng`, thread-local or seeded
//! - [`FixedNoise`]: a constant fraction, for deterministic tests
//!
//! ```rust
//! use chemsentry_core::noise::{FixedNoise, NoiseSource, RngNoise};
//!
//! let mut fixed = FixedNoise::new(0.5);
//! assert_eq!(fixed.uniform(300.0, 500.0), 400.0);
//!
//! let mut seeded = RngNoise::seeded(7);
//! let sample = seeded.uniform(0.0, 2.0);
//! assert!((0.0..2.0).contains(&sample));
//! ```

use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

/// Source of uniform random samples
pub trait NoiseSource {
    /// Next sample, uniform in `[0, 1)`
    fn next_unit(&mut self) -> f64;

    /// Next sample, uniform in `[low, high)`
    fn uniform(&mut self, low: f64, high: f64) -> f64 {
        low + (high - low) * self.next_unit()
    }
}

impl<N: NoiseSource + ?Sized> NoiseSource for &mut N {
    fn next_unit(&mut self) -> f64 {
        (**self).next_unit()
    }

    fn uniform(&mut self, low: f64, high: f64) -> f64 {
        (**self).uniform(low, high)
    }
}

/// Noise backed by a `rand` generator
#[derive(Debug, Clone)]
pub struct RngNoise<R> {
    rng: R,
}

impl<R: Rng> RngNoise<R> {
    /// Wrap an existing generator
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngNoise<ThreadRng> {
    /// Thread-local generator, independent per call
    pub fn thread() -> Self {
        Self::new(rand::thread_rng())
    }
}

impl RngNoise<StdRng> {
    /// Reproducible generator for simulations and tests
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> NoiseSource for RngNoise<R> {
    fn next_unit(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }

    fn uniform(&mut self, low: f64, high: f64) -> f64 {
        // gen_range panics on an empty range
        if low < high {
            self.rng.gen_range(low..high)
        } else {
            low
        }
    }
}

/// Constant noise for deterministic tests
///
/// Always returns the same fraction of the requested range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedNoise {
    fraction: f64,
}

impl FixedNoise {
    /// Fraction is clamped into `[0, 1)`
    pub fn new(fraction: f64) -> Self {
        let fraction = if fraction.is_nan() { 0.0 } else { fraction.clamp(0.0, MAX_UNIT) };
        Self { fraction }
    }

    /// Always the bottom of the range
    pub fn low() -> Self {
        Self::new(0.0)
    }

    /// Just below the top of the range
    pub fn high() -> Self {
        Self::new(MAX_UNIT)
    }
}

impl NoiseSource for FixedNoise {
    fn next_unit(&mut self) -> f64 {
        self.fraction
    }

    fn uniform(&mut self, low: f64, high: f64) -> f64 {
        let sample = low + (high - low) * self.fraction;
        // Rounding can land on `high` for fractions close to one
        if low < high && sample >= high {
            libm::nextafter(high, low)
        } else {
            sample
        }
    }
}

// Largest f64 below 1.0
const MAX_UNIT: f64 = 1.0 - f64::EPSILON / 2.0;
