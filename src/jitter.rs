// Jitter — the bounded random perturbation added to every prediction,
// behind a trait so tests can pin it while production stays random.

use rand::Rng;

use crate::constants::{JITTER_MAX, JITTER_MIN};
use crate::types::Glucose;

/// Source of the perturbation term. Production draws uniformly from
/// [JITTER_MIN, JITTER_MAX); tests substitute a fixed value.
pub trait JitterSource {
    fn next_jitter(&mut self) -> Glucose;
}

/// Production source backed by any `rand` RNG (seed the RNG for
/// reproducible simulation runs).
pub struct RngJitter<R: Rng>(pub R);

impl<R: Rng> JitterSource for RngJitter<R> {
    fn next_jitter(&mut self) -> Glucose {
        self.0.gen_range(JITTER_MIN..JITTER_MAX)
    }
}

/// Deterministic source returning the same value on every call.
pub struct FixedJitter(pub Glucose);

impl JitterSource for FixedJitter {
    fn next_jitter(&mut self) -> Glucose {
        self.0
    }
}
