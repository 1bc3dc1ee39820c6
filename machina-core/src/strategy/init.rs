use std::fmt;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// An initialization strategy: a stateful producer called once per weight, in
/// order, while the network is being built.
///
/// Each strategy owns whatever state it needs (for the random built-ins, its
/// own generator instance), so there is no process-wide RNG state and seeded
/// strategies are fully reproducible.
pub struct Initialization {
    f: Box<dyn FnMut() -> f64 + Send>,
}

impl Initialization {
    /// Wraps an arbitrary nullary producer as an initialization strategy.
    pub fn from_fn<F>(f: F) -> Self
    where
        F: FnMut() -> f64 + Send + 'static,
    {
        Initialization { f: Box::new(f) }
    }

    /// Draws the next weight value.
    pub fn sample(&mut self) -> f64 {
        (self.f)()
    }

    /// Uniform random values in `[0, 1)` from an entropy-seeded generator.
    pub fn uniform() -> Self {
        let mut rng = StdRng::from_entropy();
        Initialization::from_fn(move || rng.gen::<f64>())
    }

    /// Uniform random values in `[0, 1)` from a generator seeded with `seed`.
    ///
    /// Two networks built with the same seed and topology get identical
    /// weights.
    pub fn seeded_uniform(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        Initialization::from_fn(move || rng.gen::<f64>())
    }

    /// Every weight set to the same value.
    pub fn constant(value: f64) -> Self {
        Initialization::from_fn(move || value)
    }
}

impl fmt::Debug for Initialization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Initialization")
    }
}

#[cfg(test)]
#[path = "init_test.rs"]
mod tests;
