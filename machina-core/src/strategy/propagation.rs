use std::fmt;
use std::sync::Arc;

type PropFn = dyn Fn(&[f64], &[f64]) -> f64 + Send + Sync;

/// A propagation strategy: reduces an input vector and a neuron's weight
/// vector to the scalar handed to the activation function.
#[derive(Clone)]
pub struct Propagation {
    f: Arc<PropFn>,
}

impl Propagation {
    /// Wraps an arbitrary binary vector reduction as a propagation strategy.
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn(&[f64], &[f64]) -> f64 + Send + Sync + 'static,
    {
        Propagation { f: Arc::new(f) }
    }

    pub fn apply(&self, a: &[f64], b: &[f64]) -> f64 {
        (self.f)(a, b)
    }

    /// The dot product of the two vectors.
    ///
    /// Walks the vectors in lockstep and stops at the shorter one.
    pub fn dot_product() -> Self {
        Propagation::from_fn(|a, b| a.iter().zip(b).map(|(x, w)| x * w).sum())
    }
}

impl fmt::Debug for Propagation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Propagation")
    }
}

#[cfg(test)]
#[path = "propagation_test.rs"]
mod tests;
