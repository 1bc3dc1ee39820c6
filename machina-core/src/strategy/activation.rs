use std::fmt;
use std::sync::Arc;

type ScalarFn = dyn Fn(f64) -> f64 + Send + Sync;

/// An activation strategy: a forward transfer function paired with its first
/// derivative.
///
/// The derivative is evaluated on the neuron's *output* `y = forward(x)`, not
/// on the pre-activation value. The built-ins are written accordingly, e.g.
/// the sigmoid derivative is `y * (1 - y)`.
#[derive(Clone)]
pub struct Activation {
    forward: Arc<ScalarFn>,
    derivative: Arc<ScalarFn>,
}

impl Activation {
    /// Wraps an arbitrary pair of scalar functions as an activation strategy.
    pub fn new<F, D>(forward: F, derivative: D) -> Self
    where
        F: Fn(f64) -> f64 + Send + Sync + 'static,
        D: Fn(f64) -> f64 + Send + Sync + 'static,
    {
        Activation {
            forward: Arc::new(forward),
            derivative: Arc::new(derivative),
        }
    }

    /// Applies the transfer function to a pre-activation value.
    pub fn forward(&self, x: f64) -> f64 {
        (self.forward)(x)
    }

    /// Evaluates the derivative at an output value `y`.
    pub fn derivative(&self, y: f64) -> f64 {
        (self.derivative)(y)
    }

    /// The logistic sigmoid, `1 / (1 + e^-x)`.
    pub fn sigmoid() -> Self {
        Activation::new(|x| 1.0 / (1.0 + (-x).exp()), |y| y * (1.0 - y))
    }

    /// Softplus, `log10(1 + e^x)`.
    ///
    /// Base 10, not the natural log. Its derivative here is the sigmoid of the
    /// output.
    pub fn softplus() -> Self {
        Activation::new(|x| (1.0 + x.exp()).log10(), |y| 1.0 / (1.0 + (-y).exp()))
    }

    /// Hyperbolic tangent, with `sech²(y)` as the derivative.
    pub fn hyperbolic_tan() -> Self {
        Activation::new(
            |x| x.tanh(),
            |y| ((2.0 * (-y).exp()) / (1.0 + (-2.0 * y).exp())).powi(2),
        )
    }
}

impl fmt::Debug for Activation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Activation")
    }
}

#[cfg(test)]
#[path = "activation_test.rs"]
mod tests;
