use crate::strategy::{Activation, Initialization, Propagation, Training};

/// Fluent builder for [`crate::Network`] construction.
///
/// Each setter consumes and returns the builder, so parameters chain:
///
/// ```
/// use machina_core::{Activation, Parameters};
///
/// let params = Parameters::new()
///     .inputs(10)
///     .outputs(15)
///     .rate(0.001)
///     .activation(Activation::hyperbolic_tan());
/// ```
///
/// The builder performs no validation; dimensional errors surface as checked
/// failures from [`crate::Network::new`], which consumes the builder as an
/// owned snapshot.
pub struct Parameters {
    pub(crate) inputs: usize,
    pub(crate) outputs: usize,
    pub(crate) hidden_layers: usize,
    pub(crate) hidden_size: usize,
    pub(crate) bias_term: bool,
    pub(crate) rate: f64,
    pub(crate) activation: Activation,
    pub(crate) initialization: Initialization,
    pub(crate) propagation: Propagation,
    pub(crate) training: Training,
}

impl Default for Parameters {
    fn default() -> Self {
        Parameters {
            inputs: 3,
            outputs: 5,
            hidden_layers: 1,
            hidden_size: 0,
            bias_term: true,
            rate: 0.001,
            activation: Activation::sigmoid(),
            initialization: Initialization::uniform(),
            propagation: Propagation::dot_product(),
            training: Training::backpropagation(),
        }
    }
}

impl Parameters {
    pub fn new() -> Self {
        Parameters::default()
    }

    /// Size of the input vector.
    pub fn inputs(mut self, n: usize) -> Self {
        self.inputs = n;
        self
    }

    /// Size of the output vector.
    pub fn outputs(mut self, n: usize) -> Self {
        self.outputs = n;
        self
    }

    /// Number of hidden layers. Zero is allowed and yields a degenerate
    /// network of just the input and output layers.
    pub fn hidden_layers(mut self, n: usize) -> Self {
        self.hidden_layers = n;
        self
    }

    /// Neurons per hidden layer. Zero means automatic:
    /// `floor((inputs + outputs) / 2)`.
    pub fn hidden_size(mut self, n: usize) -> Self {
        self.hidden_size = n;
        self
    }

    /// Learning rate passed through to the training strategy.
    pub fn rate(mut self, rate: f64) -> Self {
        self.rate = rate;
        self
    }

    /// Accepted for configuration compatibility but wired to nothing: no bias
    /// neuron or bias weight is ever added to the topology.
    pub fn bias_term(mut self, b: bool) -> Self {
        self.bias_term = b;
        self
    }

    pub fn activation(mut self, activation: Activation) -> Self {
        self.activation = activation;
        self
    }

    pub fn initialization(mut self, initialization: Initialization) -> Self {
        self.initialization = initialization;
        self
    }

    pub fn propagation(mut self, propagation: Propagation) -> Self {
        self.propagation = propagation;
        self
    }

    pub fn training(mut self, training: Training) -> Self {
        self.training = training;
        self
    }
}

#[cfg(test)]
#[path = "params_test.rs"]
mod tests;
