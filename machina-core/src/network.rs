use crate::error::MachinaError;
use crate::params::Parameters;
use crate::strategy::{Activation, Initialization, Propagation, Training};

/// A single neuron: one weight vector, one entry per input dimension.
///
/// Weight values are written at construction by the initialization strategy
/// and afterwards mutated only by training.
#[derive(Debug, Clone, PartialEq)]
pub struct Neuron {
    weights: Vec<f64>,
}

impl Neuron {
    fn new(n_weights: usize, init: &mut Initialization) -> Self {
        Neuron {
            weights: (0..n_weights).map(|_| init.sample()).collect(),
        }
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    pub fn weights_mut(&mut self) -> &mut [f64] {
        &mut self.weights
    }
}

/// An ordered sequence of neurons performing one transform step.
///
/// The input/output caches are only meaningful immediately after a forward
/// pass made while the network is in training mode; otherwise they are empty
/// or stale.
#[derive(Debug)]
pub struct Layer {
    index: usize,
    neurons: Vec<Neuron>,
    input: Vec<f64>,
    output: Vec<f64>,
}

impl Layer {
    fn new(n_neurons: usize, n_weights: usize, index: usize, init: &mut Initialization) -> Self {
        Layer {
            index,
            neurons: (0..n_neurons).map(|_| Neuron::new(n_weights, init)).collect(),
            input: Vec::new(),
            output: Vec::new(),
        }
    }

    /// Position of this layer within the network, input layer first.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Number of neurons.
    pub fn size(&self) -> usize {
        self.neurons.len()
    }

    pub fn neurons(&self) -> &[Neuron] {
        &self.neurons
    }

    pub fn neurons_mut(&mut self) -> &mut [Neuron] {
        &mut self.neurons
    }

    /// The input vector of the most recent training-mode forward pass.
    pub fn input(&self) -> &[f64] {
        &self.input
    }

    /// The output vector of the most recent training-mode forward pass.
    pub fn output(&self) -> &[f64] {
        &self.output
    }

    /// Transforms `input` through every neuron: each output element is
    /// `activation(propagation(input, weights))`. In training mode the layer
    /// keeps copies of both vectors for the training strategy.
    fn feed_forward(
        &mut self,
        input: &[f64],
        activation: &Activation,
        propagation: &Propagation,
        training: bool,
    ) -> Vec<f64> {
        let output: Vec<f64> = self
            .neurons
            .iter()
            .map(|neuron| activation.forward(propagation.apply(input, neuron.weights())))
            .collect();

        if training {
            self.input = input.to_vec();
            self.output = output.clone();
        }

        output
    }
}

/// Thin wrapper holding the training strategy handle.
#[derive(Debug)]
struct Trainer {
    strategy: Training,
}

impl Trainer {
    fn new(strategy: Training) -> Self {
        Trainer { strategy }
    }

    fn strategy(&self) -> Training {
        self.strategy.clone()
    }
}

/// A fixed-topology multilayer feedforward network.
///
/// Built once from a [`Parameters`] snapshot; the layer/neuron structure is
/// never resized afterwards, only weight values change (through training).
#[derive(Debug)]
pub struct Network {
    inputs: usize,
    outputs: usize,
    rate: f64,
    activation: Activation,
    propagation: Propagation,
    layers: Vec<Layer>,
    trainer: Trainer,
    training: bool,
}

impl Network {
    /// Builds the network described by `params`.
    ///
    /// The layer sequence has `hidden_layers + 2` entries. The input layer has
    /// `inputs` neurons of `inputs` weights each; every later layer's weight
    /// vectors are as long as the previous layer is wide; the output layer has
    /// `outputs` neurons. Hidden layers have `hidden_size` neurons, or
    /// `floor((inputs + outputs) / 2)` when `hidden_size` is zero.
    ///
    /// # Errors
    ///
    /// [`MachinaError::InvalidDimension`] if `inputs` or `outputs` is zero.
    pub fn new(params: Parameters) -> Result<Self, MachinaError> {
        let Parameters {
            inputs,
            outputs,
            hidden_layers,
            hidden_size,
            bias_term: _,
            rate,
            activation,
            mut initialization,
            propagation,
            training,
        } = params;

        if inputs == 0 {
            return Err(MachinaError::InvalidDimension {
                field: "inputs",
                value: inputs,
            });
        }
        if outputs == 0 {
            return Err(MachinaError::InvalidDimension {
                field: "outputs",
                value: outputs,
            });
        }

        let n_layers = hidden_layers + 2;
        let mut layers: Vec<Layer> = Vec::with_capacity(n_layers);

        for index in 0..n_layers {
            let (n_neurons, n_weights) = if index == 0 {
                // input layer
                (inputs, inputs)
            } else {
                let n_weights = layers[index - 1].size();
                let n_neurons = if index == n_layers - 1 {
                    outputs
                } else if hidden_size != 0 {
                    hidden_size
                } else {
                    (inputs + outputs) / 2
                };
                (n_neurons, n_weights)
            };

            layers.push(Layer::new(n_neurons, n_weights, index, &mut initialization));
        }

        log::debug!(
            "built network: {} layers, widths {:?}",
            layers.len(),
            layers.iter().map(Layer::size).collect::<Vec<_>>()
        );

        Ok(Network {
            inputs,
            outputs,
            rate,
            activation,
            propagation,
            layers,
            trainer: Trainer::new(training),
            training: false,
        })
    }

    /// Pushes `input` through every layer in order, the input layer included,
    /// and returns the final vector (of length `outputs`).
    ///
    /// # Errors
    ///
    /// [`MachinaError::LengthMismatch`] if `input.len()` differs from the
    /// configured number of inputs.
    pub fn feed_forward(&mut self, input: &[f64]) -> Result<Vec<f64>, MachinaError> {
        if input.len() != self.inputs {
            return Err(MachinaError::LengthMismatch {
                expected: self.inputs,
                actual: input.len(),
                operation: "feed_forward",
            });
        }

        let mut feed = input.to_vec();
        for layer in &mut self.layers {
            feed = layer.feed_forward(&feed, &self.activation, &self.propagation, self.training);
        }
        Ok(feed)
    }

    /// Re-runs a single layer on `input`, refreshing its cache when training
    /// mode is on. Training strategies use this to recompute a layer's output
    /// after changing its weights.
    pub fn feed_layer(&mut self, index: usize, input: &[f64]) -> Result<Vec<f64>, MachinaError> {
        let len = self.layers.len();
        let layer = self
            .layers
            .get_mut(index)
            .ok_or(MachinaError::LayerOutOfBounds { index, len })?;
        Ok(layer.feed_forward(input, &self.activation, &self.propagation, self.training))
    }

    /// Applies the propagation strategy to two vectors.
    pub fn propagate(&self, a: &[f64], b: &[f64]) -> f64 {
        self.propagation.apply(a, b)
    }

    /// Forces training mode on and hands the `(input, expected)` pair to the
    /// training strategy. Training mode stays on afterwards.
    ///
    /// # Errors
    ///
    /// [`MachinaError::LengthMismatch`] if `input` or `expected` do not match
    /// the configured input/output sizes, plus anything the training strategy
    /// itself reports.
    pub fn train(&mut self, input: &[f64], expected: &[f64]) -> Result<(), MachinaError> {
        if input.len() != self.inputs {
            return Err(MachinaError::LengthMismatch {
                expected: self.inputs,
                actual: input.len(),
                operation: "train input",
            });
        }
        if expected.len() != self.outputs {
            return Err(MachinaError::LengthMismatch {
                expected: self.outputs,
                actual: expected.len(),
                operation: "train expected",
            });
        }

        if !self.training {
            self.toggle_training_mode();
        }

        log::trace!("training on input of {} elements", input.len());
        let strategy = self.trainer.strategy();
        strategy.run(input, expected, self)
    }

    /// Number of layers, the input and output layers included.
    pub fn size(&self) -> usize {
        self.layers.len()
    }

    /// Configured size of the input vector.
    pub fn inputs(&self) -> usize {
        self.inputs
    }

    /// Configured size of the output vector.
    pub fn outputs(&self) -> usize {
        self.outputs
    }

    /// The learning rate.
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// The activation strategy.
    pub fn activation(&self) -> &Activation {
        &self.activation
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn layers_mut(&mut self) -> &mut [Layer] {
        &mut self.layers
    }

    /// Whether layers currently retain their input/output caches.
    pub fn training_mode(&self) -> bool {
        self.training
    }

    /// Flips the training flag.
    pub fn toggle_training_mode(&mut self) {
        self.training = !self.training;
    }
}

#[cfg(test)]
#[path = "network_test.rs"]
mod tests;
