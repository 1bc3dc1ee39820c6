use std::fmt;
use std::sync::Arc;

use crate::error::MachinaError;
use crate::network::Network;

type TrainFn = dyn Fn(&[f64], &[f64], &mut Network) -> Result<(), MachinaError> + Send + Sync;

/// A training strategy: consumes an `(input, expected)` pair and mutates the
/// network's weights in place.
///
/// Strategies run with training mode already forced on, so every layer
/// refreshes its input/output cache on each forward pass the strategy makes.
#[derive(Clone)]
pub struct Training {
    f: Arc<TrainFn>,
}

impl Training {
    /// Wraps an arbitrary training function as a training strategy.
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn(&[f64], &[f64], &mut Network) -> Result<(), MachinaError> + Send + Sync + 'static,
    {
        Training { f: Arc::new(f) }
    }

    pub fn run(
        &self,
        input: &[f64],
        expected: &[f64],
        network: &mut Network,
    ) -> Result<(), MachinaError> {
        (self.f)(input, expected, network)
    }

    /// The default training strategy, [`backpropagate`].
    pub fn backpropagation() -> Self {
        Training::from_fn(backpropagate)
    }
}

impl fmt::Debug for Training {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Training")
    }
}

/// Weight update by backward error propagation.
///
/// One forward pass refreshes every layer's cache, then the layers are walked
/// from output to input. For each neuron the update for weight `i` is
///
/// ```text
/// delta = rate * (expected[i] - layer_input[i])
///              * derivative(layer_output[neuron])
///              * layer_input[i]
/// weight[i] -= delta
/// ```
///
/// and after a layer's weights change, its output is recomputed from the
/// cached input and becomes the `expected` vector of the next shallower layer.
///
/// This is deliberately not the canonical multi-neuron backpropagation: there
/// is no weighted error sum over a neuron's outgoing connections, and the
/// propagated error comes from re-running the layer rather than the chain
/// rule. Weights, cached input, and `expected` are walked in lockstep, so for
/// layers wider than `expected` the trailing weights are left untouched.
pub fn backpropagate(
    input: &[f64],
    expected: &[f64],
    network: &mut Network,
) -> Result<(), MachinaError> {
    network.feed_forward(input)?;

    let rate = network.rate();
    let activation = network.activation().clone();
    let mut expected = expected.to_vec();

    for index in (0..network.size()).rev() {
        let layer_input = network.layers()[index].input().to_vec();
        let layer_output = network.layers()[index].output().to_vec();

        let layer = &mut network.layers_mut()[index];
        for (neuron, out) in layer.neurons_mut().iter_mut().zip(&layer_output) {
            for ((weight, inp), ex) in neuron
                .weights_mut()
                .iter_mut()
                .zip(&layer_input)
                .zip(&expected)
            {
                let delta = rate * (*ex - *inp) * activation.derivative(*out) * *inp;
                *weight -= delta;
            }
        }

        // The corrected output of this layer is what the next shallower layer
        // should have produced.
        expected = network.feed_layer(index, &layer_input)?;
    }

    Ok(())
}

#[cfg(test)]
#[path = "training_test.rs"]
mod tests;
