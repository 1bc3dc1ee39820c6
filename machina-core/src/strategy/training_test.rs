use approx::assert_relative_eq;

use crate::{Activation, Initialization, Network, Parameters, Propagation, Training};

fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

/// Degenerate two-layer network (inputs=2, outputs=1), all weights 1.0.
fn tiny_network(rate: f64) -> Network {
    Network::new(
        Parameters::new()
            .inputs(2)
            .outputs(1)
            .hidden_layers(0)
            .rate(rate)
            .activation(Activation::sigmoid())
            .initialization(Initialization::constant(1.0))
            .propagation(Propagation::dot_product()),
    )
    .unwrap()
}

#[test]
fn caches_are_empty_until_first_train() {
    let mut net = tiny_network(0.1);

    // plain feed_forward outside training mode must not populate caches
    net.feed_forward(&[1.0, 1.0]).unwrap();
    for layer in net.layers() {
        assert!(layer.input().is_empty());
        assert!(layer.output().is_empty());
    }

    net.train(&[1.0, 1.0], &[1.0]).unwrap();
    for layer in net.layers() {
        assert_eq!(layer.input().len(), 2);
        assert!(!layer.output().is_empty());
    }
    assert!(net.training_mode());
}

#[test]
fn backpropagation_applies_the_literal_update_rule() {
    let rate = 0.1;
    let mut net = tiny_network(rate);

    let before = net.feed_forward(&[1.0, 1.0]).unwrap()[0];
    net.train(&[1.0, 1.0], &[1.0]).unwrap();

    // Forward pass with all weights at 1.0: both input-layer neurons emit
    // sigmoid(1 + 1); the output neuron emits sigmoid of their sum.
    let s2 = sigmoid(2.0);
    let out = sigmoid(2.0 * s2);

    // Output layer: expected has one element, so only weight 0 moves.
    let delta = rate * (1.0 - s2) * (out * (1.0 - out)) * s2;
    let output_weights = net.layers()[1].neurons()[0].weights();
    assert_relative_eq!(output_weights[0], 1.0 - delta, epsilon = 1e-12);
    assert_relative_eq!(output_weights[1], 1.0, epsilon = 1e-12);

    // Input layer: the recomputed output-layer vector is the expected value.
    let ex = sigmoid((1.0 - delta) * s2 + s2);
    let delta0 = rate * (ex - 1.0) * (s2 * (1.0 - s2)) * 1.0;
    for neuron in net.layers()[0].neurons() {
        assert_relative_eq!(neuron.weights()[0], 1.0 - delta0, epsilon = 1e-12);
        assert_relative_eq!(neuron.weights()[1], 1.0, epsilon = 1e-12);
    }

    // And the network's answer has actually moved.
    let after = net.feed_forward(&[1.0, 1.0]).unwrap()[0];
    assert_ne!(before, after);
}

#[test]
fn training_refreshes_every_layer_cache() {
    let mut net = tiny_network(0.1);
    net.train(&[0.5, 0.25], &[1.0]).unwrap();

    // layer 0's cached input is the network input; the output layer's cached
    // input is layer 0's (recomputed) output width
    assert_eq!(net.layers()[0].input(), &[0.5, 0.25]);
    assert_eq!(net.layers()[1].input().len(), 2);
    assert_eq!(net.layers()[1].output().len(), 1);
}

#[test]
fn caller_supplied_training_strategy_runs_with_training_mode_on() {
    let zeroing = Training::from_fn(|_, _, net| {
        assert!(net.training_mode());
        for layer in net.layers_mut() {
            for neuron in layer.neurons_mut() {
                for w in neuron.weights_mut() {
                    *w = 0.0;
                }
            }
        }
        Ok(())
    });

    let mut net = Network::new(
        Parameters::new()
            .inputs(2)
            .outputs(1)
            .hidden_layers(0)
            .initialization(Initialization::constant(1.0))
            .training(zeroing),
    )
    .unwrap();

    net.train(&[1.0, 2.0], &[0.0]).unwrap();
    for layer in net.layers() {
        for neuron in layer.neurons() {
            assert!(neuron.weights().iter().all(|w| *w == 0.0));
        }
    }
}
