use machina_core::{Activation, Initialization, Network, Parameters, Propagation};

fn seeded_params(seed: u64) -> Parameters {
    Parameters::new()
        .inputs(4)
        .outputs(2)
        .hidden_layers(2)
        .rate(0.05)
        .initialization(Initialization::seeded_uniform(seed))
}

#[test]
fn same_seed_builds_identical_networks() {
    let mut a = Network::new(seeded_params(7)).unwrap();
    let mut b = Network::new(seeded_params(7)).unwrap();

    let input = [0.1, 0.9, 0.4, 0.6];
    assert_eq!(
        a.feed_forward(&input).unwrap(),
        b.feed_forward(&input).unwrap()
    );

    // they stay in lockstep through training as well
    a.train(&input, &[1.0, 0.0]).unwrap();
    b.train(&input, &[1.0, 0.0]).unwrap();
    assert_eq!(
        a.feed_forward(&input).unwrap(),
        b.feed_forward(&input).unwrap()
    );
}

#[test]
fn different_seeds_build_different_networks() {
    let mut a = Network::new(seeded_params(1)).unwrap();
    let mut b = Network::new(seeded_params(2)).unwrap();
    let input = [0.1, 0.9, 0.4, 0.6];
    assert_ne!(
        a.feed_forward(&input).unwrap(),
        b.feed_forward(&input).unwrap()
    );
}

#[test]
fn repeated_training_keeps_shapes_stable() {
    let mut net = Network::new(
        Parameters::new()
            .inputs(3)
            .outputs(2)
            .hidden_layers(1)
            .rate(0.1)
            .activation(Activation::sigmoid())
            .propagation(Propagation::dot_product())
            .initialization(Initialization::seeded_uniform(11)),
    )
    .unwrap();

    let input = [0.2, 0.4, 0.8];
    for _ in 0..50 {
        net.train(&input, &[1.0, 0.0]).unwrap();
        let out = net.feed_forward(&input).unwrap();
        assert_eq!(out.len(), 2);
        assert!(out.iter().all(|v| v.is_finite()));
    }
}

#[test]
fn training_changes_the_answer() {
    let mut net = Network::new(
        Parameters::new()
            .inputs(2)
            .outputs(1)
            .hidden_layers(0)
            .rate(0.5)
            .initialization(Initialization::constant(1.0)),
    )
    .unwrap();

    let before = net.feed_forward(&[1.0, 1.0]).unwrap();
    net.train(&[1.0, 1.0], &[0.0]).unwrap();
    let after = net.feed_forward(&[1.0, 1.0]).unwrap();
    assert_ne!(before, after);
}

#[test]
fn tanh_network_feeds_forward() {
    let mut net = Network::new(
        Parameters::new()
            .inputs(2)
            .outputs(2)
            .hidden_layers(1)
            .activation(Activation::hyperbolic_tan())
            .initialization(Initialization::seeded_uniform(3)),
    )
    .unwrap();

    let out = net.feed_forward(&[0.5, -0.5]).unwrap();
    assert_eq!(out.len(), 2);
    assert!(out.iter().all(|v| (-1.0..=1.0).contains(v)));
}
