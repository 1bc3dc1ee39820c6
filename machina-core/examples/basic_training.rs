//! Builds a small network from explicit parameters and trains it on a single
//! input/target pair, printing the output as it moves.
//!
//! Run with: `cargo run --example basic_training`

use machina_core::{Activation, Initialization, MachinaError, Network, Parameters};

fn main() -> Result<(), MachinaError> {
    let params = Parameters::new()
        .inputs(4)
        .outputs(2)
        .hidden_layers(1)
        .rate(0.1)
        .activation(Activation::sigmoid())
        .initialization(Initialization::seeded_uniform(42));

    let mut net = Network::new(params)?;
    println!(
        "network of {} layers, widths {:?}",
        net.size(),
        net.layers().iter().map(|l| l.size()).collect::<Vec<_>>()
    );

    let input = [0.9, 0.1, 0.8, 0.2];
    let target = [1.0, 0.0];

    println!("before: {:?}", net.feed_forward(&input)?);
    for epoch in 0..100 {
        net.train(&input, &target)?;
        if epoch % 20 == 0 {
            println!("epoch {epoch:3}: {:?}", net.feed_forward(&input)?);
        }
    }
    println!("after:  {:?}", net.feed_forward(&input)?);

    Ok(())
}
