//! A minimal, strategy-configurable feedforward neural network.
//!
//! The topology is a fixed multilayer perceptron; everything with a behavioral
//! choice in it is a swappable strategy object supplied through [`Parameters`]:
//!
//! - [`Activation`]: the per-neuron transfer function and its derivative.
//! - [`Initialization`]: produces one value per weight at construction.
//! - [`Propagation`]: combines an input vector with a neuron's weight vector.
//! - [`Training`]: mutates the network's weights from (input, expected) pairs.
//!
//! The core is single-threaded and synchronous: `feed_forward` and `train` on
//! the same [`Network`] must not run concurrently, and neither is reentrant.

pub mod error;
pub mod network;
pub mod params;
pub mod strategy;

pub use error::MachinaError;
pub use network::{Layer, Network, Neuron};
pub use params::Parameters;
pub use strategy::{Activation, Initialization, Propagation, Training};
