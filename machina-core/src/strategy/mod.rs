//! The four strategy families and their built-in implementations.
//!
//! Each family is one storage type wrapping a shared function object, so
//! built-ins and caller-supplied strategies are interchangeable at network
//! construction time without subclassing or string dispatch.

pub mod activation;
pub mod init;
pub mod propagation;
pub mod training;

pub use activation::Activation;
pub use init::Initialization;
pub use propagation::Propagation;
pub use training::Training;
