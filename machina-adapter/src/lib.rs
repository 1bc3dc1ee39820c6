//! The host boundary for machina networks.
//!
//! A host runtime talks to the core through two surfaces:
//!
//! - [`config`]: a field-name-keyed configuration map marshalled into a
//!   [`machina_core::Parameters`] builder. The boundary is permissive: unknown
//!   fields and unknown strategy names are skipped, leaving defaults intact.
//! - [`registry`]: opaque [`NetworkHandle`] tokens bound 1:1 to heap-owned
//!   networks, with checked validation instead of raw pointer casts and
//!   destruction-by-move instead of manual delete.

pub mod config;
pub mod error;
pub mod registry;

pub use config::{parameters_from_config, ConfigValue};
pub use error::AdapterError;
pub use registry::{NetworkHandle, NetworkRegistry};
