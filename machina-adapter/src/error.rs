use machina_core::MachinaError;
use thiserror::Error;

/// Errors surfaced at the adapter boundary.
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum AdapterError {
    #[error("Handle {0} does not refer to a live network")]
    StaleHandle(u64),

    #[error(transparent)]
    Core(#[from] MachinaError),
}
