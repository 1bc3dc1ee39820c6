use std::collections::HashMap;

use machina_core::{Network, Parameters};

use crate::error::AdapterError;

/// An opaque token referring to one live [`Network`] inside a
/// [`NetworkRegistry`].
///
/// Handles are deliberately neither `Clone` nor `Copy`: the token handed out
/// by [`NetworkRegistry::create`] is the only one in existence, and
/// [`NetworkRegistry::destroy`] consumes it, so a network is destroyed at most
/// once and a destroyed handle cannot be used again.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct NetworkHandle {
    id: u64,
}

impl NetworkHandle {
    /// Numeric identity of the token, for diagnostics.
    pub fn id(&self) -> u64 {
        self.id
    }
}

/// Owner of every network created across the host boundary.
///
/// Replaces signature-checked pointer casts and manual lock/unlock/delete with
/// an id-keyed arena: every access validates the handle against the live set
/// and fails with [`AdapterError::StaleHandle`] instead of dereferencing a
/// dead token.
#[derive(Debug, Default)]
pub struct NetworkRegistry {
    networks: HashMap<u64, Network>,
    next_id: u64,
}

impl NetworkRegistry {
    pub fn new() -> Self {
        NetworkRegistry::default()
    }

    /// Builds a network from `params` and takes ownership of it, returning the
    /// sole handle to it.
    pub fn create(&mut self, params: Parameters) -> Result<NetworkHandle, AdapterError> {
        let network = Network::new(params)?;
        let id = self.next_id;
        self.next_id += 1;
        self.networks.insert(id, network);
        log::debug!("registered network {id}");
        Ok(NetworkHandle { id })
    }

    /// Whether `handle` still refers to a live network.
    pub fn validate(&self, handle: &NetworkHandle) -> bool {
        self.networks.contains_key(&handle.id)
    }

    /// Number of live networks in the registry.
    pub fn len(&self) -> usize {
        self.networks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.networks.is_empty()
    }

    /// Runs a forward pass on the referenced network.
    pub fn feed_forward(
        &mut self,
        handle: &NetworkHandle,
        input: &[f64],
    ) -> Result<Vec<f64>, AdapterError> {
        let network = self.live_mut(handle)?;
        Ok(network.feed_forward(input)?)
    }

    /// Trains the referenced network on one `(input, expected)` pair.
    pub fn train(
        &mut self,
        handle: &NetworkHandle,
        input: &[f64],
        expected: &[f64],
    ) -> Result<(), AdapterError> {
        let network = self.live_mut(handle)?;
        Ok(network.train(input, expected)?)
    }

    /// Layer count of the referenced network.
    pub fn size(&self, handle: &NetworkHandle) -> Result<usize, AdapterError> {
        Ok(self.live(handle)?.size())
    }

    /// Learning rate of the referenced network.
    pub fn rate(&self, handle: &NetworkHandle) -> Result<f64, AdapterError> {
        Ok(self.live(handle)?.rate())
    }

    /// Destroys the referenced network, consuming the handle.
    pub fn destroy(&mut self, handle: NetworkHandle) -> Result<(), AdapterError> {
        match self.networks.remove(&handle.id) {
            Some(_) => {
                log::debug!("destroyed network {}", handle.id);
                Ok(())
            }
            None => Err(AdapterError::StaleHandle(handle.id)),
        }
    }

    fn live(&self, handle: &NetworkHandle) -> Result<&Network, AdapterError> {
        self.networks
            .get(&handle.id)
            .ok_or(AdapterError::StaleHandle(handle.id))
    }

    fn live_mut(&mut self, handle: &NetworkHandle) -> Result<&mut Network, AdapterError> {
        self.networks
            .get_mut(&handle.id)
            .ok_or(AdapterError::StaleHandle(handle.id))
    }
}

#[cfg(test)]
#[path = "registry_test.rs"]
mod tests;
