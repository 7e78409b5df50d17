// Licensed under the Apache-2.0 license

//! Serialized sharing of one transport between several owners.

use std::sync::{Arc, Mutex, MutexGuard};

use log::debug;

use crate::{MemoryTransport, TransportError};

/// Clone-able handle to a transport shared between several owners.
///
/// Each operation holds a lock for its full duration, so at most one
/// transaction is in flight on the underlying device at any time regardless
/// of how many clones exist. A clone sees every write performed through its
/// siblings.
pub struct SharedTransport<T> {
    inner: Arc<Mutex<T>>,
}

impl<T> Clone for SharedTransport<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: MemoryTransport> SharedTransport<T> {
    pub fn new(transport: T) -> Self {
        debug!("wrapping transport for shared access");
        Self {
            inner: Arc::new(Mutex::new(transport)),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, T>, TransportError> {
        self.inner
            .lock()
            .map_err(|_| TransportError::new("transport lock poisoned by a failed owner"))
    }
}

impl<T: MemoryTransport> MemoryTransport for SharedTransport<T> {
    fn read(&mut self, address: u32, words: &mut [u32]) -> Result<(), TransportError> {
        self.lock()?.read(address, words)
    }

    fn write(&mut self, address: u32, words: &[u32]) -> Result<(), TransportError> {
        self.lock()?.write(address, words)
    }
}
