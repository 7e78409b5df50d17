// Licensed under the Apache-2.0 license

//! Memory-access transport boundary.
//!
//! Register maps describe *where* values live; a [`MemoryTransport`] is the
//! thing that actually moves 32-bit words to and from a device. The register
//! layer is written against this trait only, so the same map drives a remote
//! memory service, an in-process RAM stand-in ([`RamTransport`]), or an
//! instrumented test double.
//!
//! Opening a connection is the implementor's constructor; dropping the value
//! closes it. Errors are opaque [`TransportError`]s carrying the transport's
//! own description of what went wrong; callers above this boundary propagate
//! them verbatim and never retry.

mod ram;
mod shared;

pub use ram::RamTransport;
pub use shared::SharedTransport;

use thiserror::Error;

/// Opaque failure reported by a transport.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("{message}")]
pub struct TransportError {
    message: String,
}

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Word-oriented access to device memory.
///
/// Addresses are byte addresses into the device's address space and must be
/// 32-bit aligned. `read` and `write` move `words.len()` consecutive words
/// starting at `address`.
pub trait MemoryTransport {
    fn read(&mut self, address: u32, words: &mut [u32]) -> Result<(), TransportError>;

    fn write(&mut self, address: u32, words: &[u32]) -> Result<(), TransportError>;

    /// Reads the single word at `address`.
    fn read_word(&mut self, address: u32) -> Result<u32, TransportError> {
        let mut word = [0u32; 1];
        self.read(address, &mut word)?;
        Ok(word[0])
    }

    /// Writes a single word at `address`.
    fn write_word(&mut self, address: u32, value: u32) -> Result<(), TransportError> {
        self.write(address, &[value])
    }
}

impl<T: MemoryTransport + ?Sized> MemoryTransport for &mut T {
    fn read(&mut self, address: u32, words: &mut [u32]) -> Result<(), TransportError> {
        (**self).read(address, words)
    }

    fn write(&mut self, address: u32, words: &[u32]) -> Result<(), TransportError> {
        (**self).write(address, words)
    }
}
