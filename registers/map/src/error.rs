// Licensed under the Apache-2.0 license

use mem_transport::TransportError;
use thiserror::Error;

/// Rejected register declarations.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum SpecError {
    #[error("register at {address:#010x} has an empty mask")]
    EmptyMask { address: u32 },

    #[error("register at {address:#010x} has a mask with holes: {mask:#010x}")]
    MaskNotContiguous { address: u32, mask: u32 },

    /// A masked write is a read-modify-write, so a write-capable register
    /// with a partial mask must also be readable.
    #[error("unreadable register at {address:#010x} cannot be written through partial mask {mask:#010x}")]
    UnreadableMaskedWrite { address: u32, mask: u32 },
}

/// Failures of a single register operation.
///
/// Permission and range violations are detected before the device is
/// touched; transport failures pass through unchanged.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum AccessError {
    #[error("cannot read from register at {address:#010x}")]
    NotReadable { address: u32 },

    #[error("cannot write to register at {address:#010x}")]
    NotWritable { address: u32 },

    #[error("value {value:#x} out of bounds for the {width}-bit register at {address:#010x}")]
    ValueOutOfRange { address: u32, value: u32, width: u32 },

    #[error(transparent)]
    Transport(#[from] TransportError),
}
