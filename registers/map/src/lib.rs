// Licensed under the Apache-2.0 license

//! Statically-typed hierarchical register maps.
//!
//! A device's registers are declared once as a tree of [`RegisterSpec`]
//! leaves inside composite structs built with [`register_tree!`]. The same
//! declaration then serves every purpose through
//! [`RegisterTree::transform`]: live permission-checked accessors
//! ([`accessor_tree`]), register counts ([`count_registers`]), address
//! lists ([`collect_addresses`]), or any custom per-leaf [`Generator`].
//! Because every view is derived from the one declaration, they cannot
//! drift out of sync with each other.
//!
//! Register values move over a [`mem_transport::MemoryTransport`]; this
//! crate never touches device memory itself.

mod access;
mod error;
mod generator;
mod register;
mod tree;

pub use access::{ReadOnlyRegister, ReadWriteRegister, RegisterHandle, WriteOnlyRegister};
pub use error::{AccessError, SpecError};
pub use generator::{
    accessor_tree, collect_addresses, count_registers, AccessorGenerator, AddressCollector,
    Generator, IndexGenerator,
};
pub use register::{Access, RegisterSpec};
pub use tree::RegisterTree;
