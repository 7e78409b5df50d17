// Licensed under the Apache-2.0 license

//! Reading and writing registers through a transport.

use mem_transport::MemoryTransport;

use crate::error::AccessError;
use crate::register::{Access, RegisterSpec};

impl RegisterSpec {
    /// Reads the register's value.
    ///
    /// The mask is applied automatically:
    ///
    /// ```text
    /// word in device   00011101
    /// mask             00111100
    /// --------------------------
    /// value returned   00000111
    /// ```
    ///
    /// Costs exactly one device access.
    pub fn read(self, mem: &mut impl MemoryTransport) -> Result<u32, AccessError> {
        if !self.can_read() {
            return Err(AccessError::NotReadable {
                address: self.address(),
            });
        }
        let word = mem.read_word(self.address())?;
        Ok((word & self.mask()) >> self.shift())
    }

    /// Writes `value` into the register's bitfield.
    ///
    /// ```text
    /// word in device   00011101
    /// mask             00111100
    /// value            00001001
    /// --------------------------
    /// new word         00100101
    /// ```
    ///
    /// Costs one device access for a full-word register and two (a
    /// read-modify-write) otherwise. A value too wide for the field is
    /// rejected before the device is touched.
    pub fn write(self, mem: &mut impl MemoryTransport, value: u32) -> Result<(), AccessError> {
        if !self.can_write() {
            return Err(AccessError::NotWritable {
                address: self.address(),
            });
        }
        if self.mask() == u32::MAX {
            mem.write_word(self.address(), value)?;
            return Ok(());
        }
        if value & !self.max_value() != 0 {
            return Err(AccessError::ValueOutOfRange {
                address: self.address(),
                value,
                width: self.width(),
            });
        }
        let old = mem.read_word(self.address())?;
        let new = (old & !self.mask()) | (value << self.shift());
        mem.write_word(self.address(), new)?;
        Ok(())
    }
}

/// Accessor for a readable and writable register.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReadWriteRegister {
    spec: RegisterSpec,
}

impl ReadWriteRegister {
    pub fn read(self, mem: &mut impl MemoryTransport) -> Result<u32, AccessError> {
        self.spec.read(mem)
    }

    pub fn write(self, mem: &mut impl MemoryTransport, value: u32) -> Result<(), AccessError> {
        self.spec.write(mem, value)
    }

    pub fn spec(self) -> RegisterSpec {
        self.spec
    }
}

/// Accessor for a register that can only be read.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReadOnlyRegister {
    spec: RegisterSpec,
}

impl ReadOnlyRegister {
    pub fn read(self, mem: &mut impl MemoryTransport) -> Result<u32, AccessError> {
        self.spec.read(mem)
    }

    pub fn spec(self) -> RegisterSpec {
        self.spec
    }
}

/// Accessor for a register that can only be written.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WriteOnlyRegister {
    spec: RegisterSpec,
}

impl WriteOnlyRegister {
    pub fn write(self, mem: &mut impl MemoryTransport, value: u32) -> Result<(), AccessError> {
        self.spec.write(mem, value)
    }

    pub fn spec(self) -> RegisterSpec {
        self.spec
    }
}

/// A register accessor with its capability resolved at construction.
///
/// The capability set is closed, so the three accessor shapes are a closed
/// sum. Match on the variant to get an accessor exposing only the valid
/// operations, or use [`read`](Self::read)/[`write`](Self::write) for the
/// dynamically checked form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RegisterHandle {
    ReadWrite(ReadWriteRegister),
    ReadOnly(ReadOnlyRegister),
    WriteOnly(WriteOnlyRegister),
}

impl RegisterHandle {
    /// Builds the accessor matching the register's capabilities.
    pub fn new(spec: RegisterSpec) -> Self {
        match spec.access() {
            Access::ReadWrite => Self::ReadWrite(ReadWriteRegister { spec }),
            Access::ReadOnly => Self::ReadOnly(ReadOnlyRegister { spec }),
            Access::WriteOnly => Self::WriteOnly(WriteOnlyRegister { spec }),
        }
    }

    pub fn spec(self) -> RegisterSpec {
        match self {
            Self::ReadWrite(reg) => reg.spec,
            Self::ReadOnly(reg) => reg.spec,
            Self::WriteOnly(reg) => reg.spec,
        }
    }

    /// Reads the register; fails with a permission error on a write-only
    /// register.
    pub fn read(self, mem: &mut impl MemoryTransport) -> Result<u32, AccessError> {
        self.spec().read(mem)
    }

    /// Writes the register; fails with a permission error on a read-only
    /// register.
    pub fn write(self, mem: &mut impl MemoryTransport, value: u32) -> Result<(), AccessError> {
        self.spec().write(mem, value)
    }
}
