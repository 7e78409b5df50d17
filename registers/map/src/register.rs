// Licensed under the Apache-2.0 license

//! Leaf register descriptors.

use crate::error::SpecError;

/// Capability set of a register.
///
/// The set is closed: a register is always at least readable or writable,
/// so the no-capability combination is unrepresentable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Access {
    ReadOnly,
    WriteOnly,
    ReadWrite,
}

impl Access {
    pub const fn can_read(self) -> bool {
        matches!(self, Access::ReadOnly | Access::ReadWrite)
    }

    pub const fn can_write(self) -> bool {
        matches!(self, Access::WriteOnly | Access::ReadWrite)
    }
}

/// Describes one register: a named bitfield inside a 32-bit word of device
/// memory.
///
/// `address` is a logical device address whose meaning belongs to the
/// transport. `mask` selects the bits of the word that form the register
/// and must be a single contiguous run of set bits; which bits those are
/// determines how values are shifted into and out of the word.
///
/// Registers can be no wider than the 32-bit word they live in, and several
/// registers may share one word through disjoint masks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RegisterSpec {
    address: u32,
    mask: u32,
    access: Access,
}

impl RegisterSpec {
    /// Validates and builds a register descriptor.
    ///
    /// Rejects empty masks, masks with holes, and write-capable partial
    /// masks on registers that cannot be read back (a masked write needs
    /// the read half of its read-modify-write).
    pub const fn try_new(address: u32, mask: u32, access: Access) -> Result<Self, SpecError> {
        if mask == 0 {
            return Err(SpecError::EmptyMask { address });
        }
        let run = mask >> mask.trailing_zeros();
        if run & run.wrapping_add(1) != 0 {
            return Err(SpecError::MaskNotContiguous { address, mask });
        }
        if access.can_write() && !access.can_read() && mask != u32::MAX {
            return Err(SpecError::UnreadableMaskedWrite { address, mask });
        }
        Ok(Self {
            address,
            mask,
            access,
        })
    }

    /// Builds a register descriptor, panicking if the declaration is
    /// invalid. In a `const` register map the panic surfaces at compile
    /// time.
    pub const fn new(address: u32, mask: u32, access: Access) -> Self {
        match Self::try_new(address, mask, access) {
            Ok(spec) => spec,
            Err(SpecError::EmptyMask { .. }) => panic!("register mask has no bits set"),
            Err(SpecError::MaskNotContiguous { .. }) => {
                panic!("register mask is not a contiguous run of bits")
            }
            Err(SpecError::UnreadableMaskedWrite { .. }) => {
                panic!("unreadable register cannot be written through a partial mask")
            }
        }
    }

    pub const fn address(self) -> u32 {
        self.address
    }

    pub const fn mask(self) -> u32 {
        self.mask
    }

    pub const fn access(self) -> Access {
        self.access
    }

    pub const fn can_read(self) -> bool {
        self.access.can_read()
    }

    pub const fn can_write(self) -> bool {
        self.access.can_write()
    }

    /// Bits to shift a field value into position within the word.
    pub const fn shift(self) -> u32 {
        self.mask.trailing_zeros()
    }

    /// Width of the field in bits.
    pub const fn width(self) -> u32 {
        self.mask.count_ones()
    }

    /// Largest value the field can hold.
    pub const fn max_value(self) -> u32 {
        self.mask >> self.shift()
    }
}
