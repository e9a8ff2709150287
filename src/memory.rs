//! The bounds checked ram of the machine.
use crate::{definitions::memory, MemoryError};

/// The flat byte store of the machine.
///
/// - `0x000-0x04F` - built in `4x5` pixel font set (`0-F`)
/// - `0x050-0x1FF` - unused (originally the interpreter itself)
/// - `0x200-0xFFF` - Program ROM and work RAM
///
/// Every access is checked, an access past the end is reported and never wraps.
#[derive(Clone, PartialEq, Eq)]
pub struct Memory {
    data: Box<[u8; memory::SIZE]>,
}

impl Default for Memory {
    fn default() -> Self {
        Self {
            data: Box::new([0; memory::SIZE]),
        }
    }
}

impl std::fmt::Debug for Memory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Memory")
            .field("capacity", &self.capacity())
            .finish()
    }
}

impl Memory {
    /// Will create a zero initialized memory block.
    pub fn new() -> Self {
        Self::default()
    }

    /// The amount of bytes the memory can hold.
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// Checks that `len` bytes starting at `address` are inside of the memory.
    fn check(&self, address: usize, len: usize) -> Result<(), MemoryError> {
        match address.checked_add(len) {
            Some(end) if end <= self.capacity() => Ok(()),
            _ => Err(MemoryError::OutOfRange {
                address,
                len,
                capacity: self.capacity(),
            }),
        }
    }

    /// Will read a single byte.
    pub fn read(&self, address: usize) -> Result<u8, MemoryError> {
        self.check(address, 1)?;
        Ok(self.data[address])
    }

    /// Will write a single byte.
    pub fn write(&mut self, address: usize, value: u8) -> Result<(), MemoryError> {
        self.check(address, 1)?;
        self.data[address] = value;
        Ok(())
    }

    /// Will return `len` bytes starting at `address`. Either the full block
    /// is available or nothing is returned.
    pub fn read_block(&self, address: usize, len: usize) -> Result<&[u8], MemoryError> {
        self.check(address, len)?;
        Ok(&self.data[address..(address + len)])
    }

    /// Will copy the data into memory starting at `address`. If the data would not
    /// fit, nothing is written.
    pub fn load_block(&mut self, data: &[u8], address: usize) -> Result<(), MemoryError> {
        self.check(address, data.len())?;
        self.data[address..(address + data.len())].copy_from_slice(data);
        Ok(())
    }

    /// Will return the complete raw memory, used for printing.
    pub fn as_slice(&self) -> &[u8] {
        &self.data[..]
    }
}
