use thiserror::Error;

use crate::opcode::Opcode;

/// All the faults a single instruction can raise.
///
/// A fault is terminal for the running program, the caller decides if the
/// machine shall be halted or [`reset`](crate::chip8::ChipSet::reset).
#[derive(Error, Debug, PartialEq, Eq, Clone, Copy)]
pub enum ProcessError {
    #[error("Invalid memory access '{0}'.")]
    Memory(#[from] MemoryError),
    #[error("Invalid opcode state '{0}'.")]
    Opcode(#[from] OpcodeError),
    #[error("Invalid stack state '{0}'.")]
    Stack(#[from] StackError),
}

#[derive(Error, Debug, PartialEq, Eq, Clone, Copy)]
pub enum MemoryError {
    #[error("Access of {len} byte(s) at {address:#06X} is out of range for a memory of {capacity:#06X} bytes")]
    OutOfRange {
        address: usize,
        len: usize,
        capacity: usize,
    },
}

#[derive(Error, Debug, PartialEq, Eq, Clone, Copy)]
pub enum OpcodeError {
    #[error("An unsupported opcode was used {0:#06X?}.")]
    InvalidOpcode(Opcode),
}

#[derive(Error, Debug, PartialEq, Eq, Clone, Copy)]
pub enum StackError {
    #[error("Stack is full!")]
    Overflow,
    #[error("Stack is empty!")]
    Underflow,
}
