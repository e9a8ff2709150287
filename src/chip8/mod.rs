//! The full implementation of the chip8 interpreter, from the opcodes to an option to pretty
//! print the machine state.
mod chipset;
mod opcodes;
mod print;

/// reexport chipset structs and data for simpler usage
pub use chipset::*;
