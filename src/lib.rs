//! A chip8 instruction set interpreter.
//!
//! The crate contains the machine state, the fetch decode execute loop, the monochrome
//! framebuffer and the timers. Rendering, key polling and scheduling belong to the host,
//! which talks to the machine through the traits in [`devices`](crate::devices).
pub mod chip8;
pub mod definitions;
pub mod devices;
pub mod framebuffer;
pub mod memory;
pub mod opcode;
pub mod resources;
pub mod timer;
mod error;
mod runner;

// reexporting for convinience
pub use error::*;
pub use runner::*;
