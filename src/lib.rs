//! An interpretive MIPS32 Release 6 instruction-set core: decoder,
//! register file, memory adapter, and per-family executor.
#![forbid(unsafe_code)]

pub mod emulator;
pub mod exec;
pub mod fields;
pub mod instr;
pub mod memory;
pub mod outcome;
pub mod registers;

pub use emulator::Emulator;
pub use instr::{DecodeError, Family, Instruction};
pub use memory::{Memory, Mmio, ReadError, Width, WriteError};
pub use outcome::Outcome;
pub use registers::{Cause, RegisterFile, RegisterName};
