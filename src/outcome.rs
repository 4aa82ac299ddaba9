//! The coarse result of executing one instruction.

use crate::memory::{ReadError, WriteError};

/// What happened when an instruction was executed. Folds memory faults,
/// decode failures, and arithmetic faults into one result the caller can
/// match on without digging through nested error types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Executed normally; the register file and/or memory were updated
    /// and the program counter has already been advanced.
    Ok,
    /// A `syscall`/`break`/`teq`-family trap fired.
    Trap,
    /// The word did not decode to a recognized, implemented operation.
    Illegal,
    /// A memory access was not naturally aligned for its width. `is_store`
    /// distinguishes a load from a store so the caller can raise the
    /// right coprocessor-0 Cause (`AddressErrorLoad` vs `AddressErrorStore`).
    MemUnaligned { is_store: bool },
    /// A memory access fell outside the mapped region.
    MemOob,
    /// A `div`/`mod`/`divu`/`modu` was attempted with a zero divisor.
    DivByZero,
    /// The operation decoded to a recognized family this core does not
    /// execute (FPU instructions).
    Unimplemented,
}

impl From<ReadError> for Outcome {
    fn from(err: ReadError) -> Self {
        match err {
            ReadError::Unaligned { .. } => Outcome::MemUnaligned { is_store: false },
            ReadError::OutOfBounds { .. } => Outcome::MemOob,
        }
    }
}

impl From<WriteError> for Outcome {
    fn from(err: WriteError) -> Self {
        match err {
            WriteError::Unaligned { .. } => Outcome::MemUnaligned { is_store: true },
            WriteError::OutOfBounds { .. } => Outcome::MemOob,
        }
    }
}
