//! Wiring-time errors raised by `Bus::mount`.

use thiserror::Error;

/// Why a mount was refused. Only produced while the system is being wired;
/// steady-state reads and writes never fail with an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MountError {
    #[error("device of size {size:#06X} at ${start:04X} runs past the end of the address space")]
    Overflow { start: u16, size: usize },

    #[error(
        "device at ${start:04X}-${end:04X} overlaps existing mount ${existing_start:04X}-${existing_end:04X}"
    )]
    Overlap {
        start: u16,
        end: u16,
        existing_start: u16,
        existing_end: u16,
    },

    #[error("device at ${start:04X} reports a size of zero")]
    Empty { start: u16 },
}
