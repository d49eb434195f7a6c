#![doc = r#"
arness-core library crate.

Tick-driven 6502 CPU core for the NES CPU address space.

Modules:
- bus: address router (mount/resolve/read/write), `BusDevice` contract, RAM
- cpu: 6502 CPU core (facade + state + opcode table + addressing + execute + disassembler)
- ppu_regs: picture-unit register window stub with the vblank NMI latch
- rom: raw / iNES (NROM) program images
- system: wiring layer pairing one CPU with one bus and the standard memory map

In tests, shared bus and image builders are available under `crate::test_utils`.
"#]

pub mod bus;
pub mod cpu;
pub mod ppu_regs;
pub mod rom;
pub mod system;

// Re-export commonly used types at the crate root for convenience.
pub use bus::{Bus, BusConfig, BusDevice, MountError};
pub use cpu::{Cpu, CpuBus, CpuSnapshot};
pub use rom::{LoadError, ProgramImage};
pub use system::System;

// Shared test utilities (only compiled for tests)
#[cfg(test)]
pub mod test_utils;
