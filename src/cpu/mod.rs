/*!
cpu::mod - Public façade for the 6502 CPU core.

Layout:

```text
state.rs      - Registers, `Status` flag byte, fetch + stack helpers.
table.rs      - 256-entry opcode table (operation id, addressing mode, base cycles).
addressing.rs - Effective-address resolution per addressing mode.
execute.rs    - Operation semantics (ALU, loads/stores, branches, stack, control flow).
core/         - `Cpu`: tick-driven fetch/decode/execute, reset, IRQ/NMI.
disasm.rs     - Read-only disassembler over the bus.
```

The CPU never owns its bus. Every call that touches memory takes
`&mut impl CpuBus`, so the wiring layer decides what sits behind it
(normally the crate's `Bus` router, or a flat array in tests).

Usage:
```rust
use arness_core::bus::{Bus, Ram, shared};
use arness_core::cpu::Cpu;

let mut bus = Bus::new();
bus.mount(shared(Ram::new(0x10000)), 0x0000).unwrap();
let mut cpu = Cpu::new();
cpu.reset(&mut bus);
cpu.step(&mut bus);
```
*/

pub mod addressing;
pub mod core;
pub mod disasm;
pub mod execute;
pub mod state;
pub mod table;

pub use crate::cpu::core::{Cpu, CpuSnapshot};
pub use crate::cpu::disasm::disassemble;
pub use crate::cpu::state::{
    BREAK, CARRY, CpuState, DECIMAL, IRQ_DISABLE, NEGATIVE, OVERFLOW, Status, UNUSED, ZERO,
};
pub use crate::cpu::table::{AddrMode, Opcode, Operation, lookup};

use crate::bus::Bus;

/// Fixed vector locations.
pub const NMI_VECTOR: u16 = 0xFFFA;
pub const RESET_VECTOR: u16 = 0xFFFC;
pub const IRQ_VECTOR: u16 = 0xFFFE;

/// Fixed entry costs.
pub const RESET_CYCLES: u8 = 7;
pub const IRQ_CYCLES: u8 = 7;
pub const NMI_CYCLES: u8 = 8;

/// The CPU's view of memory: unconditional byte reads and writes.
///
/// `peek` is the inspection path (no device side effects). The CPU itself
/// never calls it; the default forwards to `read` for buses that have no
/// side effects to suppress.
pub trait CpuBus {
    fn read(&mut self, addr: u16) -> u8;
    fn write(&mut self, addr: u16, value: u8);

    fn peek(&mut self, addr: u16) -> u8 {
        self.read(addr)
    }

    /// Little-endian word at `addr`, `addr + 1` (wrapping).
    fn read_word(&mut self, addr: u16) -> u16 {
        let lo = self.read(addr) as u16;
        let hi = self.read(addr.wrapping_add(1)) as u16;
        (hi << 8) | lo
    }
}

impl CpuBus for Bus {
    #[inline]
    fn read(&mut self, addr: u16) -> u8 {
        Bus::read(self, addr)
    }

    #[inline]
    fn write(&mut self, addr: u16, value: u8) {
        // Unmapped writes float; the router already reports/logs them.
        let _ = Bus::write(self, addr, value);
    }

    #[inline]
    fn peek(&mut self, addr: u16) -> u8 {
        Bus::peek(self, addr)
    }
}
