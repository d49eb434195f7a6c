/*!
core::Cpu - tick-driven 6502 CPU façade wrapping `CpuState`.

Execution model
===============
The CPU is driven one clock cycle at a time. A countdown (`cycles`) tracks
how many ticks the current instruction still owes:

- countdown == 0 (between instructions): the next `tick` fetches the
  opcode, forces the UNUSED status bit, resolves the addressing mode, runs
  the operation and loads the countdown with
  `base + (mode_extra & op_extra)` (+ any branch penalties).
- every tick, dispatching or not, bumps `cycles_passed` and decrements the
  countdown.

All architectural effects of an instruction land in the tick that
dispatches it; the remaining ticks only burn the charged cycles. This makes
`is_instruction_finished()` the instruction boundary.

Interrupts
==========
`irq` / `nmi` are entry points for the wiring layer and must only be
called between instructions. They push PC (high, low) and the status copy
with BREAK + UNUSED forced, set IRQ_DISABLE and load PC from the vector.
`irq` is ignored while IRQ_DISABLE is set.

Bus
===
The CPU never stores its bus. Every method that touches memory takes the
bus as a parameter; see `crate::cpu::CpuBus`.
*/

#[cfg(feature = "trace")]
use log::trace;

use crate::bus::Bus;
use crate::cpu::addressing::apply_addressing_mode;
use crate::cpu::disasm::operand_text;
use crate::cpu::execute::apply_operation;
use crate::cpu::state::CpuState;
use crate::cpu::table::{AddrMode, lookup};
use crate::cpu::{
    CpuBus, IRQ_CYCLES, IRQ_VECTOR, NMI_CYCLES, NMI_VECTOR, RESET_CYCLES, RESET_VECTOR,
};

/// Transient per-instruction latch filled by addressing and read by operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Decode {
    /// Last dispatched opcode (`None` until the first fetch after reset).
    pub(crate) opcode: Option<u8>,
    pub(crate) mode: AddrMode,
    pub(crate) addr_abs: u16,
    pub(crate) addr_rel: u16,
    pub(crate) fetched: u8,
}

impl Default for Decode {
    fn default() -> Self {
        Self {
            opcode: None,
            mode: AddrMode::Implied,
            addr_abs: 0x0000,
            addr_rel: 0x0000,
            fetched: 0x00,
        }
    }
}

/// Register/flag/cycle view at an instruction boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CpuSnapshot {
    pub pc: u16,
    pub a: u8,
    pub x: u8,
    pub y: u8,
    pub status: u8,
    pub sp: u8,
    /// Cycles since the last reset.
    pub cycles: u64,
}

#[derive(Debug, Clone)]
pub struct Cpu {
    pub(crate) state: CpuState,
    pub(crate) decode: Decode,
    /// Ticks still owed by the in-flight instruction.
    pub(crate) cycles: u8,
    cycles_passed: u64,
}

impl Default for Cpu {
    fn default() -> Self {
        Self::new()
    }
}

impl Cpu {
    /// Construct a new CPU with power-up register defaults. Call `reset`
    /// before ticking so PC is loaded from the reset vector.
    pub fn new() -> Self {
        Self {
            state: CpuState::new(),
            decode: Decode::default(),
            cycles: 0,
            cycles_passed: 0,
        }
    }

    /// Return immutable reference to internal state (for inspection / testing).
    #[inline]
    pub fn state(&self) -> &CpuState {
        &self.state
    }

    /// Mutable register access for harnesses that poke registers directly.
    #[inline]
    pub fn state_mut(&mut self) -> &mut CpuState {
        &mut self.state
    }

    #[inline]
    pub fn pc(&self) -> u16 {
        self.state.pc
    }

    /// True exactly when no instruction is in flight.
    #[inline]
    pub fn is_instruction_finished(&self) -> bool {
        self.cycles == 0
    }

    /// Ticks since the last reset.
    #[inline]
    pub fn cycles_passed(&self) -> u64 {
        self.cycles_passed
    }

    /// Ticks the in-flight instruction still owes.
    #[inline]
    pub fn remaining_cycles(&self) -> u8 {
        self.cycles
    }

    /// Mnemonic of the most recently dispatched opcode.
    pub fn current_mnemonic(&self) -> Option<&'static str> {
        self.decode.opcode.map(|op| lookup(op).mnemonic())
    }

    pub fn snapshot(&self) -> CpuSnapshot {
        CpuSnapshot {
            pc: self.state.pc,
            a: self.state.a,
            x: self.state.x,
            y: self.state.y,
            status: self.state.status.bits(),
            sp: self.state.sp,
            cycles: self.cycles_passed,
        }
    }

    // ---------------------------------------------------------------------
    // Reset / interrupts
    // ---------------------------------------------------------------------

    /// Load PC from the reset vector and return every register to its
    /// power-on value. The reset sequence itself costs `RESET_CYCLES` ticks.
    pub fn reset<B: CpuBus>(&mut self, bus: &mut B) {
        self.state = CpuState {
            pc: bus.read_word(RESET_VECTOR),
            ..CpuState::default()
        };
        self.decode = Decode::default();
        self.cycles = RESET_CYCLES;
        self.cycles_passed = 0;
    }

    /// Maskable interrupt. Returns `false` (and does nothing) while
    /// IRQ_DISABLE is set.
    pub fn irq<B: CpuBus>(&mut self, bus: &mut B) -> bool {
        if self.state.status.irq_disable() {
            return false;
        }
        self.interrupt(bus, IRQ_VECTOR, IRQ_CYCLES);
        true
    }

    /// Non-maskable interrupt.
    pub fn nmi<B: CpuBus>(&mut self, bus: &mut B) {
        self.interrupt(bus, NMI_VECTOR, NMI_CYCLES);
    }

    fn interrupt<B: CpuBus>(&mut self, bus: &mut B, vector: u16, cost: u8) {
        let pc = self.state.pc;
        self.state.push_u16(bus, pc);
        let p = self.state.status.pushed();
        self.state.push_u8(bus, p);
        self.state.status.set_irq_disable(true);
        self.state.pc = bus.read_word(vector);
        self.cycles = cost;
    }

    // ---------------------------------------------------------------------
    // Clocking
    // ---------------------------------------------------------------------

    /// Advance the CPU by exactly one clock cycle.
    pub fn tick<B: CpuBus>(&mut self, bus: &mut B) {
        if self.cycles == 0 {
            self.dispatch(bus);
        }
        self.cycles_passed += 1;
        self.cycles = self.cycles.saturating_sub(1);
    }

    fn dispatch<B: CpuBus>(&mut self, bus: &mut B) {
        #[cfg(feature = "trace")]
        {
            let line = self.render_trace(|addr| bus.peek(addr));
            trace!("{line}");
        }

        let opcode = self.state.fetch_u8(bus);
        self.state.status.set_unused(true);

        let entry = lookup(opcode);
        self.decode.opcode = Some(opcode);
        self.decode.mode = entry.mode;
        self.cycles = entry.cycles;

        let mode_extra = apply_addressing_mode(entry.mode, self, bus);
        let op_extra = apply_operation(entry.op, self, bus);
        self.cycles += mode_extra & op_extra;
    }

    /// Tick until the current (or next) instruction completes. Returns the
    /// number of ticks taken. Right after `reset` this consumes the reset
    /// sequence.
    pub fn step<B: CpuBus>(&mut self, bus: &mut B) -> u32 {
        let mut ticks = 0;
        loop {
            self.tick(bus);
            ticks += 1;
            if self.is_instruction_finished() {
                return ticks;
            }
        }
    }

    /// Convenience: `step` `instructions` times. Returns total ticks.
    pub fn run<B: CpuBus>(&mut self, bus: &mut B, instructions: usize) -> u64 {
        (0..instructions).map(|_| self.step(bus) as u64).sum()
    }

    // ---------------------------------------------------------------------
    // Tracing
    // ---------------------------------------------------------------------

    /// nestest-style line for the instruction at PC, read without side effects:
    /// `PC  BYTES  MNE OPERAND  A:.. X:.. Y:.. P:.. SP:.. CYC:n`
    pub fn trace_line(&self, bus: &Bus) -> String {
        self.render_trace(|addr| bus.peek(addr))
    }

    fn render_trace(&self, mut peek: impl FnMut(u16) -> u8) -> String {
        let pc = self.state.pc;
        let entry = lookup(peek(pc));
        let len = entry.byte_len();
        let bytes: Vec<u8> = (0..len).map(|i| peek(pc.wrapping_add(i))).collect();
        let hex = bytes
            .iter()
            .map(|b| format!("{b:02X}"))
            .collect::<Vec<_>>()
            .join(" ");
        let operand = operand_text(entry.mode, &bytes[1..], pc.wrapping_add(len));
        let s = &self.state;
        format!(
            "{pc:04X}  {hex:<8}  {} {operand:<27} A:{:02X} X:{:02X} Y:{:02X} P:{:02X} SP:{:02X} CYC:{}",
            entry.mnemonic(),
            s.a,
            s.x,
            s.y,
            s.status.bits(),
            s.sp,
            self.cycles_passed
        )
    }
}

// -------------------------------------------------------------------------
// Tests
// -------------------------------------------------------------------------
