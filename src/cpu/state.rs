/*!
state.rs - 6502 architectural state (registers + status flags).

Overview
========
`CpuState` owns every architecturally visible register. `Status` packs the
eight flags into one byte with the fixed hardware layout, so pushing it to
the stack and pulling it back round-trips exactly.

Bus access is limited to the fetch and stack helpers, which take any
`CpuBus`. Decode state, cycle accounting and dispatch live in `core`.

6502 Status Register Bit Layout
===============================
Bit: 7 6 5 4 3 2 1 0
     N V 1 B D I Z C
Where:
  N = NEGATIVE
  V = OVERFLOW
  1 = UNUSED (forced to 1 at every instruction fetch)
  B = BREAK (only meaningful in pushed copies)
  D = DECIMAL (settable, never honored by ADC/SBC)
  I = IRQ_DISABLE
  Z = ZERO
  C = CARRY
*/

use crate::cpu::CpuBus;

/// Processor status flag bit masks.
pub const CARRY: u8 = 0b0000_0001;
pub const ZERO: u8 = 0b0000_0010;
pub const IRQ_DISABLE: u8 = 0b0000_0100;
pub const DECIMAL: u8 = 0b0000_1000;
pub const BREAK: u8 = 0b0001_0000;
pub const UNUSED: u8 = 0b0010_0000;
pub const OVERFLOW: u8 = 0b0100_0000;
pub const NEGATIVE: u8 = 0b1000_0000;

/// Status after reset: IRQ disabled, unused bit set.
pub const POWER_ON_STATUS: u8 = IRQ_DISABLE | UNUSED;
/// Stack pointer after reset.
pub const POWER_ON_SP: u8 = 0xFD;
/// The stack lives in page one.
pub const STACK_BASE: u16 = 0x0100;

/// Packed processor status byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Status(u8);

macro_rules! flag_accessors {
    ($($get:ident, $set:ident => $mask:ident;)*) => {
        $(
            #[inline]
            pub fn $get(self) -> bool {
                self.0 & $mask != 0
            }

            #[inline]
            pub fn $set(&mut self, on: bool) {
                self.assign($mask, on);
            }
        )*
    };
}

impl Status {
    #[inline]
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits)
    }

    #[inline]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Set or clear every bit in `mask`.
    #[inline]
    pub fn assign(&mut self, mask: u8, on: bool) {
        if on {
            self.0 |= mask;
        } else {
            self.0 &= !mask;
        }
    }

    flag_accessors! {
        carry, set_carry => CARRY;
        zero, set_zero => ZERO;
        irq_disable, set_irq_disable => IRQ_DISABLE;
        decimal, set_decimal => DECIMAL;
        break_command, set_break_command => BREAK;
        unused, set_unused => UNUSED;
        overflow, set_overflow => OVERFLOW;
        negative, set_negative => NEGATIVE;
    }

    /// Update ZERO + NEGATIVE from a result byte.
    #[inline]
    pub fn set_zn(&mut self, value: u8) {
        self.set_zero(value == 0);
        self.set_negative(value & 0x80 != 0);
    }

    /// Copy of the byte as pushed by PHP/BRK/IRQ/NMI: BREAK and UNUSED forced on.
    #[inline]
    pub fn pushed(self) -> u8 {
        self.0 | BREAK | UNUSED
    }
}

impl std::fmt::Display for Status {
    /// `NV-BDIZC` with lowercase letters for clear bits.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        const NAMES: [char; 8] = ['N', 'V', 'U', 'B', 'D', 'I', 'Z', 'C'];
        for (i, name) in NAMES.iter().enumerate() {
            let bit = 7 - i;
            let c = if self.0 & (1 << bit) != 0 {
                *name
            } else {
                name.to_ascii_lowercase()
            };
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

/// Register file of the 6502.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CpuState {
    pub a: u8,
    pub x: u8,
    pub y: u8,
    pub sp: u8,
    pub pc: u16,
    pub status: Status,
}

impl Default for CpuState {
    fn default() -> Self {
        Self {
            a: 0,
            x: 0,
            y: 0,
            sp: POWER_ON_SP,
            pc: 0x0000,
            status: Status::from_bits(POWER_ON_STATUS),
        }
    }
}

impl CpuState {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    // ---------------------------------------------------------------------
    // Program Counter Helpers
    // ---------------------------------------------------------------------

    /// Advance PC by `delta` (wrapping at 16 bits).
    #[inline]
    pub fn advance_pc(&mut self, delta: u16) {
        self.pc = self.pc.wrapping_add(delta);
    }

    /// Fetch a byte at PC and then advance PC by 1.
    #[inline]
    pub fn fetch_u8<B: CpuBus>(&mut self, bus: &mut B) -> u8 {
        let b = bus.read(self.pc);
        self.advance_pc(1);
        b
    }

    /// Fetch a little-endian word (low then high) at PC, advancing PC by 2.
    #[inline]
    pub fn fetch_u16<B: CpuBus>(&mut self, bus: &mut B) -> u16 {
        let lo = self.fetch_u8(bus) as u16;
        let hi = self.fetch_u8(bus) as u16;
        (hi << 8) | lo
    }

    // ---------------------------------------------------------------------
    // Stack Helpers
    // ---------------------------------------------------------------------
    //
    // Push: write at 0x0100 | SP, then SP = SP - 1
    // Pull: SP = SP + 1, then read at 0x0100 | SP
    // SP wraps within page one.

    #[inline]
    pub fn push_u8<B: CpuBus>(&mut self, bus: &mut B, value: u8) {
        bus.write(STACK_BASE | self.sp as u16, value);
        self.sp = self.sp.wrapping_sub(1);
    }

    #[inline]
    pub fn pop_u8<B: CpuBus>(&mut self, bus: &mut B) -> u8 {
        self.sp = self.sp.wrapping_add(1);
        bus.read(STACK_BASE | self.sp as u16)
    }

    /// Push high byte, then low byte (return-address order).
    #[inline]
    pub fn push_u16<B: CpuBus>(&mut self, bus: &mut B, value: u16) {
        self.push_u8(bus, (value >> 8) as u8);
        self.push_u8(bus, value as u8);
    }

    /// Pull low byte, then high byte.
    #[inline]
    pub fn pop_u16<B: CpuBus>(&mut self, bus: &mut B) -> u16 {
        let lo = self.pop_u8(bus) as u16;
        let hi = self.pop_u8(bus) as u16;
        (hi << 8) | lo
    }
}
