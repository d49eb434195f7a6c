/*!
addressing.rs - effective-address resolution for the twelve 6502 addressing modes.

Overview
========
`apply_addressing_mode` runs right after the opcode byte has been fetched
(PC points at the first operand byte). It consumes the operand bytes,
leaves the effective address in the decode latch (`addr_abs`, or
`addr_rel` for branches) and returns 1 when the mode *may* cost an extra
cycle. Whether that cycle is charged is decided by the caller, which ANDs
it with the operation's own signal.

Only AbsoluteX, AbsoluteY and IndirectIndexed ever return 1 (index crossed
a page). Branch page-cross penalties belong to the branch operations.

Quirks
======
- Zero-page indexed modes wrap inside page zero.
- Indirect (JMP only) reads the high byte of the target from the start of
  the same page when the pointer sits at `$xxFF`.
- IndexedIndirect reads both pointer bytes from page zero, wrapping at $FF.
*/

use crate::cpu::CpuBus;
use crate::cpu::core::Cpu;
use crate::cpu::table::AddrMode;

#[inline]
fn page_crossed(base: u16, effective: u16) -> bool {
    (base & 0xFF00) != (effective & 0xFF00)
}

/// Read a pointer stored in page zero at `zp`; the high byte wraps to `$00`.
#[inline]
fn read_word_zp<B: CpuBus>(bus: &mut B, zp: u8) -> u16 {
    let lo = bus.read(zp as u16) as u16;
    let hi = bus.read(zp.wrapping_add(1) as u16) as u16;
    (hi << 8) | lo
}

/// JMP ($xxFF) hardware defect: the high byte comes from `$xx00`.
#[inline]
pub(crate) fn read_word_indirect_bug<B: CpuBus>(bus: &mut B, ptr: u16) -> u16 {
    let lo = bus.read(ptr) as u16;
    let hi_addr = if ptr & 0x00FF == 0x00FF {
        ptr & 0xFF00
    } else {
        ptr.wrapping_add(1)
    };
    let hi = bus.read(hi_addr) as u16;
    (hi << 8) | lo
}

/// Resolve the operand for `mode`, advancing PC past the operand bytes.
pub(crate) fn apply_addressing_mode<B: CpuBus>(mode: AddrMode, cpu: &mut Cpu, bus: &mut B) -> u8 {
    let s = &mut cpu.state;
    let d = &mut cpu.decode;
    match mode {
        AddrMode::Implied => {
            d.fetched = s.a;
            0
        }
        AddrMode::Immediate => {
            d.addr_abs = s.pc;
            s.advance_pc(1);
            0
        }
        AddrMode::ZeroPage => {
            d.addr_abs = s.fetch_u8(bus) as u16;
            0
        }
        AddrMode::ZeroPageX => {
            d.addr_abs = s.fetch_u8(bus).wrapping_add(s.x) as u16;
            0
        }
        AddrMode::ZeroPageY => {
            d.addr_abs = s.fetch_u8(bus).wrapping_add(s.y) as u16;
            0
        }
        AddrMode::Relative => {
            // Sign-extend the displacement
            d.addr_rel = s.fetch_u8(bus) as i8 as u16;
            0
        }
        AddrMode::Absolute => {
            d.addr_abs = s.fetch_u16(bus);
            0
        }
        AddrMode::AbsoluteX => {
            let base = s.fetch_u16(bus);
            d.addr_abs = base.wrapping_add(s.x as u16);
            page_crossed(base, d.addr_abs) as u8
        }
        AddrMode::AbsoluteY => {
            let base = s.fetch_u16(bus);
            d.addr_abs = base.wrapping_add(s.y as u16);
            page_crossed(base, d.addr_abs) as u8
        }
        AddrMode::Indirect => {
            let ptr = s.fetch_u16(bus);
            d.addr_abs = read_word_indirect_bug(bus, ptr);
            0
        }
        AddrMode::IndexedIndirect => {
            let zp = s.fetch_u8(bus).wrapping_add(s.x);
            d.addr_abs = read_word_zp(bus, zp);
            0
        }
        AddrMode::IndirectIndexed => {
            let zp = s.fetch_u8(bus);
            let base = read_word_zp(bus, zp);
            d.addr_abs = base.wrapping_add(s.y as u16);
            page_crossed(base, d.addr_abs) as u8
        }
    }
}
