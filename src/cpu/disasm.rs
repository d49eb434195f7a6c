//! Read-only disassembler.
//!
//! Walks `start..=stop` through the router's inspection path (`Bus::peek`),
//! so devices with read side effects are left untouched. The cursor advances
//! by each instruction's encoded length as given by its addressing mode,
//! independent of what executing it would do.
//!
//! Line format: `$ADDR: MNE operand {MODE}`.

use std::collections::BTreeMap;

use crate::bus::Bus;
use crate::cpu::table::{AddrMode, lookup};

/// Assembly-style operand for `mode`. `operands` are the bytes following the
/// opcode; `next` is the address of the following instruction (branch base).
pub(crate) fn operand_text(mode: AddrMode, operands: &[u8], next: u16) -> String {
    let lo = operands.first().copied().unwrap_or(0);
    let hi = operands.get(1).copied().unwrap_or(0);
    let word = u16::from_le_bytes([lo, hi]);
    match mode {
        AddrMode::Implied => String::new(),
        AddrMode::Immediate => format!("#${lo:02X}"),
        AddrMode::ZeroPage => format!("${lo:02X}"),
        AddrMode::ZeroPageX => format!("${lo:02X}, X"),
        AddrMode::ZeroPageY => format!("${lo:02X}, Y"),
        AddrMode::IndexedIndirect => format!("(${lo:02X}, X)"),
        AddrMode::IndirectIndexed => format!("(${lo:02X}), Y"),
        AddrMode::Absolute => format!("${word:04X}"),
        AddrMode::AbsoluteX => format!("${word:04X}, X"),
        AddrMode::AbsoluteY => format!("${word:04X}, Y"),
        AddrMode::Indirect => format!("(${word:04X})"),
        AddrMode::Relative => {
            let target = next.wrapping_add(lo as i8 as u16);
            format!("${lo:02X} [${target:04X}]")
        }
    }
}

/// Disassemble every instruction starting in `start..=stop`.
///
/// Keys are instruction start addresses. An instruction whose operands run
/// past `stop` (or past `$FFFF`, wrapping) is still decoded in full.
pub fn disassemble(bus: &Bus, start: u16, stop: u16) -> BTreeMap<u16, String> {
    let mut lines = BTreeMap::new();
    // Wide cursor so a walk ending at $FFFF terminates.
    let mut cursor = start as u32;

    while cursor <= stop as u32 {
        let addr = cursor as u16;
        let entry = lookup(bus.peek(addr));
        let len = entry.byte_len();
        let operands: Vec<u8> = (1..len).map(|i| bus.peek(addr.wrapping_add(i))).collect();
        let operand = operand_text(entry.mode, &operands, addr.wrapping_add(len));

        let mut line = format!("${addr:04X}: {}", entry.mnemonic());
        if !operand.is_empty() {
            line.push(' ');
            line.push_str(&operand);
        }
        line.push_str(" {");
        line.push_str(entry.mode.tag());
        line.push('}');

        lines.insert(addr, line);
        cursor += len as u32;
    }

    lines
}
