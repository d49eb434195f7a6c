//! Shared test utilities: flat 64 KiB buses and minimal iNES (v1) images.
//!
//! These helpers de-duplicate bus and image construction across the CPU,
//! router and system tests. They intentionally support just what the test
//! suite needs.
//!
//! Notes on iNES header fields used here:
//! - bytes[0..4] = b"NES\x1A"
//! - byte 4 = PRG ROM size in 16 KiB units
//! - byte 5 = CHR ROM size in 8 KiB units (always 0 here)
//! - byte 6 = Flags 6 (bit 2 = 512-byte trainer present)
//! - bytes 7..15 = padding/reserved
//!
//! Vectors:
//! - For 16 KiB PRG (NROM-128): vectors are at PRG offset 0x3FFA..=0x3FFF
//! - For 32 KiB PRG (NROM-256): vectors are at PRG offset 0x7FFA..=0x7FFF

#![allow(dead_code)]

use crate::bus::{Bus, Ram, shared};
use crate::cpu::RESET_VECTOR;

/// Bus backed by one 64 KiB `Ram`, with `program` copied to `origin` and the
/// reset vector pointing at `origin`.
pub fn flat_bus(program: &[u8], origin: u16) -> Bus {
    let mut bus = Bus::new();
    bus.mount(shared(Ram::new(0x10000)), 0x0000)
        .expect("flat RAM covers the whole address space");
    bus.load(origin, program);
    set_vector(&mut bus, RESET_VECTOR, origin);
    bus
}

/// Write a little-endian vector at `vector`.
pub fn set_vector(bus: &mut Bus, vector: u16, target: u16) {
    let [lo, hi] = target.to_le_bytes();
    bus.write(vector, lo);
    bus.write(vector.wrapping_add(1), hi);
}

/// Build a minimal iNES (v1) header + PRG image.
///
/// - `prg_16k`: number of 16 KiB PRG units (1 => 16 KiB, 2 => 32 KiB)
/// - `trainer`: optional 512-byte trainer to insert after the header
pub fn build_ines(prg_16k: usize, trainer: Option<&[u8; 512]>) -> Vec<u8> {
    let mut bytes =
        Vec::with_capacity(16 + trainer.map(|_| 512).unwrap_or(0) + prg_16k * 16 * 1024);

    // Header
    bytes.extend_from_slice(b"NES\x1A");
    bytes.push(prg_16k as u8);
    bytes.push(0);
    bytes.push(if trainer.is_some() { 0x04 } else { 0x00 });
    bytes.extend_from_slice(&[0u8; 9]);

    if let Some(t) = trainer {
        bytes.extend_from_slice(t);
    }

    // PRG payload (pattern-filled for tests)
    bytes.extend(std::iter::repeat_n(0xAA, prg_16k * 16 * 1024));
    bytes
}

/// Raw PRG bank of `size` bytes holding `prg` at offset 0, with all three
/// vectors (reset, NMI, IRQ) pointing at `entry`.
pub fn build_prg(prg: &[u8], size: usize, entry: u16) -> Vec<u8> {
    assert!(prg.len() <= size, "program must fit within the PRG bank");
    let mut bank = vec![0xEA; size];
    bank[..prg.len()].copy_from_slice(prg);
    set_vectors_in_prg(&mut bank, entry, entry, entry);
    bank
}

/// Single-bank NROM-128 iNES image with `prg` at $8000 and vectors at `entry`.
pub fn build_nrom_with_prg(prg: &[u8], entry: u16) -> Vec<u8> {
    let mut rom = build_ines(1, None);
    rom.truncate(16);
    rom.extend_from_slice(&build_prg(prg, 16 * 1024, entry));
    rom
}

/// Write CPU vectors (NMI, RESET, IRQ/BRK) at the top of a PRG slice.
pub fn set_vectors_in_prg(prg: &mut [u8], reset: u16, nmi: u16, irq: u16) {
    let top = prg.len();
    assert!(top >= 6, "PRG too small to hold vectors");
    prg[top - 6..top - 4].copy_from_slice(&nmi.to_le_bytes());
    prg[top - 4..top - 2].copy_from_slice(&reset.to_le_bytes());
    prg[top - 2..top].copy_from_slice(&irq.to_le_bytes());
}
