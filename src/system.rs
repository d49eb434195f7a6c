/*!
system.rs - wiring layer: one CPU, one bus, the standard CPU memory map.

Responsibilities
================
- Build the CPU address space:

  ```text
  $0000-$07FF  2 KiB work RAM, mirrored at $0800, $1000, $1800
  $2000-$2007  picture-unit register window
  $8000-$FFFF  program image (16 KiB mirrored into $C000, or 32 KiB)
  ```

- Pair the CPU with the bus it drives. The CPU never stores the bus; every
  CPU entry point is handed `&mut self.bus` from here.
- Forward a latched picture-unit NMI to the CPU, only between instructions.
- Drivers: run N cycles, run N instructions, hex dump.

Ownership
=========
`System` owns `Cpu` and `Bus`. Devices live behind shared handles held by
the bus mounts; the system keeps clones of the RAM and register-window
handles for inspection and NMI polling.
*/

use std::cell::RefCell;
use std::rc::Rc;

use log::info;

use crate::bus::{Bus, BusConfig, MountError, Ram, WORK_RAM_SIZE, shared};
use crate::cpu::{Cpu, CpuSnapshot, RESET_VECTOR, disassemble};
use crate::ppu_regs::PpuRegisters;
use crate::rom::{LoadError, PRG_BANK_SIZE, ProgramImage};

/// Base addresses where the work RAM is mirrored.
pub const RAM_MIRRORS: [u16; 4] = [0x0000, 0x0800, 0x1000, 0x1800];
pub const PPU_REGISTERS_BASE: u16 = 0x2000;
pub const PRG_BASE: u16 = 0x8000;
pub const PRG_MIRROR_BASE: u16 = 0xC000;

#[derive(Debug)]
pub struct System {
    cpu: Cpu,
    bus: Bus,
    ram: Rc<RefCell<Ram>>,
    ppu: Rc<RefCell<PpuRegisters>>,
}

impl System {
    pub fn new() -> Result<Self, MountError> {
        Self::with_config(BusConfig::default())
    }

    pub fn with_config(config: BusConfig) -> Result<Self, MountError> {
        let mut bus = Bus::with_config(config);

        let ram = shared(Ram::new(WORK_RAM_SIZE));
        for base in RAM_MIRRORS {
            bus.mount(ram.clone(), base)?;
        }

        let ppu = shared(PpuRegisters::new());
        bus.mount(ppu.clone(), PPU_REGISTERS_BASE)?;

        Ok(Self {
            cpu: Cpu::new(),
            bus,
            ram,
            ppu,
        })
    }

    // -----------------------------
    // Accessors
    // -----------------------------

    #[inline]
    pub fn cpu(&self) -> &Cpu {
        &self.cpu
    }

    #[inline]
    pub fn cpu_mut(&mut self) -> &mut Cpu {
        &mut self.cpu
    }

    #[inline]
    pub fn bus(&self) -> &Bus {
        &self.bus
    }

    #[inline]
    pub fn bus_mut(&mut self) -> &mut Bus {
        &mut self.bus
    }

    #[inline]
    pub fn ram(&self) -> &Rc<RefCell<Ram>> {
        &self.ram
    }

    #[inline]
    pub fn ppu(&self) -> &Rc<RefCell<PpuRegisters>> {
        &self.ppu
    }

    #[inline]
    pub fn snapshot(&self) -> CpuSnapshot {
        self.cpu.snapshot()
    }

    // -----------------------------
    // Program loading
    // -----------------------------

    /// Mount the program image at $8000. A single 16 KiB bank is copied into
    /// two devices at $8000 and $C000.
    pub fn load_program(&mut self, image: &ProgramImage) -> Result<(), LoadError> {
        let prg = image.prg();
        if image.is_mirrored() {
            for base in [PRG_BASE, PRG_MIRROR_BASE] {
                self.bus.mount(shared(Ram::from_bytes(prg)), base)?;
            }
        } else if prg.len() == 2 * PRG_BANK_SIZE {
            self.bus.mount(shared(Ram::from_bytes(prg)), PRG_BASE)?;
        } else {
            return Err(LoadError::UnsupportedPrgSize(prg.len()));
        }
        info!(
            "loaded {} KiB program at ${:04X}",
            prg.len() / 1024,
            PRG_BASE
        );
        Ok(())
    }

    /// Parse raw or iNES bytes and mount them.
    pub fn load_program_bytes(&mut self, bytes: &[u8]) -> Result<(), LoadError> {
        let image = ProgramImage::parse(bytes)?;
        self.load_program(&image)
    }

    /// Overwrite the reset vector, e.g. to start a test ROM at a fixed entry.
    /// Returns false when nothing is mounted at $FFFC-$FFFD yet.
    pub fn set_reset_vector(&mut self, target: u16) -> bool {
        let [lo, hi] = target.to_le_bytes();
        let lo_ok = self.bus.write(RESET_VECTOR, lo);
        let hi_ok = self.bus.write(RESET_VECTOR.wrapping_add(1), hi);
        lo_ok && hi_ok
    }

    // -----------------------------
    // Clocking
    // -----------------------------

    pub fn reset(&mut self) {
        self.cpu.reset(&mut self.bus);
        info!("reset: PC=${:04X}", self.cpu.pc());
    }

    /// One CPU clock cycle.
    pub fn tick(&mut self) {
        if self.cpu.is_instruction_finished() && self.ppu.borrow_mut().take_nmi() {
            self.cpu.nmi(&mut self.bus);
        }
        self.cpu.tick(&mut self.bus);
    }

    /// Tick until the current (or next) instruction completes. Returns ticks.
    pub fn step_instruction(&mut self) -> u32 {
        let mut ticks = 0;
        loop {
            self.tick();
            ticks += 1;
            if self.cpu.is_instruction_finished() {
                return ticks;
            }
        }
    }

    /// Reset, then tick exactly `n` times.
    pub fn run_cycles(&mut self, n: u64) {
        self.reset();
        for _ in 0..n {
            self.tick();
        }
    }

    /// Reset, finish the reset sequence, then run until `n` instructions
    /// have completed. Returns the ticks spent on those instructions.
    pub fn run_instructions(&mut self, n: usize) -> u64 {
        self.reset();
        while !self.cpu.is_instruction_finished() {
            self.tick();
        }
        (0..n).map(|_| self.step_instruction() as u64).sum()
    }

    // -----------------------------
    // Inspection
    // -----------------------------

    /// Hex dump of `start..=end`, 16 bytes per line, each line prefixed
    /// `0xADDR: `. Uses inspection reads, so device state is untouched.
    pub fn dump_memory(&self, start: u16, end: u16) -> String {
        let mut out = String::new();
        for addr in start as u32..=end as u32 {
            if addr == start as u32 || addr % 16 == 0 {
                if !out.is_empty() {
                    out.push('\n');
                }
                out.push_str(&format!("0x{addr:04X}:"));
            }
            out.push_str(&format!(" {:02X}", self.bus.peek(addr as u16)));
        }
        out
    }

    /// Disassemble `start..=stop` through the bus' inspection path.
    pub fn disassemble(&self, start: u16, stop: u16) -> std::collections::BTreeMap<u16, String> {
        disassemble(&self.bus, start, stop)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bus::BusDevice;
    use crate::cpu::NMI_VECTOR;
    use crate::ppu_regs::{PPUCTRL, PPUSTATUS};
    use crate::test_utils::{build_nrom_with_prg, build_prg};

    fn setup(program: &[u8]) -> System {
        let mut sys = System::new().expect("wiring");
        sys.load_program_bytes(&build_nrom_with_prg(program, 0x8000))
            .expect("load");
        sys
    }

    #[test]
    fn work_ram_is_mirrored() {
        let mut sys = System::new().unwrap();
        sys.bus_mut().write(0x0001, 0xAA);
        assert_eq!(sys.bus().read(0x0801), 0xAA);
        assert_eq!(sys.bus().read(0x1801), 0xAA);
        sys.bus_mut().write(0x1FFF, 0x42);
        assert_eq!(sys.ram().borrow().as_slice()[0x07FF], 0x42);
    }

    #[test]
    fn ppu_window_and_open_bus() {
        let sys = System::new().unwrap();
        sys.ppu().borrow_mut().set_vblank(true);
        assert_eq!(sys.bus().peek(0x2002) & 0x80, 0x80);
        assert!(sys.ppu().borrow().vblank());
        assert_eq!(sys.bus().read(0x2002) & 0x80, 0x80);
        assert!(!sys.ppu().borrow().vblank());
        // Nothing at $4000 or $6000
        assert_eq!(sys.bus().read(0x4000), 0xFF);
        assert_eq!(sys.bus().read(0x6000), 0xFF);
    }

    #[test]
    fn sixteen_k_image_is_mirrored() {
        let sys = setup(&[0xA9, 0x01]);
        assert_eq!(sys.bus().read(0x8000), 0xA9);
        assert_eq!(sys.bus().read(0xC000), 0xA9);
        assert_eq!(sys.bus().read_word(0xFFFC), 0x8000);
    }

    #[test]
    fn thirty_two_k_image_fills_upper_half() {
        let mut sys = System::new().unwrap();
        let mut prg = build_prg(&[0xEA], 2 * PRG_BANK_SIZE, 0x8000);
        prg[0x4000] = 0x60;
        sys.load_program_bytes(&prg).unwrap();
        assert_eq!(sys.bus().read(0x8000), 0xEA);
        assert_eq!(sys.bus().read(0xC000), 0x60);
    }

    #[test]
    fn second_load_overlaps() {
        let mut sys = setup(&[0xEA]);
        let err = sys
            .load_program_bytes(&build_prg(&[], PRG_BANK_SIZE, 0x8000))
            .unwrap_err();
        assert!(matches!(err, LoadError::Mount(MountError::Overlap { .. })));
    }

    #[test]
    fn run_cycles_ticks_exactly_n() {
        let mut sys = setup(&[0xEA; 8]);
        sys.run_cycles(11);
        // 7 reset + NOP + NOP
        assert_eq!(sys.cpu().cycles_passed(), 11);
        assert_eq!(sys.cpu().pc(), 0x8002);
        assert!(sys.cpu().is_instruction_finished());
    }

    #[test]
    fn run_instructions_counts_completed() {
        // LDA #$05; TAX; INX; STX $10
        let mut sys = setup(&[0xA9, 0x05, 0xAA, 0xE8, 0x86, 0x10]);
        let ticks = sys.run_instructions(4);
        assert_eq!(ticks, 2 + 2 + 2 + 3);
        assert_eq!(sys.cpu().state().x, 0x06);
        assert_eq!(sys.bus().read(0x0010), 0x06);
        assert_eq!(sys.snapshot().cycles, 7 + ticks);
    }

    #[test]
    fn vblank_nmi_is_forwarded_between_instructions() {
        let mut sys = setup(&[0xEA; 4]);
        sys.bus_mut().write(NMI_VECTOR, 0x00);
        sys.bus_mut().write(NMI_VECTOR + 1, 0x90);
        sys.run_instructions(1);

        sys.ppu().borrow_mut().write(PPUCTRL, 0x80);
        sys.ppu().borrow_mut().set_vblank(true);
        assert!(sys.ppu().borrow().nmi_pending());

        let ticks = sys.step_instruction();
        assert_eq!(ticks, 8);
        assert_eq!(sys.cpu().pc(), 0x9000);
        assert!(!sys.ppu().borrow().nmi_pending());
        // Return address $8001 on the stack
        assert_eq!(sys.bus().read(0x01FD), 0x80);
        assert_eq!(sys.bus().read(0x01FC), 0x01);
        // Still in vblank: the status window keeps its flag until read
        assert_eq!(sys.ppu().borrow_mut().read(PPUSTATUS, true) & 0x80, 0x80);
    }

    #[test]
    fn set_reset_vector_moves_entry() {
        let mut sys = setup(&[0xEA]);
        assert!(sys.set_reset_vector(0xC000));
        sys.reset();
        assert_eq!(sys.cpu().pc(), 0xC000);
    }

    #[test]
    fn set_reset_vector_without_program_reports_failure() {
        let mut sys = System::new().unwrap();
        assert!(!sys.set_reset_vector(0xC000));
        assert_eq!(sys.bus().peek(RESET_VECTOR), crate::bus::OPEN_BUS);
    }

    #[test]
    fn dump_memory_format() {
        let mut sys = System::new().unwrap();
        for i in 0..0x12u16 {
            sys.bus_mut().write(i, i as u8);
        }
        let dump = sys.dump_memory(0x0000, 0x0011);
        let lines: Vec<&str> = dump.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[0],
            "0x0000: 00 01 02 03 04 05 06 07 08 09 0A 0B 0C 0D 0E 0F"
        );
        assert_eq!(lines[1], "0x0010: 10 11");
    }

    #[test]
    fn dump_memory_does_not_trigger_side_effects() {
        let sys = System::new().unwrap();
        sys.ppu().borrow_mut().set_vblank(true);
        let dump = sys.dump_memory(0x2000, 0x2007);
        assert!(dump.starts_with("0x2000: 00 00 80"));
        assert!(sys.ppu().borrow().vblank());
    }

    #[test]
    fn disassembly_through_system() {
        let sys = setup(&[0xA9, 0x01]);
        let lines = sys.disassemble(0x8000, 0x8001);
        assert_eq!(lines[&0x8000], "$8000: LDA #$01 {IMM}");
    }
}
