#![doc = r#"
Picture-unit register window ($2000-$2007 on the CPU bus).

Purpose
- CPU-visible side of the picture unit, enough for the wiring layer to route
  register traffic and observe the vblank NMI line. Nothing is rendered.

Notes
- Offsets 0..=7 map to PPUCTRL, PPUMASK, PPUSTATUS, OAMADDR, OAMDATA,
  PPUSCROLL, PPUADDR, PPUDATA.
- Writes latch the value. PPUSCROLL/PPUADDR share the two-write toggle.
- Reading PPUSTATUS returns the status byte, then clears vblank (bit 7) and
  the write toggle. A read-only (inspection) read leaves both untouched.
- `set_vblank(true)` with PPUCTRL bit 7 set latches an NMI request; enabling
  bit 7 while vblank is already set latches one too. `take_nmi` consumes it.
"#]

use crate::bus::BusDevice;

/// Number of CPU-visible registers.
pub const PPU_REGISTER_COUNT: usize = 8;

pub const PPUCTRL: u16 = 0;
pub const PPUMASK: u16 = 1;
pub const PPUSTATUS: u16 = 2;
pub const OAMADDR: u16 = 3;
pub const OAMDATA: u16 = 4;
pub const PPUSCROLL: u16 = 5;
pub const PPUADDR: u16 = 6;
pub const PPUDATA: u16 = 7;

const CTRL_NMI_ENABLE: u8 = 0x80;
const CTRL_INCREMENT_32: u8 = 0x04;
const STATUS_VBLANK: u8 = 0x80;

#[derive(Debug, Clone, Default)]
pub struct PpuRegisters {
    ctrl: u8,
    mask: u8,
    status: u8,
    oam_addr: u8,
    oam_data: u8,
    scroll_x: u8,
    scroll_y: u8,
    vram_addr: u16,
    data_latch: u8,
    write_toggle: bool,
    nmi_pending: bool,
}

impl PpuRegisters {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn vblank(&self) -> bool {
        self.status & STATUS_VBLANK != 0
    }

    #[inline]
    pub fn vram_addr(&self) -> u16 {
        self.vram_addr
    }

    #[inline]
    pub fn write_toggle(&self) -> bool {
        self.write_toggle
    }

    #[inline]
    fn nmi_enabled(&self) -> bool {
        self.ctrl & CTRL_NMI_ENABLE != 0
    }

    /// Raise or drop vblank. Entering vblank with NMI enabled latches an NMI.
    pub fn set_vblank(&mut self, on: bool) {
        if on {
            if !self.vblank() && self.nmi_enabled() {
                self.nmi_pending = true;
            }
            self.status |= STATUS_VBLANK;
        } else {
            self.status &= !STATUS_VBLANK;
        }
    }

    /// Consume a latched NMI request.
    pub fn take_nmi(&mut self) -> bool {
        std::mem::take(&mut self.nmi_pending)
    }

    #[inline]
    pub fn nmi_pending(&self) -> bool {
        self.nmi_pending
    }

    fn advance_vram_addr(&mut self) {
        let inc = if self.ctrl & CTRL_INCREMENT_32 != 0 {
            32
        } else {
            1
        };
        self.vram_addr = self.vram_addr.wrapping_add(inc) & 0x3FFF;
    }
}

impl BusDevice for PpuRegisters {
    fn size(&self) -> usize {
        PPU_REGISTER_COUNT
    }

    fn read(&mut self, offset: u16, read_only: bool) -> u8 {
        match offset & 0x07 {
            PPUCTRL => self.ctrl,
            PPUMASK => self.mask,
            PPUSTATUS => {
                let v = self.status;
                if !read_only {
                    self.status &= !STATUS_VBLANK;
                    self.write_toggle = false;
                }
                v
            }
            OAMADDR => self.oam_addr,
            OAMDATA => self.oam_data,
            PPUSCROLL => 0,
            PPUADDR => (self.vram_addr >> 8) as u8,
            _ => {
                let v = self.data_latch;
                if !read_only {
                    self.advance_vram_addr();
                }
                v
            }
        }
    }

    fn write(&mut self, offset: u16, value: u8) {
        match offset & 0x07 {
            PPUCTRL => {
                let was_enabled = self.nmi_enabled();
                self.ctrl = value;
                if !was_enabled && self.nmi_enabled() && self.vblank() {
                    self.nmi_pending = true;
                }
            }
            PPUMASK => self.mask = value,
            PPUSTATUS => { /* read-only */ }
            OAMADDR => self.oam_addr = value,
            OAMDATA => {
                self.oam_data = value;
                self.oam_addr = self.oam_addr.wrapping_add(1);
            }
            PPUSCROLL => {
                if !self.write_toggle {
                    self.scroll_x = value;
                } else {
                    self.scroll_y = value;
                }
                self.write_toggle = !self.write_toggle;
            }
            PPUADDR => {
                if !self.write_toggle {
                    self.vram_addr = (self.vram_addr & 0x00FF) | (((value as u16) & 0x3F) << 8);
                } else {
                    self.vram_addr = (self.vram_addr & 0x3F00) | value as u16;
                }
                self.write_toggle = !self.write_toggle;
            }
            _ => {
                self.data_latch = value;
                self.advance_vram_addr();
            }
        }
    }
}
