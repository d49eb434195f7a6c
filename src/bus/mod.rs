#![doc = r#"
Bus module: the address router every CPU memory access goes through.

Overview
- `Bus` owns a list of mounts. Each mount is a shared device handle plus the
  start address it was attached at; its size comes from the device.
- `mount` validates the new range against the 16-bit address space and
  against every existing mount, so at most one mount claims any address.
- `read` / `write` resolve an address to (device, local offset) and delegate.
  Unmapped reads float to `0xFF`; unmapped writes are dropped and report
  `false`. Neither is an error.
- Mirroring is explicit: mount the same handle at several start addresses.

Modules and responsibilities
- interfaces: `BusDevice` contract and the `SharedDevice` handle type.
- ram: plain byte-array device.
- error: `MountError` (wiring-time failures).
- tests: router-level scenarios (overlap, overflow, mirroring, unmapped).
"#]

pub mod error;
pub mod interfaces;
pub mod ram;


pub use error::MountError;
pub use interfaces::{BusDevice, SharedDevice, shared};
pub use ram::{Ram, WORK_RAM_SIZE};

use log::{debug, warn};

/// Highest representable address on this bus.
pub const MAX_ADDRESS: usize = u16::MAX as usize;

/// Value returned when nothing answers a read.
pub const OPEN_BUS: u8 = 0xFF;

/// Bus-wide settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BusConfig {
    /// Emit a `warn!` diagnostic for every unmapped read or write.
    pub log_unmapped: bool,
}

/// One attached device and the address range it answers.
#[derive(Clone)]
pub struct Mount {
    device: SharedDevice,
    start: u16,
    size: usize,
}

impl Mount {
    #[inline]
    pub fn start(&self) -> u16 {
        self.start
    }

    /// Last address claimed by this mount (inclusive).
    #[inline]
    pub fn end(&self) -> u16 {
        (self.start as usize + self.size - 1) as u16
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn device(&self) -> &SharedDevice {
        &self.device
    }

    #[inline]
    pub fn contains(&self, addr: u16) -> bool {
        addr >= self.start && addr <= self.end()
    }
}

impl std::fmt::Debug for Mount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Mount(${:04X}-${:04X})", self.start, self.end())
    }
}

/// Address router over a 16-bit address space.
#[derive(Debug, Default)]
pub struct Bus {
    mounts: Vec<Mount>,
    config: BusConfig,
}

impl Bus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: BusConfig) -> Self {
        Self {
            mounts: Vec::new(),
            config,
        }
    }

    #[inline]
    pub fn config(&self) -> BusConfig {
        self.config
    }

    #[inline]
    pub fn set_config(&mut self, config: BusConfig) {
        self.config = config;
    }

    /// Mounts in the order they were attached.
    #[inline]
    pub fn mounts(&self) -> &[Mount] {
        &self.mounts
    }

    // -----------------------------
    // Wiring
    // -----------------------------

    /// Attach `device` so that its offset 0 appears at `start`.
    ///
    /// Fails if the device would run past `$FFFF` or if its range shares any
    /// address with an existing mount. Mounting the same handle at a
    /// non-overlapping address is how mirrors are built.
    pub fn mount(&mut self, device: SharedDevice, start: u16) -> Result<(), MountError> {
        let size = device.borrow().size();
        if size == 0 {
            return Err(MountError::Empty { start });
        }
        let last = start as usize + size - 1;
        if last > MAX_ADDRESS {
            return Err(MountError::Overflow { start, size });
        }
        let end = last as u16;

        if let Some(existing) = self
            .mounts
            .iter()
            .find(|m| start <= m.end() && m.start() <= end)
        {
            return Err(MountError::Overlap {
                start,
                end,
                existing_start: existing.start(),
                existing_end: existing.end(),
            });
        }

        debug!("mounted device at ${:04X}-${:04X}", start, end);
        self.mounts.push(Mount {
            device,
            start,
            size,
        });
        Ok(())
    }

    // -----------------------------
    // Resolution
    // -----------------------------

    /// Find the device claiming `addr` and the device-local offset.
    pub fn resolve(&self, addr: u16) -> Option<(&SharedDevice, u16)> {
        self.mounts
            .iter()
            .find(|m| m.contains(addr))
            .map(|m| (&m.device, addr - m.start))
    }

    // -----------------------------
    // CPU-visible memory interface
    // -----------------------------

    /// Read with side effects, logging unmapped accesses per `BusConfig`.
    #[inline]
    pub fn read(&self, addr: u16) -> u8 {
        self.read_logged(addr, self.config.log_unmapped, false)
    }

    /// Inspection read: devices suppress read side effects.
    #[inline]
    pub fn peek(&self, addr: u16) -> u8 {
        self.read_logged(addr, self.config.log_unmapped, true)
    }

    /// Full read contract: `log` requests a diagnostic on a miss, `read_only`
    /// is passed through to the device.
    pub fn read_logged(&self, addr: u16, log: bool, read_only: bool) -> u8 {
        match self.resolve(addr) {
            Some((device, offset)) => device.borrow_mut().read(offset, read_only),
            None => {
                if log {
                    warn!(
                        "no device at ${:04X}; read returns ${:02X}",
                        addr, OPEN_BUS
                    );
                }
                OPEN_BUS
            }
        }
    }

    /// Little-endian word at `addr`, `addr + 1` (wrapping at $FFFF).
    #[inline]
    pub fn read_word(&self, addr: u16) -> u16 {
        let lo = self.read(addr) as u16;
        let hi = self.read(addr.wrapping_add(1)) as u16;
        (hi << 8) | lo
    }

    /// Write through to the mounted device. Returns `false` if unmapped.
    #[inline]
    pub fn write(&mut self, addr: u16, value: u8) -> bool {
        self.write_logged(addr, value, self.config.log_unmapped)
    }

    pub fn write_logged(&mut self, addr: u16, value: u8, log: bool) -> bool {
        match self.resolve(addr) {
            Some((device, offset)) => {
                device.borrow_mut().write(offset, value);
                true
            }
            None => {
                if log {
                    warn!(
                        "no device at ${:04X}; write of ${:02X} dropped",
                        addr, value
                    );
                }
                false
            }
        }
    }

    /// Copy `bytes` into the address space starting at `start` (wrapping).
    /// Returns the number of bytes that landed on a device.
    pub fn load(&mut self, start: u16, bytes: &[u8]) -> usize {
        let mut addr = start;
        let mut landed = 0;
        for &b in bytes {
            if self.write(addr, b) {
                landed += 1;
            }
            addr = addr.wrapping_add(1);
        }
        landed
    }
}
