/*!
RAM module: a plain byte-array device.

Used for the 2 KiB work RAM (mounted four times to mirror $0000-$1FFF), for
program images copied into $8000-$FFFF, and as a flat 64 KiB backing store
in tests. Offsets wrap modulo the device size, so an oversized offset never
panics even if a caller bypasses the router.
*/

use crate::bus::OPEN_BUS;
use crate::bus::interfaces::BusDevice;

/// Size of the console's internal work RAM (in bytes).
pub const WORK_RAM_SIZE: usize = 0x0800;

/// Byte-array device with modulo addressing.
#[derive(Debug, Clone)]
pub struct Ram {
    data: Vec<u8>,
}

impl Ram {
    /// Create a zero-filled RAM of `size` bytes (1..=0x10000).
    #[inline]
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![0; size],
        }
    }

    /// Create a RAM pre-filled with `bytes`; its size is `bytes.len()`.
    #[inline]
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self {
            data: bytes.to_vec(),
        }
    }

    /// Clear contents to 0.
    #[inline]
    pub fn reset(&mut self) {
        self.data.fill(0);
    }

    /// Expose the backing store (read-only). Useful for diagnostics or hashing.
    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    #[inline]
    fn index(&self, offset: u16) -> Option<usize> {
        (offset as usize).checked_rem(self.data.len())
    }
}

impl BusDevice for Ram {
    #[inline]
    fn size(&self) -> usize {
        self.data.len()
    }

    #[inline]
    fn read(&mut self, offset: u16, _read_only: bool) -> u8 {
        self.index(offset).map_or(OPEN_BUS, |idx| self.data[idx])
    }

    #[inline]
    fn write(&mut self, offset: u16, value: u8) {
        if let Some(idx) = self.index(offset) {
            self.data[idx] = value;
        }
    }
}
