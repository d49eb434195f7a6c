/*!
interfaces: the device contract shared by everything mounted on a `Bus`.

A device only knows its own size and answers reads/writes at device-local
offsets (`0..size`). The router subtracts the mount's start address before
calling in, so the same device can be mounted at several base addresses
(mirroring) without knowing about it.

Handles are `Rc<RefCell<..>>`: the bus holds one clone per mount and the
wiring layer may keep another when it needs to poke the device directly
(e.g. to raise the picture unit's vblank line). Everything is single-threaded.
*/

use std::cell::RefCell;
use std::rc::Rc;

/// Anything that can sit behind a `Bus` mount.
pub trait BusDevice {
    /// Number of consecutive addresses the device occupies.
    fn size(&self) -> usize;

    /// Read the byte at `offset`.
    ///
    /// `read_only` is set for inspection reads (disassembly, memory dumps).
    /// Devices whose reads have side effects (status registers that clear
    /// on read, buffered data ports) must suppress them in that case.
    fn read(&mut self, offset: u16, read_only: bool) -> u8;

    /// Write `value` at `offset`.
    fn write(&mut self, offset: u16, value: u8);
}

/// Shared handle to a mounted device. Mirrors hold clones of the same handle.
pub type SharedDevice = Rc<RefCell<dyn BusDevice>>;

/// Wrap a device into a shared handle suitable for `Bus::mount`.
///
/// The concrete type is kept so the caller can still reach device-specific
/// methods; it coerces to `SharedDevice` at the mount call.
#[inline]
pub fn shared<D: BusDevice + 'static>(device: D) -> Rc<RefCell<D>> {
    Rc::new(RefCell::new(device))
}
