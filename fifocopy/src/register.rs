//! MMIO typestate wrappers for FIFO data registers.
//!
//! The wrapper types encode readable / writable capability at the type level
//! and perform every access with a volatile operation, so a transfer touches
//! the device exactly once per slot, in order.
//!
//! - [`ReadOnly<W>`]: a [`ReadSlot`] only (e.g. a receive data register).
//! - [`WriteOnly<W>`]: a [`WriteSlot`] only (e.g. a transmit data register).
//! - [`ReadWrite<W>`]: both.
//!
//! # Safety
//! These wrappers do not validate that an address actually maps to a device
//! register. Placing them over the right, valid MMIO range and following the
//! device's access rules is up to the caller of [`window`] / [`window_mut`].

use core::ptr::read_volatile;
use core::ptr::write_volatile;

use crate::FifoWord;
use crate::ReadSlot;
use crate::WriteSlot;

/// Readable register (no write API exposed).
///
/// Reads may have side effects on the device, such as popping a FIFO entry.
#[derive(Clone, Debug)]
#[repr(transparent)]
pub struct ReadOnly<W>(W);

/// Write-only register (no read API exposed).
#[derive(Debug)]
#[repr(transparent)]
pub struct WriteOnly<W>(W);

/// Read/write register.
#[derive(Debug)]
#[repr(transparent)]
pub struct ReadWrite<W>(W);

macro_rules! impl_new {
    ($($reg:ident),*) => {
        $(
            impl<W: FifoWord> $reg<W> {
                /// Places a register with initial value `word` in ordinary
                /// memory, e.g. to simulate a device.
                pub const fn new(word: W) -> Self {
                    Self(word)
                }
            }
        )*
    };
}

impl_new!(ReadOnly, WriteOnly, ReadWrite);

impl<W: FifoWord> ReadSlot for ReadOnly<W> {
    type Word = W;

    #[inline]
    fn load(&self) -> W {
        unsafe { read_volatile(&raw const self.0) }
    }
}

impl<W: FifoWord> ReadSlot for ReadWrite<W> {
    type Word = W;

    #[inline]
    fn load(&self) -> W {
        unsafe { read_volatile(&raw const self.0) }
    }
}

impl<W: FifoWord> WriteSlot for WriteOnly<W> {
    type Word = W;

    #[inline]
    fn store(&mut self, word: W) {
        unsafe { write_volatile(&raw mut self.0, word) }
    }
}

impl<W: FifoWord> WriteSlot for ReadWrite<W> {
    type Word = W;

    #[inline]
    fn store(&mut self, word: W) {
        unsafe { write_volatile(&raw mut self.0, word) }
    }
}

/// Views `slots` consecutive registers starting at `base` as a slice.
///
/// # Safety
/// `base` must be the address of `slots` valid, suitably aligned registers of
/// type `R` that stay mapped for `'a`, and nothing may write them through
/// another path while the slice is alive.
pub unsafe fn window<'a, R>(base: usize, slots: usize) -> &'a [R] {
    unsafe { core::slice::from_raw_parts(base as *const R, slots) }
}

/// Mutable counterpart of [`window`].
///
/// # Safety
/// Same as [`window`], and no other reference to the range may exist for
/// `'a`.
pub unsafe fn window_mut<'a, R>(base: usize, slots: usize) -> &'a mut [R] {
    unsafe { core::slice::from_raw_parts_mut(base as *mut R, slots) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pack;
    use crate::unpack;

    #[test]
    fn read_write_round_trip() {
        let mut reg = ReadWrite::new(0u16);
        reg.store(0xCAFE);
        assert_eq!(reg.load(), 0xCAFE);
    }

    #[test]
    fn window_over_plain_memory() {
        let mut backing = [0u32; 4];
        let base = backing.as_mut_ptr() as usize;

        let tx: &mut [WriteOnly<u32>] = unsafe { window_mut(base, 4) };
        pack(&[0x10, 0x11, 0x12, 0x13, 0x14, 0x15, 0x16, 0x17], tx, 8);

        let rx: &[ReadOnly<u32>] = unsafe { window(base, 4) };
        let mut out = [0u8; 8];
        unpack(rx, &mut out, 8);
        assert_eq!(out, [0x10, 0x11, 0x12, 0x13, 0x14, 0x15, 0x16, 0x17]);
        assert_eq!(backing, [0x1312_1110, 0x1716_1514, 0, 0]);
    }
}
