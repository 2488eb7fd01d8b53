use core::ops::Deref;
use core::ops::DerefMut;

use crate::FifoWord;
use crate::ReadSlot;
use crate::WriteSlot;

/// A FIFO view that can be drained by [`crate::unpack`].
pub trait FifoSource {
    type Word: FifoWord;

    /// Number of slots available for reading.
    fn depth(&self) -> usize;

    /// Reads slot `index`. Callers keep `index < self.depth()`.
    fn read_slot(&self, index: usize) -> Self::Word;
}

/// A FIFO view that can be filled by [`crate::pack`].
pub trait FifoSink {
    type Word: FifoWord;

    /// Number of slots available for writing.
    fn capacity(&self) -> usize;

    /// Writes slot `index`. Callers keep `index < self.capacity()`.
    fn write_slot(&mut self, index: usize, word: Self::Word);
}

impl<S: ReadSlot> FifoSource for [S] {
    type Word = S::Word;

    #[inline]
    fn depth(&self) -> usize {
        self.len()
    }

    #[inline]
    fn read_slot(&self, index: usize) -> S::Word {
        self[index].load()
    }
}

impl<S: WriteSlot> FifoSink for [S] {
    type Word = S::Word;

    #[inline]
    fn capacity(&self) -> usize {
        self.len()
    }

    #[inline]
    fn write_slot(&mut self, index: usize, word: S::Word) {
        self[index].store(word);
    }
}

impl<S: ReadSlot, const N: usize> FifoSource for [S; N] {
    type Word = S::Word;

    #[inline]
    fn depth(&self) -> usize {
        N
    }

    #[inline]
    fn read_slot(&self, index: usize) -> S::Word {
        self[index].load()
    }
}

impl<S: WriteSlot, const N: usize> FifoSink for [S; N] {
    type Word = S::Word;

    #[inline]
    fn capacity(&self) -> usize {
        N
    }

    #[inline]
    fn write_slot(&mut self, index: usize, word: S::Word) {
        self[index].store(word);
    }
}

/// A single data register viewed as a FIFO of `depth` accesses.
///
/// Most peripherals expose their FIFO through one address: every read pops
/// an entry and every write pushes one. `Port` maps each index of the view
/// onto that same register, so a transfer of `n` slots performs exactly `n`
/// accesses, in order.
///
/// `P` is a handle to the register: `&R` for draining, `&mut R` for
/// filling.
#[derive(Debug)]
pub struct Port<P> {
    reg: P,
    depth: usize,
}

impl<P> Port<P> {
    #[must_use]
    pub const fn new(reg: P, depth: usize) -> Self {
        Self { reg, depth }
    }

    #[must_use]
    pub const fn depth(&self) -> usize {
        self.depth
    }

    #[must_use]
    pub fn into_inner(self) -> P {
        self.reg
    }
}

impl<P> FifoSource for Port<P>
where
    P: Deref,
    P::Target: ReadSlot,
{
    type Word = <P::Target as ReadSlot>::Word;

    #[inline]
    fn depth(&self) -> usize {
        self.depth
    }

    #[inline]
    fn read_slot(&self, _index: usize) -> Self::Word {
        self.reg.load()
    }
}

impl<P> FifoSink for Port<P>
where
    P: DerefMut,
    P::Target: WriteSlot,
{
    type Word = <P::Target as WriteSlot>::Word;

    #[inline]
    fn capacity(&self) -> usize {
        self.depth
    }

    #[inline]
    fn write_slot(&mut self, _index: usize, word: Self::Word) {
        self.reg.store(word);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrays_and_slices_report_their_length() {
        let mut words = [0u16; 5];
        assert_eq!(FifoSource::depth(&words), 5);
        assert_eq!(FifoSink::capacity(&words[..3]), 3);

        FifoSink::write_slot(&mut words, 2, 0xBEEF);
        assert_eq!(FifoSource::read_slot(&words[..], 2), 0xBEEF);
    }

    #[test]
    fn port_maps_every_index_to_one_register() {
        let mut reg = 0u32;
        let mut port = Port::new(&mut reg, 4);
        assert_eq!(port.capacity(), 4);

        port.write_slot(0, 1);
        port.write_slot(3, 7);
        assert_eq!(reg, 7);

        let port = Port::new(&reg, 2);
        assert_eq!(port.read_slot(1), 7);
        assert_eq!(Port::depth(&port), 2);
    }
}
