use crate::FifoWord;

/// A FIFO slot that can be read: one access returning one [`FifoWord`].
///
/// The slot's transfer width is `Self::Word::WIDTH`, independent of how much
/// memory the slot occupies.
pub trait ReadSlot {
    type Word: FifoWord;

    fn load(&self) -> Self::Word;
}

/// A FIFO slot that can be written: one access storing one [`FifoWord`].
pub trait WriteSlot {
    type Word: FifoWord;

    fn store(&mut self, word: Self::Word);
}

macro_rules! impl_plain_slot {
    ($($ty:ty),* $(,)?) => {
        $(
            impl ReadSlot for $ty {
                type Word = $ty;

                #[inline]
                fn load(&self) -> $ty {
                    *self
                }
            }

            impl WriteSlot for $ty {
                type Word = $ty;

                #[inline]
                fn store(&mut self, word: $ty) {
                    *self = word;
                }
            }
        )*
    };
}

impl_plain_slot!(u8, u16, u32);
