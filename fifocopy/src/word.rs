/// Value carried by one FIFO access.
///
/// `WIDTH` is the number of bytes one access transfers. It defaults to the
/// size of the type; only 1, 2 and 4 are accepted by [`crate::pack`] and
/// [`crate::unpack`].
///
/// Implemented for `u8`, `u16` and `u32`. Newtypes over those can use
/// `#[derive(FifoWord)]`.
pub trait FifoWord: Copy {
    const WIDTH: usize = core::mem::size_of::<Self>();

    /// Widens the word into the low `WIDTH` bytes of a `u32`.
    fn to_bits(self) -> u32;

    /// Builds a word from the low `WIDTH` bytes of `bits`.
    fn from_bits(bits: u32) -> Self;
}

macro_rules! impl_fifo_word {
    ($($ty:ty),* $(,)?) => {
        $(
            impl FifoWord for $ty {
                #[inline]
                fn to_bits(self) -> u32 {
                    u32::from(self)
                }

                #[inline]
                #[allow(clippy::cast_possible_truncation)]
                fn from_bits(bits: u32) -> Self {
                    bits as $ty
                }
            }
        )*
    };
}

impl_fifo_word!(u8, u16, u32);

/// The three supported slot layouts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Width {
    Byte,
    Half,
    Word,
}

impl Width {
    /// Resolves the layout of `W`. Meant to be evaluated in a `const` block
    /// so an unsupported width fails the build.
    pub(crate) const fn of<W: FifoWord>() -> Self {
        match W::WIDTH {
            1 => Width::Byte,
            2 => Width::Half,
            4 => Width::Word,
            _ => panic!("FIFO width beyond 32-bit / 4 bytes not implemented"),
        }
    }

    #[inline]
    pub(crate) const fn bytes(self) -> usize {
        match self {
            Width::Byte => 1,
            Width::Half => 2,
            Width::Word => 4,
        }
    }
}
