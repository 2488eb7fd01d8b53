#![cfg_attr(not(test), no_std)]
//! Byte-order-aware transfers between byte buffers and peripheral FIFOs.
//!
//! A peripheral FIFO (UART/SPI data register, USB packet memory, ...) is
//! accessed in fixed-width slots of 1, 2 or 4 bytes. This crate moves bytes
//! between such a FIFO view and an ordinary `[u8]` buffer:
//!
//! - [`unpack`]: FIFO -> bytes. Each slot is spread over `WIDTH` bytes,
//!   least-significant byte first.
//! - [`pack`]: bytes -> FIFO. Each slot is assembled from `WIDTH` bytes,
//!   first byte in the least-significant position.
//!
//! Both stop silently at whichever comes first: the requested byte count,
//! the end of the source, or the end of the destination. `unpack` writes the
//! bytes of a trailing slot that still fit; `pack` only ever writes whole
//! slots and drops an incomplete trailing group of bytes.
//!
//! # Views
//! A FIFO view is anything implementing [`FifoSource`] or [`FifoSink`]:
//! - slices and arrays of slots, e.g. of `u32` or of `ReadWrite<u16>`,
//! - a [`Port`], i.e. a single data register accessed repeatedly.
//!
//! A slot is a [`ReadSlot`] / [`WriteSlot`]. Its width comes from its
//! [`FifoWord`], not from its size in memory, so a 16-bit register on a
//! 32-bit stride is still a 2-byte slot (see [`FifoSlot`]).
//!
//! # Widths
//! Widths other than 1, 2 or 4 bytes are rejected at build time:
//!
//! ```compile_fail
//! use fifocopy::FifoWord;
//!
//! #[derive(Clone, Copy)]
//! struct Eight([u8; 8]);
//!
//! impl FifoWord for Eight {
//!     fn to_bits(self) -> u32 { 0 }
//!     fn from_bits(_: u32) -> Self { Eight([0; 8]) }
//! }
//!
//! #[derive(Clone, Copy, FifoWord)]
//! #[repr(transparent)]
//! struct Wide(Eight);
//! ```
//!
//! ```compile_fail
//! use fifocopy::{FifoWord, ReadSlot};
//!
//! #[derive(Clone, Copy)]
//! struct Triple([u8; 3]);
//!
//! impl FifoWord for Triple {
//!     fn to_bits(self) -> u32 { 0 }
//!     fn from_bits(_: u32) -> Self { Triple([0; 3]) }
//! }
//!
//! impl ReadSlot for Triple {
//!     type Word = Self;
//!     fn load(&self) -> Self { *self }
//! }
//!
//! let fifo = [Triple([0; 3]); 2];
//! let mut out = [0u8; 6];
//! fifocopy::unpack(&fifo, &mut out, 6);
//! ```

mod copy;
pub mod register;
mod slot;
#[cfg(feature = "tock-registers")]
mod tock;
mod view;
mod word;

pub use copy::pack;
pub use copy::unpack;
pub use fifocopy_macro::FifoSlot;
pub use fifocopy_macro::FifoWord;
pub use register::ReadOnly;
pub use register::ReadWrite;
pub use register::WriteOnly;
pub use slot::ReadSlot;
pub use slot::WriteSlot;
pub use view::FifoSink;
pub use view::FifoSource;
pub use view::Port;
pub use word::FifoWord;
