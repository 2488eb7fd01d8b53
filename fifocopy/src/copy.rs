use crate::FifoSink;
use crate::FifoSource;
use crate::FifoWord;
use crate::word::Width;

/// Why a transfer ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Stop {
    /// The requested byte count was reached.
    Requested,
    /// The source ran out at an element boundary.
    SourceExhausted,
    /// The destination ran out.
    SinkFull,
    /// The source ended in the middle of an element (pack only).
    PartialDropped,
}

/// Copies up to `bytes` bytes from the FIFO view `fifo` into `dst`.
///
/// Slots are read in order and each one is spread over `WIDTH` consecutive
/// bytes of `dst`, least-significant byte first. The transfer stops, keeping
/// everything already written, when
///
/// - `bytes` bytes have been handled (checked once per slot),
/// - every slot of `fifo` has been read, or
/// - `dst` is full. A slot that only partly fits still writes the bytes that
///   fit.
///
/// Nothing is reported back: callers that need the transferred length track
/// it themselves.
pub fn unpack<F>(fifo: &F, dst: &mut [u8], bytes: usize)
where
    F: FifoSource + ?Sized,
{
    let width = const { Width::of::<F::Word>() };
    let lanes = width.bytes();

    let mut count = 0;
    let mut slot = 0;
    let mut out = 0;

    let stop = loop {
        if count >= bytes {
            break Stop::Requested;
        }
        if slot >= fifo.depth() {
            break Stop::SourceExhausted;
        }
        let Some(tail) = dst.get_mut(out..).filter(|tail| !tail.is_empty()) else {
            break Stop::SinkFull;
        };

        let bits = fifo.read_slot(slot).to_bits();
        if !spread(width, bits, tail) {
            break Stop::SinkFull;
        }

        count += lanes;
        slot += 1;
        out += lanes;
    };

    tracing::trace!(requested = bytes, handled = count, slots = slot, ?stop, "fifo unpack");
}

/// Copies up to `bytes` bytes from `src` into the FIFO view `fifo`.
///
/// Each slot is assembled from `WIDTH` consecutive bytes of `src`, the first
/// byte ending up in the least-significant position, and written as a whole.
/// The transfer stops when
///
/// - `bytes` bytes have been handled (checked once per slot),
/// - every slot of `fifo` has been written, or
/// - `src` runs out. If fewer than `WIDTH` bytes remain for the current slot,
///   that slot is not written at all.
///
/// Slots are never written partially, unlike the bytes of [`unpack`].
pub fn pack<F>(src: &[u8], fifo: &mut F, bytes: usize)
where
    F: FifoSink + ?Sized,
{
    let width = const { Width::of::<F::Word>() };
    let lanes = width.bytes();

    let mut count = 0;
    let mut input = 0;
    let mut slot = 0;

    let stop = loop {
        if count >= bytes {
            break Stop::Requested;
        }
        if slot >= fifo.capacity() {
            break Stop::SinkFull;
        }
        let Some(head) = src.get(input..).filter(|head| !head.is_empty()) else {
            break Stop::SourceExhausted;
        };
        let Some(bits) = gather(width, head) else {
            break Stop::PartialDropped;
        };

        fifo.write_slot(slot, F::Word::from_bits(bits));

        count += lanes;
        input += lanes;
        slot += 1;
    };

    tracing::trace!(requested = bytes, handled = count, slots = slot, ?stop, "fifo pack");
}

/// Writes the low bytes of `bits` into `out`, least-significant first.
///
/// `out` is non-empty. Returns `false` when `out` ends before the element
/// does; the bytes that fit are written anyway.
#[inline]
#[allow(clippy::cast_possible_truncation)]
fn spread(width: Width, bits: u32, out: &mut [u8]) -> bool {
    match width {
        Width::Byte => {
            out[0] = (bits & 0xFF) as u8;
            true
        }
        Width::Half => {
            out[0] = (bits & 0xFF) as u8;
            let Some(b1) = out.get_mut(1) else {
                return false;
            };
            *b1 = ((bits >> 8) & 0xFF) as u8;
            true
        }
        Width::Word => {
            out[0] = (bits & 0xFF) as u8;
            let Some(b1) = out.get_mut(1) else {
                return false;
            };
            *b1 = ((bits >> 8) & 0xFF) as u8;
            let Some(b2) = out.get_mut(2) else {
                return false;
            };
            *b2 = ((bits >> 16) & 0xFF) as u8;
            let Some(b3) = out.get_mut(3) else {
                return false;
            };
            *b3 = ((bits >> 24) & 0xFF) as u8;
            true
        }
    }
}

/// Assembles one element from the head of `src`.
///
/// `src` is non-empty. Returns `None` if it holds fewer bytes than one
/// element.
#[inline]
fn gather(width: Width, src: &[u8]) -> Option<u32> {
    let mut v = u32::from(src[0]);
    match width {
        Width::Byte => {}
        Width::Half => {
            v = (u32::from(*src.get(1)?) << 8) | (v & 0x0000_00FF);
        }
        Width::Word => {
            v = (u32::from(*src.get(1)?) << 8) | (v & 0x0000_00FF);
            v = (u32::from(*src.get(2)?) << 16) | (v & 0x0000_FFFF);
            v = (u32::from(*src.get(3)?) << 24) | (v & 0x00FF_FFFF);
        }
    }
    Some(v)
}
