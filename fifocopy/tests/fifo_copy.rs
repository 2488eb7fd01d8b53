use fifocopy::FifoSlot;
use fifocopy::pack;
use fifocopy::unpack;

const BUFFER_SZ: usize = 64;
const UNTOUCHED: u8 = 0xA5;
const RESERVED: u16 = 0x5A5A;

/// Packet memory where a 16-bit payload sits on a 32-bit stride, the upper
/// half being reserved.
#[derive(Clone, Copy, FifoSlot)]
#[repr(C, packed)]
struct ScatteredSlot {
    #[fifo]
    data: u16,
    reserved: u16,
}

const _: () = assert!(core::mem::size_of::<ScatteredSlot>() == 4);

const EMPTY_SCATTERED: ScatteredSlot = ScatteredSlot {
    data: 0,
    reserved: RESERVED,
};

fn source_data() -> [u8; BUFFER_SZ] {
    core::array::from_fn(|i| u8::try_from(i).unwrap())
}

macro_rules! fifo_copy_tests {
    ($($name:ident: [$slot:ty; $width:expr] = $empty:expr;)+) => {
        $(
            mod $name {
                use super::*;

                const WIDTH: usize = $width;

                fn packet() -> [$slot; BUFFER_SZ / WIDTH] {
                    [$empty; BUFFER_SZ / WIDTH]
                }

                /// Packs `byte_count` bytes of the source into a fresh packet and
                /// unpacks them again into an `N`-byte target.
                fn round_trip<const N: usize>(byte_count: usize) -> [u8; N] {
                    let source = source_data();
                    let mut packet = packet();
                    pack(&source, &mut packet, byte_count);

                    let mut target = [UNTOUCHED; N];
                    unpack(&packet, &mut target, byte_count);
                    target
                }

                #[test]
                fn copy_single_byte() {
                    let target = round_trip::<1>(1);
                    assert_eq!(target[..], source_data()[..1]);
                }

                #[test]
                fn copy_two_bytes() {
                    let target = round_trip::<2>(2);
                    assert_eq!(target[..], source_data()[..2]);
                }

                #[test]
                fn copy_one_element() {
                    let target = round_trip::<WIDTH>(WIDTH);
                    assert_eq!(target[..], source_data()[..WIDTH]);
                }

                #[test]
                fn copy_two_elements() {
                    let target = round_trip::<{ 2 * WIDTH }>(2 * WIDTH);
                    assert_eq!(target[..], source_data()[..2 * WIDTH]);
                }

                #[test]
                fn copy_full_packet() {
                    let target = round_trip::<BUFFER_SZ>(BUFFER_SZ);
                    assert_eq!(target, source_data());
                }

                #[test]
                fn packet_larger_than_buffer() {
                    let target = round_trip::<{ BUFFER_SZ - 1 }>(BUFFER_SZ);
                    assert_eq!(target[..], source_data()[..BUFFER_SZ - 1]);
                }

                #[test]
                fn more_than_packet() {
                    let target = round_trip::<{ BUFFER_SZ + 1 }>(BUFFER_SZ + 1);
                    assert_eq!(target[..BUFFER_SZ], source_data()[..]);
                    assert_eq!(target[BUFFER_SZ], UNTOUCHED);
                }

                #[test]
                fn short_source_drops_trailing_bytes() {
                    let source = source_data();
                    let mut packet = packet();
                    pack(&source[..WIDTH + 1], &mut packet, BUFFER_SZ);

                    let mut target = [UNTOUCHED; BUFFER_SZ];
                    unpack(&packet, &mut target, BUFFER_SZ);
                    assert_eq!(target[..WIDTH], source[..WIDTH]);
                    if WIDTH > 1 {
                        assert_eq!(target[WIDTH], 0);
                    } else {
                        assert_eq!(target[WIDTH], source[WIDTH]);
                    }
                }
            }
        )+
    };
}

fifo_copy_tests! {
    word: [u32; 4] = 0;
    half: [u16; 2] = 0;
    byte: [u8; 1] = 0;
    scattered: [ScatteredSlot; 2] = EMPTY_SCATTERED;
}

#[test]
fn scattered_padding_is_never_touched() {
    let source = source_data();
    let mut packet = [EMPTY_SCATTERED; BUFFER_SZ / 2];
    pack(&source, &mut packet, BUFFER_SZ);

    for (i, slot) in packet.iter().enumerate() {
        let data = slot.data;
        let reserved = slot.reserved;
        assert_eq!(data, u16::from_le_bytes([source[2 * i], source[2 * i + 1]]));
        assert_eq!(reserved, RESERVED);
    }

    let mut tight = [0u16; BUFFER_SZ / 2];
    pack(&source, &mut tight, BUFFER_SZ);

    let mut from_scattered = [0u8; BUFFER_SZ];
    let mut from_tight = [0u8; BUFFER_SZ];
    unpack(&packet, &mut from_scattered, BUFFER_SZ);
    unpack(&tight, &mut from_tight, BUFFER_SZ);
    assert_eq!(from_scattered, from_tight);
}

#[test]
fn unpack_one_byte_short_of_an_element() {
    let packet = [0x0302_0100u32, 0x0706_0504];

    let mut target = [UNTOUCHED; 7];
    unpack(&packet, &mut target, 8);
    assert_eq!(target, [0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06]);

    let mut fifo = [0u32; 2];
    pack(&target, &mut fifo, 8);
    assert_eq!(fifo, [0x0302_0100, 0]);
}

#[test]
fn word_layout_is_little_endian() {
    let mut packet = [0u32; BUFFER_SZ / 4];
    pack(&source_data(), &mut packet, BUFFER_SZ);
    assert_eq!(packet[0], 0x0302_0100);
    assert_eq!(packet[15], 0x3F3E_3D3C);
}
