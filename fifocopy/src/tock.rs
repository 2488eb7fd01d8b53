use tock_registers::RegisterLongName;
use tock_registers::UIntLike;
use tock_registers::interfaces::Readable;
use tock_registers::interfaces::Writeable;
use tock_registers::registers;

use crate::FifoWord;
use crate::ReadSlot;
use crate::WriteSlot;

impl<T, R> ReadSlot for registers::ReadOnly<T, R>
where
    T: UIntLike + FifoWord,
    R: RegisterLongName,
{
    type Word = T;

    #[inline]
    fn load(&self) -> T {
        self.get()
    }
}

impl<T, R> ReadSlot for registers::ReadWrite<T, R>
where
    T: UIntLike + FifoWord,
    R: RegisterLongName,
{
    type Word = T;

    #[inline]
    fn load(&self) -> T {
        self.get()
    }
}

impl<T, R> WriteSlot for registers::WriteOnly<T, R>
where
    T: UIntLike + FifoWord,
    R: RegisterLongName,
{
    type Word = T;

    #[inline]
    fn store(&mut self, word: T) {
        self.set(word);
    }
}

impl<T, R> WriteSlot for registers::ReadWrite<T, R>
where
    T: UIntLike + FifoWord,
    R: RegisterLongName,
{
    type Word = T;

    #[inline]
    fn store(&mut self, word: T) {
        self.set(word);
    }
}

#[cfg(test)]
mod tests {
    use tock_registers::register_structs;
    use tock_registers::registers::ReadWrite;

    use crate::pack;
    use crate::unpack;

    register_structs! {
        PacketMemory {
            (0x00 => fifo: [ReadWrite<u32>; 4]),
            (0x10 => @END),
        }
    }

    #[test]
    fn register_block_as_fifo() {
        let mut backing = [0u32; 4];
        let block = unsafe { &mut *backing.as_mut_ptr().cast::<PacketMemory>() };

        pack(&[1, 2, 3, 4, 5, 6, 7, 8, 9], &mut block.fifo, 9);

        let mut out = [0u8; 9];
        unpack(&block.fifo, &mut out, 9);
        assert_eq!(out, [1, 2, 3, 4, 5, 6, 7, 8, 0]);
        assert_eq!(backing, [0x0403_0201, 0x0807_0605, 0, 0]);
    }
}
