//! Bit-level reading and writing over byte slices for the Gua wire format.
//!
//! Bits are addressed LSB-first: bit 0 is the low bit of the first byte, and a
//! byte is filled from its low bit to its high bit before moving to the next.

/// Sequential LSB-first reader over a borrowed byte slice.
pub(crate) struct BitReader<'a> {
    data: &'a [u8],
    bit_pos: usize,
}

impl<'a> BitReader<'a> {
    pub(crate) fn new(data: &'a [u8]) -> Self {
        Self { data, bit_pos: 0 }
    }

    /// Reads the next bit, or `None` once the slice is exhausted.
    pub(crate) fn read_bit(&mut self) -> Option<bool> {
        let bit = read_bit_at(self.data, self.bit_pos)?;
        self.bit_pos += 1;
        Some(bit)
    }

    /// Position of the highest set bit in the whole slice, if any.
    pub(crate) fn last_set_bit(&self) -> Option<usize> {
        let (byte_index, byte) = self
            .data
            .iter()
            .enumerate()
            .rev()
            .find(|(_, byte)| **byte != 0)?;

        let bit_index = 7 - byte.leading_zeros() as usize;
        Some(byte_index * 8 + bit_index)
    }
}

/// Reads the bit at `bit_pos` (0 = LSB of first byte).
fn read_bit_at(data: &[u8], bit_pos: usize) -> Option<bool> {
    let byte = data.get(bit_pos / 8)?;
    Some((byte >> (bit_pos % 8)) & 1 == 1)
}

/// Appends bits LSB-first into a growing byte buffer.
#[derive(Debug)]
pub(crate) struct BitWriter {
    out: Vec<u8>,
    bit_pos: usize,
}

impl BitWriter {
    /// Creates a writer with room for `bits` bits before reallocating.
    pub(crate) fn with_capacity(bits: usize) -> Self {
        Self {
            out: Vec::with_capacity(bits.div_ceil(8)),
            bit_pos: 0,
        }
    }

    pub(crate) fn write_bit(&mut self, bit: bool) {
        let bit_in_byte = self.bit_pos % 8;
        if bit_in_byte == 0 {
            self.out.push(0);
        }

        if bit {
            // A byte was pushed above whenever bit_in_byte is 0.
            if let Some(last) = self.out.last_mut() {
                *last |= 1 << bit_in_byte;
            }
        }

        self.bit_pos += 1;
    }

    /// Returns the buffer; unused high bits of the last byte are zero.
    pub(crate) fn into_bytes(self) -> Vec<u8> {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_bit_at() {
        let data = [0b0000_0001, 0b1000_0000];
        assert_eq!(read_bit_at(&data, 0), Some(true));
        assert_eq!(read_bit_at(&data, 1), Some(false));
        assert_eq!(read_bit_at(&data, 15), Some(true));
    }

    #[test]
    fn test_read_bit_out_of_bounds() {
        let data = [0b1111_1111];
        assert_eq!(read_bit_at(&data, 8), None);
        assert_eq!(read_bit_at(&[], 0), None);
    }

    #[test]
    fn test_read_bits_sequentially() {
        let mut reader = BitReader::new(&[0b0000_1011]);
        assert_eq!(reader.read_bit(), Some(true));
        assert_eq!(reader.read_bit(), Some(true));
        assert_eq!(reader.read_bit(), Some(false));
        assert_eq!(reader.read_bit(), Some(true));
    }

    #[test]
    fn test_reader_exhausted() {
        let mut reader = BitReader::new(&[0xFF]);
        for _ in 0..8 {
            assert_eq!(reader.read_bit(), Some(true));
        }
        assert_eq!(reader.read_bit(), None);
    }

    #[test]
    fn test_last_set_bit() {
        assert_eq!(BitReader::new(&[0b0000_1011]).last_set_bit(), Some(3));
        assert_eq!(BitReader::new(&[0xFF, 0b0000_0001, 0]).last_set_bit(), Some(8));
        assert_eq!(BitReader::new(&[0, 0]).last_set_bit(), None);
        assert_eq!(BitReader::new(&[]).last_set_bit(), None);
    }

    #[test]
    fn test_write_bits() {
        let mut writer = BitWriter::with_capacity(4);
        writer.write_bit(true);
        writer.write_bit(true);
        writer.write_bit(false);
        writer.write_bit(true);
        assert_eq!(writer.into_bytes(), vec![0b0000_1011]);
    }

    #[test]
    fn test_write_crosses_byte_boundary() {
        let mut writer = BitWriter::with_capacity(9);
        for _ in 0..8 {
            writer.write_bit(false);
        }
        writer.write_bit(true);
        assert_eq!(writer.into_bytes(), vec![0, 0b0000_0001]);
    }

    #[test]
    fn test_write_nothing() {
        assert!(BitWriter::with_capacity(0).into_bytes().is_empty());
    }
}
