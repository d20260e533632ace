//! Packed bit array
//!
//! Eight boolean cells per byte: `index / 8` picks the byte, `index % 8`
//! the bit.

/// Growable-at-construction, fixed-length array of bits
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackedBits {
    /// Bit array (ceil(len / 8) bytes)
    bytes: Vec<u8>,
    len: usize,
}

impl PackedBits {
    /// `len` bits, all set to `value`
    pub fn new(len: usize, value: bool) -> Self {
        let fill = if value { u8::MAX } else { 0 };
        let mut bits = Self {
            bytes: vec![fill; len.div_ceil(8)],
            len,
        };
        bits.clear_padding();
        bits
    }

    pub fn len(&self) -> usize {
        self.len
    }

    /// Read bit `index`; callers validate the index
    pub fn get(&self, index: usize) -> bool {
        debug_assert!(index < self.len);
        let (byte_index, bit_offset) = Self::locate(index);
        (self.bytes[byte_index] & (1 << bit_offset)) != 0
    }

    /// Write bit `index`; callers validate the index
    pub fn set(&mut self, index: usize, value: bool) {
        debug_assert!(index < self.len);
        let (byte_index, bit_offset) = Self::locate(index);
        if value {
            self.bytes[byte_index] |= 1 << bit_offset;
        } else {
            self.bytes[byte_index] &= !(1 << bit_offset);
        }
    }

    /// Number of set bits
    pub fn count_ones(&self) -> usize {
        self.bytes.iter().map(|byte| byte.count_ones() as usize).sum()
    }

    /// Bytes used for storage
    pub fn byte_len(&self) -> usize {
        self.bytes.len()
    }

    const fn locate(index: usize) -> (usize, usize) {
        (index / 8, index % 8)
    }

    // Bits past `len` in the last byte stay zero so `count_ones` is exact.
    fn clear_padding(&mut self) {
        let used = self.len % 8;
        if used != 0 {
            if let Some(last) = self.bytes.last_mut() {
                *last &= (1u8 << used) - 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_packed_bits_basic() {
        let mut bits = PackedBits::new(20, false);
        assert_eq!(bits.byte_len(), 3);

        bits.set(0, true);
        bits.set(9, true);
        bits.set(19, true);
        assert!(bits.get(0));
        assert!(bits.get(9));
        assert!(!bits.get(10));
        assert_eq!(bits.count_ones(), 3);

        bits.set(9, false);
        assert!(!bits.get(9));
        assert_eq!(bits.count_ones(), 2);
    }

    #[test]
    fn test_filled_ignores_padding() {
        let bits = PackedBits::new(11, true);
        assert_eq!(bits.count_ones(), 11);
        assert_eq!(PackedBits::new(0, true).len(), 0);
    }
}
