use crate::code_table::Code;

pub const BITS_PER_UNIT: usize = 8;

/// Bits packed most significant first into bytes.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct BitVec {
    bits: Vec<u8>,
    bit_count: usize,
}

impl BitVec {
    pub fn new() -> Self {
        BitVec {
            bits: Vec::new(),
            bit_count: 0,
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bits
    }

    pub fn bit_count(&self) -> usize {
        self.bit_count
    }

    /// Unused low bits of the last byte.
    pub fn padding(&self) -> usize {
        self.bits.len() * BITS_PER_UNIT - self.bit_count
    }

    fn push_bit(&mut self, bit: bool) {
        let byte_index = self.bit_count / BITS_PER_UNIT; // which byte is target?
        let bit_offset = self.bit_count % BITS_PER_UNIT; // which bit position is target?

        // make a new byte if needed
        if byte_index >= self.bits.len() {
            self.bits.push(0);
        }

        if bit {
            self.bits[byte_index] |= 1 << (7 - bit_offset);
        }

        self.bit_count += 1;
    }

    pub fn push_code(&mut self, code: &Code) {
        for bit in code.bits() {
            self.push_bit(bit);
        }
    }

    pub fn get(&self, index: usize) -> Option<bool> {
        if index >= self.bit_count {
            return None;
        }
        let byte = self.bits[index / BITS_PER_UNIT];
        Some(byte & (1 << (7 - index % BITS_PER_UNIT)) != 0)
    }

    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.bit_count).filter_map(|i| self.get(i))
    }
}

impl From<(usize, Vec<u8>)> for BitVec {
    fn from((bit_count, bits): (usize, Vec<u8>)) -> Self {
        debug_assert!(bit_count <= bits.len() * BITS_PER_UNIT);
        BitVec { bits, bit_count }
    }
}
