//! The packed bit stream and its textual "data" form.
//!
//! Bits are grouped into bytes. The data string is one decimal digit giving
//! the number of padding bits in the last byte (`0` to `7`), followed by every
//! byte written as eight `'0'`/`'1'` characters, most significant bit first.
//! Padding bits are zero. A payload without bits is the empty string.
//!
//! ```text
//! 11 bits 10100001111 -> "5" + "10100001" + "11100000"
//! ```

use std::fmt;
use std::str::FromStr;

use crate::bit_vec::{BitVec, BITS_PER_UNIT};
use crate::code_table::CodeTable;
use crate::error::{DataFormatError, EncodeError};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EncodedPayload {
    bits: BitVec,
}

impl EncodedPayload {
    pub fn pack<I>(symbols: I, table: &CodeTable) -> Result<Self, EncodeError>
    where
        I: IntoIterator<Item = char>,
    {
        let mut bits = BitVec::new();
        for symbol in symbols {
            let code = table
                .get(symbol)
                .ok_or(EncodeError::UnmappedSymbol(symbol))?;
            bits.push_code(code);
        }
        Ok(EncodedPayload { bits })
    }

    /// Meaningful bits, padding excluded.
    pub fn bit_len(&self) -> usize {
        self.bits.bit_count()
    }

    pub fn padding(&self) -> usize {
        self.bits.padding()
    }

    pub fn bits(&self) -> impl Iterator<Item = bool> + '_ {
        self.bits.iter()
    }

    pub fn parse(data: &str) -> Result<Self, DataFormatError> {
        let mut chars = data.chars();
        let Some(marker) = chars.next() else {
            return Ok(Self::default());
        };
        let padding = marker
            .to_digit(10)
            .map(|digit| digit as usize)
            .filter(|&digit| digit < BITS_PER_UNIT)
            .ok_or(DataFormatError::InvalidPadding { found: marker })?;

        let mut bytes = Vec::with_capacity(data.len() / BITS_PER_UNIT);
        let mut current = 0u8;
        let mut count = 0;
        for (offset, c) in chars.enumerate() {
            let bit = match c {
                '0' => 0,
                '1' => 1,
                found => return Err(DataFormatError::InvalidBit { offset, found }),
            };
            current = (current << 1) | bit;
            count += 1;
            if count % BITS_PER_UNIT == 0 {
                bytes.push(current);
                current = 0;
            }
        }

        if count == 0 || count % BITS_PER_UNIT != 0 {
            return Err(DataFormatError::Misaligned { bits: count });
        }
        let padding_mask = (1u8 << padding) - 1;
        if bytes.last().map_or(false, |last| last & padding_mask != 0) {
            return Err(DataFormatError::NonZeroPadding);
        }

        Ok(EncodedPayload {
            bits: BitVec::from((count - padding, bytes)),
        })
    }
}

impl fmt::Display for EncodedPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.bit_len() == 0 {
            return Ok(());
        }
        write!(f, "{}", self.padding())?;
        for byte in self.bits.as_bytes() {
            write!(f, "{byte:08b}")?;
        }
        Ok(())
    }
}

impl FromStr for EncodedPayload {
    type Err = DataFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EncodedPayload::parse(s)
    }
}
