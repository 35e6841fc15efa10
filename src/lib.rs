//! # wasm_huffman
//!
//! Huffman compression for text, exchanged as a pair of printable strings.
//!
//! [`encode`] turns text into a [`Huffdata`] holding the packed bits (`data`)
//! and the code table needed to read them back (`map`). [`decode`] reverses
//! it. Both strings are plain text so the pair can be stored, sent, and
//! rebuilt later with [`Huffdata::new`].
//!
//! ## Quick Start
//!
//! ```rust
//! use wasm_huffman::{decode, encode, Huffdata};
//!
//! let huffdata = encode("aabbbcc")?;
//! assert_eq!(huffdata.map(), "a:10,b:0,c:11");
//! assert_eq!(huffdata.data(), "51010000111100000");
//!
//! let rebuilt = Huffdata::new(huffdata.data(), huffdata.map());
//! assert_eq!(decode(&rebuilt)?, "aabbbcc");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Wire format
//!
//! - **map**: `symbol:code` entries joined by `,` in ascending symbol order.
//!   The symbols `,`, `:` and `\` are escaped with a leading `\`.
//! - **data**: a padding digit `0`-`7`, then the bits in whole bytes of eight
//!   `'0'`/`'1'` characters. The last `padding` bits are zero filler.
//!
//! Empty text encodes to an empty data and an empty map.

pub mod code_table;
pub mod decoder;
pub mod error;
pub mod frequency;
pub mod huffdata;
pub mod huffman_codec;
pub mod hufftree;
pub mod payload;

#[cfg(feature = "wasm")]
pub mod wasm;

// Internal modules - not part of public API
mod bit_vec;
mod min_heap;

// Re-export main types for convenience
pub use code_table::{Code, CodeTable};
pub use error::{
    BitSequenceError, CodeTableError, DataFormatError, DecodeError, EncodeError, MapFormatError,
};
pub use frequency::FrequencyTable;
pub use huffdata::Huffdata;
pub use huffman_codec::{decode, encode, HuffmanCodec};
pub use hufftree::HuffmanTree;
pub use payload::EncodedPayload;

/// Sanity check exposed next to the codec.
pub fn add(a: i32, b: i32) -> i32 {
    a + b
}
