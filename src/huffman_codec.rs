use crate::code_table::CodeTable;
use crate::decoder::DecodeTrie;
use crate::error::{DecodeError, EncodeError};
use crate::huffdata::Huffdata;
use crate::hufftree::HuffmanTree;
use crate::payload::EncodedPayload;

/// A codec bound to one code table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HuffmanCodec {
    table: CodeTable,
}

impl HuffmanCodec {
    pub fn new(table: CodeTable) -> Self {
        HuffmanCodec { table }
    }

    /// Builds the code table from the symbol frequencies of `sample`.
    pub fn from_text(sample: &str) -> Self {
        Self::new(HuffmanTree::from_text(sample).code_table())
    }

    pub fn table(&self) -> &CodeTable {
        &self.table
    }

    /// Fails if `text` holds a symbol the table has no code for.
    pub fn encode(&self, text: &str) -> Result<Huffdata, EncodeError> {
        let payload = EncodedPayload::pack(text.chars(), &self.table)?;
        log::debug!(
            "encoded {} bytes of text into {} bits with {} codes",
            text.len(),
            payload.bit_len(),
            self.table.len()
        );
        Ok(Huffdata::new(payload.to_string(), self.table.serialize()))
    }

    /// Decodes a data string produced with this codec's table.
    pub fn decode_data(&self, data: &str) -> Result<String, DecodeError> {
        let trie = DecodeTrie::build(&self.table)?;
        let payload = EncodedPayload::parse(data)?;
        let text = trie.decode_bits(payload.bits())?;
        log::debug!(
            "decoded {} bits into {} bytes of text",
            payload.bit_len(),
            text.len()
        );
        Ok(text)
    }
}

/// Compresses `text`, training the code table on the text itself.
pub fn encode(text: &str) -> Result<Huffdata, EncodeError> {
    HuffmanCodec::from_text(text).encode(text)
}

/// Recovers the text of a pair built by [`encode`] or by [`Huffdata::new`].
///
/// The map is parsed and checked before any data is looked at.
pub fn decode(huffdata: &Huffdata) -> Result<String, DecodeError> {
    let table = CodeTable::parse(huffdata.map()).map_err(|err| {
        log::debug!("rejecting code map: {err}");
        err
    })?;
    HuffmanCodec::new(table)
        .decode_data(huffdata.data())
        .map_err(|err| {
            log::debug!("rejecting encoded data: {err}");
            err
        })
}
