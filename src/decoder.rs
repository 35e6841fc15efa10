//! Turns a code table back into a bit-level lookup and replays payload bits.
//!
//! The trie is an index arena like the encoding tree. Decoding keeps a cursor
//! into it: while the cursor sits on a branch the decoder is accumulating
//! bits, reaching a leaf emits that symbol and resets the cursor to the root.
//! Running out of bits on the root means done, anywhere else means the
//! trailing bits never completed a code.

use crate::code_table::{Code, CodeTable};
use crate::error::{BitSequenceError, CodeTableError};

const ROOT: usize = 0;

#[derive(Debug, Clone, Copy)]
enum TrieNode {
    Branch([Option<usize>; 2]),
    Leaf(char),
}

#[derive(Debug, Clone)]
pub struct DecodeTrie {
    nodes: Vec<TrieNode>,
}

impl DecodeTrie {
    /// Fails if the table is not a prefix code.
    pub fn build(table: &CodeTable) -> Result<Self, CodeTableError> {
        let mut trie = DecodeTrie {
            nodes: vec![TrieNode::Branch([None, None])],
        };
        for (symbol, code) in table.iter() {
            trie.insert(symbol, code)?;
        }
        Ok(trie)
    }

    fn insert(&mut self, symbol: char, code: &Code) -> Result<(), CodeTableError> {
        let last = code.len().saturating_sub(1);
        let mut cursor = ROOT;

        for (depth, bit) in code.bits().enumerate() {
            let children = match self.nodes[cursor] {
                TrieNode::Leaf(owner) => {
                    return Err(CodeTableError::PrefixCode {
                        symbol: owner,
                        code: code.as_str()[..depth].to_owned(),
                    })
                }
                TrieNode::Branch(children) => children,
            };

            match children[bit as usize] {
                Some(next) if depth == last => {
                    return Err(match self.nodes[next] {
                        TrieNode::Leaf(owner) => CodeTableError::DuplicateCode {
                            code: code.to_string(),
                            first: owner,
                            second: symbol,
                        },
                        TrieNode::Branch(_) => CodeTableError::PrefixCode {
                            symbol,
                            code: code.to_string(),
                        },
                    })
                }
                Some(next) => cursor = next,
                None => {
                    let id = self.nodes.len();
                    self.nodes.push(if depth == last {
                        TrieNode::Leaf(symbol)
                    } else {
                        TrieNode::Branch([None, None])
                    });
                    if let TrieNode::Branch(children) = &mut self.nodes[cursor] {
                        children[bit as usize] = Some(id);
                    }
                    cursor = id;
                }
            }
        }
        Ok(())
    }

    pub fn decode_bits<I>(&self, bits: I) -> Result<String, BitSequenceError>
    where
        I: IntoIterator<Item = bool>,
    {
        let mut decoded = String::new();
        let mut cursor = ROOT;
        let mut pending = 0;

        for (offset, bit) in bits.into_iter().enumerate() {
            let next = match self.nodes[cursor] {
                TrieNode::Branch(children) => children[bit as usize],
                TrieNode::Leaf(_) => None,
            };
            let Some(next) = next else {
                return Err(BitSequenceError::UnknownCode {
                    offset: offset - pending,
                });
            };

            match self.nodes[next] {
                TrieNode::Leaf(symbol) => {
                    decoded.push(symbol);
                    cursor = ROOT;
                    pending = 0;
                }
                TrieNode::Branch(_) => {
                    cursor = next;
                    pending += 1;
                }
            }
        }

        if pending > 0 {
            return Err(BitSequenceError::Truncated { pending });
        }
        Ok(decoded)
    }
}
