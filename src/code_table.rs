//! Symbol to code mapping and its textual "map" form.
//!
//! A serialized map is a list of `symbol:code` entries joined by `,`, in
//! ascending symbol order. Symbols that collide with the format itself
//! (`,`, `:` and `\`) are written with a leading `\`. The empty table is the
//! empty string.
//!
//! ```text
//! a:10,b:0,c:11
//! \,:1,\::0
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::decoder::DecodeTrie;
use crate::error::{CodeTableError, MapFormatError};

pub const ENTRY_DELIMITER: char = ',';
pub const CODE_SEPARATOR: char = ':';
pub const ESCAPE: char = '\\';

fn is_reserved(symbol: char) -> bool {
    matches!(symbol, ENTRY_DELIMITER | CODE_SEPARATOR | ESCAPE)
}

/// A non-empty string of `'0'` and `'1'`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Code(String);

impl Code {
    /// Returns `None` unless `bits` is non-empty and only holds `'0'`/`'1'`.
    pub fn parse(bits: &str) -> Option<Code> {
        let valid = !bits.is_empty() && bits.bytes().all(|b| b == b'0' || b == b'1');
        valid.then(|| Code(bits.to_owned()))
    }

    pub(crate) fn from_path(path: String) -> Code {
        debug_assert!(Code::parse(&path).is_some(), "bad code path {path:?}");
        Code(path)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn bits(&self) -> impl Iterator<Item = bool> + '_ {
        self.0.bytes().map(|b| b == b'1')
    }

    pub fn is_prefix_of(&self, other: &Code) -> bool {
        other.0.starts_with(&self.0)
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeTable {
    codes: BTreeMap<char, Code>,
}

impl CodeTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, symbol: char, code: Code) -> Option<Code> {
        self.codes.insert(symbol, code)
    }

    pub fn get(&self, symbol: char) -> Option<&Code> {
        self.codes.get(&symbol)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Entries in ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (char, &Code)> {
        self.codes.iter().map(|(&symbol, code)| (symbol, code))
    }

    pub fn check_prefix_free(&self) -> Result<(), CodeTableError> {
        DecodeTrie::build(self).map(drop)
    }

    pub fn is_prefix_free(&self) -> bool {
        self.check_prefix_free().is_ok()
    }

    pub fn serialize(&self) -> String {
        let mut out = String::new();
        for (i, (&symbol, code)) in self.codes.iter().enumerate() {
            if i > 0 {
                out.push(ENTRY_DELIMITER);
            }
            if is_reserved(symbol) {
                out.push(ESCAPE);
            }
            out.push(symbol);
            out.push(CODE_SEPARATOR);
            out.push_str(code.as_str());
        }
        out
    }

    pub fn parse(map: &str) -> Result<Self, MapFormatError> {
        let mut table = CodeTable::new();
        if map.is_empty() {
            return Ok(table);
        }

        let mut chars = map.chars();
        let mut entry = 0;
        loop {
            let symbol = match chars.next() {
                Some(ESCAPE) => match chars.next() {
                    Some(found) if is_reserved(found) => found,
                    Some(found) => return Err(MapFormatError::InvalidEscape { entry, found }),
                    None => return Err(MapFormatError::DanglingEscape { entry }),
                },
                Some(ENTRY_DELIMITER) | Some(CODE_SEPARATOR) | None => {
                    return Err(MapFormatError::MissingSymbol { entry })
                }
                Some(symbol) => symbol,
            };

            if chars.next() != Some(CODE_SEPARATOR) {
                return Err(MapFormatError::MissingSeparator { entry });
            }

            let mut bits = String::new();
            let more = loop {
                match chars.next() {
                    Some(ENTRY_DELIMITER) => break true,
                    None => break false,
                    Some(bit @ ('0' | '1')) => bits.push(bit),
                    Some(found) => return Err(MapFormatError::InvalidCodeChar { entry, found }),
                }
            };
            if bits.is_empty() {
                return Err(MapFormatError::EmptyCode { entry });
            }
            if table.insert(symbol, Code(bits)).is_some() {
                return Err(MapFormatError::DuplicateSymbol { symbol });
            }

            if !more {
                return Ok(table);
            }
            entry += 1;
        }
    }
}

impl fmt::Display for CodeTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.serialize())
    }
}

impl FromStr for CodeTable {
    type Err = MapFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CodeTable::parse(s)
    }
}

impl FromIterator<(char, Code)> for CodeTable {
    fn from_iter<I: IntoIterator<Item = (char, Code)>>(iter: I) -> Self {
        CodeTable {
            codes: iter.into_iter().collect(),
        }
    }
}
