use thiserror::Error;

/// Any reason a `(data, map)` pair fails to decode.
///
/// Problems with the map are always reported before problems with the data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("malformed code map: {0}")]
    MapFormat(#[from] MapFormatError),
    #[error("invalid code table: {0}")]
    InvalidCodeTable(#[from] CodeTableError),
    #[error("malformed data: {0}")]
    DataFormat(#[from] DataFormatError),
    #[error("invalid bit sequence: {0}")]
    InvalidBitSequence(#[from] BitSequenceError),
}

/// The serialized map could not be parsed. `entry` is zero-based.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MapFormatError {
    #[error("entry {entry} has no symbol")]
    MissingSymbol { entry: usize },
    #[error("entry {entry} is missing the ':' separator")]
    MissingSeparator { entry: usize },
    #[error("entry {entry} escapes {found:?}, which is not a reserved character")]
    InvalidEscape { entry: usize, found: char },
    #[error("entry {entry} ends inside an escape sequence")]
    DanglingEscape { entry: usize },
    #[error("entry {entry} has an empty code")]
    EmptyCode { entry: usize },
    #[error("entry {entry} has {found:?} in its code, expected '0' or '1'")]
    InvalidCodeChar { entry: usize, found: char },
    #[error("symbol {symbol:?} appears more than once")]
    DuplicateSymbol { symbol: char },
}

/// The code table parsed fine but is not a prefix code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodeTableError {
    #[error("symbols {first:?} and {second:?} share the code {code}")]
    DuplicateCode {
        code: String,
        first: char,
        second: char,
    },
    #[error("code {code} of symbol {symbol:?} is a prefix of another code")]
    PrefixCode { symbol: char, code: String },
}

/// The data string does not follow the padded bit-string layout.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DataFormatError {
    #[error("padding marker {found:?} is not a digit between 0 and 7")]
    InvalidPadding { found: char },
    #[error("character {found:?} at bit offset {offset} is not '0' or '1'")]
    InvalidBit { offset: usize, found: char },
    #[error("{bits} bits do not fill whole bytes")]
    Misaligned { bits: usize },
    #[error("padding bits must be zero")]
    NonZeroPadding,
}

/// The bits cannot be split into codes of the table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BitSequenceError {
    #[error("no code matches the bits starting at offset {offset}")]
    UnknownCode { offset: usize },
    #[error("{pending} trailing bits do not complete a code")]
    Truncated { pending: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    #[error("symbol {0:?} has no code in the table")]
    UnmappedSymbol(char),
}
