use serde::{Deserialize, Serialize};

use crate::error::DecodeError;

/// The `(data, map)` pair produced by [`encode`](crate::encode) and consumed
/// by [`decode`](crate::decode).
///
/// Construction never validates anything, so a pair can be rebuilt from
/// strings that were stored or sent elsewhere. Only decoding can fail.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Huffdata {
    data: String,
    map: String,
}

impl Huffdata {
    pub fn new(data: impl Into<String>, map: impl Into<String>) -> Huffdata {
        Huffdata {
            data: data.into(),
            map: map.into(),
        }
    }

    pub fn data(&self) -> &str {
        &self.data
    }

    pub fn map(&self) -> &str {
        &self.map
    }

    pub fn into_parts(self) -> (String, String) {
        (self.data, self.map)
    }

    pub fn decode(&self) -> Result<String, DecodeError> {
        crate::decode(self)
    }
}
