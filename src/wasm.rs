//! JavaScript bindings.

use wasm_bindgen::prelude::*;

use crate::Huffdata;

#[wasm_bindgen(js_name = Huffdata)]
pub struct JsHuffdata {
    inner: Huffdata,
}

#[wasm_bindgen(js_class = Huffdata)]
impl JsHuffdata {
    #[wasm_bindgen(constructor)]
    pub fn new(data: String, map: String) -> JsHuffdata {
        JsHuffdata {
            inner: Huffdata::new(data, map),
        }
    }

    pub fn get_data(&self) -> String {
        self.inner.data().to_owned()
    }

    pub fn get_map(&self) -> String {
        self.inner.map().to_owned()
    }
}

#[wasm_bindgen]
pub fn encode(text: &str) -> Result<JsHuffdata, String> {
    crate::encode(text)
        .map(|inner| JsHuffdata { inner })
        .map_err(|e| format!("{}", e))
}

#[wasm_bindgen]
pub fn decode(huffdata: &JsHuffdata) -> Result<String, String> {
    crate::decode(&huffdata.inner).map_err(|e| format!("{}", e))
}

#[wasm_bindgen]
pub fn add(a: i32, b: i32) -> i32 {
    crate::add(a, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip_through_bindings() {
        let encoded = encode("this is a test string!").unwrap();
        let rebuilt = JsHuffdata::new(encoded.get_data(), encoded.get_map());

        assert_eq!(decode(&rebuilt).unwrap(), "this is a test string!");
        assert_eq!(add(3, 7), 10);
    }

    #[test]
    fn errors_become_messages() {
        let bad = JsHuffdata::new("00".to_owned(), "not-a-valid-map".to_owned());

        assert_eq!(
            decode(&bad).unwrap_err(),
            "malformed code map: entry 0 is missing the ':' separator"
        );
    }
}
