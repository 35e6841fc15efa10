use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use wasm_huffman::*;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn random_text(rng: &mut StdRng, alphabet: &[char], max_len: usize) -> String {
    let len = rng.gen_range(0..=max_len);
    (0..len)
        .map(|_| alphabet[rng.gen_range(0..alphabet.len())])
        .collect()
}

#[test]
fn test_add() {
    assert_eq!(10, add(1, 9));
}

#[test]
fn test_huffdata() {
    let huffdata = Huffdata::new("test", "test");

    assert_eq!("test", huffdata.data());
    assert_eq!("test", huffdata.map());
}

#[test]
fn round_trip_sentence() {
    init_logger();
    let input = "My super test string";

    let huffdata = encode(input).unwrap();

    assert_eq!(decode(&huffdata).unwrap(), input);
}

#[test]
fn round_trip_random_ascii() {
    init_logger();
    let alphabet: Vec<char> = "abc ,:\\\n01".chars().collect();
    let mut rng = StdRng::seed_from_u64(0x5eed);

    for _ in 0..200 {
        let text = random_text(&mut rng, &alphabet, 300);
        let huffdata = encode(&text).unwrap();

        assert_eq!(decode(&huffdata).unwrap(), text, "map {:?}", huffdata.map());
    }
}

#[test]
fn round_trip_random_unicode() {
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..50 {
        let alphabet: Vec<char> = (0..rng.gen_range(1..64)).map(|_| rng.gen::<char>()).collect();
        let text = random_text(&mut rng, &alphabet, 500);
        let huffdata = encode(&text).unwrap();

        assert_eq!(huffdata.decode().unwrap(), text);
    }
}

#[test]
fn generated_codes_are_prefix_free() {
    let mut rng = StdRng::seed_from_u64(7);
    let alphabet: Vec<char> = ('a'..='z').chain('A'..='Z').collect();

    for _ in 0..50 {
        let text = random_text(&mut rng, &alphabet, 1000);
        let table = HuffmanTree::from_text(&text).code_table();

        assert!(table.check_prefix_free().is_ok());
        let codes: Vec<&Code> = table.iter().map(|(_, code)| code).collect();
        for (i, a) in codes.iter().enumerate() {
            for (j, b) in codes.iter().enumerate() {
                if i != j {
                    assert!(!a.is_prefix_of(b), "{a} is a prefix of {b}");
                }
            }
        }
    }
}

#[test]
fn encoding_is_deterministic() {
    let text = "the quick brown fox jumps over the lazy dog";

    assert_eq!(encode(text).unwrap(), encode(text).unwrap());
}

#[test]
fn map_round_trips() {
    let mut rng = StdRng::seed_from_u64(99);
    let alphabet: Vec<char> = ",:\\ab\u{e9}\u{1F980}".chars().collect();

    for _ in 0..50 {
        let text = random_text(&mut rng, &alphabet, 100);
        let table = HuffmanTree::from_text(&text).code_table();

        assert_eq!(CodeTable::parse(&table.serialize()), Ok(table));
    }
}

#[test]
fn single_symbol_input() {
    let huffdata = encode("aaaa").unwrap();

    assert_eq!(huffdata.map(), "a:0");
    let payload = EncodedPayload::parse(huffdata.data()).unwrap();
    assert_eq!(payload.bit_len(), 4);
    assert_eq!(decode(&huffdata).unwrap(), "aaaa");
}

#[test]
fn empty_input() {
    let huffdata = encode("").unwrap();

    assert_eq!(huffdata, Huffdata::new("", ""));
    assert_eq!(decode(&huffdata).unwrap(), "");
}

#[test]
fn corrupt_map_is_rejected() {
    init_logger();
    let valid = encode("hello world").unwrap();

    let err = decode(&Huffdata::new(valid.data(), "not-a-valid-map")).unwrap_err();

    assert!(matches!(err, DecodeError::MapFormat(_)), "{err:?}");
}

#[test]
fn frequency_example() {
    let table = HuffmanTree::from_text("aabbbcc").code_table();

    assert_eq!(table.get('b').map(Code::len), Some(1));
    assert_eq!(table.get('a').map(Code::len), Some(2));
    assert_eq!(table.get('c').map(Code::len), Some(2));

    let payload = EncodedPayload::pack("aabbbcc".chars(), &table).unwrap();
    assert_eq!(payload.bit_len(), 11);
}

#[test]
fn mismatched_map_fails_cleanly() {
    let a = encode("ab").unwrap();
    let b = encode("xyz").unwrap();

    let err = decode(&Huffdata::new(a.data(), b.map())).unwrap_err();

    assert!(matches!(err, DecodeError::InvalidBitSequence(_)), "{err:?}");
}

#[test]
fn decode_leaves_input_untouched() {
    let huffdata = encode("abracadabra").unwrap();
    let before = huffdata.clone();

    decode(&huffdata).unwrap();

    assert_eq!(huffdata, before);
}

#[test]
fn huffdata_persists_as_json() {
    let huffdata = encode("test").unwrap();

    let json = serde_json::to_string(&huffdata).unwrap();
    assert_eq!(json, r#"{"data":"201011000","map":"e:10,s:11,t:0"}"#);

    let restored: Huffdata = serde_json::from_str(&json).unwrap();
    assert_eq!(decode(&restored).unwrap(), "test");
}

#[test]
fn errors_display() {
    let err = decode(&Huffdata::new("", "a:0,a:1")).unwrap_err();

    assert_eq!(
        err.to_string(),
        "malformed code map: symbol 'a' appears more than once"
    );
}
