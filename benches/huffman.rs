use criterion::{black_box, criterion_group, criterion_main, Criterion};
use lipsum::lipsum;
use wasm_huffman::{decode, encode, HuffmanTree};

fn huffman_tree(c: &mut Criterion) {
    let input = lipsum(2048);

    c.bench_function("huffman tree build", |b| {
        b.iter(|| HuffmanTree::from_text(black_box(&input)).code_table())
    });
}

fn huffman_encode(c: &mut Criterion) {
    let input = lipsum(2048);

    c.bench_function("huffman encode", |b| b.iter(|| encode(black_box(&input))));
}

fn huffman_decode(c: &mut Criterion) {
    let input = lipsum(4096);
    let huffdata = encode(&input).unwrap();

    c.bench_function("huffman decode", |b| {
        b.iter(|| decode(black_box(&huffdata)))
    });
}

criterion_group!(benches, huffman_tree, huffman_encode, huffman_decode);
criterion_main!(benches);
