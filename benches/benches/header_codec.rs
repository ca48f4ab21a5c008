//! Header decode/encode benchmarks
//!
//! Run with: cargo bench --bench header_codec

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use jfif_core::*;
use jfif_decoder::JfifDecoder;
use jfif_encoder::JfifEncoder;
use jfif_headers::JfifHeader;

fn create_test_file(trailing_len: usize) -> Vec<u8> {
    let header = JfifHeader::new_jfif(Version::new(1, 2), DensityUnits::DotsPerInch, 300, 300);
    let mut data = header.to_bytes().to_vec();
    data.extend((0..trailing_len).map(|i| (i % 251) as u8));
    data
}

fn bench_decode(c: &mut Criterion) {
    let data = create_test_file(0);

    c.bench_function("parse header", |b| {
        b.iter(|| JfifHeader::parse(black_box(&data)).unwrap())
    });

    c.bench_function("decoder with trailing", |b| {
        let mut decoder = JfifDecoder::new();
        b.iter(|| {
            let (header, trailing) = decoder.decode_with_trailing(black_box(&data)).unwrap();
            (header, trailing.len())
        })
    });
}

fn bench_encode_by_trailing_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("Encode by Trailing Size");
    let encoder = JfifEncoder::default();
    let header = JfifHeader::default();

    for &size in &[0usize, 1024, 64 * 1024, 1024 * 1024] {
        let trailing = create_test_file(size)[20..].to_vec();

        group.throughput(Throughput::Bytes((20 + size) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| {
                let mut out = Vec::with_capacity(20 + size);
                encoder
                    .encode(black_box(&header), black_box(&trailing), &mut out)
                    .unwrap();
                out
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_decode, bench_encode_by_trailing_size);
criterion_main!(benches);
