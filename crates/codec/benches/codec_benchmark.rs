//! Codec throughput benchmarks
//!
//! Run with: cargo bench -p bytecodec --bench codec_benchmark

use bytecodec::{hex, long, text, UnmappablePolicy};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

const SIZES: [usize; 4] = [8, 64, 1024, 16384];

fn sample_bytes(size: usize) -> Vec<u8> {
    (0..size).map(|i| (i * 31 % 256) as u8).collect()
}

// ============================================
// Hex Benchmarks
// ============================================

fn bench_hex(c: &mut Criterion) {
    let mut group = c.benchmark_group("hex");

    for size in SIZES.iter() {
        let bytes = sample_bytes(*size);
        let encoded = hex::bytes_to_hex(&bytes).unwrap_or_default();
        group.throughput(Throughput::Bytes(*size as u64));

        group.bench_with_input(BenchmarkId::new("encode", size), &bytes, |b, bytes| {
            b.iter(|| hex::bytes_to_hex(black_box(bytes)))
        });
        group.bench_with_input(BenchmarkId::new("decode", size), &encoded, |b, encoded| {
            b.iter(|| hex::hex_to_bytes(black_box(encoded)))
        });
    }

    group.finish();
}

// ============================================
// Text Benchmarks
// ============================================

fn bench_text(c: &mut Criterion) {
    let mut group = c.benchmark_group("text");

    for size in SIZES.iter() {
        let bytes = sample_bytes(*size);
        let decoded = text::bytes_to_text(&bytes);
        group.throughput(Throughput::Bytes(*size as u64));

        group.bench_with_input(BenchmarkId::new("encode", size), &decoded, |b, decoded| {
            b.iter(|| text::text_to_bytes(black_box(decoded), UnmappablePolicy::Replace))
        });
        group.bench_with_input(BenchmarkId::new("decode", size), &bytes, |b, bytes| {
            b.iter(|| text::bytes_to_text(black_box(bytes)))
        });
    }

    group.finish();
}

fn bench_long(c: &mut Criterion) {
    c.bench_function("long_roundtrip", |b| {
        b.iter(|| long::bytes_to_long(&long::long_to_bytes(black_box(-1234567890123))))
    });
}

criterion_group!(benches, bench_hex, bench_text, bench_long);
criterion_main!(benches);
