//! Benchmarks for the transcoder cell.
//!
//! Measures baseline performance of:
//! - The region classifier alone
//! - FSS-UTF decode at every sequence length
//! - FSS-UTF encode reads
//! - UTF-16 surrogate pair decode
//! - Full UTF-32 → UTF-8 → UTF-32 round trips

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use utfcell::{Config, Region, TranscoderCell};

const SEQUENCES: &[(&str, &[u8])] = &[
    ("1byte", &[0x41]),
    ("2byte", &[0xC3, 0xA9]),
    ("3byte", &[0xE2, 0x98, 0x83]),
    ("4byte", &[0xF0, 0x9F, 0x8D, 0x8D]),
    ("5byte", &[0xF8, 0x88, 0x80, 0x80, 0x80]),
    ("6byte", &[0xFD, 0xBF, 0xBF, 0xBF, 0xBF, 0xBF]),
];

fn bench_classifier(c: &mut Criterion) {
    let mut group = c.benchmark_group("classifier");
    group.throughput(Throughput::Elements(1));

    group.bench_function("region_of", |b| {
        let mut r: u32 = 0;
        b.iter(|| {
            r = r.wrapping_add(0x9E37_79B9);
            black_box(Region::of(black_box(r)))
        });
    });

    group.bench_function("status_and_props", |b| {
        let mut cell = TranscoderCell::default();
        for byte in [0xE2, 0x98, 0x83] {
            cell.write_utf8(byte);
        }
        b.iter(|| (black_box(cell.status()), black_box(cell.props())));
    });

    group.finish();
}

fn bench_utf8_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("utf8_decode");
    group.throughput(Throughput::Elements(1));

    for (name, bytes) in SEQUENCES {
        group.bench_with_input(BenchmarkId::from_parameter(name), bytes, |b, bytes| {
            b.iter(|| {
                let mut cell = TranscoderCell::default();
                for &byte in *bytes {
                    cell.write_utf8(black_box(byte));
                }
                black_box(cell.register())
            });
        });
    }

    group.finish();
}

fn bench_utf8_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("utf8_encode");
    group.throughput(Throughput::Elements(1));

    for (name, bytes) in SEQUENCES {
        let mut loaded = TranscoderCell::default();
        for &byte in *bytes {
            loaded.write_utf8(byte);
        }
        group.bench_with_input(BenchmarkId::from_parameter(name), &loaded, |b, loaded| {
            b.iter(|| {
                let mut cell = *loaded;
                cell.reset_read();
                let mut last = 0;
                while !cell.bout_eof() {
                    last = cell.read_utf8();
                }
                black_box(last)
            });
        });
    }

    group.finish();
}

fn bench_utf16_pair(c: &mut Criterion) {
    let mut group = c.benchmark_group("utf16");
    group.throughput(Throughput::Elements(1));

    group.bench_function("pair_decode", |b| {
        b.iter(|| {
            let mut cell = TranscoderCell::new(Config {
                chk_range: true,
                big_endian: false,
            });
            for byte in [0x3D, 0xD8, 0x4D, 0xDE] {
                cell.write_utf16(black_box(byte));
            }
            black_box(cell.register())
        });
    });

    group.bench_function("pair_encode", |b| {
        let mut loaded = TranscoderCell::default();
        for byte in [0xF0, 0x9F, 0x8D, 0x8D] {
            loaded.write_utf8(byte);
        }
        b.iter(|| {
            let mut cell = loaded;
            cell.reset_read();
            let mut last = 0;
            while !cell.uout_eof() {
                last = cell.read_utf16();
            }
            black_box(last)
        });
    });

    group.finish();
}

fn bench_round_trip(c: &mut Criterion) {
    let mut group = c.benchmark_group("round_trip");
    group.throughput(Throughput::Elements(1));

    group.bench_function("utf32_to_utf8_to_utf32", |b| {
        b.iter(|| {
            let mut cell = TranscoderCell::default();
            for byte in 0x0001_F34Du32.to_be_bytes() {
                cell.write_utf32(black_box(byte));
            }
            let mut bytes = [0u8; 6];
            let mut n = 0;
            while !cell.bout_eof() {
                bytes[n] = cell.read_utf8();
                n += 1;
            }
            let mut back = TranscoderCell::default();
            for &byte in &bytes[..n] {
                back.write_utf8(byte);
            }
            black_box(back.register())
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_classifier,
    bench_utf8_decode,
    bench_utf8_encode,
    bench_utf16_pair,
    bench_round_trip
);
criterion_main!(benches);
