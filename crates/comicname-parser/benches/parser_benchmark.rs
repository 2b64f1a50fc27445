//! Benchmarks for comicname-parser.
//!
//! Run with: cargo bench

use comicname_parser::{parse_filename, tokenize};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

const SIMPLE_SAMPLES: &[&str] = &[
    "Wonder Woman v2 #49 (1991) (DC) (Digital).cbr",
    "X-Men-V1-067.cbr",
    "Batman Annual #1 (of 2) (1987).cbz",
    "Plastic Man v1 #002 (1942).cbz",
];

const COMPLEX_SAMPLES: &[&str] = &[
    "Aquaman 80th Anniversary 100-Page Super Spectacular (2021) #001 (2021) (Digital) (BlackManta-Empire).cbz",
    "Cory Doctorow's Futuristic Tales of the Here and Now: Anda's Game #001 (2007).cbz",
    "Star Wars - War of the Bounty Hunters - IG-88 #1 (2021) (Digital) (Kileko-Empire).cbz",
    "The Magic Order 2 #06 (2022) (Digital) (Zone-Empire)[__913302__].cbz",
    "Foobar-Man Annual #121 - The Wrath of Foobar-Man, Part 1 of 2.cbz",
];

fn bench_tokenize(c: &mut Criterion) {
    let mut group = c.benchmark_group("tokenize");

    group.bench_function("simple", |b| {
        b.iter(|| tokenize(black_box("Wonder Woman v2 #49 (1991) (DC) (Digital).cbr")))
    });

    group.throughput(Throughput::Elements(COMPLEX_SAMPLES.len() as u64));
    group.bench_function("complex", |b| {
        b.iter(|| {
            for sample in COMPLEX_SAMPLES {
                black_box(tokenize(black_box(sample)));
            }
        })
    });

    group.finish();
}

fn bench_parse_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_batch");

    group.throughput(Throughput::Elements(SIMPLE_SAMPLES.len() as u64));
    group.bench_function("simple", |b| {
        b.iter(|| {
            for sample in SIMPLE_SAMPLES {
                let _ = black_box(parse_filename(black_box(sample)));
            }
        })
    });

    group.throughput(Throughput::Elements(COMPLEX_SAMPLES.len() as u64));
    group.bench_function("complex", |b| {
        b.iter(|| {
            for sample in COMPLEX_SAMPLES {
                let _ = black_box(parse_filename(black_box(sample)));
            }
        })
    });

    group.finish();
}

fn bench_input_length(c: &mut Criterion) {
    let mut group = c.benchmark_group("input_length");

    let inputs = [
        ("short", "Goblin (2021).cbz"),
        ("medium", "Amazing Spider-Man #078.BEY (2022) (Digital) (Zone-Empire).cbz"),
        (
            "long",
            "Elephantmen 2259 #008 - Simple Truth 03 (of 06) (2021) (Digital) (Zone-Empire) [c2c] {repaired}.cbz",
        ),
    ];

    for (name, input) in inputs {
        group.throughput(Throughput::Bytes(input.len() as u64));
        group.bench_with_input(BenchmarkId::new("parse", name), input, |b, input| {
            b.iter(|| parse_filename(black_box(input)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_tokenize, bench_parse_batch, bench_input_length);

criterion_main!(benches);
