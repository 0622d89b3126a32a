//! Benchmarks for filelist parsing and loading

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use filelist::codec::parse_line;
use filelist::{Config, FileList, LineEnding};
use tempfile::TempDir;

fn codec_benchmarks(c: &mut Criterion) {
    c.bench_function("parse_line/with_comment", |b| {
        b.iter(|| parse_line(black_box("some.example.value\t//a trailing comment")))
    });

    c.bench_function("parse_line/plain", |b| {
        b.iter(|| parse_line(black_box("  some.example.value  ")))
    });
}

fn load_benchmarks(c: &mut Criterion) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("bench.txt");

    let config = Config::builder().line_ending(LineEnding::CrLf).build();
    let mut list = FileList::with_config(config);
    for i in 0..10_000 {
        list.add(format!("value-{}", i), if i % 3 == 0 { "tagged" } else { "" });
    }
    list.save(&path).unwrap();

    c.bench_function("load/10k_items", |b| {
        b.iter(|| FileList::load(black_box(&path)).unwrap())
    });
}

criterion_group!(benches, codec_benchmarks, load_benchmarks);
criterion_main!(benches);
