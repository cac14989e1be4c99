// AlphaReader - streaming, delimiter-configurable record reader/writer
//
// Copyright (c) 2026 AlphaReader contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Scanning throughput benchmarks.
//!
//! - Chunk size sweep over the legacy cp1252 layout
//! - Transform chain overhead (raw vs trim+parse_int)
//! - Comparison against the `csv` crate on equivalent comma/newline data

use alphareader::{transforms, RecordScanner, ScanConfig, Transform};
use alphareader_bench::{generate_csv_people, generate_legacy_people, generate_numeric, sizes};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::io::Cursor;

fn utf8_config() -> ScanConfig {
    ScanConfig {
        delimiter: ',',
        terminator: '\n',
        encoding: "utf-8".to_string(),
        ..Default::default()
    }
}

fn scan_all(data: &[u8], config: ScanConfig) -> usize {
    RecordScanner::with_config(Cursor::new(data), config)
        .expect("valid config")
        .map(|r| r.expect("valid record").len())
        .sum()
}

fn bench_chunk_sizes(c: &mut Criterion) {
    let data = generate_legacy_people(sizes::MEDIUM);
    let mut group = c.benchmark_group("scan/chunk_size");
    group.throughput(Throughput::Bytes(data.len() as u64));
    for chunk_size in [512usize, 1024, 4096, 8192, 16384] {
        group.bench_with_input(
            BenchmarkId::from_parameter(chunk_size),
            &chunk_size,
            |b, &chunk_size| {
                b.iter(|| {
                    let config = ScanConfig {
                        chunk_size,
                        ..Default::default()
                    };
                    black_box(scan_all(&data, config))
                });
            },
        );
    }
    group.finish();
}

fn bench_dataset_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("scan/records");
    for records in [sizes::SMALL, sizes::MEDIUM, sizes::LARGE] {
        let data = generate_legacy_people(records);
        group.throughput(Throughput::Bytes(data.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(records), &data, |b, data| {
            b.iter(|| black_box(scan_all(data, ScanConfig::default())));
        });
    }
    group.finish();
}

fn bench_transform_overhead(c: &mut Criterion) {
    let data = generate_numeric(sizes::MEDIUM);
    let mut group = c.benchmark_group("scan/transform");
    group.throughput(Throughput::Bytes(data.len() as u64));

    group.bench_function("raw", |b| {
        b.iter(|| black_box(scan_all(&data, utf8_config())));
    });

    group.bench_function("trim_parse_int", |b| {
        b.iter(|| {
            let chain =
                Transform::chain(vec![transforms::trim(), transforms::parse_int()])
                    .expect("non-empty chain");
            let scanner = RecordScanner::with_config(Cursor::new(&data[..]), utf8_config())
                .expect("valid config")
                .with_transform(chain);
            let fields: usize = scanner.map(|r| r.expect("valid record").len()).sum();
            black_box(fields)
        });
    });

    group.finish();
}

fn bench_vs_csv_crate(c: &mut Criterion) {
    let data = generate_csv_people(sizes::MEDIUM);
    let mut group = c.benchmark_group("scan/vs_csv_crate");
    group.throughput(Throughput::Bytes(data.len() as u64));

    group.bench_function("alphareader", |b| {
        b.iter(|| black_box(scan_all(&data, utf8_config())));
    });

    group.bench_function("csv_crate", |b| {
        b.iter(|| {
            let mut reader = csv::ReaderBuilder::new()
                .has_headers(false)
                .from_reader(Cursor::new(&data[..]));
            let fields: usize = reader
                .records()
                .map(|r| r.expect("valid record").len())
                .sum();
            black_box(fields)
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_chunk_sizes,
    bench_dataset_sizes,
    bench_transform_overhead,
    bench_vs_csv_crate
);
criterion_main!(benches);
