//
// Copyright 2017-2026 Hans W. Uhlig. All Rights Reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//


//! Benchmarks for log line encoding and level filtering

use bytes::BytesMut;
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use termilog_logger::{
    ColorMode, DEFAULT_TIME_FORMAT, LogLevel, LogLineEncoder, LogRecord, Logger, LoggerConfig,
    LoggerDefaults,
};
use tokio_util::codec::Encoder;

// Benchmark encoding messages of increasing size
fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");

    for size in [10, 100, 1000, 10000].iter() {
        group.throughput(Throughput::Bytes(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            let message = "A".repeat(size);
            let mut encoder = LogLineEncoder::new();
            let mut buffer = BytesMut::with_capacity(size + 64);

            b.iter(|| {
                buffer.clear();
                let record =
                    LogRecord::now(LogLevel::Warn, DEFAULT_TIME_FORMAT, "bench: ", &message)
                        .with_color(true);
                encoder.encode(black_box(record), &mut buffer).unwrap();
                black_box(buffer.len())
            });
        });
    }
    group.finish();
}

// Benchmark a call rejected by the minimum level
fn bench_filtered(c: &mut Criterion) {
    let mut logger = Logger::with_defaults(
        std::io::sink(),
        LoggerConfig::default().with_min_level(LogLevel::Error),
        &LoggerDefaults::builtin(),
    );

    c.bench_function("filtered", |b| {
        b.iter(|| logger.debug(black_box("never written")));
    });
}

// Benchmark a full log call into a discarding writer
fn bench_log(c: &mut Criterion) {
    let mut logger = Logger::with_defaults(
        std::io::sink(),
        LoggerConfig::default()
            .with_name("bench: ")
            .with_color_mode(ColorMode::Always),
        &LoggerDefaults::builtin(),
    );

    c.bench_function("log", |b| {
        b.iter(|| logger.error(black_box("Hello from ERROR level")));
    });
}

criterion_group!(benches, bench_encode, bench_filtered, bench_log);
criterion_main!(benches);
