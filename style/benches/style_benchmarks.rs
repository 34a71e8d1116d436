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

//! Benchmarks for Style rendering

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use termilog_style::Style;

// Benchmark rendering text of increasing size
fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");

    for size in [10, 100, 1000, 10000].iter() {
        group.throughput(Throughput::Bytes(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            let text = "A".repeat(size);
            let style = Style::FG_RED.with_bold(true).with_underline(true);

            b.iter(|| black_box(style.render(black_box(text.as_str()))));
        });
    }
    group.finish();
}

// Benchmark the unstyled fast path
fn bench_render_plain(c: &mut Criterion) {
    c.bench_function("render_plain", |b| {
        b.iter(|| black_box(Style::NORMAL.render(black_box("Hello with Normal Black"))));
    });
}

// Benchmark deriving styles through the builder methods
fn bench_derive(c: &mut Criterion) {
    c.bench_function("derive", |b| {
        b.iter(|| {
            black_box(
                black_box(Style::FG_RED)
                    .with_bold(true)
                    .with_underline(true)
                    .with_foreground_color(Style::FG_MAGENTA),
            )
        });
    });
}

criterion_group!(benches, bench_render, bench_render_plain, bench_derive);
criterion_main!(benches);
