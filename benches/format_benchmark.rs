//! Benchmarks for reportdoc formatting performance.
//!
//! Run with: cargo bench
//!
//! These benchmarks format synthetic reports of increasing size.

use chrono::{TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use reportdoc::{format_batch, split_sections, to_commands, RenderOptions, ReportInput};

/// Creates a synthetic report with `paragraphs` paragraphs per section.
fn create_report(paragraphs: usize) -> String {
    let mut text = String::from("Title: Benchmark Report\n");

    for heading in ["Abstract", "Introduction", "Main Body", "Conclusion"] {
        text.push_str(heading);
        text.push('\n');
        for i in 0..paragraphs {
            text.push_str(&format!(
                "Paragraph {} has **bold {}** spans and plain text.\n* bullet {} with **emphasis**\n\n",
                i, i, i
            ));
        }
    }

    text.push_str("References\n[1] Source\n[2] Study\n");
    text
}

fn input(text: &str) -> ReportInput {
    ReportInput::new(text).with_generated_at(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap())
}

fn bench_split(c: &mut Criterion) {
    let mut group = c.benchmark_group("split_sections");

    for size in [10, 100, 1000] {
        let text = create_report(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &text, |b, text| {
            b.iter(|| split_sections(black_box(text)))
        });
    }

    group.finish();
}

fn bench_format(c: &mut Criterion) {
    let options = RenderOptions::default();
    let mut group = c.benchmark_group("to_commands");

    for size in [10, 100, 1000] {
        let request = input(&create_report(size));
        group.bench_with_input(BenchmarkId::from_parameter(size), &request, |b, request| {
            b.iter(|| to_commands(black_box(request), &options))
        });
    }

    group.finish();
}

fn bench_batch(c: &mut Criterion) {
    let options = RenderOptions::default();
    let requests: Vec<ReportInput> = (0..32).map(|_| input(&create_report(50))).collect();

    c.bench_function("format_batch_32", |b| {
        b.iter(|| format_batch(black_box(&requests), &options))
    });
}

criterion_group!(benches, bench_split, bench_format, bench_batch);
criterion_main!(benches);
