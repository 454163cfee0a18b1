//! Benchmarks for live output resolution.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use livetrack::prelude::*;

fn live_benchmark(c: &mut Criterion) {
    let output = Output::new("logs").with_live(LiveOutput::Configured { summary: true });
    c.bench_function("summary_path_info", |b| {
        b.iter(|| summary_path_info(black_box(&output)))
    });

    let revisions: Vec<String> = (0..16).map(|i| format!("v{i}")).collect();
    c.bench_function("revision_request", |b| {
        b.iter(|| RevisionRequest::from_revisions(Some(black_box(revisions.as_slice()))).effective())
    });
}

criterion_group!(benches, live_benchmark);
criterion_main!(benches);
