//! Benchmarks for strike sequencing.

use std::hint::black_box;

use criterion::Criterion;
use saavy_repeater::ChimeSequencer;

pub fn bench_sequencer(c: &mut Criterion) {
    let mut group = c.benchmark_group("chime/sequencer");

    // Longest read-out: 12 hours, 3 quarters, 14 minutes
    group.bench_function("longest", |b| {
        b.iter(|| ChimeSequencer::compute(black_box(12), black_box(59)))
    });

    group.bench_function("whole_day", |b| {
        b.iter(|| {
            for hour in 0..24 {
                for minute in 0..60 {
                    black_box(ChimeSequencer::compute(black_box(hour), black_box(minute)).ok());
                }
            }
        })
    });

    group.finish();
}
