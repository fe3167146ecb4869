//! Benchmarks for layered bell rendering.

use std::collections::VecDeque;
use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use saavy_repeater::{
    player::{Gong, GongPitches, Strike},
    synth::Carillon,
    Tone,
};

use crate::BLOCK_SIZES;

fn tone(gong: Gong, strike: Strike) -> Tone {
    Tone {
        gong,
        strike,
        frequency: GongPitches::WIRE_GONG.frequency(gong),
    }
}

pub fn bench_carillon(c: &mut Criterion) {
    let mut group = c.benchmark_group("chime/carillon");

    for &size in BLOCK_SIZES {
        let mut buffer = vec![0.0f32; size];

        // A single hour strike ringing
        let mut single = Carillon::new(48_000.0, 16, VecDeque::from([tone(Gong::Low, Strike::Hour)]));
        group.bench_with_input(BenchmarkId::new("one_bell", size), &size, |b, _| {
            b.iter(|| single.render_block(black_box(&mut buffer)))
        });

        // Worst case: every voice ringing at once
        let tones: VecDeque<Tone> = (0..16)
            .map(|i| {
                if i % 2 == 0 {
                    tone(Gong::High, Strike::Quarter)
                } else {
                    tone(Gong::Low, Strike::Quarter)
                }
            })
            .collect();
        let mut full = Carillon::new(48_000.0, 16, tones);
        group.bench_with_input(BenchmarkId::new("full_pool", size), &size, |b, _| {
            b.iter(|| full.render_block(black_box(&mut buffer)))
        });
    }

    group.finish();
}
