//! Benchmarks for the per-frame physics step.
//!
//! Run with: `cargo bench`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::{Vec2, Vec4};

use lume::input::PointerState;
use lume::physics;
use lume::Particle;

/// A synthetic field shaped like a filled logo rectangle.
fn synthetic_field(count: usize) -> Vec<Particle> {
    let columns = 300;
    (0..count)
        .map(|i| {
            let x = (i % columns) as f32;
            let y = (i / columns) as f32;
            let depth = ((i * 7) % 41) as f32 - 20.0;
            Particle::at_rest(
                Vec2::new(x, y),
                depth,
                Vec4::new(1.0, 0.5, 0.1, 1.0),
                1.5,
            )
        })
        .collect()
}

fn bench_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("physics_step");

    for &count in &[1_000usize, 10_000, 50_000] {
        group.bench_with_input(BenchmarkId::new("idle_pointer", count), &count, |b, &n| {
            let mut particles = synthetic_field(n);
            let pointer = PointerState::new();
            b.iter(|| {
                physics::step(black_box(&mut particles), &pointer);
            })
        });

        group.bench_with_input(BenchmarkId::new("hovering_pointer", count), &count, |b, &n| {
            let mut particles = synthetic_field(n);
            // Cursor parked over the middle of the field so the repulsion
            // branch runs for a realistic share of particles.
            let pointer = PointerState::hovering(Vec2::new(150.0, 20.0));
            b.iter(|| {
                physics::step(black_box(&mut particles), &pointer);
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_step);
criterion_main!(benches);
