use std::{hint::black_box, time::Duration};

use criterion::{criterion_group, criterion_main, Criterion};
use rand::{rngs::StdRng, SeedableRng};
use ratatui::{buffer::Buffer, layout::Rect, style::Style, widgets::Widget};
use studynook::{
    domain::particle::generate_particles,
    presentation::widgets::particle_field::{ParticleField, ParticleKind},
};

fn benchmark(c: &mut Criterion) {
    c.bench_function("generate-20", |b| {
        let mut rng = StdRng::seed_from_u64(42);
        b.iter(|| generate_particles(&mut rng, black_box(20)))
    });

    c.bench_function("generate-60", |b| {
        let mut rng = StdRng::seed_from_u64(42);
        b.iter(|| generate_particles(&mut rng, black_box(60)))
    });

    let particles = generate_particles(&mut StdRng::seed_from_u64(7), 60);
    let area = Rect::new(0, 0, 120, 40);
    c.bench_function("render-field-60", |b| {
        b.iter(|| {
            let mut buf = Buffer::empty(area);
            ParticleField::new(black_box(&particles), ParticleKind::Dust, Style::default())
                .elapsed(Duration::from_millis(3500))
                .render(area, &mut buf);
            buf
        })
    });
}

criterion_group!(benches, benchmark);
criterion_main!(benches);
