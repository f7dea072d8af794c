// Copyright 2025 the Tinct Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion};
use std::hint::black_box;
use tinct_cpu::color::Rgba8;
use tinct_cpu::kurbo::Point;
use tinct_cpu::{Pixmap, RenderContext, RenderSettings};

const FROM: Rgba8 = Rgba8 {
    r: 255,
    g: 0,
    b: 0,
    a: 255,
};
const TO: Rgba8 = Rgba8 {
    r: 0,
    g: 0,
    b: 255,
    a: 0,
};

pub fn radial(c: &mut Criterion) {
    let mut g = c.benchmark_group("radial");

    for num_threads in [0, 1, 4, 8] {
        let ctx = RenderContext::new_with(RenderSettings { num_threads }).unwrap();

        for size in [64_u16, 512, 1024] {
            let mut pixmap = Pixmap::new(size, size);
            let center = Point::new(f64::from(size) / 3.0, f64::from(size) / 2.0);

            g.bench_with_input(
                BenchmarkId::new(format!("{num_threads}_threads"), size),
                &size,
                |b, _| {
                    b.iter(|| {
                        ctx.draw_radial_gradient(&mut pixmap, black_box(center), FROM, TO)
                            .unwrap();
                    });
                },
            );
        }
    }
}
