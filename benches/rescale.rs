// SPDX-License-Identifier: MPL-2.0
use criterion::{criterion_group, criterion_main, Criterion};
use image_rs::{Rgb, RgbImage};
use page_lens::image_handler::BgrxSurface;
use page_lens::ui::viewer::{CaptureFlag, Viewport};
use std::hint::black_box;

fn page(width: u32, height: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, y| {
        Rgb([(x % 256) as u8, (y % 256) as u8, ((x ^ y) % 256) as u8])
    })
}

fn rescale_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("rescale");

    let mut viewport = Viewport::new(CaptureFlag::new());
    viewport.set_image(page(1700, 2200));

    group.bench_function("downscale_half_high_quality", |b| {
        b.iter(|| {
            let _ = black_box(viewport.set_zoom(black_box(0.5)));
        });
    });

    group.bench_function("upscale_double_normal_quality", |b| {
        b.iter(|| {
            let _ = black_box(viewport.set_zoom(black_box(2.0)));
        });
    });

    group.finish();
}

fn surface_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("surface");

    let (width, height) = (1700_u32, 2200_u32);
    let stride = width as usize * 4 + 64;
    let data = vec![0x7f_u8; stride * height as usize];

    group.bench_function("bgrx_to_rgb_padded_stride", |b| {
        b.iter(|| {
            if let Ok(surface) = BgrxSurface::new(&data, width, height, stride) {
                black_box(surface.to_rgb());
            }
        });
    });

    group.finish();
}

criterion_group!(benches, rescale_benchmark, surface_benchmark);
criterion_main!(benches);
