use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_torus::core::{FrameBuffers, FrameRenderer};
use tui_torus::term::{FrameBuffer, TorusView, Viewport};
use tui_torus::types::{Orientation, TorusConfig};

fn bench_compute(c: &mut Criterion) {
    let config = TorusConfig::default();
    let renderer = FrameRenderer::new(&config);
    let mut buffers = FrameBuffers::new(config.grid_size);

    c.bench_function("compute_frame_200x200", |b| {
        b.iter(|| {
            renderer.compute(black_box(Orientation::new(1.2, 0.4)), &mut buffers);
        })
    });
}

fn bench_sweep_only(c: &mut Criterion) {
    let config = TorusConfig::default();
    let renderer = FrameRenderer::new(&config);

    c.bench_function("sample_sweep", |b| {
        b.iter(|| {
            renderer
                .samples(black_box(Orientation::new(1.2, 0.4)))
                .filter(|s| s.luminance > 0.0)
                .count()
        })
    });
}

fn bench_view(c: &mut Criterion) {
    let config = TorusConfig::default().with_size_overlay(true);
    let renderer = FrameRenderer::new(&config);
    let view = TorusView::new(&config);
    let viewport = Viewport::new(160, 50);
    let mut buffers = FrameBuffers::new(config.grid_size);
    let mut fb = FrameBuffer::new(viewport.width, viewport.height);
    renderer.compute(config.initial, &mut buffers);

    c.bench_function("view_render_into_160x50", |b| {
        b.iter(|| {
            view.render_into(black_box(&buffers), viewport, &mut fb);
        })
    });
}

criterion_group!(benches, bench_compute, bench_sweep_only, bench_view);
criterion_main!(benches);
