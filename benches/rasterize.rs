use criterion::{Criterion, black_box, criterion_group, criterion_main};
use rust_ean::{RenderGeometry, Renderer, encode_module_pattern, rasterize};

fn bench_rasterize_compact(c: &mut Criterion) {
    let pattern = encode_module_pattern("4006381333931").expect("valid code");
    let geometry = RenderGeometry::compact();
    c.bench_function("rasterize_compact_339x140", |b| {
        b.iter(|| rasterize(black_box(&pattern), black_box(&geometry)))
    });
}

fn bench_rasterize_captioned(c: &mut Criterion) {
    let pattern = encode_module_pattern("4006381333931").expect("valid code");
    let geometry = RenderGeometry::captioned();
    c.bench_function("rasterize_captioned_339x150", |b| {
        b.iter(|| rasterize(black_box(&pattern), black_box(&geometry)))
    });
}

fn bench_rasterize_large(c: &mut Criterion) {
    let pattern = encode_module_pattern("4006381333931").expect("valid code");
    let geometry = RenderGeometry::compact()
        .with_module_width(16)
        .with_bar_height(1024);
    c.bench_function("rasterize_1808x1024", |b| {
        b.iter(|| rasterize(black_box(&pattern), black_box(&geometry)))
    });
}

fn bench_render_batch(c: &mut Criterion) {
    let renderer = Renderer::with_geometry(RenderGeometry::compact());
    let codes: Vec<String> = (0..64u64).map(|i| format!("{:013}", i * 7919)).collect();
    let refs: Vec<&str> = codes.iter().map(String::as_str).collect();
    c.bench_function("render_batch_64", |b| {
        b.iter(|| renderer.render_batch(black_box(&refs)))
    });
}

criterion_group!(
    benches,
    bench_rasterize_compact,
    bench_rasterize_captioned,
    bench_rasterize_large,
    bench_render_batch
);
criterion_main!(benches);
