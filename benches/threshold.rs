use criterion::{Criterion, black_box, criterion_group, criterion_main};
use image::{GrayImage, Luma};
use vision_tour::models::{AdaptiveMethod, ThresholdKind};
use vision_tour::utils::threshold::{adaptive_threshold, otsu_level, threshold};

fn page(width: u32, height: u32) -> GrayImage {
    GrayImage::from_fn(width, height, |x, y| {
        if x % 20 == 0 || y % 20 == 0 {
            Luma([20])
        } else {
            Luma([(100 + (x + y) % 120) as u8])
        }
    })
}

fn bench_threshold_binary_medium(c: &mut Criterion) {
    let gray = page(640, 480);
    c.bench_function("threshold_binary_640x480", |b| {
        b.iter(|| threshold(black_box(&gray), black_box(10), 255, ThresholdKind::Binary))
    });
}

fn bench_otsu_level_medium(c: &mut Criterion) {
    let gray = page(640, 480);
    c.bench_function("otsu_level_640x480", |b| b.iter(|| otsu_level(black_box(&gray))));
}

fn bench_adaptive_mean_medium(c: &mut Criterion) {
    let gray = page(640, 480);
    c.bench_function("adaptive_mean_640x480", |b| {
        b.iter(|| {
            adaptive_threshold(
                black_box(&gray),
                255,
                AdaptiveMethod::Mean,
                ThresholdKind::Binary,
                black_box(5),
                black_box(4.0),
            )
        })
    });
}

fn bench_adaptive_gaussian_medium(c: &mut Criterion) {
    let gray = page(640, 480);
    c.bench_function("adaptive_gaussian_640x480", |b| {
        b.iter(|| {
            adaptive_threshold(
                black_box(&gray),
                255,
                AdaptiveMethod::Gaussian,
                ThresholdKind::Binary,
                black_box(5),
                black_box(4.0),
            )
        })
    });
}

criterion_group!(
    benches,
    bench_threshold_binary_medium,
    bench_otsu_level_medium,
    bench_adaptive_mean_medium,
    bench_adaptive_gaussian_medium
);
criterion_main!(benches);
