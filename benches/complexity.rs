use std::hint::black_box;
use criterion::{criterion_group, criterion_main, Criterion};
use exg_complexity::{
    amplitude_coalition_entropy, lempel_ziv_complexity, lzw_dictionary_size,
    synchrony_coalition_entropy, ThresholdRule,
};
use ndarray::Array2;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

fn recording(n_ch: usize, n_t: usize) -> Array2<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    Array2::from_shape_simple_fn((n_ch, n_t), || rng.gen::<f64>() - 0.5)
}

fn bench_lzw(c: &mut Criterion) {
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let bits: Vec<u8> = (0..100_000).map(|_| if rng.gen::<bool>() { b'1' } else { b'0' }).collect();
    c.bench_function("lzw_dictionary_size 100k bits", |b| {
        b.iter(|| black_box(lzw_dictionary_size(black_box(&bits))))
    });
}

fn bench_metrics(c: &mut Criterion) {
    let data = recording(16, 2560);
    c.bench_function("LZc [16×2560]", |b| {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        b.iter(|| lempel_ziv_complexity(black_box(&data), ThresholdRule::Mean, &mut rng).unwrap())
    });
    c.bench_function("ACE [16×2560]", |b| {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        b.iter(|| amplitude_coalition_entropy(black_box(&data), ThresholdRule::Mean, &mut rng).unwrap())
    });
    c.bench_function("SCE [16×2560]", |b| {
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        b.iter(|| synchrony_coalition_entropy(black_box(&data), 0.8, false, &mut rng).unwrap())
    });
}

criterion_group!(benches, bench_lzw, bench_metrics);
criterion_main!(benches);
