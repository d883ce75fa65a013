/// Shared signal generators and RNG helpers for the integration tests.
use ndarray::Array2;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::f64::consts::PI;

#[allow(unused)]
pub fn make_rng() -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(42)
}

#[allow(unused)]
/// Independent uniform noise in [−0.5, 0.5) on every channel.
pub fn noise(n_ch: usize, n_t: usize, seed: u64) -> Array2<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    Array2::from_shape_simple_fn((n_ch, n_t), || rng.gen::<f64>() - 0.5)
}

#[allow(unused)]
/// Carrier whose amplitude follows a slow sinusoid, phase-shifted per channel.
///
/// The Hilbert envelope stays above / below its mean for long runs, so the
/// binarized matrix is highly regular.
pub fn slow_bursts(n_ch: usize, n_t: usize) -> Array2<f64> {
    Array2::from_shape_fn((n_ch, n_t), |(c, t)| {
        let t = t as f64;
        let env = 2.0 + (2.0 * PI * t / 250.0 + c as f64 * 0.5).sin();
        env * (2.0 * PI * 100.0 * t / n_t as f64).sin()
    })
}

#[allow(unused)]
/// Channel `c` is `slope_c · t + offset_c`.
pub fn ramps(n_ch: usize, n_t: usize) -> Array2<f64> {
    Array2::from_shape_fn((n_ch, n_t), |(c, t)| (c as f64 + 0.5) * t as f64 + 3.0 * c as f64 - 1.0)
}
