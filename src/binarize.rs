//! Amplitude-envelope binarization.
//!
//! For each channel independently:
//!   env[t]  = |hilbert(x)[t]|
//!   thr     = mean(env) or median(env)
//!   bit[t]  = 1 if env[t] ≥ thr else 0
//!
//! The threshold is per channel, never global.  Channels are processed in
//! parallel; the result does not depend on scheduling.
use ndarray::Array2;
use rayon::prelude::*;

use crate::config::ThresholdRule;
use crate::error::{check_signal, ComplexityResult};
use crate::hilbert::instantaneous_amplitude;

/// A 0/1 matrix of shape [C, T].
pub type BinaryMatrix = Array2<u8>;

/// Binarize every channel of `data` ([C, T]) against its own amplitude threshold.
///
/// # Errors
///
/// `InvalidInput` on an empty matrix or NaN/Inf samples.
pub fn binarize(data: &Array2<f64>, rule: ThresholdRule) -> ComplexityResult<BinaryMatrix> {
    check_signal(data, 1)?;
    let (n_ch, n_t) = data.dim();

    let rows: Vec<Vec<u8>> = (0..n_ch)
        .into_par_iter()
        .map(|ch| {
            let x: Vec<f64> = data.row(ch).to_vec();
            binarize_1d(&x, rule)
        })
        .collect();

    let mut out = BinaryMatrix::zeros((n_ch, n_t));
    for (mut dst, bits) in out.rows_mut().into_iter().zip(rows) {
        dst.assign(&ndarray::ArrayView1::from(&bits));
    }
    Ok(out)
}

/// Binarize a single series against the mean/median of its Hilbert envelope.
pub fn binarize_1d(x: &[f64], rule: ThresholdRule) -> Vec<u8> {
    let env = instantaneous_amplitude(x);
    let thr = match rule {
        ThresholdRule::Mean => mean(&env),
        ThresholdRule::Median => median(&env),
    };
    env.iter().map(|&a| u8::from(a >= thr)).collect()
}

fn mean(x: &[f64]) -> f64 {
    if x.is_empty() {
        return 0.0;
    }
    x.iter().sum::<f64>() / x.len() as f64
}

/// Median with the midpoint convention for even lengths (as `numpy.median`).
fn median(x: &[f64]) -> f64 {
    if x.is_empty() {
        return 0.0;
    }
    let mut sorted = x.to_vec();
    sorted.sort_by(f64::total_cmp);
    let n = sorted.len();
    if n % 2 == 1 {
        sorted[n / 2]
    } else {
        0.5 * (sorted[n / 2 - 1] + sorted[n / 2])
    }
}
