//! Linear detrending and baseline removal.
//!
//! `detrend_and_center`: per channel, independently:
//!   `MeanFirst`:    x ← detrend(x − mean(x))
//!   `DetrendFirst`: x ← detrend(x) − mean(x)      (mean of the *original* channel)
//!
//! `detrend` is a least-squares line removal, matching `scipy.signal.detrend(type='linear')`.
//! LZc and SCE use `MeanFirst`; ACE uses `DetrendFirst`.  The two are not
//! interchangeable: after `DetrendFirst` the channel is offset by `−mean(x)`.
use ndarray::{Array1, Array2, ArrayView1};

use crate::error::{check_signal, ComplexityResult};

/// Order of mean subtraction relative to linear detrending.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CenterOrder {
    /// Subtract the channel mean, then remove the linear trend.
    MeanFirst,
    /// Remove the linear trend, then subtract the original channel mean.
    DetrendFirst,
}

/// Detrend and baseline-centre every channel of `data` ([C, T]).
///
/// Returns a new matrix; `data` is left untouched.
///
/// # Errors
///
/// `InvalidInput` if the matrix is empty or contains NaN/Inf.
pub fn detrend_and_center(data: &Array2<f64>, order: CenterOrder) -> ComplexityResult<Array2<f64>> {
    check_signal(data, 1)?;

    let mut out = Array2::<f64>::zeros(data.dim());
    for (row, mut dst) in data.rows().into_iter().zip(out.rows_mut()) {
        let mean = row.mean().unwrap_or(0.0);
        let processed = match order {
            CenterOrder::MeanFirst => detrend(row.mapv(|v| v - mean).view()),
            CenterOrder::DetrendFirst => detrend(row).mapv(|v| v - mean),
        };
        dst.assign(&processed);
    }
    Ok(out)
}

/// Remove the least-squares line `a·t + b` from a single series.
///
/// A series of length 1 (or any series whose best-fit line is the series
/// itself) detrends to all zeros.
pub fn detrend(x: ArrayView1<f64>) -> Array1<f64> {
    let n = x.len();
    if n == 0 {
        return Array1::zeros(0);
    }
    let t_mean = (n as f64 - 1.0) / 2.0;
    let x_mean = x.mean().unwrap_or(0.0);

    let (mut sxy, mut sxx) = (0.0_f64, 0.0_f64);
    for (t, &v) in x.iter().enumerate() {
        let dt = t as f64 - t_mean;
        sxy += dt * (v - x_mean);
        sxx += dt * dt;
    }
    let slope = if sxx > 0.0 { sxy / sxx } else { 0.0 };

    Array1::from_iter(
        x.iter()
            .enumerate()
            .map(|(t, &v)| v - (x_mean + slope * (t as f64 - t_mean))),
    )
}
