//! Pairwise instantaneous-phase synchrony.
//!
//! For channels i ≠ j with Hilbert phases φ_i, φ_j:
//!   d[t]    = |φ_i[t] − φ_j[t]|            ∈ [0, 2π)
//!   d[t]    = 2π − d[t]   if d[t] > π      (wrap into [0, π])
//!   s[t]    = 1 if d[t] < threshold else 0
//!
//! The synchrony tensor has shape (C, C−1, T); slice `i` lists the partners
//! of channel `i` in ascending channel order with `i` itself skipped.
//! SCE only ever needs one slice at a time, so [`PhaseSet::channel_slice`]
//! builds slices on demand instead of holding the full tensor.
use std::f64::consts::PI;

use ndarray::{Array2, Array3};
use rayon::prelude::*;

use crate::binarize::BinaryMatrix;
use crate::error::{check_signal, ComplexityError, ComplexityResult};
use crate::hilbert::instantaneous_phase;

/// Shape (C, C−1, T), entries in {0, 1}.
pub type SynchronyTensor = Array3<u8>;

/// Default synchrony threshold in radians.
pub const DEFAULT_SYNC_THRESHOLD: f64 = 0.8;

/// Wrap an absolute phase difference from `[0, 2π)` into `[0, π]`.
#[inline]
pub fn wrap_phase_difference(d: f64) -> f64 {
    if d > PI {
        2.0 * PI - d
    } else {
        d
    }
}

/// Binary synchrony series between two phase series.
///
/// # Errors
///
/// `InvalidInput` if the two series differ in length.
pub fn phase_synchrony(p1: &[f64], p2: &[f64], threshold: f64) -> ComplexityResult<Vec<u8>> {
    if p1.len() != p2.len() {
        return Err(ComplexityError::invalid(format!(
            "phase series differ in length: {} vs {}",
            p1.len(),
            p2.len()
        )));
    }
    Ok(p1
        .iter()
        .zip(p2)
        .map(|(a, b)| u8::from(wrap_phase_difference((a - b).abs()) < threshold))
        .collect())
}

/// Instantaneous phases of every channel, extracted once and shared by all pairs.
#[derive(Debug, Clone)]
pub struct PhaseSet {
    phases: Vec<Vec<f64>>,
    threshold: f64,
}

impl PhaseSet {
    /// Extract phases for each channel of `data` ([C, T]) in parallel.
    ///
    /// # Errors
    ///
    /// `InvalidInput` on fewer than 2 channels, an empty matrix, NaN/Inf
    /// samples, or a non-positive/non-finite threshold.
    pub fn new(data: &Array2<f64>, threshold: f64) -> ComplexityResult<Self> {
        check_signal(data, 2)?;
        if !threshold.is_finite() || threshold <= 0.0 {
            return Err(ComplexityError::invalid(format!(
                "synchrony threshold must be a positive finite angle, got {threshold}"
            )));
        }
        let phases: Vec<Vec<f64>> = (0..data.nrows())
            .into_par_iter()
            .map(|ch| instantaneous_phase(&data.row(ch).to_vec()))
            .collect();
        Ok(Self { phases, threshold })
    }

    pub fn n_channels(&self) -> usize {
        self.phases.len()
    }

    pub fn n_times(&self) -> usize {
        self.phases.first().map_or(0, Vec::len)
    }

    /// Synchrony of channel `i` against every other channel: shape (C−1, T).
    ///
    /// Row `k` is the k-th partner in ascending channel order, skipping `i`.
    pub fn channel_slice(&self, i: usize) -> ComplexityResult<BinaryMatrix> {
        let n_ch = self.n_channels();
        if i >= n_ch {
            return Err(ComplexityError::invalid(format!(
                "channel index {i} out of range for {n_ch} channels"
            )));
        }
        let mut out = BinaryMatrix::zeros((n_ch - 1, self.n_times()));
        let partners = (0..n_ch).filter(|&j| j != i);
        for (mut row, j) in out.rows_mut().into_iter().zip(partners) {
            let sync = phase_synchrony(&self.phases[i], &self.phases[j], self.threshold)?;
            row.assign(&ndarray::ArrayView1::from(&sync));
        }
        Ok(out)
    }
}

/// Full synchrony tensor (C, C−1, T) of a signal matrix.
///
/// Memory grows as C²·T; prefer [`PhaseSet::channel_slice`] for large montages.
pub fn phase_synchrony_matrix(data: &Array2<f64>, threshold: f64) -> ComplexityResult<SynchronyTensor> {
    let phases = PhaseSet::new(data, threshold)?;
    let (n_ch, n_t) = (phases.n_channels(), phases.n_times());

    let slices: Vec<BinaryMatrix> = (0..n_ch)
        .into_par_iter()
        .map(|i| phases.channel_slice(i))
        .collect::<ComplexityResult<_>>()?;

    let mut out = SynchronyTensor::zeros((n_ch, n_ch - 1, n_t));
    for (i, slice) in slices.iter().enumerate() {
        out.index_axis_mut(ndarray::Axis(0), i).assign(slice);
    }
    Ok(out)
}
