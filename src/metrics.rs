//! The three surrogate-normalised complexity indices.
//!
//! ```text
//! LZc:  detrend(mean-first) → binarize → bit string ─┬→ |LZW(s)|
//!                                                    └→ |LZW(shuffle(s))|     ratio
//! ACE:  detrend(detrend-first) → binarize ─┬→ H(int(B))
//!                                          └→ H(int(row_shuffle(B)))          ratio
//! SCE:  detrend(mean-first) → phases → for each ch i: H(int(sync[i]))
//!                                    → mean_i / H(int(random(C−1, T)))
//! ```
//!
//! The surrogates are random, so scores vary slightly between runs unless the
//! caller passes a seeded RNG.
use ndarray::Array2;
use rand::Rng;
use rayon::prelude::*;
use tracing::debug;

use crate::binarize::binarize;
use crate::config::ThresholdRule;
use crate::detrend::{detrend_and_center, CenterOrder};
use crate::encode::{to_bit_string, to_integer_sequence};
use crate::entropy::shannon_entropy;
use crate::error::{check_signal, ComplexityError, ComplexityResult};
use crate::lzw::lzw_dictionary_size;
use crate::surrogate::{random_binary_matrix, shuffle_rows, shuffle_symbols};
use crate::synchrony::PhaseSet;

/// Synchrony Coalition Entropy, overall and (optionally) per channel.
#[derive(Debug, Clone, PartialEq)]
pub struct SceResult {
    /// Mean per-channel entropy divided by the surrogate entropy.
    pub total: f64,
    /// Per-channel entropy divided by the same surrogate entropy, in channel
    /// order.  Only filled when requested.
    pub per_channel: Option<Vec<f64>>,
}

/// Lempel-Ziv complexity (LZc), normalised by a shuffled bit string.
///
/// # Errors
///
/// `InvalidInput` on fewer than 2 channels, an empty matrix or NaN/Inf samples.
pub fn lempel_ziv_complexity<R: Rng + ?Sized>(
    data: &Array2<f64>,
    rule: ThresholdRule,
    rng: &mut R,
) -> ComplexityResult<f64> {
    check_signal(data, 2)?;
    let centered = detrend_and_center(data, CenterOrder::MeanFirst)?;
    let bits = to_bit_string(&binarize(&centered, rule)?)?;

    let observed = lzw_dictionary_size(bits.as_bytes());
    let shuffled = shuffle_symbols(bits.as_bytes(), rng);
    let surrogate = lzw_dictionary_size(&shuffled);
    debug!(observed, surrogate, n_symbols = bits.len(), "LZc dictionary sizes");

    normalize(observed as f64, surrogate as f64, "LZc")
}

/// Amplitude Coalition Entropy (ACE), normalised by a per-channel row shuffle.
///
/// # Errors
///
/// `InvalidInput` as for [`lempel_ziv_complexity`].
/// `DegenerateComputation` if the shuffled entropy is zero (every channel
/// constantly above threshold).
pub fn amplitude_coalition_entropy<R: Rng + ?Sized>(
    data: &Array2<f64>,
    rule: ThresholdRule,
    rng: &mut R,
) -> ComplexityResult<f64> {
    check_signal(data, 2)?;
    let centered = detrend_and_center(data, CenterOrder::DetrendFirst)?;
    let binary = binarize(&centered, rule)?;

    let observed = shannon_entropy(&to_integer_sequence(&binary)?)?;
    let shuffled = shuffle_rows(&binary, rng);
    let surrogate = shannon_entropy(&to_integer_sequence(&shuffled)?)?;
    debug!(observed, surrogate, "ACE entropies");

    normalize(observed, surrogate, "ACE")
}

/// Synchrony Coalition Entropy (SCE), normalised by the entropy of a uniform
/// random (C−1, T) binary matrix.
///
/// Synchrony slices are built and reduced one channel at a time, in parallel;
/// the full (C, C−1, T) tensor is never held in memory.
///
/// # Errors
///
/// `InvalidInput` on fewer than 2 channels, an empty matrix, NaN/Inf samples
/// or a bad threshold.  `DegenerateComputation` if the random normalisation
/// matrix has zero entropy (e.g. a single time sample).
pub fn synchrony_coalition_entropy<R: Rng + ?Sized>(
    data: &Array2<f64>,
    threshold: f64,
    per_channel: bool,
    rng: &mut R,
) -> ComplexityResult<SceResult> {
    check_signal(data, 2)?;
    let centered = detrend_and_center(data, CenterOrder::MeanFirst)?;
    let phases = PhaseSet::new(&centered, threshold)?;
    let (n_ch, n_t) = (phases.n_channels(), phases.n_times());

    let random = random_binary_matrix(n_ch - 1, n_t, rng)?;
    let norm = shannon_entropy(&to_integer_sequence(&random)?)?;
    if norm == 0.0 {
        return Err(ComplexityError::degenerate(
            "SCE normalisation entropy is zero",
        ));
    }

    let channel_entropy: Vec<f64> = (0..n_ch)
        .into_par_iter()
        .map(|i| {
            let slice = phases.channel_slice(i)?;
            shannon_entropy(&to_integer_sequence(&slice)?)
        })
        .collect::<ComplexityResult<_>>()?;

    let mean = channel_entropy.iter().sum::<f64>() / n_ch as f64;
    debug!(mean_entropy = mean, norm, n_ch, "SCE entropies");

    let total = normalize(mean, norm, "SCE")?;
    let per_channel = per_channel.then(|| channel_entropy.iter().map(|h| h / norm).collect());
    Ok(SceResult { total, per_channel })
}

/// `observed / surrogate`, refusing to return NaN/Inf.
fn normalize(observed: f64, surrogate: f64, metric: &str) -> ComplexityResult<f64> {
    if surrogate == 0.0 || !surrogate.is_finite() {
        return Err(ComplexityError::degenerate(format!(
            "{metric} surrogate value is {surrogate}"
        )));
    }
    let ratio = observed / surrogate;
    if !ratio.is_finite() {
        return Err(ComplexityError::degenerate(format!(
            "{metric} ratio {observed}/{surrogate} is not finite"
        )));
    }
    Ok(ratio)
}
