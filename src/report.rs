//! One-call evaluation of several indices on a single recording.
use std::fmt;
use std::str::FromStr;

use ndarray::Array2;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::info;

use crate::config::ComplexityConfig;
use crate::error::{check_signal, ComplexityError, ComplexityResult};
use crate::metrics::{amplitude_coalition_entropy, lempel_ziv_complexity, synchrony_coalition_entropy};

/// A complexity index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    /// Lempel-Ziv complexity.
    Lzc,
    /// Amplitude Coalition Entropy.
    Ace,
    /// Synchrony Coalition Entropy.
    Sce,
}

impl Metric {
    pub const ALL: [Metric; 3] = [Metric::Lzc, Metric::Ace, Metric::Sce];
}

impl FromStr for Metric {
    type Err = ComplexityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "lzc" => Ok(Self::Lzc),
            "ace" => Ok(Self::Ace),
            "sce" => Ok(Self::Sce),
            other => Err(ComplexityError::invalid(format!(
                "unknown metric '{other}' (expected lzc, ace or sce)"
            ))),
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Lzc => "lzc",
            Self::Ace => "ace",
            Self::Sce => "sce",
        })
    }
}

/// Scores computed for one recording.  Metrics that were not requested are `None`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ComplexityReport {
    pub n_channels: usize,
    pub n_times: usize,
    pub lzc: Option<f64>,
    pub ace: Option<f64>,
    pub sce: Option<f64>,
    /// Per-channel SCE, only when [`ComplexityConfig::per_channel`] is set.
    pub sce_per_channel: Option<Vec<f64>>,
}

impl ComplexityReport {
    /// JSON object with the shape, the config that produced the scores and every
    /// computed score.
    pub fn to_json(&self, cfg: &ComplexityConfig) -> serde_json::Value {
        serde_json::json!({
            "n_channels": self.n_channels,
            "n_times": self.n_times,
            "threshold_rule": cfg.threshold_rule.to_string(),
            "sync_threshold": cfg.sync_threshold,
            "seed": cfg.seed,
            "lzc": self.lzc,
            "ace": self.ace,
            "sce": self.sce,
            "sce_per_channel": self.sce_per_channel,
        })
    }
}

/// Compute the selected `metrics` for `data` ([C, T]).
///
/// A single `ChaCha8` RNG, seeded from [`ComplexityConfig::seed`] (or from the
/// OS when `None`), drives every surrogate in the order LZc → ACE → SCE.
pub fn compute_selected(
    data: &Array2<f64>,
    cfg: &ComplexityConfig,
    metrics: &[Metric],
) -> ComplexityResult<ComplexityReport> {
    cfg.validate()?;
    check_signal(data, 2)?;
    let mut rng = match cfg.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };

    let (n_channels, n_times) = data.dim();
    let mut report = ComplexityReport { n_channels, n_times, ..Default::default() };

    if metrics.contains(&Metric::Lzc) {
        report.lzc = Some(lempel_ziv_complexity(data, cfg.threshold_rule, &mut rng)?);
    }
    if metrics.contains(&Metric::Ace) {
        report.ace = Some(amplitude_coalition_entropy(data, cfg.threshold_rule, &mut rng)?);
    }
    if metrics.contains(&Metric::Sce) {
        let sce = synchrony_coalition_entropy(data, cfg.sync_threshold, cfg.per_channel, &mut rng)?;
        report.sce = Some(sce.total);
        report.sce_per_channel = sce.per_channel;
    }

    info!(
        n_channels,
        n_times,
        lzc = ?report.lzc,
        ace = ?report.ace,
        sce = ?report.sce,
        "complexity computed"
    );
    Ok(report)
}
