//! Metric configuration.
//!
//! [`ComplexityConfig`] holds every tunable parameter of the three complexity
//! indices.  All fields have defaults that match the published LZc / ACE / SCE
//! definitions.
use std::fmt;
use std::str::FromStr;

use crate::error::ComplexityError;
use crate::synchrony::DEFAULT_SYNC_THRESHOLD;

/// How the per-channel amplitude threshold is derived during binarization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThresholdRule {
    /// Mean of the channel's Hilbert amplitude envelope.
    #[default]
    Mean,
    /// Median of the channel's Hilbert amplitude envelope.
    Median,
}

impl FromStr for ThresholdRule {
    type Err = ComplexityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mean" => Ok(Self::Mean),
            "median" => Ok(Self::Median),
            other => Err(ComplexityError::invalid(format!(
                "threshold rule should be 'mean' or 'median', got '{other}'"
            ))),
        }
    }
}

impl fmt::Display for ThresholdRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mean => f.write_str("mean"),
            Self::Median => f.write_str("median"),
        }
    }
}

/// Configuration for [`crate::compute_all`] and the `complexity` binary.
///
/// All fields are `pub` so you can construct one with struct-update syntax:
///
/// ```
/// use exg_complexity::{ComplexityConfig, ThresholdRule};
///
/// let cfg = ComplexityConfig {
///     threshold_rule: ThresholdRule::Median,
///     seed:           Some(7),
///     ..ComplexityConfig::default()
/// };
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ComplexityConfig {
    /// Amplitude threshold used to binarize channels for LZc and ACE.
    ///
    /// Default: [`ThresholdRule::Mean`].
    pub threshold_rule: ThresholdRule,

    /// Phase difference (radians) below which two channels count as
    /// synchronized for SCE.  The difference is wrapped into `[0, π]` first.
    ///
    /// Default: `0.8` rad.
    pub sync_threshold: f64,

    /// Also report SCE per channel (each normalised by the same surrogate).
    ///
    /// Default: `false`.
    pub per_channel: bool,

    /// Seed for the surrogate RNG (`ChaCha8`).  `None` draws a seed from the
    /// operating system, so repeated runs give slightly different scores.
    ///
    /// Default: `None`.
    pub seed: Option<u64>,
}

impl Default for ComplexityConfig {
    fn default() -> Self {
        Self {
            threshold_rule: ThresholdRule::Mean,
            sync_threshold: DEFAULT_SYNC_THRESHOLD,
            per_channel: false,
            seed: None,
        }
    }
}

impl ComplexityConfig {
    /// Check parameter ranges before any computation starts.
    pub fn validate(&self) -> Result<(), ComplexityError> {
        if !self.sync_threshold.is_finite() || self.sync_threshold <= 0.0 {
            return Err(ComplexityError::invalid(format!(
                "sync_threshold must be a positive finite angle, got {}",
                self.sync_threshold
            )));
        }
        Ok(())
    }
}
