//! Error kinds raised by the complexity core.
//!
//! Every validation happens eagerly at the boundary of the function that
//! needs it, and errors are never swallowed by a higher layer: whatever a
//! low-level encoder rejects reaches the caller of [`crate::lempel_ziv_complexity`]
//! and friends unchanged.
use thiserror::Error;

/// Root error type for the complexity pipeline.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ComplexityError {
    /// Wrong shape, non-finite samples, non-binary entries where a binary
    /// matrix is required, mismatched series lengths, zero dimensions or an
    /// unrecognised option name.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The computation is mathematically undefined for this input
    /// (entropy of an empty sequence, division by a zero surrogate value).
    #[error("degenerate computation: {0}")]
    DegenerateComputation(String),
}

pub type ComplexityResult<T> = Result<T, ComplexityError>;

impl ComplexityError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub(crate) fn degenerate(msg: impl Into<String>) -> Self {
        Self::DegenerateComputation(msg.into())
    }
}

/// Reject empty matrices and non-finite samples.
///
/// Shared by every stage that consumes a raw Signal Matrix.
pub(crate) fn check_signal(data: &ndarray::Array2<f64>, min_channels: usize) -> ComplexityResult<()> {
    let (n_ch, n_t) = data.dim();
    if n_ch < min_channels {
        return Err(ComplexityError::invalid(format!(
            "expected at least {min_channels} channel(s), got {n_ch}"
        )));
    }
    if n_t == 0 {
        return Err(ComplexityError::invalid("signal matrix has no time samples"));
    }
    if let Some(((ch, t), v)) = data.indexed_iter().find(|(_, v)| !v.is_finite()) {
        return Err(ComplexityError::invalid(format!(
            "non-finite sample {v} at channel {ch}, sample {t}"
        )));
    }
    Ok(())
}
