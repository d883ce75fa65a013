//! # exg-complexity · complexity indices for multichannel EEG/iEEG
//!
//! `exg-complexity` computes three scalar "complexity" indices that serve as
//! proxies for level of consciousness, from a `[C, T]` recording:
//!
//! * **LZc**: Lempel-Ziv complexity of the binarized recording.
//! * **ACE** (Amplitude Coalition Entropy): entropy of which channels are
//!   simultaneously above their amplitude threshold.
//! * **SCE** (Synchrony Coalition Entropy): entropy of which channel pairs are
//!   phase-synchronized.
//!
//! Each index is divided by the same quantity computed on a shuffled or random
//! surrogate, so scores are dimensionless and typically close to `[0, 1]`.
//!
//! ## Pipeline overview
//!
//! ```text
//! data [C, T] f64
//!   │
//!   ├─ detrend::detrend_and_center()      linear detrend + baseline removal
//!   │
//!   ├─ LZc / ACE
//!   │    ├─ binarize::binarize()          Hilbert envelope ≥ per-channel mean/median
//!   │    ├─ encode::to_bit_string()       LZc: column-major "0101…"
//!   │    ├─ encode::to_integer_sequence() ACE: Σ bit[r]·2^r per column
//!   │    └─ lzw / entropy                 observed ÷ shuffled surrogate
//!   │
//!   └─ SCE
//!        ├─ synchrony::PhaseSet           Hilbert phase per channel
//!        ├─ channel_slice(i)              |Δφ| wrapped to [0, π] < 0.8 rad
//!        └─ entropy                       mean_i H(i) ÷ H(random (C−1)×T)
//! ```
//!
//! ## Quick start
//!
//! ```no_run
//! use exg_complexity::{compute_all, ComplexityConfig};
//! use ndarray::Array2;
//!
//! let data: Array2<f64> = Array2::zeros((16, 5000)); // [C, T]
//! let cfg = ComplexityConfig { seed: Some(42), ..ComplexityConfig::default() };
//! let report = compute_all(&data, &cfg).unwrap();
//! println!("LZc={:?} ACE={:?} SCE={:?}", report.lzc, report.ace, report.sce);
//! ```
//!
//! ## Running individual steps
//!
//! ```
//! use exg_complexity::encode::{to_bit_string, to_integer_sequence};
//! use exg_complexity::lzw::lzw_dictionary_size;
//! use exg_complexity::entropy::shannon_entropy;
//! use ndarray::array;
//!
//! let b = array![[1u8, 0, 0], [0, 1, 0], [0, 0, 1]];
//! assert_eq!(to_bit_string(&b).unwrap(), "100010001");
//! assert_eq!(to_integer_sequence(&b).unwrap(), vec![1u128, 2, 4]);
//! assert_eq!(lzw_dictionary_size(b"01101001"), 6);
//! assert_eq!(shannon_entropy(&[1u8, 2, 3, 4]).unwrap(), 2.0);
//! ```
//!
//! Every randomized step takes an explicit `rand::Rng`, so results are
//! reproducible with a seeded generator.

pub mod binarize;
pub mod config;
pub mod detrend;
pub mod encode;
pub mod entropy;
pub mod error;
pub mod hilbert;
pub mod io;
pub mod lzw;
pub mod metrics;
pub mod reference;
pub mod report;
pub mod surrogate;
pub mod synchrony;

use ndarray::Array2;

// ── Crate-root re-exports ─────────────────────────────────────────────────

// config / errors
pub use config::{ComplexityConfig, ThresholdRule};
pub use error::{ComplexityError, ComplexityResult};

// pipeline stages
pub use binarize::{binarize, BinaryMatrix};
pub use detrend::{detrend_and_center, CenterOrder};
pub use encode::{to_bit_string, to_integer_sequence, Coalition};
pub use entropy::shannon_entropy;
pub use hilbert::{analytic_signal, instantaneous_amplitude, instantaneous_phase};
pub use lzw::lzw_dictionary_size;
pub use surrogate::{random_binary_matrix, shuffle_rows, shuffle_symbols};
pub use synchrony::{phase_synchrony, phase_synchrony_matrix, wrap_phase_difference, PhaseSet, SynchronyTensor};

// metrics
pub use metrics::{amplitude_coalition_entropy, lempel_ziv_complexity, synchrony_coalition_entropy, SceResult};
pub use report::{compute_selected, ComplexityReport, Metric};

// glue
pub use io::RawData;
pub use reference::{apply_reference, average_reference, Reference};

/// Compute **LZc, ACE and SCE** for one recording.
///
/// This is the main entry point.  It validates `cfg`, seeds one `ChaCha8`
/// RNG from [`ComplexityConfig::seed`] and evaluates the three indices in
/// order, each with its own preprocessing:
///
/// 1. LZc: mean-first detrend, binarize, bit string, LZW ÷ shuffled LZW.
/// 2. ACE: detrend-first, binarize, coalition integers, entropy ÷ row-shuffled entropy.
/// 3. SCE: mean-first detrend, phase synchrony, mean channel entropy ÷ random entropy.
///
/// # Errors
///
/// * `InvalidInput`: fewer than 2 channels, no samples, NaN/Inf, bad config.
/// * `DegenerateComputation`: a zero surrogate (e.g. a flat recording).
///
/// # Examples
///
/// ```
/// use exg_complexity::{compute_all, ComplexityConfig};
/// use ndarray::Array2;
///
/// let data = Array2::from_shape_fn((4, 512), |(c, t)| {
///     ((c + 1) as f64 * 0.11 * t as f64).sin() + (0.037 * t as f64 + c as f64).cos()
/// });
/// let cfg = ComplexityConfig { seed: Some(3), ..ComplexityConfig::default() };
/// let report = compute_all(&data, &cfg).unwrap();
/// assert!(report.lzc.unwrap() > 0.0);
/// ```
pub fn compute_all(data: &Array2<f64>, cfg: &ComplexityConfig) -> ComplexityResult<ComplexityReport> {
    compute_selected(data, cfg, &Metric::ALL)
}
