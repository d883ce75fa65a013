//! Shannon entropy over a discrete alphabet.
//!
//! H = −Σ p_k · log2(p_k),  p_k = count_k / n
use std::collections::HashMap;
use std::hash::Hash;

use crate::error::{ComplexityError, ComplexityResult};

/// Shannon entropy (bits) of the empirical symbol distribution of `seq`.
///
/// A sequence of one repeated symbol has entropy 0; `k` equally frequent
/// symbols give `log2(k)`.
///
/// # Errors
///
/// `DegenerateComputation` if `seq` is empty.
pub fn shannon_entropy<T: Eq + Hash>(seq: &[T]) -> ComplexityResult<f64> {
    if seq.is_empty() {
        return Err(ComplexityError::degenerate("entropy of an empty sequence"));
    }
    let mut counts: HashMap<&T, usize> = HashMap::new();
    for s in seq {
        *counts.entry(s).or_insert(0) += 1;
    }
    // Fixed summation order keeps seeded runs bit-identical.
    let mut counts: Vec<usize> = counts.into_values().collect();
    counts.sort_unstable();

    let n = seq.len() as f64;
    let h = -counts
        .iter()
        .map(|&c| {
            let p = c as f64 / n;
            p * p.log2()
        })
        .sum::<f64>();
    // −0.0 for the single-symbol case.
    Ok(h.max(0.0))
}
