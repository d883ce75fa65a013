//! Null-model baselines used to normalise the complexity indices.
//!
//! - [`random_binary_matrix`]: i.i.d. uniform draws, `1` where draw > 0.5.
//! - [`shuffle_symbols`]: Fisher–Yates permutation of a whole sequence (LZc).
//! - [`shuffle_rows`]: independent permutation of each row (ACE).
//!
//! Every function takes the RNG as an argument, so seeded runs are exactly
//! reproducible.
use ndarray::Array2;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::binarize::BinaryMatrix;
use crate::error::{ComplexityError, ComplexityResult};

/// Uniform random binary matrix of shape (rows, cols).
///
/// Each cell draws `u ~ U[0, 1)` and becomes 1 only if `u > 0.5`; a draw of
/// exactly 0.5 resolves to 0.
///
/// # Errors
///
/// `InvalidInput` if either dimension is zero.
pub fn random_binary_matrix<R: Rng + ?Sized>(
    rows: usize,
    cols: usize,
    rng: &mut R,
) -> ComplexityResult<BinaryMatrix> {
    if rows == 0 || cols == 0 {
        return Err(ComplexityError::invalid(format!(
            "random matrix dimensions must be positive, got ({rows}, {cols})"
        )));
    }
    Ok(Array2::from_shape_simple_fn((rows, cols), || {
        u8::from(rng.gen::<f64>() > 0.5)
    }))
}

/// Random permutation of a sequence (same multiset of symbols).
pub fn shuffle_symbols<T: Clone, R: Rng + ?Sized>(seq: &[T], rng: &mut R) -> Vec<T> {
    let mut out = seq.to_vec();
    out.shuffle(rng);
    out
}

/// Permute each row of a matrix independently; row sums are preserved.
pub fn shuffle_rows<R: Rng + ?Sized>(matrix: &BinaryMatrix, rng: &mut R) -> BinaryMatrix {
    let mut out = matrix.clone();
    for mut row in out.rows_mut() {
        let mut v = row.to_vec();
        v.shuffle(rng);
        row.assign(&ndarray::ArrayView1::from(&v));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{array, Axis};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn make_rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(42)
    }

    #[test]
    fn random_matrix_shape_and_values() {
        let m = random_binary_matrix(5, 200, &mut make_rng()).unwrap();
        assert_eq!(m.dim(), (5, 200));
        assert!(m.iter().all(|&v| v <= 1));
        let ones = m.iter().filter(|&&v| v == 1).count();
        // 1000 fair coin flips: far inside ±5σ.
        assert!((420..=580).contains(&ones), "ones = {ones}");
    }

    #[test]
    fn random_matrix_is_reproducible() {
        let a = random_binary_matrix(3, 50, &mut make_rng()).unwrap();
        let b = random_binary_matrix(3, 50, &mut make_rng()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn draw_of_exactly_half_is_zero() {
        // StepRng yields 2^63 every time, which maps to the f64 draw 0.5.
        let mut rng = rand::rngs::mock::StepRng::new(1 << 63, 0);
        let m = random_binary_matrix(2, 3, &mut rng).unwrap();
        assert_eq!(m, array![[0u8, 0, 0], [0, 0, 0]]);
    }

    #[test]
    fn zero_dimension_rejected() {
        assert!(matches!(
            random_binary_matrix(0, 10, &mut make_rng()),
            Err(ComplexityError::InvalidInput(_))
        ));
        assert!(random_binary_matrix(10, 0, &mut make_rng()).is_err());
    }

    #[test]
    fn shuffle_keeps_multiset() {
        let seq: Vec<u8> = b"0001101110".to_vec();
        let mut shuffled = shuffle_symbols(&seq, &mut make_rng());
        let mut orig = seq.clone();
        shuffled.sort_unstable();
        orig.sort_unstable();
        assert_eq!(shuffled, orig);
    }

    #[test]
    fn row_shuffle_preserves_row_sums() {
        let m = array![[1u8, 1, 0, 0, 0, 1], [0, 0, 0, 0, 1, 0], [1, 1, 1, 1, 1, 1]];
        let s = shuffle_rows(&m, &mut make_rng());
        assert_eq!(m.sum_axis(Axis(1)), s.sum_axis(Axis(1)));
        assert_eq!(s.row(2), m.row(2));
    }
}
