//! Reduction of a binary [C, T] matrix to a 1-D symbol sequence.
//!
//! `to_bit_string`: column-major concatenation, top row first:
//!   [[1,0,0],[0,1,0],[0,0,1]]  →  "100010001"
//!
//! `to_integer_sequence`: one integer per column, row 0 least significant:
//!   value[t] = Σ_r bit[r, t] · 2^r
//!   [[1,0,0],[0,1,0],[0,0,1]]  →  [1, 2, 4]
//!
//! Column integers are [`Coalition`]s, packed into as many 64-bit words as the
//! row count needs, so montages of any size encode.
//!
//! Both check every entry with exact equality against 0 and 1; anything else
//! (2, 1.5, −1, NaN) is rejected, never rounded.
use ndarray::{ArrayBase, Data, Ix2};

use crate::error::{ComplexityError, ComplexityResult};

const WORD_BITS: usize = u64::BITS as usize;

/// Arbitrary-width column integer `Σ bit[r]·2^r`.
///
/// Little-endian 64-bit words with trailing zero words trimmed, so equal
/// values always compare and hash equal regardless of the row count.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Coalition(Vec<u64>);

impl Coalition {
    fn from_words(mut words: Vec<u64>) -> Self {
        while words.last() == Some(&0) {
            words.pop();
        }
        Self(words)
    }

    /// Little-endian words; empty for the zero coalition.
    pub fn words(&self) -> &[u64] {
        &self.0
    }

    /// Whether row `row` is set.
    pub fn contains(&self, row: usize) -> bool {
        self.0
            .get(row / WORD_BITS)
            .is_some_and(|w| (w >> (row % WORD_BITS)) & 1 == 1)
    }

    /// Number of rows set.
    pub fn count_ones(&self) -> u32 {
        self.0.iter().map(|w| w.count_ones()).sum()
    }
}

impl From<u128> for Coalition {
    fn from(v: u128) -> Self {
        Self::from_words(vec![v as u64, (v >> 64) as u64])
    }
}

impl PartialEq<u128> for Coalition {
    fn eq(&self, other: &u128) -> bool {
        *self == Coalition::from(*other)
    }
}

/// Scalar types that may hold a binary entry.
pub trait Bit: Copy + std::fmt::Debug {
    /// `Some(false)` for exactly 0, `Some(true)` for exactly 1, `None` otherwise.
    fn to_bit(self) -> Option<bool>;
}

macro_rules! impl_bit_int {
    ($($t:ty),*) => {$(
        impl Bit for $t {
            #[inline]
            fn to_bit(self) -> Option<bool> {
                match self {
                    0 => Some(false),
                    1 => Some(true),
                    _ => None,
                }
            }
        }
    )*};
}

macro_rules! impl_bit_float {
    ($($t:ty),*) => {$(
        impl Bit for $t {
            #[inline]
            fn to_bit(self) -> Option<bool> {
                if self == 0.0 {
                    Some(false)
                } else if self == 1.0 {
                    Some(true)
                } else {
                    None
                }
            }
        }
    )*};
}

impl_bit_int!(u8, u16, u32, u64, i8, i16, i32, i64, usize);
impl_bit_float!(f32, f64);

impl Bit for bool {
    #[inline]
    fn to_bit(self) -> Option<bool> {
        Some(self)
    }
}

fn bit_at<T: Bit>(v: T, row: usize, col: usize) -> ComplexityResult<bool> {
    v.to_bit().ok_or_else(|| {
        ComplexityError::invalid(format!(
            "matrix should be binary, found {v:?} at row {row}, column {col}"
        ))
    })
}

/// Concatenate the columns of a binary matrix into a `'0'`/`'1'` string.
///
/// Output length is `rows × cols`.
pub fn to_bit_string<S, T>(matrix: &ArrayBase<S, Ix2>) -> ComplexityResult<String>
where
    S: Data<Elem = T>,
    T: Bit,
{
    let (n_rows, n_cols) = matrix.dim();
    let mut out = String::with_capacity(n_rows * n_cols);
    for (col_idx, col) in matrix.columns().into_iter().enumerate() {
        for (row_idx, &v) in col.iter().enumerate() {
            out.push(if bit_at(v, row_idx, col_idx)? { '1' } else { '0' });
        }
    }
    Ok(out)
}

/// Map each column of a binary matrix onto the integer `Σ bit[r]·2^r`.
///
/// # Errors
///
/// `InvalidInput` on any non-binary entry.
pub fn to_integer_sequence<S, T>(matrix: &ArrayBase<S, Ix2>) -> ComplexityResult<Vec<Coalition>>
where
    S: Data<Elem = T>,
    T: Bit,
{
    let n_words = matrix.nrows().div_ceil(WORD_BITS);
    matrix
        .columns()
        .into_iter()
        .enumerate()
        .map(|(col_idx, col)| -> ComplexityResult<Coalition> {
            let mut words = vec![0u64; n_words];
            for (row_idx, &v) in col.iter().enumerate() {
                if bit_at(v, row_idx, col_idx)? {
                    words[row_idx / WORD_BITS] |= 1u64 << (row_idx % WORD_BITS);
                }
            }
            Ok(Coalition::from_words(words))
        })
        .collect()
}
