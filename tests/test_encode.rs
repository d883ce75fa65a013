use exg_complexity::{
    lzw_dictionary_size, shannon_entropy, to_bit_string, to_integer_sequence, ComplexityError,
};
use ndarray::array;

#[test]
fn identity_matrix_bit_string() {
    let m = array![[1u8, 0, 0], [0, 1, 0], [0, 0, 1]];
    assert_eq!(to_bit_string(&m).unwrap(), "100010001");
}

#[test]
fn identity_matrix_integers() {
    let m = array![[1u8, 0, 0], [0, 1, 0], [0, 0, 1]];
    assert_eq!(to_integer_sequence(&m).unwrap(), vec![1u128, 2, 4]);
}

#[test]
fn two_is_rejected_not_truncated() {
    let m = array![[1.0_f64, 0.0, 0.0], [0.0, 2.0, 0.0], [0.0, 0.0, 1.0]];
    assert!(matches!(to_bit_string(&m), Err(ComplexityError::InvalidInput(_))));
    assert!(matches!(to_integer_sequence(&m), Err(ComplexityError::InvalidInput(_))));
}

#[test]
fn one_and_a_half_is_rejected_not_rounded() {
    let m = array![[1.5_f64, 0.0], [0.0, 1.0]];
    assert!(matches!(to_bit_string(&m), Err(ComplexityError::InvalidInput(_))));
    assert!(matches!(to_integer_sequence(&m), Err(ComplexityError::InvalidInput(_))));
}

#[test]
fn negative_entry_rejected() {
    let m = array![[-1_i64, 0], [0, 1]];
    assert!(to_integer_sequence(&m).is_err());
}

#[test]
fn lzw_hand_traced() {
    assert_eq!(lzw_dictionary_size(b"aaaa"), 3);
    assert_eq!(lzw_dictionary_size("1111".as_bytes()), 3);
    // 0 | 01 | 11 | 10 | (01)0 | 00 | (01) → {0, 01, 11, 10, 010, 00}
    assert_eq!(lzw_dictionary_size("01101001".as_bytes()), 6);
    // 1 | 10 | 00 | (00)0 → {1, 10, 00, 000}; reset keeps the current symbol.
    assert_eq!(lzw_dictionary_size("1000000".as_bytes()), 4);
}

#[test]
fn lzw_on_encoded_matrix() {
    let m = array![[1u8, 0, 0], [0, 1, 0], [0, 0, 1]];
    // "100010001": 1 | 10 | 00 | (00)1 | (10)0 | (001) → {1, 10, 00, 001, 100}
    assert_eq!(lzw_dictionary_size(to_bit_string(&m).unwrap().as_bytes()), 5);
}

#[test]
fn entropy_boundaries() {
    assert_eq!(shannon_entropy(&[5u128; 10]).unwrap(), 0.0);
    assert_eq!(shannon_entropy(&[9u128]).unwrap(), 0.0);
    for k in [2usize, 4, 5, 16] {
        let seq: Vec<usize> = (0..k * 7).map(|i| i % k).collect();
        approx::assert_abs_diff_eq!(shannon_entropy(&seq).unwrap(), (k as f64).log2(), epsilon = 1e-12);
    }
}

#[test]
fn entropy_of_identity_columns() {
    let m = array![[1u8, 0, 0], [0, 1, 0], [0, 0, 1]];
    let seq = to_integer_sequence(&m).unwrap();
    approx::assert_abs_diff_eq!(shannon_entropy(&seq).unwrap(), 3.0_f64.log2(), epsilon = 1e-12);
}

#[test]
fn entropy_of_empty_is_degenerate() {
    assert!(matches!(
        shannon_entropy::<u128>(&[]),
        Err(ComplexityError::DegenerateComputation(_))
    ));
}
