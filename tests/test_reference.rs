mod common;
use common::noise;
use exg_complexity::{apply_reference, average_reference, Reference};
use ndarray::Axis;

fn names(n: usize) -> Vec<String> {
    (0..n).map(|c| format!("E{c}")).collect()
}

#[test]
fn average_reference_zero_column_sum() {
    let data = noise(8, 400, 31);
    let (out, n) = apply_reference(&data, &names(8), &Reference::Average).unwrap();
    assert_eq!(n, names(8));
    for &s in out.sum_axis(Axis(0)).iter() {
        approx::assert_abs_diff_eq!(s, 0.0, epsilon = 1e-12);
    }
    assert_eq!(out, average_reference(&data));
}

#[test]
fn bipolar_chain() {
    let data = noise(4, 50, 32);
    let r = Reference::parse("bipolar:E0-E1,E1-E2,E2-E3").unwrap();
    let (out, n) = apply_reference(&data, &names(4), &r).unwrap();
    assert_eq!(n, vec!["E0-E1", "E1-E2", "E2-E3"]);
    // Telescoping sum of the chain equals E0 − E3.
    let total = out.sum_axis(Axis(0));
    for t in 0..50 {
        approx::assert_abs_diff_eq!(total[t], data[[0, t]] - data[[3, t]], epsilon = 1e-12);
    }
}

#[test]
fn name_count_mismatch_is_error() {
    let data = noise(3, 10, 33);
    assert!(apply_reference(&data, &names(2), &Reference::Average).is_err());
}

#[test]
fn bad_pair_syntax_is_error() {
    assert!(Reference::parse("bipolar:E0E1").is_err());
}
