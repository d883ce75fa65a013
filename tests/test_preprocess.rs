mod common;
use common::{noise, ramps};
use exg_complexity::{binarize, detrend_and_center, CenterOrder, ComplexityError, ThresholdRule};
use ndarray::{Array2, Axis};

#[test]
fn mean_first_flattens_affine_channels() {
    let data = ramps(5, 1000);
    let out = detrend_and_center(&data, CenterOrder::MeanFirst).unwrap();
    for &v in out.iter() {
        approx::assert_abs_diff_eq!(v, 0.0, epsilon = 1e-7);
    }
}

#[test]
fn detrend_first_flattens_zero_mean_affine_channels() {
    // Ramps centred on their midpoint have zero mean, so both orders agree.
    let n = 1001;
    let data = Array2::from_shape_fn((3, n), |(c, t)| (c as f64 + 1.0) * (t as f64 - 500.0));
    let out = detrend_and_center(&data, CenterOrder::DetrendFirst).unwrap();
    for &v in out.iter() {
        approx::assert_abs_diff_eq!(v, 0.0, epsilon = 1e-7);
    }
}

#[test]
fn orders_differ_by_channel_mean() {
    let data = &noise(4, 300, 9) + 5.0;
    let a = detrend_and_center(&data, CenterOrder::MeanFirst).unwrap();
    let b = detrend_and_center(&data, CenterOrder::DetrendFirst).unwrap();
    let means = data.mean_axis(Axis(1)).unwrap();
    for c in 0..4 {
        for t in 0..300 {
            approx::assert_abs_diff_eq!(a[[c, t]] - b[[c, t]], means[c], epsilon = 1e-9);
        }
    }
}

#[test]
fn binarize_threshold_is_per_channel() {
    // Channel 1 is channel 0 scaled by 2^10 (exact in floating point): same bits.
    let base = noise(1, 512, 3);
    let data = Array2::from_shape_fn((2, 512), |(c, t)| base[[0, t]] * if c == 0 { 1.0 } else { 1024.0 });
    for rule in [ThresholdRule::Mean, ThresholdRule::Median] {
        let bin = binarize(&data, rule).unwrap();
        assert_eq!(bin.row(0), bin.row(1));
        assert!(bin.row(0).iter().any(|&b| b == 1));
        assert!(bin.row(0).iter().any(|&b| b == 0));
    }
}

#[test]
fn median_rule_splits_roughly_in_half() {
    let data = noise(3, 1001, 11);
    let bin = binarize(&data, ThresholdRule::Median).unwrap();
    for row in bin.rows() {
        let ones = row.iter().filter(|&&b| b == 1).count();
        // ≥ median: at least half, ties aside.
        assert!((501..=503).contains(&ones), "ones = {ones}");
    }
}

#[test]
fn unknown_rule_name_is_invalid_input() {
    let err = "average".parse::<ThresholdRule>().unwrap_err();
    assert!(matches!(err, ComplexityError::InvalidInput(_)));
}

#[test]
fn empty_matrix_is_invalid_input() {
    let data = Array2::<f64>::zeros((3, 0));
    assert!(matches!(
        detrend_and_center(&data, CenterOrder::MeanFirst),
        Err(ComplexityError::InvalidInput(_))
    ));
    assert!(matches!(binarize(&data, ThresholdRule::Mean), Err(ComplexityError::InvalidInput(_))));
}
