//! FFT-based analytic signal, matching `scipy.signal.hilbert`.
//!
//! Algorithm:
//!   1. fft(x)  →  complex spectrum X[k], k = 0..N.
//!   2. Multiply by the step h[k]:
//!        h[0] = 1
//!        N even:  h[1..N/2] = 2,       h[N/2] = 1, rest 0
//!        N odd:   h[1..(N+1)/2] = 2,   rest 0
//!   3. ifft(X · h) / N  →  analytic signal a(t) = x(t) + i·H[x](t).
//!
//! |a(t)| is the instantaneous amplitude, arg a(t) the instantaneous phase in (−π, π].
use rustfft::{num_complex::Complex, FftPlanner};

/// Analytic signal of a real series.  Empty input gives an empty output.
pub fn analytic_signal(x: &[f64]) -> Vec<Complex<f64>> {
    let n = x.len();
    if n == 0 {
        return vec![];
    }

    let mut planner: FftPlanner<f64> = FftPlanner::new();
    let mut buf: Vec<Complex<f64>> = x.iter().map(|&v| Complex { re: v, im: 0.0 }).collect();
    planner.plan_fft_forward(n).process(&mut buf);

    // Positive frequencies doubled, negative ones zeroed; DC (and Nyquist for even N) kept.
    let half = if n % 2 == 0 { n / 2 } else { (n + 1) / 2 };
    for v in buf.iter_mut().take(half).skip(1) {
        *v *= 2.0;
    }
    let first_neg = if n % 2 == 0 { half + 1 } else { half };
    for v in buf.iter_mut().skip(first_neg) {
        *v = Complex::default();
    }

    planner.plan_fft_inverse(n).process(&mut buf);
    let inv_n = 1.0 / n as f64;
    for v in &mut buf {
        *v *= inv_n;
    }
    buf
}

/// Instantaneous amplitude `|a(t)|` (Hilbert envelope).
pub fn instantaneous_amplitude(x: &[f64]) -> Vec<f64> {
    analytic_signal(x).iter().map(|c| c.norm()).collect()
}

/// Instantaneous phase `arg a(t)` in radians, range (−π, π].
pub fn instantaneous_phase(x: &[f64]) -> Vec<f64> {
    analytic_signal(x).iter().map(|c| c.arg()).collect()
}
