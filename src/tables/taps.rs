//! DCS low-pass FIR coefficients
//!
//! The decimation filter uses a 265-tap symmetric windowed-sinc low-pass
//! (Hamming window, ~200 Hz cutoff at the 8601.6 Hz input rate). Only the
//! unique half of the kernel is stored: `TAPS[0..132]` are the leading
//! coefficients and `TAPS[132]` is the center; the trailing half mirrors
//! the leading half. Coefficients are integers scaled so the full-kernel
//! DC gain is 2^16.

use super::{SAMPLE_RATE, TAP_SIZE};
use lazy_static::lazy_static;
use std::f64::consts::PI;

/// Low-pass cutoff in Hz. The DCS baseband (134.4 bps NRZ) lives below
/// ~200 Hz; everything above, including every CTCSS tone's harmonics and
/// voice audio, is stopband.
const CUTOFF_HZ: f64 = 200.0;

/// Full-kernel DC gain after integer scaling
const DC_GAIN: f64 = 65536.0;

lazy_static! {
    /// Unique half (incl. center) of the symmetric FIR kernel
    pub static ref TAPS: [i32; TAP_SIZE] = build_taps();
}

fn build_taps() -> [i32; TAP_SIZE] {
    let full_len = 2 * TAP_SIZE - 1; // 265
    let mid = (TAP_SIZE - 1) as f64; // 132
    let fc = CUTOFF_HZ / SAMPLE_RATE; // normalized cutoff

    // Windowed sinc, then normalize to unit DC gain before integer scaling
    let mut kernel = vec![0f64; full_len];
    for (n, k) in kernel.iter_mut().enumerate() {
        let m = n as f64 - mid;
        let sinc = if m == 0.0 {
            2.0 * fc
        } else {
            libm::sin(2.0 * PI * fc * m) / (PI * m)
        };
        let window = 0.54 - 0.46 * libm::cos(2.0 * PI * n as f64 / (full_len - 1) as f64);
        *k = sinc * window;
    }
    let dc: f64 = kernel.iter().sum();

    let mut taps = [0i32; TAP_SIZE];
    for (j, t) in taps.iter_mut().enumerate() {
        *t = libm::round(kernel[j] / dc * DC_GAIN) as i32;
    }
    taps
}
