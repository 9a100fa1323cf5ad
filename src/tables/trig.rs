//! Fixed-point trigonometry tables
//!
//! A full turn is 1024 in this number system; magnitudes are 12-bit signed
//! (-2047 to 2047). The tone scanner computes angles with floor-division
//! shifts, so table indexing never needs interpolation.

use lazy_static::lazy_static;
use std::f64::consts::PI;

/// Table length; one full turn of angle
pub const TRIG_SIZE: usize = 1024;

/// 12-bit signed peak magnitude
pub const TRIG_SCALE: f64 = 2047.0;

lazy_static! {
    /// sin(2*pi*i/1024), scaled to 12-bit signed
    pub static ref SIN: [i32; TRIG_SIZE] = build_table(libm::sin);

    /// cos(2*pi*i/1024), scaled to 12-bit signed
    pub static ref COS: [i32; TRIG_SIZE] = build_table(libm::cos);
}

fn build_table(f: fn(f64) -> f64) -> [i32; TRIG_SIZE] {
    let mut table = [0i32; TRIG_SIZE];
    for (i, slot) in table.iter_mut().enumerate() {
        let angle = 2.0 * PI * (i as f64) / (TRIG_SIZE as f64);
        *slot = libm::round(TRIG_SCALE * f(angle)) as i32;
    }
    table
}
