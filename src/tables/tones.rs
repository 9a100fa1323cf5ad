//! CTCSS tone table
//!
//! 50 entries covering the standard sub-audible squelch tones. Entry 0 is
//! 134.4 Hz, the DCS end-of-transmission marker; it is scanned like every
//! other entry but never reported as a PL detection.
//!
//! Frequencies are stored pre-scaled for the scanner's fixed-point angle
//! computation: with a full turn equal to 1024 and an analysis rate of
//! 8601.6 Hz, the per-sample angle for frequency f is
//! `((j * scaled + 1024) >> 11) & 1023` where `scaled = f * 2^21 / 8601.6`.
//! 134.4 Hz scales to exactly 32768.

use super::SAMPLE_RATE;
use lazy_static::lazy_static;

/// One tone table row
#[derive(Debug, Clone, Copy)]
pub struct ToneTableEntry {
    /// Printable tone name, e.g. "131.8"
    pub name: &'static str,
    /// Frequency pre-scaled for the scanner's angle arithmetic
    pub scaled_freq: i32,
    /// Frequency in tenths of Hz as 4 BCD nibbles, for the display sink
    /// (67.0 -> 0x0670)
    pub display: u16,
}

/// Tone names and frequencies in tenths of Hz. Entry 0 is the reserved
/// 134.4 Hz DCS end-of-transmission marker.
const TONE_DEFS: [(&str, u32); super::NUM_TONES] = [
    ("134.4", 1344),
    ("67.0", 670),
    ("69.3", 693),
    ("71.9", 719),
    ("74.4", 744),
    ("77.0", 770),
    ("79.7", 797),
    ("82.5", 825),
    ("85.4", 854),
    ("88.5", 885),
    ("91.5", 915),
    ("94.8", 948),
    ("97.4", 974),
    ("100.0", 1000),
    ("103.5", 1035),
    ("107.2", 1072),
    ("110.9", 1109),
    ("114.8", 1148),
    ("118.8", 1188),
    ("123.0", 1230),
    ("127.3", 1273),
    ("131.8", 1318),
    ("136.5", 1365),
    ("141.3", 1413),
    ("146.2", 1462),
    ("151.4", 1514),
    ("156.7", 1567),
    ("159.8", 1598),
    ("162.2", 1622),
    ("165.5", 1655),
    ("167.9", 1679),
    ("171.3", 1713),
    ("173.8", 1738),
    ("177.3", 1773),
    ("179.9", 1799),
    ("183.5", 1835),
    ("186.2", 1862),
    ("189.9", 1899),
    ("192.8", 1928),
    ("196.6", 1966),
    ("199.5", 1995),
    ("203.5", 2035),
    ("206.5", 2065),
    ("210.7", 2107),
    ("218.1", 2181),
    ("225.7", 2257),
    ("229.1", 2291),
    ("233.6", 2336),
    ("241.8", 2418),
    ("250.3", 2503),
];

lazy_static! {
    /// The tone table, scanned in full on every block
    pub static ref TONES: [ToneTableEntry; super::NUM_TONES] = build_table();
}

/// Scale a frequency in tenths of Hz for the scanner's angle arithmetic
fn scale_frequency(tenths: u32) -> i32 {
    let hz = tenths as f64 / 10.0;
    libm::round(hz * (1 << 21) as f64 / SAMPLE_RATE) as i32
}

/// Pack a tenths-of-Hz value into 4 BCD nibbles for the display sink
fn display_code(tenths: u32) -> u16 {
    let d3 = (tenths / 1000) % 10;
    let d2 = (tenths / 100) % 10;
    let d1 = (tenths / 10) % 10;
    let d0 = tenths % 10;
    ((d3 << 12) | (d2 << 8) | (d1 << 4) | d0) as u16
}

fn build_table() -> [ToneTableEntry; super::NUM_TONES] {
    let mut table = [ToneTableEntry {
        name: "",
        scaled_freq: 0,
        display: 0,
    }; super::NUM_TONES];
    for (slot, &(name, tenths)) in table.iter_mut().zip(TONE_DEFS.iter()) {
        *slot = ToneTableEntry {
            name,
            scaled_freq: scale_frequency(tenths),
            display: display_code(tenths),
        };
    }
    table
}
