//! Immutable configuration data for the detection engine
//!
//! Everything here is fixed at startup and read-only afterwards: the
//! quarter-degree trig tables used by the tone scanner, the 50-entry
//! CTCSS tone table, the symmetric FIR taps for the DCS decimation
//! filter, and the two 512-entry DCS alias maps.
//!
//! **Module Organization**:
//! - `trig` - 1024-entry 12-bit sine/cosine tables
//! - `tones` - CTCSS tone table (name, scaled frequency, display code)
//! - `taps` - FIR low-pass coefficients
//! - `alias` - DCS alias-resolution maps (standard and Los Altos)

pub mod alias;
pub mod taps;
pub mod tones;
pub mod trig;

pub use alias::{LOS_ALTOS_MAP, STANDARD_MAP};
pub use taps::TAPS;
pub use tones::{ToneTableEntry, TONES};
pub use trig::{COS, SIN};

/// Analysis sample rate in Hz.
///
/// The fundamental DCS bit rate is 134.4 Hz; the ADC clock is divided so
/// that 134.4 * 8 * 8 = 8601.6 Hz is the acquisition rate, giving exactly
/// 64 input samples per DCS bit cell.
pub const SAMPLE_RATE: f64 = 8601.6;

/// Samples per acquisition block (one analysis window, ~465 ms)
pub const BLOCK_SIZE: usize = 4000;

/// Number of unique coefficients in the symmetric FIR kernel
/// (full kernel length is 2 * TAP_SIZE - 1 = 265)
pub const TAP_SIZE: usize = 133;

/// Length of the decimated FIR output for one block:
/// indices 0 .. BLOCK_SIZE - 2*TAP_SIZE in steps of 8 -> 467 values
pub const WAVE_LEN: usize = (BLOCK_SIZE - 2 * TAP_SIZE + 7) / 8;

/// Number of tone table entries
pub const NUM_TONES: usize = 50;

/// Index of the reserved tone entry (134.4 Hz, the DCS end-of-transmission
/// marker) which is never reported as a PL detection
pub const RESERVED_TONE: usize = 0;

/// Input samples per DCS bit cell (SAMPLE_RATE / 134.4)
pub const SAMPLES_PER_BIT: usize = 64;

/// Decimated samples per DCS bit cell
pub const WAVE_SAMPLES_PER_BIT: usize = 8;
