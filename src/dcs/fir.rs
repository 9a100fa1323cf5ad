//! Decimating low-pass filter for the DCS baseband
//!
//! Convolves the block with the 265-tap symmetric kernel, but only at
//! every 8th input index: the output rate of 1075.2 Hz gives exactly 8
//! filtered samples per 134.4 bps DCS bit cell, which is what the bit
//! synchronizer's cell counter is built around. Symmetry halves the
//! multiplies by pairing mirrored input samples. Peak statistics are
//! collected in the same pass; the synchronizer derives its adaptive
//! thresholds from them.

use crate::block::SampleBlock;
use crate::tables::{BLOCK_SIZE, TAP_SIZE, TAPS, WAVE_LEN};

/// Filter one block down to the DCS baseband.
///
/// Returns the decimated waveform (467 samples) together with the lowest
/// and highest filter output seen. Both peaks start from zero, so
/// `peak_low <= 0 <= peak_high` always holds.
pub fn filter(block: &SampleBlock) -> (Vec<i32>, i32, i32) {
    let samples = block.samples();
    let taps = &*TAPS;

    let mut waveform = Vec::with_capacity(WAVE_LEN);
    let mut lowest: i32 = 0;
    let mut highest: i32 = 0;

    let mut i = 0;
    while i < BLOCK_SIZE - 2 * TAP_SIZE {
        // Mirrored-pair sum; accumulate wide, the tap gain keeps the
        // result inside i32
        let mut x: i64 = 0;
        for j in 0..TAP_SIZE - 1 {
            let pair = (samples[i + j] + samples[i + 2 * (TAP_SIZE - 1) - j]) as i64;
            x += pair * taps[j] as i64;
        }
        x += samples[i + TAP_SIZE - 1] as i64 * taps[TAP_SIZE - 1] as i64;

        let x = x as i32;
        waveform.push(x);

        if x > highest {
            highest = x;
        }
        if x < lowest {
            lowest = x;
        }

        i += 8;
    }

    (waveform, lowest, highest)
}
