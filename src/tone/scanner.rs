//! Single-frequency correlation scorer
//!
//! Correlates one block against a sine/cosine pair at one candidate
//! frequency and returns the squared magnitude. This is a single-bin
//! discrete transform, not a full spectrum: the tone table is small enough
//! that 50 single-frequency passes beat an FFT at this block size on the
//! target hardware.
//!
//! All arithmetic is fixed-point i32 with arithmetic (flooring) right
//! shifts; negative intermediate products must floor, not truncate toward
//! zero, for bit-exact thresholds downstream.

use crate::block::SampleBlock;
use crate::tables::{COS, SIN};

/// Score one candidate frequency's presence in the block.
///
/// `scaled_freq` comes pre-scaled from the tone table so that
/// `((j * scaled_freq + 1024) >> 11) & 1023` walks the 1024-per-turn angle
/// at the tone's rate. The trig tables are 12-bit, so each product is
/// shifted down by 6 before accumulating to keep the running sums in i32.
pub fn score(block: &SampleBlock, scaled_freq: i32) -> i32 {
    let sin = &*SIN;
    let cos = &*COS;
    let mut total_i: i32 = 0;
    let mut total_q: i32 = 0;

    for (j, &sample) in block.samples().iter().enumerate() {
        let angle = (((j as i32 * scaled_freq + 1024) >> 11) & 1023) as usize;

        // Don't round; products can be negative and must floor
        total_i += (sin[angle] * sample) >> 6;
        total_q += (cos[angle] * sample) >> 6;
    }

    (total_i >> 16) * (total_i >> 16) + (total_q >> 16) * (total_q >> 16)
}
