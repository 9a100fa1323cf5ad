//! DCS bit-clock recovery and word extraction
//!
//! Recovers a 31-bit raw word from the decimated baseband waveform with no
//! external bit clock. A bit cell is nominally 8 waveform samples; the
//! synchronizer free-runs on that cadence and resynchronizes whenever a
//! qualifying signal edge (a thresholded local extremum that moved far
//! enough from the last bit's baseline) appears slightly early, on time,
//! or one sample late.
//!
//! **Per-sample state machine**:
//! - `SeekEarly` - within the edge window (cell count 6, 7 or 0 mod 8, or
//!   before first sync): accept a local peak/trough as a bit edge and
//!   restart the cell counter
//! - `SeekOnTime` - exactly on the cell boundary with no early edge: if
//!   the *next* sample is the extremum, consume one extra sample so the
//!   cell grid follows it
//! - `BitComplete` - reached on every cell boundary whether or not an edge
//!   fired: shift the bit (repeating the previous bit when no edge
//!   qualified), record the new baseline, and run the rolling validation
//!
//! Validation is rolling: once 31 bits have been shifted, every further
//! bit yields a new candidate word, and a failed check never resets the
//! register; the search just keeps sliding one bit at a time. This
//! tolerates locking onto the repeated codeword at any phase.

use crate::dcs::golay;
use tracing::trace;

/// Per-sample action decided by the synchronizer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    /// Edge found at the current sample: bit value, counter restarts
    Edge(u32),
    /// Edge found one sample ahead: consume it and restart the counter
    LateEdge(u32),
    /// Cell boundary with no edge: repeat the previous bit
    FreeRun,
    /// Mid-cell, nothing to do
    Idle,
}

/// Recover a validated 23-bit DCS word from the filtered waveform.
///
/// `peak_low`/`peak_high` are the filter's peak statistics; the edge
/// thresholds are 5/16 of each (arithmetic shift, flooring the negative
/// side). Returns the word XORed with `invert_mask` on the first rolling
/// validation success, or `None` if the block ends without one.
pub fn recover_bits(
    waveform: &[i32],
    peak_low: i32,
    peak_high: i32,
    invert_mask: u32,
) -> Option<u32> {
    if waveform.len() < 3 {
        return None;
    }

    let low = (peak_low * 5) >> 4;
    let high = (peak_high * 5) >> 4;

    // count = -1: unsynchronized, every sample is in the edge window
    let mut count: i32 = -1;
    let mut word: u32 = 0;
    let mut bits: u32 = 0;
    let mut last: u32 = 0;
    let mut baseline: i32 = 0;

    // Index must allow for waveform[i-1] and waveform[i+1]
    let end = waveform.len() - 2;
    let mut i: usize = 1;

    while i < end {
        let in_edge_window = (count & 6) == 6 || (count & 7) == 0;
        let on_cell_boundary = (count & 7) == 0;

        let step = if in_edge_window && is_peak(waveform, i, high, baseline) {
            Step::Edge(1)
        } else if in_edge_window && is_trough(waveform, i, low, baseline) {
            Step::Edge(0)
        } else if on_cell_boundary {
            // On schedule with no edge here; if the next sample is the
            // extremum, wait a cycle so the cell grid tracks it
            if is_leading_peak(waveform, i, high, baseline) {
                Step::LateEdge(1)
            } else if is_leading_trough(waveform, i, low, baseline) {
                Step::LateEdge(0)
            } else {
                Step::FreeRun
            }
        } else {
            Step::Idle
        };

        let bit = match step {
            Step::Edge(b) => {
                count = 0;
                Some(b)
            }
            Step::LateEdge(b) => {
                i += 1;
                count = 0;
                Some(b)
            }
            Step::FreeRun => Some(last),
            Step::Idle => None,
        };

        if let Some(b) = bit {
            // Bit complete: shift into the top of the 31-bit register
            last = b;
            word = (b << 30) | (word >> 1);
            baseline = waveform[i];
            bits += 1;
            trace!("bit {} at {} word {:#010x}", b, i, word);

            if bits >= 31 && frame_valid(word) {
                return Some((word & golay::CODEWORD_MASK) ^ invert_mask);
            }
        }

        if count != -1 {
            count += 1;
        }
        i += 1;
    }

    None
}

/// Rolling 31-bit validation: not all-zero/all-one, the low 8 bits repeat
/// as the top 8 (the codeword restarting), and the low 23 bits carry
/// correct Golay parity.
fn frame_valid(word: u32) -> bool {
    word != 0
        && word != 0x7FFF_FFFF
        && (word & 0xFF) == (word >> 23)
        && golay::valid(word)
}

fn is_peak(w: &[i32], i: usize, high: i32, baseline: i32) -> bool {
    w[i] > high && w[i] - baseline > high && w[i - 1] <= w[i] && w[i] > w[i + 1]
}

fn is_trough(w: &[i32], i: usize, low: i32, baseline: i32) -> bool {
    w[i] < low && w[i] - baseline < low && w[i - 1] >= w[i] && w[i] < w[i + 1]
}

fn is_leading_peak(w: &[i32], i: usize, high: i32, baseline: i32) -> bool {
    w[i + 1] > high && w[i + 1] - baseline > high && w[i] <= w[i + 1]
}

fn is_leading_trough(w: &[i32], i: usize, low: i32, baseline: i32) -> bool {
    w[i + 1] < low && w[i + 1] - baseline < low && w[i] >= w[i + 1]
}
