//! Whole-table tone classification
//!
//! Scores every tone table entry, then decides whether the single
//! strongest score stands far enough above the noise floor to call it a
//! detection. The floor is adaptive: the average of all other entries'
//! scores, so wideband noise and voice audio (which lift every bin) never
//! trigger.

use crate::block::SampleBlock;
use crate::config::DetectorConfig;
use crate::tables::{RESERVED_TONE, TONES};
use crate::tone::scanner;
use tracing::{debug, trace};

/// Detection threshold: the winner must beat 50x the average of the rest
const THRESHOLD_RATIO: i64 = 50;

/// Classify one block against the full tone table.
///
/// Returns the index of the detected tone, or `None` for silence, noise,
/// or anything that fails the adaptive threshold. Entry 0 (134.4 Hz) is
/// never reported: that frequency is the DCS end-of-transmission marker,
/// not a PL tone.
pub fn classify(block: &SampleBlock, config: &DetectorConfig) -> Option<usize> {
    let mut total: i64 = 0;
    let mut max_score: i32 = 0;
    let mut max_index: usize = 0;

    for (i, entry) in TONES.iter().enumerate() {
        let score = scanner::score(block, entry.scaled_freq);
        total += score as i64;

        if config.dump_scores {
            debug!(tone = entry.name, score, "tone score");
        }

        // Track the single highest value; at most one tone is reported
        if score > max_score {
            max_score = score;
            max_index = i;
        }
    }

    let mut average = (total - max_score as i64) / TONES.len() as i64;
    if average == 0 {
        average = 1;
    }

    if config.dump_scores {
        debug!(average, "score average");
    }

    if max_score as i64 > average * THRESHOLD_RATIO && max_index != RESERVED_TONE {
        debug!(tone = TONES[max_index].name, score = max_score, "PL tone");
        return Some(max_index);
    }

    trace!("PL none");
    None
}
