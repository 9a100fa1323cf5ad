//! Per-block detection pipeline
//!
//! Runs the tone classifier and the DCS chain independently over the same
//! block and hands the combined result to the display collaborator. Both
//! branches are pure functions of the block plus the config; the only
//! state the pipeline itself touches is the display bookkeeping
//! (detection hold-off countdown and idle-sweep phase) on the config,
//! between analyses.

use crate::block::SampleBlock;
use crate::config::DetectorConfig;
use crate::{dcs, tone};

/// Display hold-off armed by any detection, in cycles (~9 s)
const DISPLAY_HOLD_CYCLES: u32 = 20;

/// The idle sweep advances one phase every this many idle cycles
const SWEEP_DIVIDER: u32 = 3;

/// Combined result of one analysis cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetectionResult {
    /// Index into the tone table of a detected PL tone
    pub tone: Option<usize>,
    /// Canonical DCS code under the configured alias mode
    pub dcs_code: Option<u16>,
}

impl DetectionResult {
    pub fn is_detection(&self) -> bool {
        self.tone.is_some() || self.dcs_code.is_some()
    }
}

/// Analyze one block.
///
/// Both fields of the result may be `None` simultaneously; silence is the
/// common case, not an error. The block is not retained past this call,
/// so the acquisition side may recycle its buffer immediately.
pub fn run(block: &SampleBlock, config: &mut DetectorConfig) -> DetectionResult {
    let tone = tone::classify(block, config);
    let dcs_code = dcs::detect(block, config);

    let result = DetectionResult { tone, dcs_code };
    tick_display(&result, config);
    result
}

/// Per-cycle display bookkeeping: a detection arms the hold-off; idle
/// cycles count it down and then drive the sweep animation. The display
/// sink renders from these counters; it owns all device bit-packing.
fn tick_display(result: &DetectionResult, config: &mut DetectorConfig) {
    if result.is_detection() {
        config.display_timeout = DISPLAY_HOLD_CYCLES;
        return;
    }

    if config.display_timeout > 0 {
        config.display_timeout -= 1;
        config.sweep_phase = 1;
    } else {
        if config.sweep_count % SWEEP_DIVIDER == 0 {
            config.sweep_phase = (config.sweep_phase + 1) % 6;
        }
        config.sweep_count = config.sweep_count.wrapping_add(1);
    }
}
