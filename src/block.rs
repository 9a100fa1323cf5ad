//! Sample block: one acquisition window
//!
//! The acquisition collaborator hands the engine exactly 4000 samples per
//! cycle (~465 ms at 8601.6 Hz). Raw ADC readings are 12-bit unsigned; the
//! engine analyzes them as 10-bit values centered on zero. Blocks are
//! immutable once built and must not be retained past the analysis call:
//! the collaborator double-buffers and reuses the storage immediately.

use crate::error::DetectError;
use crate::tables::BLOCK_SIZE;
use snafu::ensure;

/// A centered audio sample (-512 to +511 for ADC input)
pub type Sample = i32;

/// One fully-populated, conditioned acquisition window
#[derive(Debug, Clone)]
pub struct SampleBlock {
    samples: Vec<Sample>,
}

impl SampleBlock {
    /// Build a block from raw 12-bit unsigned ADC readings.
    ///
    /// Converts each reading to a 10-bit value centered around 0:
    /// `(raw >> 2) - 512`, i.e. -512 to +511.
    pub fn from_raw_adc(raw: &[u16]) -> Result<Self, DetectError> {
        ensure!(
            raw.len() == BLOCK_SIZE,
            crate::error::BlockLengthSnafu {
                expected: BLOCK_SIZE,
                actual: raw.len(),
            }
        );
        let samples = raw.iter().map(|&r| ((r >> 2) as i32) - 512).collect();
        Ok(Self { samples })
    }

    /// Build a block from samples already centered on zero
    /// (simulation, WAV input, tests)
    pub fn from_centered(samples: Vec<Sample>) -> Result<Self, DetectError> {
        ensure!(
            samples.len() == BLOCK_SIZE,
            crate::error::BlockLengthSnafu {
                expected: BLOCK_SIZE,
                actual: samples.len(),
            }
        );
        Ok(Self { samples })
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adc_centering() {
        let mut raw = vec![2048u16; BLOCK_SIZE];
        raw[0] = 0;
        raw[1] = 4095;
        let block = SampleBlock::from_raw_adc(&raw).unwrap();
        assert_eq!(block.samples()[0], -512);
        assert_eq!(block.samples()[1], 511);
        assert_eq!(block.samples()[2], 0);
    }

    #[test]
    fn test_length_contract() {
        // Too short to even cover the FIR kernel, and any length other
        // than the acquisition size is rejected outright
        assert!(SampleBlock::from_centered(vec![0; 100]).is_err());
        assert!(SampleBlock::from_centered(vec![0; BLOCK_SIZE - 1]).is_err());
        assert!(SampleBlock::from_raw_adc(&vec![0u16; BLOCK_SIZE + 1]).is_err());
        assert!(SampleBlock::from_centered(vec![0; BLOCK_SIZE]).is_ok());
    }
}
