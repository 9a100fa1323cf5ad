//! DCS (Digitally-Coded Squelch) detection chain
//!
//! A DCS transmission repeats a 23-bit Golay codeword (12 data, 11 parity)
//! as 134.4 bps NRZ below the voice band. Detection runs four stages over
//! one block:
//!
//! 1. `fir` - low-pass + decimate by 8 to the bit-cell rate, collecting
//!    peak statistics
//! 2. `bitsync` - clock recovery; slides a 31-bit window over recovered
//!    bits with rolling frame/parity validation
//! 3. `golay` - the parity code gating step 2's validation
//! 4. `resolver` - rotates the validated word to the sync marker and maps
//!    rotation aliases to a canonical code
//!
//! Each stage is a pure function of its input plus the config; nothing
//! carries over between blocks.

pub mod bitsync;
pub mod fir;
pub mod golay;
pub mod resolver;

pub use bitsync::recover_bits;
pub use fir::filter;
pub use golay::{encode, valid};
pub use resolver::resolve;

use crate::block::SampleBlock;
use crate::config::DetectorConfig;

/// Run the full DCS chain over one block.
///
/// Returns the canonical code under the configured alias mode, or `None`
/// when the block carries no decodable DCS word.
pub fn detect(block: &SampleBlock, config: &DetectorConfig) -> Option<u16> {
    let (waveform, peak_low, peak_high) = fir::filter(block);
    let raw = bitsync::recover_bits(&waveform, peak_low, peak_high, config.invert_mask)?;
    resolver::resolve(raw, config.alias_mode)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AliasMode;
    use crate::simulation::synth;
    use crate::tables::LOS_ALTOS_MAP;

    #[test]
    fn test_detect_clean_nrz_block() {
        let block = synth::dcs_block(0o023, 400, 0).unwrap();
        let config = DetectorConfig::default();
        assert_eq!(detect(&block, &config), Some(LOS_ALTOS_MAP[0o023]));
    }

    #[test]
    fn test_detect_any_bit_phase() {
        let config = DetectorConfig::default();
        for phase in (0..23).step_by(5) {
            let block = synth::dcs_block(0o116, 400, phase).unwrap();
            assert_eq!(
                detect(&block, &config),
                Some(LOS_ALTOS_MAP[0o116]),
                "phase {}",
                phase
            );
        }
    }

    #[test]
    fn test_full_decode_mode_reports_received_pattern() {
        let block = synth::dcs_block(0o023, 400, 0).unwrap();
        let mut config = DetectorConfig::default();
        config.set_alias_mode(AliasMode::FullDecode);
        // Full decode reports whichever marker-bearing rotation lands
        // first; it must still be an alias of the transmitted code
        let code = detect(&block, &config).unwrap();
        let word = golay::encode(0x800 | code as u32);
        let mut found = false;
        let mut rotated = golay::encode(0o4023);
        for _ in 0..23 {
            if rotated == word {
                found = true;
            }
            rotated = resolver::rotate_right(rotated);
        }
        assert!(found, "code {:03o} is not an alias of 023", code);
    }

    #[test]
    fn test_silence_and_tone_blocks_yield_none() {
        let config = DetectorConfig::default();
        let silence = SampleBlock::from_centered(vec![0; 4000]).unwrap();
        assert_eq!(detect(&silence, &config), None);

        let tone = synth::tone_block(77.0, 400.0).unwrap();
        assert_eq!(detect(&tone, &config), None);

        let noise = synth::noise_block(100.0, 7).unwrap();
        assert_eq!(detect(&noise, &config), None);
    }
}
