//! Signal synthesis in the engine's sample domain
//!
//! All generators produce centered 10-bit-range samples (the domain the
//! engine analyzes) at the 8601.6 Hz acquisition rate. DCS synthesis uses
//! the real Golay encoder, so generated streams decode through the real
//! chain.

use crate::block::SampleBlock;
use crate::dcs::golay;
use crate::error::DetectError;
use crate::tables::{BLOCK_SIZE, SAMPLES_PER_BIT, SAMPLE_RATE, WAVE_SAMPLES_PER_BIT};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};
use std::f64::consts::PI;

/// Build the 23-bit codeword a transmitter would repeat for a 9-bit code:
/// the sync marker 0b100 sits at data bits 9-11 above the code itself
pub fn dcs_codeword(code: u16) -> u32 {
    golay::encode(0x800 | code as u32)
}

/// Sine samples at the given frequency and amplitude
pub fn tone_samples(freq_hz: f64, amplitude: f64, len: usize) -> Vec<i32> {
    (0..len)
        .map(|j| {
            let phase = 2.0 * PI * freq_hz * j as f64 / SAMPLE_RATE;
            libm::round(amplitude * libm::sin(phase)) as i32
        })
        .collect()
}

/// One block of clean sinusoid
pub fn tone_block(freq_hz: f64, amplitude: f64) -> Result<SampleBlock, DetectError> {
    SampleBlock::from_centered(tone_samples(freq_hz, amplitude, BLOCK_SIZE))
}

/// One block of sinusoid plus white Gaussian noise (seeded, deterministic)
pub fn noisy_tone_block(
    freq_hz: f64,
    amplitude: f64,
    noise_sigma: f64,
    seed: u64,
) -> Result<SampleBlock, DetectError> {
    let mut rng = StdRng::seed_from_u64(seed);
    let normal = Normal::new(0.0, noise_sigma).unwrap();
    let samples = tone_samples(freq_hz, amplitude, BLOCK_SIZE)
        .into_iter()
        .map(|s| s + libm::round(normal.sample(&mut rng)) as i32)
        .collect();
    SampleBlock::from_centered(samples)
}

/// One block of pure white Gaussian noise (seeded, deterministic)
pub fn noise_block(noise_sigma: f64, seed: u64) -> Result<SampleBlock, DetectError> {
    let mut rng = StdRng::seed_from_u64(seed);
    let normal = Normal::new(0.0, noise_sigma).unwrap();
    let samples = (0..BLOCK_SIZE)
        .map(|_| libm::round(normal.sample(&mut rng)) as i32)
        .collect();
    SampleBlock::from_centered(samples)
}

/// NRZ sample stream for a DCS code: 64 samples per bit at 134.4 bps,
/// codeword bits transmitted low bit first, starting at `phase` bits into
/// the codeword
pub fn dcs_nrz_samples(code: u16, amplitude: i32, phase: usize, len: usize) -> Vec<i32> {
    let codeword = dcs_codeword(code);
    (0..len)
        .map(|j| {
            let bit_index = (j / SAMPLES_PER_BIT + phase) % 23;
            if (codeword >> bit_index) & 1 != 0 {
                amplitude
            } else {
                -amplitude
            }
        })
        .collect()
}

/// One block of clean DCS NRZ
pub fn dcs_block(code: u16, amplitude: i32, phase: usize) -> Result<SampleBlock, DetectError> {
    SampleBlock::from_centered(dcs_nrz_samples(code, amplitude, phase, BLOCK_SIZE))
}

/// Per-cell shape for pre-filtered waveform synthesis, in tenths of the
/// amplitude: a crest one sample into the cell, then a decay. The crest is
/// a strict local extremum so the synchronizer's edge test fires on bit
/// transitions; the decay keeps mid-cell samples clear of the edge window.
const CELL_SHAPE: [i32; WAVE_SAMPLES_PER_BIT] = [5, 10, 9, 8, 7, 6, 5, 4];

/// Synthetic post-filter waveform for a DCS code, 8 samples per bit cell,
/// starting `phase` bits into the codeword. Two leading zeros give the
/// first crest valid neighbors; feed the result straight to the bit
/// synchronizer with peaks of +/- `amplitude`.
pub fn dcs_filtered_waveform(code: u16, cells: usize, amplitude: i32, phase: usize) -> Vec<i32> {
    let codeword = dcs_codeword(code);
    let mut waveform = vec![0i32; 2];
    for n in 0..cells {
        let bit = (codeword >> ((n + phase) % 23)) & 1;
        let sign = if bit != 0 { 1 } else { -1 };
        for &c in CELL_SHAPE.iter() {
            waveform.push(sign * amplitude / 10 * c);
        }
    }
    waveform.push(0);
    waveform
}

/// Pre-filtered waveform of unbroken mark cells (no transitions after the
/// first); the synchronizer free-runs this to an all-ones register
pub fn constant_mark_waveform(cells: usize, amplitude: i32) -> Vec<i32> {
    let mut waveform = vec![0i32; 2];
    for _ in 0..cells {
        for &c in CELL_SHAPE.iter() {
            waveform.push(amplitude / 10 * c);
        }
    }
    waveform.push(0);
    waveform
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codeword_carries_marker_and_code() {
        let word = dcs_codeword(0o023);
        assert_eq!(word & 0x1FF, 0o023);
        assert_eq!(word & 0xE00, 0x800);
        assert!(golay::valid(word));
    }

    #[test]
    fn test_nrz_stream_is_periodic() {
        let samples = dcs_nrz_samples(0o023, 400, 0, BLOCK_SIZE);
        // One codeword = 23 bits * 64 samples
        for j in 0..BLOCK_SIZE - 23 * SAMPLES_PER_BIT {
            assert_eq!(samples[j], samples[j + 23 * SAMPLES_PER_BIT]);
        }
    }

    #[test]
    fn test_filtered_waveform_length() {
        let waveform = dcs_filtered_waveform(0o023, 58, 10_000, 0);
        assert_eq!(waveform.len(), 2 + 58 * WAVE_SAMPLES_PER_BIT + 1);
    }

    #[test]
    fn test_tone_block_amplitude() {
        let block = tone_block(100.0, 400.0).unwrap();
        let max = block.samples().iter().copied().max().unwrap();
        assert!(max <= 400 && max > 390);
    }
}
