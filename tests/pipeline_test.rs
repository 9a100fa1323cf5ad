//! End-to-end tests for the detection pipeline
//!
//! Drives the public API the way the firmware loop would: one conditioned
//! block per cycle, config threaded through every call.

use subtone::dcs::{self, golay, resolver};
use subtone::simulation::synth;
use subtone::tables::{BLOCK_SIZE, LOS_ALTOS_MAP, TONES};
use subtone::tracing_init::init_test_tracing;
use subtone::{pipeline, AliasMode, DetectorConfig, SampleBlock};

#[test]
fn silence_detects_nothing() {
    init_test_tracing();
    let block = SampleBlock::from_centered(vec![0; BLOCK_SIZE]).unwrap();
    let mut config = DetectorConfig::default();
    let result = pipeline::run(&block, &mut config);
    assert_eq!(result.tone, None);
    assert_eq!(result.dcs_code, None);
}

#[test]
fn noise_detects_nothing() {
    init_test_tracing();
    let block = synth::noise_block(100.0, 99).unwrap();
    let mut config = DetectorConfig::default();
    let result = pipeline::run(&block, &mut config);
    assert!(!result.is_detection());
}

#[test]
fn every_pl_tone_is_detected_at_its_own_index() {
    init_test_tracing();
    let mut config = DetectorConfig::default();
    // Entry 0 is the reserved DCS EOT frequency; every real PL entry must
    // come back under its own index
    for index in 1..TONES.len() {
        let freq: f64 = TONES[index].name.parse().unwrap();
        let block = synth::tone_block(freq, 400.0).unwrap();
        let result = pipeline::run(&block, &mut config);
        assert_eq!(result.tone, Some(index), "tone {}", TONES[index].name);
        assert_eq!(result.dcs_code, None);
    }
}

#[test]
fn reserved_tone_never_reports() {
    init_test_tracing();
    let block = synth::tone_block(134.4, 500.0).unwrap();
    let mut config = DetectorConfig::default();
    let result = pipeline::run(&block, &mut config);
    assert_eq!(result.tone, None);
}

#[test]
fn dcs_code_survives_the_full_chain() {
    init_test_tracing();
    let mut config = DetectorConfig::default();
    for &code in &[0o023u16, 0o116, 0o411, 0o731] {
        let block = synth::dcs_block(code, 400, 0).unwrap();
        let result = pipeline::run(&block, &mut config);
        assert_eq!(
            result.dcs_code,
            Some(LOS_ALTOS_MAP[code as usize]),
            "code {:03o}",
            code
        );
        assert_eq!(result.tone, None, "code {:03o} misread as a tone", code);
    }
}

#[test]
fn dcs_decodes_at_any_bit_phase() {
    init_test_tracing();
    let mut config = DetectorConfig::default();
    for phase in 0..23 {
        let block = synth::dcs_block(0o023, 400, phase).unwrap();
        let result = pipeline::run(&block, &mut config);
        assert_eq!(result.dcs_code, Some(LOS_ALTOS_MAP[0o023]), "phase {}", phase);
    }
}

#[test]
fn synthetic_filtered_waveform_resolves_los_altos() {
    init_test_tracing();
    // Bypass the FIR stage: drive the synchronizer with an ideal baseband
    // waveform for 023 and resolve under Los Altos numbering
    let waveform = synth::dcs_filtered_waveform(0o023, 58, 10_000, 0);
    let raw = dcs::recover_bits(&waveform, -10_000, 10_000, 0).unwrap();
    assert!(golay::valid(raw));
    let code = resolver::resolve(raw, AliasMode::LosAltos).unwrap();
    assert_eq!(code, LOS_ALTOS_MAP[0o023]);
}

#[test]
fn inverted_dcs_round_trips() {
    init_test_tracing();
    // Synthesize an inverted transmission; with the invert mask armed the
    // recovered complement word is unmasked back to the true code before
    // resolution. (The complement passes validation because the all-ones
    // vector is itself a Golay codeword.)
    let samples: Vec<i32> = synth::dcs_nrz_samples(0o023, 400, 0, BLOCK_SIZE)
        .into_iter()
        .map(|s| -s)
        .collect();
    let block = SampleBlock::from_centered(samples).unwrap();

    let mut config = DetectorConfig::default();
    config.toggle_invert();
    let result = pipeline::run(&block, &mut config);
    assert_eq!(result.dcs_code, Some(LOS_ALTOS_MAP[0o023]));
}

#[test]
fn identical_inputs_give_identical_results() {
    init_test_tracing();
    let block = synth::dcs_block(0o023, 400, 5).unwrap();
    let mut config_a = DetectorConfig::default();
    let mut config_b = DetectorConfig::default();
    let first = pipeline::run(&block, &mut config_a);
    let second = pipeline::run(&block, &mut config_b);
    assert_eq!(first, second);
    // And again with the same config value, despite display bookkeeping
    let third = pipeline::run(&block, &mut config_a);
    assert_eq!(first, third);
}

#[test]
fn undersized_block_is_rejected() {
    init_test_tracing();
    // Shorter than the FIR kernel could ever cover; the constructor
    // rejects it instead of letting the filter index out of range
    let result = SampleBlock::from_centered(vec![0; 200]);
    assert!(result.is_err());
    let message = result.unwrap_err().to_string();
    assert!(message.contains("4000"), "unexpected message: {}", message);
}
