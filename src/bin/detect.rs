//! Sub-audible tone detector, file edition
//!
//! Reads a mono 16-bit WAV recorded at the 8601.6 Hz analysis rate
//! (nominal) and runs each 4000-sample block through the detection
//! pipeline, reporting PL tones and DCS codes as the hardware would.
//!
//! **Usage**:
//! ```bash
//! cargo run --bin detect -- input.wav [--invert] [--full-decode] [--dump-scores]
//! ```

use std::env;
use std::process;
use subtone::tables::{BLOCK_SIZE, TONES};
use subtone::{pipeline, AliasMode, DetectorConfig, SampleBlock};

fn main() {
    subtone::tracing_init::init_tracing();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: {} <input.wav> [--invert] [--full-decode] [--dump-scores]", args[0]);
        eprintln!();
        eprintln!("Detects CTCSS tones and DCS codes in a mono 16-bit WAV");
        eprintln!("recorded at 8601.6 Hz ({} samples per block).", BLOCK_SIZE);
        process::exit(1);
    }

    let input_path = &args[1];
    let mut config = DetectorConfig::default();
    for flag in &args[2..] {
        match flag.as_str() {
            "--invert" => {
                config.toggle_invert();
            }
            "--full-decode" => config.set_alias_mode(AliasMode::FullDecode),
            "--dump-scores" => config.set_dump_scores(true),
            other => {
                eprintln!("Unknown flag: {}", other);
                process::exit(1);
            }
        }
    }

    let mut reader = match hound::WavReader::open(input_path) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Error opening WAV '{}': {}", input_path, e);
            process::exit(1);
        }
    };

    let spec = reader.spec();
    if spec.channels != 1 || spec.bits_per_sample != 16 {
        eprintln!(
            "Expected mono 16-bit WAV, got {} channels at {} bits",
            spec.channels, spec.bits_per_sample
        );
        process::exit(1);
    }
    println!("Reading {} ({} Hz)", input_path, spec.sample_rate);

    // Scale 16-bit PCM down to the centered 10-bit ADC domain
    let samples: Vec<i32> = reader
        .samples::<i16>()
        .filter_map(|s| s.ok())
        .map(|s| (s >> 6) as i32)
        .collect();
    println!("  {} samples, {} full blocks", samples.len(), samples.len() / BLOCK_SIZE);

    for (n, chunk) in samples.chunks_exact(BLOCK_SIZE).enumerate() {
        let block = match SampleBlock::from_centered(chunk.to_vec()) {
            Ok(b) => b,
            Err(e) => {
                eprintln!("Block {}: {}", n, e);
                process::exit(1);
            }
        };

        let result = pipeline::run(&block, &mut config);
        match (result.dcs_code, result.tone) {
            (Some(code), _) => println!("Block {:3}: DCS {:03o}", n, code),
            (None, Some(index)) => println!("Block {:3}: PL {}", n, TONES[index].name),
            (None, None) => println!("Block {:3}: none", n),
        }
    }
}
