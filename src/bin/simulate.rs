//! Signal simulator
//!
//! Writes a WAV file containing a clean or noisy CTCSS tone or a DCS NRZ
//! stream in the engine's sample domain, for exercising the detector
//! without radio hardware.
//!
//! **Usage**:
//! ```bash
//! cargo run --bin simulate -- out.wav tone 103.5 [--noise 50]
//! cargo run --bin simulate -- out.wav dcs 023 [--noise 50]
//! ```

use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};
use std::env;
use std::process;
use subtone::simulation::synth;
use subtone::tables::{BLOCK_SIZE, SAMPLE_RATE};

/// Number of blocks to synthesize (~1.4 s)
const NUM_BLOCKS: usize = 3;

fn usage(prog: &str) -> ! {
    eprintln!("Usage: {} <out.wav> tone <freq_hz> [--noise <sigma>]", prog);
    eprintln!("       {} <out.wav> dcs <octal_code> [--noise <sigma>]", prog);
    process::exit(1);
}

fn main() {
    subtone::tracing_init::init_tracing();

    let args: Vec<String> = env::args().collect();
    if args.len() < 4 {
        usage(&args[0]);
    }
    let out_path = &args[1];
    let kind = &args[2];

    let mut noise_sigma = 0.0f64;
    if args.len() >= 6 && args[4] == "--noise" {
        noise_sigma = args[5].parse().unwrap_or_else(|_| usage(&args[0]));
    }

    let len = NUM_BLOCKS * BLOCK_SIZE;
    let mut samples: Vec<i32> = match kind.as_str() {
        "tone" => {
            let freq: f64 = args[3].parse().unwrap_or_else(|_| usage(&args[0]));
            println!("Synthesizing {:.1} Hz tone", freq);
            synth::tone_samples(freq, 400.0, len)
        }
        "dcs" => {
            let code = u16::from_str_radix(&args[3], 8).unwrap_or_else(|_| usage(&args[0]));
            if code > 0o777 {
                usage(&args[0]);
            }
            println!("Synthesizing DCS {:03o} (codeword {:#08x})", code, synth::dcs_codeword(code));
            synth::dcs_nrz_samples(code, 400, 0, len)
        }
        _ => usage(&args[0]),
    };

    if noise_sigma > 0.0 {
        let mut rng = StdRng::seed_from_u64(1);
        let normal = Normal::new(0.0, noise_sigma).unwrap();
        for s in samples.iter_mut() {
            *s += libm::round(normal.sample(&mut rng)) as i32;
        }
    }

    let spec = hound::WavSpec {
        channels: 1,
        sample_rate: SAMPLE_RATE as u32,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };
    let mut writer = match hound::WavWriter::create(out_path, spec) {
        Ok(w) => w,
        Err(e) => {
            eprintln!("Error creating WAV '{}': {}", out_path, e);
            process::exit(1);
        }
    };

    // Centered 10-bit domain back up to 16-bit PCM
    for &s in &samples {
        let pcm = (s.clamp(-512, 511) << 6) as i16;
        if let Err(e) = writer.write_sample(pcm) {
            eprintln!("Error writing sample: {}", e);
            process::exit(1);
        }
    }
    if let Err(e) = writer.finalize() {
        eprintln!("Error finalizing WAV: {}", e);
        process::exit(1);
    }

    println!("Wrote {} samples to {}", samples.len(), out_path);
}
