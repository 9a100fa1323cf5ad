//! Synthetic signal generation
//!
//! Host-side signal synthesis for tests and the simulator binary: clean
//! and noisy CTCSS tone blocks, DCS NRZ blocks, and pre-shaped baseband
//! waveforms for driving the bit synchronizer directly.

pub mod synth;
