//! Command-line arguments.

use super::*;
use clap::Parser;
use std::num::NonZeroUsize;

/// Stepped noise generator with a live step-time slider.
#[derive(Parser, Debug, Clone)]
#[command(name = "crackle", version, about)]
pub struct Arguments {
    /// Sample rate requested from the output device, in Hz
    #[arg(long, default_value_t = DEFAULT_SAMPLE_RATE, value_parser = clap::value_parser!(u32).range(1..))]
    pub sample_rate: u32,

    /// Initial step time, clamped to the slider's range
    #[arg(long, default_value_t = DEFAULT_STEP_TIME)]
    pub step_time: f64,

    /// Seed for reproducible noise (random when omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Frames per device buffer, at least 1 (device default when omitted)
    #[arg(long)]
    pub frames_per_buffer: Option<NonZeroUsize>,
}
