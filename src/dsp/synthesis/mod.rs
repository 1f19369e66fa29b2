//! Module for signal generation.

use super::*;

pub mod noise_gen;

pub use noise_gen::NoiseGenerator;
