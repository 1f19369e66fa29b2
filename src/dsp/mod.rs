//! Digital signal processors and utilities.

use crate::prelude::*;

pub mod synthesis;

pub use synthesis::NoiseGenerator;
