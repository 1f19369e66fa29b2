//! Audio state and processing.

use super::*;
use crate::dsp::*;

use nannou_audio::Buffer;

pub mod context;
pub mod model;
pub mod process;

pub use context::AudioContext;
pub use model::*;
pub use process::process;
