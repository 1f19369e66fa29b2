//! Contextual audio data.

use super::*;

/// Everything needed to build an [`AudioModel`], shared or copied from the UI
/// side.
#[derive(Debug, Clone)]
pub struct AudioContext {
    /// The sample rate the generator is built for.
    pub sample_rate: u32,
    /// The UI's handle to the step time.
    pub step_time: StepTimeParam,
    /// The UI's handle to the play/pause state.
    pub transport: TransportRef,
    /// Fixed noise seed, if reproducible output was requested.
    pub seed: Option<u64>,
}

impl AudioContext {
    pub fn new(sample_rate: u32, step_time: StepTimeParam, seed: Option<u64>) -> Self {
        Self {
            sample_rate,
            step_time,
            transport: Arc::new(Atomic::new(Transport::Playing)),
            seed,
        }
    }
}
