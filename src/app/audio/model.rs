//! The app's audio state model.

use super::*;

/// The audio thread's state. Moved into the output stream; the only fields
/// the UI can reach are the shared parameter handles.
pub struct AudioModel {
    /// The noise generator. Its phase, levels and random source are only
    /// ever touched from the audio callback.
    pub generator: NoiseGenerator,
    /// Read once per callback.
    pub step_time: StepTimeParam,
    /// Checked once per callback.
    pub transport: TransportRef,
    /// Preallocated so the callback never allocates.
    pub scratch: Vec<i16>,
}

impl AudioModel {
    /// Builds the audio model from the shared context.
    pub fn build(context: &AudioContext) -> Self {
        let sample_rate = <f64 as From<_>>::from(context.sample_rate);
        let generator = context.seed.map_or_else(
            || NoiseGenerator::from_entropy(sample_rate),
            |seed| NoiseGenerator::from_seed(sample_rate, seed),
        );

        Self {
            generator,
            step_time: context.step_time.clone(),
            transport: Arc::clone(&context.transport),
            scratch: vec![0; MAX_BUFFER_SIZE],
        }
    }
}
