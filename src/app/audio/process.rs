//! Audio processing callback.

use super::*;

/// The main audio processing callback.
pub fn process(audio: &mut AudioModel, buffer: &mut Buffer<f32>) {
    let channels = buffer.channels();
    render(audio, buffer, channels);
}

/// Fills interleaved `f32` frames with noise.
///
/// While paused this writes silence and leaves the generator alone, so
/// playback resumes mid-segment exactly where it stopped.
pub fn render(audio: &mut AudioModel, out: &mut [f32], channels: usize) {
    if channels == 0 {
        return;
    }

    if !audio.transport.lr().should_advance() {
        out.fill(0.0);
        return;
    }

    let step_time = audio.step_time.get();
    let AudioModel { generator, scratch, .. } = audio;

    // device buffers larger than the scratch space are filled in passes
    for chunk in out.chunks_mut(scratch.len() * channels) {
        let num_frames = chunk.len() / channels;
        let samples = &mut scratch[..num_frames];
        generator.fill(samples, step_time);

        for (frame, &sample) in chunk.chunks_mut(channels).zip(samples.iter()) {
            frame.fill(i16_to_f32(sample));
        }
    }
}
