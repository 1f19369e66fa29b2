//! App constructors.

use super::*;
use tracing::warn;

/// Builds the app window.
pub fn build_window(app: &App, width: u32, height: u32) -> Result<Id, AppError> {
    app.new_window()
        .size(width, height)
        .resizable(false)
        .key_pressed(keys::key_pressed)
        .view(view)
        .title(WINDOW_TITLE)
        .build()
        .map_err(|e| AppError::WindowBuild(format!("{e:?}")))
}

pub struct AudioSystem {
    pub(super) stream: Stream<AudioModel>,
    pub(super) transport: TransportRef,
}

/// Builds and starts the audio stream.
///
/// If the device rejects the requested sample rate, the stream is reopened at
/// the device's default rate. Segment lengths are counted in samples, so only
/// the pitch of the noise changes.
pub fn build_audio_system(
    context: &AudioContext,
    args: &Arguments,
) -> Result<AudioSystem, AppError> {
    let audio_host = nannou_audio::Host::new();

    let stream = match open_stream(&audio_host, context, Some(context.sample_rate), args) {
        Ok(stream) => stream,
        Err(e) => {
            warn!(
                sample_rate = context.sample_rate,
                "{e}, retrying at the device's default rate"
            );
            open_stream(&audio_host, context, None, args)?
        }
    };

    stream.play().map_err(|e| AppError::StreamPlay(e.to_string()))?;

    Ok(AudioSystem {
        stream,
        transport: Arc::clone(&context.transport),
    })
}

fn open_stream(
    host: &nannou_audio::Host,
    context: &AudioContext,
    sample_rate: Option<u32>,
    args: &Arguments,
) -> Result<Stream<AudioModel>, AppError> {
    let mut builder = host
        .new_output_stream(AudioModel::build(context))
        .render(audio::process)
        .channels(NUM_CHANNELS);

    if let Some(sample_rate) = sample_rate {
        builder = builder.sample_rate(sample_rate);
    }
    if let Some(frames) = args.frames_per_buffer {
        builder = builder.frames_per_buffer(frames.get());
    }

    builder
        .build()
        .map_err(|e| AppError::StreamBuild(e.to_string()))
}
