//! The whole app's state.

use super::args::Arguments;
use super::audio::*;
use super::ui::{color, Slider};
use super::view::view;
use super::*;
use clap::Parser;
use nannou::prelude::WindowId as Id;
use nannou_audio::Stream;
use tracing::{error, info};

mod constructors;
use constructors::*;

/// The app's model, i.e. its state.
pub struct Model {
    _window: Id,

    /// The CPAL audio stream.
    pub audio_stream: Stream<AudioModel>,

    /// The UI's handle to the step time.
    pub step_time: StepTimeParam,
    /// The UI's handle to the play/pause state, shared with the audio thread.
    pub transport: TransportRef,

    pub slider: Slider,
}

impl Model {
    /// Builds the app's `Model`.
    ///
    /// Any platform failure here is fatal: it is logged and the process
    /// exits with a non-zero status.
    pub fn build(app: &App) -> Self {
        let args = Arguments::parse();

        match Self::try_build(app, &args) {
            Ok(model) => model,
            Err(e) => {
                error!("{e}");
                std::process::exit(1);
            }
        }
    }

    fn try_build(app: &App, args: &Arguments) -> Result<Self, AppError> {
        let step_time = StepTimeParam::new(args.step_time);
        let context = AudioContext::new(args.sample_rate, step_time.clone(), args.seed);

        let window = build_window(app, WINDOW_SIZE.x as u32, WINDOW_SIZE.y as u32)?;
        let AudioSystem { stream, transport } = build_audio_system(&context, args)?;

        info!(step_time = step_time.get(), "noise generator running");

        Ok(Self {
            _window: window,
            audio_stream: stream,
            slider: Slider::new(step_time.clone()),
            step_time,
            transport,
        })
    }

    /// Flips between playing and paused, pausing or resuming the stream to
    /// match.
    ///
    /// The shared state is switched before the stream so that a callback
    /// racing the pause renders silence instead of advancing the generator.
    /// If the device refuses, the state is rolled back.
    pub fn toggle_playback(&mut self) {
        let state = self.transport.lr().toggled();
        self.transport.sr(state);

        let result = if state.is_playing() {
            self.audio_stream
                .play()
                .map_err(|e| AppError::StreamPlay(e.to_string()))
        }
        else {
            self.audio_stream
                .pause()
                .map_err(|e| AppError::StreamPause(e.to_string()))
        };

        match result {
            Ok(()) => info!(%state, "transport changed"),
            Err(e) => {
                error!("{e}");
                self.transport.sr(state.toggled());
            }
        }
    }

    pub fn transport(&self) -> Transport {
        self.transport.lr()
    }
}

impl Drawable for Model {
    fn draw(&self, draw: &Draw, frame: &Frame) {
        let r = frame.rect();
        let label_h = FONT_SIZE as f32 * 2.0;

        draw.text(self.transport().label())
            .x_y(0.0, r.top() - STATUS_TEXT_TOP - label_h * 0.5)
            .wh(vec2(r.w(), label_h))
            .justify(text::Justify::Center)
            .font_size(FONT_SIZE)
            .color(color(TEXT_COLOR));

        self.slider.draw(draw, frame);
    }
}
