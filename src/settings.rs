//! Global constants.

/// The default sample rate requested from the output device, in Hz.
pub const DEFAULT_SAMPLE_RATE: u32 = 4400;

/// The number of output channels requested from the device. Every channel
/// receives the same sample.
pub const NUM_CHANNELS: usize = 1;

/// The capacity of the generator's scratch buffer, in samples. Device buffers
/// larger than this are filled in several passes.
pub const MAX_BUFFER_SIZE: usize = 2048;

/// The lower bound of the step time parameter.
pub const STEP_TIME_MIN: f64 = 1.0;

/// The upper bound of the step time parameter.
pub const STEP_TIME_MAX: f64 = 200.0;

/// The step time used at startup.
pub const DEFAULT_STEP_TIME: f64 = 3.0;

/// The smallest step time the generator will divide by. The parameter range
/// already excludes anything below [`STEP_TIME_MIN`]; this only keeps a stray
/// zero or negative value from producing infinite increments.
pub const MIN_GUARDED_STEP_TIME: f64 = 1.0e-3;

/// Exclusive upper bound of a random target's magnitude (10 bits).
pub const NOISE_LEVEL_RANGE: i16 = 1 << 10;

/// A convenience struct to allow `WINDOW_SIZE` to have `x` and `y` fields.
pub struct V2 {
    pub x: f32,
    pub y: f32,
}

/// The size of the application's window in display units.
pub const WINDOW_SIZE: V2 = V2 { x: 800.0, y: 600.0 };

pub const WINDOW_TITLE: &str = "White noise";

pub const FONT_SIZE: u32 = 18;

/// Colours, as `0xRRGGBBAA`.
pub const BACKGROUND_COLOR: u32 = 0x1F1F_28FF;
pub const TEXT_COLOR: u32 = 0xFFFF_FFFF;
pub const SLIDER_COLOR: u32 = 0x3636_46FF;
pub const SLIDER_GRIP_COLOR: u32 = 0x7694_6AFF;
pub const SLIDER_GRIP_DRAGGING_COLOR: u32 = 0x5E76_55FF;

/// Step time slider geometry, in pixels from the window's top-left corner.
pub const SLIDER_X: f32 = 100.0;
pub const SLIDER_Y: f32 = 100.0;
pub const SLIDER_LEN: f32 = 200.0;
pub const SLIDER_THICKNESS: f32 = 5.0;
/// Half the side length of the square grip.
pub const SLIDER_GRIP_SIZE: f32 = 10.0;
pub const SLIDER_TEXT_LEFT_PADDING: f32 = 15.0;

/// Distance of the play/pause label from the top of the window.
pub const STATUS_TEXT_TOP: f32 = 5.0;
