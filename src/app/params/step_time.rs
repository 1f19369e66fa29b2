use super::*;
use tracing::{debug, warn};

/// The step time parameter, shared between the UI (writer) and the audio
/// thread (reader).
///
/// The value lives in a single [`AtomicF64`], so a reader only ever observes
/// a value that was fully published by a writer. Nothing here locks or
/// blocks. Cloning the handle shares the same slot.
#[derive(Debug, Clone)]
pub struct StepTimeParam {
    value: Arc<AtomicF64>,
}

impl StepTimeParam {
    /// Creates a new parameter, clamping `initial` to the valid range.
    pub fn new(initial: f64) -> Self {
        let param = Self { value: Arc::new(AtomicF64::new(DEFAULT_STEP_TIME)) };
        param.set(initial);
        param
    }

    /// Clamps `value` to `[STEP_TIME_MIN, STEP_TIME_MAX]` and publishes it,
    /// returning the published value.
    ///
    /// A NaN is discarded and the previously published value is returned.
    pub fn set(&self, value: f64) -> f64 {
        if value.is_nan() {
            warn!("ignoring NaN step time");
            return self.get();
        }

        let clamped = value.clamp(STEP_TIME_MIN, STEP_TIME_MAX);
        if clamped != value {
            debug!(requested = value, published = clamped, "step time clamped");
        }

        self.value.sr(clamped);
        clamped
    }

    /// The most recently published value.
    pub fn get(&self) -> f64 {
        self.value.lr()
    }

    /// The current value mapped to `0.0 - 1.0` over the parameter range.
    pub fn normalized(&self) -> f64 {
        normalize(self.get(), STEP_TIME_MIN, STEP_TIME_MAX)
    }
}

impl Default for StepTimeParam {
    fn default() -> Self {
        Self::new(DEFAULT_STEP_TIME)
    }
}
