//! Parameters shared between the UI and the audio thread.

mod step_time;
mod transport;

pub use step_time::StepTimeParam;
pub use transport::Transport;

use crate::prelude::*;
