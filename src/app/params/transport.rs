use super::*;
use bytemuck::NoUninit;
use std::fmt::{Display, Formatter, Result};

/// Whether the noise generator is currently producing audio.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[repr(u8)]
pub enum Transport {
    #[default]
    Playing,
    Paused,
}

impl Transport {
    /// Returns the opposite state.
    pub const fn toggled(self) -> Self {
        match self {
            Self::Playing => Self::Paused,
            Self::Paused => Self::Playing,
        }
    }

    pub const fn is_playing(self) -> bool {
        matches!(self, Self::Playing)
    }

    /// Whether the generator may advance its phase and draw new levels.
    pub const fn should_advance(self) -> bool {
        self.is_playing()
    }

    /// The on-screen status label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Playing => "PLAYING",
            Self::Paused => "PAUSED",
        }
    }
}

impl Display for Transport {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}", self.label())
    }
}

unsafe impl NoUninit for Transport {}
