//! Project-wide exports for easy access.

pub use crate::app::params::{StepTimeParam, Transport};
pub use crate::error::AppError;
pub use crate::settings::*;
pub use crate::util::*;
pub use atomic::Atomic;
pub use atomic_float::AtomicF64;
pub use std::sync::Arc;

/// Shared handle to the play/pause state.
pub type TransportRef = Arc<Atomic<Transport>>;
