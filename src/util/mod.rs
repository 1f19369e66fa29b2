//! Global utility functions — these are publicly re-exported in `prelude.rs`.

pub mod atomic_ops;
pub mod general;

pub use atomic_ops::AtomicOps;
pub use general::*;
