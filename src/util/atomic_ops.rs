//! Shorthand atomic load and store operations for the shared parameter types.
use atomic::Atomic;
use atomic_float::AtomicF64;
use bytemuck::NoUninit;
use std::sync::atomic::Ordering::Relaxed;

/// Trait for shorthand implementation of Relaxed atomic load and store operations.
pub trait AtomicOps: Default {
    type NonAtomic: Default;

    /// Shorthand method for `self.load(Relaxed)`.
    fn lr(&self) -> Self::NonAtomic;
    /// Shorthand method for `self.store(value, Relaxed)`.
    fn sr(&self, value: Self::NonAtomic);
}

impl AtomicOps for AtomicF64 {
    type NonAtomic = f64;

    fn lr(&self) -> Self::NonAtomic {
        self.load(Relaxed)
    }

    fn sr(&self, value: Self::NonAtomic) {
        self.store(value, Relaxed);
    }
}

impl<T: Default + Copy + NoUninit> AtomicOps for Atomic<T> {
    type NonAtomic = T;

    fn lr(&self) -> Self::NonAtomic {
        self.load(Relaxed)
    }

    fn sr(&self, value: Self::NonAtomic) {
        self.store(value, Relaxed);
    }
}
