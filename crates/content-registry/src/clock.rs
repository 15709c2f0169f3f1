//! Logical time for the registry.
//!
//! Records are stamped with a logical height rather than wall-clock time.
//! The embedding environment decides what a height means (block number,
//! batch index); the registry only requires that it never goes backwards.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// A monotonically non-decreasing source of logical heights.
pub trait Clock: Send + Sync {
    /// The current height.
    fn now(&self) -> u64;
}

/// An atomic height counter, advanced by the environment.
///
/// Starts at 0 unless built with [`starting_at`](BlockClock::starting_at),
/// and only ever moves forward.
#[derive(Debug, Default)]
pub struct BlockClock {
    height: AtomicU64,
}

impl BlockClock {
    /// A clock starting at height 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// A clock starting at the given height.
    pub fn starting_at(height: u64) -> Self {
        Self {
            height: AtomicU64::new(height),
        }
    }

    /// Advance by one height; returns the new height.
    pub fn advance(&self) -> u64 {
        self.height.fetch_add(1, Ordering::SeqCst) + 1
    }
}

impl Clock for BlockClock {
    fn now(&self) -> u64 {
        self.height.load(Ordering::SeqCst)
    }
}

// Shared clocks: the environment usually keeps a handle to advance while the
// registry holds one to read.
impl<C: Clock + ?Sized> Clock for Arc<C> {
    fn now(&self) -> u64 {
        (**self).now()
    }
}
