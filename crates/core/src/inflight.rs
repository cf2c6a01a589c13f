//! In-flight calculation counter
//!
//! An atomically-shared non-negative counter owned by the service and
//! injected into the interceptor. Mutations happen only in matched
//! increment/decrement pairs, one pair per business call; the decrement
//! saturates at zero so an unpaired call can never drive the published
//! gauge negative.

use std::sync::atomic::{AtomicU64, Ordering};

/// Count of business calculations currently executing inside the wrapper.
#[derive(Debug, Default)]
pub struct InFlightCounter {
    // SeqCst so the values published to the gauge are totally ordered
    active: AtomicU64,
}

impl InFlightCounter {
    /// Create a counter starting at zero.
    #[must_use]
    pub const fn new() -> Self {
        Self { active: AtomicU64::new(0) }
    }

    /// Increment and return the new count.
    pub fn increment(&self) -> u64 {
        self.active.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Decrement (saturating at zero) and return the new count.
    pub fn decrement(&self) -> u64 {
        self.active
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |value| {
                Some(value.saturating_sub(1))
            })
            .map_or(0, |previous| previous.saturating_sub(1))
    }

    /// Current count.
    #[must_use]
    pub fn current(&self) -> u64 {
        self.active.load(Ordering::SeqCst)
    }
}
