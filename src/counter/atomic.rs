/*!
 * Atomic Counter
 * Lock-free counter over a single atomic integer
 */

use std::sync::atomic::{AtomicI64, Ordering};

/// Thread-safe counter with no locking
///
/// Each update is a single atomic read-modify-write. Relaxed ordering is
/// enough: the counter publishes no other data, and readers that need an
/// exact final total synchronize through `join`.
#[derive(Debug, Default)]
pub struct AtomicCounter {
    value: AtomicI64,
}

impl AtomicCounter {
    /// Create a counter starting at zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one and return the new value
    #[inline]
    pub fn increment(&self) -> i64 {
        self.value.fetch_add(1, Ordering::Relaxed) + 1
    }

    /// Subtract one and return the new value
    ///
    /// Unlike [`CheckedCounter`](super::CheckedCounter), the value may go
    /// negative.
    #[inline]
    pub fn decrement(&self) -> i64 {
        self.value.fetch_sub(1, Ordering::Relaxed) - 1
    }

    /// Current value
    #[inline]
    pub fn get(&self) -> i64 {
        self.value.load(Ordering::Relaxed)
    }
}
