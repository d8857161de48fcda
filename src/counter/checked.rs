/*!
 * Checked Counter
 * Mutex-protected counter whose decrement rejects underflow
 */

use super::types::CounterError;
use parking_lot::Mutex;

/// Thread-safe non-negative counter
///
/// Decrementing at zero is reported as an explicit
/// [`CounterError::Underflow`] value rather than a panic, so callers can
/// react without unwinding. The value is untouched on the error path.
#[derive(Debug, Default)]
pub struct CheckedCounter {
    value: Mutex<u64>,
}

impl CheckedCounter {
    /// Create a counter starting at zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one and return the new value
    pub fn increment(&self) -> u64 {
        let mut value = self.value.lock();
        *value += 1;
        *value
    }

    /// Subtract one and return the new value
    ///
    /// Fails with `Underflow` when the counter is already at zero.
    pub fn decrement(&self) -> Result<u64, CounterError> {
        let mut value = self.value.lock();
        if *value == 0 {
            return Err(CounterError::Underflow);
        }
        *value -= 1;
        Ok(*value)
    }

    /// Current value
    pub fn value(&self) -> u64 {
        *self.value.lock()
    }
}
