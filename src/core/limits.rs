/*!
 * Limits and Defaults
 *
 * Centralized location for capacity limits and workload defaults.
 * All values include rationale comments explaining WHY they exist.
 */

use std::time::Duration;

// =============================================================================
// BUFFER LIMITS
// =============================================================================

/// Default bounded buffer capacity (200 slots)
/// Matches the workload the demo binary was written against
pub const DEFAULT_BUFFER_CAPACITY: usize = 200;

/// Maximum bounded buffer capacity (1,048,576 slots)
/// Caps what a mistyped environment variable can allocate
pub const MAX_BUFFER_CAPACITY: usize = 1 << 20;

// =============================================================================
// DEMO WORKLOAD DEFAULTS
// =============================================================================

/// Default producer thread count
pub const DEFAULT_PRODUCERS: usize = 2;

/// Default consumer thread count
pub const DEFAULT_CONSUMERS: usize = 3;

/// Default items produced per producer
/// 2 producers x 75 items = 150 gets split across 3 consumers
pub const DEFAULT_ITEMS_PER_PRODUCER: usize = 75;

// =============================================================================
// TEST TUNING
// =============================================================================

/// How long tests observe a parked thread before calling it blocked (50ms)
/// Long enough to be meaningful on a loaded CI machine, short enough to keep
/// suites fast
pub const BLOCK_OBSERVATION_WINDOW: Duration = Duration::from_millis(50);

/// Upper bound on any single wait in tests (5 seconds)
/// A healthy suite never gets near this; hitting it means a lost wakeup
pub const TEST_WAIT_CEILING: Duration = Duration::from_secs(5);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capacity_bounds() {
        assert!(DEFAULT_BUFFER_CAPACITY > 0);
        assert!(DEFAULT_BUFFER_CAPACITY <= MAX_BUFFER_CAPACITY);
    }

    #[test]
    fn test_workload_splits_evenly() {
        // 2 producers x 75 items = 150, shared 50/50/50 by the 3 consumers
        let total = DEFAULT_PRODUCERS * DEFAULT_ITEMS_PER_PRODUCER;
        assert_eq!(total % DEFAULT_CONSUMERS, 0);
    }

    #[test]
    fn test_timing_hierarchy() {
        // The observation window must be far below the ceiling or tests
        // cannot tell "still parked" from "stuck forever"
        assert!(BLOCK_OBSERVATION_WINDOW * 10 < TEST_WAIT_CEILING);
    }
}
