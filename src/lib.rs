/*!
 * Bounded Buffer Library
 * Blocking bounded FIFO and thread-safe counters built on the monitor pattern
 */

pub mod buffer;
pub mod core;
pub mod counter;

// Re-exports
pub use buffer::{BoundedBuffer, BufferStats, CapacityError, GetError, PutError};
pub use counter::{AtomicCounter, CheckedCounter, CounterError};
pub use self::core::init_tracing;
