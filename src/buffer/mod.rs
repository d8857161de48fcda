/*!
 * Bounded Buffer Module
 *
 * Fixed-capacity FIFO shared by producer and consumer threads, with blocking
 * backpressure in both directions.
 *
 * # Architecture
 *
 * The classic two-condition monitor: one mutex guards the ring state, a
 * "space available" condition gates producers and an "item available"
 * condition gates consumers. Every wait rechecks its predicate in a loop,
 * which makes wakeup races and batched notifications harmless.
 */

mod bounded;
mod ring;
mod types;

pub use bounded::BoundedBuffer;
pub use types::{BufferStats, CapacityError, GetError, PutError};
