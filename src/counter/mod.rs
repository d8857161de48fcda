/*!
 * Counter Module
 * Thread-safe counters: lock-protected with checked decrement, and atomic
 */

mod atomic;
mod checked;
mod types;

pub use atomic::AtomicCounter;
pub use checked::CheckedCounter;
pub use types::CounterError;
