/*!
 * Counter Types
 * Error type shared by the counter primitives
 */

use thiserror::Error;

/// Counter operation errors
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterError {
    /// Decrement requested with the counter already at zero
    #[error("counter is at zero and cannot go negative")]
    Underflow,
}
