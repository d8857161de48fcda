/*!
 * Buffer Types
 * Error and statistics types for the bounded buffer
 */

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Rejected at construction: a buffer with zero slots could never complete a
/// put or a get.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("bounded buffer capacity must be greater than zero")]
pub struct CapacityError;

/// Errors returned by the get family of operations
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GetError {
    /// Non-blocking get found no buffered item
    #[error("buffer is empty")]
    Empty,

    /// Timed get hit its deadline with the buffer still empty
    #[error("timed out waiting for an item")]
    Timeout,

    /// Buffer closed and fully drained
    #[error("buffer is closed")]
    Closed,
}

/// Errors returned by the put family of operations
///
/// Every variant carries the rejected item so callers recover it instead of
/// losing it on the error path.
pub enum PutError<T> {
    /// Non-blocking put found the buffer at capacity
    Full(T),
    /// Timed put hit its deadline with the buffer still full
    Timeout(T),
    /// Buffer closed for writes
    Closed(T),
}

impl<T> PutError<T> {
    /// Recover the item this operation rejected
    pub fn into_inner(self) -> T {
        match self {
            PutError::Full(item) | PutError::Timeout(item) | PutError::Closed(item) => item,
        }
    }

    /// True when the buffer was at capacity (non-blocking put only)
    pub fn is_full(&self) -> bool {
        matches!(self, PutError::Full(_))
    }

    /// True when the wait hit its deadline
    pub fn is_timeout(&self) -> bool {
        matches!(self, PutError::Timeout(_))
    }

    /// True when the buffer was closed
    pub fn is_closed(&self) -> bool {
        matches!(self, PutError::Closed(_))
    }
}

// Manual impls keep `T` free of Debug/Display bounds; the payload is the
// caller's item, not part of the error message.
impl<T> fmt::Debug for PutError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PutError::Full(_) => f.write_str("Full(..)"),
            PutError::Timeout(_) => f.write_str("Timeout(..)"),
            PutError::Closed(_) => f.write_str("Closed(..)"),
        }
    }
}

impl<T> fmt::Display for PutError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PutError::Full(_) => f.write_str("buffer is full"),
            PutError::Timeout(_) => f.write_str("timed out waiting for space"),
            PutError::Closed(_) => f.write_str("buffer is closed"),
        }
    }
}

impl<T> std::error::Error for PutError<T> {}

/// Point-in-time view of buffer state
///
/// Captured under the buffer lock, so the fields are mutually consistent at
/// the moment of the snapshot. They may be stale by the time the caller
/// inspects them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BufferStats {
    /// Fixed capacity the buffer was created with
    pub capacity: usize,
    /// Items currently buffered
    pub occupied: usize,
    /// Whether close has been called
    pub closed: bool,
    /// Producers currently blocked waiting for space
    pub waiting_producers: usize,
    /// Consumers currently blocked waiting for an item
    pub waiting_consumers: usize,
    /// Items accepted since construction
    pub total_enqueued: u64,
    /// Items handed out since construction
    pub total_dequeued: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_put_error_recovers_item() {
        let err = PutError::Full(vec![1, 2, 3]);
        assert!(err.is_full());
        assert_eq!(err.into_inner(), vec![1, 2, 3]);
    }

    #[test]
    fn test_put_error_messages_omit_payload() {
        // The payload may be huge or unprintable, only the kind is shown
        let err: PutError<u64> = PutError::Timeout(7);
        assert_eq!(err.to_string(), "timed out waiting for space");
        assert_eq!(format!("{:?}", err), "Timeout(..)");
    }

    #[test]
    fn test_get_error_display() {
        assert_eq!(GetError::Empty.to_string(), "buffer is empty");
        assert_eq!(GetError::Closed.to_string(), "buffer is closed");
    }

    #[test]
    fn test_stats_serialize_round_trip() {
        let stats = BufferStats {
            capacity: 8,
            occupied: 3,
            closed: false,
            waiting_producers: 0,
            waiting_consumers: 1,
            total_enqueued: 10,
            total_dequeued: 7,
        };
        let json = serde_json::to_string(&stats).unwrap();
        let back: BufferStats = serde_json::from_str(&json).unwrap();
        assert_eq!(stats, back);
    }
}
