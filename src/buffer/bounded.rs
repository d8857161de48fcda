/*!
 * Bounded Buffer
 *
 * Two-condition monitor over the ring storage: one mutex guards all shared
 * state, `not_full` gates producers and `not_empty` gates consumers.
 *
 * # Design
 *
 * The lock is held for the body of every operation. A thread that finds its
 * predicate false releases the lock atomically as it parks and holds it
 * again before the recheck, so no update can slip between "looked empty" and
 * "went to sleep". Predicates are always rechecked in a loop; a woken thread
 * may find another consumer got there first and simply parks again.
 *
 * Each successful put wakes at most one consumer and each successful get
 * wakes at most one producer. Waiter counts are kept under the lock, so the
 * wake is skipped entirely when nobody is parked. `close` is the one place
 * that wakes everyone: every parked thread must observe the flag and leave.
 */

use super::ring::Ring;
use super::types::{BufferStats, CapacityError, GetError, PutError};
use parking_lot::{Condvar, Mutex};
use std::fmt;
use std::time::{Duration, Instant};
use tracing::debug;

/// State guarded by the monitor lock
struct Shared<T> {
    ring: Ring<T>,
    closed: bool,
    /// Producers currently parked in `put`/`put_timeout`
    waiting_producers: usize,
    /// Consumers currently parked in `get`/`get_timeout`
    waiting_consumers: usize,
    total_enqueued: u64,
    total_dequeued: u64,
}

/// Fixed-capacity blocking FIFO shared by producer and consumer threads
///
/// `put` blocks while the buffer is full and `get` blocks while it is empty,
/// so a slow consumer throttles its producers and vice versa. Items come out
/// in exactly the order they went in. Which of several blocked threads wins
/// a slot is unspecified.
///
/// Share the buffer by wrapping it in an [`Arc`](std::sync::Arc); all
/// methods take `&self`.
///
/// # Examples
///
/// ```
/// use bounded_buffer::BoundedBuffer;
/// use std::sync::Arc;
/// use std::thread;
///
/// let buffer = Arc::new(BoundedBuffer::new(2).unwrap());
///
/// let producer = {
///     let buffer = buffer.clone();
///     thread::spawn(move || {
///         for i in 0..10u64 {
///             buffer.put(i).unwrap();
///         }
///     })
/// };
///
/// for expected in 0..10u64 {
///     assert_eq!(buffer.get().unwrap(), expected);
/// }
/// producer.join().unwrap();
/// ```
#[repr(C, align(64))]
pub struct BoundedBuffer<T> {
    shared: Mutex<Shared<T>>,
    /// Signaled after each successful get: space became available
    not_full: Condvar,
    /// Signaled after each successful put: an item became available
    not_empty: Condvar,
    capacity: usize,
}

impl<T> BoundedBuffer<T> {
    /// Create a buffer with room for `capacity` items
    ///
    /// Zero capacity is rejected: such a buffer could never accept or yield
    /// an item.
    pub fn new(capacity: usize) -> Result<Self, CapacityError> {
        if capacity == 0 {
            return Err(CapacityError);
        }
        debug!(capacity, "bounded buffer created");
        Ok(Self {
            shared: Mutex::new(Shared {
                ring: Ring::new(capacity),
                closed: false,
                waiting_producers: 0,
                waiting_consumers: 0,
                total_enqueued: 0,
                total_dequeued: 0,
            }),
            not_full: Condvar::new(),
            not_empty: Condvar::new(),
            capacity,
        })
    }

    /// Append `item`, blocking while the buffer is full
    ///
    /// Blocks indefinitely when no consumer ever frees a slot; use
    /// [`put_timeout`](Self::put_timeout) for a bounded wait. Fails only
    /// when the buffer is closed, handing the item back.
    pub fn put(&self, mut item: T) -> Result<(), PutError<T>> {
        let mut shared = self.shared.lock();
        loop {
            if shared.closed {
                return Err(PutError::Closed(item));
            }
            match shared.ring.enqueue(item) {
                Ok(()) => break,
                Err(rejected) => {
                    item = rejected;
                    shared.waiting_producers += 1;
                    self.not_full.wait(&mut shared);
                    shared.waiting_producers -= 1;
                }
            }
        }
        shared.total_enqueued += 1;
        let wake = shared.waiting_consumers > 0;
        drop(shared);
        if wake {
            self.not_empty.notify_one();
        }
        Ok(())
    }

    /// Remove the oldest item, blocking while the buffer is empty
    ///
    /// A closed buffer still drains in FIFO order; `Closed` is reported only
    /// once it is empty.
    pub fn get(&self) -> Result<T, GetError> {
        let mut shared = self.shared.lock();
        loop {
            if let Some(item) = shared.ring.dequeue() {
                shared.total_dequeued += 1;
                let wake = shared.waiting_producers > 0;
                drop(shared);
                if wake {
                    self.not_full.notify_one();
                }
                return Ok(item);
            }
            if shared.closed {
                return Err(GetError::Closed);
            }
            shared.waiting_consumers += 1;
            self.not_empty.wait(&mut shared);
            shared.waiting_consumers -= 1;
        }
    }

    /// Like [`put`](Self::put), but gives up once `timeout` has elapsed
    ///
    /// The deadline is fixed up front, so repeated wakeups cannot extend the
    /// wait. A wake that races the deadline still wins: the predicate is
    /// rechecked under the lock before `Timeout` is reported. A `timeout`
    /// too large to represent as a deadline waits without bound, like
    /// [`put`](Self::put).
    pub fn put_timeout(&self, mut item: T, timeout: Duration) -> Result<(), PutError<T>> {
        // Saturates: no representable deadline means an untimed wait
        let deadline = Instant::now().checked_add(timeout);
        let mut timed_out = false;
        let mut shared = self.shared.lock();
        loop {
            if shared.closed {
                return Err(PutError::Closed(item));
            }
            match shared.ring.enqueue(item) {
                Ok(()) => break,
                Err(rejected) => item = rejected,
            }
            if timed_out {
                return Err(PutError::Timeout(item));
            }
            shared.waiting_producers += 1;
            timed_out = match deadline {
                Some(deadline) => self.not_full.wait_until(&mut shared, deadline).timed_out(),
                None => {
                    self.not_full.wait(&mut shared);
                    false
                }
            };
            shared.waiting_producers -= 1;
        }
        shared.total_enqueued += 1;
        let wake = shared.waiting_consumers > 0;
        drop(shared);
        if wake {
            self.not_empty.notify_one();
        }
        Ok(())
    }

    /// Like [`get`](Self::get), but gives up once `timeout` has elapsed
    ///
    /// Deadline semantics match [`put_timeout`](Self::put_timeout).
    pub fn get_timeout(&self, timeout: Duration) -> Result<T, GetError> {
        let deadline = Instant::now().checked_add(timeout);
        let mut timed_out = false;
        let mut shared = self.shared.lock();
        loop {
            if let Some(item) = shared.ring.dequeue() {
                shared.total_dequeued += 1;
                let wake = shared.waiting_producers > 0;
                drop(shared);
                if wake {
                    self.not_full.notify_one();
                }
                return Ok(item);
            }
            if shared.closed {
                return Err(GetError::Closed);
            }
            if timed_out {
                return Err(GetError::Timeout);
            }
            shared.waiting_consumers += 1;
            timed_out = match deadline {
                Some(deadline) => self.not_empty.wait_until(&mut shared, deadline).timed_out(),
                None => {
                    self.not_empty.wait(&mut shared);
                    false
                }
            };
            shared.waiting_consumers -= 1;
        }
    }

    /// Append without blocking
    pub fn try_put(&self, item: T) -> Result<(), PutError<T>> {
        let mut shared = self.shared.lock();
        if shared.closed {
            return Err(PutError::Closed(item));
        }
        match shared.ring.enqueue(item) {
            Ok(()) => {
                shared.total_enqueued += 1;
                let wake = shared.waiting_consumers > 0;
                drop(shared);
                if wake {
                    self.not_empty.notify_one();
                }
                Ok(())
            }
            Err(rejected) => Err(PutError::Full(rejected)),
        }
    }

    /// Remove the oldest item without blocking
    pub fn try_get(&self) -> Result<T, GetError> {
        let mut shared = self.shared.lock();
        match shared.ring.dequeue() {
            Some(item) => {
                shared.total_dequeued += 1;
                let wake = shared.waiting_producers > 0;
                drop(shared);
                if wake {
                    self.not_full.notify_one();
                }
                Ok(item)
            }
            None if shared.closed => Err(GetError::Closed),
            None => Err(GetError::Empty),
        }
    }

    /// Close the buffer for writes and wake every waiter
    ///
    /// Idempotent. Blocked producers fail with `Closed` and keep their item;
    /// blocked consumers drain whatever is buffered, then fail with
    /// `Closed`.
    pub fn close(&self) {
        let mut shared = self.shared.lock();
        if shared.closed {
            return;
        }
        shared.closed = true;
        let occupied = shared.ring.len();
        drop(shared);
        self.not_full.notify_all();
        self.not_empty.notify_all();
        debug!(occupied, "bounded buffer closed");
    }

    /// Capacity the buffer was created with
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of buffered items at this instant
    #[inline]
    pub fn len(&self) -> usize {
        self.shared.lock().ring.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.shared.lock().ring.is_empty()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.shared.lock().ring.is_full()
    }

    /// Whether [`close`](Self::close) has been called
    #[inline]
    pub fn is_closed(&self) -> bool {
        self.shared.lock().closed
    }

    /// Consistent snapshot of buffer state, taken under the lock
    pub fn stats(&self) -> BufferStats {
        let shared = self.shared.lock();
        BufferStats {
            capacity: self.capacity,
            occupied: shared.ring.len(),
            closed: shared.closed,
            waiting_producers: shared.waiting_producers,
            waiting_consumers: shared.waiting_consumers,
            total_enqueued: shared.total_enqueued,
            total_dequeued: shared.total_dequeued,
        }
    }
}

impl<T> fmt::Debug for BoundedBuffer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let shared = self.shared.lock();
        f.debug_struct("BoundedBuffer")
            .field("capacity", &self.capacity)
            .field("occupied", &shared.ring.len())
            .field("closed", &shared.closed)
            .finish()
    }
}
