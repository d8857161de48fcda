/*!
 * Ring Storage
 * Fixed-capacity circular queue over a boxed slice; not thread-safe on its own
 */

/// Circular FIFO storage with explicit read/write indices
///
/// Holds the fields the monitor lock guards: `front` (next slot to read),
/// `rear` (next slot to write) and `count` (occupied slots). The backing
/// slice never reallocates after construction, so capacity is fixed for the
/// lifetime of the ring.
pub(super) struct Ring<T> {
    slots: Box<[Option<T>]>,
    front: usize,
    rear: usize,
    count: usize,
}

impl<T> Ring<T> {
    /// Create a ring with `capacity` slots. Callers validate capacity > 0.
    pub fn new(capacity: usize) -> Self {
        debug_assert!(capacity > 0);
        let mut slots = Vec::with_capacity(capacity);
        slots.resize_with(capacity, || None);
        Self {
            slots: slots.into_boxed_slice(),
            front: 0,
            rear: 0,
            count: 0,
        }
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.count
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.count == self.slots.len()
    }

    /// Append at `rear`. Returns `Err(item)` when the ring is full so the
    /// caller keeps ownership of the rejected item.
    pub fn enqueue(&mut self, item: T) -> Result<(), T> {
        if self.is_full() {
            return Err(item);
        }
        debug_assert!(
            self.slots[self.rear].is_none(),
            "write index points at an occupied slot"
        );
        self.slots[self.rear] = Some(item);
        self.rear = (self.rear + 1) % self.slots.len();
        self.count += 1;
        Ok(())
    }

    /// Remove from `front`. Returns `None` when the ring is empty.
    pub fn dequeue(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let item = self.slots[self.front].take();
        debug_assert!(item.is_some(), "read index points at an empty slot");
        self.front = (self.front + 1) % self.slots.len();
        self.count -= 1;
        item
    }
}
