/*!
 * Bounded Buffer Model Tests
 *
 * Property-based comparison against a VecDeque reference model: any sequence
 * of non-blocking operations must leave the buffer and the model in
 * agreement, with occupancy never exceeding capacity
 */

use bounded_buffer::{BoundedBuffer, GetError};
use proptest::prelude::*;
use std::collections::VecDeque;

proptest! {
    #[test]
    fn buffer_agrees_with_vecdeque_model(
        capacity in 1usize..8,
        ops in proptest::collection::vec(any::<(bool, u8)>(), 0..200),
    ) {
        let buffer = BoundedBuffer::new(capacity).unwrap();
        let mut model: VecDeque<u8> = VecDeque::new();

        for (is_put, value) in ops {
            if is_put {
                match buffer.try_put(value) {
                    Ok(()) => model.push_back(value),
                    Err(err) => {
                        prop_assert!(err.is_full());
                        prop_assert_eq!(err.into_inner(), value);
                        prop_assert_eq!(model.len(), capacity);
                    }
                }
            } else {
                match buffer.try_get() {
                    Ok(got) => prop_assert_eq!(Some(got), model.pop_front()),
                    Err(err) => {
                        prop_assert_eq!(err, GetError::Empty);
                        prop_assert!(model.is_empty());
                    }
                }
            }

            prop_assert_eq!(buffer.len(), model.len());
            prop_assert!(buffer.len() <= buffer.capacity());
        }

        // Whatever is left drains in model order
        while let Some(expected) = model.pop_front() {
            prop_assert_eq!(buffer.try_get().unwrap(), expected);
        }
        prop_assert!(buffer.is_empty());
    }

    #[test]
    fn closed_buffer_drains_model_contents_in_order(
        capacity in 1usize..8,
        values in proptest::collection::vec(any::<u8>(), 0..16),
    ) {
        let buffer = BoundedBuffer::new(capacity).unwrap();
        let mut model: VecDeque<u8> = VecDeque::new();

        for value in values {
            if buffer.try_put(value).is_ok() {
                model.push_back(value);
            }
        }

        buffer.close();

        // Close never drops buffered items
        while let Some(expected) = model.pop_front() {
            prop_assert_eq!(buffer.get().unwrap(), expected);
        }
        prop_assert_eq!(buffer.get().unwrap_err(), GetError::Closed);
    }
}
