/*!
 * Producer/Consumer Demo - Main Entry Point
 *
 * Drives one shared bounded buffer with:
 * - Producer threads pushing tagged integers
 * - Consumer threads draining them on fixed quotas
 * - Atomic counters tallying both sides
 */

use bounded_buffer::core::limits::{
    DEFAULT_BUFFER_CAPACITY, DEFAULT_CONSUMERS, DEFAULT_ITEMS_PER_PRODUCER, DEFAULT_PRODUCERS,
    MAX_BUFFER_CAPACITY,
};
use bounded_buffer::{init_tracing, AtomicCounter, BoundedBuffer};
use std::sync::Arc;
use std::thread;
use tracing::{error, info};

/// Demo workload, loaded from the environment
#[derive(Debug, Clone)]
struct WorkloadConfig {
    capacity: usize,
    producers: usize,
    consumers: usize,
    items_per_producer: usize,
}

impl Default for WorkloadConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_BUFFER_CAPACITY,
            producers: DEFAULT_PRODUCERS,
            consumers: DEFAULT_CONSUMERS,
            items_per_producer: DEFAULT_ITEMS_PER_PRODUCER,
        }
    }
}

impl WorkloadConfig {
    /// Read overrides from BUFFER_* environment variables
    fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            capacity: env_usize("BUFFER_CAPACITY", defaults.capacity).min(MAX_BUFFER_CAPACITY),
            producers: env_usize("BUFFER_PRODUCERS", defaults.producers).max(1),
            consumers: env_usize("BUFFER_CONSUMERS", defaults.consumers).max(1),
            items_per_producer: env_usize("BUFFER_ITEMS_PER_PRODUCER", defaults.items_per_producer),
        }
    }

    /// Total number of items that will flow through the buffer
    fn total_items(&self) -> usize {
        self.producers * self.items_per_producer
    }
}

fn env_usize(name: &str, default: usize) -> usize {
    std::env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

/// Tag a produced value with its producer id so consumers can tell streams
/// apart: high 32 bits are the producer, low 32 bits are the sequence.
#[inline]
fn tag(producer: usize, seq: u64) -> u64 {
    ((producer as u64) << 32) | seq
}

fn main() {
    // Initialize structured tracing
    init_tracing();

    let config = WorkloadConfig::from_env();
    info!(?config, "Producer/consumer demo starting");

    let buffer = match BoundedBuffer::<u64>::new(config.capacity) {
        Ok(buffer) => Arc::new(buffer),
        Err(e) => {
            error!(error = %e, "Invalid buffer capacity");
            std::process::exit(1);
        }
    };

    let produced = Arc::new(AtomicCounter::new());
    let consumed = Arc::new(AtomicCounter::new());

    let mut handles = Vec::with_capacity(config.producers + config.consumers);

    for id in 0..config.producers {
        let buffer = buffer.clone();
        let produced = produced.clone();
        let items = config.items_per_producer;
        handles.push(thread::spawn(move || {
            for seq in 0..items as u64 {
                if buffer.put(tag(id, seq)).is_err() {
                    error!(producer = id, seq, "Buffer closed before workload finished");
                    return;
                }
                produced.increment();
            }
            info!(producer = id, items, "Producer finished");
        }));
    }

    // Split the gets across consumers; the first ones take the remainder
    let total = config.total_items();
    let base = total / config.consumers;
    let remainder = total % config.consumers;

    for id in 0..config.consumers {
        let buffer = buffer.clone();
        let consumed = consumed.clone();
        let quota = base + usize::from(id < remainder);
        handles.push(thread::spawn(move || {
            let mut sum = 0u64;
            for _ in 0..quota {
                match buffer.get() {
                    Ok(value) => {
                        sum = sum.wrapping_add(value & 0xFFFF_FFFF);
                        consumed.increment();
                    }
                    Err(e) => {
                        error!(consumer = id, error = %e, "Get failed");
                        return;
                    }
                }
            }
            info!(consumer = id, quota, sum, "Consumer finished");
        }));
    }

    for handle in handles {
        if handle.join().is_err() {
            error!("Worker thread panicked");
        }
    }

    buffer.close();

    let stats = buffer.stats();
    info!(
        produced = produced.get(),
        consumed = consumed.get(),
        total_enqueued = stats.total_enqueued,
        total_dequeued = stats.total_dequeued,
        occupied = stats.occupied,
        "Demo complete"
    );
}
