/*!
 * Core Module
 * Shared infrastructure: limits and tracing setup
 */

pub mod limits;
pub mod tracer;

// Re-export for convenience
pub use tracer::init_tracing;
