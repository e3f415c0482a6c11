//! Metric instruments and the registry that groups them
//!
//! [`MetricRegistry`] is the unit the shared cache hands out. It knows nothing
//! about names at the cache level or about exporting.

pub mod registry;
pub mod types;

pub use registry::MetricRegistry;
pub use types::{Counter, Gauge, Histogram, Timer, DEFAULT_LATENCY_BUCKETS_MS};

#[cfg(test)]
mod tests;
