//! Metric instruments

use std::sync::atomic::{AtomicI64, AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;

/// Default histogram bucket bounds, tuned for latencies in milliseconds
pub const DEFAULT_LATENCY_BUCKETS_MS: [f64; 11] = [
    5.0, 10.0, 25.0, 50.0, 100.0, 250.0, 500.0, 1000.0, 2500.0, 5000.0, 10000.0,
];

/// Monotonic count. Clones share one cell.
#[derive(Debug, Default, Clone)]
pub struct Counter(Arc<AtomicU64>);

impl Counter {
    /// Detached counter at zero
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one
    pub fn inc(&self) {
        self.inc_by(1);
    }

    /// Add `n`
    pub fn inc_by(&self, n: u64) {
        self.0.fetch_add(n, Ordering::Relaxed);
    }

    /// Current count
    #[must_use]
    pub fn get(&self) -> u64 {
        self.0.load(Ordering::Relaxed)
    }
}

/// Point-in-time level, e.g. open connections or queue depth
#[derive(Debug, Default, Clone)]
pub struct Gauge(Arc<AtomicI64>);

impl Gauge {
    /// Detached gauge at zero
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the level
    pub fn set(&self, value: i64) {
        self.0.store(value, Ordering::Relaxed);
    }

    /// Move the level by `delta`, which may be negative
    pub fn add(&self, delta: i64) {
        self.0.fetch_add(delta, Ordering::Relaxed);
    }

    /// Current level
    #[must_use]
    pub fn get(&self) -> i64 {
        self.0.load(Ordering::Relaxed)
    }
}

#[derive(Debug)]
struct HistogramInner {
    bounds: Vec<f64>,
    buckets: Vec<AtomicU64>,
    // f64 bits
    sum: AtomicU64,
    count: AtomicU64,
}

/// Cumulative bucketed distribution
#[derive(Debug, Clone)]
pub struct Histogram {
    inner: Arc<HistogramInner>,
}

impl Histogram {
    /// Histogram with [`DEFAULT_LATENCY_BUCKETS_MS`]
    #[must_use]
    pub fn new() -> Self {
        Self::with_buckets(DEFAULT_LATENCY_BUCKETS_MS.to_vec())
    }

    /// Histogram with custom upper bounds. Bounds are sorted ascending.
    #[must_use]
    pub fn with_buckets(mut bounds: Vec<f64>) -> Self {
        bounds.sort_by(f64::total_cmp);
        let buckets = bounds.iter().map(|_| AtomicU64::new(0)).collect();

        Self {
            inner: Arc::new(HistogramInner {
                bounds,
                buckets,
                sum: AtomicU64::new(0f64.to_bits()),
                count: AtomicU64::new(0),
            }),
        }
    }

    /// Record one observation
    pub fn observe(&self, value: f64) {
        let inner = &self.inner;
        let _ = inner
            .sum
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |bits| {
                Some((f64::from_bits(bits) + value).to_bits())
            });
        inner.count.fetch_add(1, Ordering::Relaxed);

        for (bound, bucket) in inner.bounds.iter().zip(&inner.buckets) {
            if value <= *bound {
                bucket.fetch_add(1, Ordering::Relaxed);
            }
        }
    }

    /// Number of observations
    #[must_use]
    pub fn count(&self) -> u64 {
        self.inner.count.load(Ordering::Relaxed)
    }

    /// Sum of all observations
    #[must_use]
    pub fn sum(&self) -> f64 {
        f64::from_bits(self.inner.sum.load(Ordering::Relaxed))
    }

    /// `(upper bound, cumulative count)` pairs in ascending bound order
    #[must_use]
    pub fn bucket_counts(&self) -> Vec<(f64, u64)> {
        self.inner
            .bounds
            .iter()
            .zip(&self.inner.buckets)
            .map(|(bound, count)| (*bound, count.load(Ordering::Relaxed)))
            .collect()
    }
}

impl Default for Histogram {
    fn default() -> Self {
        Self::new()
    }
}

/// Measures a duration and feeds it into a [`Histogram`]
pub struct Timer {
    start: Instant,
}

impl Timer {
    /// Start timing now
    #[must_use]
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Elapsed milliseconds so far
    #[must_use]
    pub fn elapsed_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }

    /// Stop and record the elapsed milliseconds
    pub fn observe_duration(self, histogram: &Histogram) {
        histogram.observe(self.elapsed_ms());
    }
}
