//! Named instrument registry

use std::collections::BTreeSet;

use dashmap::DashMap;

use super::types::{Counter, Gauge, Histogram};

/// A named collection of counters, gauges and histograms.
///
/// Instruments are created on first use. Each kind has its own namespace, so
/// a counter and a gauge may share a name.
#[derive(Debug, Default)]
pub struct MetricRegistry {
    counters: DashMap<String, Counter>,
    gauges: DashMap<String, Gauge>,
    histograms: DashMap<String, Histogram>,
}

impl MetricRegistry {
    /// Create an empty registry
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get or create a counter
    pub fn counter(&self, name: &str) -> Counter {
        if let Some(counter) = self.counters.get(name) {
            return counter.value().clone();
        }
        self.counters.entry(name.to_string()).or_default().value().clone()
    }

    /// Get or create a gauge
    pub fn gauge(&self, name: &str) -> Gauge {
        if let Some(gauge) = self.gauges.get(name) {
            return gauge.value().clone();
        }
        self.gauges.entry(name.to_string()).or_default().value().clone()
    }

    /// Get or create a histogram with default latency buckets
    pub fn histogram(&self, name: &str) -> Histogram {
        if let Some(histogram) = self.histograms.get(name) {
            return histogram.value().clone();
        }
        self.histograms
            .entry(name.to_string())
            .or_default()
            .value()
            .clone()
    }

    /// Sorted snapshot of every instrument name
    #[must_use]
    pub fn names(&self) -> BTreeSet<String> {
        self.counters
            .iter()
            .map(|e| e.key().clone())
            .chain(self.gauges.iter().map(|e| e.key().clone()))
            .chain(self.histograms.iter().map(|e| e.key().clone()))
            .collect()
    }

    /// Drop every instrument registered under `name`.
    ///
    /// Returns `true` if anything was removed. Handles already held by callers
    /// keep working but are no longer reachable through the registry.
    pub fn remove(&self, name: &str) -> bool {
        let counter = self.counters.remove(name).is_some();
        let gauge = self.gauges.remove(name).is_some();
        let histogram = self.histograms.remove(name).is_some();
        counter || gauge || histogram
    }

    /// Number of instruments across all kinds
    #[must_use]
    pub fn len(&self) -> usize {
        self.counters.len() + self.gauges.len() + self.histograms.len()
    }

    /// Whether no instrument has been created yet
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
