use super::*;

#[test]
fn test_counter_clones_share_a_cell() {
    let counter = Counter::new();
    assert_eq!(counter.get(), 0);

    let handle = counter.clone();
    handle.inc();
    counter.inc_by(5);
    assert_eq!(counter.get(), 6);
    assert_eq!(handle.get(), 6);
}

#[test]
fn test_gauge_moves_both_ways() {
    let gauge = Gauge::new();
    gauge.set(10);
    gauge.add(3);
    assert_eq!(gauge.get(), 13);

    gauge.add(-4);
    assert_eq!(gauge.get(), 9);
}

#[test]
fn test_histogram_buckets_are_cumulative() {
    let histogram = Histogram::with_buckets(vec![100.0, 10.0, 50.0]);

    histogram.observe(5.0);
    histogram.observe(25.0);
    histogram.observe(75.0);
    histogram.observe(150.0);

    assert_eq!(histogram.count(), 4);
    assert_eq!(histogram.sum(), 255.0);

    let buckets = histogram.bucket_counts();
    assert_eq!(buckets, vec![(10.0, 1), (50.0, 2), (100.0, 3)]);
}

#[test]
fn test_histogram_keeps_negative_sums() {
    let histogram = Histogram::with_buckets(vec![0.0]);
    histogram.observe(-1.5);
    histogram.observe(0.5);
    assert_eq!(histogram.sum(), -1.0);
    assert_eq!(histogram.bucket_counts(), vec![(0.0, 1)]);
}

#[test]
fn test_timer_records_one_observation() {
    let histogram = Histogram::new();
    let timer = Timer::start();
    assert!(timer.elapsed_ms() >= 0.0);
    timer.observe_duration(&histogram);
    assert_eq!(histogram.count(), 1);
}

#[test]
fn test_registry_shares_instruments_by_name() {
    let registry = MetricRegistry::new();

    let counter1 = registry.counter("requests");
    counter1.inc();

    let counter2 = registry.counter("requests");
    assert_eq!(counter2.get(), 1);

    counter2.inc();
    assert_eq!(counter1.get(), 2);

    registry.histogram("latency").observe(12.0);
    assert_eq!(registry.histogram("latency").count(), 1);
}

#[test]
fn test_registry_names_and_remove() {
    let registry = MetricRegistry::new();
    assert!(registry.is_empty());

    let _ = registry.counter("b");
    let _ = registry.gauge("a");
    let _ = registry.histogram("a");

    assert_eq!(registry.len(), 3);
    let names: Vec<_> = registry.names().into_iter().collect();
    assert_eq!(names, vec!["a".to_string(), "b".to_string()]);

    assert!(registry.remove("a"));
    assert!(!registry.remove("a"));
    assert_eq!(registry.len(), 1);
}
