//! Test assertions for live view results.

use crate::live::{LiveShow, MetricsLookup};

/// Asserts that summary metrics were found.
pub fn assert_metrics_found(show: &LiveShow) {
    assert!(
        show.metrics.is_found(),
        "Expected summary metrics, got {:?}",
        show.metrics
    );
}

/// Asserts that no summary metrics were found.
pub fn assert_metrics_absent(show: &LiveShow) {
    assert_eq!(
        show.metrics,
        MetricsLookup::NotFound,
        "Expected no summary metrics"
    );
}

/// Asserts that a metric has the expected value.
pub fn assert_metric(show: &LiveShow, scope: &str, name: &str, expected: &serde_json::Value) {
    let actual = show.metrics.found().and_then(|m| m.get(scope, name));
    assert_eq!(
        actual,
        Some(expected),
        "Expected value {:?} for metric '{}' in '{}', got {:?}",
        expected,
        name,
        scope,
        actual
    );
}

/// Asserts that a plot was discovered.
pub fn assert_has_plot(show: &LiveShow, plot: &str) {
    assert!(
        show.plots.contains(plot),
        "Expected plot '{}', found: {:?}",
        plot,
        show.plots.plots().collect::<Vec<_>>()
    );
}
