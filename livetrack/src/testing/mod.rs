//! Testing utilities for code built on the live view.
//!
//! This module provides:
//! - Recording metrics and plots readers with configurable outcomes
//! - Assertions for live view results

mod assertions;
mod mocks;

pub use assertions::{
    assert_has_plot, assert_metric, assert_metrics_absent, assert_metrics_found,
};
pub use mocks::{PlotsCall, RecordingMetricsReader, RecordingPlotsReader};
